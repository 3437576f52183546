//! Conduction Kafka tooling
//!
//! Command-line helpers around the conduction Kafka adapter: build
//! serialized message fixtures and run the record conversion against payload
//! files, printing the resulting message and its provenance.
//!
//! # CLI Usage
//!
//! ```bash
//! # Wrap raw bytes into a serialized message
//! conduction encode --payload-file body.json --metadata source=sensor-7 --output message.bin
//!
//! # Convert a payload as if it had been read from topic "events", partition 1, offset 500
//! conduction convert --input message.bin --topic events --partition 1 --offset 500
//! ```

use clap::Parser;

pub mod commands;

pub use commands::{convert_file, encode_file, ConvertOutput, MessageView, ProvenanceView};

/// Position of the record being converted
#[derive(Parser, Clone, Debug)]
pub struct RecordOpts {
    /// Kafka topic the record was read from
    #[arg(long, env = "CONDUCTION_TOPIC")]
    pub topic: String,

    /// Kafka partition the record was read from
    #[arg(long, env = "CONDUCTION_PARTITION", allow_hyphen_values = true)]
    pub partition: i32,

    /// Offset of the record within the partition
    #[arg(long, env = "CONDUCTION_OFFSET", allow_hyphen_values = true)]
    pub offset: i64,
}

/// Parse a `key=value` metadata argument.
pub fn parse_metadata_entry(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid metadata entry '{s}': expected key=value"))?;
    if key.is_empty() {
        return Err(format!("invalid metadata entry '{s}': empty key"));
    }
    Ok((key.to_string(), value.to_string()))
}
