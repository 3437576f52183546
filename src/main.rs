//! Command-line interface for conduction
//!
//! # Usage Examples
//!
//! ## Build a fixture
//! ```bash
//! conduction encode \
//!   --payload-file body.json \
//!   --metadata source=sensor-7 \
//!   --output message.bin
//! ```
//!
//! ## Convert a payload as a Kafka record
//! ```bash
//! RUST_LOG=debug conduction convert \
//!   --input message.bin \
//!   --topic events --partition 1 --offset 500
//! ```

use anyhow::Context;
use clap::{Parser, Subcommand};
use conduction::{convert_file, encode_file, parse_metadata_entry, RecordOpts};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "conduction")]
#[command(about = "Convert Kafka record payloads into conduction messages")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Wrap raw bytes into a serialized message
    Encode {
        /// File holding the raw payload bytes
        #[arg(long)]
        payload_file: PathBuf,

        /// Metadata entry to attach (format: key=value, repeatable)
        #[arg(long = "metadata", value_name = "KEY=VALUE", value_parser = parse_metadata_entry)]
        metadata: Vec<(String, String)>,

        /// Where to write the serialized message
        #[arg(long)]
        output: PathBuf,
    },
    /// Convert a serialized message as if it had been read from Kafka
    Convert {
        /// File holding the record payload
        #[arg(long)]
        input: PathBuf,

        /// Record position
        #[command(flatten)]
        record: RecordOpts,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Encode {
            payload_file,
            metadata,
            output,
        } => {
            let written = encode_file(&payload_file, &metadata, &output)?;
            println!("Wrote {written} bytes to {}", output.display());
        }
        Commands::Convert { input, record } => {
            let converted = convert_file(&input, &record)?;
            let json = serde_json::to_string_pretty(&converted)
                .context("Failed to render conversion result")?;
            println!("{json}");
        }
    }

    Ok(())
}
