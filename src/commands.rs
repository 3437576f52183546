//! File-based commands behind the CLI.

use anyhow::Context;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use conduction_kafka::{convert, extract_provenance, Message, Provenance, TransportRecord};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

use crate::RecordOpts;

/// JSON view of a [`Message`].
#[derive(Debug, Serialize)]
pub struct MessageView {
    /// Base64-encoded payload
    pub payload: String,
    pub metadata: Option<BTreeMap<String, String>>,
}

impl From<&Message> for MessageView {
    fn from(message: &Message) -> Self {
        Self {
            payload: STANDARD.encode(&message.payload),
            metadata: message
                .metadata
                .as_ref()
                .map(|m| m.iter().map(|(k, v)| (k.clone(), v.clone())).collect()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProvenanceView {
    pub topic: String,
    pub partition: i32,
    pub offset: i64,
}

impl From<Provenance> for ProvenanceView {
    fn from(p: Provenance) -> Self {
        Self {
            topic: p.topic,
            partition: p.partition,
            offset: p.offset,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ConvertOutput {
    pub message: MessageView,
    pub provenance: ProvenanceView,
}

/// Wrap the raw bytes of `payload_file` into a serialized message.
///
/// Returns the number of bytes written to `output`.
pub fn encode_file(
    payload_file: &Path,
    metadata: &[(String, String)],
    output: &Path,
) -> anyhow::Result<usize> {
    let payload = std::fs::read(payload_file)
        .with_context(|| format!("Failed to read payload file {}", payload_file.display()))?;

    let mut message = Message::new(payload);
    for (key, value) in metadata {
        message.metadata_mut().insert(key.clone(), value.clone());
    }

    let bytes = message
        .write_to_bytes()
        .context("Failed to serialize message")?;
    std::fs::write(output, &bytes)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    info!("Wrote {} bytes to {}", bytes.len(), output.display());
    Ok(bytes.len())
}

/// Treat the contents of `input` as a record payload at the given position
/// and convert it.
pub fn convert_file(input: &Path, record: &RecordOpts) -> anyhow::Result<ConvertOutput> {
    let payload =
        std::fs::read(input).with_context(|| format!("Failed to read {}", input.display()))?;

    let record = TransportRecord::new(record.topic.clone(), record.partition, record.offset, payload);
    let message = convert(&record)
        .with_context(|| format!("Failed to convert record from {}", input.display()))?;
    let provenance = extract_provenance(&message).context("Failed to read back provenance")?;

    Ok(ConvertOutput {
        message: MessageView::from(&message),
        provenance: provenance.into(),
    })
}
