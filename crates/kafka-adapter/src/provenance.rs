//! Provenance metadata: where in Kafka a message came from.
//!
//! Provenance is stored in the message's string metadata map under three
//! well-known keys. Partition and offset are stored as decimal strings so the
//! map stays string-valued alongside any other metadata the message carries.

use crate::error::{Error, Result};
use crate::record::TransportRecord;
use message_types::Message;
use std::collections::HashMap;
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Metadata key holding the Kafka topic
pub const TOPIC_KEY: &str = "kafka.topic";
/// Metadata key holding the Kafka partition (decimal `i32`)
pub const PARTITION_KEY: &str = "kafka.partition";
/// Metadata key holding the Kafka offset (decimal `i64`)
pub const OFFSET_KEY: &str = "kafka.offset";

/// One of the three provenance metadata fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProvenanceField {
    Topic,
    Partition,
    Offset,
}

impl ProvenanceField {
    /// The metadata key this field is stored under.
    pub fn key(&self) -> &'static str {
        match self {
            ProvenanceField::Topic => TOPIC_KEY,
            ProvenanceField::Partition => PARTITION_KEY,
            ProvenanceField::Offset => OFFSET_KEY,
        }
    }
}

impl fmt::Display for ProvenanceField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// The (topic, partition, offset) position of a record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Provenance {
    pub topic: String,
    pub partition: i32,
    pub offset: i64,
}

impl From<&TransportRecord> for Provenance {
    fn from(record: &TransportRecord) -> Self {
        Self {
            topic: record.topic.clone(),
            partition: record.partition,
            offset: record.offset,
        }
    }
}

/// Write the record's position into the message metadata.
///
/// Creates the metadata map if it is absent, overwrites the three
/// provenance keys and leaves every other key untouched.
pub fn embed_provenance(record: &TransportRecord, message: &mut Message) {
    let metadata = message.metadata_mut();
    metadata.insert(TOPIC_KEY.to_string(), record.topic.clone());
    metadata.insert(PARTITION_KEY.to_string(), record.partition.to_string());
    metadata.insert(OFFSET_KEY.to_string(), record.offset.to_string());
}

/// Read the record position back out of the message metadata.
///
/// Fields are checked in order topic, partition, offset and the first
/// failure is returned.
pub fn extract_provenance(message: &Message) -> Result<Provenance> {
    let metadata = message.metadata.as_ref().ok_or(Error::MissingMetadata)?;

    let topic = metadata
        .get(TOPIC_KEY)
        .ok_or(Error::MissingField(ProvenanceField::Topic))?
        .clone();
    let partition = parse_field::<i32>(metadata, ProvenanceField::Partition)?;
    let offset = parse_field::<i64>(metadata, ProvenanceField::Offset)?;

    Ok(Provenance {
        topic,
        partition,
        offset,
    })
}

fn parse_field<T>(metadata: &HashMap<String, String>, field: ProvenanceField) -> Result<T>
where
    T: FromStr<Err = ParseIntError>,
{
    let value = metadata
        .get(field.key())
        .ok_or(Error::MissingField(field))?;
    value.parse().map_err(|source| Error::InvalidField {
        field,
        value: value.clone(),
        source,
    })
}
