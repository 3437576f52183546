//! Kafka adapter for conduction messages.
//!
//! Converts Kafka consumer records into transport-agnostic [`Message`]s and
//! records where each message came from, so the routing pipeline can later
//! acknowledge, deduplicate or replay it.
//!
//! ```text
//! Kafka record → decode payload → Message → embed (topic, partition, offset) → pipeline
//! Message → extract provenance → (topic, partition, offset) → commit offsets
//! ```
//!
//! Connection and consumer-group management stay with the caller: this crate
//! only sees records that have already been read.

pub mod ack;
pub mod convert;
pub mod error;

/// Provenance keys and the embed / extract pair
pub mod provenance;

/// The record shape the adapter consumes
pub mod record;

pub use ack::{commit_offsets, message_commit_offsets};
pub use convert::{convert, convert_kafka};
pub use error::{Error, Result};
pub use message_types::Message;
pub use provenance::{
    embed_provenance, extract_provenance, Provenance, ProvenanceField, OFFSET_KEY,
    PARTITION_KEY, TOPIC_KEY,
};
pub use record::TransportRecord;
