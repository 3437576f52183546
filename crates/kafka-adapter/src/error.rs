use crate::provenance::ProvenanceField;
use message_types::CodecError;
use std::num::ParseIntError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to deserialize message payload: {0}")]
    Deserialization(#[from] CodecError),

    #[error("Message has no metadata")]
    MissingMetadata,

    #[error("Missing metadata field: {0}")]
    MissingField(ProvenanceField),

    #[error("Invalid metadata field {field}: {value:?}")]
    InvalidField {
        field: ProvenanceField,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Kafka error: {0}")]
    Kafka(#[from] rdkafka::error::KafkaError),
}

pub type Result<T> = std::result::Result<T, Error>;
