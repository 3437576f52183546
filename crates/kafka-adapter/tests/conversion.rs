//! Kafka record conversion tests
//!
//! Exercises the public API the way a consumer loop would: records come in,
//! messages go out, and provenance is read back for bookkeeping.

use conduction_kafka::{
    convert, extract_provenance, Error, Message, ProvenanceField, TransportRecord, OFFSET_KEY,
    PARTITION_KEY, TOPIC_KEY,
};

const TOPIC: &str = "topic";
const PARTITION: i32 = 1;
const OFFSET: i64 = 500;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn serialized_message() -> Vec<u8> {
    Message::new("payload").write_to_bytes().unwrap()
}

fn converted_message() -> Message {
    let record = TransportRecord::new(TOPIC, PARTITION, OFFSET, serialized_message());
    convert(&record).unwrap()
}

#[test]
fn test_convert_valid_record() {
    init_tracing();

    let message = converted_message();
    assert_eq!(message.payload, b"payload");

    let provenance = extract_provenance(&message).unwrap();
    assert_eq!(provenance.topic, TOPIC);
    assert_eq!(provenance.partition, PARTITION);
    assert_eq!(provenance.offset, OFFSET);
}

#[test]
fn test_convert_invalid_record() {
    init_tracing();

    let record = TransportRecord {
        payload: b"some message not Message serialized".to_vec(),
        topic: String::new(),
        partition: 0,
        offset: 0,
    };

    let err = convert(&record).unwrap_err();
    assert!(matches!(err, Error::Deserialization(_)));
}

#[test]
fn test_extract_without_topic() {
    let mut message = converted_message();
    message.metadata.as_mut().unwrap().remove(TOPIC_KEY);

    assert!(matches!(
        extract_provenance(&message),
        Err(Error::MissingField(ProvenanceField::Topic))
    ));
}

#[test]
fn test_extract_without_partition() {
    let mut message = converted_message();
    message.metadata.as_mut().unwrap().remove(PARTITION_KEY);

    assert!(matches!(
        extract_provenance(&message),
        Err(Error::MissingField(ProvenanceField::Partition))
    ));
}

#[test]
fn test_extract_without_offset() {
    let mut message = converted_message();
    message.metadata.as_mut().unwrap().remove(OFFSET_KEY);

    assert!(matches!(
        extract_provenance(&message),
        Err(Error::MissingField(ProvenanceField::Offset))
    ));
}

#[test]
fn test_extract_without_metadata() {
    let mut message = converted_message();
    message.metadata = None;

    assert!(matches!(
        extract_provenance(&message),
        Err(Error::MissingMetadata)
    ));
}

#[test]
fn test_converted_message_survives_reserialization() {
    let message = converted_message();
    let forwarded = Message::parse_from_bytes(&message.write_to_bytes().unwrap()).unwrap();

    assert_eq!(forwarded, message);
    let provenance = extract_provenance(&forwarded).unwrap();
    assert_eq!(provenance.offset, OFFSET);
}
