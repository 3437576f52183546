use crate::error::Result;
use crate::provenance::embed_provenance;
use crate::record::TransportRecord;
use message_types::Message;
use tracing::debug;

/// Convert a Kafka record into a message stamped with its provenance.
///
/// The payload is decoded with the message wire codec. Provenance is only
/// embedded once decoding has succeeded.
pub fn convert(record: &TransportRecord) -> Result<Message> {
    let mut message = message_types::decode(&record.payload)?;
    embed_provenance(record, &mut message);

    debug!(
        "Converted record from {}:{} at offset {}",
        record.topic, record.partition, record.offset
    );

    Ok(message)
}

/// Convert an rdkafka message directly.
pub fn convert_kafka<M: rdkafka::message::Message>(msg: &M) -> Result<Message> {
    convert(&TransportRecord::from_kafka(msg))
}
