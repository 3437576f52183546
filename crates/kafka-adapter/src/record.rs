use rdkafka::message::Message as RdkafkaMessage;

/// A record as delivered by the Kafka consumer.
///
/// This is the read-only input of the adapter: the raw payload bytes plus
/// the record's position in the topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportRecord {
    /// Serialized message bytes
    pub payload: Vec<u8>,
    /// Kafka topic
    pub topic: String,
    /// Kafka partition
    pub partition: i32,
    /// Kafka offset within the partition
    pub offset: i64,
}

impl TransportRecord {
    pub fn new(
        topic: impl Into<String>,
        partition: i32,
        offset: i64,
        payload: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            payload: payload.into(),
            topic: topic.into(),
            partition,
            offset,
        }
    }

    /// Copy a record out of any rdkafka message (borrowed or owned).
    ///
    /// A record without a payload (a tombstone) maps to an empty payload.
    pub fn from_kafka<M: RdkafkaMessage>(msg: &M) -> Self {
        Self {
            payload: msg.payload().map(<[u8]>::to_vec).unwrap_or_default(),
            topic: msg.topic().to_string(),
            partition: msg.partition(),
            offset: msg.offset(),
        }
    }
}
