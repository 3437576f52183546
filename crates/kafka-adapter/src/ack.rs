//! Offsets to commit once messages have been handled.
//!
//! Kafka expects the committed offset to be the position of the next record
//! to read, so every offset here is the last handled offset plus one.

use crate::error::Result;
use crate::provenance::{extract_provenance, Provenance};
use message_types::Message;
use rdkafka::{Offset, TopicPartitionList};
use std::collections::BTreeMap;

/// Build the commit list for a batch of handled records.
///
/// Only the highest offset per (topic, partition) is kept.
pub fn commit_offsets<'a, I>(provenances: I) -> Result<TopicPartitionList>
where
    I: IntoIterator<Item = &'a Provenance>,
{
    let mut latest: BTreeMap<(&str, i32), i64> = BTreeMap::new();
    for provenance in provenances {
        latest
            .entry((provenance.topic.as_str(), provenance.partition))
            .and_modify(|offset| *offset = (*offset).max(provenance.offset))
            .or_insert(provenance.offset);
    }

    let mut tpl = TopicPartitionList::new();
    for ((topic, partition), offset) in latest {
        tpl.add_partition_offset(topic, partition, Offset::Offset(offset.saturating_add(1)))?;
    }

    Ok(tpl)
}

/// Build the commit list from converted messages.
///
/// Fails with the first provenance extraction error.
pub fn message_commit_offsets(messages: &[Message]) -> Result<TopicPartitionList> {
    let provenances = messages
        .iter()
        .map(extract_provenance)
        .collect::<Result<Vec<_>>>()?;
    commit_offsets(&provenances)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::provenance::{embed_provenance, ProvenanceField, OFFSET_KEY};
    use crate::record::TransportRecord;

    fn provenance(topic: &str, partition: i32, offset: i64) -> Provenance {
        Provenance {
            topic: topic.to_string(),
            partition,
            offset,
        }
    }

    fn committed(tpl: &TopicPartitionList, topic: &str, partition: i32) -> Option<Offset> {
        tpl.find_partition(topic, partition).map(|elem| elem.offset())
    }

    #[test]
    fn test_commit_offsets_keeps_highest_per_partition() {
        let batch = vec![
            provenance("events", 0, 10),
            provenance("events", 0, 12),
            provenance("events", 0, 11),
            provenance("events", 1, 3),
            provenance("audit", 0, 99),
        ];

        let tpl = commit_offsets(&batch).unwrap();
        assert_eq!(tpl.count(), 3);
        assert_eq!(committed(&tpl, "events", 0), Some(Offset::Offset(13)));
        assert_eq!(committed(&tpl, "events", 1), Some(Offset::Offset(4)));
        assert_eq!(committed(&tpl, "audit", 0), Some(Offset::Offset(100)));
    }

    #[test]
    fn test_commit_offsets_empty_batch() {
        let batch: Vec<Provenance> = Vec::new();
        let tpl = commit_offsets(&batch).unwrap();
        assert_eq!(tpl.count(), 0);
    }

    #[test]
    fn test_commit_offsets_saturates_at_max() {
        let batch = vec![provenance("events", 0, i64::MAX)];
        let tpl = commit_offsets(&batch).unwrap();
        assert_eq!(
            committed(&tpl, "events", 0),
            Some(Offset::Offset(i64::MAX))
        );
    }

    #[test]
    fn test_message_commit_offsets() {
        let messages: Vec<Message> = [("events", 0, 5), ("events", 0, 6), ("events", 2, 1)]
            .into_iter()
            .map(|(topic, partition, offset)| {
                let mut msg = Message::new("payload");
                embed_provenance(
                    &TransportRecord::new(topic, partition, offset, Vec::new()),
                    &mut msg,
                );
                msg
            })
            .collect();

        let tpl = message_commit_offsets(&messages).unwrap();
        assert_eq!(committed(&tpl, "events", 0), Some(Offset::Offset(7)));
        assert_eq!(committed(&tpl, "events", 2), Some(Offset::Offset(2)));
    }

    #[test]
    fn test_message_commit_offsets_propagates_extraction_error() {
        let mut good = Message::new("payload");
        embed_provenance(&TransportRecord::new("events", 0, 1, Vec::new()), &mut good);
        let mut bad = good.clone();
        bad.metadata_mut().remove(OFFSET_KEY);

        let result = message_commit_offsets(&[good, bad]);
        assert!(matches!(
            result,
            Err(Error::MissingField(ProvenanceField::Offset))
        ));
    }
}
