//! Protobuf wire codec for [`Message`].
//!
//! The wire format is defined by `proto/message.proto` and the message type
//! is generated at build time. This module only maps between the generated
//! type and [`Message`]:
//! - an absent metadata map encodes as no entries
//! - no entries decode as `metadata: None`

use crate::error::{CodecError, Result};
use crate::message::Message;
use crate::protos::message::Message as WireMessage;
use protobuf::Message as _;

/// Encode a message to protobuf binary format.
pub fn encode(message: &Message) -> Result<Vec<u8>> {
    let mut wire = WireMessage::new();
    wire.payload = message.payload.clone();
    wire.metadata = message.metadata.clone().unwrap_or_default();

    wire.write_to_bytes()
        .map_err(|e| CodecError::Encode(e.to_string()))
}

/// Decode a message from protobuf binary format.
pub fn decode(data: &[u8]) -> Result<Message> {
    let wire =
        WireMessage::parse_from_bytes(data).map_err(|e| CodecError::Decode(e.to_string()))?;

    Ok(Message {
        payload: wire.payload,
        metadata: (!wire.metadata.is_empty()).then_some(wire.metadata),
    })
}
