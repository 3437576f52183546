//! The internal message type.
//!
//! A [`Message`] is the unit handed to the routing pipeline. It carries an
//! opaque payload and a string-keyed metadata map; it knows nothing about
//! the transport it was read from. Transport adapters record where a message
//! came from by writing well-known keys into the metadata map.

use crate::codec;
use crate::error::Result;
use std::collections::HashMap;

/// A transport-agnostic message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    /// Opaque business payload
    pub payload: Vec<u8>,
    /// String metadata.
    ///
    /// `None` and `Some(empty map)` are distinct states: a freshly decoded
    /// message without metadata entries has `None`.
    pub metadata: Option<HashMap<String, String>>,
}

impl Message {
    /// Create a message with the given payload and no metadata map.
    pub fn new(payload: impl Into<Vec<u8>>) -> Self {
        Self {
            payload: payload.into(),
            metadata: None,
        }
    }

    /// Look up a metadata value. Returns `None` if the map or the key is absent.
    pub fn metadata_value(&self, key: &str) -> Option<&str> {
        self.metadata
            .as_ref()
            .and_then(|m| m.get(key))
            .map(String::as_str)
    }

    /// Get the metadata map, creating an empty one if it is absent.
    pub fn metadata_mut(&mut self) -> &mut HashMap<String, String> {
        self.metadata.get_or_insert_with(HashMap::new)
    }

    /// Serialize to protobuf bytes.
    pub fn write_to_bytes(&self) -> Result<Vec<u8>> {
        codec::encode(self)
    }

    /// Deserialize from protobuf bytes.
    pub fn parse_from_bytes(data: &[u8]) -> Result<Self> {
        codec::decode(data)
    }
}
