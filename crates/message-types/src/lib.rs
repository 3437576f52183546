//! Transport-agnostic message types for conduction.
//!
//! This crate defines the [`Message`] handed to the routing pipeline and the
//! protobuf wire codec used to read it from (and write it to) raw bytes.
//!
//! # Architecture
//!
//! ```text
//! Encode:  Message → generated proto Message → protobuf bytes
//! Decode:  protobuf bytes → generated proto Message → Message
//! ```
//!
//! The proto type is generated from `proto/message.proto` by `build.rs`.
//!
//! The crate has no knowledge of any particular transport. Adapters such as
//! `conduction-kafka` depend on it, not the other way around.

pub mod codec;
pub mod error;
pub mod message;

// Generated protobuf code
mod protos {
    include!(concat!(env!("OUT_DIR"), "/protos/mod.rs"));
}

pub use codec::{decode, encode};
pub use error::{CodecError, Result};
pub use message::Message;
