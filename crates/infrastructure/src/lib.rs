//! Porter Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer.

pub mod adapters;
pub mod document;
pub mod serialization;

pub use adapters::{SeededRandom, SystemClock, ThreadRandom};
pub use document::{JsonFileSink, JsonFileSource};
pub use serialization::{
    SerializationError, from_json, from_json_bytes, to_json_compact, to_json_stable,
};
