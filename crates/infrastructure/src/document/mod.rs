//! File-backed document source and sink.

mod json_file;

pub use json_file::{JsonFileSink, JsonFileSource};
