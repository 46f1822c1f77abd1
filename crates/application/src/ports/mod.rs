//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the conversion core and the outside
//! world. Each port is a trait implemented by adapters in the infrastructure
//! layer.

mod clock;
mod document;
mod random;

pub use clock::Clock;
pub use document::{DocumentError, DocumentSink, DocumentSource};
pub use random::RandomSource;
