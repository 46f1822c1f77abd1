//! JSON serialization for source and export documents.
//!
//! Exports are written compact by default, the way the destination
//! application's own exports look; the stable pretty form is available for
//! human review.

mod json;

pub use json::*;
