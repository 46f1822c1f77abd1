//! Porter Application - Conversion core, use cases and ports
//!
//! This crate defines the application layer with:
//! - Port traits (randomness, clock, document source and sink)
//! - The Postman dump to Insomnia export conversion
//! - Use case orchestration
//! - Application-level error handling

pub mod config;
pub mod convert;
pub mod error;
pub mod ports;
pub mod use_cases;

pub use config::ConvertConfig;
pub use convert::{
    Conversion, ConversionReport, ConversionWarning, Converter, IdGenerator, WarningSeverity,
    WarningStats,
};
pub use error::{ConversionError, ConversionResult};
pub use ports::{Clock, DocumentError, DocumentSink, DocumentSource, RandomSource};
pub use use_cases::{ConvertBackup, ConvertBackupError};
