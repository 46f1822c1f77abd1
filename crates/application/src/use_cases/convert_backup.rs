//! Convert backup use case.

use thiserror::Error;

use crate::convert::{ConversionReport, Converter};
use crate::error::ConversionError;
use crate::ports::{Clock, DocumentError, DocumentSink, DocumentSource, RandomSource};

/// Errors from a full load, convert and store run.
#[derive(Debug, Error)]
pub enum ConvertBackupError {
    /// Loading or storing failed.
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// The dump could not be converted.
    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

/// Use case for converting a dump into an export file.
pub struct ConvertBackup<S, K, R, C> {
    source: S,
    sink: K,
    converter: Converter<R, C>,
}

impl<S, K, R, C> ConvertBackup<S, K, R, C>
where
    S: DocumentSource,
    K: DocumentSink,
    R: RandomSource,
    C: Clock,
{
    /// Creates a new `ConvertBackup` use case.
    #[must_use]
    pub const fn new(source: S, sink: K, converter: Converter<R, C>) -> Self {
        Self {
            source,
            sink,
            converter,
        }
    }

    /// Loads the dump, converts it and stores the export.
    ///
    /// The sink is only called once the whole export has been built, so a
    /// failed conversion never leaves a partial file behind.
    ///
    /// # Errors
    /// - Returns error if the source cannot be loaded or parsed
    /// - Returns error if the conversion fails
    /// - Returns error if the sink cannot write the export
    pub fn execute(&mut self) -> Result<ConversionReport, ConvertBackupError> {
        let document = self.source.load()?;
        let conversion = self.converter.convert(&document)?;

        tracing::info!("Exporting JSON");
        self.sink.store(&conversion.export)?;

        Ok(conversion.report)
    }
}
