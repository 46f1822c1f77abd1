//! JSON file adapters for the document ports.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use porter_application::ports::{DocumentError, DocumentSink, DocumentSource};
use porter_domain::InsomniaExport;
use serde_json::Value;

use crate::serialization::{from_json_bytes, to_json_compact, to_json_stable};

/// Reads the dump from a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Creates a source reading `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the source file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentSource for JsonFileSource {
    fn load(&self) -> Result<Value, DocumentError> {
        tracing::info!(path = %self.path.display(), "Reading dump");
        let bytes = fs::read(&self.path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                DocumentError::NotFound(self.path.clone())
            } else {
                DocumentError::Io(e)
            }
        })?;

        from_json_bytes(&bytes).map_err(|e| DocumentError::InvalidJson(e.to_string()))
    }
}

/// Writes the export to a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileSink {
    path: PathBuf,
    pretty: bool,
}

impl JsonFileSink {
    /// Creates a sink writing compact JSON to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            pretty: false,
        }
    }

    /// Switches to indented output.
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Path of the destination file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentSink for JsonFileSink {
    fn store(&self, export: &InsomniaExport) -> Result<(), DocumentError> {
        let json = if self.pretty {
            to_json_stable(export)
        } else {
            to_json_compact(export)
        };
        let json = json.map_err(|e| DocumentError::Serialization(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, json)?;
        tracing::info!(path = %self.path.display(), "Export written");
        Ok(())
    }
}
