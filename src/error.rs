//! Error types for allocgen.
//!
//! Every failure is fatal for the run; nothing here is retried.

use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AllocgenError {
    /// Input unreadable or output unwritable.
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// Input is not JSON at all.
    #[error("Invalid JSON in {context}")]
    Json {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// Input is JSON but not shaped like an allocation dataset.
    #[error("Data format error: {0}")]
    DataFormat(String),

    /// Writing into the in-memory source buffer failed.
    #[error("Formatting generated source failed")]
    Render(#[from] std::fmt::Error),

    /// The constructor pushed a different number of entries than the array declares.
    #[error("Declared {declared} allocations but emitted {emitted}")]
    CountMismatch { declared: usize, emitted: usize },
}

impl AllocgenError {
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    pub fn reading(path: &Path, source: std::io::Error) -> Self {
        Self::io(format!("reading {}", path.display()), source)
    }

    pub fn writing(path: &Path, source: std::io::Error) -> Self {
        Self::io(format!("writing {}", path.display()), source)
    }

    /// True for the `DataFormatError` half of the taxonomy.
    pub fn is_data_format(&self) -> bool {
        matches!(self, Self::Json { .. } | Self::DataFormat(_))
    }
}

pub type Result<T> = std::result::Result<T, AllocgenError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn io_error_keeps_path_in_message() {
        let err = AllocgenError::reading(
            Path::new("data/allocations.json"),
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );
        assert_eq!(err.to_string(), "IO error: reading data/allocations.json");
        assert!(!err.is_data_format());
    }

    #[test]
    fn json_and_shape_errors_are_data_format() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let json = AllocgenError::Json {
            context: "allocations".into(),
            source,
        };
        assert!(json.is_data_format());
        assert!(AllocgenError::DataFormat("x".into()).is_data_format());
        assert!(
            !AllocgenError::CountMismatch {
                declared: 1,
                emitted: 0
            }
            .is_data_format()
        );
    }
}
