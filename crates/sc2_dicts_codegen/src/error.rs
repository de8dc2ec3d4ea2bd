//! Fatal generator errors.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodegenError {
    #[error("could not find enum {enum_name}")]
    SchemaNotFound { enum_name: String },

    #[error("enum {enum_name} has no matching closing brace")]
    UnterminatedEnum { enum_name: String },

    #[error("dataset {origin} unavailable: {reason}")]
    DatasetUnavailable { origin: String, reason: String },

    #[error("dataset malformed: {reason}")]
    DatasetMalformed { reason: String },

    #[error("{ability} is researched by both {existing} and {incoming}")]
    ConflictingAssociation {
        ability: String,
        existing: String,
        incoming: String,
    },

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CodegenError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        CodegenError::DatasetMalformed {
            reason: reason.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CodegenError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for generator operations
pub type Result<T> = std::result::Result<T, CodegenError>;
