//! Error types for loading and checking schema documents.
//!
//! Introspection itself never fails; only the I/O and parsing edge does.

use std::path::PathBuf;
use thiserror::Error;

/// Errors while loading a schema document.
#[derive(Debug, Error)]
pub enum LoadError {
    // IO errors (exit code 3)
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("cannot read {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "remote")]
    #[error("failed to fetch {url}: {source}")]
    NetworkError {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    // Parse errors (exit code 2)
    #[error("invalid JSON: {source}")]
    InvalidJson {
        #[source]
        source: serde_json::Error,
    },

    #[error("not a schema node: {source}")]
    NotASchema {
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    /// Returns the exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            LoadError::FileNotFound { .. } | LoadError::ReadError { .. } => 3,
            #[cfg(feature = "remote")]
            LoadError::NetworkError { .. } => 3,
            _ => 2,
        }
    }
}

/// Errors while checking a document against the node meta-schema.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("invalid meta-schema: {message}")]
    MetaSchema { message: String },

    #[error("document has {} error(s)", errors.len())]
    Invalid { errors: Vec<DocumentError> },
}

impl CheckError {
    /// Returns the exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            CheckError::Load(e) => e.exit_code(),
            CheckError::MetaSchema { .. } => 2,
            CheckError::Invalid { .. } => 1,
        }
    }
}

/// Single document violation with path context.
#[derive(Debug, Clone, serde::Serialize)]
pub struct DocumentError {
    /// JSON Pointer (RFC 6901) to the offending node.
    pub path: String,
    /// Human-readable error message.
    pub message: String,
}

impl std::fmt::Display for DocumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}
