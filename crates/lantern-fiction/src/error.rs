//! Error types for the fiction engine.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for fiction operations.
pub type FictionResult<T> = Result<T, FictionError>;

/// Errors that can occur while loading or serializing an adventure.
///
/// Play itself never fails: unknown scenes and unparseable input degrade
/// to fallback narration instead.
#[derive(Debug, Error)]
pub enum FictionError {
    /// The adventure declares no scenes.
    #[error("adventure has no scenes")]
    EmptyGraph,

    /// The designated start scene does not exist.
    #[error("start scene not found: {0}")]
    MissingStartScene(String),

    /// Two scenes share an identifier.
    #[error("duplicate scene id: {0}")]
    DuplicateScene(String),

    /// Two choices in one scene share an identifier.
    #[error("duplicate choice id '{choice}' in scene '{scene}'")]
    DuplicateChoice {
        /// Scene containing the duplicate.
        scene: String,
        /// The repeated choice id.
        choice: String,
    },

    /// An adventure file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Malformed adventure JSON, or a snapshot that failed to serialize.
    #[error("invalid adventure JSON: {0}")]
    Json(#[from] serde_json::Error),
}
