//! Error types for the mechanics engine.

/// Errors that can occur during mechanics operations.
#[derive(Debug, thiserror::Error)]
pub enum MechError {
    /// An attribute name that is not one of the five abilities.
    #[error("unknown attribute: {0}")]
    UnknownAttribute(String),
}
