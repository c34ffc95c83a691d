//! Error type for backend loading and delegation.
//!
//! Every variant is recoverable from the facade's point of view: load errors
//! degrade construction to the rule-based backend, runtime errors trigger a
//! rule-based retry of the sentence. Nothing here reaches a caller of
//! [`PosTagger::tag`](crate::facade::PosTagger::tag).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaggerError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed model file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid model: {0}")]
    ModelFormat(String),

    #[error("token classification failed: {0}")]
    Classifier(String),
}
