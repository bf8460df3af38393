//! Error types for the design document model.

use thiserror::Error;

/// Errors raised while reading the design document or the option bag.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Text layer '{layer}' has no text style")]
    MissingTextStyle { layer: String },

    #[cfg(feature = "serde")]
    #[error("Invalid options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}
