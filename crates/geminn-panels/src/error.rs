//! Panel error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PanelError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid selector {selector:?}: {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("Duplicate panel group: {0}")]
    DuplicateGroup(String),

    #[error("Panel group not found: {0}")]
    UnknownGroup(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
