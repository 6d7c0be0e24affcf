//! Error types for embed configuration
//!
//! Building a URL never fails. Only loading options from text can.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, EmbedError>;

#[derive(Debug, Error)]
pub enum EmbedError {
    #[error("Invalid embed options: {0}")]
    Json(#[from] serde_json::Error),
}
