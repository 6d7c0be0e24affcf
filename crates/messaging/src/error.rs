//! Error types for message handling
//!
//! Filtering never fails. Errors only come from decoding text frames and
//! payloads into typed values.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, MessageError>;

#[derive(Debug, Error)]
pub enum MessageError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
