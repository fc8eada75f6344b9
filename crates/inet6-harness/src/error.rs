//! Harness error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("hex: {0}")]
    Hex(#[from] hex::FromHexError),
    #[error("unsupported function '{0}'")]
    UnsupportedFunction(String),
    #[error("fixture input '{field}' missing or not a string")]
    MissingInput { field: &'static str },
    #[error("unknown error kind '{0}'")]
    UnknownErrorKind(String),
}
