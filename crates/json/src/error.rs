use std::io;

use thiserror::Error;

/// Errors produced while reading or writing JSON.
///
/// Offsets are byte positions in the input being decoded.
#[derive(Debug, Error)]
pub enum JsonError {
    #[error("unexpected end of JSON input at offset {offset}")]
    UnexpectedEnd { offset: usize },
    #[error("unexpected token at offset {offset}, expected {expected}")]
    UnexpectedToken {
        offset: usize,
        expected: &'static str,
    },
    #[error("invalid number at offset {offset}")]
    InvalidNumber { offset: usize },
    #[error("invalid UTF-8 in JSON string")]
    InvalidUtf8,
    #[error("invalid JSON string: {0}")]
    InvalidString(#[from] serde_json::Error),
    #[error("nesting deeper than {max} levels at offset {offset}")]
    DepthExceeded { offset: usize, max: usize },
    #[error("trailing data after JSON value at offset {offset}")]
    TrailingData { offset: usize },
    #[error(transparent)]
    Io(#[from] io::Error),
}
