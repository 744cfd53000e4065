//! Error types for translation loading.

use thiserror::Error;

/// Result type for translation loading.
pub type I18nResult<T> = Result<T, I18nError>;

#[derive(Debug, Error)]
pub enum I18nError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("not a MO file (magic {0:#010x})")]
    BadMagic(u32),

    #[error("unsupported MO revision {0}")]
    UnsupportedRevision(u32),

    #[error("MO file truncated reading {what} at offset {offset}")]
    Truncated { what: &'static str, offset: usize },

    #[error("MO string is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}
