//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant where they need to surface it.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown agent role {0:?}")]
    UnknownRole(String),

    #[error("unknown agent status {0:?}")]
    UnknownStatus(String),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `office-core`.
pub type CoreResult<T> = Result<T, CoreError>;
