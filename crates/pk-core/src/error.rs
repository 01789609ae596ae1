//! Core error type.
//!
//! Higher crates keep their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid arrival rate {0}: must be finite and positive")]
    InvalidRate(f64),
}

/// Shorthand result type for `pk-core`.
pub type CoreResult<T> = Result<T, CoreError>;
