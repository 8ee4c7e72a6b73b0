//! Shared error type across nightboard crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, NightboardError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum NightboardError {
    #[error("config: {0}")]
    Config(String),
    #[error("stats sampling failed: {0}")]
    Stats(String),
    #[error("internal: {0}")]
    Internal(String),
}
