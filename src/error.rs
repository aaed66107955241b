//! Error types for branch-oracle.

/// Errors raised while running trials or emitting the report.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Writing the report failed (closed pipe, full disk).
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for branch-oracle operations.
pub type Result<T> = std::result::Result<T, Error>;
