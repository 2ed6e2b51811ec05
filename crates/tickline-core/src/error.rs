//! Timeline error types

use thiserror::Error;

/// Errors reported by timeline operations
///
/// Everything else in the engine is clamped or degenerate-safe, so this is
/// the only condition a host ever has to handle.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimelineError {
    /// Argument outside the operation's domain; state was left untouched
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
