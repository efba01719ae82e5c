// Common error types for gemver

use thiserror::Error;

/// Errors raised while parsing version strings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    /// The input did not contain exactly three dot-separated segments
    #[error("Malformed version (too short or too long).")]
    MalformedVersion,
}

pub type Result<T> = std::result::Result<T, VersionError>;
