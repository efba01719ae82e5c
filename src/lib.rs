// Gemver - semantic version parsing and comparison
// Core library functionality

pub mod error;
pub mod models;

// Re-export commonly used types
pub use error::{Result, VersionError};
pub use models::version::Version;
