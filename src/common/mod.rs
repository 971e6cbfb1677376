//! Common types and utilities shared across the extraction pipeline.

// Submodule declarations
pub mod error;

// Re-exports for convenience
pub use error::{ContainerError, Error, FormatError, Result};
