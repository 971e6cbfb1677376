//! Unified error types for odf2john.
//!
//! This module provides a unified error type that encompasses container and
//! format errors, presenting a consistent API to users.

// Submodule declarations
pub mod types;
pub mod conversions;

// Re-exports
pub use types::{ContainerError, Error, FormatError, Result};
