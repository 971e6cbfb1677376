//! OpenDocument package support.

/// ODF constants
pub mod constants;
/// Core ODF parsing functionality
pub mod core;
/// Encryption metadata and hash records
pub mod crypto;
/// ODF XML element naming
pub mod elements;

#[cfg(test)]
pub(crate) mod test_support;

pub use self::core::{Manifest, ManifestElement, Package};
pub use crypto::ResolvedRecord;
