//! Core ODF package access.
//!
//! - `package` - ZIP container reader
//! - `manifest` - META-INF/manifest.xml as a flat, document-ordered element list

/// ODF manifest parsing
mod manifest;
/// ODF package handling
mod package;

pub use manifest::{Manifest, ManifestElement};
pub use package::Package;
