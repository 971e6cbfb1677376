//! Encryption metadata of ODF packages.
//!
//! The pipeline for one document runs descriptor resolution, parameter
//! mapping and re-encoding, and ends in a [`ResolvedRecord`]:
//!
//! - `descriptor` - finds the `content.xml` encryption attributes in the manifest
//! - `params` - maps cipher and checksum names onto record codes
//! - `encode` - base64 to hex re-encoding and the content sample
//! - `record` - the `$odf$` line format

pub mod descriptor;
pub mod encode;
pub mod params;
pub mod record;

pub use descriptor::{EncryptionDescriptor, resolve_content_descriptor};
pub use encode::{HexField, sample_content};
pub use params::{ChecksumType, CipherAlgorithm, CryptoParams};
pub use record::ResolvedRecord;
