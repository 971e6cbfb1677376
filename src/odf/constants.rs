//! ODF package paths, manifest namespace and manifest attribute names.
//!
//! Only the parts of the OpenDocument packaging vocabulary that carry
//! encryption metadata are listed here.

// ============================================================================
// STANDARD ODF PARTS PATHS
// ============================================================================

/// Path to content.xml (main document content)
pub const ODF_CONTENT: &str = "content.xml";

/// Path to manifest.xml (package manifest)
pub const ODF_MANIFEST: &str = "META-INF/manifest.xml";

// ============================================================================
// MANIFEST VOCABULARY
// ============================================================================

/// Manifest namespace
pub const MANIFESTNS: &str = "urn:oasis:names:tc:opendocument:xmlns:manifest:1.0";

/// Conventional prefix bound to [`MANIFESTNS`]
pub const MANIFEST_PREFIX: &str = "manifest";

/// `manifest:full-path` on `manifest:file-entry`
pub const ATTR_FULL_PATH: &str = "full-path";

/// `manifest:checksum` on `manifest:encryption-data`
pub const ATTR_CHECKSUM: &str = "checksum";

/// `manifest:checksum-type` on `manifest:encryption-data`
pub const ATTR_CHECKSUM_TYPE: &str = "checksum-type";

/// `manifest:initialisation-vector` on `manifest:algorithm`
pub const ATTR_INITIALISATION_VECTOR: &str = "initialisation-vector";

/// `manifest:salt` on `manifest:key-derivation`
pub const ATTR_SALT: &str = "salt";

/// `manifest:algorithm-name` on `manifest:algorithm`
pub const ATTR_ALGORITHM_NAME: &str = "algorithm-name";

/// `manifest:iteration-count` on `manifest:key-derivation`
pub const ATTR_ITERATION_COUNT: &str = "iteration-count";

/// `manifest:key-size` on `manifest:key-derivation`
pub const ATTR_KEY_SIZE: &str = "key-size";

// ============================================================================
// HASH RECORD DEFAULTS
// ============================================================================

/// Key size assumed when the manifest omits `manifest:key-size`
pub const DEFAULT_KEY_SIZE: u32 = 16;

/// Leading bytes of content.xml embedded in a hash record
pub const CONTENT_SAMPLE_LEN: usize = 1024;

/// Elements following the `content.xml` entry that may carry encryption data
pub const ENCRYPTION_WINDOW: usize = 3;

/// Marker that introduces the ODF hash record body
pub const HASH_TAG: &str = "$odf$";
