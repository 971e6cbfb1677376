//! odf2john - extract password-recovery hash records from encrypted OpenDocument files
//!
//! An encrypted OpenDocument package (.odt, .ods, .odp, ...) keeps its ZIP
//! structure and a readable `META-INF/manifest.xml`; only the members
//! themselves are encrypted. The manifest records everything an offline
//! password-recovery tool needs to test candidate passwords: cipher, checksum
//! type, PBKDF2 iteration count, key size, checksum, IV and salt. This crate
//! reads those parameters and renders them, together with a sample of the
//! encrypted `content.xml`, as a single `$odf$` record line.
//!
//! No decryption or password verification is performed.
//!
//! # Example
//!
//! ```no_run
//! use odf2john::{ExtractOptions, extract_file};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let options = ExtractOptions::default();
//! match extract_file("report.odt", &options) {
//!     Ok(record) => println!("{}", record.to_line("report.odt")),
//!     Err(e) => eprintln!("report.odt: {}", e),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Record layout
//!
//! ```text
//! <path>:$odf$*<cipher>*<checksum type>*<iterations>*<key size>*<checksum hex>*
//! <iv len>*<iv hex>*<salt len>*<salt hex>*0*<content.xml sample hex>
//! ```
//!
//! Cipher codes: `0` Blowfish CFB, `1` AES-256-CBC. Checksum codes: `0` SHA-1,
//! `1` SHA-256.

/// Common types, errors and XML helpers
pub mod common;
/// Per-document extraction pipeline
pub mod extract;
/// OpenDocument package support
pub mod odf;

// Re-export commonly used types
pub use common::{ContainerError, Error, FormatError, Result};
pub use extract::{ExtractOptions, FileOutcome, extract_all, extract_file, extract_from_reader, extract_package};
pub use odf::crypto::{ChecksumType, CipherAlgorithm, ResolvedRecord};
pub use odf::{Manifest, ManifestElement, Package};
