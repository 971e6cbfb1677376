//! Per-document extraction pipeline.
//!
//! Container reader, manifest, descriptor resolution, re-encoding, content
//! sample and parameter mapping run in that order for one document. Any stage
//! can reject the document; no record is produced for a rejected document.
//!
//! # Example
//!
//! ```no_run
//! use odf2john::{ExtractOptions, extract_file};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let record = extract_file("secret.odt", &ExtractOptions::default())?;
//! println!("{}", record.to_line("secret.odt"));
//! # Ok(())
//! # }
//! ```

use crate::common::{Error, FormatError, Result};
use crate::odf::constants::{
    ATTR_CHECKSUM, ATTR_INITIALISATION_VECTOR, ATTR_SALT, CONTENT_SAMPLE_LEN, DEFAULT_KEY_SIZE,
    ENCRYPTION_WINDOW, ODF_CONTENT,
};
use crate::odf::core::{Manifest, Package};
use crate::odf::crypto::{CryptoParams, HexField, ResolvedRecord, resolve_content_descriptor, sample_content};
use std::io::{Read, Seek};
use std::path::Path;

/// Extraction settings.
///
/// The defaults produce records in the interoperable `$odf$` layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Leading bytes of content.xml embedded in the record
    pub sample_len: usize,
    /// Key size reported when the manifest has none
    pub default_key_size: u32,
    /// Elements after the content.xml entry searched for encryption data
    pub window: usize,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            sample_len: CONTENT_SAMPLE_LEN,
            default_key_size: DEFAULT_KEY_SIZE,
            window: ENCRYPTION_WINDOW,
        }
    }
}

impl ExtractOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the content sample length in bytes
    pub fn with_sample_len(mut self, sample_len: usize) -> Self {
        self.sample_len = sample_len;
        self
    }

    /// Set the key size used when the manifest omits one
    pub fn with_default_key_size(mut self, key_size: u32) -> Self {
        self.default_key_size = key_size;
        self
    }

    /// Set the adjacency window after the content.xml entry
    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }
}

/// Extract the hash record of an encrypted ODF file on disk
pub fn extract_file<P: AsRef<Path>>(path: P, options: &ExtractOptions) -> Result<ResolvedRecord> {
    let path = path.as_ref();
    let _span = tracing::info_span!("extract", path = %path.display()).entered();
    let package = Package::open(path)?;
    extract_package(&package, options)
}

/// Extract the hash record from ODF bytes held by any reader
pub fn extract_from_reader<R: Read + Seek>(reader: R, options: &ExtractOptions) -> Result<ResolvedRecord> {
    let package = Package::from_reader(reader)?;
    extract_package(&package, options)
}

/// Extract the hash record from an opened package
pub fn extract_package<R: Read + Seek>(package: &Package<R>, options: &ExtractOptions) -> Result<ResolvedRecord> {
    let manifest = Manifest::parse(&package.manifest_bytes()?)?;
    let descriptor = resolve_content_descriptor(&manifest, options.window)?;

    let checksum = HexField::from_base64(ATTR_CHECKSUM, &descriptor.checksum)?;
    let iv = HexField::from_base64(ATTR_INITIALISATION_VECTOR, &descriptor.iv)?;
    let salt = HexField::from_base64(ATTR_SALT, &descriptor.salt)?;

    let content = package
        .get_file_prefix(ODF_CONTENT, options.sample_len)
        .map_err(|e| match e {
            Error::Container(_) => Error::from(FormatError::ContentMissing),
            other => other,
        })?;
    let content_sample = sample_content(&content, options.sample_len);

    let params = CryptoParams::resolve(
        &descriptor.algorithm_name,
        &descriptor.checksum_type,
        &descriptor.iteration_count,
        descriptor.key_size.as_deref(),
        options.default_key_size,
    )?;
    tracing::debug!(
        algorithm = params.algorithm.code(),
        checksum_type = params.checksum_type.code(),
        key_size = %params.key_size,
        sample_bytes = content.len(),
        "resolved hash parameters"
    );

    Ok(ResolvedRecord {
        params,
        checksum,
        iv,
        salt,
        content_sample,
    })
}

/// Outcome of one input path in a batch run
#[derive(Debug)]
pub struct FileOutcome<'a> {
    pub path: &'a Path,
    pub result: Result<ResolvedRecord>,
}

/// Process `paths` in order, each independently of the others.
///
/// A failure on one path never affects the paths after it.
pub fn extract_all<'a, I>(paths: I, options: &'a ExtractOptions) -> impl Iterator<Item = FileOutcome<'a>> + 'a
where
    I: IntoIterator<Item = &'a Path>,
    I::IntoIter: 'a,
{
    paths.into_iter().map(move |path| FileOutcome {
        path,
        result: extract_file(path, options),
    })
}
