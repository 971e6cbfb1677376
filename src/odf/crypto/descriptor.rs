//! Locating the encryption parameters of `content.xml` in the manifest.
//!
//! In a manifest the `manifest:encryption-data` block of an encrypted member,
//! together with its `manifest:algorithm` and `manifest:key-derivation`
//! children, directly follows that member's `manifest:file-entry`. The
//! resolver relies on that adjacency: it finds every `content.xml` entry in
//! the flat element list and inspects a fixed window of the elements after
//! each one. All windows feed a single scan, so attributes seen later in
//! document order overwrite earlier ones.

use crate::common::FormatError;
use crate::odf::constants::{
    ATTR_ALGORITHM_NAME, ATTR_CHECKSUM, ATTR_CHECKSUM_TYPE, ATTR_FULL_PATH,
    ATTR_INITIALISATION_VECTOR, ATTR_ITERATION_COUNT, ATTR_KEY_SIZE, ATTR_SALT, MANIFESTNS,
    ODF_CONTENT,
};
use crate::odf::core::{Manifest, ManifestElement};

/// Encryption metadata of one package member, as written by the producer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptionDescriptor {
    /// Base64 digest of the decrypted leading bytes
    pub checksum: String,
    /// Free-text digest identifier
    pub checksum_type: String,
    /// Base64 initialisation vector
    pub iv: String,
    /// Base64 key-derivation salt
    pub salt: String,
    /// Free-text cipher identifier
    pub algorithm_name: String,
    /// PBKDF2 iteration count, decimal digits exactly as written
    pub iteration_count: String,
    /// Derived key size in bytes, if the manifest states one
    pub key_size: Option<String>,
}

/// Attributes collected across the window, last write wins
#[derive(Debug, Default)]
struct WindowScan {
    checksum: Option<String>,
    checksum_type: Option<String>,
    iv: Option<String>,
    salt: Option<String>,
    algorithm_name: Option<String>,
    iteration_count: Option<String>,
    key_size: Option<String>,
}

impl WindowScan {
    fn absorb(&mut self, element: &ManifestElement) {
        let slots: [(&str, &mut Option<String>); 7] = [
            (ATTR_CHECKSUM, &mut self.checksum),
            (ATTR_CHECKSUM_TYPE, &mut self.checksum_type),
            (ATTR_INITIALISATION_VECTOR, &mut self.iv),
            (ATTR_SALT, &mut self.salt),
            (ATTR_ALGORITHM_NAME, &mut self.algorithm_name),
            (ATTR_ITERATION_COUNT, &mut self.iteration_count),
            (ATTR_KEY_SIZE, &mut self.key_size),
        ];

        for (local_name, slot) in slots {
            // Empty values count as absent.
            if let Some(value) = element.get(MANIFESTNS, local_name)
                && !value.is_empty()
            {
                *slot = Some(value.to_string());
            }
        }
    }

    fn finish(self) -> Result<EncryptionDescriptor, FormatError> {
        if self.checksum.is_none() {
            return Err(FormatError::NotEncrypted);
        }

        let (
            Some(checksum),
            Some(checksum_type),
            Some(iv),
            Some(salt),
            Some(algorithm_name),
            Some(iteration_count),
        ) = (
            self.checksum,
            self.checksum_type,
            self.iv,
            self.salt,
            self.algorithm_name,
            self.iteration_count,
        )
        else {
            tracing::debug!("checksum present but encryption data is incomplete");
            return Err(FormatError::NotEncrypted);
        };

        let iteration_count = check_count(ATTR_ITERATION_COUNT, iteration_count)?;
        let key_size = self
            .key_size
            .map(|value| check_count(ATTR_KEY_SIZE, value))
            .transpose()?;

        Ok(EncryptionDescriptor {
            checksum,
            checksum_type,
            iv,
            salt,
            algorithm_name,
            iteration_count,
            key_size,
        })
    }
}

/// Accept a count made only of ASCII digits. The text is kept as written:
/// leading zeros survive and there is no upper bound.
fn check_count(field: &'static str, value: String) -> Result<String, FormatError> {
    if value.bytes().all(|b| b.is_ascii_digit()) {
        Ok(value)
    } else {
        Err(FormatError::InvalidNumber { field, value })
    }
}

/// Find the encryption descriptor of `content.xml`.
///
/// `window` is the number of elements following each `content.xml` entry that
/// are inspected; it is clamped at the end of the manifest. When the manifest
/// lists `content.xml` more than once, every entry's window is scanned.
pub fn resolve_content_descriptor(
    manifest: &Manifest,
    window: usize,
) -> Result<EncryptionDescriptor, FormatError> {
    let elements = manifest.elements();
    let mut scan = WindowScan::default();
    let mut entries = 0usize;

    for (position, _) in elements
        .iter()
        .enumerate()
        .filter(|(_, e)| e.get(MANIFESTNS, ATTR_FULL_PATH) == Some(ODF_CONTENT))
    {
        entries += 1;
        let end = position.saturating_add(1).saturating_add(window).min(elements.len());
        for element in &elements[position + 1..end] {
            tracing::trace!(element = %element.name, "inspecting encryption window");
            scan.absorb(element);
        }
    }

    if entries == 0 {
        return Err(FormatError::NotOpenDocument);
    }
    if entries > 1 {
        tracing::debug!(entries, "manifest lists content.xml more than once");
    }

    let descriptor = scan.finish()?;
    tracing::debug!(
        algorithm = %descriptor.algorithm_name,
        checksum_type = %descriptor.checksum_type,
        iterations = %descriptor.iteration_count,
        "found encryption descriptor for content.xml"
    );
    Ok(descriptor)
}
