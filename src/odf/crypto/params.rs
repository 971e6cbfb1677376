//! Mapping of manifest algorithm names onto hash record codes.
//!
//! Producers write free-form identifiers such as `Blowfish CFB` or
//! `http://www.w3.org/2001/04/xmlenc#aes256-cbc`. Identification is by
//! case-sensitive substring containment, tried in the order of the priority
//! tables below; the first table entry contained in the text wins.

use crate::common::FormatError;

/// Cipher protecting the package member
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherAlgorithm {
    /// Blowfish in 8-bit CFB mode (OpenOffice.org 1.x - 3.x)
    BlowfishCfb,
    /// AES-256 in CBC mode (ODF 1.2)
    Aes256Cbc,
}

/// Digest used for the start-key and the content checksum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumType {
    /// SHA-1, usually over the first kilobyte (`SHA1/1K`)
    Sha1,
    /// SHA-256, usually over the first kilobyte (`...#sha256-1k`)
    Sha256,
}

/// Cipher identification order
pub const ALGORITHM_PRIORITY: &[(&str, CipherAlgorithm)] = &[
    ("Blowfish CFB", CipherAlgorithm::BlowfishCfb),
    ("aes256-cbc", CipherAlgorithm::Aes256Cbc),
];

/// Checksum identification order
///
/// `SHA1` is tried before `SHA256`. Note that `SHA1` is not a substring of
/// `SHA256`, so the order only matters for text containing both.
pub const CHECKSUM_PRIORITY: &[(&str, ChecksumType)] = &[
    ("SHA1", ChecksumType::Sha1),
    ("SHA256", ChecksumType::Sha256),
];

impl CipherAlgorithm {
    /// Identify the cipher from a `manifest:algorithm-name` value
    pub fn from_manifest_name(name: &str) -> Result<Self, FormatError> {
        ALGORITHM_PRIORITY
            .iter()
            .find(|(needle, _)| name.contains(needle))
            .map(|(_, algorithm)| *algorithm)
            .ok_or_else(|| FormatError::UnsupportedAlgorithm(name.to_string()))
    }

    /// Numeric code used in the hash record
    #[inline]
    pub fn code(self) -> u8 {
        match self {
            CipherAlgorithm::BlowfishCfb => 0,
            CipherAlgorithm::Aes256Cbc => 1,
        }
    }
}

impl ChecksumType {
    /// Identify the digest from a `manifest:checksum-type` value
    pub fn from_manifest_name(name: &str) -> Result<Self, FormatError> {
        CHECKSUM_PRIORITY
            .iter()
            .find(|(needle, _)| name.contains(needle))
            .map(|(_, checksum)| *checksum)
            .ok_or_else(|| FormatError::UnsupportedChecksum(name.to_string()))
    }

    /// Numeric code used in the hash record
    #[inline]
    pub fn code(self) -> u8 {
        match self {
            ChecksumType::Sha1 => 0,
            ChecksumType::Sha256 => 1,
        }
    }
}

/// Validated form of the cryptographic parameters.
///
/// The counts are decimal digit strings copied from the manifest, so they
/// print exactly as the producer wrote them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CryptoParams {
    pub algorithm: CipherAlgorithm,
    pub checksum_type: ChecksumType,
    pub iteration_count: String,
    pub key_size: String,
}

impl CryptoParams {
    /// Map free-text names onto codes, filling in `default_key_size` when
    /// the manifest carried no key size.
    ///
    /// The algorithm is checked before the checksum type.
    pub fn resolve(
        algorithm_name: &str,
        checksum_type: &str,
        iteration_count: &str,
        key_size: Option<&str>,
        default_key_size: u32,
    ) -> Result<Self, FormatError> {
        let algorithm = CipherAlgorithm::from_manifest_name(algorithm_name)?;
        let checksum_type = ChecksumType::from_manifest_name(checksum_type)?;
        Ok(Self {
            algorithm,
            checksum_type,
            iteration_count: iteration_count.to_string(),
            key_size: key_size.map_or_else(|| default_key_size.to_string(), str::to_string),
        })
    }
}
