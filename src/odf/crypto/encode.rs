//! Base64 to hexadecimal re-encoding and the content.xml sample.

use crate::common::FormatError;
use base64::Engine as _;
use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;

/// Standard alphabet decoder that tolerates what producers actually write:
/// nonzero trailing bits in the last symbol and missing or extra padding.
const LENIENT_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Decoded binary field in its hash-record form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexField {
    /// Lowercase hexadecimal, no separators
    pub hex: String,
    /// Decoded byte count
    pub len: usize,
}

impl HexField {
    /// Hex-encode raw bytes
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            hex: hex::encode(bytes),
            len: bytes.len(),
        }
    }

    /// Decode a base64 manifest attribute and hex-encode the result.
    ///
    /// `field` names the attribute in the error. Characters outside the
    /// base64 alphabet (whitespace, line breaks, stray punctuation) are
    /// dropped before decoding.
    pub fn from_base64(field: &'static str, text: &str) -> Result<Self, FormatError> {
        let compact: Vec<u8> = text
            .bytes()
            .filter(|b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'/' | b'='))
            .collect();
        let bytes = LENIENT_BASE64
            .decode(&compact)
            .map_err(|e| FormatError::InvalidBase64 {
                field,
                reason: e.to_string(),
            })?;
        Ok(Self::from_bytes(&bytes))
    }
}

/// Hex-encode at most `limit` leading bytes of `content`
pub fn sample_content(content: &[u8], limit: usize) -> String {
    hex::encode(&content[..content.len().min(limit)])
}
