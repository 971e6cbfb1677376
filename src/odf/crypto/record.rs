//! The `$odf$` hash record.
//!
//! Layout, one line per document:
//!
//! ```text
//! <path>:$odf$*<cipher>*<checksum type>*<iterations>*<key size>*<checksum>*
//! <iv length>*<iv>*<salt length>*<salt>*0*<content.xml sample>
//! ```
//!
//! The consumer parses the record positionally, so field order, delimiters and
//! number bases are fixed.

use super::encode::HexField;
use super::params::CryptoParams;
use crate::odf::constants::HASH_TAG;
use std::fmt;

/// Fully validated parameters of one encrypted document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRecord {
    pub params: CryptoParams,
    pub checksum: HexField,
    pub iv: HexField,
    pub salt: HexField,
    /// Hex of the leading bytes of content.xml
    pub content_sample: String,
}

impl ResolvedRecord {
    /// Format the record line for `input_path`, without a trailing newline
    pub fn to_line(&self, input_path: &str) -> String {
        format!("{}:{}", input_path, self)
    }
}

/// Renders the record body starting at `$odf$`
impl fmt::Display for ResolvedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}*{}*{}*{}*{}*{}*{}*{}*{}*{}*0*{}",
            HASH_TAG,
            self.params.algorithm.code(),
            self.params.checksum_type.code(),
            self.params.iteration_count,
            self.params.key_size,
            self.checksum.hex,
            self.iv.len,
            self.iv.hex,
            self.salt.len,
            self.salt.hex,
            self.content_sample,
        )
    }
}
