//! Unified error types for odf2john.
//!
//! Every failure is local to one input document. The taxonomy separates
//! problems with the ZIP container itself from problems with the OpenDocument
//! encryption metadata found inside it.
use thiserror::Error;

/// Main error type for extraction operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The ZIP container or its manifest could not be used
    #[error(transparent)]
    Container(#[from] ContainerError),

    /// The package is readable but its encryption metadata is not usable
    #[error(transparent)]
    Format(#[from] FormatError),
}

/// Failures of the archive layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContainerError {
    /// Input is not a valid ZIP archive
    #[error("not a ZIP archive, not an OpenOffice/LibreOffice file")]
    NotAZip,

    /// `META-INF/manifest.xml` is absent
    #[error("manifest is missing, not an OpenOffice/LibreOffice file")]
    ManifestMissing,

    /// Manifest bytes are not well-formed XML
    #[error("manifest is unreadable: {0}")]
    ManifestUnreadable(String),

    /// A named member is absent from the archive
    #[error("member not found: {0}")]
    MemberMissing(String),
}

/// Failures of the OpenDocument encryption metadata.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// No manifest entry references `content.xml`
    #[error("no manifest entry for content.xml, not an OpenDocument file")]
    NotOpenDocument,

    /// `content.xml` is listed but carries no encryption data
    #[error("not an encrypted OpenOffice/LibreOffice file")]
    NotEncrypted,

    /// `content.xml` itself cannot be read from the archive
    #[error("content.xml is missing, not an encrypted OpenOffice/LibreOffice file")]
    ContentMissing,

    /// Cipher name outside the supported set
    #[error("unsupported encryption algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Checksum type outside the supported set
    #[error("unsupported checksum algorithm: {0}")]
    UnsupportedChecksum(String),

    /// A checksum, IV or salt attribute is not valid base64
    #[error("invalid base64 in {field}: {reason}")]
    InvalidBase64 { field: &'static str, reason: String },

    /// An iteration count or key size is not a decimal unsigned integer
    #[error("invalid {field}: {value:?}")]
    InvalidNumber { field: &'static str, value: String },
}

impl Error {
    /// Process status code associated with this failure kind.
    ///
    /// Codes 2 through 7 identify the stage that rejected the document;
    /// everything else reports 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Container(ContainerError::NotAZip) => 2,
            Error::Container(ContainerError::ManifestMissing)
            | Error::Container(ContainerError::ManifestUnreadable(_)) => 3,
            Error::Format(FormatError::NotOpenDocument) | Error::Format(FormatError::NotEncrypted) => 4,
            Error::Format(FormatError::ContentMissing) => 5,
            Error::Format(FormatError::UnsupportedAlgorithm(_)) => 6,
            Error::Format(FormatError::UnsupportedChecksum(_)) => 7,
            _ => 1,
        }
    }

    /// `true` if the document was understood but is simply not encrypted.
    pub fn is_not_encrypted(&self) -> bool {
        matches!(self, Error::Format(FormatError::NotEncrypted))
    }
}

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_by_stage() {
        assert_eq!(Error::from(ContainerError::NotAZip).exit_code(), 2);
        assert_eq!(Error::from(ContainerError::ManifestMissing).exit_code(), 3);
        assert_eq!(Error::from(FormatError::NotEncrypted).exit_code(), 4);
        assert_eq!(Error::from(FormatError::ContentMissing).exit_code(), 5);
        assert_eq!(Error::from(FormatError::UnsupportedAlgorithm("RC4".into())).exit_code(), 6);
        assert_eq!(Error::from(FormatError::UnsupportedChecksum("MD5".into())).exit_code(), 7);
        assert_eq!(
            Error::from(ContainerError::MemberMissing("x".into())).exit_code(),
            1
        );
    }

    #[test]
    fn test_messages_name_the_value() {
        let err = Error::from(FormatError::UnsupportedAlgorithm("RC4".to_string()));
        assert_eq!(err.to_string(), "unsupported encryption algorithm: RC4");
        assert!(err.to_string().contains("RC4"));
        assert!(!err.is_not_encrypted());
        assert!(Error::from(FormatError::NotEncrypted).is_not_encrypted());
    }
}
