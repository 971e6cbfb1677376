//! Error conversion implementations.
//!
//! This module contains From trait implementations to convert errors from the
//! ZIP and XML libraries into the unified taxonomy.

use super::types::{ContainerError, Error};

impl From<quick_xml::Error> for ContainerError {
    fn from(err: quick_xml::Error) -> Self {
        ContainerError::ManifestUnreadable(err.to_string())
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::Container(err.into())
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(e) => Error::Io(e),
            zip::result::ZipError::FileNotFound => {
                Error::Container(ContainerError::MemberMissing("unknown".to_string()))
            },
            _ => Error::Container(ContainerError::NotAZip),
        }
    }
}
