//! ODF package (ZIP archive) handling functionality.
//!
//! This module provides the container reader: opening an OpenDocument file as
//! a ZIP archive and reading named members out of it. The archive handle lives
//! exactly as long as the `Package`, so it is released on every exit path of an
//! extraction, early failures included.

use crate::common::{ContainerError, Error, Result};
use crate::odf::constants::ODF_MANIFEST;
use std::cell::RefCell;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

/// An ODF package (ZIP file containing XML documents)
pub struct Package<R> {
    archive: RefCell<zip::ZipArchive<R>>,
}

impl Package<BufReader<File>> {
    /// Open an ODF package from a file on disk.
    ///
    /// Directories and files that are not ZIP archives fail with
    /// [`ContainerError::NotAZip`]; a path that cannot be opened at all
    /// reports the underlying IO error.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if std::fs::metadata(path)?.is_dir() {
            return Err(ContainerError::NotAZip.into());
        }
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }
}

impl<R: Read + Seek> Package<R> {
    /// Open an ODF package from a reader
    pub fn from_reader(reader: R) -> Result<Self> {
        let archive = zip::ZipArchive::new(reader).map_err(|e| {
            tracing::debug!(error = %e, "archive rejected");
            ContainerError::NotAZip
        })?;

        tracing::trace!(members = archive.len(), "opened ZIP container");
        Ok(Self {
            archive: RefCell::new(archive),
        })
    }

    /// Get a file from the package by path
    pub fn get_file(&self, path: &str) -> Result<Vec<u8>> {
        self.read_member(path, None)
    }

    /// Read at most `limit` leading bytes of a member
    pub fn get_file_prefix(&self, path: &str, limit: usize) -> Result<Vec<u8>> {
        self.read_member(path, Some(limit))
    }

    fn read_member(&self, path: &str, limit: Option<usize>) -> Result<Vec<u8>> {
        let mut archive = self.archive.borrow_mut();
        let file = archive.by_name(path).map_err(|e| match e {
            zip::result::ZipError::FileNotFound => {
                Error::from(ContainerError::MemberMissing(path.to_string()))
            },
            other => Error::from(other),
        })?;

        let mut content = Vec::new();
        match limit {
            Some(limit) => {
                file.take(limit as u64).read_to_end(&mut content)?;
            },
            None => {
                let mut file = file;
                file.read_to_end(&mut content)?;
            },
        }
        Ok(content)
    }

    /// Read the raw bytes of `META-INF/manifest.xml`
    pub fn manifest_bytes(&self) -> Result<Vec<u8>> {
        self.get_file(ODF_MANIFEST).map_err(|e| match e {
            Error::Container(ContainerError::MemberMissing(_)) => ContainerError::ManifestMissing.into(),
            other => other,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::odf::test_support::build_package;
    use std::io::Cursor;

    #[test]
    fn test_reads_named_member() {
        let bytes = build_package(&[("content.xml", b"hello"), (ODF_MANIFEST, b"<m/>")]);
        let pkg = Package::from_reader(Cursor::new(bytes)).unwrap();

        assert_eq!(pkg.get_file("content.xml").unwrap(), b"hello");
        assert_eq!(pkg.manifest_bytes().unwrap(), b"<m/>");
    }

    #[test]
    fn test_prefix_read_is_bounded() {
        let body = vec![b'x'; 100];
        let bytes = build_package(&[("content.xml", &body)]);
        let pkg = Package::from_reader(Cursor::new(bytes)).unwrap();

        assert_eq!(pkg.get_file_prefix("content.xml", 10).unwrap().len(), 10);
        assert_eq!(pkg.get_file_prefix("content.xml", 1000).unwrap().len(), 100);
    }

    #[test]
    fn test_missing_member() {
        let bytes = build_package(&[("content.xml", b"hello")]);
        let pkg = Package::from_reader(Cursor::new(bytes)).unwrap();

        let err = pkg.get_file("styles.xml").unwrap_err();
        assert!(matches!(
            err,
            Error::Container(ContainerError::MemberMissing(ref name)) if name == "styles.xml"
        ));
        assert!(matches!(
            pkg.manifest_bytes().unwrap_err(),
            Error::Container(ContainerError::ManifestMissing)
        ));
    }

    #[test]
    fn test_not_a_zip() {
        let err = Package::from_reader(Cursor::new(b"plain text, not an archive".to_vec()))
            .err()
            .unwrap();
        assert!(matches!(err, Error::Container(ContainerError::NotAZip)));
    }

    #[test]
    fn test_directory_is_not_a_zip() {
        let dir = tempfile::tempdir().unwrap();
        let err = Package::open(dir.path()).err().unwrap();
        assert!(matches!(err, Error::Container(ContainerError::NotAZip)));
    }
}
