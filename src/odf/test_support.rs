//! Fixture builders shared by unit tests.

use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;

/// Build an in-memory ZIP with stored members
pub(crate) fn build_package(members: &[(&str, &[u8])]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
    for (name, data) in members {
        writer.start_file(*name, options).unwrap();
        writer.write_all(data).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

/// Wrap file entries in a manifest root with the standard namespace binding
pub(crate) fn manifest_xml(entries: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<manifest:manifest xmlns:manifest="urn:oasis:names:tc:opendocument:xmlns:manifest:1.0" manifest:version="1.2">
<manifest:file-entry manifest:full-path="/" manifest:media-type="application/vnd.oasis.opendocument.text"/>
{entries}
</manifest:manifest>"#
    )
}

/// Manifest of an encrypted document with the given cipher parameters
pub(crate) fn encrypted_manifest(algorithm: &str, checksum_type: &str, key_size: Option<u32>) -> String {
    let key_size = key_size
        .map(|size| format!(r#" manifest:key-size="{size}""#))
        .unwrap_or_default();
    manifest_xml(&format!(
        r#"<manifest:file-entry manifest:full-path="content.xml" manifest:media-type="text/xml" manifest:size="2000">
  <manifest:encryption-data manifest:checksum-type="{checksum_type}" manifest:checksum="3q2+7w==">
    <manifest:algorithm manifest:algorithm-name="{algorithm}" manifest:initialisation-vector="AQIDBAUGBwg="/>
    <manifest:key-derivation manifest:key-derivation-name="PBKDF2"{key_size} manifest:iteration-count="1024" manifest:salt="AQIDBA=="/>
  </manifest:encryption-data>
</manifest:file-entry>"#
    ))
}
