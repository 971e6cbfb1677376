//! End-to-end runs of the odf2john binary.

use std::io::{Cursor, Write};
use std::path::Path;
use std::process::Command;
use zip::write::SimpleFileOptions;

const MANIFEST: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<manifest:manifest xmlns:manifest="urn:oasis:names:tc:opendocument:xmlns:manifest:1.0" manifest:version="1.2">
 <manifest:file-entry manifest:full-path="/" manifest:media-type="application/vnd.oasis.opendocument.text"/>
 <manifest:file-entry manifest:full-path="content.xml" manifest:media-type="text/xml" manifest:size="3">
  <manifest:encryption-data manifest:checksum-type="SHA1/1K" manifest:checksum="3q2+7w==">
   <manifest:algorithm manifest:algorithm-name="Blowfish CFB" manifest:initialisation-vector="AQIDBAUGBwg="/>
   <manifest:key-derivation manifest:key-derivation-name="PBKDF2" manifest:iteration-count="1024" manifest:salt="AQIDBA=="/>
  </manifest:encryption-data>
 </manifest:file-entry>
</manifest:manifest>"#;

const PLAIN_MANIFEST: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<manifest:manifest xmlns:manifest="urn:oasis:names:tc:opendocument:xmlns:manifest:1.0">
 <manifest:file-entry manifest:full-path="/" manifest:media-type="application/vnd.oasis.opendocument.text"/>
 <manifest:file-entry manifest:full-path="content.xml" manifest:media-type="text/xml"/>
</manifest:manifest>"#;

fn write_package(path: &Path, manifest: &str, content: &[u8]) {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
    writer.start_file("mimetype", options).unwrap();
    writer.write_all(b"application/vnd.oasis.opendocument.text").unwrap();
    writer.start_file("META-INF/manifest.xml", options).unwrap();
    writer.write_all(manifest.as_bytes()).unwrap();
    writer.start_file("content.xml", options).unwrap();
    writer.write_all(content).unwrap();
    std::fs::write(path, writer.finish().unwrap().into_inner()).unwrap();
}

fn odf2john() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_odf2john"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn no_arguments_prints_usage() {
    let output = odf2john().output().unwrap();
    assert_eq!(output.status.code(), Some(255));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));
}

#[test]
fn encrypted_document_produces_one_record() {
    let dir = tempfile::tempdir().unwrap();
    let doc = dir.path().join("secret.odt");
    write_package(&doc, MANIFEST, b"abc");

    let output = odf2john().arg(&doc).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let expected = format!(
        "{}:$odf$*0*0*1024*16*deadbeef*8*0102030405060708*4*01020304*0*616263\n",
        doc.display()
    );
    assert_eq!(stdout, expected);
}

#[test]
fn failures_do_not_stop_later_inputs() {
    let dir = tempfile::tempdir().unwrap();
    let bogus = dir.path().join("bogus.odt");
    std::fs::write(&bogus, b"this is not a zip archive").unwrap();
    let plain = dir.path().join("plain.odt");
    write_package(&plain, PLAIN_MANIFEST, b"<office:document-content/>");
    let secret = dir.path().join("secret.odt");
    write_package(&secret, MANIFEST, &[0x7f; 2000]);

    let output = odf2john()
        .arg(dir.path())
        .arg(&bogus)
        .arg(&plain)
        .arg(&secret)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with(&format!("{}:$odf$*", secret.display())));
    let sample = lines[0].rsplit('*').next().unwrap();
    assert_eq!(sample, "7f".repeat(1024));

    let stderr = String::from_utf8(output.stderr).unwrap();
    let diagnostics: Vec<&str> = stderr.lines().collect();
    assert_eq!(diagnostics.len(), 3);
    assert!(diagnostics[0].contains("not a ZIP archive"));
    assert!(diagnostics[1].starts_with(&bogus.display().to_string()));
    assert!(diagnostics[2].contains("not an encrypted"));
}
