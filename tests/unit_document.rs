// Unit tests for document sources.
//
// File-backed sources write to a temp directory; nothing touches the network.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use fitcheck::document::{DocumentSource, FileSource, InlineText};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// Write a minimal DOCX archive holding the given parts.
fn write_docx(path: &Path, parts: &[(&str, &str)]) {
    let mut zip = ZipWriter::new(File::create(path).unwrap());
    for (name, body) in parts {
        zip.start_file(*name, SimpleFileOptions::default()).unwrap();
        zip.write_all(body.as_bytes()).unwrap();
    }
    zip.finish().unwrap();
}

const DOCUMENT_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    <w:p><w:r><w:t>Senior Python engineer</w:t></w:r></w:p>
    <w:p><w:r><w:t xml:space="preserve">SQL, React </w:t></w:r><w:r><w:t>&amp; C++</w:t></w:r></w:p>
  </w:body>
</w:document>"#;

#[test]
fn reads_plain_text_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("resume.txt");
    fs::write(&path, "Python and SQL engineer").unwrap();

    let source = FileSource::new(&path);
    assert_eq!(source.read_text().unwrap(), "Python and SQL engineer");
    assert!(source.describe().ends_with("resume.txt"));
}

#[test]
fn reads_extensionless_file_as_text() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("job_description");
    fs::write(&path, "Hiring a React developer").unwrap();

    assert_eq!(
        FileSource::new(&path).read_text().unwrap(),
        "Hiring a React developer"
    );
}

#[test]
fn missing_file_is_an_error_with_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.txt");
    let err = FileSource::new(&path).read_text().unwrap_err();
    assert!(format!("{err:#}").contains("nope.txt"));
}

#[test]
fn invalid_utf8_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("binary.txt");
    fs::write(&path, [0xff, 0xfe, 0x00, 0x80]).unwrap();
    assert!(FileSource::new(&path).read_text().is_err());
}

#[test]
fn corrupt_pdf_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("resume.pdf");
    fs::write(&path, "this is not a pdf").unwrap();
    let err = FileSource::new(&path).read_text().unwrap_err();
    assert!(err.to_string().contains("resume.pdf"));
}

#[test]
fn reads_docx_text_runs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("resume.docx");
    write_docx(
        &path,
        &[
            ("[Content_Types].xml", "<Types/>"),
            ("word/document.xml", DOCUMENT_XML),
        ],
    );

    let text = FileSource::new(&path).read_text().unwrap();
    assert_eq!(text, "Senior Python engineer\nSQL, React & C++\n");
}

#[test]
fn docx_without_body_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.docx");
    write_docx(&path, &[("[Content_Types].xml", "<Types/>")]);

    let err = FileSource::new(&path).read_text().unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("empty.docx"));
    assert!(message.contains("word/document.xml"));
}

#[test]
fn corrupt_docx_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("resume.docx");
    fs::write(&path, "PK not really a zip").unwrap();
    let err = FileSource::new(&path).read_text().unwrap_err();
    assert!(err.to_string().contains("resume.docx"));
}

#[test]
fn unsupported_extension_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("resume.rtf");
    fs::write(&path, "{\\rtf1}").unwrap();
    let err = FileSource::new(&path).read_text().unwrap_err();
    assert!(err.to_string().contains("Unsupported file type"));
}

#[test]
fn inline_text_passes_through() {
    let source = InlineText("  spaced  ".to_string());
    assert_eq!(source.read_text().unwrap(), "  spaced  ");
}
