// Document sources: where the raw job description and resume text come from.
//
// The engine only ever sees strings. Decoding files (plain text, PDF, DOCX)
// happens here, upstream of the analysis, and failures surface as extraction
// errors with the file path attached.

use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::debug;

/// Main body part inside a DOCX (Office Open XML) archive.
const DOCX_BODY_PART: &str = "word/document.xml";

/// Anything that can produce the raw text of a document.
pub trait DocumentSource {
    fn read_text(&self) -> Result<String>;

    /// Short description for log and error messages.
    fn describe(&self) -> String;
}

/// Text supplied directly (pasted or passed on the command line).
#[derive(Debug, Clone)]
pub struct InlineText(pub String);

impl DocumentSource for InlineText {
    fn read_text(&self) -> Result<String> {
        Ok(self.0.clone())
    }

    fn describe(&self) -> String {
        format!("inline text ({} chars)", self.0.chars().count())
    }
}

/// Supported file formats, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    PlainText,
    Pdf,
    Docx,
}

impl FileFormat {
    /// Pick a decoder from the file extension. Files without an extension are
    /// read as plain text.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "" | "txt" | "text" | "md" => Ok(FileFormat::PlainText),
            "pdf" => Ok(FileFormat::Pdf),
            "docx" => Ok(FileFormat::Docx),
            other => anyhow::bail!(
                "Unsupported file type '.{other}' for {}. Use a .txt, .pdf or .docx \
                 file, or paste the text directly.",
                path.display()
            ),
        }
    }
}

/// A document read from disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentSource for FileSource {
    fn read_text(&self) -> Result<String> {
        let format = FileFormat::from_path(&self.path)?;
        let text = match format {
            FileFormat::PlainText => fs::read_to_string(&self.path)
                .with_context(|| format!("Failed to read {} as UTF-8 text", self.path.display()))?,
            FileFormat::Pdf => {
                let bytes = fs::read(&self.path)
                    .with_context(|| format!("Failed to read {}", self.path.display()))?;
                pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
                    anyhow::anyhow!(
                        "Failed to extract text from PDF {}: {e}",
                        self.path.display()
                    )
                })?
            }
            FileFormat::Docx => docx_text(&self.path)?,
        };

        debug!(
            path = %self.path.display(),
            ?format,
            chars = text.chars().count(),
            "Read document"
        );
        Ok(text)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Pull the visible text out of a DOCX file.
///
/// Only the `w:t` runs of the main body are kept. Paragraphs and line breaks
/// become newlines, tabs become tabs; headers, footers and comments are
/// skipped.
fn docx_text(path: &Path) -> Result<String> {
    let file = File::open(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let mut archive = zip::ZipArchive::new(file)
        .with_context(|| format!("Failed to open DOCX {}: not a valid archive", path.display()))?;

    let mut xml = String::new();
    archive
        .by_name(DOCX_BODY_PART)
        .with_context(|| format!("DOCX {} has no {DOCX_BODY_PART}", path.display()))?
        .read_to_string(&mut xml)
        .with_context(|| format!("Failed to read {DOCX_BODY_PART} in {}", path.display()))?;

    body_text(&xml).with_context(|| format!("Failed to extract text from DOCX {}", path.display()))
}

fn body_text(xml: &str) -> Result<String> {
    let mut reader = Reader::from_str(xml);
    let mut text = String::new();
    let mut in_run = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) if e.name().as_ref() == b"w:t" => in_run = true,
            Event::End(e) => match e.name().as_ref() {
                b"w:t" => in_run = false,
                b"w:p" => text.push('\n'),
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"w:tab" => text.push('\t'),
                b"w:br" | b"w:cr" => text.push('\n'),
                _ => {}
            },
            Event::Text(t) if in_run => text.push_str(&t.unescape()?),
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(text)
}
