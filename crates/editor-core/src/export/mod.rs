//! Document export (PDF and DOC)
//!
//! An [`ExportJob`] owns a copy of the editor content taken at the moment
//! the user asked for a download. PDF output goes through a [`PdfRenderer`];
//! DOC output is the plain text with a UTF-8 byte order mark, which word
//! processors open as a document.

pub mod pdf;
pub mod text;

use serde::{Deserialize, Serialize};

use crate::error::ExportError;

pub use pdf::{PdfRenderer, TextPdfRenderer};
pub use text::plain_text;

const UTF8_BOM: &str = "\u{feff}";

/// Download format for the current document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Pdf,
    Doc,
}

impl ExportFormat {
    /// Get the MIME type for this format
    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "application/pdf",
            ExportFormat::Doc => "application/msword",
        }
    }

    /// Get the file extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Doc => "doc",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pdf" => Ok(ExportFormat::Pdf),
            "doc" => Ok(ExportFormat::Doc),
            other => Err(ExportError::UnknownFormat(other.to_string())),
        }
    }
}

/// A finished download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub filename: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Content captured for one export
#[derive(Debug, Clone)]
pub struct ExportJob {
    format: ExportFormat,
    content: String,
    file_stem: String,
}

impl ExportJob {
    pub fn new(format: ExportFormat, content: String) -> Self {
        Self {
            format,
            content,
            file_stem: "document".to_string(),
        }
    }

    /// Name the download `<stem>.<ext>` instead of `document.<ext>`
    pub fn with_file_stem(mut self, stem: impl Into<String>) -> Self {
        self.file_stem = stem.into();
        self
    }

    pub fn format(&self) -> ExportFormat {
        self.format
    }

    /// The captured editor markup
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn filename(&self) -> String {
        format!("{}.{}", self.file_stem, self.format.extension())
    }

    /// Produce the artifact with the given PDF renderer.
    ///
    /// Any failure is final; no artifact is returned.
    pub fn run(&self, renderer: &dyn PdfRenderer) -> Result<ExportArtifact, ExportError> {
        let bytes = match self.format {
            ExportFormat::Pdf => renderer.render_pdf(&self.content)?,
            ExportFormat::Doc => doc_bytes(&self.content),
        };

        tracing::info!(
            format = %self.format,
            bytes = bytes.len(),
            "exported document"
        );

        Ok(ExportArtifact {
            filename: self.filename(),
            mime_type: self.format.mime_type(),
            bytes,
        })
    }

    /// Produce the artifact with the built-in text PDF renderer
    pub fn run_default(&self) -> Result<ExportArtifact, ExportError> {
        self.run(&TextPdfRenderer::default())
    }
}

fn doc_bytes(markup: &str) -> Vec<u8> {
    let text = plain_text(markup);
    let mut out = String::with_capacity(UTF8_BOM.len() + text.len());
    out.push_str(UTF8_BOM);
    out.push_str(&text);
    out.into_bytes()
}
