//! PDF output for the editor content
//!
//! The browser build rasterizes the styled editor surface on its own side;
//! everywhere else [`TextPdfRenderer`] lays the plain text out on A4 pages
//! with the standard Helvetica font.

use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, StringFormat};

use super::text::plain_text;
use crate::error::ExportError;

/// Turns captured editor markup into PDF bytes
pub trait PdfRenderer {
    fn render_pdf(&self, markup: &str) -> Result<Vec<u8>, ExportError>;
}

/// A4 portrait in PDF points
const PAGE_WIDTH: f32 = 595.0;
const PAGE_HEIGHT: f32 = 842.0;

/// Average Helvetica glyph width as a fraction of the font size
const AVERAGE_GLYPH_WIDTH: f32 = 0.5;

#[derive(Debug, Clone)]
pub struct TextPdfRenderer {
    pub font_size: f32,
    pub margin: f32,
    /// Line height as a multiple of the font size
    pub line_spacing: f32,
}

impl Default for TextPdfRenderer {
    fn default() -> Self {
        Self {
            font_size: 11.0,
            margin: 56.0,
            line_spacing: 1.4,
        }
    }
}

impl TextPdfRenderer {
    fn leading(&self) -> f32 {
        self.font_size * self.line_spacing
    }

    fn chars_per_line(&self) -> usize {
        let usable = PAGE_WIDTH - 2.0 * self.margin;
        ((usable / (self.font_size * AVERAGE_GLYPH_WIDTH)) as usize).max(1)
    }

    fn lines_per_page(&self) -> usize {
        let usable = PAGE_HEIGHT - 2.0 * self.margin;
        ((usable / self.leading()) as usize).max(1)
    }

    /// Word-wrapped lines of the document, blank lines preserved
    pub fn layout_lines(&self, text: &str) -> Vec<String> {
        let width = self.chars_per_line();
        let mut lines = Vec::new();

        for paragraph in text.split('\n') {
            let mut line = String::new();
            for word in paragraph.split_whitespace() {
                let line_len = line.chars().count();
                let word_len = word.chars().count();
                if line_len > 0 && line_len + 1 + word_len > width {
                    lines.push(std::mem::take(&mut line));
                }
                if !line.is_empty() {
                    line.push(' ');
                }
                line.push_str(word);
            }
            lines.push(line);
        }

        lines
    }

    fn page_content(&self, lines: &[String]) -> Result<Vec<u8>, ExportError> {
        let top = PAGE_HEIGHT - self.margin - self.font_size;
        let mut operations = vec![
            Operation::new("BT", vec![]),
            Operation::new(
                "Tf",
                vec![Object::Name(b"F1".to_vec()), Object::Real(self.font_size)],
            ),
            Operation::new("TL", vec![Object::Real(self.leading())]),
            Operation::new("Td", vec![Object::Real(self.margin), Object::Real(top)]),
        ];

        for line in lines {
            operations.push(Operation::new(
                "Tj",
                vec![Object::String(win_ansi_bytes(line), StringFormat::Hexadecimal)],
            ));
            operations.push(Operation::new("T*", vec![]));
        }
        operations.push(Operation::new("ET", vec![]));

        Content { operations }
            .encode()
            .map_err(|e| ExportError::PdfRender(format!("content encoding failed: {}", e)))
    }

    fn add_page(
        &self,
        doc: &mut Document,
        pages_id: ObjectId,
        lines: &[String],
    ) -> Result<ObjectId, ExportError> {
        let content = self.page_content(lines)?;
        let content_id = doc.add_object(Stream::new(Dictionary::new(), content));

        let page = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Page".to_vec())),
            ("Parent", Object::Reference(pages_id)),
            (
                "MediaBox",
                Object::Array(vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Real(PAGE_WIDTH),
                    Object::Real(PAGE_HEIGHT),
                ]),
            ),
            ("Contents", Object::Reference(content_id)),
        ]);
        Ok(doc.add_object(page))
    }
}

impl PdfRenderer for TextPdfRenderer {
    fn render_pdf(&self, markup: &str) -> Result<Vec<u8>, ExportError> {
        let lines = self.layout_lines(&plain_text(markup));

        let mut doc = Document::with_version("1.7");
        let pages_id = doc.new_object_id();

        // Helvetica shared by every page through the inherited resources
        let mut font = Dictionary::new();
        font.set("Type", Object::Name(b"Font".to_vec()));
        font.set("Subtype", Object::Name(b"Type1".to_vec()));
        font.set("BaseFont", Object::Name(b"Helvetica".to_vec()));
        font.set("Encoding", Object::Name(b"WinAnsiEncoding".to_vec()));
        let mut fonts = Dictionary::new();
        fonts.set("F1", Object::Dictionary(font));
        let mut resources = Dictionary::new();
        resources.set("Font", Object::Dictionary(fonts));

        let mut page_ids = Vec::new();
        for chunk in lines.chunks(self.lines_per_page()) {
            page_ids.push(self.add_page(&mut doc, pages_id, chunk)?);
        }

        let pages = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Pages".to_vec())),
            ("Count", Object::Integer(page_ids.len() as i64)),
            (
                "Kids",
                Object::Array(page_ids.iter().map(|id| Object::Reference(*id)).collect()),
            ),
            ("Resources", Object::Dictionary(resources)),
        ]);
        doc.objects.insert(pages_id, Object::Dictionary(pages));

        let catalog = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Catalog".to_vec())),
            ("Pages", Object::Reference(pages_id)),
        ]);
        let catalog_id = doc.add_object(catalog);
        doc.trailer.set("Root", Object::Reference(catalog_id));

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer)
            .map_err(|e| ExportError::PdfRender(format!("PDF write failed: {}", e)))?;
        Ok(buffer)
    }
}

/// Latin-1 range maps straight to WinAnsi, typographic punctuation to the
/// 0x80-0x9F block; anything else prints as `?`
fn win_ansi_bytes(line: &str) -> Vec<u8> {
    line.chars()
        .map(|c| match u32::from(c) {
            code @ 0x20..=0x7E | code @ 0xA0..=0xFF => code as u8,
            _ => win_ansi_high_byte(c).unwrap_or(b'?'),
        })
        .collect()
}

fn win_ansi_high_byte(c: char) -> Option<u8> {
    let byte = match c {
        '\u{20AC}' => 0x80,
        '\u{201A}' => 0x82,
        '\u{0192}' => 0x83,
        '\u{201E}' => 0x84,
        '\u{2026}' => 0x85,
        '\u{2020}' => 0x86,
        '\u{2021}' => 0x87,
        '\u{02C6}' => 0x88,
        '\u{2030}' => 0x89,
        '\u{0160}' => 0x8A,
        '\u{2039}' => 0x8B,
        '\u{0152}' => 0x8C,
        '\u{017D}' => 0x8E,
        '\u{2018}' => 0x91,
        '\u{2019}' => 0x92,
        '\u{201C}' => 0x93,
        '\u{201D}' => 0x94,
        '\u{2022}' => 0x95,
        '\u{2013}' => 0x96,
        '\u{2014}' => 0x97,
        '\u{02DC}' => 0x98,
        '\u{2122}' => 0x99,
        '\u{0161}' => 0x9A,
        '\u{203A}' => 0x9B,
        '\u{0153}' => 0x9C,
        '\u{017E}' => 0x9E,
        '\u{0178}' => 0x9F,
        _ => return None,
    };
    Some(byte)
}
