//! PDF export via printpdf.
//!
//! Text-only layout: lines are wrapped to the page width and a new page
//! is started whenever the cursor reaches the bottom margin.

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference};

use super::{ATTRIBUTION, ExportMeta, REPORT_TITLE};
use crate::error::{ExportError, ExportResult};
use crate::models::Paper;

// US letter, matching the original report layout.
const PAGE_WIDTH: Mm = Mm(215.9);
const PAGE_HEIGHT: Mm = Mm(279.4);
const MARGIN: Mm = Mm(18.0);

const TITLE_SIZE: f32 = 14.0;
const HEADING_SIZE: f32 = 11.0;
const BODY_SIZE: f32 = 9.0;

const TITLE_LEADING: Mm = Mm(8.0);
const BODY_LEADING: Mm = Mm(4.5);

/// Characters per wrapped line at body size on a letter page.
const WRAP_COLUMNS: usize = 100;

/// Render the report as a PDF.
pub fn render(papers: &[Paper], meta: &ExportMeta) -> ExportResult<Vec<u8>> {
    let (doc, page, layer) = PdfDocument::new(REPORT_TITLE, PAGE_WIDTH, PAGE_HEIGHT, "text");
    let font = doc.add_builtin_font(BuiltinFont::Helvetica).map_err(ExportError::pdf)?;
    let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold).map_err(ExportError::pdf)?;

    let mut writer = PageWriter {
        layer: doc.get_page(page).get_layer(layer),
        doc: &doc,
        y: Mm(PAGE_HEIGHT.0 - MARGIN.0),
    };

    writer.line(REPORT_TITLE, &bold, TITLE_SIZE, TITLE_LEADING);
    writer.wrapped(&meta.subtitle(), &font, BODY_SIZE, BODY_LEADING);
    writer.gap(BODY_LEADING);

    for (i, paper) in papers.iter().enumerate() {
        let title = format!("Paper {}: {}", i + 1, paper.title_or_default());
        writer.wrapped(&title, &bold, HEADING_SIZE, Mm(5.5));
        writer.wrapped(&format!("Authors: {}", paper.author_names()), &font, BODY_SIZE, BODY_LEADING);
        writer.wrapped(&format!("Published: {}", paper.published_date()), &font, BODY_SIZE, BODY_LEADING);
        writer.wrapped(&format!("PDF: {}", paper.pdf_link()), &font, BODY_SIZE, BODY_LEADING);

        if let Some(doi) = &paper.doi {
            writer.wrapped(&format!("DOI: {doi}"), &font, BODY_SIZE, BODY_LEADING);
        }

        writer.wrapped(&format!("Abstract: {}", paper.summary), &font, BODY_SIZE, BODY_LEADING);
        writer.gap(BODY_LEADING);
    }

    writer.wrapped(ATTRIBUTION, &font, BODY_SIZE, BODY_LEADING);

    doc.save_to_bytes().map_err(ExportError::pdf)
}

/// Cursor over the current page layer; adds pages on overflow.
struct PageWriter<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    y: Mm,
}

impl PageWriter<'_> {
    /// Write one pre-wrapped line, breaking the page first if needed.
    fn line(&mut self, text: &str, font: &IndirectFontRef, size: f32, leading: Mm) {
        if self.y.0 < MARGIN.0 {
            let (page, layer) = self.doc.add_page(PAGE_WIDTH, PAGE_HEIGHT, "text");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = Mm(PAGE_HEIGHT.0 - MARGIN.0);
        }

        self.layer.use_text(text, size, MARGIN, self.y, font);
        self.y = Mm(self.y.0 - leading.0);
    }

    /// Wrap text to the page width and write every line.
    fn wrapped(&mut self, text: &str, font: &IndirectFontRef, size: f32, leading: Mm) {
        for line in wrap(text, WRAP_COLUMNS) {
            self.line(&line, font, size, leading);
        }
    }

    /// Vertical gap.
    fn gap(&mut self, leading: Mm) {
        self.y = Mm(self.y.0 - leading.0);
    }
}

/// Greedy word wrap; unbreakable words are hard-split at the column limit.
fn wrap(text: &str, columns: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > columns {
            lines.push(std::mem::take(&mut current));
        }

        if word.chars().count() > columns {
            // Hard-split a word longer than the line
            let mut rest: Vec<char> = word.chars().collect();
            while rest.len() > columns {
                let chunk: String = rest.drain(..columns).collect();
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                lines.push(chunk);
            }
            current = rest.into_iter().collect();
        } else {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_short_line() {
        assert_eq!(wrap("short line", 100), vec!["short line"]);
    }

    #[test]
    fn test_wrap_long_text() {
        let text = "word ".repeat(60);
        let lines = wrap(&text, 20);
        assert!(lines.len() > 10);
        assert!(lines.iter().all(|l| l.chars().count() <= 20));
    }

    #[test]
    fn test_wrap_unbreakable_word() {
        let word = "x".repeat(250);
        let lines = wrap(&word, 100);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].len(), 100);
        assert_eq!(lines[2].len(), 50);
    }

    #[test]
    fn test_render_produces_pdf() {
        let long_abstract = "A very long abstract sentence repeated many times. ".repeat(40);
        let papers = vec![
            Paper {
                arxiv_id: "2301.07041v1".to_string(),
                title: "A Paper With A Fairly Long Title That Will Need Wrapping On The Page"
                    .to_string(),
                authors: vec!["Jane Roe".to_string()],
                summary: long_abstract,
                abs_url: "http://arxiv.org/abs/2301.07041v1".to_string(),
                ..Paper::default()
            };
            5
        ];
        let meta = ExportMeta::new("all:paper");

        let bytes = render(&papers, &meta).unwrap();
        assert_eq!(&bytes[..5], b"%PDF-");
    }
}
