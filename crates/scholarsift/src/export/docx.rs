//! Word (.docx) export via docx-rs.

use std::io::Cursor;

use docx_rs::{Docx, Paragraph, Run};

use super::{ATTRIBUTION, ExportMeta, REPORT_TITLE};
use crate::error::{ExportError, ExportResult};
use crate::models::Paper;

// Run sizes are half-points: 32 = 16pt.
const TITLE_SIZE: usize = 32;
const HEADING_SIZE: usize = 26;
const BODY_SIZE: usize = 22;

/// Render the report as a Word document.
pub fn render(papers: &[Paper], meta: &ExportMeta) -> ExportResult<Vec<u8>> {
    let mut doc = Docx::new()
        .add_paragraph(heading(REPORT_TITLE, TITLE_SIZE))
        .add_paragraph(body_line(&meta.subtitle()))
        .add_paragraph(Paragraph::new());

    for (i, paper) in papers.iter().enumerate() {
        let title = format!("Paper {}: {}", i + 1, paper.title_or_default());
        doc = doc
            .add_paragraph(heading(&title, HEADING_SIZE))
            .add_paragraph(body_line(&format!("Authors: {}", paper.author_names())))
            .add_paragraph(body_line(&format!("Published: {}", paper.published_date())))
            .add_paragraph(body_line(&format!("PDF: {}", paper.pdf_link())));

        if let Some(doi) = &paper.doi {
            doc = doc.add_paragraph(body_line(&format!("DOI: {doi}")));
        }

        doc = doc
            .add_paragraph(body_line(&format!("Abstract: {}", paper.summary)))
            .add_paragraph(Paragraph::new());
    }

    doc = doc.add_paragraph(body_line(ATTRIBUTION));

    let mut buffer = Cursor::new(Vec::new());
    doc.build().pack(&mut buffer).map_err(ExportError::docx)?;
    Ok(buffer.into_inner())
}

fn heading(text: &str, size: usize) -> Paragraph {
    Paragraph::new().add_run(Run::new().add_text(text).size(size).bold())
}

fn body_line(text: &str) -> Paragraph {
    Paragraph::new().add_run(Run::new().add_text(text).size(BODY_SIZE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_produces_zip_container() {
        let papers = vec![Paper {
            arxiv_id: "2301.07041v1".to_string(),
            title: "A Paper".to_string(),
            authors: vec!["Jane Roe".to_string()],
            summary: "Findings.".to_string(),
            abs_url: "http://arxiv.org/abs/2301.07041v1".to_string(),
            ..Paper::default()
        }];
        let meta = ExportMeta::new("all:paper");

        let bytes = render(&papers, &meta).unwrap();
        // OOXML is a zip archive
        assert_eq!(&bytes[..4], b"PK\x03\x04");
    }
}
