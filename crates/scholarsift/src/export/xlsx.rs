//! Excel (.xlsx) export via rust_xlsxwriter.

use rust_xlsxwriter::{Format, Workbook};

use super::ExportMeta;
use crate::error::{ExportError, ExportResult};
use crate::models::Paper;

const HEADERS: [&str; 6] = ["arXiv ID", "Title", "Authors", "Published", "PDF Link", "Abstract"];

const COLUMN_WIDTHS: [f64; 6] = [16.0, 50.0, 35.0, 12.0, 40.0, 80.0];

/// Render the result set as a one-sheet workbook.
pub fn render(papers: &[Paper], meta: &ExportMeta) -> ExportResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Papers").map_err(ExportError::xlsx)?;

    let header_format = Format::new().set_bold();
    for (col, title) in HEADERS.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *title, &header_format)
            .map_err(ExportError::xlsx)?;
    }

    for (i, paper) in papers.iter().enumerate() {
        let row = (i + 1) as u32;
        sheet.write_string(row, 0, paper.arxiv_id.as_str()).map_err(ExportError::xlsx)?;
        sheet.write_string(row, 1, paper.title_or_default()).map_err(ExportError::xlsx)?;
        sheet.write_string(row, 2, paper.author_names()).map_err(ExportError::xlsx)?;
        sheet.write_string(row, 3, paper.published_date()).map_err(ExportError::xlsx)?;
        sheet.write_string(row, 4, paper.pdf_link()).map_err(ExportError::xlsx)?;
        sheet.write_string(row, 5, paper.summary.as_str()).map_err(ExportError::xlsx)?;
    }

    for (col, width) in COLUMN_WIDTHS.iter().enumerate() {
        sheet.set_column_width(col as u16, *width).map_err(ExportError::xlsx)?;
    }

    workbook.set_properties(
        &rust_xlsxwriter::DocProperties::new()
            .set_title("ScholarSift Paper Export")
            .set_subject(meta.subtitle()),
    );

    workbook.save_to_buffer().map_err(ExportError::xlsx)
}
