//! Document export: one writer per [`ExportFormat`].
//!
//! Every writer renders the same report shape into its format's byte
//! representation: a title, one block per paper (title, authors,
//! published date, PDF link, abstract), and an attribution footer.

mod docx;
mod pdf;
mod text;
mod xlsx;

use chrono::{DateTime, Utc};

use crate::error::{ExportError, ExportResult};
use crate::models::{ExportFormat, Paper};

/// Footer line appended to every export.
pub const ATTRIBUTION: &str = "Exported from ScholarSift — arXiv paper search";

/// Report title used across formats.
pub const REPORT_TITLE: &str = "ScholarSift Paper Export Report";

/// Metadata for the report header.
#[derive(Debug, Clone)]
pub struct ExportMeta {
    /// Query string that produced the result set.
    pub query: String,

    /// Export timestamp.
    pub generated_at: DateTime<Utc>,
}

impl ExportMeta {
    /// Create metadata for a query, stamped now.
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self { query: query.into(), generated_at: Utc::now() }
    }

    /// Header subtitle: query plus timestamp.
    #[must_use]
    pub fn subtitle(&self) -> String {
        format!(
            "Query: {} — generated {}",
            self.query,
            self.generated_at.format("%Y-%m-%d %H:%M UTC")
        )
    }

    /// Download file name for a format.
    #[must_use]
    pub fn filename(&self, format: ExportFormat) -> String {
        format!("scholarsift_export.{}", format.extension())
    }
}

/// Render a result set into the requested format.
///
/// # Errors
///
/// Returns [`ExportError::NoPapers`] for an empty result set, or the
/// underlying writer's error.
pub fn export_papers(
    papers: &[Paper],
    format: ExportFormat,
    meta: &ExportMeta,
) -> ExportResult<Vec<u8>> {
    if papers.is_empty() {
        return Err(ExportError::NoPapers);
    }

    tracing::info!(
        format = %format,
        count = papers.len(),
        query = %meta.query,
        "Exporting papers"
    );

    match format {
        ExportFormat::Text => Ok(text::render(papers, meta).into_bytes()),
        ExportFormat::Docx => docx::render(papers, meta),
        ExportFormat::Pdf => pdf::render(papers, meta),
        ExportFormat::Xlsx => xlsx::render(papers, meta),
    }
}
