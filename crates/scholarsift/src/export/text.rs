//! Plain text export.

use super::{ATTRIBUTION, ExportMeta, REPORT_TITLE};
use crate::formatters::format_paper;
use crate::models::Paper;

const RULE: &str = "------------------------------------------------------------";

/// Render the report as plain text.
#[must_use]
pub fn render(papers: &[Paper], meta: &ExportMeta) -> String {
    let mut output = format!("{REPORT_TITLE}\n{}\n\n", meta.subtitle());

    for (i, paper) in papers.iter().enumerate() {
        output.push_str(&format_paper(paper, i + 1));
        output.push_str(RULE);
        output.push_str("\n\n");
    }

    output.push_str(ATTRIBUTION);
    output.push('\n');
    output
}
