//! Plain-text report rendering for the UI result box.

use crate::models::{Paper, SearchResult};

/// Rule between paper blocks.
const RULE: &str = "------------------------------------------------------------";

/// Format a search result as the report shown in the browser result box.
#[must_use]
pub fn format_search_result(result: &SearchResult) -> String {
    if result.is_empty() {
        return "No matching papers found.".to_string();
    }

    let mut output = format!(
        "ScholarSift search results (query: {}) — showing {} of {} matches\n\n",
        result.query,
        result.papers.len(),
        result.total
    );

    for (i, paper) in result.papers.iter().enumerate() {
        output.push_str(&format_paper(paper, i + 1));
        output.push_str(RULE);
        output.push_str("\n\n");
    }

    output
}

/// Format a single paper as a labeled text block.
#[must_use]
pub fn format_paper(paper: &Paper, index: usize) -> String {
    let mut output = format!("Paper {index}\n");

    output.push_str(&format!("Title     : {}\n", paper.title_or_default()));
    output.push_str(&format!("Authors   : {}\n", paper.author_names()));
    output.push_str(&format!("Published : {}\n", paper.published_date()));
    output.push_str(&format!("PDF       : {}\n", paper.pdf_link()));

    if let Some(doi) = &paper.doi {
        output.push_str(&format!("DOI       : {doi}\n"));
    }

    if let Some(journal) = &paper.journal_ref {
        output.push_str(&format!("Journal   : {journal}\n"));
    }

    output.push_str(&format!("Abstract  : {}\n", paper.summary));
    output
}
