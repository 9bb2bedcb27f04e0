//! Compact JSON projection for API responses.

use serde_json::{Value, json};

use crate::models::Paper;

/// Create a compact paper representation for JSON output.
///
/// Optional fields appear only when the upstream entry carried them.
#[must_use]
pub fn compact_paper(paper: &Paper) -> Value {
    let mut obj = json!({
        "id": paper.arxiv_id,
        "title": paper.title_or_default(),
        "authors": paper.authors,
        "published": paper.published_date(),
        "abs_url": paper.abs_url,
        "pdf_url": paper.pdf_link(),
        "summary": paper.summary,
    });

    if let Some(doi) = &paper.doi {
        obj["doi"] = json!(doi);
    }

    if let Some(category) = &paper.primary_category {
        obj["primary_category"] = json!(category);
    }

    if let Some(journal) = &paper.journal_ref {
        obj["journal_ref"] = json!(journal);
    }

    if let Some(comment) = &paper.comment {
        obj["comment"] = json!(comment);
    }

    obj
}
