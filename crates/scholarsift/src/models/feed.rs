//! Serde types for the arXiv Atom response, parsed with quick-xml.
//!
//! Field names keep the namespace prefixes as they appear on the wire
//! (`opensearch:totalResults`, `arxiv:doi`). Repeated elements (`author`,
//! `link`, `category`) are contiguous in arXiv responses, so plain `Vec`
//! fields deserialize cleanly.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Top-level Atom feed returned by `GET /api/query`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AtomFeed {
    /// Feed title, e.g. `ArXiv Query: search_query=all:electron...`.
    pub title: String,

    /// Total matches reported by the search engine (may exceed the page).
    #[serde(rename = "totalResults")]
    pub total_results: u64,

    /// Index of the first entry in this page.
    #[serde(rename = "startIndex")]
    pub start_index: u64,

    /// Page size the server applied.
    #[serde(rename = "itemsPerPage")]
    pub items_per_page: u64,

    /// Result entries; empty when nothing matched.
    #[serde(rename = "entry")]
    pub entries: Vec<AtomEntry>,
}

/// A single `<entry>` element.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AtomEntry {
    /// Abstract page URL doubling as the entry id,
    /// e.g. `http://arxiv.org/abs/2301.07041v1`.
    pub id: String,

    /// Paper title (may contain folding newlines).
    pub title: String,

    /// Abstract text.
    pub summary: String,

    /// First submission timestamp.
    pub published: Option<DateTime<Utc>>,

    /// Latest revision timestamp.
    pub updated: Option<DateTime<Utc>>,

    /// Authors in the order arXiv lists them.
    #[serde(rename = "author")]
    pub authors: Vec<AtomAuthor>,

    /// Alternate and related links (abstract page, PDF, DOI).
    #[serde(rename = "link")]
    pub links: Vec<AtomLink>,

    /// Subject categories.
    #[serde(rename = "category")]
    pub categories: Vec<AtomCategory>,

    /// Primary subject category.
    #[serde(rename = "primary_category")]
    pub primary_category: Option<AtomCategory>,

    /// Author comment (page count, venue notes).
    #[serde(rename = "comment")]
    pub comment: Option<String>,

    /// Journal reference, when published.
    #[serde(rename = "journal_ref")]
    pub journal_ref: Option<String>,

    /// DOI, when assigned.
    #[serde(rename = "doi")]
    pub doi: Option<String>,
}

impl AtomEntry {
    /// arXiv reports malformed queries as a pseudo-entry whose id points
    /// at `api/errors`; the summary carries the message.
    #[must_use]
    pub fn is_error_entry(&self) -> bool {
        self.id.contains("api/errors")
    }
}

/// `<author>` child element.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AtomAuthor {
    /// Author display name.
    pub name: String,

    /// Affiliation, rarely present.
    #[serde(rename = "affiliation")]
    pub affiliation: Option<String>,
}

/// `<link>` child element.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AtomLink {
    /// Link target.
    #[serde(rename = "@href")]
    pub href: String,

    /// Relation: `alternate` for the abstract page, `related` otherwise.
    #[serde(rename = "@rel")]
    pub rel: Option<String>,

    /// Link title; the PDF link carries `title="pdf"`.
    #[serde(rename = "@title")]
    pub title: Option<String>,

    /// MIME type of the target.
    #[serde(rename = "@type")]
    pub content_type: Option<String>,
}

impl AtomLink {
    /// Whether this link points at the PDF rendition.
    #[must_use]
    pub fn is_pdf(&self) -> bool {
        self.title.as_deref() == Some("pdf")
            || self.content_type.as_deref() == Some("application/pdf")
    }
}

/// `<category>` / `<arxiv:primary_category>` element.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AtomCategory {
    /// Category code, e.g. `cs.CL`.
    #[serde(rename = "@term")]
    pub term: String,
}
