//! Paper domain model built from arXiv Atom entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::feed::AtomEntry;

/// A paper record from an arXiv search response.
///
/// Fields are copied verbatim from the upstream entry, except that titles
/// and abstracts have their folding whitespace flattened.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Paper {
    /// arXiv identifier including the version suffix, e.g. `2301.07041v1`.
    pub arxiv_id: String,

    /// Paper title.
    pub title: String,

    /// Author names in upstream order.
    pub authors: Vec<String>,

    /// Abstract text.
    pub summary: String,

    /// First submission timestamp.
    #[serde(default)]
    pub published: Option<DateTime<Utc>>,

    /// Latest revision timestamp.
    #[serde(default)]
    pub updated: Option<DateTime<Utc>>,

    /// Abstract page URL.
    pub abs_url: String,

    /// PDF URL.
    #[serde(default)]
    pub pdf_url: Option<String>,

    /// DOI, when assigned.
    #[serde(default)]
    pub doi: Option<String>,

    /// Author comment (page count, venue notes).
    #[serde(default)]
    pub comment: Option<String>,

    /// Journal reference, when published.
    #[serde(default)]
    pub journal_ref: Option<String>,

    /// Subject categories.
    #[serde(default)]
    pub categories: Vec<String>,

    /// Primary subject category.
    #[serde(default)]
    pub primary_category: Option<String>,
}

impl Paper {
    /// Get the paper title, falling back to "Untitled" if blank.
    #[must_use]
    pub fn title_or_default(&self) -> &str {
        if self.title.is_empty() { "Untitled" } else { &self.title }
    }

    /// Get author names as a comma-separated string.
    #[must_use]
    pub fn author_names(&self) -> String {
        self.authors.join(", ")
    }

    /// Submission date as `YYYY-MM-DD`, or "unknown".
    #[must_use]
    pub fn published_date(&self) -> String {
        self.published.map_or_else(|| "unknown".to_string(), |d| d.format("%Y-%m-%d").to_string())
    }

    /// Identifier without the version suffix, e.g. `2301.07041`.
    #[must_use]
    pub fn id_base(&self) -> &str {
        match self.arxiv_id.rfind('v') {
            Some(pos) if self.arxiv_id[pos + 1..].chars().all(|c| c.is_ascii_digit())
                && pos + 1 < self.arxiv_id.len() =>
            {
                &self.arxiv_id[..pos]
            }
            _ => &self.arxiv_id,
        }
    }

    /// Best PDF link: the feed's, or one derived from the abstract URL.
    #[must_use]
    pub fn pdf_link(&self) -> String {
        self.pdf_url.clone().unwrap_or_else(|| self.abs_url.replace("/abs/", "/pdf/"))
    }
}

impl From<AtomEntry> for Paper {
    fn from(entry: AtomEntry) -> Self {
        let arxiv_id = entry.id.rsplit('/').next().unwrap_or(&entry.id).to_string();
        let pdf_url = entry.links.iter().find(|l| l.is_pdf()).map(|l| l.href.clone());

        Self {
            arxiv_id,
            title: normalize_whitespace(&entry.title),
            authors: entry.authors.into_iter().map(|a| a.name).collect(),
            summary: normalize_whitespace(&entry.summary),
            published: entry.published,
            updated: entry.updated,
            abs_url: entry.id,
            pdf_url,
            doi: entry.doi,
            comment: entry.comment.as_deref().map(normalize_whitespace),
            journal_ref: entry.journal_ref,
            categories: entry.categories.into_iter().map(|c| c.term).collect(),
            primary_category: entry.primary_category.map(|c| c.term),
        }
    }
}

/// One page of search results.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResult {
    /// The query string that produced this page.
    pub query: String,

    /// Total matches reported by arXiv (may exceed this page).
    pub total: u64,

    /// Index of the first paper in the full result set.
    pub start: u64,

    /// Papers in this page.
    pub papers: Vec<Paper>,
}

impl SearchResult {
    /// Check if the result set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.papers.is_empty()
    }

    /// Check if arXiv holds more matches than this page.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.start + (self.papers.len() as u64) < self.total
    }
}

/// Flatten arXiv's folding whitespace (titles and abstracts wrap across
/// lines with leading indentation).
#[must_use]
pub fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
