//! Enumeration types for API and export parameters.

use serde::{Deserialize, Serialize};

/// Export format for search results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Plain text report.
    #[default]
    Text,
    /// Word document (OOXML).
    Docx,
    /// Portable Document Format.
    Pdf,
    /// Excel workbook (OOXML).
    Xlsx,
}

impl ExportFormat {
    /// Get the file extension for this format.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Docx => "docx",
            Self::Pdf => "pdf",
            Self::Xlsx => "xlsx",
        }
    }

    /// Get the MIME type for this format.
    #[must_use]
    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::Text => "text/plain; charset=utf-8",
            Self::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            Self::Pdf => "application/pdf",
            Self::Xlsx => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        }
    }

    /// All supported formats, in UI order.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Text, Self::Docx, Self::Pdf, Self::Xlsx]
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "docx" | "word" => Ok(Self::Docx),
            "pdf" => Ok(Self::Pdf),
            "xlsx" | "excel" => Ok(Self::Xlsx),
            other => Err(format!("unknown export format '{other}' (text, docx, pdf, xlsx)")),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

/// Field a search term applies to, mapped to arXiv query prefixes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchField {
    /// Match anywhere (title, abstract, authors, comments).
    #[default]
    All,
    /// Match in the title only.
    Title,
    /// Match author names.
    Author,
    /// Match in the abstract.
    Abstract,
    /// Match an arXiv category code (e.g. cs.CL).
    Category,
}

impl SearchField {
    /// The arXiv `search_query` prefix for this field.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Title => "ti",
            Self::Author => "au",
            Self::Abstract => "abs",
            Self::Category => "cat",
        }
    }
}

impl std::str::FromStr for SearchField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "title" | "ti" => Ok(Self::Title),
            "author" | "au" => Ok(Self::Author),
            "abstract" | "abs" => Ok(Self::Abstract),
            "category" | "cat" => Ok(Self::Category),
            other => {
                Err(format!("unknown search field '{other}' (all, title, author, abstract, category)"))
            }
        }
    }
}

/// Sort key for the arXiv API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortBy {
    /// API relevance ranking.
    #[default]
    Relevance,
    /// Most recently submitted first.
    SubmittedDate,
    /// Most recently updated first.
    LastUpdatedDate,
}

impl SortBy {
    /// The `sortBy` parameter value.
    #[must_use]
    pub const fn api_value(self) -> &'static str {
        match self {
            Self::Relevance => "relevance",
            Self::SubmittedDate => "submittedDate",
            Self::LastUpdatedDate => "lastUpdatedDate",
        }
    }
}

impl std::str::FromStr for SortBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "relevance" => Ok(Self::Relevance),
            "submitteddate" | "submitted" => Ok(Self::SubmittedDate),
            "lastupdateddate" | "updated" => Ok(Self::LastUpdatedDate),
            other => {
                Err(format!("unknown sort key '{other}' (relevance, submitteddate, lastupdateddate)"))
            }
        }
    }
}

/// Sort direction for the arXiv API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Oldest or least relevant first.
    Ascending,
    /// Newest or most relevant first.
    #[default]
    Descending,
}

impl SortOrder {
    /// The `sortOrder` parameter value.
    #[must_use]
    pub const fn api_value(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }
}
