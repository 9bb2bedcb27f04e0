//! Input parameter types for search operations.

use serde::{Deserialize, Serialize};

use super::enums::{SearchField, SortBy, SortOrder};

/// Parameters for one arXiv search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQuery {
    /// The search term.
    pub query: String,

    /// Field the term applies to.
    #[serde(default)]
    pub field: SearchField,

    /// Index of the first result to return.
    #[serde(default)]
    pub start: u64,

    /// Number of results to return.
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// Sort key.
    #[serde(default)]
    pub sort_by: SortBy,

    /// Sort direction.
    #[serde(default)]
    pub sort_order: SortOrder,
}

fn default_max_results() -> usize {
    crate::config::api::DEFAULT_MAX_RESULTS
}

impl SearchQuery {
    /// Create a keyword query over all fields with default paging.
    #[must_use]
    pub fn keyword(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            field: SearchField::All,
            start: 0,
            max_results: default_max_results(),
            sort_by: SortBy::default(),
            sort_order: SortOrder::default(),
        }
    }

    /// Set the field the term applies to.
    #[must_use]
    pub const fn with_field(mut self, field: SearchField) -> Self {
        self.field = field;
        self
    }

    /// Set the number of results to return.
    #[must_use]
    pub const fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Set the sort key and direction.
    #[must_use]
    pub const fn with_sort(mut self, sort_by: SortBy, sort_order: SortOrder) -> Self {
        self.sort_by = sort_by;
        self.sort_order = sort_order;
        self
    }

    /// The `search_query` parameter value, e.g. `all:electron`.
    #[must_use]
    pub fn search_query(&self) -> String {
        format!("{}:{}", self.field.prefix(), self.query)
    }

    /// Check the query is usable before hitting the API.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.query.trim().is_empty()
    }
}
