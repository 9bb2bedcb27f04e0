//! Data models for arXiv search and export.
//!
//! `feed` mirrors the Atom wire format; `paper` is the domain record the
//! rest of the crate works with.

mod enums;
mod feed;
mod inputs;
mod paper;

pub use enums::{ExportFormat, SearchField, SortBy, SortOrder};
pub use feed::{AtomAuthor, AtomCategory, AtomEntry, AtomFeed, AtomLink};
pub use inputs::SearchQuery;
pub use paper::{Paper, SearchResult, normalize_whitespace};
