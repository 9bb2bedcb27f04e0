//! Output formatting for the UI and the JSON API.

mod json;
mod text;

pub use json::compact_paper;
pub use text::{format_paper, format_search_result};
