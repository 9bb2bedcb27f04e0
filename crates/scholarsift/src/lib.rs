//! ScholarSift
//!
//! A small web service and CLI that searches the arXiv export API for papers
//! matching a keyword and exports the results as plain text, Word, PDF, or
//! Excel documents.
//!
//! # Features
//!
//! - **Search**: keyword queries against the arXiv Atom API with field
//!   prefixes (title, author, abstract, category)
//! - **Export**: four download formats rendered from one result set
//! - **Async-first**: built on Tokio with retrying reqwest middleware
//! - **Cached**: short-TTL response cache so export never re-hits arXiv
//!
//! # Example
//!
//! ```no_run
//! use scholarsift::{client::ArxivClient, config::Config, models::SearchQuery};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = ArxivClient::new(Config::from_env()?)?;
//!     let result = client.search(&SearchQuery::keyword("quantum computing")).await?;
//!     println!("{} papers", result.papers.len());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod export;
pub mod formatters;
pub mod models;
pub mod server;

pub use client::ArxivClient;
pub use config::Config;
pub use error::{ClientError, ExportError};
