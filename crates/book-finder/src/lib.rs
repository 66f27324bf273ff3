//! Book Finder
//!
//! Searches a public book catalog (the Google Books volumes API by default)
//! by free-text query and normalizes the matches into display-ready records.
//!
//! # Features
//!
//! - **One request per search**: no retries, caching or pagination
//! - **Stable defaults**: every missing field falls back on its own
//! - **Explicit failures**: [`BookSearchService::try_search`] reports them,
//!   [`BookSearchService::search`] degrades them to an empty list
//!
//! # Example
//!
//! ```no_run
//! use book_finder::{BookSearchService, CatalogClient, Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let service = BookSearchService::new(CatalogClient::new(config)?);
//!
//!     for book in service.search("dune").await {
//!         println!("{} ({})", book.title, book.isbn);
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod formatters;
pub mod models;
pub mod search;
pub mod session;

pub use client::CatalogClient;
pub use config::Config;
pub use error::{FailureKind, SearchError, SearchResult};
pub use models::{BookSummary, ResultSet};
pub use search::BookSearchService;
pub use session::SearchSession;
