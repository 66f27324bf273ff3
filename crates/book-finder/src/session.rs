//! Presentation-side search state.

use crate::models::{BookSummary, ResultSet};
use crate::search::BookSearchService;

/// Current query text and the books from the last completed search.
///
/// Each [`submit`](Self::submit) replaces the previous books wholesale.
#[derive(Debug, Clone)]
pub struct SearchSession {
    service: BookSearchService,
    query: String,
    books: ResultSet,
}

impl SearchSession {
    /// Start an empty session.
    #[must_use]
    pub const fn new(service: BookSearchService) -> Self {
        Self { service, query: String::new(), books: Vec::new() }
    }

    /// Current query text.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replace the query text.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    /// Books from the last completed search.
    #[must_use]
    pub fn books(&self) -> &[BookSummary] {
        &self.books
    }

    /// Run a search for the current query and replace the books.
    pub async fn submit(&mut self) -> &[BookSummary] {
        self.books = self.service.search(&self.query).await;
        &self.books
    }
}
