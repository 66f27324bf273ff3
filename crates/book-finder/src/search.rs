//! Book search service: query text in, ordered [`ResultSet`] out.

use crate::client::CatalogClient;
use crate::error::SearchResult;
use crate::models::ResultSet;

/// Stateless search over a catalog client.
///
/// Every call issues one request and returns a fresh result set; nothing is
/// remembered between calls.
#[derive(Debug, Clone)]
pub struct BookSearchService {
    client: CatalogClient,
}

impl BookSearchService {
    /// Wrap a catalog client.
    #[must_use]
    pub const fn new(client: CatalogClient) -> Self {
        Self { client }
    }

    /// Underlying catalog client.
    #[must_use]
    pub const fn client(&self) -> &CatalogClient {
        &self.client
    }

    /// Search and report failures to the caller.
    ///
    /// An empty `Ok` means the catalog had no matches (or no usable item
    /// collection).
    ///
    /// # Errors
    ///
    /// Returns the transport, status or parse failure of the single request.
    pub async fn try_search(&self, query: &str) -> SearchResult<ResultSet> {
        let response = self.client.fetch_volumes(query).await?;
        let books = response.summaries();

        tracing::info!(
            query,
            results = books.len(),
            total_items = ?response.total_items,
            "Book search completed"
        );

        Ok(books)
    }

    /// Search, degrading any failure to an empty result set.
    ///
    /// The failure is logged at `error` level; callers cannot tell it apart
    /// from "no matches". Use [`Self::try_search`] to see the error.
    pub async fn search(&self, query: &str) -> ResultSet {
        match self.try_search(query).await {
            Ok(books) => books,
            Err(e) => {
                tracing::error!(
                    query,
                    kind = %e.kind(),
                    error = %e,
                    "Error searching books"
                );
                ResultSet::new()
            }
        }
    }
}
