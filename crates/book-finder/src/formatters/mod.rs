//! Output formatters for Markdown and JSON.

mod json;
mod markdown;

pub use self::json::*;
pub use markdown::*;

use crate::models::BookSummary;

/// Output format for rendered result sets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable Markdown list
    #[default]
    Markdown,
    /// Pretty-printed JSON array
    Json,
}

/// Render books in the requested format.
///
/// # Errors
///
/// Returns error if JSON serialization fails.
pub fn render(books: &[BookSummary], format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Markdown => Ok(format_books_markdown(books)),
        OutputFormat::Json => format_books_json(books),
    }
}
