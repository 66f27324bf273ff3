//! JSON output formatting.

use serde_json::Value;

use crate::models::BookSummary;

/// Compact JSON object for one book; `image` only appears when present.
#[must_use]
pub fn book_json(book: &BookSummary) -> Value {
    serde_json::to_value(book).unwrap_or(Value::Null)
}

/// Format a list of books as a pretty-printed JSON array.
///
/// # Errors
///
/// Returns error if serialization fails.
pub fn format_books_json(books: &[BookSummary]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(books)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_book_json_fields() {
        let book = BookSummary {
            title: "Dune".to_string(),
            authors: "Frank Herbert".to_string(),
            isbn: "9780441013593".to_string(),
            description: "...".to_string(),
            image: Some("http://x/img.jpg".to_string()),
        };

        assert_eq!(
            book_json(&book),
            json!({
                "title": "Dune",
                "authors": "Frank Herbert",
                "isbn": "9780441013593",
                "description": "...",
                "image": "http://x/img.jpg"
            })
        );
    }

    #[test]
    fn test_empty_list_is_empty_array() {
        assert_eq!(format_books_json(&[]).unwrap(), "[]");
    }
}
