//! Markdown output formatting.

use crate::models::BookSummary;

/// Format a list of books as Markdown.
#[must_use]
pub fn format_books_markdown(books: &[BookSummary]) -> String {
    if books.is_empty() {
        return "No books found.".to_string();
    }

    let mut output = format!("# Books ({} results)\n\n", books.len());

    for (i, book) in books.iter().enumerate() {
        output.push_str(&format_book_markdown(book, i + 1));
        output.push_str("\n---\n\n");
    }

    output
}

/// Format a single book as Markdown.
#[must_use]
pub fn format_book_markdown(book: &BookSummary, index: usize) -> String {
    let mut output = String::new();

    output.push_str(&format!("## {}. {}\n\n", index, book.title));
    output.push_str(&format!("*{}*\n\n", book.authors));
    output.push_str(&format!("**ISBN**: {}\n\n", book.isbn));

    // Cover only when the catalog had one
    if let Some(image) = &book.image {
        output.push_str(&format!("**Cover**: [thumbnail]({image})\n\n"));
    }

    output.push_str(&format!("{}\n", book.description));

    output
}
