//! Shelf document types.
//!
//! The lending-library server exports the books page as a JSON array of book
//! records; `Shelf::load` reads that document once at startup. Fields mirror
//! what the server renders into each row: identity, availability, and the
//! reader's own rating/borrow state.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// One book row from the shelf document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub author: String,
    /// Shelf code printed on the spine label, when catalogued.
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub available_copies: u32,
    /// RFC 3339 timestamp of when the book entered the catalogue.
    #[serde(default)]
    pub created_at: String,
    /// The reader's confirmed rating, if they already rated this book.
    #[serde(default)]
    pub my_rating: Option<u8>,
    /// Whether the reader currently has this book checked out.
    #[serde(default)]
    pub my_borrowed: bool,
    /// Due date of the reader's active borrow, RFC 3339.
    #[serde(default)]
    pub my_due_date: Option<String>,
}

impl Book {
    /// True when the row still carries an interactive rating affordance.
    /// Already-rated books render a static badge instead.
    pub fn can_rate(&self) -> bool {
        self.my_rating.is_none()
    }
}

/// Row filters offered by the site menu, mirroring the page's filter links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShelfFilter {
    #[default]
    All,
    Available,
    Borrowed,
}

impl ShelfFilter {
    pub fn matches(&self, book: &Book) -> bool {
        match self {
            ShelfFilter::All => true,
            ShelfFilter::Available => book.available_copies > 0,
            ShelfFilter::Borrowed => book.my_borrowed,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ShelfFilter::All => "All books",
            ShelfFilter::Available => "Available",
            ShelfFilter::Borrowed => "My borrows",
        }
    }
}

/// Errors raised while loading a shelf document.
#[derive(Debug, thiserror::Error)]
pub enum ShelfError {
    #[error("failed to read shelf document: {0}")]
    Io(#[from] std::io::Error),
    #[error("shelf document is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The full books page, in server order.
#[derive(Debug, Clone, Default)]
pub struct Shelf {
    pub books: Vec<Book>,
}

impl Shelf {
    pub fn new(books: Vec<Book>) -> Self {
        Self { books }
    }

    /// Reads and parses a shelf document from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ShelfError> {
        let raw = std::fs::read_to_string(path)?;
        let books: Vec<Book> = serde_json::from_str(&raw)?;
        Ok(Self { books })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"[
            {
                "id": 1,
                "title": "The Blue Door",
                "author": "R. Amrani",
                "code": "FIC-104",
                "available_copies": 2,
                "created_at": "2026-01-10T09:30:00Z",
                "my_rating": 4,
                "my_borrowed": false
            },
            {
                "id": 2,
                "title": "Harbour Lights",
                "my_borrowed": true,
                "my_due_date": "2026-09-05T18:00:00Z"
            }
        ]"#
    }

    #[test]
    fn shelf_document_parses_with_defaults() {
        let books: Vec<Book> = serde_json::from_str(sample_json()).expect("parse shelf");
        assert_eq!(books.len(), 2);

        assert_eq!(books[0].my_rating, Some(4));
        assert!(!books[0].can_rate());

        assert_eq!(books[1].author, "");
        assert_eq!(books[1].available_copies, 0);
        assert_eq!(books[1].my_rating, None);
        assert!(books[1].can_rate());
        assert!(books[1].my_borrowed);
    }

    #[test]
    fn filters_match_expected_rows() {
        let books: Vec<Book> = serde_json::from_str(sample_json()).expect("parse shelf");
        assert!(ShelfFilter::All.matches(&books[0]));
        assert!(ShelfFilter::All.matches(&books[1]));
        assert!(ShelfFilter::Available.matches(&books[0]));
        assert!(!ShelfFilter::Available.matches(&books[1]));
        assert!(!ShelfFilter::Borrowed.matches(&books[0]));
        assert!(ShelfFilter::Borrowed.matches(&books[1]));
    }
}
