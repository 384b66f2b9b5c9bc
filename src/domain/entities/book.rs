//! Book entity and repository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// A book on the shelf.
///
/// HTTP responses are built from it through `BookResponse`.
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    /// Opaque identifier, assigned at creation and never changed
    pub id: String,

    /// Title of the book (never empty)
    pub name: String,

    /// Publication year
    pub year: i64,

    pub author: String,

    pub summary: String,

    pub publisher: String,

    /// Total number of pages
    pub page_count: i64,

    /// Pages read so far (never greater than `page_count`)
    pub read_page: i64,

    /// `true` iff `read_page == page_count`
    pub finished: bool,

    /// Whether the owner is currently reading the book
    pub reading: bool,

    /// When the book was added
    pub inserted_at: DateTime<Utc>,

    /// When the book was last added or edited
    pub updated_at: DateTime<Utc>,
}

/// Validated field values for creating or editing a book.
///
/// Everything except the identity and the timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookChanges {
    pub name: String,
    pub year: i64,
    pub author: String,
    pub summary: String,
    pub publisher: String,
    pub page_count: i64,
    pub read_page: i64,
    pub reading: bool,
}

impl Book {
    /// Create a new book from validated changes.
    pub fn new(id: String, changes: BookChanges, now: DateTime<Utc>) -> Self {
        let finished = changes.read_page == changes.page_count;
        Self {
            id,
            name: changes.name,
            year: changes.year,
            author: changes.author,
            summary: changes.summary,
            publisher: changes.publisher,
            page_count: changes.page_count,
            read_page: changes.read_page,
            finished,
            reading: changes.reading,
            inserted_at: now,
            updated_at: now,
        }
    }

    /// Overwrite every editable field, keeping `id` and `inserted_at`.
    ///
    /// `finished` is recomputed from the new page counts.
    pub fn apply(&mut self, changes: BookChanges, now: DateTime<Utc>) {
        self.finished = changes.read_page == changes.page_count;
        self.name = changes.name;
        self.year = changes.year;
        self.author = changes.author;
        self.summary = changes.summary;
        self.publisher = changes.publisher;
        self.page_count = changes.page_count;
        self.read_page = changes.read_page;
        self.reading = changes.reading;
        self.updated_at = now;
    }
}

/// Repository trait for book data access.
///
/// Each method is a single consistent operation against the backing store;
/// `update` and `delete` locate and mutate the record atomically.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Append a book to the collection.
    async fn insert(&self, book: Book);

    /// All books in insertion order.
    async fn find_all(&self) -> Vec<Book>;

    /// Find a book by its ID.
    async fn find_by_id(&self, id: &str) -> Option<Book>;

    /// Apply changes to the book with the given ID, returning the updated record.
    async fn update(&self, id: &str, changes: BookChanges, now: DateTime<Utc>) -> Option<Book>;

    /// Remove the book with the given ID. Returns `false` if it did not exist.
    async fn delete(&self, id: &str) -> bool;

    /// Number of stored books.
    async fn count(&self) -> usize;
}
