//! Book Service
//!
//! Validation and CRUD operations for books on the shelf.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

use crate::domain::{Book, BookChanges, BookRepository};
use crate::shared::id_generator::IdGenerator;
use crate::shared::validation::{loosely_greater, parse_integer};

/// Book service trait defining book operations.
#[async_trait]
pub trait BookService: Send + Sync {
    /// Validate a payload and add a new book.
    async fn create_book(&self, request: SaveBookDto) -> Result<BookDto, BookError>;

    /// List every book as an `id`/`name`/`publisher` projection.
    async fn list_books(&self) -> Vec<BookSummaryDto>;

    /// Get a book by ID.
    async fn get_book(&self, book_id: &str) -> Result<BookDto, BookError>;

    /// Validate a payload and overwrite an existing book.
    async fn update_book(&self, book_id: &str, request: SaveBookDto) -> Result<BookDto, BookError>;

    /// Delete a book by ID.
    async fn delete_book(&self, book_id: &str) -> Result<(), BookError>;

    /// Number of books on the shelf.
    async fn count_books(&self) -> usize;
}

/// Unvalidated book payload.
///
/// Numeric fields are kept as raw JSON values so validation can tell a
/// missing value from a malformed one.
#[derive(Debug, Clone, Default)]
pub struct SaveBookDto {
    pub name: Option<String>,
    pub year: Option<Value>,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub publisher: Option<String>,
    pub page_count: Option<Value>,
    pub read_page: Option<Value>,
    pub reading: Option<bool>,
}

impl SaveBookDto {
    /// Run the validation rules in order; the first failure wins.
    ///
    /// 1. name present and non-empty
    /// 2. readPage not greater than pageCount
    /// 3. year is an integer
    /// 4. pageCount is an integer
    /// 5. readPage is an integer
    /// 6. the parsed readPage is not greater than the parsed pageCount
    pub fn validate(self) -> Result<BookChanges, BookError> {
        let name = match self.name {
            Some(name) if !name.is_empty() => name,
            _ => return Err(BookError::MissingName),
        };

        if loosely_greater(self.read_page.as_ref(), self.page_count.as_ref()) {
            return Err(BookError::ReadPageExceedsPageCount);
        }

        let year = parse_integer(self.year.as_ref()).ok_or(BookError::InvalidYear)?;
        let page_count =
            parse_integer(self.page_count.as_ref()).ok_or(BookError::InvalidPageCount)?;
        let read_page = parse_integer(self.read_page.as_ref()).ok_or(BookError::InvalidReadPage)?;

        // Catches values rule 2 could not coerce, such as "60abc"
        if read_page > page_count {
            return Err(BookError::ReadPageExceedsPageCount);
        }

        Ok(BookChanges {
            name,
            year,
            author: self.author.unwrap_or_default(),
            summary: self.summary.unwrap_or_default(),
            publisher: self.publisher.unwrap_or_default(),
            page_count,
            read_page,
            reading: self.reading.unwrap_or(false),
        })
    }
}

/// Book data transfer object.
#[derive(Debug, Clone, PartialEq)]
pub struct BookDto {
    pub id: String,
    pub name: String,
    pub year: i64,
    pub author: String,
    pub summary: String,
    pub publisher: String,
    pub page_count: i64,
    pub read_page: i64,
    pub finished: bool,
    pub reading: bool,
    /// ISO 8601 with millisecond precision
    pub inserted_at: String,
    /// ISO 8601 with millisecond precision
    pub updated_at: String,
}

fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl BookDto {
    /// Create DTO from domain Book entity.
    pub fn from_book(book: Book) -> Self {
        Self {
            id: book.id,
            name: book.name,
            year: book.year,
            author: book.author,
            summary: book.summary,
            publisher: book.publisher,
            page_count: book.page_count,
            read_page: book.read_page,
            finished: book.finished,
            reading: book.reading,
            inserted_at: format_timestamp(book.inserted_at),
            updated_at: format_timestamp(book.updated_at),
        }
    }
}

/// Listing projection of a book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookSummaryDto {
    pub id: String,
    pub name: String,
    pub publisher: String,
}

impl From<Book> for BookSummaryDto {
    fn from(book: Book) -> Self {
        Self {
            id: book.id,
            name: book.name,
            publisher: book.publisher,
        }
    }
}

/// Book service errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookError {
    #[error("Book name is required")]
    MissingName,

    #[error("readPage must not be greater than pageCount")]
    ReadPageExceedsPageCount,

    #[error("year must be an integer")]
    InvalidYear,

    #[error("pageCount must be an integer")]
    InvalidPageCount,

    #[error("readPage must be an integer")]
    InvalidReadPage,

    #[error("Book not found")]
    NotFound,
}

/// Book service implementation.
pub struct BookServiceImpl<R>
where
    R: BookRepository,
{
    book_repo: Arc<R>,
    id_generator: Arc<IdGenerator>,
}

impl<R> BookServiceImpl<R>
where
    R: BookRepository,
{
    /// Create a new BookServiceImpl.
    pub fn new(book_repo: Arc<R>, id_generator: Arc<IdGenerator>) -> Self {
        Self {
            book_repo,
            id_generator,
        }
    }
}

#[async_trait]
impl<R> BookService for BookServiceImpl<R>
where
    R: BookRepository + 'static,
{
    async fn create_book(&self, request: SaveBookDto) -> Result<BookDto, BookError> {
        let changes = request.validate().inspect_err(|e| {
            tracing::warn!(error = %e, "Rejected new book");
        })?;

        let book = Book::new(self.id_generator.generate(), changes, Utc::now());
        tracing::info!(book_id = %book.id, name = %book.name, "Book added");

        self.book_repo.insert(book.clone()).await;

        Ok(BookDto::from_book(book))
    }

    async fn list_books(&self) -> Vec<BookSummaryDto> {
        let books = self.book_repo.find_all().await;
        tracing::debug!(count = books.len(), "Listing books");

        books.into_iter().map(BookSummaryDto::from).collect()
    }

    async fn get_book(&self, book_id: &str) -> Result<BookDto, BookError> {
        let book = self
            .book_repo
            .find_by_id(book_id)
            .await
            .ok_or(BookError::NotFound)?;

        Ok(BookDto::from_book(book))
    }

    async fn update_book(&self, book_id: &str, request: SaveBookDto) -> Result<BookDto, BookError> {
        // Validation is reported before existence is checked
        let changes = request.validate().inspect_err(|e| {
            tracing::warn!(book_id, error = %e, "Rejected book update");
        })?;

        let book = self
            .book_repo
            .update(book_id, changes, Utc::now())
            .await
            .ok_or(BookError::NotFound)?;

        tracing::info!(book_id, "Book updated");

        Ok(BookDto::from_book(book))
    }

    async fn delete_book(&self, book_id: &str) -> Result<(), BookError> {
        if !self.book_repo.delete(book_id).await {
            return Err(BookError::NotFound);
        }

        tracing::info!(book_id, "Book deleted");
        Ok(())
    }

    async fn count_books(&self) -> usize {
        self.book_repo.count().await
    }
}
