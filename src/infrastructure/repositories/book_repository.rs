//! Book Repository Implementation
//!
//! In-memory implementation of book storage. The collection lives for the
//! lifetime of the owning application state and is lost on restart.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use prometheus::IntGauge;

use crate::domain::{Book, BookChanges, BookRepository};

/// Ordered collection of books.
///
/// Lookups are linear scans; records keep their insertion order.
#[derive(Debug, Default)]
pub struct BookStore {
    books: Vec<Book>,
}

impl BookStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a book to the end of the collection.
    pub fn append(&mut self, book: Book) {
        self.books.push(book);
    }

    /// Find a book by ID.
    pub fn find_by_id(&self, id: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    /// Position of the book with the given ID.
    pub fn find_index_by_id(&self, id: &str) -> Option<usize> {
        self.books.iter().position(|book| book.id == id)
    }

    /// Remove the book at `index`, shifting later books down.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn remove_at(&mut self, index: usize) -> Book {
        self.books.remove(index)
    }

    /// Mutable access to the book at `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Book> {
        self.books.get_mut(index)
    }

    pub fn all(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

/// In-memory implementation of the BookRepository.
///
/// A single mutex guards every read and write; it is never held across an
/// `.await`. When a gauge is attached it tracks the store length and is set
/// under the same lock as the insert or delete that changed it.
#[derive(Default)]
pub struct InMemoryBookRepository {
    store: Mutex<BookStore>,
    stored_gauge: Option<IntGauge>,
}

impl InMemoryBookRepository {
    /// Create a repository with an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty repository that reports its length to `gauge`.
    pub fn with_stored_gauge(gauge: IntGauge) -> Self {
        gauge.set(0);
        Self {
            store: Mutex::default(),
            stored_gauge: Some(gauge),
        }
    }

    fn report_len(&self, store: &BookStore) {
        if let Some(gauge) = &self.stored_gauge {
            gauge.set(store.len() as i64);
        }
    }
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn insert(&self, book: Book) {
        let mut store = self.store.lock();
        store.append(book);
        self.report_len(&store);
    }

    async fn find_all(&self) -> Vec<Book> {
        self.store.lock().all().to_vec()
    }

    async fn find_by_id(&self, id: &str) -> Option<Book> {
        self.store.lock().find_by_id(id).cloned()
    }

    async fn update(&self, id: &str, changes: BookChanges, now: DateTime<Utc>) -> Option<Book> {
        let mut store = self.store.lock();
        let index = store.find_index_by_id(id)?;
        let book = store.get_mut(index)?;
        book.apply(changes, now);
        Some(book.clone())
    }

    async fn delete(&self, id: &str) -> bool {
        let mut store = self.store.lock();
        match store.find_index_by_id(id) {
            Some(index) => {
                store.remove_at(index);
                self.report_len(&store);
                true
            }
            None => false,
        }
    }

    async fn count(&self) -> usize {
        self.store.lock().len()
    }
}
