//! Repository Implementations
//!
//! Concrete implementations of domain repository traits.
//!
//! ## Available Repositories
//!
//! - **InMemoryBookRepository** - Book records held in process memory
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use bookshelf::infrastructure::repositories::InMemoryBookRepository;
//!
//! let book_repo = Arc::new(InMemoryBookRepository::new());
//! ```

pub mod book_repository;

pub use book_repository::{BookStore, InMemoryBookRepository};
