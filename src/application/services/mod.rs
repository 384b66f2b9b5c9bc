//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **BookService**: Payload validation and book CRUD

pub mod book_service;

// Re-export book service types
pub use book_service::{BookDto, BookError, BookService, BookServiceImpl, BookSummaryDto, SaveBookDto};
