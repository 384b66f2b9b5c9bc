//! # Domain Entities
//!
//! Core domain entities of the bookshelf.
//!
//! - **Book**: a book record with reading progress
//!
//! ## Repository Traits
//!
//! Each entity has an associated repository trait defining data access operations.
//! These traits are implemented in the infrastructure layer, following the
//! dependency inversion principle.

mod book;

pub use book::{Book, BookChanges, BookRepository};

#[cfg(test)]
pub use book::MockBookRepository;
