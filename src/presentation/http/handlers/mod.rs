//! HTTP Handlers
//!
//! Request handlers for all HTTP endpoints.

pub mod book;
pub mod health;

/// Root endpoint
///
/// GET /
pub async fn root() -> &'static str {
    "Hello World!"
}
