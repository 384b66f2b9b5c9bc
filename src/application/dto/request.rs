//! Request DTOs
//!
//! Data structures for API request bodies.

use serde::Deserialize;
use serde_json::Value;

use crate::application::services::SaveBookDto;

/// Create/update book request.
///
/// Every field is optional here; the service decides what is missing or
/// malformed. `year`, `pageCount` and `readPage` accept any JSON value.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookRequest {
    pub name: Option<String>,
    pub year: Option<Value>,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub publisher: Option<String>,
    pub page_count: Option<Value>,
    pub read_page: Option<Value>,
    pub reading: Option<bool>,
}

impl From<BookRequest> for SaveBookDto {
    fn from(request: BookRequest) -> Self {
        Self {
            name: request.name,
            year: request.year,
            author: request.author,
            summary: request.summary,
            publisher: request.publisher,
            page_count: request.page_count,
            read_page: request.read_page,
            reading: request.reading,
        }
    }
}
