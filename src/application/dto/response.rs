//! Response DTOs
//!
//! Data structures for API response bodies. Every book endpoint answers with
//! the same envelope: `{"status": "success", "message"?, "data"?}`.

use serde::Serialize;

use crate::application::services::{BookDto, BookSummaryDto};

/// Success envelope
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Success with data and no message
    pub fn data(data: T) -> Self {
        Self {
            status: "success",
            message: None,
            data: Some(data),
        }
    }

    /// Success with both a message and data
    pub fn with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            status: "success",
            message: Some(message.into()),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// Success carrying only a message
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            status: "success",
            message: Some(message.into()),
            data: None,
        }
    }
}

/// Full book record
///
/// `bookId` repeats `id` for clients written against the earlier API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookResponse {
    pub id: String,
    pub book_id: String,
    pub name: String,
    pub year: i64,
    pub author: String,
    pub summary: String,
    pub publisher: String,
    pub page_count: i64,
    pub read_page: i64,
    pub finished: bool,
    pub reading: bool,
    pub inserted_at: String,
    pub updated_at: String,
}

impl From<BookDto> for BookResponse {
    fn from(dto: BookDto) -> Self {
        Self {
            book_id: dto.id.clone(),
            id: dto.id,
            name: dto.name,
            year: dto.year,
            author: dto.author,
            summary: dto.summary,
            publisher: dto.publisher,
            page_count: dto.page_count,
            read_page: dto.read_page,
            finished: dto.finished,
            reading: dto.reading,
            inserted_at: dto.inserted_at,
            updated_at: dto.updated_at,
        }
    }
}

/// Book listing entry
#[derive(Debug, Clone, Serialize)]
pub struct BookSummaryResponse {
    pub id: String,
    pub name: String,
    pub publisher: String,
}

impl From<BookSummaryDto> for BookSummaryResponse {
    fn from(dto: BookSummaryDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            publisher: dto.publisher,
        }
    }
}

/// `data` of a list response
#[derive(Debug, Serialize)]
pub struct BookListData {
    pub books: Vec<BookSummaryResponse>,
}

impl From<Vec<BookSummaryDto>> for BookListData {
    fn from(dtos: Vec<BookSummaryDto>) -> Self {
        Self {
            books: dtos.into_iter().map(BookSummaryResponse::from).collect(),
        }
    }
}

/// `data` of a get response
#[derive(Debug, Serialize)]
pub struct BookDetailData {
    pub book: BookResponse,
}
