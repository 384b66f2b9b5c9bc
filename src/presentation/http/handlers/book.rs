//! Book Handlers
//!
//! HTTP handlers for the `/books` endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::request::BookRequest;
use crate::application::dto::response::{ApiResponse, BookDetailData, BookListData, BookResponse};
use crate::application::services::{BookError, BookService, BookServiceImpl};
use crate::infrastructure::metrics;
use crate::infrastructure::repositories::InMemoryBookRepository;
use crate::presentation::http::extractors::ApiJson;
use crate::shared::error::AppError;
use crate::startup::AppState;

const BOOK_ADDED: &str = "Buku berhasil ditambahkan";
const BOOK_UPDATED: &str = "Buku berhasil diperbarui";
const BOOK_DELETED: &str = "Buku berhasil dihapus";

/// Operation a failure message is reported for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BookAction {
    Add,
    Get,
    Update,
    Delete,
}

impl BookAction {
    fn as_str(self) -> &'static str {
        match self {
            BookAction::Add => "create",
            BookAction::Get => "get",
            BookAction::Update => "update",
            BookAction::Delete => "delete",
        }
    }

    /// Prefix of the validation messages, `Gagal <verb> buku`
    fn failure_prefix(self) -> &'static str {
        match self {
            BookAction::Update => "Gagal memperbarui buku",
            _ => "Gagal menambahkan buku",
        }
    }

    fn not_found_message(self) -> &'static str {
        match self {
            BookAction::Update => "Gagal memperbarui buku. Id tidak ditemukan",
            BookAction::Delete => "Buku gagal dihapus. Id tidak ditemukan",
            BookAction::Add | BookAction::Get => "Buku tidak ditemukan",
        }
    }
}

/// Helper to convert BookError to AppError with the client-facing message
fn map_book_error(e: BookError, action: BookAction) -> AppError {
    metrics::record_book_operation(action.as_str(), "fail");

    let prefix = action.failure_prefix();
    match e {
        BookError::MissingName => {
            AppError::Validation(format!("{}. Mohon isi nama buku", prefix))
        }
        BookError::ReadPageExceedsPageCount => AppError::Validation(format!(
            "{}. readPage tidak boleh lebih besar dari pageCount",
            prefix
        )),
        BookError::InvalidYear => {
            AppError::Validation(format!("{}. Tahun harus berupa angka bulat", prefix))
        }
        BookError::InvalidPageCount => {
            AppError::Validation("PageCount harus berupa bilangan bulat".into())
        }
        BookError::InvalidReadPage => {
            AppError::Validation("ReadPage harus berupa bilangan bulat".into())
        }
        BookError::NotFound => AppError::NotFound(action.not_found_message().into()),
    }
}

pub(super) fn book_service(state: &AppState) -> BookServiceImpl<InMemoryBookRepository> {
    BookServiceImpl::new(state.books.clone(), state.id_generator.clone())
}

/// Add a book
///
/// POST /books
///
/// ## Errors
/// - 400: Payload failed validation
pub async fn add_book(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<BookRequest>,
) -> Result<(StatusCode, Json<ApiResponse<BookResponse>>), AppError> {
    tracing::debug!(payload = ?body, "Add book request");

    let book = book_service(&state)
        .create_book(body.into())
        .await
        .map_err(|e| map_book_error(e, BookAction::Add))?;

    metrics::record_book_operation(BookAction::Add.as_str(), "success");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            BOOK_ADDED,
            BookResponse::from(book),
        )),
    ))
}

/// List every book (`id`, `name`, `publisher` only)
///
/// GET /books
pub async fn get_all_books(State(state): State<AppState>) -> Json<ApiResponse<BookListData>> {
    let books = book_service(&state).list_books().await;
    metrics::record_book_operation("list", "success");

    Json(ApiResponse::data(BookListData::from(books)))
}

/// Get a book by ID
///
/// GET /books/{book_id}
///
/// ## Errors
/// - 404: Book not found
pub async fn get_book_by_id(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
) -> Result<Json<ApiResponse<BookDetailData>>, AppError> {
    let book = book_service(&state)
        .get_book(&book_id)
        .await
        .map_err(|e| map_book_error(e, BookAction::Get))?;

    metrics::record_book_operation(BookAction::Get.as_str(), "success");

    Ok(Json(ApiResponse::data(BookDetailData {
        book: BookResponse::from(book),
    })))
}

/// Edit a book
///
/// PUT /books/{book_id}
///
/// Validation runs before the book is looked up, so an invalid payload is
/// reported as 400 even for an unknown ID.
///
/// ## Errors
/// - 400: Payload failed validation
/// - 404: Book not found
pub async fn edit_book_by_id(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
    ApiJson(body): ApiJson<BookRequest>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    tracing::debug!(book_id = %book_id, payload = ?body, "Edit book request");

    book_service(&state)
        .update_book(&book_id, body.into())
        .await
        .map_err(|e| map_book_error(e, BookAction::Update))?;

    metrics::record_book_operation(BookAction::Update.as_str(), "success");

    Ok(Json(ApiResponse::message(BOOK_UPDATED)))
}

/// Delete a book
///
/// DELETE /books/{book_id}
///
/// ## Errors
/// - 404: Book not found
pub async fn delete_book_by_id(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    book_service(&state)
        .delete_book(&book_id)
        .await
        .map_err(|e| map_book_error(e, BookAction::Delete))?;

    metrics::record_book_operation(BookAction::Delete.as_str(), "success");

    Ok(Json(ApiResponse::message(BOOK_DELETED)))
}
