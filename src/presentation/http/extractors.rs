//! Custom Extractors
//!
//! Axum extractors for request parsing.

use axum::extract::FromRequest;

use crate::shared::error::AppError;

/// JSON body extractor whose rejections are reported through [`AppError`],
/// so a malformed payload gets the standard `fail` envelope instead of
/// axum's plain-text rejection.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);
