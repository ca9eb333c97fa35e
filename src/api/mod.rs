//! REST API module.
//!
//! Contains all API routes and handlers following the frontend contract.

mod categories;
mod chat;
mod content;
mod draft;
mod neighborhoods;
mod session;
mod spots;
mod view;

pub use categories::*;
pub use chat::*;
pub use content::*;
pub use draft::*;
pub use neighborhoods::*;
pub use session::*;
pub use spots::*;
pub use view::*;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::Language;

/// Success response envelope.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
    pub revision_id: i64,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(data: T, revision_id: i64) -> Self {
        Self {
            success: true,
            data,
            revision_id,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Response type that can be either success or error.
pub type ApiResult<T> = Result<ApiResponse<T>, crate::errors::AppErrorWithRevision>;

/// Create a successful API response.
pub fn success<T: Serialize>(data: T, revision_id: i64) -> ApiResult<T> {
    Ok(ApiResponse::new(data, revision_id))
}

/// Create an error API response.
pub fn error<T: Serialize>(err: AppError, revision_id: i64) -> ApiResult<T> {
    Err(crate::errors::AppErrorWithRevision {
        error: err,
        revision_id,
    })
}

/// Parse an optional `lang` parameter; absent means the home language.
pub fn parse_language(raw: Option<&str>) -> Result<Language, AppError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(Language::HOME),
        Some(tag) => Language::from_str(tag)
            .ok_or_else(|| AppError::BadRequest(format!("Unsupported language: {}", tag))),
    }
}
