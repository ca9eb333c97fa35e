//! Admin category endpoints.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, HeaderMap},
    Json,
};
use serde::Serialize;

use super::{error, success, ApiResult};
use crate::images::to_data_uri;
use crate::models::CategoryConfig;
use crate::AppState;

/// Uploaded category icon, ready to be used as `icon`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IconUpload {
    pub icon: String,
}

/// POST /api/admin/categories - Create a new category.
pub async fn create_category(
    State(state): State<AppState>,
    Json(request): Json<CategoryConfig>,
) -> ApiResult<CategoryConfig> {
    let revision_id = state.store.revision_id().await;

    match state.store.add_category(request).await {
        Ok(category) => {
            state.display.invalidate().await;
            let new_revision = state.store.revision_id().await;
            success(category, new_revision)
        }
        Err(e) => error(e, revision_id),
    }
}

/// DELETE /api/admin/categories/:name - Delete a category. Spots are not touched.
pub async fn delete_category(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<()> {
    let revision_id = state.store.revision_id().await;

    match state.store.remove_category(&name).await {
        Ok(()) => {
            state.display.invalidate().await;
            let new_revision = state.store.revision_id().await;
            success((), new_revision)
        }
        Err(e) => error(e, revision_id),
    }
}

/// POST /api/admin/category-icons - Encode an uploaded icon image.
pub async fn upload_category_icon(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<IconUpload> {
    let revision_id = state.store.revision_id().await;
    let mime = content_type(&headers);

    match to_data_uri(&body, mime) {
        Ok(icon) => success(IconUpload { icon }, revision_id),
        Err(e) => error(e, revision_id),
    }
}

pub(super) fn content_type(headers: &HeaderMap) -> &str {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}
