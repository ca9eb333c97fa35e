//! Admin spot draft endpoints.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::HeaderMap,
    Json,
};

use super::{categories::content_type, error, success, ApiResult};
use crate::images::{AddImageUrlRequest, SpotDraft, UpdateDraftRequest};
use crate::models::Spot;
use crate::AppState;

/// GET /api/admin/draft - Current spot draft.
pub async fn get_draft(State(state): State<AppState>) -> ApiResult<SpotDraft> {
    let revision_id = state.store.revision_id().await;
    let draft = state.draft.lock().await.clone();
    success(draft, revision_id)
}

/// PUT /api/admin/draft - Edit draft fields.
pub async fn update_draft(
    State(state): State<AppState>,
    Json(request): Json<UpdateDraftRequest>,
) -> ApiResult<SpotDraft> {
    let revision_id = state.store.revision_id().await;
    let mut draft = state.draft.lock().await;
    draft.apply(request);
    success(draft.clone(), revision_id)
}

/// POST /api/admin/draft/images/url - Append an image by URL.
pub async fn add_draft_image_url(
    State(state): State<AppState>,
    Json(request): Json<AddImageUrlRequest>,
) -> ApiResult<SpotDraft> {
    let revision_id = state.store.revision_id().await;
    let mut draft = state.draft.lock().await;

    match draft.add_url(&request.url) {
        Ok(()) => success(draft.clone(), revision_id),
        Err(e) => error(e, revision_id),
    }
}

/// POST /api/admin/draft/images/upload - Append an uploaded image file.
pub async fn upload_draft_image(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<SpotDraft> {
    let revision_id = state.store.revision_id().await;
    let mut draft = state.draft.lock().await;

    match draft.add_upload(&body, content_type(&headers)) {
        Ok(()) => success(draft.clone(), revision_id),
        Err(e) => error(e, revision_id),
    }
}

/// DELETE /api/admin/draft/images/:index - Remove a draft image by position.
pub async fn remove_draft_image(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> ApiResult<SpotDraft> {
    let revision_id = state.store.revision_id().await;
    let mut draft = state.draft.lock().await;

    match draft.remove_image(index) {
        Ok(_) => success(draft.clone(), revision_id),
        Err(e) => error(e, revision_id),
    }
}

/// POST /api/admin/draft/submit - Publish the draft as a spot and start a new one.
pub async fn submit_draft(State(state): State<AppState>) -> ApiResult<Spot> {
    let revision_id = state.store.revision_id().await;
    let mut draft = state.draft.lock().await;

    match state.store.add_spot(draft.to_new_spot()).await {
        Ok(spot) => {
            state.display.invalidate().await;
            let content = state.store.snapshot().await;
            *draft = SpotDraft::new(
                content.categories.first().map(|c| c.name.as_str()),
                content.neighborhoods.first().map(String::as_str),
            );
            success(spot, content.revision_id)
        }
        Err(e) => error(e, revision_id),
    }
}
