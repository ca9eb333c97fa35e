//! Shared view endpoints.

use axum::{extract::State, Json};

use super::{success, ApiResult};
use crate::display::{ViewSnapshot, ViewUpdate};
use crate::AppState;

/// GET /api/view - What the client currently renders.
pub async fn get_view(State(state): State<AppState>) -> ApiResult<ViewSnapshot> {
    let view = state.display.view(&state.store).await;
    let revision_id = state.store.revision_id().await;
    success(view, revision_id)
}

/// PUT /api/view - Change language or filters.
pub async fn update_view(
    State(state): State<AppState>,
    Json(update): Json<ViewUpdate>,
) -> ApiResult<ViewSnapshot> {
    let view = state.display.update_view(&state.store, update).await;
    let revision_id = state.store.revision_id().await;
    success(view, revision_id)
}
