//! Admin spot endpoints.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{error, success, ApiResult};
use crate::models::{NewSpot, Spot};
use crate::AppState;

/// POST /api/admin/spots - Create a new spot.
pub async fn create_spot(
    State(state): State<AppState>,
    Json(request): Json<NewSpot>,
) -> ApiResult<Spot> {
    let revision_id = state.store.revision_id().await;

    match state.store.add_spot(request).await {
        Ok(spot) => {
            state.display.invalidate().await;
            let new_revision = state.store.revision_id().await;
            success(spot, new_revision)
        }
        Err(e) => error(e, revision_id),
    }
}

/// DELETE /api/admin/spots/:id - Delete a spot.
pub async fn delete_spot(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<()> {
    let revision_id = state.store.revision_id().await;

    match state.store.remove_spot(&id).await {
        Ok(()) => {
            state.display.invalidate().await;
            let new_revision = state.store.revision_id().await;
            success((), new_revision)
        }
        Err(e) => error(e, revision_id),
    }
}
