//! Admin neighborhood and label endpoints.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{error, success, ApiResult};
use crate::models::{CreateNeighborhoodRequest, MenuLabels, UpdateMenuLabelsRequest};
use crate::AppState;

/// POST /api/admin/neighborhoods - Add a neighborhood.
pub async fn create_neighborhood(
    State(state): State<AppState>,
    Json(request): Json<CreateNeighborhoodRequest>,
) -> ApiResult<Vec<String>> {
    let revision_id = state.store.revision_id().await;

    match state.store.add_neighborhood(&request.name).await {
        Ok(()) => {
            let new_revision = state.store.revision_id().await;
            success(state.store.neighborhoods().await, new_revision)
        }
        Err(e) => error(e, revision_id),
    }
}

/// DELETE /api/admin/neighborhoods/:name - Remove a neighborhood.
pub async fn delete_neighborhood(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Vec<String>> {
    let revision_id = state.store.revision_id().await;

    match state.store.remove_neighborhood(&name).await {
        Ok(()) => {
            let new_revision = state.store.revision_id().await;
            success(state.store.neighborhoods().await, new_revision)
        }
        Err(e) => error(e, revision_id),
    }
}

/// PUT /api/admin/menu-labels - Edit the sidebar labels.
pub async fn update_menu_labels(
    State(state): State<AppState>,
    Json(request): Json<UpdateMenuLabelsRequest>,
) -> ApiResult<MenuLabels> {
    let labels = state.store.update_menu_labels(request).await;
    let revision_id = state.store.revision_id().await;
    success(labels, revision_id)
}
