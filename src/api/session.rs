//! Admin session endpoints.

use axum::{extract::State, Json};

use super::{success, ApiResult};
use crate::session::{LoginRequest, SessionStatus};
use crate::AppState;

/// GET /api/session - Current session state.
pub async fn get_session(State(state): State<AppState>) -> ApiResult<SessionStatus> {
    let revision_id = state.store.revision_id().await;
    success(state.session.status().await, revision_id)
}

/// POST /api/session/login - Check the admin credentials.
///
/// A mismatch is not an HTTP error: the returned state carries `loginError`.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<SessionStatus> {
    let revision_id = state.store.revision_id().await;
    success(state.session.login(&request).await, revision_id)
}

/// POST /api/session/logout - Leave admin mode.
pub async fn logout(State(state): State<AppState>) -> ApiResult<SessionStatus> {
    let revision_id = state.store.revision_id().await;
    success(state.session.logout().await, revision_id)
}
