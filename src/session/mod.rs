//! Admin session.
//!
//! A single process-wide admin mode unlocked by a fixed username/password pair.
//! There is no token and no expiry: whoever logs in flips the mode for everyone
//! until logout.

use std::sync::Arc;

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use subtle::ConstantTimeEq;
use tokio::sync::RwLock;

use crate::errors::{AppError, ErrorResponse};

const ADMIN_USER: &str = "admin";
const ADMIN_PASS: &str = "admin";

/// Login form fields.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub pass: String,
}

/// Observable session state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatus {
    pub authenticated: bool,
    pub login_error: bool,
}

#[derive(Default)]
pub struct AdminSession {
    status: RwLock<SessionStatus>,
}

impl AdminSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn status(&self) -> SessionStatus {
        *self.status.read().await
    }

    pub async fn is_authenticated(&self) -> bool {
        self.status.read().await.authenticated
    }

    /// Compare against the fixed pair. A mismatch leaves the session anonymous
    /// and raises the error flag; a match clears it.
    pub async fn login(&self, request: &LoginRequest) -> SessionStatus {
        let ok = constant_time_compare(&request.user, ADMIN_USER)
            & constant_time_compare(&request.pass, ADMIN_PASS);

        let mut status = self.status.write().await;
        if ok {
            status.authenticated = true;
            status.login_error = false;
            tracing::info!("Admin session opened");
        } else {
            status.login_error = true;
            tracing::warn!("Admin login rejected");
        }
        *status
    }

    pub async fn logout(&self) -> SessionStatus {
        let mut status = self.status.write().await;
        status.authenticated = false;
        tracing::info!("Admin session closed");
        *status
    }
}

/// Middleware rejecting admin routes unless the session is authenticated.
pub async fn admin_gate(session: Arc<AdminSession>, request: Request, next: Next) -> Response {
    if session.is_authenticated().await {
        next.run(request).await
    } else {
        unauthorized_response("Admin login required")
    }
}

/// Perform constant-time string comparison.
fn constant_time_compare(a: &str, b: &str) -> bool {
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

/// Create an unauthorized response.
fn unauthorized_response(message: &str) -> Response {
    let error = AppError::Unauthorized(message.to_string());
    (error.status_code(), Json(ErrorResponse::new(&error, 0))).into_response()
}
