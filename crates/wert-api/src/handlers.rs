//! # Request Handlers
//!
//! Axum request handlers for the session proxy.

use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use tracing::{error, info, instrument};
use wert_core::{SessionError, SessionRequest};

// =============================================================================
// Response Types
// =============================================================================

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

type ErrorReply = (StatusCode, Json<ErrorResponse>);

/// Map a session error onto the caller-facing reply.
///
/// Upstream rejections keep the provider's status and raw body text.
/// Everything else that is not the caller's fault becomes a 500.
fn session_error_to_response(err: SessionError) -> ErrorReply {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let body = match err {
        SessionError::Upstream { body, .. } => ErrorResponse::new(body),
        SessionError::InvalidRequest(detail) => {
            ErrorResponse::new("invalid request").with_detail(detail)
        }
        other => ErrorResponse::new("internal error").with_detail(other.to_string()),
    };

    (status, Json(body))
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "wert-session-proxy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Create a Wert session for the requested amount/currency.
///
/// The body is optional; see [`SessionRequest::from_body`].
#[instrument(skip(state, body), fields(body_len = body.len()))]
pub async fn create_wert_session(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<serde_json::Value>, ErrorReply> {
    let request = SessionRequest::from_body(&body).map_err(|e| {
        error!("Rejected session request: {}", e);
        session_error_to_response(e)
    })?;

    info!(
        "Creating session: provider={}, amount={}, currency={}",
        state.provider.provider_name(),
        request.amount,
        request.currency
    );

    let session = state
        .provider
        .create_session(&request)
        .await
        .map_err(|e| {
            error!("Failed to create session: {}", e);
            session_error_to_response(e)
        })?;

    Ok(Json(session))
}
