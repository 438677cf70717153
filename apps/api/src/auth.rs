//! Authenticated-session gate for the wizard API.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

use crate::errors::AppError;
use crate::state::AppState;

/// Requires `Authorization: Bearer <token>` matching the configured access token.
/// With no token configured every request counts as authenticated.
pub async fn require_session(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(expected) = state.config.access_token.as_deref() else {
        return Ok(next.run(req).await);
    };

    let presented = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim);

    if presented != Some(expected) {
        return Err(AppError::Unauthorized);
    }
    Ok(next.run(req).await)
}
