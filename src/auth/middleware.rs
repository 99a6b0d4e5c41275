//! Authentication Middleware
//! Mission: Protect API endpoints with JWT validation

use crate::auth::jwt::JwtHandler;
use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use std::sync::Arc;

/// Auth middleware that validates bearer JWT tokens.
///
/// On success the decoded claims are inserted into request extensions so
/// handlers can read the caller's identity. On failure the downstream
/// handler never runs.
pub async fn auth_middleware(
    State(jwt_handler): State<Arc<JwtHandler>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let token = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        .map(|t| t.to_string())
        .ok_or(AuthError::MissingToken)?;

    let claims = jwt_handler
        .validate_token(&token)
        .map_err(|_| AuthError::InvalidToken)?;

    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}

/// Auth error types
#[derive(Debug)]
pub enum AuthError {
    MissingToken,
    InvalidToken,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AuthError::MissingToken => (StatusCode::UNAUTHORIZED, "Missing authorization token"),
            AuthError::InvalidToken => (StatusCode::UNAUTHORIZED, "Invalid or expired token"),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
