//! Authentication API Endpoints
//! Mission: Provide signup, login, and token-gated user management

use crate::auth::{
    jwt::JwtHandler,
    models::{
        Claims, LoginRequest, LoginResponse, MessageResponse, SignupRequest, UserResponse,
    },
    password,
    store::CredentialStore,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    Extension,
};
use serde_json::json;
use std::sync::Arc;
use tracing::{info, warn};

/// Shared auth state
#[derive(Clone)]
pub struct AuthState {
    pub store: Arc<dyn CredentialStore>,
    pub jwt_handler: Arc<JwtHandler>,
}

impl AuthState {
    pub fn new(store: Arc<dyn CredentialStore>, jwt_handler: Arc<JwtHandler>) -> Self {
        Self { store, jwt_handler }
    }
}

/// Treat absent and empty fields the same way.
fn require_field(value: Option<String>) -> Result<String, AuthApiError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AuthApiError::MissingFields),
    }
}

/// Signup endpoint - POST /signup
pub async fn signup(
    State(state): State<AuthState>,
    Json(payload): Json<SignupRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AuthApiError> {
    let username = require_field(payload.username)?;
    let password = require_field(payload.password)?;

    let password_hash = password::hash_password(&password).map_err(|e| {
        warn!("Password hashing failed: {}", e);
        AuthApiError::InternalError
    })?;

    state
        .store
        .insert(&username, &password_hash)
        .ok_or(AuthApiError::UsernameTaken)?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "User created successfully!".to_string(),
        }),
    ))
}

/// Login endpoint - POST /login
pub async fn login(
    State(state): State<AuthState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AuthApiError> {
    let username = require_field(payload.username)?;
    let password = require_field(payload.password)?;

    info!("Login attempt: {}", username);

    // Unknown username and wrong password share one error so the
    // response never discloses which field was wrong.
    let user = state
        .store
        .find_by_username(&username)
        .ok_or(AuthApiError::InvalidCredentials)?;

    let valid = password::verify_password(&password, &user.password_hash).map_err(|e| {
        warn!("Password verification failed: {}", e);
        AuthApiError::InternalError
    })?;

    if !valid {
        warn!("Failed login attempt: {}", username);
        return Err(AuthApiError::InvalidCredentials);
    }

    let token = state
        .jwt_handler
        .generate_token(&user)
        .map_err(|_| AuthApiError::InternalError)?;

    info!("Login successful: {} (id {})", user.username, user.id);

    Ok(Json(LoginResponse { token }))
}

/// List all users - GET /users (token required)
pub async fn list_users(
    State(state): State<AuthState>,
    Extension(_claims): Extension<Claims>,
) -> Json<Vec<UserResponse>> {
    let users = state.store.list();

    Json(users.iter().map(UserResponse::from_user).collect())
}

/// Delete a user by id - DELETE /users/:id (owner only)
pub async fn delete_user(
    State(state): State<AuthState>,
    Extension(claims): Extension<Claims>,
    Path(user_id): Path<u64>,
) -> Result<Json<MessageResponse>, AuthApiError> {
    // Existence is checked before ownership, so an unknown id is a 404
    // even when it isn't the caller's own.
    state
        .store
        .find_by_id(user_id)
        .ok_or(AuthApiError::UserNotFound(user_id))?;

    if claims.sub != user_id {
        return Err(AuthApiError::Forbidden);
    }

    state.store.remove(user_id);

    Ok(Json(MessageResponse {
        message: format!("User with ID {} deleted successfully.", user_id),
    }))
}

/// Auth API errors
#[derive(Debug)]
pub enum AuthApiError {
    MissingFields,
    UsernameTaken,
    InvalidCredentials,
    UserNotFound(u64),
    Forbidden,
    InternalError,
}

impl IntoResponse for AuthApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AuthApiError::MissingFields => (
                StatusCode::BAD_REQUEST,
                "Username and password are required.".to_string(),
            ),
            AuthApiError::UsernameTaken => (
                StatusCode::BAD_REQUEST,
                "Username already exists.".to_string(),
            ),
            AuthApiError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "Invalid username or password.".to_string(),
            ),
            AuthApiError::UserNotFound(id) => (
                StatusCode::NOT_FOUND,
                format!("User with ID {} not found.", id),
            ),
            AuthApiError::Forbidden => (
                StatusCode::FORBIDDEN,
                "You can only delete your own account.".to_string(),
            ),
            AuthApiError::InternalError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
