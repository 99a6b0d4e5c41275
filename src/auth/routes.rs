//! Route assembly for the authentication API.
//!
//! Public routes (health, signup, login) and token-gated routes (user
//! listing and deletion) are built as separate routers and merged, with
//! the auth middleware applied to the protected sub-router only.

use crate::auth::{api, api::AuthState, middleware::auth_middleware};
use axum::{
    middleware,
    response::Json,
    routing::{delete, get, post},
    Router,
};
use serde::Serialize;

/// Create the API router
pub fn create_router(state: AuthState) -> Router {
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/signup", post(api::signup))
        .route("/login", post(api::login))
        .with_state(state.clone());

    let protected_routes = Router::new()
        .route("/users", get(api::list_users))
        .route("/users/:id", delete(api::delete_user))
        .route_layer(middleware::from_fn_with_state(
            state.jwt_handler.clone(),
            auth_middleware,
        ))
        .with_state(state);

    Router::new().merge(public_routes).merge(protected_routes)
}

/// Health check endpoint
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}
