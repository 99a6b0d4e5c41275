//! Authgate - minimal JWT authentication service
//!
//! Signup, login, and token-gated user listing/deletion over an in-memory
//! credential store. All data is lost on restart.

use anyhow::{Context, Result};
use axum::middleware;
use dotenv::dotenv;
use std::{path::Path, sync::Arc};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use authgate::{
    auth::{create_router, AuthState, JwtHandler, MemoryStore},
    config::Config,
    middleware::request_logging,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize environment and logging
    load_env();
    init_tracing();

    let config = Config::from_env();

    let store = Arc::new(MemoryStore::new());
    let jwt_handler = Arc::new(JwtHandler::new(config.jwt_secret.clone()));
    let auth_state = AuthState::new(store, jwt_handler);

    info!("Authentication state initialized (in-memory store)");

    let app = create_router(auth_state)
        .layer(middleware::from_fn(request_logging))
        .layer(CorsLayer::permissive());

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("API server listening on {}", addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

/// Initialize tracing with env-filter overrides
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "authgate=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn load_env() {
    // 1) Standard dotenv search (cwd + parents)
    let _ = dotenv();

    // 2) Also try the manifest-dir .env (common when running with
    // --manifest-path from elsewhere)
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let candidate = manifest_dir.join(".env");
    if candidate.exists() {
        let _ = dotenv::from_path(&candidate);
    }
}
