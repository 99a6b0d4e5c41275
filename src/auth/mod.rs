//! Authentication Module
//! Mission: Secure API access with bcrypt credentials and JWT tokens

pub mod api;
pub mod jwt;
pub mod middleware;
pub mod models;
pub mod password;
pub mod routes;
pub mod store;

pub use api::AuthState;
pub use jwt::JwtHandler;
pub use middleware::auth_middleware;
pub use routes::create_router;
pub use store::{CredentialStore, MemoryStore};
