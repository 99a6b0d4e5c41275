//! Authentication Models
//! Mission: Define user records, JWT claims, and request/response bodies

use serde::{Deserialize, Serialize};

/// User account record held by the credential store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String, // bcrypt hash - never serialize
}

/// JWT Claims payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: u64, // subject (user id)
    pub username: String,
    pub exp: usize, // expiration timestamp
}

/// Signup request body
///
/// Fields are optional so that absent keys surface as a 400 with a
/// field-presence message instead of a body-deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Login request body
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Login response
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Generic message response for signup/delete
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// User response (sanitized - id and username only)
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: u64,
    pub username: String,
}

impl UserResponse {
    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
        }
    }
}
