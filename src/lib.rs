//! Authgate Library
//!
//! Exposes the auth, config, and middleware modules for use by the
//! binary and integration tests.

pub mod auth;
pub mod config;
pub mod middleware;
