//! Runtime configuration.
//!
//! All settings come from the environment at startup and are carried in an
//! explicit struct rather than read ad hoc inside handlers.

use std::env;
use tracing::warn;

const DEFAULT_PORT: u16 = 3500;
const DEV_SECRET: &str = "dev-secret-change-in-production-minimum-32-characters";

/// Process configuration, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub jwt_secret: String,
}

impl Config {
    /// Read configuration from the environment.
    ///
    /// `SECRET_KEY` signs tokens; a missing value falls back to a dev
    /// default with a loud warning so local runs still work.
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let jwt_secret = match env::var("SECRET_KEY") {
            Ok(secret) if !secret.is_empty() => secret,
            _ => {
                warn!("SECRET_KEY not set, using dev default - DO NOT USE IN PRODUCTION");
                DEV_SECRET.to_string()
            }
        };

        Self { port, jwt_secret }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_env() {
        // Env-free construction path
        let config = Config {
            port: DEFAULT_PORT,
            jwt_secret: DEV_SECRET.to_string(),
        };
        assert_eq!(config.port, 3500);
        assert!(!config.jwt_secret.is_empty());
    }
}
