//! Web configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `GOPRAC_DATABASE_URL` - `PostgreSQL` connection string
//! - `GOPRAC_BASE_URL` - Public URL for the site
//! - `GOPRAC_SESSION_SECRET` - Session signing secret (min 32 chars)
//!
//! ## Optional
//! - `GOPRAC_HOST` - Bind address (default: 127.0.0.1)
//! - `GOPRAC_PORT` - Listen port (default: 3000)
//! - `GOPRAC_MEDIA_BASE_URL` - Base URL for recorded interview media
//! - `SENTRY_DSN` - Sentry error tracking DSN

use std::net::{IpAddr, SocketAddr};

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

const MIN_SESSION_SECRET_LENGTH: usize = 32;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Web application configuration.
#[derive(Debug, Clone)]
pub struct WebConfig {
    /// `PostgreSQL` database connection URL (contains password)
    pub database_url: SecretString,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the site
    pub base_url: String,
    /// Session signing secret
    pub session_secret: SecretString,
    /// Base URL for recorded interview media (feedback videos)
    pub media_base_url: Option<String>,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
}

impl WebConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing, invalid, or
    /// if the session secret is too short.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let database_url = get_database_url("GOPRAC_DATABASE_URL")?;
        let host = get_env_or_default("GOPRAC_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("GOPRAC_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("GOPRAC_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("GOPRAC_PORT".to_string(), e.to_string()))?;
        let base_url = get_required_env("GOPRAC_BASE_URL")?;
        let session_secret = get_required_secret("GOPRAC_SESSION_SECRET")?;
        validate_session_secret(&session_secret, "GOPRAC_SESSION_SECRET")?;

        let media_base_url = get_optional_env("GOPRAC_MEDIA_BASE_URL");
        let sentry_dsn = get_optional_env("SENTRY_DSN");

        Ok(Self {
            database_url,
            host,
            port,
            base_url,
            session_secret,
            media_base_url,
            sentry_dsn,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Build the playback URL for an interview session's feedback video.
    ///
    /// Returns `None` if no media base URL is configured.
    #[must_use]
    pub fn review_video_url(&self, interview_session: &str) -> Option<String> {
        let base = self.media_base_url.as_ref()?;
        Some(format!(
            "{}/reviews/{interview_session}.mp4",
            base.trim_end_matches('/')
        ))
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get a required environment variable as a secret.
fn get_required_secret(key: &str) -> Result<SecretString, ConfigError> {
    let value = get_required_env(key)?;
    Ok(SecretString::from(value))
}

/// Get database URL with fallback to generic `DATABASE_URL`.
fn get_database_url(primary_key: &str) -> Result<SecretString, ConfigError> {
    // Try primary key first (e.g., GOPRAC_DATABASE_URL)
    if let Ok(value) = std::env::var(primary_key) {
        return Ok(SecretString::from(value));
    }
    // Fallback to generic DATABASE_URL (set by managed postgres attach)
    if let Ok(value) = std::env::var("DATABASE_URL") {
        return Ok(SecretString::from(value));
    }
    Err(ConfigError::MissingEnvVar(primary_key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Validate that a session secret meets minimum length requirements.
fn validate_session_secret(secret: &SecretString, var_name: &str) -> Result<(), ConfigError> {
    let value = secret.expose_secret();
    if value.len() < MIN_SESSION_SECRET_LENGTH {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!(
                "must be at least {} characters (got {})",
                MIN_SESSION_SECRET_LENGTH,
                value.len()
            ),
        ));
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn test_config() -> WebConfig {
        WebConfig {
            database_url: SecretString::from("postgres://localhost/test"),
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            base_url: "http://localhost:3000".to_string(),
            session_secret: SecretString::from("x".repeat(32)),
            media_base_url: None,
            sentry_dsn: None,
        }
    }

    #[test]
    fn test_validate_session_secret_too_short() {
        let secret = SecretString::from("short");
        let result = validate_session_secret(&secret, "TEST_SESSION");
        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::InsecureSecret(_, _)
        ));
    }

    #[test]
    fn test_validate_session_secret_valid_length() {
        let secret = SecretString::from("a".repeat(32));
        let result = validate_session_secret(&secret, "TEST_SESSION");
        assert!(result.is_ok());
    }

    #[test]
    fn test_socket_addr() {
        let config = test_config();
        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_review_video_url_without_media_base() {
        let config = test_config();
        assert_eq!(config.review_video_url("abc123"), None);
    }

    #[test]
    fn test_review_video_url_with_media_base() {
        let mut config = test_config();
        config.media_base_url = Some("https://media.goprac.test/".to_string());
        assert_eq!(
            config.review_video_url("abc123").unwrap(),
            "https://media.goprac.test/reviews/abc123.mp4"
        );
    }
}
