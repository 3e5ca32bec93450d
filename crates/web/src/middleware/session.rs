//! Session middleware configuration.
//!
//! Sets up `PostgreSQL`-backed sessions using tower-sessions. The login flow
//! that populates the session lives elsewhere; this site only reads the
//! stored identity.

use sqlx::PgPool;
use tower_sessions::{Expiry, Session, SessionManagerLayer};
use tower_sessions_sqlx_store::PostgresStore;

use crate::config::WebConfig;
use crate::models::session::{UserIdentity, keys};

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "goprac_session";

/// Session expiry time in seconds (7 days).
const SESSION_EXPIRY_SECONDS: i64 = 7 * 24 * 60 * 60;

/// Create the session layer with `PostgreSQL` store.
///
/// # Arguments
///
/// * `pool` - `PostgreSQL` connection pool
/// * `config` - Web configuration (for cookie security)
#[must_use]
pub fn create_session_layer(
    pool: &PgPool,
    config: &WebConfig,
) -> SessionManagerLayer<PostgresStore> {
    // Note: The sessions table must be created via migration
    let store = PostgresStore::new(pool.clone());

    // Determine if we're in production (HTTPS)
    let is_secure = config.base_url.starts_with("https://");

    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_secure(is_secure)
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}

/// Resolve the identity stored in the session, if any.
///
/// A session-store failure degrades to an anonymous visitor rather than
/// failing the page; the error is logged for operators.
pub async fn current_identity(session: &Session) -> Option<UserIdentity> {
    match session.get::<UserIdentity>(keys::CURRENT_USER).await {
        Ok(identity) => identity,
        Err(e) => {
            tracing::warn!("Failed to read identity from session: {e}");
            None
        }
    }
}
