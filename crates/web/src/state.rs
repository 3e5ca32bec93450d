//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::WebConfig;
use crate::identity::IdentityStore;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like database connections and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: WebConfig,
    pool: PgPool,
    identity: IdentityStore,
}

impl AppState {
    /// Create a new application state with an empty identity store.
    #[must_use]
    pub fn new(config: WebConfig, pool: PgPool) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                identity: IdentityStore::new(),
            }),
        }
    }

    /// Get a reference to the web configuration.
    #[must_use]
    pub fn config(&self) -> &WebConfig {
        &self.inner.config
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// Get a reference to the shared identity store.
    #[must_use]
    pub fn identity(&self) -> &IdentityStore {
        &self.inner.identity
    }
}
