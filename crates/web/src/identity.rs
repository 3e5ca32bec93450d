//! Shared current-user identity store.
//!
//! A single source of truth for "who is viewing the site", readable from any
//! handler without threading the value through call arguments. The store has
//! exactly one write path: [`IdentityStore::hydrate`], called by the review
//! page when it renders. Everything else only reads.

use std::sync::{Arc, PoisonError, RwLock};

use crate::models::session::UserIdentity;

/// Process-wide container for the most recently hydrated identity.
///
/// Cheaply cloneable; all clones share the same underlying slot. The slot
/// starts empty and holds whatever the last hydration supplied, including
/// `None` for an unauthenticated visitor.
#[derive(Debug, Clone, Default)]
pub struct IdentityStore {
    inner: Arc<RwLock<Option<UserIdentity>>>,
}

impl IdentityStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the current identity value.
    ///
    /// Returns a clone of the held value; readers must tolerate the value
    /// changing between calls (a page render may overwrite it at any time).
    #[must_use]
    pub fn current(&self) -> Option<UserIdentity> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Copy a server-resolved identity into the store.
    ///
    /// This is the store's only mutation entry point. It always runs, with
    /// whatever value it is given: hydrating with `None` records "no user"
    /// rather than keeping a stale identity. Each render of the review page
    /// calls this once, so the store tracks the most recently rendered
    /// page's identity rather than a historical accumulation.
    pub fn hydrate(&self, identity: Option<UserIdentity>) {
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = identity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(id: &str) -> UserIdentity {
        UserIdentity {
            id: id.to_string(),
            name: None,
            user_type: None,
        }
    }

    #[test]
    fn test_starts_empty() {
        let store = IdentityStore::new();
        assert_eq!(store.current(), None);
    }

    #[test]
    fn test_hydrate_sets_value() {
        let store = IdentityStore::new();
        store.hydrate(Some(identity("u1")));
        assert_eq!(store.current(), Some(identity("u1")));
    }

    #[test]
    fn test_hydrate_with_none_overwrites() {
        let store = IdentityStore::new();
        store.hydrate(Some(identity("u1")));
        store.hydrate(None);
        assert_eq!(store.current(), None);
    }

    #[test]
    fn test_last_hydration_wins() {
        // After the k-th hydration the store holds exactly the k-th value
        let store = IdentityStore::new();
        let sequence = [None, Some(identity("u1")), Some(identity("u2")), None];
        for value in sequence {
            store.hydrate(value.clone());
            assert_eq!(store.current(), value);
        }
    }

    #[test]
    fn test_clones_share_the_slot() {
        let store = IdentityStore::new();
        let reader = store.clone();
        store.hydrate(Some(identity("u1")));
        assert_eq!(reader.current(), Some(identity("u1")));
    }
}
