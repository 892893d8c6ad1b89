//! Shared application state.
//!
//! DESIGN
//! ======
//! `SessionStore` is the process-wide holder for the current identity. It is
//! cloned freely into consumers; reads go through [`SessionStore::snapshot`]
//! while the mutating surface is crate-private, so only the flows in
//! `services::session` can commit or clear. Mutating the session outside the
//! designated flow is a compile error, not a runtime condition.
//!
//! `AppState` bundles the store with the injected verifier and storage
//! collaborators, so the core stays testable with substitutes.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::identity::Identity;
use crate::services::auth::CredentialVerifier;
use crate::services::persistence::SessionStorage;

// =============================================================================
// SESSION SNAPSHOT
// =============================================================================

/// Point-in-time view of the session, handed to consumers.
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// The authenticated identity, if any.
    pub identity: Option<Identity>,
}

impl Session {
    /// True iff an identity is present. Derived, never stored.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }
}

// =============================================================================
// SESSION STORE
// =============================================================================

/// Process-wide holder for the current identity.
///
/// Clone is cheap: all clones observe the same underlying state, so a commit
/// made through one handle is visible to every subsequent read through any
/// other handle.
#[derive(Clone, Default)]
pub struct SessionStore {
    current: Arc<RwLock<Option<Identity>>>,
}

impl SessionStore {
    /// Empty store: no identity, not authenticated.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the live session. Never fails.
    pub async fn snapshot(&self) -> Session {
        Session { identity: self.current.read().await.clone() }
    }

    /// Clone of the current identity, if any.
    pub async fn current(&self) -> Option<Identity> {
        self.current.read().await.clone()
    }

    /// Replace the current identity. The write completes before this returns,
    /// so every subsequent read observes it.
    pub(crate) async fn set(&self, identity: Identity) {
        *self.current.write().await = Some(identity);
    }

    /// Clear the current identity, returning what was present. Idempotent:
    /// clearing an empty store leaves it empty.
    pub(crate) async fn take(&self) -> Option<Identity> {
        self.current.write().await.take()
    }
}

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state handed to every consumer.
/// Clone is cheap — all inner fields are Arc-backed.
#[derive(Clone)]
pub struct AppState {
    pub session: SessionStore,
    pub verifier: Arc<dyn CredentialVerifier>,
    pub storage: Arc<dyn SessionStorage>,
}

impl AppState {
    #[must_use]
    pub fn new(verifier: Arc<dyn CredentialVerifier>, storage: Arc<dyn SessionStorage>) -> Self {
        Self { session: SessionStore::new(), verifier, storage }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
mod tests {
    use super::*;
    use super::test_helpers::dummy_identity;

    #[tokio::test]
    async fn new_store_is_unauthenticated() {
        let store = SessionStore::new();
        let session = store.snapshot().await;
        assert!(!session.is_authenticated());
        assert!(session.identity.is_none());
    }

    #[tokio::test]
    async fn set_is_visible_to_snapshot() {
        let store = SessionStore::new();
        store.set(dummy_identity()).await;
        let session = store.snapshot().await;
        assert!(session.is_authenticated());
        assert_eq!(session.identity.unwrap().id, "7");
    }

    #[tokio::test]
    async fn clones_share_state() {
        let store = SessionStore::new();
        let reader = store.clone();
        store.set(dummy_identity()).await;
        assert_eq!(reader.current().await.unwrap().email, "carla@sigepa.com");
    }

    #[tokio::test]
    async fn take_clears_and_returns_previous() {
        let store = SessionStore::new();
        store.set(dummy_identity()).await;
        let previous = store.take().await;
        assert_eq!(previous.unwrap().id, "7");
        assert!(store.snapshot().await.identity.is_none());
    }

    #[tokio::test]
    async fn take_twice_stays_absent() {
        let store = SessionStore::new();
        store.set(dummy_identity()).await;
        store.take().await;
        assert!(store.take().await.is_none());
        assert!(!store.snapshot().await.is_authenticated());
    }

    #[test]
    fn default_session_is_unauthenticated() {
        assert!(!Session::default().is_authenticated());
    }
}
