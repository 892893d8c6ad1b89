//! Session flows — the full surface consumers may depend on.
//!
//! ARCHITECTURE
//! ============
//! `login`, `register`, and `logout` are the only writers of the session
//! store. Each returns a bare success boolean: verification failure is a
//! single undifferentiated outcome, and storage failures degrade to an
//! in-memory-only session for the rest of the process rather than surfacing
//! to the caller.

use tracing::{info, warn};

use crate::identity::Identity;
use crate::state::{AppState, Session};

/// Live session snapshot. Never fails.
pub async fn current_session(state: &AppState) -> Session {
    state.session.snapshot().await
}

/// Authenticate and commit. Returns false on rejection, leaving the session
/// untouched; persistence is only attempted after a successful match.
pub async fn login(state: &AppState, email: &str, password: &str) -> bool {
    let Some(identity) = state.verifier.authenticate(email, password).await else {
        info!(outcome = "rejected", "login attempt");
        return false;
    };
    commit(state, identity).await;
    true
}

/// Issue a new identity and commit it as the current session.
pub async fn register(state: &AppState, name: &str, email: &str, password: &str) -> bool {
    let Some(identity) = state.verifier.register(name, email, password).await else {
        info!(outcome = "rejected", "registration attempt");
        return false;
    };
    commit(state, identity).await;
    true
}

/// Clear the session and its persisted mirror. Idempotent.
pub async fn logout(state: &AppState) -> bool {
    let previous = state.session.take().await;
    if let Err(e) = state.storage.delete().await {
        warn!(error = %e, "failed to delete persisted session");
    }
    if let Some(identity) = previous {
        info!(user = %identity.id, "logged out");
    }
    true
}

/// Rehydrate the session from storage at start-up. Trust-on-read: the stored
/// identity is committed without re-verification and without re-saving.
/// Returns whether a session was restored.
pub async fn restore(state: &AppState) -> bool {
    let loaded = match state.storage.load().await {
        Ok(loaded) => loaded,
        Err(e) => {
            warn!(error = %e, "failed to load persisted session");
            None
        }
    };
    match loaded {
        Some(identity) => {
            info!(user = %identity.id, role = %identity.role, "session restored");
            state.session.set(identity).await;
            true
        }
        None => false,
    }
}

/// Commit an identity: store first, then the durable mirror. A failed save
/// leaves the in-memory session in place for the rest of the process.
async fn commit(state: &AppState, identity: Identity) {
    state.session.set(identity.clone()).await;
    if let Err(e) = state.storage.save(&identity).await {
        warn!(error = %e, "failed to persist session");
    }
    info!(user = %identity.id, role = %identity.role, "session committed");
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
