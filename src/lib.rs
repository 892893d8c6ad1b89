//! Session and role-based navigation core for the SIGEPA portal.
//!
//! ARCHITECTURE
//! ============
//! This crate is the single source of truth for "who is logged in" and which
//! navigation entries that user may see. Presentation code reads snapshots
//! through [`services::session::current_session`] and renders the entries
//! returned by [`services::nav::resolve`]; the login/registration/logout
//! flows in [`services::session`] are the only writers of the store.
//!
//! Collaborators are injected behind traits so the fixed-record verifier and
//! the file-backed storage can be swapped at composition time without
//! touching the store or the resolver.

pub mod identity;
pub mod services;
pub mod state;

pub use identity::{Identity, Role};
pub use services::auth::{CredentialVerifier, FixedCredentialVerifier};
pub use services::nav::{NavEntry, resolve};
pub use services::persistence::{FileStorage, MemoryStorage, SessionStorage, StorageError};
pub use services::session::{current_session, login, logout, register, restore};
pub use state::{AppState, Session, SessionStore};
