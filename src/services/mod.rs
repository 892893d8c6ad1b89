//! Domain services behind the session public surface.
//!
//! ARCHITECTURE
//! ============
//! Service modules own verification, persistence, and navigation concerns so
//! the state module stays a plain holder and consumers depend only on the
//! flow functions in [`session`].

pub mod auth;
pub mod nav;
pub mod persistence;
pub mod session;
