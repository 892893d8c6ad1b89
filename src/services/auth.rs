//! Credential verification — fixed-record stand-in for an identity backend.

use async_trait::async_trait;
use uuid::Uuid;

use crate::identity::{Identity, Role};

/// Decides authentication outcomes.
///
/// Implementations never touch session state; the caller commits the
/// returned identity. A production backend replaces
/// [`FixedCredentialVerifier`] behind this trait without changing the store
/// or the resolver.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// Exact-match login check. `None` carries no failure detail, so callers
    /// cannot leak which field was wrong.
    async fn authenticate(&self, email: &str, password: &str) -> Option<Identity>;

    /// Issue a new identity for a signup. The fixed implementation always
    /// succeeds with [`Role::CoOwner`]; real backends may reject.
    async fn register(&self, name: &str, email: &str, password: &str) -> Option<Identity>;
}

/// One known login record.
struct CredentialRecord {
    email: &'static str,
    password: &'static str,
    id: &'static str,
    name: &'static str,
    role: Role,
}

const KNOWN_CREDENTIALS: &[CredentialRecord] = &[
    CredentialRecord {
        email: "admin@sigepa.com",
        password: "admin123",
        id: "1",
        name: "Administrador",
        role: Role::Administrator,
    },
    CredentialRecord {
        email: "user@sigepa.com",
        password: "user123",
        id: "2",
        name: "Juan Pérez",
        role: Role::CoOwner,
    },
];

/// Verifier backed by a fixed credential table.
///
/// Matching is exact and case-sensitive with no hashing. Empty inputs are
/// ordinary non-matching credentials, not a distinct error.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedCredentialVerifier;

#[async_trait]
impl CredentialVerifier for FixedCredentialVerifier {
    async fn authenticate(&self, email: &str, password: &str) -> Option<Identity> {
        KNOWN_CREDENTIALS
            .iter()
            .find(|record| record.email == email && record.password == password)
            .map(|record| Identity {
                id: record.id.to_owned(),
                name: record.name.to_owned(),
                email: record.email.to_owned(),
                role: record.role,
            })
    }

    async fn register(&self, name: &str, email: &str, _password: &str) -> Option<Identity> {
        // No duplicate-email or password-strength checks: signups always
        // issue a fresh co-owner identity.
        Some(Identity {
            id: Uuid::new_v4().to_string(),
            name: name.to_owned(),
            email: email.to_owned(),
            role: Role::CoOwner,
        })
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
