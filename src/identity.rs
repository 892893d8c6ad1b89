//! Identity and role data model.

use serde::{Deserialize, Serialize};

/// Closed set of roles the portal distinguishes.
///
/// Serialized as `"administrator"` / `"co-owner"`. The legacy `"admin"`
/// spelling is accepted when reading previously persisted records and is
/// never written back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "administrator", alias = "admin")]
    Administrator,
    #[serde(rename = "co-owner")]
    CoOwner,
}

impl Role {
    /// Canonical identifier used in persisted records and logs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Administrator => "administrator",
            Role::CoOwner => "co-owner",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An authenticated actor.
///
/// Values are produced by the credential verifier (login, registration) or
/// rehydrated from storage; fields are never mutated in place. The role is
/// fixed for the lifetime of the identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Opaque unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Login key, matched case-sensitively.
    pub email: String,
    /// Assigned role.
    pub role: Role,
}
