//! Durable session mirror — survives restarts, cleared on logout.
//!
//! DESIGN
//! ======
//! One JSON record under a fixed key (file name). Records are written inside
//! a versioned envelope; `load` also accepts the bare legacy shape written
//! before the envelope existed. A missing record means "no session"; an
//! unreadable record is reported as [`StorageError::Malformed`] and callers
//! degrade it to "no session" rather than failing the process.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::identity::Identity;

/// File name of the single persisted record.
pub const SESSION_FILE: &str = "sigepa_session.json";

const ENVELOPE_VERSION: u32 = 1;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed session record: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Durable mirror of the current identity.
///
/// `save` followed by `load` (with no intervening `delete`) returns an
/// identity equal in all fields to the one saved.
#[async_trait]
pub trait SessionStorage: Send + Sync {
    /// Persist the identity, replacing any previous record.
    async fn save(&self, identity: &Identity) -> Result<(), StorageError>;

    /// Read the persisted identity; `None` when no record exists.
    async fn load(&self) -> Result<Option<Identity>, StorageError>;

    /// Remove the persisted record. Removing a missing record is not an
    /// error.
    async fn delete(&self) -> Result<(), StorageError>;
}

/// Versioned on-disk envelope, added so future shapes can be migrated.
#[derive(Debug, Serialize, Deserialize)]
struct StoredSession {
    version: u32,
    identity: Identity,
}

/// Parse a persisted record, accepting the versioned envelope and the bare
/// legacy `{id, name, email, role}` shape.
fn parse_record(raw: &str) -> Result<Identity, StorageError> {
    match serde_json::from_str::<StoredSession>(raw) {
        Ok(record) => Ok(record.identity),
        Err(envelope_err) => serde_json::from_str::<Identity>(raw)
            .map_err(|_| StorageError::Malformed(envelope_err)),
    }
}

// =============================================================================
// FILE STORAGE
// =============================================================================

/// JSON-file storage: one record under [`SESSION_FILE`] inside the given
/// directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Storage rooted at `dir`. The directory is created on first save.
    #[must_use]
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self { path: dir.as_ref().join(SESSION_FILE) }
    }

    /// Full path of the record file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SessionStorage for FileStorage {
    async fn save(&self, identity: &Identity) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let record = StoredSession { version: ENVELOPE_VERSION, identity: identity.clone() };
        let json = serde_json::to_string(&record)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }

    async fn load(&self) -> Result<Option<Identity>, StorageError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        parse_record(&raw).map(Some)
    }

    async fn delete(&self) -> Result<(), StorageError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

// =============================================================================
// MEMORY STORAGE
// =============================================================================

/// In-process storage: the fallback when no durable directory is available,
/// and the substitute used in tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slot: Arc<RwLock<Option<Identity>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStorage for MemoryStorage {
    async fn save(&self, identity: &Identity) -> Result<(), StorageError> {
        *self.slot.write().await = Some(identity.clone());
        Ok(())
    }

    async fn load(&self) -> Result<Option<Identity>, StorageError> {
        Ok(self.slot.read().await.clone())
    }

    async fn delete(&self) -> Result<(), StorageError> {
        *self.slot.write().await = None;
        Ok(())
    }
}

#[cfg(test)]
#[path = "persistence_test.rs"]
mod tests;
