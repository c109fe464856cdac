//! Admin token storage
//!
//! The admin session persists a single opaque token between runs. The file
//! store keeps it as JSON under a fixed file name inside the configured
//! directory; the memory store is for tests and embedded use.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::ClientResult;

/// Fixed key the token is stored under
pub const TOKEN_KEY: &str = "admin_token";

/// Persisted token record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredToken {
    pub token: String,
    /// When the token was stored (Unix millis)
    pub saved_at: i64,
}

/// Client-local persistence of the admin token
pub trait TokenStore: Send + Sync {
    /// Stored token, if any
    fn load(&self) -> Option<String>;

    /// Store `token`, replacing any previous one
    fn save(&self, token: &str) -> ClientResult<()>;

    /// Remove the stored token; a missing token is not an error
    fn clear(&self) -> ClientResult<()>;
}

/// JSON file token store
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Store under `dir/admin_token.json`
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(format!("{}.json", TOKEN_KEY)),
        }
    }

    /// Token file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a token file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    fn ensure_dir(&self) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Option<String> {
        if !self.path.exists() {
            return None;
        }
        let json = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str::<StoredToken>(&json) {
            Ok(stored) => Some(stored.token),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), "Ignoring unreadable token file: {}", e);
                None
            }
        }
    }

    fn save(&self, token: &str) -> ClientResult<()> {
        self.ensure_dir()?;
        let stored = StoredToken {
            token: token.to_string(),
            saved_at: chrono::Utc::now().timestamp_millis(),
        };
        fs::write(&self.path, serde_json::to_string_pretty(&stored)?)?;
        tracing::debug!(path = %self.path.display(), "Token saved");
        Ok(())
    }

    fn clear(&self) -> ClientResult<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
            tracing::debug!(path = %self.path.display(), "Token removed");
        }
        Ok(())
    }
}

/// In-memory token store
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }

    /// A panic while holding the lock leaves a plain `Option`, safe to reuse
    fn slot(&self) -> MutexGuard<'_, Option<String>> {
        self.token.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.slot().clone()
    }

    fn save(&self, token: &str) -> ClientResult<()> {
        *self.slot() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> ClientResult<()> {
        *self.slot() = None;
        Ok(())
    }
}
