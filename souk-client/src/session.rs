//! Session handling
//!
//! A [`Session`] carries the bearer token and the logged-in user. It is
//! created once per client and shared by every clone of that client, so a
//! teardown triggered by one request is seen by all of them. When backed by
//! a [`SessionStorage`] the session survives process restarts.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};
use shared::models::User;

/// Session data persisted between runs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionData {
    pub token: Option<String>,
    pub user: Option<User>,
}

/// JSON file storage for [`SessionData`]
#[derive(Debug, Clone)]
pub struct SessionStorage {
    path: PathBuf,
}

impl SessionStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Ensure the parent directory exists
    pub fn ensure_dir(&self) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    pub fn save(&self, data: &SessionData) -> std::io::Result<()> {
        self.ensure_dir()?;
        let json = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, json)
    }

    /// Load the stored session; a missing or unreadable file yields `None`
    pub fn load(&self) -> Option<SessionData> {
        if !self.path.exists() {
            return None;
        }
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), "Failed to read session file: {e}");
                return None;
            }
        };
        match serde_json::from_str(&json) {
            Ok(data) => Some(data),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), "Ignoring corrupt session file: {e}");
                None
            }
        }
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn delete(&self) -> std::io::Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Shared, explicitly passed session state
#[derive(Debug, Clone, Default)]
pub struct Session {
    inner: Arc<RwLock<SessionState>>,
    storage: Option<SessionStorage>,
}

#[derive(Debug, Default)]
struct SessionState {
    data: SessionData,
    /// Token came from `set_token` and must stay in memory
    memory_only: bool,
}

impl Session {
    /// Creates a new empty in-memory session
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session backed by `storage`, restoring any saved state
    pub fn with_storage(storage: SessionStorage) -> Self {
        let data = storage.load().unwrap_or_default();
        Self {
            inner: Arc::new(RwLock::new(SessionState {
                data,
                memory_only: false,
            })),
            storage: Some(storage),
        }
    }

    // A poisoned lock only means a writer panicked mid-assignment; the data is still usable
    fn read(&self) -> RwLockReadGuard<'_, SessionState> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, SessionState> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }

    fn persist(&self, data: &SessionData) -> std::io::Result<()> {
        match &self.storage {
            Some(storage) => storage.save(data),
            None => Ok(()),
        }
    }

    /// Returns the bearer token if available
    pub fn token(&self) -> Option<String> {
        self.read().data.token.clone()
    }

    /// Returns the current user if available
    pub fn user(&self) -> Option<User> {
        self.read().data.user.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.read().data.token.is_some()
    }

    pub fn snapshot(&self) -> SessionData {
        self.read().data.clone()
    }

    pub fn storage(&self) -> Option<&SessionStorage> {
        self.storage.as_ref()
    }

    /// Stores the token and user after a successful login and persists them
    pub fn set_login(&self, token: String, user: User) -> std::io::Result<()> {
        let data = {
            let mut guard = self.write();
            guard.data.token = Some(token);
            guard.data.user = Some(user);
            guard.memory_only = false;
            guard.data.clone()
        };
        self.persist(&data)
    }

    /// Sets a token in memory only (pre-issued tokens are not persisted)
    pub fn set_token(&self, token: String) {
        let mut guard = self.write();
        guard.data.token = Some(token);
        guard.memory_only = true;
    }

    /// Updates the cached user without touching the token
    ///
    /// Nothing is written while the token is memory-only.
    pub fn set_user(&self, user: User) -> std::io::Result<()> {
        let data = {
            let mut guard = self.write();
            guard.data.user = Some(user);
            if guard.memory_only {
                return Ok(());
            }
            guard.data.clone()
        };
        self.persist(&data)
    }

    /// Clears the session in memory and on disk
    ///
    /// Never fails: a storage error is logged and the in-memory state is
    /// cleared regardless.
    pub fn clear(&self) {
        {
            let mut guard = self.write();
            guard.data = SessionData::default();
            guard.memory_only = false;
        }
        if let Some(storage) = &self.storage
            && let Err(e) = storage.delete()
        {
            tracing::warn!(path = %storage.path().display(), "Failed to delete session file: {e}");
        }
    }
}
