//! Client-side session persistence
//!
//! Two session-scoped entries survive a reload: the opaque auth token and a
//! serialized user blob. Both are written on successful login, cleared on
//! logout, and read once at startup. A corrupt stored blob is discarded and
//! treated as "no session" — the one malformed-state failure mode this
//! system models.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

use crate::store::User;

/// Storage key for the opaque auth token
pub const TOKEN_KEY: &str = "auth_token";

/// Storage key for the serialized user blob
pub const USER_KEY: &str = "user_data";

/// Errors raised while persisting session state
#[derive(Debug, Error)]
pub enum SessionError {
    /// The user blob could not be serialized
    #[error("Failed to serialize session user: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The backing file could not be written
    #[error("Failed to persist session store: {0}")]
    Io(#[from] std::io::Error),
}

/// A restored authenticated session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveSession {
    /// The authenticated user
    pub user: User,
    /// The opaque session token
    pub token: String,
}

/// Key/value session storage with an optional JSON file backing
#[derive(Debug, Clone)]
pub struct SessionStore {
    entries: HashMap<String, String>,
    path: Option<PathBuf>,
}

impl SessionStore {
    /// Create a purely in-memory store
    pub fn in_memory() -> Self {
        Self { entries: HashMap::new(), path: None }
    }

    /// Create a store backed by a JSON file, loading existing entries
    ///
    /// An unreadable or unparsable backing file is treated as empty storage;
    /// session state is never worth failing startup over.
    pub fn with_file(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let entries = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(entries) => entries,
                Err(error) => {
                    warn!(path = %path.display(), %error, "discarding corrupt session file");
                    HashMap::new()
                }
            },
            Err(_) => HashMap::new(),
        };
        Self { entries, path: Some(path) }
    }

    /// Persist a freshly authenticated session
    pub fn save(&mut self, user: &User, token: &str) -> Result<(), SessionError> {
        let blob = serde_json::to_string(user)?;
        self.entries.insert(TOKEN_KEY.to_string(), token.to_string());
        self.entries.insert(USER_KEY.to_string(), blob);
        self.persist()?;
        debug!(user = %user.id, "session saved");
        Ok(())
    }

    /// Restore the stored session, if any
    ///
    /// A missing token or blob yields `None`. A present-but-unparsable blob
    /// is logged, both entries are deleted, and `None` is returned — the
    /// caller falls back to the unauthenticated state.
    pub fn restore(&mut self) -> Option<ActiveSession> {
        let token = self.entries.get(TOKEN_KEY)?.clone();
        let blob = self.entries.get(USER_KEY)?;

        match serde_json::from_str::<User>(blob) {
            Ok(user) => Some(ActiveSession { user, token }),
            Err(error) => {
                warn!(%error, "stored session data is malformed; clearing session");
                self.clear();
                None
            }
        }
    }

    /// Remove both session entries
    pub fn clear(&mut self) {
        self.entries.remove(TOKEN_KEY);
        self.entries.remove(USER_KEY);
        if let Err(error) = self.persist() {
            warn!(%error, "failed to persist cleared session");
        }
    }

    /// Whether a token is currently stored
    pub fn has_session(&self) -> bool {
        self.entries.contains_key(TOKEN_KEY) && self.entries.contains_key(USER_KEY)
    }

    /// Insert a raw entry, bypassing serialization
    ///
    /// Exists so fixtures can simulate corrupted or partial storage.
    pub fn insert_raw(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    fn persist(&self) -> Result<(), SessionError> {
        if let Some(path) = &self.path {
            let contents = serde_json::to_string_pretty(&self.entries)?;
            fs::write(path, contents)?;
        }
        Ok(())
    }
}
