//! File-backed admin session
//!
//! Stands in for the browser's auth context when the dashboard runs from
//! the terminal. `login` writes the token to a small JSON file, `logout`
//! removes it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::dashboard::Session;

/// Contents of the session file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredSession {
    pub token: String,
    pub saved_at: DateTime<Utc>,
}

/// Session errors
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt session file: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("Token must not be empty")]
    EmptyToken,
}

/// Session persisted at a fixed path
#[derive(Debug, Clone)]
pub struct FileSession {
    path: PathBuf,
}

impl FileSession {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Store a token, replacing any previous one
    pub fn login(&self, token: &str) -> Result<StoredSession, SessionError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(SessionError::EmptyToken);
        }

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let stored = StoredSession {
            token: token.to_string(),
            saved_at: Utc::now(),
        };
        std::fs::write(&self.path, serde_json::to_vec_pretty(&stored)?)?;

        tracing::info!(path = ?self.path, "Session saved");
        Ok(stored)
    }

    /// Read the stored session; a missing file means signed out
    pub fn load(&self) -> Result<Option<StoredSession>, SessionError> {
        match std::fs::read(&self.path) {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Stored token, if any. Unreadable files count as signed out.
    pub fn token(&self) -> Option<String> {
        match self.load() {
            Ok(session) => session.map(|s| s.token),
            Err(e) => {
                tracing::warn!(path = ?self.path, error = %e, "Ignoring unreadable session");
                None
            }
        }
    }

    /// Delete the session file
    pub fn clear(&self) -> Result<(), SessionError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

impl Session for FileSession {
    fn logout(&self) {
        match self.clear() {
            Ok(()) => tracing::info!(path = ?self.path, "Session cleared"),
            Err(e) => tracing::error!(path = ?self.path, error = %e, "Failed to clear session"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_login_and_token() {
        let dir = tempdir().unwrap();
        let session = FileSession::new(dir.path().join("nested").join("session.json"));

        assert!(session.token().is_none());

        session.login("  abc123 ").unwrap();
        assert_eq!(session.token().as_deref(), Some("abc123"));
    }

    #[test]
    fn test_empty_token_rejected() {
        let dir = tempdir().unwrap();
        let session = FileSession::new(dir.path().join("session.json"));

        assert!(matches!(session.login("   "), Err(SessionError::EmptyToken)));
        assert!(!session.path().exists());
    }

    #[test]
    fn test_logout_removes_file() {
        let dir = tempdir().unwrap();
        let session = FileSession::new(dir.path().join("session.json"));

        session.login("abc").unwrap();
        assert!(session.path().exists());

        session.logout();
        assert!(!session.path().exists());
        assert!(session.token().is_none());

        // Signing out twice is fine
        session.logout();
        assert!(session.clear().is_ok());
    }

    #[test]
    fn test_corrupt_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json").unwrap();

        let session = FileSession::new(&path);
        assert!(matches!(session.load(), Err(SessionError::Corrupt(_))));
        assert!(session.token().is_none());
    }
}
