//! Single-slot bearer token persistence.
//!
//! The backend session is represented client-side by exactly one bearer
//! token. The existence of a stored token is the sole signal used to
//! attempt a silent re-authentication at startup; clearing the slot is how
//! a session ends.

use std::io;
use std::path::PathBuf;
use std::sync::RwLock;

use secrecy::{ExposeSecret, SecretString};

/// A single-slot store for the session bearer token.
///
/// Implementations must be cheap to read: the HTTP client consults the slot
/// on every outgoing request.
pub trait TokenStore: Send + Sync {
    /// Read the stored token, if any.
    fn load(&self) -> Option<SecretString>;

    /// Replace the stored token.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the token cannot be persisted.
    fn save(&self, token: &SecretString) -> io::Result<()>;

    /// Remove the stored token. Clearing an empty slot is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the persisted token cannot be removed.
    fn clear(&self) -> io::Result<()>;
}

/// File-backed token store: one plain-text file holding the token.
///
/// The parent directory is created on first save. On unix the file is
/// written with mode 0600.
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Create a store backed by the given file path.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The file path this store reads and writes.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Option<SecretString> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(SecretString::from(trimmed.to_owned()))
    }

    fn save(&self, token: &SecretString) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, token.expose_secret())?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&self.path, std::fs::Permissions::from_mode(0o600))?;
        }

        Ok(())
    }

    fn clear(&self) -> io::Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

/// In-memory token store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    slot: RwLock<Option<SecretString>>,
}

impl MemoryTokenStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a token.
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        Self {
            slot: RwLock::new(Some(SecretString::from(token.to_owned()))),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<SecretString> {
        self.slot.read().ok().and_then(|slot| slot.clone())
    }

    fn save(&self, token: &SecretString) -> io::Result<()> {
        if let Ok(mut slot) = self.slot.write() {
            *slot = Some(token.clone());
        }
        Ok(())
    }

    fn clear(&self) -> io::Result<()> {
        if let Ok(mut slot) = self.slot.write() {
            *slot = None;
        }
        Ok(())
    }
}
