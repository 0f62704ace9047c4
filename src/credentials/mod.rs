//! Credential persistence
//!
//! One credential record, two mutually exclusive scopes: `Remembered` lives
//! under the config directory and survives reboots; `Session` lives under the
//! user runtime directory and is gone after logout or reboot. Reads check the
//! remembered scope first, treat an expired record as absent, and evict it
//! from whichever scope held it as a side effect of that read.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CredentialError, Result};
use crate::notify::Notifier;

/// File name for the remembered scope
const REMEMBERED_FILE: &str = "credentials.json";

/// File name for the session scope
const SESSION_FILE: &str = "session.json";

/// Env override relocating both scopes, for the test harness
const CREDENTIALS_DIR_ENV: &str = "MHFLOP_CREDENTIALS_DIR";

/// The persisted credential record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credential {
    /// Bearer token issued at login
    pub token: String,

    /// Token expiration time
    pub expire: DateTime<Utc>,

    /// Account username, kept for greetings and `status`
    pub username: String,

    /// Account id
    pub id: u64,
}

impl Credential {
    /// Whether the record has passed its expiry
    pub fn is_expired(&self) -> bool {
        self.expire <= Utc::now()
    }
}

/// Storage scope for a credential record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Long-lived, survives reboots (config directory)
    Remembered,
    /// Cleared with the user session (runtime directory)
    Session,
}

/// File-backed credential store
pub struct CredentialStore {
    remembered_path: PathBuf,
    session_path: PathBuf,
    notifier: Notifier,
}

impl CredentialStore {
    /// Open the store at the default locations.
    pub fn open() -> Result<Self> {
        if let Ok(dir) = std::env::var(CREDENTIALS_DIR_ENV) {
            return Ok(Self::open_at(Path::new(&dir)));
        }

        let home = dirs::home_dir().ok_or(CredentialError::NoHome)?;
        let remembered_path = home.join(".mhflop").join(REMEMBERED_FILE);

        let runtime = dirs::runtime_dir().unwrap_or_else(std::env::temp_dir);
        let session_path = runtime.join("mhflop").join(SESSION_FILE);

        Ok(Self {
            remembered_path,
            session_path,
            notifier: Notifier::stderr(),
        })
    }

    /// Open the store with both scopes under a specific directory (for testing).
    pub fn open_at(dir: &Path) -> Self {
        Self {
            remembered_path: dir.join(REMEMBERED_FILE),
            session_path: dir.join(SESSION_FILE),
            notifier: Notifier::stderr(),
        }
    }

    /// Replace the notice destination.
    pub fn with_notifier(mut self, notifier: Notifier) -> Self {
        self.notifier = notifier;
        self
    }

    fn path_for(&self, scope: Scope) -> &Path {
        match scope {
            Scope::Remembered => &self.remembered_path,
            Scope::Session => &self.session_path,
        }
    }

    /// Persist a record in the chosen scope.
    ///
    /// The other scope is left untouched; keeping at most one valid record
    /// across both scopes is the login flow's job.
    pub fn store(&self, scope: Scope, record: &Credential) -> Result<()> {
        let path = self.path_for(scope);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| CredentialError::SaveError(e.to_string()))?;
        }

        let contents = serde_json::to_string(record)?;
        std::fs::write(path, contents).map_err(|e| CredentialError::SaveError(e.to_string()))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Ok(metadata) = std::fs::metadata(path) {
                let mut perms = metadata.permissions();
                perms.set_mode(0o600);
                let _ = std::fs::set_permissions(path, perms);
            }
        }

        Ok(())
    }

    /// Read the full record, remembered scope first.
    ///
    /// An expired record is evicted from the scope that held it, a warning
    /// notice is emitted, and absent is reported. Unreadable or unparsable
    /// files are treated as absent without a notice.
    pub fn read_record(&self) -> Option<Credential> {
        for scope in [Scope::Remembered, Scope::Session] {
            let path = self.path_for(scope);
            let Ok(contents) = std::fs::read_to_string(path) else {
                continue;
            };
            let Ok(record) = serde_json::from_str::<Credential>(&contents) else {
                continue;
            };

            if record.is_expired() {
                let _ = std::fs::remove_file(path);
                self.notifier
                    .warn("Login session has expired, please sign in again");
                return None;
            }

            return Some(record);
        }

        None
    }

    /// Read the current token, if a valid record exists.
    pub fn read(&self) -> Option<String> {
        self.read_record().map(|record| record.token)
    }

    /// Evict from both scopes unconditionally.
    pub fn clear(&self) {
        let _ = std::fs::remove_file(&self.remembered_path);
        let _ = std::fs::remove_file(&self.session_path);
    }

    /// True iff no valid credential is stored.
    pub fn is_unauthenticated(&self) -> bool {
        self.read().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::capture::capturing;

    fn valid_record() -> Credential {
        Credential {
            token: "token-abc".to_string(),
            expire: Utc::now() + chrono::Duration::hours(1),
            username: "alice".to_string(),
            id: 7,
        }
    }

    fn expired_record() -> Credential {
        Credential {
            token: "token-old".to_string(),
            expire: Utc::now() - chrono::Duration::minutes(1),
            username: "alice".to_string(),
            id: 7,
        }
    }

    #[test]
    fn test_store_then_read_round_trips_token() {
        let dir = tempfile::tempdir().unwrap();
        let store = CredentialStore::open_at(dir.path());

        store.store(Scope::Remembered, &valid_record()).unwrap();

        assert_eq!(store.read().as_deref(), Some("token-abc"));
        assert!(!store.is_unauthenticated());
    }

    #[test]
    fn test_read_prefers_remembered_scope() {
        let dir = tempfile::tempdir().unwrap();
        let store = CredentialStore::open_at(dir.path());

        let mut session = valid_record();
        session.token = "session-token".to_string();
        store.store(Scope::Session, &session).unwrap();
        store.store(Scope::Remembered, &valid_record()).unwrap();

        assert_eq!(store.read().as_deref(), Some("token-abc"));
    }

    #[test]
    fn test_read_with_nothing_stored_is_silent() {
        let dir = tempfile::tempdir().unwrap();
        let (notifier, sink) = capturing();
        let store = CredentialStore::open_at(dir.path()).with_notifier(notifier);

        assert!(store.read().is_none());
        assert!(store.is_unauthenticated());
        assert!(sink.notices().is_empty());
    }

    #[test]
    fn test_expired_record_is_evicted_with_notice() {
        let dir = tempfile::tempdir().unwrap();
        let (notifier, sink) = capturing();
        let store = CredentialStore::open_at(dir.path()).with_notifier(notifier);

        store.store(Scope::Session, &expired_record()).unwrap();

        assert!(store.read().is_none());
        // Evicted by the read that found it
        assert!(!dir.path().join(SESSION_FILE).exists());
        let notices = sink.notices();
        assert_eq!(notices.len(), 1);
        assert!(notices[0].text.contains("expired"));

        // Subsequent reads stay silent
        assert!(store.read().is_none());
        assert_eq!(sink.notices().len(), 1);
    }

    #[test]
    fn test_malformed_record_is_treated_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let (notifier, sink) = capturing();
        let store = CredentialStore::open_at(dir.path()).with_notifier(notifier);

        std::fs::write(dir.path().join(REMEMBERED_FILE), "not json{").unwrap();

        assert!(store.read().is_none());
        assert!(sink.notices().is_empty());
    }

    #[test]
    fn test_clear_evicts_both_scopes() {
        let dir = tempfile::tempdir().unwrap();
        let store = CredentialStore::open_at(dir.path());

        store.store(Scope::Remembered, &valid_record()).unwrap();
        store.store(Scope::Session, &valid_record()).unwrap();

        store.clear();

        assert!(store.read().is_none());
        assert!(!dir.path().join(REMEMBERED_FILE).exists());
        assert!(!dir.path().join(SESSION_FILE).exists());
    }

    #[test]
    fn test_store_does_not_touch_other_scope() {
        let dir = tempfile::tempdir().unwrap();
        let store = CredentialStore::open_at(dir.path());

        store.store(Scope::Session, &valid_record()).unwrap();
        let mut newer = valid_record();
        newer.token = "newer".to_string();
        store.store(Scope::Remembered, &newer).unwrap();

        assert!(dir.path().join(SESSION_FILE).exists());
        assert!(dir.path().join(REMEMBERED_FILE).exists());
    }

    #[test]
    fn test_read_record_exposes_full_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = CredentialStore::open_at(dir.path());

        store.store(Scope::Remembered, &valid_record()).unwrap();

        let record = store.read_record().unwrap();
        assert_eq!(record.username, "alice");
        assert_eq!(record.id, 7);
    }
}
