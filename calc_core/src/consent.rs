//! # Cookie Consent Store
//!
//! Remembers whether the visitor accepted the cookie notice. This is the
//! only persisted state in the system: a small JSON file in a data
//! directory.
//!
//! ```json
//! { "accepted": true, "accepted_at": "2026-02-02T18:30:00Z" }
//! ```
//!
//! Writes are atomic: the record goes to a `.tmp` file, is synced, then
//! renamed over the real file.
//!
//! ## Example
//!
//! ```rust,no_run
//! use calc_core::consent::ConsentStore;
//!
//! let store = ConsentStore::new("/var/lib/calc");
//! if !store.is_accepted()? {
//!     store.accept()?;
//! }
//! # Ok::<(), calc_core::errors::CalcError>(())
//! ```

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::{CalcError, CalcResult};

/// File name of the consent record inside the data directory
pub const CONSENT_FILE: &str = "consent.json";

/// Stored consent decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsentRecord {
    pub accepted: bool,
    pub accepted_at: DateTime<Utc>,
}

/// File-backed consent flag.
#[derive(Debug, Clone)]
pub struct ConsentStore {
    path: PathBuf,
}

impl ConsentStore {
    /// Store rooted at `data_dir`. The directory is created on first write.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        ConsentStore {
            path: data_dir.as_ref().join(CONSENT_FILE),
        }
    }

    /// Path of the consent record
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored record. `Ok(None)` when nothing has been recorded.
    pub fn record(&self) -> CalcResult<Option<ConsentRecord>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(CalcError::file_error(
                    "read consent",
                    self.path.display().to_string(),
                    e.to_string(),
                ))
            }
        };
        let record: ConsentRecord = serde_json::from_str(&text)?;
        Ok(Some(record))
    }

    /// Whether the notice has been accepted.
    pub fn is_accepted(&self) -> CalcResult<bool> {
        Ok(self.record()?.is_some_and(|r| r.accepted))
    }

    /// Record acceptance now. Returns the stored record.
    pub fn accept(&self) -> CalcResult<ConsentRecord> {
        let record = ConsentRecord {
            accepted: true,
            accepted_at: Utc::now(),
        };
        self.write(&record)?;
        info!(path = %self.path.display(), "cookie notice accepted");
        Ok(record)
    }

    /// Forget any stored decision. A missing record is not an error.
    pub fn revoke(&self) -> CalcResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!(path = %self.path.display(), "cookie consent revoked");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CalcError::file_error(
                "remove consent",
                self.path.display().to_string(),
                e.to_string(),
            )),
        }
    }

    fn write(&self, record: &ConsentRecord) -> CalcResult<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|e| {
                CalcError::file_error("create data dir", dir.display().to_string(), e.to_string())
            })?;
        }

        let json = serde_json::to_string_pretty(record)?;
        let tmp_path = self.path.with_extension("json.tmp");

        let mut tmp_file = File::create(&tmp_path).map_err(|e| {
            CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
        })?;

        tmp_file.write_all(json.as_bytes()).map_err(|e| {
            CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
        })?;

        tmp_file.sync_all().map_err(|e| {
            CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
        })?;

        drop(tmp_file);

        fs::rename(&tmp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&tmp_path);
            CalcError::file_error("rename temp file", self.path.display().to_string(), e.to_string())
        })?;

        debug!(path = %self.path.display(), "consent record written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_record_is_not_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConsentStore::new(dir.path());
        assert_eq!(store.record().unwrap(), None);
        assert!(!store.is_accepted().unwrap());
    }

    #[test]
    fn test_accept_persists() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConsentStore::new(dir.path());
        let written = store.accept().unwrap();

        let reopened = ConsentStore::new(dir.path());
        assert!(reopened.is_accepted().unwrap());
        assert_eq!(reopened.record().unwrap(), Some(written));
    }

    #[test]
    fn test_accept_leaves_no_tmp_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConsentStore::new(dir.path());
        store.accept().unwrap();
        assert!(store.path().exists());
        assert!(!store.path().with_extension("json.tmp").exists());
    }

    #[test]
    fn test_accept_creates_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConsentStore::new(dir.path().join("nested").join("data"));
        store.accept().unwrap();
        assert!(store.is_accepted().unwrap());
    }

    #[test]
    fn test_revoke() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConsentStore::new(dir.path());
        store.revoke().unwrap();
        store.accept().unwrap();
        store.revoke().unwrap();
        assert!(!store.is_accepted().unwrap());
    }

    #[test]
    fn test_corrupt_record_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConsentStore::new(dir.path());
        fs::write(store.path(), "true").unwrap();
        let err = store.is_accepted().unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_declined_record_is_not_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConsentStore::new(dir.path());
        fs::write(
            store.path(),
            r#"{"accepted": false, "accepted_at": "2026-02-02T00:00:00Z"}"#,
        )
        .unwrap();
        assert!(!store.is_accepted().unwrap());
    }
}
