use crate::{CredentialStore, SessionError, SessionResult};

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::sync::{PoisonError, RwLock, RwLockWriteGuard};
use std::time::{SystemTime, UNIX_EPOCH};

use log::{info, warn};

/// File-backed credential store.
///
/// The whole record is a flat JSON object written with the atomic pattern
/// (temp file, fsync, rename), so a crash mid-write never leaves a torn
/// file. A corrupted file is sidelined and the store starts empty.
#[derive(Debug)]
pub struct FileCredentialStore {
    path: PathBuf,
    entries: RwLock<BTreeMap<String, String>>,
}

impl FileCredentialStore {
    /// Open the store at `path`, creating parent directories as needed.
    pub fn open(path: PathBuf) -> SessionResult<Self> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| SessionError::Storage {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let entries = if path.exists() {
            let contents = fs::read_to_string(&path).map_err(|e| SessionError::Storage {
                path: path.clone(),
                source: e,
            })?;

            match serde_json::from_str::<BTreeMap<String, String>>(&contents) {
                Ok(map) => map,
                Err(e) => {
                    warn!("Credential file corrupted at {path:?}: {e}");
                    Self::backup_corrupted(&path);
                    BTreeMap::new()
                }
            }
        } else {
            info!("No credential file at {path:?} (first launch)");
            BTreeMap::new()
        };

        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    /// Sidelines a corrupted credential file for debugging.
    fn backup_corrupted(path: &PathBuf) {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        let backup = path.with_extension(format!("corrupted.{stamp}"));

        match fs::rename(path, &backup) {
            Ok(()) => warn!("Backed up corrupted credentials to {backup:?}"),
            Err(e) => warn!("Failed to back up corrupted credentials: {e}"),
        }
    }

    fn entries_write(&self) -> RwLockWriteGuard<'_, BTreeMap<String, String>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Persist the current entries using the atomic write pattern.
    ///
    /// Failures are logged, not raised: the in-memory state has already
    /// changed and session mutations must stay infallible.
    fn persist(&self, entries: &BTreeMap<String, String>) {
        let json = match serde_json::to_string_pretty(entries) {
            Ok(json) => json,
            Err(e) => {
                warn!("Failed to serialize credentials: {e}");
                return;
            }
        };

        let temp_path = self
            .path
            .with_extension(format!("tmp.{}", std::process::id()));

        let write_result = (|| -> std::io::Result<()> {
            let mut file = fs::File::create(&temp_path)?;
            file.write_all(json.as_bytes())?;
            file.sync_all()?;
            fs::rename(&temp_path, &self.path)
        })();

        if let Err(e) = write_result {
            let _ = fs::remove_file(&temp_path);
            warn!("Failed to persist credentials to {:?}: {e}", self.path);
        }
    }
}

impl CredentialStore for FileCredentialStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn put(&self, key: &str, value: &str) {
        let mut entries = self.entries_write();
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries);
    }

    fn remove(&self, key: &str) {
        let mut entries = self.entries_write();
        if entries.remove(key).is_some() {
            self.persist(&entries);
        }
    }
}
