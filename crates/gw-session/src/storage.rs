//! Durable key/value storage for the session.
//!
//! Two keys are used: [`STAFF_KEY`] holds the logged-in staff record and
//! [`ATTENDANCE_KEY`] the open attendance record. Values are JSON strings;
//! encoding is the store's concern, not the backend's.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use crate::error::StorageError;

pub const STAFF_KEY: &str = "guardwise_staff";
pub const ATTENDANCE_KEY: &str = "guardwise_staff_attendance";

/// Key/value backend for session state.
pub trait SessionStorage: Send + Sync {
    /// Read a value. A missing key is `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend exists but cannot be read.
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// # Errors
    ///
    /// Returns [`StorageError`] when the value cannot be written.
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a value. Removing a missing key succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when an existing value cannot be removed.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

// --- File backend ---

/// One `<key>.json` file per key under a private directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    fn ensure_dir(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir).map_err(|source| StorageError::Io {
            path: self.dir.clone(),
            source,
        })?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Err(e) = fs::set_permissions(&self.dir, fs::Permissions::from_mode(0o700)) {
                tracing::warn!("failed to chmod 0700 {}: {e}", self.dir.display());
            }
        }
        Ok(())
    }
}

impl SessionStorage for FileStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => Ok(None),
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io { path, source }),
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.ensure_dir()?;
        let path = self.path_for(key);
        fs::write(&path, value).map_err(|source| StorageError::Io {
            path: path.clone(),
            source,
        })?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o600))
                .map_err(|source| StorageError::Io { path, source })?;
        }

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Io { path, source }),
        }
    }
}

// --- Memory backend ---

#[derive(Debug, Default)]
struct MemoryEntries {
    values: HashMap<String, String>,
    read_only: bool,
}

/// In-process storage. Clones share the same entries, so a test can keep a
/// handle while the store owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<MemoryEntries>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject every write and removal with [`StorageError::ReadOnly`].
    pub fn set_read_only(&self, read_only: bool) {
        self.with(|entries| entries.read_only = read_only);
    }

    /// Raw stored value, bypassing the trait.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.with(|entries| entries.values.get(key).cloned())
    }

    /// Seed a raw value, bypassing the read-only switch.
    pub fn put(&self, key: &str, value: &str) {
        self.with(|entries| {
            entries.values.insert(key.to_string(), value.to_string());
        });
    }

    fn with<R>(&self, f: impl FnOnce(&mut MemoryEntries) -> R) -> R {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut entries)
    }
}

impl SessionStorage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.get(key))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.with(|entries| {
            if entries.read_only {
                return Err(StorageError::ReadOnly);
            }
            entries.values.insert(key.to_string(), value.to_string());
            Ok(())
        })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.with(|entries| {
            if entries.read_only {
                return Err(StorageError::ReadOnly);
            }
            entries.values.remove(key);
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_save_load_remove_cycle() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let storage = FileStorage::new(tmp.path().join("session"));

        assert_eq!(storage.load(STAFF_KEY).unwrap(), None);
        storage.save(STAFF_KEY, r#"{"id":"stf-1"}"#).unwrap();
        assert_eq!(
            storage.load(STAFF_KEY).unwrap().as_deref(),
            Some(r#"{"id":"stf-1"}"#)
        );
        assert!(tmp.path().join("session/guardwise_staff.json").exists());

        storage.remove(STAFF_KEY).unwrap();
        assert_eq!(storage.load(STAFF_KEY).unwrap(), None);
        storage.remove(STAFF_KEY).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn file_permissions_are_private() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let dir = tmp.path().join("session");
        let storage = FileStorage::new(&dir);
        storage.save(ATTENDANCE_KEY, "{}").unwrap();

        let dir_mode = fs::metadata(&dir).unwrap().permissions().mode() & 0o777;
        assert_eq!(dir_mode, 0o700, "session dir should be 0700");
        let file_mode = fs::metadata(dir.join("guardwise_staff_attendance.json"))
            .unwrap()
            .permissions()
            .mode()
            & 0o777;
        assert_eq!(file_mode, 0o600, "session file should be 0600");
    }

    #[test]
    fn whitespace_file_reads_as_absent() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let storage = FileStorage::new(tmp.path());
        fs::write(tmp.path().join("guardwise_staff.json"), "  \n").unwrap();
        assert_eq!(storage.load(STAFF_KEY).unwrap(), None);
    }

    #[test]
    fn memory_clones_share_entries() {
        let storage = MemoryStorage::new();
        let handle = storage.clone();
        storage.save(STAFF_KEY, "a").unwrap();
        assert_eq!(handle.get(STAFF_KEY).as_deref(), Some("a"));

        handle.set_read_only(true);
        assert!(matches!(storage.save(STAFF_KEY, "b"), Err(StorageError::ReadOnly)));
        assert!(matches!(storage.remove(STAFF_KEY), Err(StorageError::ReadOnly)));
        assert_eq!(storage.get(STAFF_KEY).as_deref(), Some("a"));
    }
}
