//! Key-value store over a local directory with automatic serialization.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::StoreError;

/// Type-safe store backed by one JSON file per key.
///
/// Provides automatic JSON serialization for any type that implements
/// `Serialize` and `DeserializeOwned`. A file that fails to parse reads as
/// `None`, the way a stale local-storage entry would.
#[derive(Debug, Clone)]
pub struct Store {
    root: PathBuf,
}

impl Store {
    /// Open (creating if needed) a store rooted at the given directory.
    ///
    /// # Errors
    ///
    /// Returns an I/O error when the directory cannot be created.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Get a value from the store.
    ///
    /// Returns `None` when the key is absent or its file no longer parses.
    ///
    /// # Errors
    ///
    /// Returns an I/O error when the file exists but cannot be read.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let bytes = fs::read(&path)?;
        match serde_json::from_slice(&bytes) {
            Ok(value) => Ok(Some(value)),
            Err(err) => {
                tracing::warn!(key, %err, "discarding unreadable store entry");
                Ok(None)
            }
        }
    }

    /// Set a value in the store.
    ///
    /// # Errors
    ///
    /// Returns a serialization error for an unencodable value or an I/O
    /// error when the file cannot be written.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(value)?;
        fs::write(self.key_path(key), bytes)?;
        Ok(())
    }

    /// Delete a value from the store. No-op when the key is absent.
    ///
    /// # Errors
    ///
    /// Returns an I/O error when the file exists but cannot be removed.
    pub fn remove(&self, key: &str) -> Result<(), StoreError> {
        let path = self.key_path(key);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    /// Check if a key is present.
    pub fn contains(&self, key: &str) -> bool {
        self.key_path(key).exists()
    }

    /// Remove every key in the store.
    ///
    /// # Errors
    ///
    /// Returns an I/O error when the directory cannot be scanned or a file
    /// cannot be removed.
    pub fn clear(&self) -> Result<(), StoreError> {
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.extension().is_some_and(|e| e == "json") {
                fs::remove_file(path)?;
            }
        }
        Ok(())
    }

    /// The directory backing this store.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys;

    fn temp_store() -> (tempfile::TempDir, Store) {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path()).unwrap();
        (dir, store)
    }

    #[test]
    fn test_get_missing_key() {
        let (_dir, store) = temp_store();
        let value: Option<String> = store.get(keys::CART).unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_set_then_get() {
        let (_dir, store) = temp_store();
        store.set(keys::USER_MOBILE, &"9876543210".to_string()).unwrap();

        let value: Option<String> = store.get(keys::USER_MOBILE).unwrap();
        assert_eq!(value.as_deref(), Some("9876543210"));
        assert!(store.contains(keys::USER_MOBILE));
    }

    #[test]
    fn test_overwrite() {
        let (_dir, store) = temp_store();
        store.set(keys::OTP_ATTEMPTS, &0u32).unwrap();
        store.set(keys::OTP_ATTEMPTS, &2u32).unwrap();

        let attempts: Option<u32> = store.get(keys::OTP_ATTEMPTS).unwrap();
        assert_eq!(attempts, Some(2));
    }

    #[test]
    fn test_remove() {
        let (_dir, store) = temp_store();
        store.set(keys::LOGGED_IN, &"true".to_string()).unwrap();
        store.remove(keys::LOGGED_IN).unwrap();

        assert!(!store.contains(keys::LOGGED_IN));
        // Removing again is a no-op.
        store.remove(keys::LOGGED_IN).unwrap();
    }

    #[test]
    fn test_corrupt_entry_reads_as_none() {
        let (dir, store) = temp_store();
        std::fs::write(dir.path().join("vl_cart.json"), b"{not json").unwrap();

        let value: Option<Vec<String>> = store.get(keys::CART).unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_clear_removes_all_keys() {
        let (_dir, store) = temp_store();
        store.set(keys::CART, &vec!["line"]).unwrap();
        store.set(keys::LOGGED_IN, &"true".to_string()).unwrap();

        store.clear().unwrap();
        assert!(!store.contains(keys::CART));
        assert!(!store.contains(keys::LOGGED_IN));
    }

    #[test]
    fn test_survives_reopen() {
        let (dir, store) = temp_store();
        store.set(keys::USER_MOBILE, &"9876543210".to_string()).unwrap();

        let reopened = Store::open(dir.path()).unwrap();
        let value: Option<String> = reopened.get(keys::USER_MOBILE).unwrap();
        assert_eq!(value.as_deref(), Some("9876543210"));
    }
}
