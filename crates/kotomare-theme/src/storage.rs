#![forbid(unsafe_code)]

//! Durable key/value storage for theme selection and custom configuration.
//!
//! The engine persists two string values: the selected theme id and the
//! JSON-encoded custom configuration. Backends implement [`ThemeStorage`]:
//!
//! - [`MemoryStorage`]: in-process map, for tests and hosts without disk.
//! - [`FileStorage`] (feature `file-storage`): one JSON object on disk,
//!   written through on every mutation.
//! - `LocalStorage` in `kotomare-theme-web`: the browser's origin storage.

use std::fmt;

use ahash::AHashMap;

/// Storage backend failures.
#[derive(Debug)]
pub enum StorageError {
    /// I/O failure reading or writing the backing file.
    Io(std::io::Error),
    /// The backing data exists but cannot be decoded.
    Corrupt(String),
    /// The backend refused the operation (quota, privacy mode, missing API).
    Unavailable(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Corrupt(msg) => write!(f, "corrupt storage: {msg}"),
            Self::Unavailable(msg) => write!(f, "storage unavailable: {msg}"),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Corrupt(_) | Self::Unavailable(_) => None,
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// String-valued key/value store scoped to the application.
///
/// Absence of a key is a normal state (`Ok(None)`), not an error.
pub trait ThemeStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()>;

    /// Remove a key. Removing a missing key succeeds.
    fn remove(&mut self, key: &str) -> StorageResult<()>;
}

impl<S: ThemeStorage + ?Sized> ThemeStorage for Box<S> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        (**self).remove(key)
    }
}

/// In-memory storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: AHashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with entries, as if persisted by an earlier session.
    #[must_use]
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

impl ThemeStorage for MemoryStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(feature = "file-storage")]
pub use file::FileStorage;

#[cfg(feature = "file-storage")]
mod file {
    use std::collections::BTreeMap;
    use std::fs;
    use std::path::{Path, PathBuf};

    use super::{StorageError, StorageResult, ThemeStorage};

    /// Storage backed by a single JSON object file.
    ///
    /// The file is read once on [`FileStorage::open`]; every mutation rewrites
    /// it via a temporary sibling and a rename.
    #[derive(Debug)]
    pub struct FileStorage {
        path: PathBuf,
        entries: BTreeMap<String, String>,
    }

    impl FileStorage {
        /// Open (or lazily create) the store at `path`.
        ///
        /// A missing file is an empty store. A file that is not a JSON object
        /// of strings is [`StorageError::Corrupt`].
        pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
            let path = path.as_ref().to_path_buf();
            let entries = match fs::read_to_string(&path) {
                Ok(content) if content.trim().is_empty() => BTreeMap::new(),
                Ok(content) => serde_json::from_str(&content)
                    .map_err(|e| StorageError::Corrupt(format!("{}: {e}", path.display())))?,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
                Err(e) => return Err(StorageError::Io(e)),
            };
            tracing::debug!(path = %path.display(), entries = entries.len(), "opened theme file storage");
            Ok(Self { path, entries })
        }

        pub fn path(&self) -> &Path {
            &self.path
        }

        fn flush(&self) -> StorageResult<()> {
            if let Some(parent) = self.path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            let json = serde_json::to_string_pretty(&self.entries)
                .map_err(|e| StorageError::Corrupt(e.to_string()))?;
            let tmp = self.path.with_extension("tmp");
            fs::write(&tmp, json)?;
            fs::rename(&tmp, &self.path)?;
            Ok(())
        }
    }

    impl ThemeStorage for FileStorage {
        fn get(&self, key: &str) -> StorageResult<Option<String>> {
            Ok(self.entries.get(key).cloned())
        }

        fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
            self.entries.insert(key.to_string(), value.to_string());
            self.flush()
        }

        fn remove(&mut self, key: &str) -> StorageResult<()> {
            if self.entries.remove(key).is_some() {
                self.flush()?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_set_get_remove() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.get("k").unwrap(), None);
        storage.set("k", "v").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("v"));
        storage.set("k", "w").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("w"));
        storage.remove("k").unwrap();
        assert_eq!(storage.get("k").unwrap(), None);
        storage.remove("k").unwrap();
        assert!(storage.is_empty());
    }

    #[test]
    fn boxed_storage_delegates() {
        let mut storage: Box<dyn ThemeStorage> = Box::new(MemoryStorage::new().with_entry("a", "1"));
        assert_eq!(storage.get("a").unwrap().as_deref(), Some("1"));
        storage.set("b", "2").unwrap();
        assert_eq!(storage.get("b").unwrap().as_deref(), Some("2"));
    }

    #[cfg(feature = "file-storage")]
    #[test]
    fn file_storage_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("theme.json");
        {
            let mut storage = FileStorage::open(&path).unwrap();
            assert_eq!(storage.get("kotomare-theme").unwrap(), None);
            storage.set("kotomare-theme", "light-blue").unwrap();
            storage.set("scratch", "x").unwrap();
            storage.remove("scratch").unwrap();
        }
        let storage = FileStorage::open(&path).unwrap();
        assert_eq!(
            storage.get("kotomare-theme").unwrap().as_deref(),
            Some("light-blue")
        );
        assert_eq!(storage.get("scratch").unwrap(), None);
    }

    #[cfg(feature = "file-storage")]
    #[test]
    fn file_storage_rejects_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();
        assert!(matches!(
            FileStorage::open(&path),
            Err(StorageError::Corrupt(_))
        ));
    }
}
