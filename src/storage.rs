// Durable key-value storage backends

use crate::error::StorageError;
use fs2::FileExt;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Read, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tracing::{debug, info};

pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// Opaque key-value store holding serialized collections
pub trait Storage {
    /// Read the value stored under `key`, or `None` if nothing was stored
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Replace the value stored under `key`
    fn set(&mut self, key: &str, value: &str) -> StorageResult<()>;
}

impl<S: Storage + ?Sized> Storage for Box<S> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }
}

/// In-process storage; clones share the same entries
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// One file per key under a directory: `{dir}/{key}.json`
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Open or create file storage rooted at `dir`
    pub fn open<P: AsRef<Path>>(dir: P) -> StorageResult<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        info!(dir = ?dir, "Opened file storage");
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> StorageResult<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.path_for(key)?;

        let mut file = match File::open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = ?path, "No stored value");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        FileExt::lock_shared(&file).map_err(|source| StorageError::Lock {
            path: path.display().to_string(),
            source,
        })?;

        let mut value = String::new();
        file.read_to_string(&mut value)?;

        // Lock is released when file is dropped
        Ok(Some(value))
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        let path = self.path_for(key)?;

        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(&path)?;

        // Truncate only once we hold the lock
        file.lock_exclusive().map_err(|source| StorageError::Lock {
            path: path.display().to_string(),
            source,
        })?;
        file.set_len(0)?;
        file.write_all(value.as_bytes())?;
        file.sync_all()?;

        debug!(path = ?path, bytes = value.len(), "Wrote stored value");
        Ok(())
    }
}

/// Keys become file names, so keep them to a safe alphabet
pub(crate) fn validate_key(key: &str) -> StorageResult<()> {
    if key.is_empty()
        || key.len() > 64
        || !key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(StorageError::InvalidKey(key.to_string()));
    }
    Ok(())
}
