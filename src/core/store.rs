//! Key-value persistence used by the cart and the user session.
//!
//! # Public API
//! - [`KeyValueStore`]: synchronous `get`/`set` of serialized string blobs
//! - [`FileStore`]: one `<key>.json` file per key inside a data directory
//! - [`MemoryStore`]: in-process map, used by tests and embedders
//!
//! Callers own the serialization format. A store only moves strings around.

use crate::core::error::{NexbuyError, Result};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Persistence key for the serialized cart.
pub const CART_KEY: &str = "nexbuy_cart_v1";

/// Persistence key for the simulated user session.
pub const SESSION_KEY: &str = "nexbuy_user";

pub trait KeyValueStore {
    /// Returns `Ok(None)` when the key has never been written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Durable store backed by a directory on disk.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// The directory is created lazily on the first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.entry_path(key);
        log::debug!("Reading store entry: {}", path.display());

        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("Store entry does not exist: {}", path.display());
                Ok(None)
            }
            Err(e) => {
                log::error!("Failed to read store entry '{}': {}", path.display(), e);
                Err(NexbuyError::store_read_failed(&path, e))
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if let Err(e) = fs::create_dir_all(&self.root) {
            log::error!(
                "Failed to create data directory '{}': {}",
                self.root.display(),
                e
            );
            return Err(NexbuyError::data_directory_creation_failed(&self.root, e));
        }

        let path = self.entry_path(key);
        if let Err(e) = fs::write(&path, value) {
            log::error!("Failed to write store entry '{}': {}", path.display(), e);
            return Err(NexbuyError::store_write_failed(&path, e));
        }

        log::debug!("Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }
}
