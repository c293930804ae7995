//! durable key-value storage, standing in for the browser profile store.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

/// The storage seam the session store is built against.
pub trait Storage {
    /// A missing or unreadable key reads as `None`.
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> io::Result<()>;
    /// Removing a missing key is a no-op; removal never fails.
    fn remove(&mut self, key: &str);
}

/// One file per key under a root directory.
#[derive(Debug)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub fn new(root: impl Into<PathBuf>) -> io::Result<FileStorage> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(FileStorage { root })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        // write to a temp file then rename, so a crash mid-write can't
        // leave a truncated record behind
        let path = self.path_for(key);
        let tmp_path = path.with_extension("savefile");
        fs::write(&tmp_path, value)?;
        fs::rename(&tmp_path, &path)
    }

    fn remove(&mut self, key: &str) {
        if let Err(e) = fs::remove_file(self.path_for(key)) {
            if e.kind() != io::ErrorKind::NotFound {
                log::warn!("failed to remove stored value '{}': '{}'", key, e);
            }
        }
    }
}

/// In-memory storage for tests and embedders without a filesystem.
#[derive(Debug, Clone, Default)]
pub struct MemStorage {
    values: HashMap<String, String>,
}

impl MemStorage {
    pub fn new() -> MemStorage {
        MemStorage::default()
    }
}

impl Storage for MemStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }
}
