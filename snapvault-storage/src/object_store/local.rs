//! Local Filesystem Object Store
//!
//! Implements the ObjectStore trait for the local filesystem.
//! Useful for development, testing, and air-gapped deployments.

use super::traits::{ObjectStore, ObjectStoreError};
use std::fs;
use std::path::{Path, PathBuf};

/// Local filesystem-based object store.
///
/// Objects are plain files under a root directory, named by their key.
#[derive(Debug, Clone)]
pub struct LocalObjectStore {
    root: PathBuf,
}

impl LocalObjectStore {
    /// Create a new LocalObjectStore with the given root directory.
    pub fn new(root: impl AsRef<Path>) -> Result<Self, ObjectStoreError> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    fn object_path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

impl ObjectStore for LocalObjectStore {
    fn upload_file(&self, local_path: &Path, key: &str) -> Result<(), ObjectStoreError> {
        let dest = self.object_path(key);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(local_path, &dest)?;
        Ok(())
    }

    fn download_file(&self, key: &str, local_path: &Path) -> Result<(), ObjectStoreError> {
        let src = self.object_path(key);
        if !src.exists() {
            return Err(ObjectStoreError::NotFound(key.to_string()));
        }
        if let Some(parent) = local_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(&src, local_path)?;
        Ok(())
    }

    fn exists(&self, key: &str) -> Result<bool, ObjectStoreError> {
        Ok(self.object_path(key).exists())
    }

    fn store_type(&self) -> &'static str {
        "local"
    }
}
