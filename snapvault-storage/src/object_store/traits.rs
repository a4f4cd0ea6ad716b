//! Object Store Trait Definitions
//!
//! Defines the common interface for all object storage backends.

use std::path::Path;
use thiserror::Error;

/// Errors that can occur during object store operations.
#[derive(Debug, Error)]
pub enum ObjectStoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("object not found: {0}")]
    NotFound(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("provider error: {0}")]
    Provider(String),
}

/// Abstraction over backup upload/restore targets.
///
/// Objects are addressed by a flat string key inside a container (bucket or
/// root directory) fixed at construction time. All calls block until the
/// transfer completes or fails; callers own any timeout policy.
pub trait ObjectStore: Send + Sync {
    /// Upload a single local file under the given object key.
    /// An existing object with the same key is replaced.
    fn upload_file(&self, local_path: &Path, key: &str) -> Result<(), ObjectStoreError>;

    /// Download the object with the given key into a local file,
    /// creating parent directories as needed.
    fn download_file(&self, key: &str, local_path: &Path) -> Result<(), ObjectStoreError>;

    /// Check whether an object exists under the given key.
    fn exists(&self, key: &str) -> Result<bool, ObjectStoreError>;

    /// Get the name/type of this object store for logging.
    fn store_type(&self) -> &'static str;
}
