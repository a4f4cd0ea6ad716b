//! Object Storage Module
//!
//! Abstraction over the object stores a backup job can target: the local
//! filesystem, and any S3-compatible endpoint.

mod local;
mod traits;

#[cfg(feature = "s3")]
mod s3;

// Re-exports
pub use local::LocalObjectStore;
pub use traits::{ObjectStore, ObjectStoreError};

#[cfg(feature = "s3")]
pub use s3::S3ObjectStore;
