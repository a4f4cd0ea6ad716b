//! Object storage backends for the snapvault backup plugins.
//!
//! Exposes a small blocking [`ObjectStore`] interface over single-object
//! upload and download, with a local filesystem backend for development and
//! testing and an S3-compatible backend behind the `s3` feature.

pub mod object_store;

pub use object_store::{LocalObjectStore, ObjectStore, ObjectStoreError};

#[cfg(feature = "s3")]
pub use object_store::S3ObjectStore;
