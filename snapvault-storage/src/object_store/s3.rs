//! S3-Compatible Object Store Implementation

use super::traits::{ObjectStore, ObjectStoreError};
use aws_config::BehaviorVersion;
use aws_sdk_s3::config::{Credentials, Region};
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tokio::runtime::Runtime;

const OCTET_STREAM: &str = "application/octet-stream";

/// Object store backed by any S3-compatible endpoint.
///
/// The SDK is async; this type owns a private runtime and blocks on every
/// call so that callers stay fully synchronous.
#[derive(Clone)]
pub struct S3ObjectStore {
    client: Client,
    bucket: String,
    runtime: Arc<Runtime>,
}

impl S3ObjectStore {
    /// Build a client for the given endpoint with static credentials and
    /// path-style addressing, targeting a single bucket.
    pub fn connect(
        endpoint_url: impl Into<String>,
        access_key: &str,
        secret_key: &str,
        region: impl Into<String>,
        bucket: impl Into<String>,
    ) -> Result<Self, ObjectStoreError> {
        let runtime =
            Runtime::new().map_err(|e| ObjectStoreError::Configuration(e.to_string()))?;
        let endpoint = endpoint_url.into();
        let region_str = region.into();
        let credentials = Credentials::new(access_key, secret_key, None, None, "job-config");

        let client = runtime.block_on(async {
            let shared = aws_config::defaults(BehaviorVersion::latest())
                .endpoint_url(&endpoint)
                .region(Region::new(region_str))
                .credentials_provider(credentials)
                .load()
                .await;
            let config = aws_sdk_s3::config::Builder::from(&shared)
                .force_path_style(true)
                .build();
            Client::from_conf(config)
        });

        Ok(Self {
            client,
            bucket: bucket.into(),
            runtime: Arc::new(runtime),
        })
    }

    fn run_async<F, T>(&self, fut: F) -> Result<T, ObjectStoreError>
    where
        F: std::future::Future<Output = Result<T, ObjectStoreError>>,
    {
        self.runtime.block_on(fut)
    }
}

impl ObjectStore for S3ObjectStore {
    fn upload_file(&self, local_path: &Path, key: &str) -> Result<(), ObjectStoreError> {
        self.run_async(async {
            let body = ByteStream::from_path(local_path)
                .await
                .map_err(|e| ObjectStoreError::Io(std::io::Error::other(e.to_string())))?;
            self.client
                .put_object()
                .bucket(&self.bucket)
                .key(key)
                .content_type(OCTET_STREAM)
                .body(body)
                .send()
                .await
                .map_err(|e| ObjectStoreError::Provider(e.to_string()))?;
            Ok(())
        })
    }

    fn download_file(&self, key: &str, local_path: &Path) -> Result<(), ObjectStoreError> {
        self.run_async(async {
            if let Some(parent) = local_path.parent() {
                fs::create_dir_all(parent)?;
            }
            let resp = self
                .client
                .get_object()
                .bucket(&self.bucket)
                .key(key)
                .send()
                .await
                .map_err(|e| {
                    let service_err = e.into_service_error();
                    if service_err.is_no_such_key() {
                        ObjectStoreError::NotFound(key.to_string())
                    } else {
                        ObjectStoreError::Provider(service_err.to_string())
                    }
                })?;
            let body = resp
                .body
                .collect()
                .await
                .map_err(|e| ObjectStoreError::Network(e.to_string()))?;
            // Buffer fully before touching the destination so a failed
            // transfer leaves no partial file behind.
            fs::write(local_path, body.into_bytes())?;
            Ok(())
        })
    }

    fn exists(&self, key: &str) -> Result<bool, ObjectStoreError> {
        self.run_async(async {
            match self
                .client
                .head_object()
                .bucket(&self.bucket)
                .key(key)
                .send()
                .await
            {
                Ok(_) => Ok(true),
                Err(e) => {
                    let service_err = e.into_service_error();
                    if service_err.is_not_found() {
                        Ok(false)
                    } else {
                        Err(ObjectStoreError::Provider(service_err.to_string()))
                    }
                }
            }
        })
    }

    fn store_type(&self) -> &'static str {
        "s3"
    }
}
