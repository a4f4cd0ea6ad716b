use snapvault_storage::ObjectStoreError;
use thiserror::Error;

/// Everything that can go wrong during a plugin invocation.
///
/// Per the plugin protocol, all of these are fatal: the error is logged,
/// its message lands in `meta/status_msg`, and the process exits non-zero.
#[derive(Debug, Error)]
pub enum PluginError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid json in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("no data file found under {0}")]
    NoDataFile(String),

    #[error("object store error: {0}")]
    Store(#[from] ObjectStoreError),

    #[error("unimplemented meta/cmd: {0:?}")]
    UnimplementedCommand(String),
}

pub type Result<T, E = PluginError> = std::result::Result<T, E>;
