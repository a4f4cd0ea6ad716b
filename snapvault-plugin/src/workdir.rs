//! Working-Directory Contract
//!
//! The orchestrator invokes the plugin inside a prepared working directory
//! and communicates exclusively through files in it: inputs under `meta/`
//! and `data/`, outputs back into the same tree. This module is the single
//! place that knows those paths.

use crate::error::{PluginError, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Typed view of the plugin working directory.
#[derive(Debug, Clone)]
pub struct Workdir {
    root: PathBuf,
}

impl Workdir {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// `meta/arg` — job configuration (JSON, input).
    pub fn arg(&self) -> PathBuf {
        self.root.join("meta").join("arg")
    }

    /// `meta/cmd` — the operation to perform (input).
    pub fn cmd(&self) -> PathBuf {
        self.root.join("meta").join("cmd")
    }

    /// `meta/rstr_arg` — restore request (JSON, input, get only).
    pub fn rstr_arg(&self) -> PathBuf {
        self.root.join("meta").join("rstr_arg")
    }

    /// `meta/arg.out` — job configuration with timing fields (output).
    pub fn arg_out(&self) -> PathBuf {
        self.root.join("meta").join("arg.out")
    }

    /// `meta/status` — terminal status code, `"0"` or `"1"` (output).
    pub fn status(&self) -> PathBuf {
        self.root.join("meta").join("status")
    }

    /// `meta/status_msg` — human-readable outcome (output).
    pub fn status_msg(&self) -> PathBuf {
        self.root.join("meta").join("status_msg")
    }

    /// `meta/log` — diagnostic log (output).
    pub fn log(&self) -> PathBuf {
        self.root.join("meta").join("log")
    }

    /// `data/` — holds the single file to back up (put).
    pub fn data_dir(&self) -> PathBuf {
        self.root.join("data")
    }

    /// `data/data` — where a restored object is written (get).
    pub fn restore_target(&self) -> PathBuf {
        self.data_dir().join("data")
    }

    /// Locate the file to upload: the lexically first entry of `data/`.
    ///
    /// The orchestrator places exactly one export file there; sorting makes
    /// the choice deterministic if it ever places more.
    pub fn find_data_file(&self) -> Result<PathBuf> {
        let data_dir = self.data_dir();
        let mut files: Vec<PathBuf> = fs::read_dir(&data_dir)?
            .collect::<std::io::Result<Vec<_>>>()?
            .into_iter()
            .filter(|entry| entry.path().is_file())
            .map(|entry| entry.path())
            .collect();
        files.sort();
        files
            .into_iter()
            .next()
            .ok_or_else(|| PluginError::NoDataFile(data_dir.display().to_string()))
    }
}

/// Write an output contract file with owner-only permissions, truncating
/// any previous contents.
pub(crate) fn write_private(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    let mut file = options.open(path)?;
    file.write_all(contents)
}
