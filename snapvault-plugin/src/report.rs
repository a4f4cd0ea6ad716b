//! Terminal Status Report
//!
//! The plugin's only externally observable result: `meta/status` holds
//! `"0"` or `"1"`, `meta/status_msg` the outcome message. Written exactly
//! once, at the end of the run, whatever happened before.

use crate::error::PluginError;
use crate::workdir::{write_private, Workdir};
use tracing::{error, info};

pub const STATUS_OK: &str = "0";
pub const STATUS_FAILED: &str = "1";
pub const SUCCESS_MSG: &str = "success";

/// Record the outcome of a run and return the process exit code.
///
/// If even the status files cannot be written there is nothing left to
/// report through; the error goes to stderr and the exit code still
/// signals failure.
pub fn finish(workdir: &Workdir, result: Result<(), PluginError>) -> u8 {
    let (status, message, code) = match &result {
        Ok(()) => {
            info!("run finished successfully");
            (STATUS_OK, SUCCESS_MSG.to_string(), 0)
        }
        Err(e) => {
            error!(error = %e, "run failed");
            (STATUS_FAILED, e.to_string(), 1)
        }
    };

    if let Err(e) = write_private(&workdir.status_msg(), message.as_bytes())
        .and_then(|()| write_private(&workdir.status(), status.as_bytes()))
    {
        eprintln!("snapvault-s3: cannot write status files: {e}");
        return 1;
    }
    code
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn workdir_with_meta() -> (TempDir, Workdir) {
        let temp = TempDir::new().unwrap();
        let workdir = Workdir::new(temp.path());
        fs::create_dir_all(temp.path().join("meta")).unwrap();
        (temp, workdir)
    }

    #[test]
    fn test_success_writes_zero_status() {
        let (_temp, workdir) = workdir_with_meta();
        let code = finish(&workdir, Ok(()));
        assert_eq!(code, 0);
        assert_eq!(fs::read_to_string(workdir.status()).unwrap(), "0");
        assert_eq!(fs::read_to_string(workdir.status_msg()).unwrap(), "success");
    }

    #[test]
    fn test_failure_writes_one_and_message() {
        let (_temp, workdir) = workdir_with_meta();
        let err = PluginError::UnimplementedCommand("sync".to_string());
        let code = finish(&workdir, Err(err));
        assert_eq!(code, 1);
        assert_eq!(fs::read_to_string(workdir.status()).unwrap(), "1");
        let msg = fs::read_to_string(workdir.status_msg()).unwrap();
        assert!(msg.contains("unimplemented"));
    }
}
