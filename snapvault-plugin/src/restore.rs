//! Restore Request
//!
//! On `get`, `meta/rstr_arg` identifies which previously backed-up job to
//! restore. The object key is the job id rendered as a decimal string, the
//! same key the put path of that job uploaded under.

use crate::error::{PluginError, Result};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct RestoreRequest {
    pub rstr_to_job_id: i64,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RestoreRequest {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read(path)?;
        serde_json::from_slice(&raw).map_err(|source| PluginError::Json {
            path: path.display().to_string(),
            source,
        })
    }

    /// The object key to fetch.
    pub fn object_key(&self) -> String {
        self.rstr_to_job_id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_key_is_stringified_id() {
        let request: RestoreRequest =
            serde_json::from_str(r#"{"rstr_to_job_id": 42, "requested_by": "ops"}"#).unwrap();
        assert_eq!(request.object_key(), "42");
        assert_eq!(request.extra.get("requested_by"), Some(&Value::from("ops")));
    }

    #[test]
    fn test_missing_id_is_an_error() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("rstr_arg");
        fs::write(&path, r#"{"requested_by": "ops"}"#).unwrap();
        let err = RestoreRequest::load(&path).unwrap_err();
        assert!(err.to_string().contains("rstr_to_job_id"));
    }
}
