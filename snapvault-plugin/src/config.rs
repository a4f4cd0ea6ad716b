//! Job Configuration
//!
//! The orchestrator hands the plugin a JSON document in `meta/arg`. The
//! plugin only interprets the nested `tp_param` block (the third-party
//! storage settings); everything else is orchestrator state that must be
//! carried through unchanged into `meta/arg.out`.

use crate::error::{PluginError, Result};
use crate::workdir::write_private;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// The full job configuration document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobConfig {
    pub tp_param: TpParam,

    /// Orchestrator fields the plugin does not interpret.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Third-party storage settings, plus the timing fields the plugin appends
/// before writing the config back out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TpParam {
    pub url: String,
    pub user: String,
    pub password: String,
    pub regions: String,
    pub container: String,

    // Stamped by the put path (epoch seconds).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub put_start: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub put_fin: Option<i64>,

    // Stamped by the get path (epoch seconds).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub get_start: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub get_fin: Option<i64>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl JobConfig {
    /// Read and validate the configuration from `meta/arg`.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read(path)?;
        let config: JobConfig = serde_json::from_slice(&raw).map_err(|source| {
            PluginError::Json {
                path: path.display().to_string(),
                source,
            }
        })?;
        config.tp_param.validate()?;
        Ok(config)
    }

    /// Write the (augmented) configuration to `meta/arg.out`.
    pub fn save(&self, path: &Path) -> Result<()> {
        let buf = serde_json::to_vec(self).map_err(|source| PluginError::Json {
            path: path.display().to_string(),
            source,
        })?;
        write_private(path, &buf)?;
        Ok(())
    }
}

impl TpParam {
    /// An absent key already fails deserialization with a named error;
    /// this additionally rejects present-but-empty values.
    fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("url", &self.url),
            ("user", &self.user),
            ("password", &self.password),
            ("regions", &self.regions),
            ("container", &self.container),
        ] {
            if value.is_empty() {
                return Err(PluginError::Config(format!(
                    "tp_param.{name} must not be empty"
                )));
            }
        }
        Ok(())
    }

    /// The endpoint URL for the SDK. Bare `host:port` endpoints get an
    /// `http://` scheme, matching the plain-TCP client the orchestrator
    /// historically configured.
    pub fn endpoint_url(&self) -> String {
        if self.url.contains("://") {
            self.url.clone()
        } else {
            format!("http://{}", self.url)
        }
    }
}
