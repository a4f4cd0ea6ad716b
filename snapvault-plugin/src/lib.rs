//! Backup/restore plugin glue for the snapvault orchestrator.
//!
//! A run is one shot: read the job configuration and command from the
//! working directory, perform a single upload or download against the
//! configured object store, write the augmented configuration back out,
//! and report a terminal status. Every error is fatal and surfaces through
//! exactly one reporting path ([`report::finish`]).

pub mod command;
pub mod config;
pub mod error;
pub mod report;
pub mod restore;
pub mod transfer;
pub mod workdir;

pub use command::Command;
pub use config::{JobConfig, TpParam};
pub use error::PluginError;
pub use restore::RestoreRequest;
pub use workdir::Workdir;

use snapvault_storage::ObjectStore;
use tracing::info;

/// Execute one plugin invocation against the given working directory.
///
/// `connect` builds the object store from the job's `tp_param` block; it is
/// injected so tests can run the full flow against a local store. Status
/// reporting is left to the caller so it happens exactly once, including
/// for errors raised before this function is reached.
pub fn run<F>(workdir: &Workdir, connect: F) -> Result<(), PluginError>
where
    F: FnOnce(&TpParam) -> Result<Box<dyn ObjectStore>, PluginError>,
{
    let mut config = JobConfig::load(&workdir.arg())?;
    info!(url = %config.tp_param.url, container = %config.tp_param.container,
        "loaded job configuration");

    let cmd = Command::load(&workdir.cmd())?;
    let store = connect(&config.tp_param)?;

    transfer::execute(cmd, workdir, &mut config, store.as_ref())?;
    config.save(&workdir.arg_out())?;
    Ok(())
}
