//! Transfer Execution
//!
//! The two operations the plugin implements: upload the local export file
//! (`put`) and download a previously stored object (`get`). Both stamp
//! wall-clock start/finish times (epoch seconds) into the job configuration
//! for the orchestrator to read back from `meta/arg.out`.

use crate::command::Command;
use crate::config::JobConfig;
use crate::error::{PluginError, Result};
use crate::restore::RestoreRequest;
use crate::workdir::Workdir;
use chrono::Utc;
use snapvault_storage::ObjectStore;
use tracing::info;

pub fn execute(
    cmd: Command,
    workdir: &Workdir,
    config: &mut JobConfig,
    store: &dyn ObjectStore,
) -> Result<()> {
    match cmd {
        Command::Put => put(workdir, config, store),
        Command::Get => get(workdir, config, store),
    }
}

/// Upload the single file under `data/` as an object named after it.
fn put(workdir: &Workdir, config: &mut JobConfig, store: &dyn ObjectStore) -> Result<()> {
    let data_file = workdir.find_data_file()?;
    let key = data_file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| PluginError::Config("data file has no name".to_string()))?;

    let start = Utc::now().timestamp();
    store.upload_file(&data_file, &key)?;
    let fin = Utc::now().timestamp();

    config.tp_param.put_start = Some(start);
    config.tp_param.put_fin = Some(fin);
    info!(key, store = store.store_type(), "uploaded data file");
    Ok(())
}

/// Download the object named by the restore request into `data/data`.
fn get(workdir: &Workdir, config: &mut JobConfig, store: &dyn ObjectStore) -> Result<()> {
    let request = RestoreRequest::load(&workdir.rstr_arg())?;
    let key = request.object_key();

    let start = Utc::now().timestamp();
    store.download_file(&key, &workdir.restore_target())?;
    let fin = Utc::now().timestamp();

    config.tp_param.get_start = Some(start);
    config.tp_param.get_fin = Some(fin);
    info!(key, store = store.store_type(), "downloaded restore data");
    Ok(())
}
