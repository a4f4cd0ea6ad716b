use clap::Parser;
use snapvault_plugin::{report, run, PluginError, TpParam, Workdir};
use snapvault_storage::{ObjectStore, S3ObjectStore};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

#[derive(Debug, Parser)]
#[command(
    name = "snapvault-s3",
    about = "S3 backup/restore plugin invoked by the snapvault orchestrator"
)]
struct Cli {
    /// Working directory holding the meta/ and data/ contract files
    #[arg(long, default_value = ".")]
    workdir: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let workdir = Workdir::new(&cli.workdir);

    let result = init_logging(&workdir).and_then(|()| run(&workdir, connect_s3));
    ExitCode::from(report::finish(&workdir, result))
}

/// Point the diagnostic log at `meta/log`, truncated per invocation.
fn init_logging(workdir: &Workdir) -> Result<(), PluginError> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    let log_file = options.open(workdir.log())?;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or(EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(Mutex::new(log_file));
    Registry::default().with(env_filter).with(fmt_layer).init();
    Ok(())
}

fn connect_s3(params: &TpParam) -> Result<Box<dyn ObjectStore>, PluginError> {
    let store = S3ObjectStore::connect(
        params.endpoint_url(),
        &params.user,
        &params.password,
        &params.regions,
        &params.container,
    )?;
    Ok(Box::new(store))
}
