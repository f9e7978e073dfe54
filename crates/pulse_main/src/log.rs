use std::path::PathBuf;

use tracing::debug;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

pub fn init_tracing(log_path: PathBuf, verbose: bool) -> anyhow::Result<Guard> {
    let append = tracing_appender::rolling::daily(log_path.clone(), "pulse.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(append);

    let filter = EnvFilter::try_from_env("PULSE_LOG").unwrap_or_else(|_| EnvFilter::new("pulse=debug"));

    let file = fmt::layer()
        .json()
        .with_timer(fmt::time::uptime())
        .with_thread_ids(false)
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .with_writer(non_blocking);

    let stderr = verbose.then(|| {
        fmt::layer()
            .with_timer(fmt::time::uptime())
            .with_writer(std::io::stderr)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(file)
        .with(stderr)
        .try_init()?;

    debug!(path = %log_path.display(), "Logging initialized");
    Ok(Guard(guard))
}

pub struct Guard(#[allow(dead_code)] WorkerGuard);
