//! Lingora binary entrypoint kept minimal. The command handling lives in
//! `args`.

mod args;

use std::sync::OnceLock;

use clap::Parser;

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// Initialize the tracing logger writing to
/// `~/.config/lingora/logs/lingora.log`, falling back to stderr.
fn init_logging(level: &str) {
    let mut log_path = lingora::config::logs_dir();
    log_path.push("lingora.log");
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::debug!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

fn main() {
    let cli_args = args::Args::parse();
    init_logging(&args::determine_log_level(&cli_args));

    tracing::debug!("Lingora starting");
    if let Err(err) = args::process_args(&cli_args) {
        tracing::error!(error = %err, "command failed");
        eprintln!("lingora: {err}");
        std::process::exit(1);
    }
    tracing::debug!("Lingora exited");
}
