use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;
use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::{self, WorkerGuard};
use tracing_subscriber::EnvFilter;

/// Keeps the file appender's worker alive; drop it last.
pub struct LoggingGuard {
    _worker: Option<WorkerGuard>,
}

/// Console logs go to stderr so stdout stays reserved for the per-session
/// progress lines. `RUST_LOG` overrides the verbosity-derived default.
pub fn init_logging(verbosity: u8, log_file: Option<&Path>) -> Result<LoggingGuard> {
    let default_level = match verbosity {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let env_filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    match log_file {
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_target(true)
                .init();
            Ok(LoggingGuard { _worker: None })
        }
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create log directory {parent:?}"))?;
            }

            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {path:?}"))?;
            let (writer, guard) = non_blocking::NonBlockingBuilder::default().finish(file);

            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .init();
            Ok(LoggingGuard {
                _worker: Some(guard),
            })
        }
    }
}
