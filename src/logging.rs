use crate::consts;
use std::path::Path;
use std::sync::Mutex;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Send `tracing` output to the file at `path`, appending to it if it
/// already exists.
///
/// The terminal is taken over by the game, so logs are only ever written to
/// a file.  The filter is read from the environment variable named by
/// [`consts::LOG_FILTER_VAR`] and defaults to `info`.
pub(crate) fn init_logging(path: &Path) -> Result<(), LogError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs_err::create_dir_all(parent).map_err(LogError::Mkdir)?;
    }
    let file = fs_err::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(LogError::Open)?;
    let filter = EnvFilter::try_from_env(consts::LOG_FILTER_VAR)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(LogError::Install)
}

#[derive(Debug, Error)]
pub(crate) enum LogError {
    #[error("failed to create parent directories of log file")]
    Mkdir(#[source] std::io::Error),
    #[error("failed to open log file")]
    Open(#[source] std::io::Error),
    #[error("failed to install log subscriber")]
    Install(#[source] Box<dyn std::error::Error + Send + Sync>),
}
