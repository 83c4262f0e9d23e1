use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Error type for logging setup
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("could not open log file {path}: {source}")]
    OpenError {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid log filter {filter:?}: {message}")]
    InvalidFilter { filter: String, message: String },
    #[error("a global tracing subscriber is already installed")]
    AlreadyInstalled,
}

/// Build the filter: `RUST_LOG` when set, else `level`
pub fn build_filter(level: &str) -> Result<EnvFilter, LogError> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .map_err(|e| LogError::InvalidFilter {
            filter: level.to_string(),
            message: e.to_string(),
        })
}

/// Install a file-backed tracing subscriber.
///
/// The TUI owns the terminal, so log lines go to `path` (appended, created
/// with its parent directory if needed) and never to stderr.
pub fn init_file_logging(path: &Path, level: &str) -> Result<(), LogError> {
    let filter = build_filter(level)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| LogError::OpenError {
            path: path.display().to_string(),
            source: e,
        })?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| LogError::OpenError {
            path: path.display().to_string(),
            source: e,
        })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .try_init()
        .map_err(|_| LogError::AlreadyInstalled)?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "logging started");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_filter_accepts_directives() {
        assert!(build_filter("info").is_ok());
        assert!(build_filter("dayplan=debug,warn").is_ok());
    }

    #[test]
    fn open_error_names_path() {
        let tmp = tempfile::TempDir::new().unwrap();
        // A directory cannot be opened as a log file
        let err = init_file_logging(tmp.path(), "info").unwrap_err();
        match err {
            LogError::OpenError { path, .. } => {
                assert_eq!(path, tmp.path().display().to_string())
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
