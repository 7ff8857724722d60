//! Tracing setup
//!
//! The CLI logs to stderr. The TUI owns the terminal, so it logs to a file.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{TrackerError, TrackerResult};

/// Environment variable holding a tracing filter, e.g. `fintrack=debug`
pub const LOG_ENV: &str = "FINTRACK_LOG";

/// Where log output goes
#[derive(Debug, Clone)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

/// Build the filter from FINTRACK_LOG, falling back to `default_level`
fn build_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the global tracing subscriber
///
/// Calling this again after a subscriber is installed is a no-op.
pub fn init_tracing(target: LogTarget, default_level: &str) -> TrackerResult<()> {
    let builder = fmt()
        .with_env_filter(build_filter(default_level))
        .with_target(false);

    // try_init only fails when a global subscriber is already set
    let _ = match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .map_err(|e| {
                    TrackerError::Io(format!("Failed to open log file {}: {}", path.display(), e))
                })?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).try_init()
        }
    };

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_invalid_level_falls_back() {
        // Must not panic on a garbage directive
        let _ = build_filter("[[not a filter");
    }

    #[test]
    fn test_file_target_creates_log() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("fintrack.log");

        init_tracing(LogTarget::File(path.clone()), "info").unwrap();
        assert!(path.exists());

        // A second install is tolerated
        init_tracing(LogTarget::Stderr, "info").unwrap();
    }

    #[test]
    fn test_unopenable_log_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("fintrack.log");

        assert!(matches!(
            init_tracing(LogTarget::File(path), "info"),
            Err(TrackerError::Io(_))
        ));
    }
}
