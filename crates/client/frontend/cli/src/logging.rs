//! File logging for the terminal client.
//!
//! The terminal belongs to the game, so traces go to
//! `<log root>/<session id>/client.log` instead of stderr.
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::CliConfig;

pub const LOG_FILE: &str = "client.log";

/// Install the global subscriber. Keep the returned guard alive until exit so
/// buffered lines are flushed.
pub fn setup_logging(session_id: &str, config: &CliConfig) -> Result<WorkerGuard> {
    let dir = session_log_dir(config.log_dir.as_deref(), session_id);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let file_appender = tracing_appender::rolling::never(&dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::info!(session = session_id, dir = %dir.display(), "Logging initialized");
    Ok(guard)
}

/// Directory for one session's log file.
pub fn session_log_dir(root: Option<&Path>, session_id: &str) -> PathBuf {
    root.map(Path::to_path_buf)
        .unwrap_or_else(default_log_root)
        .join(session_id)
}

fn default_log_root() -> PathBuf {
    directories::ProjectDirs::from("", "", "adventure")
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("adventure").join("logs"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_dir_nests_under_root() {
        let dir = session_log_dir(Some(Path::new("/srv/logs")), "session_1");
        assert_eq!(dir, PathBuf::from("/srv/logs/session_1"));
    }

    #[test]
    fn default_root_is_used_without_override() {
        let dir = session_log_dir(None, "session_2");
        assert!(dir.ends_with("logs/session_2"));
    }

    #[test]
    fn creates_the_session_log_directory() {
        let root = tempfile::tempdir().unwrap();
        let config = CliConfig {
            log_dir: Some(root.path().to_path_buf()),
        };

        let guard = setup_logging("logging-test", &config).unwrap();
        assert!(root.path().join("logging-test").is_dir());
        drop(guard);
    }
}
