// src/logging.rs
//
// File-backed tracing setup. The terminal belongs to the UI, so nothing is
// written to stdout or stderr once the subscriber is installed.

use crate::config::LoggingConfig;
use crate::error::{Result, VaultError};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub fn default_log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("vaultui")
        .join("vaultui.log")
}

/// `RUST_LOG` wins over the configured level.
pub fn env_filter(cfg: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.level))
}

pub fn init(cfg: &LoggingConfig) -> Result<PathBuf> {
    let path = cfg.file.clone().unwrap_or_else(default_log_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(cfg))
        .with_ansi(false)
        .with_target(true)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| VaultError::Logging(e.to_string()))?;

    tracing::info!(path = %path.display(), "logging initialised");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_default_path_file_name() {
        assert!(default_log_path().ends_with("vaultui/vaultui.log"));
    }

    #[test]
    fn test_rust_log_wins_over_config() {
        let cfg = LoggingConfig { level: "trace".to_string(), file: None };

        std::env::set_var("RUST_LOG", "warn");
        let filter = env_filter(&cfg);
        std::env::remove_var("RUST_LOG");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));

        let filter = env_filter(&cfg);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));
    }

    #[test]
    fn test_init_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = LoggingConfig { level: "debug".to_string(), file: Some(dir.path().join("logs").join("run.log")) };

        // Another test may already own the global subscriber; the file is
        // opened before installation either way.
        let _ = init(&cfg);
        assert!(dir.path().join("logs").join("run.log").exists());
    }
}
