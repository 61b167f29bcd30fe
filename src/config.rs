// src/config.rs
use crate::catalog::ingest::{DEFAULT_FOLDER, DEFAULT_TAG};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const ENV_PREFIX: &str = "VAULTUI";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub catalog: CatalogConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Sidebar label of the pseudo-folder that shows everything.
    pub all_files_label: String,
    pub default_folder: String,
    pub default_tag: String,
    pub seed_samples: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig {
            all_files_label: "All files".to_string(),
            default_folder: DEFAULT_FOLDER.to_string(),
            default_tag: DEFAULT_TAG.to_string(),
            seed_samples: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Grid => ViewMode::List,
            ViewMode::List => ViewMode::Grid,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub view: ViewMode,
    pub show_hidden: bool,
    /// Directory the file picker opens in; current directory when unset.
    pub picker_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig { level: "info".to_string(), file: None }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("vaultui").join("config.toml"))
}

/// Defaults, then the config file, then `VAULTUI__SECTION__KEY` variables.
///
/// An explicit `path` must exist; the default location is optional.
pub fn load(path: Option<&Path>) -> Result<AppConfig> {
    let mut settings = config::Config::builder();

    match path {
        Some(p) => {
            settings = settings.add_source(config::File::from(p).required(true));
        }
        None => {
            if let Some(p) = default_config_path() {
                settings = settings.add_source(config::File::from(p).required(false));
            }
        }
    }

    settings = settings.add_source(
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__"),
    );

    let cfg: AppConfig = settings.build()?.try_deserialize()?;
    tracing::debug!(?cfg, "configuration loaded");
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.catalog.all_files_label, "All files");
        assert_eq!(cfg.catalog.default_folder, "Shared");
        assert_eq!(cfg.catalog.default_tag, "new");
        assert_eq!(cfg.ui.view, ViewMode::Grid);
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[catalog]\ndefault_folder = \"Inbox\"\n\n[ui]\nview = \"list\"").unwrap();

        let cfg = load(Some(file.path())).unwrap();
        assert_eq!(cfg.catalog.default_folder, "Inbox");
        assert_eq!(cfg.catalog.default_tag, "new");
        assert_eq!(cfg.ui.view, ViewMode::List);
    }

    #[test]
    fn test_environment_overrides_file() {
        // Same folder value as test_load_from_file, which may run concurrently.
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[catalog]\ndefault_folder = \"Elsewhere\"\nseed_samples = true").unwrap();
        std::env::set_var("VAULTUI__CATALOG__DEFAULT_FOLDER", "Inbox");
        std::env::set_var("VAULTUI__CATALOG__SEED_SAMPLES", "false");

        let cfg = load(Some(file.path()));

        std::env::remove_var("VAULTUI__CATALOG__DEFAULT_FOLDER");
        std::env::remove_var("VAULTUI__CATALOG__SEED_SAMPLES");

        let cfg = cfg.unwrap();
        assert_eq!(cfg.catalog.default_folder, "Inbox");
        assert!(!cfg.catalog.seed_samples);
        assert_eq!(cfg.catalog.default_tag, "new");
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load(Some(&dir.path().join("absent.toml"))).is_err());
    }

    #[test]
    fn test_view_toggle() {
        assert_eq!(ViewMode::Grid.toggled(), ViewMode::List);
        assert_eq!(ViewMode::List.toggled(), ViewMode::Grid);
    }
}
