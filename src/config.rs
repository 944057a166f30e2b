//! Configuration handling for the dashboard

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the starting directory
pub const START_DIR_ENV: &str = "PROJECTDASH_DIR";

const DEFAULT_TITLE: &str = "Project dashboard";

/// User configuration for the dashboard
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DashConfig {
    /// Header title
    pub title: Option<String>,
    /// Directory inspected on startup
    pub start_dir: Option<PathBuf>,
    /// Restore the selected row when returning to a parent menu
    pub remember_selection: Option<bool>,
    /// Dotted id path of the submenu to open on startup, e.g. `features`
    pub start_menu: Option<String>,
    /// Diagnostic log location
    pub log_file: Option<PathBuf>,
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("dev", "projectdash", "projectdash")
}

impl DashConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the user config file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`, falling back to defaults if it is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save configuration to the user config file
    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            self.save_to(&path)?;
        }
        Ok(())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }

    pub fn remember_selection(&self) -> bool {
        self.remember_selection.unwrap_or(false)
    }

    pub fn start_menu(&self) -> Option<&str> {
        self.start_menu.as_deref().filter(|path| !path.is_empty())
    }

    /// Starting directory: `override_dir`, then the config value, then the
    /// process working directory
    pub fn start_dir(&self, override_dir: Option<PathBuf>) -> Result<PathBuf> {
        if let Some(dir) = override_dir.or_else(|| self.start_dir.clone()) {
            return Ok(dir);
        }
        Ok(std::env::current_dir()?)
    }

    /// Where diagnostics are written, if anywhere
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file.clone().or_else(|| {
            project_dirs().map(|dirs| dirs.data_dir().join("projectdash.log"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = DashConfig::default();
        assert!(config.title.is_none());
        assert!(config.start_dir.is_none());
        assert!(config.remember_selection.is_none());
        assert!(config.log_file.is_none());
        assert!(config.start_menu().is_none());
        assert_eq!(config.title(), "Project dashboard");
        assert!(!config.remember_selection());
    }

    #[test]
    fn test_serialization() {
        let config = DashConfig {
            title: Some("Workbench".to_string()),
            start_dir: Some(PathBuf::from("/work")),
            remember_selection: Some(true),
            start_menu: Some("features".to_string()),
            log_file: Some(PathBuf::from("/tmp/dash.log")),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: DashConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: DashConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, DashConfig::default());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"title": "Mine", "unknown_field": "value"}"#;
        let parsed: DashConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.title(), "Mine");
    }

    #[test]
    fn test_load_from_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = DashConfig::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, DashConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = DashConfig {
            remember_selection: Some(true),
            ..Default::default()
        };
        config.save_to(&path).unwrap();
        assert_eq!(DashConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ nope").unwrap();
        assert!(DashConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_start_dir_precedence() {
        let config = DashConfig {
            start_dir: Some(PathBuf::from("/configured")),
            ..Default::default()
        };
        assert_eq!(
            config.start_dir(Some(PathBuf::from("/env"))).unwrap(),
            PathBuf::from("/env")
        );
        assert_eq!(config.start_dir(None).unwrap(), PathBuf::from("/configured"));
        assert_eq!(
            DashConfig::default().start_dir(None).unwrap(),
            std::env::current_dir().unwrap()
        );
    }

    #[test]
    fn test_empty_start_menu_means_root() {
        let parsed: DashConfig = serde_json::from_str(r#"{"start_menu": ""}"#).unwrap();
        assert_eq!(parsed.start_menu(), None);
        let parsed: DashConfig = serde_json::from_str(r#"{"start_menu": "a.b"}"#).unwrap();
        assert_eq!(parsed.start_menu(), Some("a.b"));
    }

    #[test]
    fn test_explicit_log_file_wins() {
        let config = DashConfig {
            log_file: Some(PathBuf::from("/tmp/dash.log")),
            ..Default::default()
        };
        assert_eq!(config.log_path(), Some(PathBuf::from("/tmp/dash.log")));
    }
}
