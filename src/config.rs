//! Project configuration
//!
//! Settings live in `.helpdesk/config.yaml` and can be overridden through
//! `HELPDESK_`-prefixed environment variables, `__` separating the nesting
//! levels: `HELPDESK_UI__CONFIRM_DELETE=false` turns delete prompts off.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Config file name inside the project directory
pub const CONFIG_FILE: &str = "config.yaml";

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    pub project: ProjectSettings,
    pub ui: UiSettings,
}

/// Project identity settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectSettings {
    /// Display name used in output headers
    pub name: String,
}

impl Default for ProjectSettings {
    fn default() -> Self {
        Self {
            name: "helpdesk".to_string(),
        }
    }
}

/// Presentation-layer behavior
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Ask before deleting a ticket; `--yes` skips the prompt either way
    pub confirm_delete: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            confirm_delete: true,
        }
    }
}

impl ProjectConfig {
    /// Load configuration from the project directory plus the environment
    pub fn load(project_dir: &Path) -> Result<Self> {
        let path = project_dir.join(CONFIG_FILE);
        let settings = config::Config::builder()
            .add_source(
                config::File::from(path)
                    .format(config::FileFormat::Yaml)
                    .required(false),
            )
            .add_source(
                config::Environment::with_prefix("HELPDESK")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    /// Load configuration, falling back to defaults on any failure
    #[must_use]
    pub fn load_or_default(project_dir: &Path) -> Self {
        Self::load(project_dir).unwrap_or_default()
    }

    /// Write the configuration file into the project directory
    pub fn save(&self, project_dir: &Path) -> Result<()> {
        let yaml = serde_yaml::to_string(self)?;
        fs::write(project_dir.join(CONFIG_FILE), yaml)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    #[serial]
    fn test_defaults_when_no_file_exists() {
        let temp_dir = TempDir::new().unwrap();
        let config = ProjectConfig::load(temp_dir.path()).unwrap();

        assert_eq!(config.project.name, "helpdesk");
        assert!(config.ui.confirm_delete);
    }

    #[test]
    #[serial]
    fn test_save_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = ProjectConfig::default();
        config.project.name = "support-desk".to_string();
        config.ui.confirm_delete = false;

        config.save(temp_dir.path()).unwrap();
        let loaded = ProjectConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    #[serial]
    fn test_environment_overrides_file() {
        let temp_dir = TempDir::new().unwrap();
        ProjectConfig::default().save(temp_dir.path()).unwrap();

        unsafe {
            std::env::set_var("HELPDESK_UI__CONFIRM_DELETE", "false");
        }
        let loaded = ProjectConfig::load(temp_dir.path()).unwrap();
        unsafe {
            std::env::remove_var("HELPDESK_UI__CONFIRM_DELETE");
        }

        assert!(!loaded.ui.confirm_delete);
    }

    #[test]
    #[serial]
    fn test_load_or_default_swallows_bad_files() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE), ": not yaml [").unwrap();

        let config = ProjectConfig::load_or_default(temp_dir.path());
        assert_eq!(config, ProjectConfig::default());
    }
}
