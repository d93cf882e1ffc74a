//! User configuration management

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::notify::AlertConfig;

const APP_DIR_NAME: &str = "taskmind";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub alerts: AlertConfig,
}

/// Application data directory: `$XDG_CONFIG_HOME/taskmind` on Linux,
/// `~/.taskmind` elsewhere. Created on first use.
pub fn get_app_dir() -> Result<PathBuf> {
    let dir = if cfg!(target_os = "linux") {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find config directory"))?
            .join(APP_DIR_NAME)
    } else {
        dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join(format!(".{}", APP_DIR_NAME))
    };

    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }

    Ok(dir)
}

fn config_path() -> Result<PathBuf> {
    Ok(get_app_dir()?.join("config.toml"))
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = config_path()?;
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

pub fn save_config(config: &Config) -> Result<()> {
    let path = config_path()?;
    let content = toml::to_string_pretty(config)?;
    fs::write(&path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::Permission;
    use serial_test::serial;
    use tempfile::tempdir;

    fn setup_temp_home(temp: &tempfile::TempDir) {
        std::env::set_var("HOME", temp.path());
        std::env::remove_var("XDG_CONFIG_HOME");
    }

    #[test]
    #[serial]
    fn test_load_missing_config_is_default() -> Result<()> {
        let temp = tempdir()?;
        setup_temp_home(&temp);

        let config = Config::load()?;
        assert_eq!(config.alerts.permission, Permission::Unset);
        Ok(())
    }

    #[test]
    #[serial]
    fn test_config_roundtrip() -> Result<()> {
        let temp = tempdir()?;
        setup_temp_home(&temp);

        let mut config = Config::default();
        config.alerts.permission = Permission::Granted;
        save_config(&config)?;

        let loaded = Config::load()?;
        assert_eq!(loaded.alerts.permission, Permission::Granted);
        Ok(())
    }

    #[test]
    #[serial]
    fn test_app_dir_is_created() -> Result<()> {
        let temp = tempdir()?;
        setup_temp_home(&temp);

        let dir = get_app_dir()?;
        assert!(dir.exists());
        Ok(())
    }
}
