use crate::errors::{PanelError, PanelResult};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    sync::RwLock,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub tick_rate_ms: u64,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate_ms: 250,
            log_level: "info".to_string(),
        }
    }
}

static CONFIG: Lazy<RwLock<Config>> = Lazy::new(|| RwLock::new(Config::default()));

pub fn initialize_config() -> PanelResult<()> {
    let config_path = get_config_path()?;
    let config = load_or_create_config(&config_path)?;

    *CONFIG.write().unwrap() = config;

    Ok(())
}

fn load_or_create_config(config_path: &Path) -> PanelResult<Config> {
    // If config exists, load it
    if config_path.exists() {
        let config_str = fs::read_to_string(config_path)
            .map_err(|e| PanelError::config_error(format!("Failed to read config file: {}", e)))?;

        let config: Config = serde_json::from_str(&config_str)
            .map_err(|e| PanelError::config_error(format!("Failed to parse config: {}", e)))?;

        validate_config(&config)?;

        Ok(config)
    } else {
        // Create default config
        let config = Config::default();

        fs::create_dir_all(config_path.parent().unwrap()).map_err(|e| {
            PanelError::config_error(format!("Failed to create config directory: {}", e))
        })?;

        write_config(config_path, &config)?;

        Ok(config)
    }
}

fn write_config(config_path: &Path, config: &Config) -> PanelResult<()> {
    let config_str = serde_json::to_string_pretty(config)
        .map_err(|e| PanelError::config_error(format!("Failed to serialize config: {}", e)))?;

    fs::write(config_path, config_str)
        .map_err(|e| PanelError::config_error(format!("Failed to write config file: {}", e)))?;

    Ok(())
}

fn get_config_path() -> PanelResult<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| PanelError::config_error("Could not determine home directory"))?;

    Ok(home_dir.join(".config").join("echopanel").join("config.json"))
}

fn validate_config(config: &Config) -> PanelResult<()> {
    if config.tick_rate_ms == 0 {
        return Err(PanelError::config_error(
            "tick_rate_ms must be greater than 0",
        ));
    }

    match config.log_level.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" | "off" => {}
        other => {
            return Err(PanelError::config_error(format!(
                "Unknown log level: {}",
                other
            )));
        }
    }

    Ok(())
}

pub fn get_config() -> Config {
    CONFIG.read().unwrap().clone()
}

pub fn update_config(updated_config: Config) -> PanelResult<()> {
    validate_config(&updated_config)?;

    let config_path = get_config_path()?;
    write_config(&config_path, &updated_config)?;

    *CONFIG.write().unwrap() = updated_config;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_config_valid() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_config_zero_tick_rate() {
        let mut config = Config::default();
        config.tick_rate_ms = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_config_unknown_log_level() {
        let mut config = Config::default();
        config.log_level = "verbose".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_load_or_create_writes_default_config() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("echopanel").join("config.json");

        let config = load_or_create_config(&config_path).unwrap();
        assert!(config_path.exists());
        assert_eq!(config.tick_rate_ms, Config::default().tick_rate_ms);

        // The written file parses back to the same config
        let reloaded = load_or_create_config(&config_path).unwrap();
        assert_eq!(reloaded.log_level, config.log_level);
    }

    #[test]
    fn test_load_or_create_reads_existing_config() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.json");
        let custom = Config {
            tick_rate_ms: 100,
            log_level: "debug".to_string(),
        };
        write_config(&config_path, &custom).unwrap();

        let loaded = load_or_create_config(&config_path).unwrap();
        assert_eq!(loaded.tick_rate_ms, 100);
        assert_eq!(loaded.log_level, "debug");
    }

    #[test]
    fn test_load_or_create_rejects_invalid_existing_config() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.json");
        fs::write(
            &config_path,
            r#"{"tick_rate_ms": 0, "log_level": "info"}"#,
        )
        .unwrap();

        assert!(load_or_create_config(&config_path).is_err());
    }

    #[test]
    fn test_load_or_create_rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.json");
        fs::write(&config_path, "not json").unwrap();

        assert!(load_or_create_config(&config_path).is_err());
    }

    #[test]
    fn test_config_roundtrips_through_json() {
        let config = Config {
            tick_rate_ms: 100,
            log_level: "debug".to_string(),
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.tick_rate_ms, 100);
        assert_eq!(parsed.log_level, "debug");
    }
}
