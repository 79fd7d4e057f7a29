use crate::constants::DEFAULT_WEBHOOK_URL;
use crate::errors::{CognivoError, CognivoResult};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::{env, fs, path::PathBuf, sync::RwLock};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub webhook_url: String,
    pub log_level: String,
    pub max_log_entries: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            webhook_url: DEFAULT_WEBHOOK_URL.to_string(),
            log_level: "info".to_string(),
            max_log_entries: 200,
        }
    }
}

static CONFIG: Lazy<RwLock<Config>> = Lazy::new(|| RwLock::new(Config::default()));

pub fn initialize_config() -> CognivoResult<()> {
    let config_path = get_config_path()?;

    // If config exists, load it
    if config_path.exists() {
        let config_str = fs::read_to_string(&config_path)
            .map_err(|e| CognivoError::config_error(format!("Failed to read config file: {}", e)))?;

        let config: Config = serde_json::from_str(&config_str)
            .map_err(|e| CognivoError::config_error(format!("Failed to parse config: {}", e)))?;

        validate_config(&config)?;

        *CONFIG.write().unwrap() = config;
    } else {
        // Create default config
        let mut config = Config::default();

        // Env var overrides the shipped webhook URL on first run
        if let Ok(url) = env::var("COGNIVO_WEBHOOK_URL") {
            config.webhook_url = url;
        }

        validate_config(&config)?;

        fs::create_dir_all(config_path.parent().unwrap()).map_err(|e| {
            CognivoError::config_error(format!("Failed to create config directory: {}", e))
        })?;

        let config_str = serde_json::to_string_pretty(&config)
            .map_err(|e| CognivoError::config_error(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, config_str)
            .map_err(|e| CognivoError::config_error(format!("Failed to write config file: {}", e)))?;

        *CONFIG.write().unwrap() = config;
    }

    Ok(())
}

fn get_config_path() -> CognivoResult<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| CognivoError::config_error("Could not determine home directory"))?;

    Ok(home_dir.join(".config").join("cognivo").join("config.json"))
}

fn validate_config(config: &Config) -> CognivoResult<()> {
    if config.webhook_url.is_empty() {
        return Err(CognivoError::config_error("Webhook URL is required"));
    }

    if !config.webhook_url.starts_with("http://") && !config.webhook_url.starts_with("https://") {
        return Err(CognivoError::config_error(
            "Webhook URL must be an http(s) URL",
        ));
    }

    if config.max_log_entries == 0 {
        return Err(CognivoError::config_error(
            "max_log_entries must be greater than 0",
        ));
    }

    Ok(())
}

pub fn get_config() -> Config {
    CONFIG.read().unwrap().clone()
}

pub fn update_config(updated_config: Config) -> CognivoResult<()> {
    validate_config(&updated_config)?;

    let config_path = get_config_path()?;
    let config_str = serde_json::to_string_pretty(&updated_config)
        .map_err(|e| CognivoError::config_error(format!("Failed to serialize config: {}", e)))?;

    fs::write(&config_path, config_str)
        .map_err(|e| CognivoError::config_error(format!("Failed to write config file: {}", e)))?;

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
    fn test_validate_config_empty_webhook_url() {
        let mut config = Config::default();
        config.webhook_url = "".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_config_non_http_webhook_url() {
        let mut config = Config::default();
        config.webhook_url = "ftp://example.com/hook".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_config_zero_log_entries() {
        let mut config = Config::default();
        config.max_log_entries = 0;
        assert!(validate_config(&config).is_err());
    }
}
