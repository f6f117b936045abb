use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{CONFIG_FILE, DEFAULT_API_BASE_URL, DEFAULT_TREND_WINDOW};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    pub api_base_url: Option<String>,
    pub trend_window: Option<String>,
    pub issue_limit: Option<u32>,
}

fn config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_FILE)
}

pub fn load_config() -> Config {
    load_config_from(&config_path())
}

pub(crate) fn load_config_from(path: &Path) -> Config {
    if path.exists() {
        fs::read_to_string(path)
            .ok()
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default()
    } else {
        Config::default()
    }
}

pub fn save_config(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    save_config_to(config, &config_path())
}

pub(crate) fn save_config_to(
    config: &Config,
    path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let config_str = serde_json::to_string_pretty(config)?;
    fs::write(path, config_str)?;

    Ok(())
}

pub fn get_api_base_url() -> String {
    // Environment variable wins over the config file
    if let Ok(url) = env::var("HOSTEL_DESK_API_URL") {
        return url;
    }

    load_config()
        .api_base_url
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}

pub fn get_trend_window() -> String {
    load_config()
        .trend_window
        .unwrap_or_else(|| DEFAULT_TREND_WINDOW.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = Config {
            api_base_url: Some("http://ops.example.com:8000".to_string()),
            trend_window: Some("6h".to_string()),
            issue_limit: Some(100),
        };

        save_config_to(&config, &path).unwrap();
        let loaded = load_config_from(&path);

        assert_eq!(loaded.api_base_url.as_deref(), Some("http://ops.example.com:8000"));
        assert_eq!(loaded.trend_window.as_deref(), Some("6h"));
        assert_eq!(loaded.issue_limit, Some(100));
    }

    #[test]
    fn test_missing_config_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_config_from(&dir.path().join("nope.json"));
        assert!(loaded.api_base_url.is_none());
        assert!(loaded.trend_window.is_none());
    }

    #[test]
    fn test_corrupt_config_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();
        let loaded = load_config_from(&path);
        assert!(loaded.api_base_url.is_none());
    }
}
