use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_FEED_URL: &str = "https://docs.google.com/spreadsheets/d/1nVdESerxIJt2wGWOOVJtHrU_0-ytdI57ZJhRLtzMMAk/gviz/tq?tqx=out:csv&sheet={sheet}";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_feed_url")]
    pub feed_url: String,
    #[serde(default = "default_sheet_date_format")]
    pub sheet_date_format: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    #[serde(default = "default_show_station_columns")]
    pub show_station_columns: bool,
}

fn default_feed_url() -> String {
    DEFAULT_FEED_URL.to_string()
}
fn default_sheet_date_format() -> String {
    "%d-%m-%Y".to_string()
}
fn default_timeout_secs() -> u64 {
    15
}
fn default_separator_char() -> String {
    "-".to_string()
}
fn default_show_station_columns() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            feed_url: default_feed_url(),
            sheet_date_format: default_sheet_date_format(),
            timeout_secs: default_timeout_secs(),
            separator_char: default_separator_char(),
            show_station_columns: default_show_station_columns(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rshuttle")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rshuttle")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rshuttle.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        let cfg: Config = serde_yaml::from_str(&content).map_err(|_| AppError::ConfigLoad)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if !self.feed_url.contains("{sheet}") {
            return Err(AppError::Config(
                "feed_url must contain the '{sheet}' placeholder".into(),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(AppError::Config("timeout_secs must be greater than 0".into()));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Write a fresh configuration file with default values.
    /// In test mode nothing is written and the would-be path is returned.
    pub fn init_all(is_test: bool) -> AppResult<PathBuf> {
        let path = Self::config_file();
        if is_test {
            return Ok(path);
        }

        fs::create_dir_all(Self::config_dir())?;
        let yaml = serde_yaml::to_string(&Config::default()).map_err(|_| AppError::ConfigSave)?;
        fs::write(&path, yaml).map_err(|_| AppError::ConfigSave)?;
        Ok(path)
    }
}
