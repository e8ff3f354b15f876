use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CREDENTIAL_FILE_NAME: &str = ".exchange-rate-api.txt";
pub const FAVORITES_FILE_NAME: &str = "favorites.json";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const DEFAULT_API_BASE_URL: &str = "https://v6.exchangerate-api.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Optional settings read from `config.toml`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ConfigFile {
    pub api_base_url: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub favorites_path: Option<PathBuf>,
}

impl ConfigFile {
    /// Missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ParseError {
            path: path.to_string_lossy().to_string(),
            message: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_string_lossy().to_string(),
            message: e.to_string(),
        })
    }
}

/// Values supplied on the command line or through the environment.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub config_dir: Option<PathBuf>,
    pub api_base_url: Option<String>,
}

/// Fully resolved configuration handed to every component.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub credential_path: PathBuf,
    pub favorites_path: PathBuf,
    pub api_base_url: String,
    pub timeout_seconds: u64,
}

impl AppConfig {
    pub fn resolve(overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        check_platform(std::env::consts::OS)?;

        let home = dirs::home_dir().ok_or(ConfigError::HomeDirNotFound)?;

        let config_path = match overrides.config_dir {
            Some(dir) => Some(dir.join(CONFIG_FILE_NAME)),
            None => dirs::config_dir().map(|dir| dir.join("currencli").join(CONFIG_FILE_NAME)),
        };

        let file = match config_path {
            Some(path) => {
                tracing::debug!("Reading configuration from {}", path.display());
                ConfigFile::load(&path)?
            }
            None => ConfigFile::default(),
        };

        Ok(Self::from_parts(&home, file, overrides.api_base_url))
    }

    /// Precedence: override, then config file, then built-in default.
    pub fn from_parts(home: &Path, file: ConfigFile, api_base_url: Option<String>) -> Self {
        let api_base_url = api_base_url
            .or(file.api_base_url)
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Self {
            credential_path: home.join(CREDENTIAL_FILE_NAME),
            favorites_path: file
                .favorites_path
                .unwrap_or_else(|| PathBuf::from(FAVORITES_FILE_NAME)),
            api_base_url,
            timeout_seconds: file.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// The credential path is the same on every supported host.
pub fn check_platform(os: &str) -> Result<(), ConfigError> {
    match os {
        "windows" | "macos" | "linux" => Ok(()),
        other => Err(ConfigError::UnsupportedPlatform {
            os: other.to_string(),
        }),
    }
}
