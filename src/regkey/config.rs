use crate::error::{KeyError, Result};
use crate::model::AccessMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_API_URL: &str = "https://hex.pm/api";

pub const ENV_API_URL: &str = "REGKEY_API_URL";
pub const ENV_API_KEY: &str = "REGKEY_API_KEY";

/// Registry configuration, stored as config.json in the config directory.
///
/// `api_key` is a write-capable secret; `read_key` (optional) is a key
/// restricted to read operations. Either may be overridden through the
/// environment for CI use.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegistryConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default)]
    pub read_key: Option<String>,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: None,
            read_key: None,
        }
    }
}

/// Resolved credentials for one command execution: the endpoint plus the
/// key that will authenticate the calls.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub api_url: String,
    pub key: String,
}

impl RegistryConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(KeyError::Io)?;
        let config: RegistryConfig =
            serde_json::from_str(&content).map_err(KeyError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(KeyError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(KeyError::Serialization)?;
        fs::write(config_path, content).map_err(KeyError::Io)?;
        Ok(())
    }

    /// Apply `REGKEY_API_URL` / `REGKEY_API_KEY` overrides from the
    /// environment. Empty values are ignored.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var(ENV_API_URL) {
            if !url.is_empty() {
                self.api_url = url;
            }
        }
        if let Ok(key) = std::env::var(ENV_API_KEY) {
            if !key.is_empty() {
                self.api_key = Some(key);
            }
        }
        self
    }

    /// Resolve credentials for the given access mode.
    ///
    /// Write mode requires the write-capable `api_key`. Read mode prefers
    /// `read_key` and falls back to `api_key`. Failure here is final; there
    /// is no retry and no further fallback.
    pub fn resolve(&self, mode: AccessMode) -> Result<Credentials> {
        let key = match mode {
            AccessMode::Write => self.api_key.clone(),
            AccessMode::Read => self.read_key.clone().or_else(|| self.api_key.clone()),
        };

        match key {
            Some(key) => Ok(Credentials {
                api_url: self.api_url.clone(),
                key,
            }),
            None => Err(KeyError::Config(match mode {
                AccessMode::Write => format!(
                    "no write-capable API key configured; set api_key in {} or {}",
                    CONFIG_FILENAME, ENV_API_KEY
                ),
                AccessMode::Read => format!(
                    "no API key configured; set read_key or api_key in {} or {}",
                    CONFIG_FILENAME, ENV_API_KEY
                ),
            })),
        }
    }
}
