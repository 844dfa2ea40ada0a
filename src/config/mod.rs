use crate::errors::{AppError, AppResult};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Address of the frontend service the sample data is replayed against.
pub const DEFAULT_SERVICE_URL: &str = "http://10.96.88.88:8080";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_service_url")]
    pub service_url: String,
    /// Request timeout in seconds, 0 disables it
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_service_url() -> String {
    DEFAULT_SERVICE_URL.to_string()
}
fn default_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_url: default_service_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".restotools")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("restotools.conf")
    }

    /// Load configuration.
    ///
    /// - `custom`: explicit file given on the command line; it must exist.
    /// - otherwise the standard file is read if present, defaults if not.
    pub fn load(custom: Option<&Path>) -> AppResult<Self> {
        match custom {
            Some(path) => {
                if !path.exists() {
                    return Err(AppError::Config(format!(
                        "config file not found: {}",
                        path.display()
                    )));
                }
                Self::read(path)
            }
            None => {
                let path = Self::config_file();
                if path.exists() {
                    Self::read(&path)
                } else {
                    log::debug!("no config file at {}, using defaults", path.display());
                    Ok(Self::default())
                }
            }
        }
    }

    fn read(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))?;
        log::debug!("loaded configuration from {}", path.display());
        Ok(cfg)
    }

    pub fn timeout(&self) -> Option<Duration> {
        match self.timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }

    pub fn endpoint(&self) -> AppResult<ServiceEndpoint> {
        ServiceEndpoint::parse(&self.service_url)
    }
}

/// Validated base address of the service (scheme, host and port).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceEndpoint {
    base: Url,
}

impl ServiceEndpoint {
    pub fn parse(raw: &str) -> AppResult<Self> {
        let base =
            Url::parse(raw.trim()).map_err(|e| AppError::InvalidEndpoint(format!("{raw}: {e}")))?;

        if !matches!(base.scheme(), "http" | "https") || base.host_str().is_none() {
            return Err(AppError::InvalidEndpoint(format!(
                "{raw}: expected an http(s) address with a host"
            )));
        }

        Ok(Self { base })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }
}

impl fmt::Display for ServiceEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.base.as_str().trim_end_matches('/'))
    }
}
