//! Server configuration.
//!
//! Settings come from an optional `markcalc.toml` file, then environment
//! variables override individual values:
//!
//! - `HOST`: bind host (default: 0.0.0.0)
//! - `PORT`: bind port (default: 8000)
//! - `MARKS_FILE`: path of the GPX waypoint file (default: data/marks.gpx)
//! - `MARKS_RELOAD`: `always` or `on-change` (default: always)
//!
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = 8000
//!
//! [marks]
//! file = "data/marks.gpx"
//! reload = "on-change"
//! ```

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::store::ReloadPolicy;

pub const CONFIG_FILE_NAME: &str = "markcalc.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Complete server configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub marks: MarksSettings,
}

/// Listener settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Waypoint file settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarksSettings {
    #[serde(default = "default_marks_file")]
    pub file: PathBuf,
    #[serde(default)]
    pub reload: ReloadPolicy,
}

impl Default for MarksSettings {
    fn default() -> Self {
        Self {
            file: default_marks_file(),
            reload: ReloadPolicy::default(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_marks_file() -> PathBuf {
    PathBuf::from("data/marks.gpx")
}

impl ServerConfig {
    /// Load configuration from a TOML file.
    ///
    /// A relative `marks.file` is resolved against the config file's directory.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if config.marks.file.is_relative() {
            if let Some(dir) = path.parent() {
                config.marks.file = dir.join(&config.marks.file);
            }
        }
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Find `markcalc.toml` in the usual places.
    ///
    /// Searches, in order:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    pub fn find_default_file() -> Option<PathBuf> {
        [
            PathBuf::from(CONFIG_FILE_NAME),
            Path::new("backend").join(CONFIG_FILE_NAME),
            Path::new("..").join(CONFIG_FILE_NAME),
        ]
        .into_iter()
        .find(|p| p.exists())
    }

    /// Configuration from the default file if one exists, else defaults,
    /// with environment overrides applied on top.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match Self::find_default_file() {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Apply `HOST`, `PORT`, `MARKS_FILE` and `MARKS_RELOAD` when set.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(host) = env::var("HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("PORT") {
            self.server.port = port.parse().map_err(|e| ConfigError::InvalidValue {
                key: "PORT".to_string(),
                message: format!("{}: {}", port, e),
            })?;
        }
        if let Ok(file) = env::var("MARKS_FILE") {
            self.marks.file = PathBuf::from(file);
        }
        if let Ok(reload) = env::var("MARKS_RELOAD") {
            self.marks.reload = reload.parse().map_err(|message| ConfigError::InvalidValue {
                key: "MARKS_RELOAD".to_string(),
                message,
            })?;
        }
        Ok(())
    }

    pub fn bind_address(&self) -> Result<SocketAddr, ConfigError> {
        let raw = format!("{}:{}", self.server.host, self.server.port);
        raw.parse().map_err(|e| ConfigError::InvalidValue {
            key: "server.host".to_string(),
            message: format!("{}: {}", raw, e),
        })
    }
}
