use std::path::Path;

use anyhow::Context as _;
use serde::Deserialize;

/// Name of the environment variable that points at the config file.
pub const CONFIG_PATH_ENV: &str = "ELSERVE_CONFIG";

const DEFAULT_CONFIG_PATH: &str = "elserve.yaml";

/// Process-wide configuration, loaded once before the listener starts and
/// never mutated afterwards.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub site: SiteConfig,
}

/// Listener settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Document root settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Directory the request target is resolved against.
    pub root_dir: String,
    /// Page served when the target is `/`.
    pub default_page: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            site: SiteConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            root_dir: "site".to_string(),
            default_page: "/index.html".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from the YAML file named by `ELSERVE_CONFIG`
    /// (default `elserve.yaml`). A missing file yields the built-in
    /// defaults; a file that exists but does not parse is an error.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(&path)
    }

    pub fn load_from(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Unable to read config file {}", path.display()))?;
        let cfg = serde_yaml::from_str(&raw)
            .with_context(|| format!("Unable to parse config file {}", path.display()))?;
        Ok(cfg)
    }

    /// The `host:port` string the listener binds to.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
