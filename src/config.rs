use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer};
use std::path::{Path, PathBuf};

pub const DEFAULT_BASE_URL: &str = "http://localhost:5219";

/// Environment variable overriding the configured base URL
pub const BASE_URL_ENV: &str = "BIZDIR_API_BASE_URL";

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_base_url", deserialize_with = "deserialize_base_url")]
    pub base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

/// A bare `base_url:` key parses as null; keep the default for it
fn deserialize_base_url<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.unwrap_or_else(default_base_url))
}

impl Config {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse config")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml(&contents)
    }
}

/// Determine the config file path with fallback logic.
///
/// An explicit path must exist. Otherwise `<config_dir>/bizdir/config.yaml`
/// then `./config.yaml` are tried; finding neither is not an error.
pub fn get_config_path(cli_path: Option<&str>) -> Result<Option<PathBuf>> {
    if let Some(path) = cli_path {
        let p = PathBuf::from(path);
        if p.exists() {
            return Ok(Some(p));
        }
        anyhow::bail!("Config file not found at specified path: {}", path);
    }

    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("bizdir").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    Ok(None)
}

/// Pick the base URL: CLI flag, then environment, then config file, then the default.
///
/// Blank values are skipped so an empty setting doesn't wipe the default.
pub fn resolve_base_url(cli: Option<&str>, env: Option<&str>, config: &Config) -> String {
    [cli, env, Some(config.base_url.as_str())]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|url| !url.is_empty())
        .unwrap_or(DEFAULT_BASE_URL)
        .to_string()
}
