use crate::parser::MAX_KEYS;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use regex::Regex;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub filter: FilterConfig,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Deserialize, Debug, Clone)]
pub struct GeneralConfig {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String { "warn".to_string() }

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            log_level: default_log_level(),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct ScanConfig {
    #[serde(default = "default_max_keys")]
    pub max_keys: usize,
}

fn default_max_keys() -> usize { MAX_KEYS }

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_keys: default_max_keys(),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct SearchConfig {
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize { 10 }

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
        }
    }
}

/// Names hidden from output. The loaded collection is never filtered.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct FilterConfig {
    #[serde(default)]
    pub blacklist: Vec<String>,
}

impl FilterConfig {
    pub fn compile(&self) -> Result<Blacklist> {
        let patterns = self
            .blacklist
            .iter()
            .map(|s| Regex::new(s).with_context(|| format!("invalid blacklist pattern '{s}'")))
            .collect::<Result<Vec<_>>>()?;
        Ok(Blacklist { patterns })
    }
}

pub struct Blacklist {
    patterns: Vec<Regex>,
}

impl Blacklist {
    pub fn is_hidden(&self, name: &str) -> bool {
        self.patterns.iter().any(|re| re.is_match(name))
    }
}

pub fn default_config_path() -> PathBuf {
    match ProjectDirs::from("org", "ladish", "appdb") {
        Some(dirs) => dirs.config_dir().join("config.toml"),
        None => PathBuf::from("config.toml"),
    }
}

/// Loads `path`, or the default location. A missing file yields defaults.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let config_path = match path {
        Some(p) => p.to_path_buf(),
        None => default_config_path(),
    };

    if !config_path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&config_path)
        .with_context(|| format!("failed to read {}", config_path.display()))?;
    let config: Config = toml::from_str(&content)
        .with_context(|| format!("failed to parse {}", config_path.display()))?;
    Ok(config)
}
