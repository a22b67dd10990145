//! Configuration for portfolio-feed.
//!
//! Settings come from four layers, highest first: command-line flags,
//! environment variables (a `.env` file is loaded at startup), the optional
//! `portfolio-feed.config.yml` file, and built-in defaults. The access token
//! is only ever read from the environment.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use crate::adapters::outbound::network::{DEFAULT_API_BASE_URL, DEFAULT_CACHE_TTL};
use crate::application::dto::OutputFormat;
use crate::shared::error::PortfolioError;
use crate::shared::security::{validate_regular_file, MAX_CONFIG_FILE_SIZE};
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "portfolio-feed.config.yml";

/// Account shown when nothing else names one
pub const DEFAULT_USERNAME: &str = "asepulvedadev";

pub const ENV_USERNAME: &str = "GITHUB_USERNAME";
/// Name the web front end reads; honored when `GITHUB_USERNAME` is unset
pub const ENV_PUBLIC_USERNAME: &str = "NEXT_PUBLIC_GITHUB_USERNAME";
pub const ENV_TOKEN: &str = "GITHUB_TOKEN";
pub const ENV_API_URL: &str = "GITHUB_API_URL";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub username: Option<String>,
    pub api_base_url: Option<String>,
    pub cache_ttl_secs: Option<u64>,
    pub format: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    validate_regular_file(path, "config file", MAX_CONFIG_FILE_SIZE).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let content = std::fs::read_to_string(path).map_err(|e| PortfolioError::FileReadError {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(username) = &config.username {
        validate_username(username)?;
    }
    if config.cache_ttl_secs == Some(0) {
        return Err(PortfolioError::InvalidConfig {
            message: "cache_ttl_secs must be greater than zero".to_string(),
            hint: "Omit the field to use the default of 3600 seconds.".to_string(),
        }
        .into());
    }
    if let Some(url) = &config.api_base_url {
        validate_api_base_url(url)?;
    }
    if let Some(format) = &config.format {
        parse_format(format)?;
    }
    Ok(())
}

fn validate_username(username: &str) -> Result<()> {
    if username.trim().is_empty() {
        return Err(PortfolioError::InvalidConfig {
            message: "username must not be empty".to_string(),
            hint: format!(
                "Pass --username, set {} or remove the field to use the default.",
                ENV_USERNAME
            ),
        }
        .into());
    }
    Ok(())
}

fn validate_api_base_url(url: &str) -> Result<()> {
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(PortfolioError::InvalidConfig {
            message: format!("API base URL must be an http(s) URL, got '{}'", url),
            hint: format!("Use something like {}.", DEFAULT_API_BASE_URL),
        }
        .into());
    }
    Ok(())
}

fn parse_format(format: &str) -> Result<OutputFormat> {
    format.parse().map_err(|message: String| {
        PortfolioError::InvalidConfig {
            message,
            hint: "Supported formats are 'json' and 'markdown'.".to_string(),
        }
        .into()
    })
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

/// Values taken from the process environment
#[derive(Debug, Default, Clone)]
pub struct EnvOverrides {
    pub username: Option<String>,
    pub token: Option<String>,
    pub api_base_url: Option<String>,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds overrides from an arbitrary lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        Self {
            username: get(ENV_USERNAME).or_else(|| get(ENV_PUBLIC_USERNAME)),
            token: get(ENV_TOKEN),
            api_base_url: get(ENV_API_URL),
        }
    }
}

/// Values given on the command line
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub username: Option<String>,
    pub format: Option<OutputFormat>,
    pub api_base_url: Option<String>,
}

/// Fully merged settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub username: String,
    pub token: Option<String>,
    pub api_base_url: String,
    pub cache_ttl: Duration,
    pub format: OutputFormat,
}

/// Merges the layers, CLI first, then environment, file and defaults.
pub fn resolve(
    cli: &CliOverrides,
    env: &EnvOverrides,
    file: Option<&ConfigFile>,
) -> Result<ResolvedConfig> {
    let file_username = file.and_then(|f| f.username.clone());
    let username = cli
        .username
        .clone()
        .or_else(|| env.username.clone())
        .or(file_username)
        .unwrap_or_else(|| DEFAULT_USERNAME.to_string());
    validate_username(&username)?;

    let file_api_url = file.and_then(|f| f.api_base_url.clone());
    let api_base_url = cli
        .api_base_url
        .clone()
        .or_else(|| env.api_base_url.clone())
        .or(file_api_url)
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
    validate_api_base_url(&api_base_url)?;

    let cache_ttl = file
        .and_then(|f| f.cache_ttl_secs)
        .map(Duration::from_secs)
        .unwrap_or(DEFAULT_CACHE_TTL);

    let format = match (cli.format, file.and_then(|f| f.format.as_deref())) {
        (Some(format), _) => format,
        (None, Some(format)) => parse_format(format)?,
        (None, None) => OutputFormat::default(),
    };

    Ok(ResolvedConfig {
        username: username.trim().to_string(),
        token: env.token.clone(),
        api_base_url,
        cache_ttl,
        format,
    })
}
