//! Configuration Loader - File Loading and Validation
//!
//! Handles loading `config.toml`, validating all parameters,
//! and providing clear error messages for misconfiguration.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use super::AppConfig;

/// Highest accepted `transport.max_retries`.
const MAX_RETRIES: u32 = 10;

/// Load and validate configuration from a TOML file.
///
/// # Errors
/// Returns detailed error if:
/// - File can't be read
/// - TOML parsing fails
/// - Validation rules are violated
pub fn load_config(path: &str) -> Result<AppConfig> {
  let path = Path::new(path);

  let content = std::fs::read_to_string(path)
    .with_context(|| format!("Failed to read config file: {}", path.display()))?;

  let config = parse_config(&content)?;

  info!(
    path = %path.display(),
    endpoints = config.endpoints.len(),
    timeout_s = config.transport.timeout_seconds,
    retries = config.transport.max_retries,
    "Configuration loaded successfully"
  );

  Ok(config)
}

/// Load `path` if it exists, otherwise fall back to built-in defaults.
///
/// # Errors
/// A file that exists but fails to parse or validate is still an error.
pub fn load_or_default(path: &str) -> Result<AppConfig> {
  if Path::new(path).exists() {
    load_config(path)
  } else {
    warn!(path, "Config file not found, using built-in defaults");
    Ok(AppConfig::default())
  }
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<AppConfig> {
  let config: AppConfig = toml::from_str(content)
    .with_context(|| "Failed to parse config.toml")?;

  validate_config(&config)?;
  Ok(config)
}

/// Validate all configuration parameters.
///
/// Checks for:
/// - Known chain identifiers with http(s) endpoint URLs
/// - Positive timeout and concurrency limits
/// - A bounded retry count
fn validate_config(config: &AppConfig) -> Result<()> {
  let table = config.endpoint_table()?;

  for chain in table.chains() {
    let url = table.get(chain).unwrap_or_default();
    anyhow::ensure!(
      !url.trim().is_empty(),
      "Endpoint for chain {} must not be empty",
      chain
    );
    anyhow::ensure!(
      url.starts_with("http://") || url.starts_with("https://"),
      "Endpoint for chain {} must be an http(s) URL, got {}",
      chain,
      url
    );
  }

  // Transport validation
  anyhow::ensure!(
    config.transport.timeout_seconds > 0,
    "transport.timeout_seconds must be positive"
  );
  anyhow::ensure!(
    config.transport.max_concurrent > 0,
    "transport.max_concurrent must be positive"
  );
  anyhow::ensure!(
    config.transport.max_retries <= MAX_RETRIES,
    "transport.max_retries must be at most {}, got {}",
    MAX_RETRIES,
    config.transport.max_retries
  );

  Ok(())
}
