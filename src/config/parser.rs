use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use sha2::{Digest, Sha256};
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let config = read_config(path)?;

    validate(&config)?;

    Ok(config)
}

/// Reads and parses a configuration file without validating it
///
/// Used when values may still be overridden (for example from the command
/// line) before [`validate`] runs on the final configuration.
pub fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Computes a SHA-256 hash of the configuration file content
///
/// The hash is logged at startup so two harvests can be matched to the
/// exact configuration that produced them.
pub fn compute_config_hash(path: &Path) -> Result<String, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    Ok(hex::encode(hasher.finalize()))
}

/// Reads a configuration and returns both the unvalidated config and its hash
pub fn read_config_with_hash(path: &Path) -> Result<(Config, String), ConfigError> {
    let config = read_config(path)?;
    let hash = compute_config_hash(path)?;
    Ok((config, hash))
}
