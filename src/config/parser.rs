//! Configuration file parsing utilities

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PeerCheckError, Result};
use crate::models::config::PartialSettings;
use super::file::DEFAULT_CONFIG_FILE;

/// Parse a TOML configuration file into PartialSettings
pub fn parse_config_file<P: AsRef<Path>>(path: P) -> Result<PartialSettings> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(PeerCheckError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|e| PeerCheckError::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_config_content(&content, path)
}

/// Parse TOML configuration content into PartialSettings
pub fn parse_config_content<P: AsRef<Path>>(content: &str, path: P) -> Result<PartialSettings> {
    let path = path.as_ref();

    let settings: PartialSettings = toml::from_str(content).map_err(|e| PeerCheckError::ConfigParse {
        path: path.to_path_buf(),
        source: e,
    })?;

    validate_partial_settings(&settings, path)?;

    Ok(settings)
}

/// Validate partial settings for obvious errors
pub fn validate_partial_settings<P: AsRef<Path>>(settings: &PartialSettings, path: P) -> Result<()> {
    let path = path.as_ref();

    if let Some(root_path) = &settings.root_path {
        if root_path.as_os_str().is_empty() {
            return Err(PeerCheckError::config_error(format!(
                "Invalid empty root_path in config file: {}",
                path.display()
            )));
        }
    }

    if let Some(patterns) = &settings.ignore_patterns {
        for pattern in patterns {
            if pattern.is_empty() {
                return Err(PeerCheckError::config_error(format!(
                    "Empty ignore pattern in config file: {}",
                    path.display()
                )));
            }

            glob::Pattern::new(pattern).map_err(|e| {
                PeerCheckError::config_error(format!(
                    "Invalid ignore pattern '{}' in config file: {}: {}",
                    pattern,
                    path.display(),
                    e
                ))
            })?;
        }
    }

    if let Some(output_file) = &settings.output_file {
        if output_file.as_os_str().is_empty() {
            return Err(PeerCheckError::config_error(format!(
                "Invalid empty output_file in config file: {}",
                path.display()
            )));
        }
    }

    Ok(())
}

/// Find and load configuration from default locations
///
/// Looks in the current directory first, then the home directory.
pub fn find_default_config() -> Result<Option<PartialSettings>> {
    let current_dir_config = PathBuf::from(DEFAULT_CONFIG_FILE);
    if current_dir_config.is_file() {
        log::debug!("using config file {}", current_dir_config.display());
        return Ok(Some(parse_config_file(current_dir_config)?));
    }

    if let Some(home_dir) = dirs::home_dir() {
        let home_config = home_dir.join(DEFAULT_CONFIG_FILE);
        if home_config.is_file() {
            log::debug!("using config file {}", home_config.display());
            return Ok(Some(parse_config_file(home_config)?));
        }
    }

    Ok(None)
}

/// Create a default configuration file at the specified path
pub fn create_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let default_config = include_str!("default_config.toml");

    fs::write(path, default_config)?;

    Ok(())
}
