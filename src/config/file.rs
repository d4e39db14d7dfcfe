//! Configuration file and environment sources

use std::path::{Path, PathBuf};

use crate::error::{PeerCheckError, Result};
use crate::models::config::PartialSettings;
use super::{parser, ConfigSource};

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = ".peercheck.toml";

/// Default environment variable prefix
pub const DEFAULT_ENV_PREFIX: &str = "PEERCHECK";

/// Configuration file source
pub struct FileConfig {
    path: PathBuf,
    name: String,
    priority: u8,
}

impl FileConfig {
    /// Create a new file configuration source with the default path
    pub fn new() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CONFIG_FILE),
            name: "default config file".to_string(),
            priority: 10,
        }
    }

    /// Create a new file configuration source with a custom path
    pub fn with_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            name: format!("config file ({})", path.as_ref().display()),
            priority: 10,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create a default configuration file at this location
    pub fn create_default(&self) -> Result<()> {
        parser::create_default_config(&self.path)
    }
}

impl ConfigSource for FileConfig {
    fn load(&self) -> Result<PartialSettings> {
        if !self.is_available() {
            return Err(PeerCheckError::ConfigNotFound {
                path: self.path.clone(),
            });
        }

        parser::parse_config_file(&self.path)
    }

    fn is_available(&self) -> bool {
        self.path.is_file()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }
}

impl Default for FileConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Environment variable configuration source
///
/// Reads `<PREFIX>_ROOT_PATH`, `<PREFIX>_DEBUG`, `<PREFIX>_INCLUDE_PRERELEASE`,
/// `<PREFIX>_ONLY_ROOT_DEPENDENCIES`, `<PREFIX>_ORDER_BY`, `<PREFIX>_IGNORE`
/// (comma separated), `<PREFIX>_OUTPUT_FORMAT`, `<PREFIX>_OUTPUT_FILE` and
/// `<PREFIX>_NO_COLORS`.
pub struct EnvConfig {
    prefix: String,
    name: String,
    priority: u8,
}

const ENV_KEYS: &[&str] = &[
    "ROOT_PATH",
    "DEBUG",
    "INCLUDE_PRERELEASE",
    "ONLY_ROOT_DEPENDENCIES",
    "ORDER_BY",
    "IGNORE",
    "OUTPUT_FORMAT",
    "OUTPUT_FILE",
    "NO_COLORS",
];

impl EnvConfig {
    /// Create a new environment variable configuration source
    pub fn new(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        Self {
            name: format!("{} environment variables", &prefix),
            prefix,
            priority: 20,
        }
    }

    fn var(&self, key: &str) -> Option<String> {
        std::env::var(format!("{}_{}", self.prefix, key)).ok()
    }

    fn flag(&self, key: &str) -> Option<bool> {
        self.var(key).and_then(|value| parse_bool(&value))
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ENV_PREFIX)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

impl ConfigSource for EnvConfig {
    fn load(&self) -> Result<PartialSettings> {
        let mut settings = PartialSettings::default();

        if let Some(path) = self.var("ROOT_PATH") {
            settings.root_path = Some(PathBuf::from(path));
        }

        settings.debug = self.flag("DEBUG");
        settings.include_prerelease = self.flag("INCLUDE_PRERELEASE");
        settings.only_root_dependencies = self.flag("ONLY_ROOT_DEPENDENCIES");
        settings.use_colors = self.flag("NO_COLORS").map(|no_colors| !no_colors);

        if let Some(order) = self.var("ORDER_BY") {
            settings.sort_order = Some(order.parse().map_err(PeerCheckError::config_error)?);
        }

        if let Some(ignore) = self.var("IGNORE") {
            settings.ignore_patterns = Some(
                ignore
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect(),
            );
        }

        if let Some(format) = self.var("OUTPUT_FORMAT") {
            settings.output_format = Some(format.parse().map_err(|_| PeerCheckError::InvalidOutputFormat { format })?);
        }

        if let Some(output_file) = self.var("OUTPUT_FILE") {
            settings.output_file = Some(PathBuf::from(output_file));
        }

        Ok(settings)
    }

    fn is_available(&self) -> bool {
        ENV_KEYS.iter().any(|key| self.var(key).is_some())
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }
}
