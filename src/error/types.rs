//! Error types and definitions for peercheck
//!
//! This module provides the error enum shared by the traversal core, the
//! configuration layer and the output writers, together with severity levels
//! used by the binary to pick an exit code.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Error severity levels for different error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Warning level errors - operation can continue
    Warning,
    /// Error level - current operation fails but overall process can continue
    Error,
    /// Critical level - process should terminate
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "WARNING"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Main error type for peercheck operations
#[derive(Debug, Error)]
pub enum PeerCheckError {
    /// Standard IO errors
    #[error("IO error: {source}")]
    Io {
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing errors with file context
    #[error("JSON parsing error in {file}: {source}")]
    JsonParse {
        file: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A package directory reached during traversal has no package.json
    #[error("package.json missing at {path}")]
    MissingManifest { path: PathBuf },

    /// A runtime dependency could not be located from its depender
    #[error("Unable to resolve package {name} from {from}")]
    UnresolvedDependency { name: String, from: PathBuf },

    /// Invalid package.json structure
    #[error("Invalid package.json structure in {path}: {message}")]
    InvalidPackageJson { path: PathBuf, message: String },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Invalid path errors
    #[error("Invalid path: {path}")]
    InvalidPath { path: PathBuf },

    /// Permission denied errors
    #[error("Permission denied accessing {path}")]
    PermissionDenied { path: PathBuf },

    /// TOML parsing errors
    #[error("TOML parsing error: {source}")]
    TomlParse {
        #[source]
        source: toml::de::Error,
    },

    /// Glob pattern errors
    #[error("Glob pattern error: {source}")]
    GlobPattern {
        #[source]
        source: glob::PatternError,
    },

    /// Configuration file not found
    #[error("Configuration file not found at {path}")]
    ConfigNotFound { path: PathBuf },

    /// Configuration file read errors
    #[error("Error reading configuration file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file parse errors
    #[error("Error parsing configuration file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Invalid output format
    #[error("Invalid output format: {format}")]
    InvalidOutputFormat { format: String },

    /// Output file write errors
    #[error("Error writing to output file {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stdout write errors
    #[error("Error writing to stdout: {source}")]
    StdoutWrite {
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error
    #[error("JSON serialization error: {source}")]
    JsonSerialize {
        #[source]
        source: serde_json::Error,
    },

    /// CSV handling errors
    #[error("CSV error: {source}")]
    Csv {
        #[source]
        source: csv::Error,
    },

    /// CSV output was not valid UTF-8
    #[error("CSV serialization error: {source}")]
    CsvSerialize {
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// Generic check failure with a message
    #[error("Peer dependency check error: {message}")]
    Check { message: String },
}

impl PeerCheckError {
    /// Get the severity level of this error
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // Warning level errors - operation can continue
            PeerCheckError::PermissionDenied { .. } => ErrorSeverity::Warning,

            // Critical errors - process should terminate
            PeerCheckError::Config { .. } => ErrorSeverity::Critical,
            PeerCheckError::ConfigNotFound { .. } => ErrorSeverity::Critical,
            PeerCheckError::ConfigRead { .. } => ErrorSeverity::Critical,
            PeerCheckError::ConfigParse { .. } => ErrorSeverity::Critical,
            PeerCheckError::InvalidOutputFormat { .. } => ErrorSeverity::Critical,
            PeerCheckError::StdoutWrite { .. } => ErrorSeverity::Critical,

            // Traversal failures and everything else abort the current check
            _ => ErrorSeverity::Error,
        }
    }

    /// Check if this is a critical error that should terminate the process
    pub fn is_critical(&self) -> bool {
        self.severity() == ErrorSeverity::Critical
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            PeerCheckError::MissingManifest { path } => {
                format!("package.json missing at '{}'. Is the package installed?", path.display())
            }
            PeerCheckError::UnresolvedDependency { name, from } => {
                format!(
                    "Unable to resolve package '{}' from '{}'. Run your package manager's install first.",
                    name,
                    from.display()
                )
            }
            PeerCheckError::JsonParse { file, source } => {
                format!("Invalid JSON in '{}': {}. Please check the file format.", file.display(), source)
            }
            PeerCheckError::Io { source } => {
                format!("File system error: {}. Check disk space and permissions.", source)
            }
            PeerCheckError::InvalidPath { path } => {
                format!("Invalid path: '{}'. Please provide a valid directory path.", path.display())
            }
            PeerCheckError::PermissionDenied { path } => {
                format!("Cannot access '{}' due to permission denied. Check file permissions.", path.display())
            }
            PeerCheckError::ConfigNotFound { path } => {
                format!("Configuration file not found at '{}'. Create a config file or use command line options.", path.display())
            }
            PeerCheckError::InvalidPackageJson { path, message } => {
                format!("Invalid package.json in '{}': {}.", path.display(), message)
            }
            // For other errors, use the standard Display implementation
            _ => self.to_string(),
        }
    }

    /// Create an IO error with context
    pub fn io_error(source: std::io::Error) -> Self {
        PeerCheckError::Io { source }
    }

    /// Create a JSON parse error with file context
    pub fn json_parse_error(file: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        PeerCheckError::JsonParse {
            file: file.into(),
            source,
        }
    }

    /// Create a missing manifest error for the expected package.json location
    pub fn missing_manifest(path: impl Into<PathBuf>) -> Self {
        PeerCheckError::MissingManifest { path: path.into() }
    }

    /// Create an unresolved dependency error
    pub fn unresolved_dependency(name: impl Into<String>, from: impl Into<PathBuf>) -> Self {
        PeerCheckError::UnresolvedDependency {
            name: name.into(),
            from: from.into(),
        }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        PeerCheckError::Config {
            message: message.into(),
        }
    }

    /// Create a permission denied error
    pub fn permission_denied(path: impl Into<PathBuf>) -> Self {
        PeerCheckError::PermissionDenied { path: path.into() }
    }

    /// Create a generic check error
    pub fn check_error(message: impl Into<String>) -> Self {
        PeerCheckError::Check {
            message: message.into(),
        }
    }
}

// Implement From for common error types
impl From<std::io::Error> for PeerCheckError {
    fn from(err: std::io::Error) -> Self {
        PeerCheckError::io_error(err)
    }
}

impl From<toml::de::Error> for PeerCheckError {
    fn from(err: toml::de::Error) -> Self {
        PeerCheckError::TomlParse { source: err }
    }
}

impl From<csv::Error> for PeerCheckError {
    fn from(err: csv::Error) -> Self {
        PeerCheckError::Csv { source: err }
    }
}

impl From<glob::PatternError> for PeerCheckError {
    fn from(err: glob::PatternError) -> Self {
        PeerCheckError::GlobPattern { source: err }
    }
}

impl From<serde_json::Error> for PeerCheckError {
    fn from(err: serde_json::Error) -> Self {
        PeerCheckError::JsonSerialize { source: err }
    }
}

/// Result type alias for peercheck operations
pub type Result<T> = std::result::Result<T, PeerCheckError>;
