//! Configuration-related data structures

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration settings for peercheck
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Package directory to start the walk from
    pub root_path: PathBuf,

    /// Whether to print every visited manifest and its peer dependencies
    pub debug: bool,

    /// Whether pre-release installs may satisfy plain ranges
    pub include_prerelease: bool,

    /// Whether to check only peer dependencies of the root and its direct dependencies
    pub only_root_dependencies: bool,

    /// Report ordering
    pub sort_order: SortOrder,

    /// Glob patterns of peer dependency names to leave out of the report
    pub ignore_patterns: Vec<String>,

    /// Output format (text, json, csv)
    pub output_format: OutputFormat,

    /// Output file path (if not specified, output to stdout)
    pub output_file: Option<PathBuf>,

    /// Whether to use colors in text output
    pub use_colors: bool,

    /// Whether to suppress non-essential output
    pub quiet: bool,

    /// Whether to list satisfied peer dependencies too
    pub verbose: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            root_path: PathBuf::from("."),
            debug: false,
            include_prerelease: false,
            only_root_dependencies: false,
            sort_order: SortOrder::Depender,
            ignore_patterns: Vec::new(),
            output_format: OutputFormat::Text,
            output_file: None,
            use_colors: true,
            quiet: false,
            verbose: false,
        }
    }
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output for programmatic consumption
    Json,
    /// CSV output for spreadsheet analysis
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Invalid output format: {}", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

/// How report entries are ordered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Group by the package declaring the peer dependency
    Depender,
    /// Group by the peer dependency itself
    Dependee,
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "depender" => Ok(SortOrder::Depender),
            "dependee" => Ok(SortOrder::Dependee),
            _ => Err(format!("Invalid sort order: {}", s)),
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOrder::Depender => write!(f, "depender"),
            SortOrder::Dependee => write!(f, "dependee"),
        }
    }
}

/// Partial settings for configuration merging
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialSettings {
    pub root_path: Option<PathBuf>,
    pub debug: Option<bool>,
    pub include_prerelease: Option<bool>,
    pub only_root_dependencies: Option<bool>,
    pub sort_order: Option<SortOrder>,
    pub ignore_patterns: Option<Vec<String>>,
    pub output_format: Option<OutputFormat>,
    pub output_file: Option<PathBuf>,
    pub use_colors: Option<bool>,
    pub quiet: Option<bool>,
    pub verbose: Option<bool>,
}

impl PartialSettings {
    /// Merge another PartialSettings into this one
    /// Fields from `other` take precedence over existing fields
    pub fn merge_from(&mut self, other: PartialSettings) {
        if other.root_path.is_some() {
            self.root_path = other.root_path;
        }
        if other.debug.is_some() {
            self.debug = other.debug;
        }
        if other.include_prerelease.is_some() {
            self.include_prerelease = other.include_prerelease;
        }
        if other.only_root_dependencies.is_some() {
            self.only_root_dependencies = other.only_root_dependencies;
        }
        if other.sort_order.is_some() {
            self.sort_order = other.sort_order;
        }
        if other.ignore_patterns.is_some() {
            self.ignore_patterns = other.ignore_patterns;
        }
        if other.output_format.is_some() {
            self.output_format = other.output_format;
        }
        if other.output_file.is_some() {
            self.output_file = other.output_file;
        }
        if other.use_colors.is_some() {
            self.use_colors = other.use_colors;
        }
        if other.quiet.is_some() {
            self.quiet = other.quiet;
        }
        if other.verbose.is_some() {
            self.verbose = other.verbose;
        }
    }

    /// Convert partial settings to full settings
    /// Uses defaults for any fields that are None
    pub fn to_settings(&self) -> Settings {
        let mut settings = Settings::default();

        if let Some(root_path) = &self.root_path {
            settings.root_path = root_path.clone();
        }
        if let Some(debug) = self.debug {
            settings.debug = debug;
        }
        if let Some(include_prerelease) = self.include_prerelease {
            settings.include_prerelease = include_prerelease;
        }
        if let Some(only_root_dependencies) = self.only_root_dependencies {
            settings.only_root_dependencies = only_root_dependencies;
        }
        if let Some(sort_order) = self.sort_order {
            settings.sort_order = sort_order;
        }
        if let Some(ignore_patterns) = &self.ignore_patterns {
            settings.ignore_patterns = ignore_patterns.clone();
        }
        if let Some(output_format) = self.output_format {
            settings.output_format = output_format;
        }
        if let Some(output_file) = &self.output_file {
            settings.output_file = Some(output_file.clone());
        }
        if let Some(use_colors) = self.use_colors {
            settings.use_colors = use_colors;
        }
        if let Some(quiet) = self.quiet {
            settings.quiet = quiet;
        }
        if let Some(verbose) = self.verbose {
            settings.verbose = verbose;
        }

        settings
    }
}
