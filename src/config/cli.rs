//! Command-line argument configuration source

use std::path::PathBuf;

use crate::cli::args::{Args, OutputFormat as CliOutputFormat, SortOrder as CliSortOrder};
use crate::error::Result;
use crate::models::config::{OutputFormat, PartialSettings, SortOrder};
use super::ConfigSource;

/// Command-line argument configuration source
#[derive(Debug)]
pub struct CliConfig {
    args: CliArgs,
    name: String,
    priority: u8,
}

/// Command-line values relevant to configuration
///
/// Unset options and flags that were not passed stay empty so lower
/// priority sources keep their values.
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub path: Option<PathBuf>,
    pub debug: bool,
    pub include_prerelease: bool,
    pub only_root_dependencies: bool,
    pub sort_order: Option<SortOrder>,
    pub ignore: Option<Vec<String>>,
    pub output_format: Option<OutputFormat>,
    pub output_file: Option<PathBuf>,
    pub no_colors: bool,
    pub quiet: bool,
    pub verbose: bool,
    pub config: Option<PathBuf>,
}

impl From<&Args> for CliArgs {
    fn from(args: &Args) -> Self {
        Self {
            path: args.path.clone(),
            debug: args.debug,
            include_prerelease: args.include_prerelease,
            only_root_dependencies: args.only_root_dependencies,
            sort_order: args.order_by.map(|order| match order {
                CliSortOrder::Depender => SortOrder::Depender,
                CliSortOrder::Dependee => SortOrder::Dependee,
            }),
            ignore: if args.ignore.is_empty() { None } else { Some(args.ignore.clone()) },
            output_format: args.output.map(|format| match format {
                CliOutputFormat::Text => OutputFormat::Text,
                CliOutputFormat::Json => OutputFormat::Json,
                CliOutputFormat::Csv => OutputFormat::Csv,
            }),
            output_file: args.output_file.clone(),
            no_colors: args.no_colors,
            quiet: args.quiet,
            verbose: args.verbose,
            config: args.config.clone(),
        }
    }
}

impl CliConfig {
    /// Create a new CLI configuration source
    pub fn new(args: CliArgs) -> Self {
        Self {
            args,
            name: "command-line arguments".to_string(),
            priority: 30,
        }
    }

    /// Create a CLI configuration source from Args
    pub fn from_args(args: &Args) -> Self {
        Self::new(CliArgs::from(args))
    }

    /// Get the config file path if specified
    pub fn config_path(&self) -> Option<&PathBuf> {
        self.args.config.as_ref()
    }
}

impl ConfigSource for CliConfig {
    fn load(&self) -> Result<PartialSettings> {
        let mut settings = PartialSettings::default();

        if let Some(path) = &self.args.path {
            settings.root_path = Some(path.clone());
        }

        if let Some(ignore) = &self.args.ignore {
            settings.ignore_patterns = Some(ignore.clone());
        }

        settings.sort_order = self.args.sort_order;
        settings.output_format = self.args.output_format;

        if let Some(output_file) = &self.args.output_file {
            settings.output_file = Some(output_file.clone());
        }

        // Flags only override when passed
        if self.args.debug {
            settings.debug = Some(true);
        }

        if self.args.include_prerelease {
            settings.include_prerelease = Some(true);
        }

        if self.args.only_root_dependencies {
            settings.only_root_dependencies = Some(true);
        }

        if self.args.no_colors {
            settings.use_colors = Some(false);
        }

        if self.args.quiet {
            settings.quiet = Some(true);
        }

        if self.args.verbose {
            settings.verbose = Some(true);
        }

        Ok(settings)
    }

    fn is_available(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }
}
