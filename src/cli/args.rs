//! Command-line argument parsing

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// peercheck - find peer dependency mismatches in an installed package tree
#[derive(Parser, Debug, Clone)]
#[command(name = "peercheck")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Check that the peer dependencies of an installed package tree are satisfied")]
#[command(long_about = "peercheck walks a package and every runtime dependency installed beneath it, \
collects the peer dependencies they declare, and compares each one against the version actually \
installed at the top level. It reports peer dependencies that are missing or installed at an \
incompatible version. It never installs or modifies anything.")]
#[command(after_help = "EXAMPLES:

    # Check the package in the current directory
    peercheck

    # Check another package directory
    peercheck --path ./packages/app

    # Group the report by peer dependency instead of by depender
    peercheck --order-by dependee

    # Skip type packages
    peercheck --ignore '@types/*'

    # Machine-readable output
    peercheck --output json --output-file peers.json

    # Print every manifest visited and the peer dependencies found in it
    peercheck --debug
")]
pub struct Args {
    /// Package directory to check
    #[arg(short, long, value_name = "PATH", help = "Package directory to start from (defaults to the current directory)")]
    pub path: Option<PathBuf>,

    /// Print diagnostic information while walking
    #[arg(long, help = "Print each visited package.json and the peer dependencies it declares")]
    pub debug: bool,

    /// Allow pre-release installs to satisfy ranges
    #[arg(long, help = "Compare pre-release installs by their release version")]
    pub include_prerelease: bool,

    /// Only check peer dependencies of the root package and its direct dependencies
    #[arg(long, help = "Only check peer dependencies declared by the root package or its direct dependencies")]
    pub only_root_dependencies: bool,

    /// Report ordering
    #[arg(long, value_enum, value_name = "ORDER", help = "Order the report by depender or by the peer dependency itself")]
    pub order_by: Option<SortOrder>,

    /// Peer dependency names to ignore
    #[arg(short, long, value_name = "PATTERN", help = "Glob pattern of peer dependency names to ignore (can be specified multiple times)")]
    pub ignore: Vec<String>,

    /// Output format (text, json, csv)
    #[arg(short, long, value_enum, help = "Output format: 'text' for humans, 'json' for machine processing, 'csv' for spreadsheets")]
    pub output: Option<OutputFormat>,

    /// Output file path (stdout if not specified)
    #[arg(long, value_name = "FILE", help = "File to write the report to (uses stdout if not specified)")]
    pub output_file: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, help = "Disable colored output")]
    pub no_colors: bool,

    /// Suppress non-essential output
    #[arg(short, long, help = "Only print problems")]
    pub quiet: bool,

    /// Also list satisfied peer dependencies
    #[arg(short, long, help = "Also list satisfied peer dependencies")]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE", help = "Path to configuration file (defaults to .peercheck.toml in the current or home directory)")]
    pub config: Option<PathBuf>,

    /// Initialize a default configuration file
    #[arg(long, help = "Create a default configuration file (.peercheck.toml) in the current directory")]
    pub init: bool,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output for programmatic consumption
    Json,
    /// CSV output for spreadsheet analysis
    Csv,
}

/// Report ordering options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SortOrder {
    /// Group by the package declaring the peer dependency
    Depender,
    /// Group by the peer dependency
    Dependee,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Args::parse()
    }
}
