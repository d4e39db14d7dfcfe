//! Output formatting and writing functionality

mod formatters;
mod writers;

pub use self::formatters::{format_entry_text, format_report_csv, format_report_json, format_report_text};
pub use self::writers::{create_writer, FileWriter, OutputWriter, StdoutWriter};

use crate::error::Result;
use crate::models::config::OutputFormat;
use crate::models::report::PeerDependencyReport;

/// Trait for different output formatters
pub trait Formatter {
    /// Format a peer dependency report into a string
    fn format(&self, report: &PeerDependencyReport) -> Result<String>;
}

/// Text formatter for human-readable output
pub struct TextFormatter {
    pub use_colors: bool,
    pub verbose: bool,
    pub quiet: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(use_colors: bool, verbose: bool, quiet: bool) -> Self {
        Self {
            use_colors,
            verbose,
            quiet,
        }
    }
}

impl Formatter for TextFormatter {
    fn format(&self, report: &PeerDependencyReport) -> Result<String> {
        // Quiet mode prints problem lines only
        if self.quiet {
            let output = report
                .entries
                .iter()
                .filter(|entry| entry.status.is_problem())
                .map(|entry| formatters::format_entry_text(entry, self.use_colors, false))
                .collect();
            return Ok(output);
        }

        Ok(formatters::format_report_text(report, self.use_colors, self.verbose))
    }
}

/// JSON formatter for machine-readable output
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format(&self, report: &PeerDependencyReport) -> Result<String> {
        formatters::format_report_json(report)
    }
}

/// CSV formatter for spreadsheet analysis
pub struct CsvFormatter;

impl Formatter for CsvFormatter {
    fn format(&self, report: &PeerDependencyReport) -> Result<String> {
        formatters::format_report_csv(report)
    }
}

/// Create a formatter based on the output format
pub fn create_formatter(format: OutputFormat, use_colors: bool, verbose: bool, quiet: bool) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(use_colors, verbose, quiet)),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Csv => Box::new(CsvFormatter),
    }
}
