//! Output formatting functionality
//!
//! This module provides formatters for different output formats.

use crate::error::{PeerCheckError, Result};
use crate::models::report::{PeerDependencyEntry, PeerDependencyReport, PeerDependencyStatus};
use ansi_term::Colour::{Blue, Cyan, Green, Red, Yellow};
use ansi_term::Style;

fn status_label(status: PeerDependencyStatus, use_colors: bool) -> String {
    let label = match status {
        PeerDependencyStatus::Satisfied => "OK",
        PeerDependencyStatus::Missing => "MISSING",
        PeerDependencyStatus::Incompatible => "INCOMPATIBLE",
        PeerDependencyStatus::LocalLink => "LINKED",
    };

    if !use_colors {
        return format!("[{}]", label);
    }

    let painted = match status {
        PeerDependencyStatus::Satisfied => Green.paint(label),
        PeerDependencyStatus::Missing => Red.bold().paint(label),
        PeerDependencyStatus::Incompatible => Red.paint(label),
        PeerDependencyStatus::LocalLink => Yellow.paint(label),
    };
    format!("[{}]", painted)
}

/// Format one report entry as a single line (plus the depender path when verbose)
pub fn format_entry_text(entry: &PeerDependencyEntry, use_colors: bool, verbose: bool) -> String {
    let dependency = &entry.dependency;
    let mut output = String::new();

    let peer = format!("{}@{}", dependency.name, dependency.version);
    let depender = format!("{}@{}", dependency.depender, dependency.depender_version);

    if use_colors {
        output.push_str(&format!(
            "  {} {} required by {}",
            status_label(entry.status, true),
            Style::new().bold().paint(peer),
            Cyan.paint(depender)
        ));
    } else {
        output.push_str(&format!(
            "  {} {} required by {}",
            status_label(entry.status, false),
            peer,
            depender
        ));
    }

    match (&dependency.installed_version, entry.status) {
        (Some(installed), PeerDependencyStatus::LocalLink) => {
            output.push_str(&format!(", found {} (local link)", installed));
        }
        (Some(installed), _) => output.push_str(&format!(", found {}", installed)),
        (None, _) => output.push_str(", not installed"),
    }
    output.push('\n');

    if verbose {
        let path = dependency.depender_path.display().to_string();
        if use_colors {
            output.push_str(&format!("      at {}\n", Style::new().dimmed().paint(path)));
        } else {
            output.push_str(&format!("      at {}\n", path));
        }
    }

    output
}

/// Format a report as text
pub fn format_report_text(report: &PeerDependencyReport, use_colors: bool, verbose: bool) -> String {
    let mut output = String::new();

    if use_colors {
        output.push_str(&format!("{}\n", Blue.bold().paint("Peer Dependency Check")));
    } else {
        output.push_str("Peer Dependency Check\n");
    }
    output.push_str(&format!("Root: {}\n\n", report.root_path.display()));

    let mut listed = 0;
    for entry in &report.entries {
        if entry.status == PeerDependencyStatus::Satisfied && !verbose {
            continue;
        }
        output.push_str(&format_entry_text(entry, use_colors, verbose));
        listed += 1;
    }
    if listed > 0 {
        output.push('\n');
    }

    let summary = &report.summary;
    output.push_str(&format!(
        "Checked {} peer dependencies in {}ms\n",
        summary.total,
        summary.duration.as_millis()
    ));
    output.push_str(&format!("  Satisfied: {}\n", summary.satisfied));
    output.push_str(&format!("  Missing: {}\n", summary.missing));
    output.push_str(&format!("  Incompatible: {}\n", summary.incompatible));
    if summary.local_link > 0 {
        output.push_str(&format!("  Local links: {}\n", summary.local_link));
    }

    output.push('\n');
    if report.has_problems() {
        let message = format!("{} peer dependency problem(s) found", summary.problem_count());
        if use_colors {
            output.push_str(&format!("{}\n", Red.bold().paint(message)));
        } else {
            output.push_str(&format!("{}\n", message));
        }
    } else if use_colors {
        output.push_str(&format!("{}\n", Green.bold().paint("All peer dependencies are satisfied")));
    } else {
        output.push_str("All peer dependencies are satisfied\n");
    }

    output
}

/// Format a report as JSON
pub fn format_report_json(report: &PeerDependencyReport) -> Result<String> {
    serde_json::to_string_pretty(report).map_err(|e| PeerCheckError::JsonSerialize { source: e })
}

/// Format a report as CSV, one row per entry
pub fn format_report_csv(report: &PeerDependencyReport) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);

    writer.write_record([
        "Peer Dependency",
        "Requested Version",
        "Depender",
        "Depender Version",
        "Depender Path",
        "Installed Version",
        "Satisfies",
        "Local Link",
        "Status",
    ])?;

    for entry in &report.entries {
        let dependency = &entry.dependency;
        let depender_path = dependency.depender_path.display().to_string();
        let satisfies = dependency.semver_satisfies.to_string();
        let local_link = dependency.is_local_link.to_string();
        let status = entry.status.to_string();

        writer.write_record([
            dependency.name.as_str(),
            dependency.version.as_str(),
            dependency.depender.as_str(),
            dependency.depender_version.as_str(),
            depender_path.as_str(),
            dependency.installed_version.as_deref().unwrap_or(""),
            satisfies.as_str(),
            local_link.as_str(),
            status.as_str(),
        ])?;
    }

    let bytes = writer.into_inner().map_err(|e| PeerCheckError::io_error(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| PeerCheckError::CsvSerialize { source: e })
}
