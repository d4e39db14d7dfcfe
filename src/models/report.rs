//! Peer dependency report structures

use super::package::Dependency;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Outcome of checking one peer dependency against the installed tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PeerDependencyStatus {
    /// Installed and within the requested range
    Satisfied,
    /// Not installed at all
    Missing,
    /// Installed, but outside the requested range
    Incompatible,
    /// Installed through a local link; the version comparison is approximate
    LocalLink,
}

impl PeerDependencyStatus {
    /// Classify an annotated dependency
    pub fn of(dependency: &Dependency) -> Self {
        if dependency.installed_version.is_none() {
            PeerDependencyStatus::Missing
        } else if dependency.is_local_link {
            PeerDependencyStatus::LocalLink
        } else if dependency.semver_satisfies {
            PeerDependencyStatus::Satisfied
        } else {
            PeerDependencyStatus::Incompatible
        }
    }

    /// Whether this status should fail the check
    pub fn is_problem(&self) -> bool {
        matches!(self, PeerDependencyStatus::Missing | PeerDependencyStatus::Incompatible)
    }
}

impl fmt::Display for PeerDependencyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeerDependencyStatus::Satisfied => write!(f, "satisfied"),
            PeerDependencyStatus::Missing => write!(f, "missing"),
            PeerDependencyStatus::Incompatible => write!(f, "incompatible"),
            PeerDependencyStatus::LocalLink => write!(f, "local-link"),
        }
    }
}

/// A peer dependency together with its check outcome
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeerDependencyEntry {
    #[serde(flatten)]
    pub dependency: Dependency,
    pub status: PeerDependencyStatus,
}

impl PeerDependencyEntry {
    pub fn new(dependency: Dependency) -> Self {
        let status = PeerDependencyStatus::of(&dependency);
        Self { dependency, status }
    }
}

/// Counts per status
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total: usize,
    pub satisfied: usize,
    pub missing: usize,
    pub incompatible: usize,
    pub local_link: usize,
    #[serde(with = "duration_millis")]
    pub duration: Duration,
}

impl ReportSummary {
    /// Count one entry
    pub fn record(&mut self, status: PeerDependencyStatus) {
        self.total += 1;
        match status {
            PeerDependencyStatus::Satisfied => self.satisfied += 1,
            PeerDependencyStatus::Missing => self.missing += 1,
            PeerDependencyStatus::Incompatible => self.incompatible += 1,
            PeerDependencyStatus::LocalLink => self.local_link += 1,
        }
    }

    /// Number of entries that fail the check
    pub fn problem_count(&self) -> usize {
        self.missing + self.incompatible
    }
}

/// Result of a full peer dependency check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeerDependencyReport {
    pub root_path: PathBuf,
    pub entries: Vec<PeerDependencyEntry>,
    pub summary: ReportSummary,
}

impl PeerDependencyReport {
    /// Create a new empty report for the given root
    pub fn new(root_path: impl Into<PathBuf>) -> Self {
        Self {
            root_path: root_path.into(),
            entries: Vec::new(),
            summary: ReportSummary::default(),
        }
    }

    /// Add an annotated dependency to the report
    pub fn add(&mut self, dependency: Dependency) {
        let entry = PeerDependencyEntry::new(dependency);
        self.summary.record(entry.status);
        self.entries.push(entry);
    }

    /// Set the time the check took
    pub fn set_duration(&mut self, duration: Duration) {
        self.summary.duration = duration;
    }

    /// Whether any peer dependency is missing or incompatible
    pub fn has_problems(&self) -> bool {
        self.summary.problem_count() > 0
    }

    /// Entries with the given status, in report order
    pub fn with_status(&self, status: PeerDependencyStatus) -> impl Iterator<Item = &PeerDependencyEntry> {
        self.entries.iter().filter(move |entry| entry.status == status)
    }
}

mod duration_millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(duration.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}
