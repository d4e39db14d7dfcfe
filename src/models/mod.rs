//! Data models and structures for peercheck

pub mod config;
pub mod package;
pub mod report;

pub use config::{OutputFormat, PartialSettings, Settings, SortOrder};
pub use package::{Dependency, DependencyEntry, DependencyKind, PackageDependencies, PackageManifest};
pub use report::{PeerDependencyEntry, PeerDependencyReport, PeerDependencyStatus, ReportSummary};
