//! Package-related data structures

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// The subset of a package.json needed to walk a dependency tree
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageManifest {
    pub name: String,
    pub version: String,
    /// Runtime dependencies, in declaration order
    pub dependencies: Vec<DependencyEntry>,
    pub dev_dependencies: Vec<DependencyEntry>,
    pub peer_dependencies: Vec<DependencyEntry>,
}

impl PackageManifest {
    /// Entries of the given dependency field
    pub fn entries(&self, kind: DependencyKind) -> &[DependencyEntry] {
        match kind {
            DependencyKind::Runtime => &self.dependencies,
            DependencyKind::Development => &self.dev_dependencies,
            DependencyKind::Peer => &self.peer_dependencies,
        }
    }

    /// Whether `name` is declared as a runtime dependency
    pub fn has_runtime_dependency(&self, name: &str) -> bool {
        self.dependencies.iter().any(|entry| entry.name == name)
    }
}

/// Individual dependency entry with name and version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyEntry {
    pub name: String,
    pub version_spec: String,
}

impl DependencyEntry {
    pub fn new(name: impl Into<String>, version_spec: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version_spec: version_spec.into(),
        }
    }
}

/// The package.json field a dependency was declared in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DependencyKind {
    Runtime,
    Development,
    Peer,
}

impl DependencyKind {
    /// Name of the package.json field holding this kind
    pub fn field_name(&self) -> &'static str {
        match self {
            DependencyKind::Runtime => "dependencies",
            DependencyKind::Development => "devDependencies",
            DependencyKind::Peer => "peerDependencies",
        }
    }
}

impl fmt::Display for DependencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

/// One declared dependency edge, stamped with the package that declared it
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dependency {
    pub name: String,
    /// Requested version specifier
    pub version: String,
    pub depender: String,
    pub depender_path: PathBuf,
    pub depender_version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installed_version: Option<String>,
    #[serde(default)]
    pub semver_satisfies: bool,
    /// Installed through a local link rather than from a registry
    #[serde(default)]
    pub is_local_link: bool,
}

impl Dependency {
    /// Structural identity used for deduplication.
    ///
    /// Two dependencies are the same when name, requested version, depender
    /// and depender version all match. Resolution fields are ignored.
    pub fn is_same(&self, other: &Dependency) -> bool {
        self.name == other.name
            && self.version == other.version
            && self.depender == other.depender
            && self.depender_version == other.depender_version
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}@{} (required by {}@{})",
            self.name, self.version, self.depender, self.depender_version
        )
    }
}

/// A manifest's dependencies split by field
#[derive(Debug, Clone, Default)]
pub struct PackageDependencies {
    pub package_name: String,
    pub dependencies: Vec<Dependency>,
    pub dev_dependencies: Vec<Dependency>,
    pub peer_dependencies: Vec<Dependency>,
}

impl PackageDependencies {
    /// Dependencies of the given kind
    pub fn of_kind(&self, kind: DependencyKind) -> &[Dependency] {
        match kind {
            DependencyKind::Runtime => &self.dependencies,
            DependencyKind::Development => &self.dev_dependencies,
            DependencyKind::Peer => &self.peer_dependencies,
        }
    }

    /// Total number of declared dependencies across all fields
    pub fn total_count(&self) -> usize {
        self.dependencies.len() + self.dev_dependencies.len() + self.peer_dependencies.len()
    }
}
