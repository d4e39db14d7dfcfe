//! Peer dependency collection
//!
//! Gathers the peer dependencies declared anywhere in a package's runtime
//! tree into one flat list without duplicates.

use crate::core::walker::{DependencyVisitor, DependencyWalker, WalkOptions};
use crate::error::Result;
use crate::models::package::{Dependency, PackageDependencies, PackageManifest};
use crate::utils::path_resolver::ModuleResolver;
use std::path::Path;

/// Visitor accumulating every peer dependency it is shown
#[derive(Debug, Default)]
pub struct PeerDependencyCollector {
    peer_dependencies: Vec<Dependency>,
}

impl PeerDependencyCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Peer dependencies collected so far, duplicates included
    pub fn peer_dependencies(&self) -> &[Dependency] {
        &self.peer_dependencies
    }

    /// Hand back the raw accumulated list
    pub fn into_dependencies(self) -> Vec<Dependency> {
        self.peer_dependencies
    }

    /// Hand back the accumulated list with duplicates removed
    pub fn into_deduplicated(self) -> Vec<Dependency> {
        dedupe_dependencies(self.peer_dependencies)
    }
}

impl DependencyVisitor for PeerDependencyCollector {
    fn visit(&mut self, _package_path: &Path, _manifest: &PackageManifest, dependencies: &PackageDependencies) {
        self.peer_dependencies
            .extend(dependencies.peer_dependencies.iter().cloned());
    }
}

/// Drop structural duplicates, keeping the first occurrence of each.
///
/// Quadratic on purpose: peer dependency lists are short and identity is
/// [`Dependency::is_same`], which has no matching hash.
pub fn dedupe_dependencies(dependencies: Vec<Dependency>) -> Vec<Dependency> {
    let mut unique: Vec<Dependency> = Vec::with_capacity(dependencies.len());

    for dependency in dependencies {
        if !unique.iter().any(|seen| seen.is_same(&dependency)) {
            unique.push(dependency);
        }
    }

    unique
}

/// Collect the deduplicated peer dependencies of the tree rooted at `package_path`
pub fn gather_peer_dependencies(package_path: &Path, options: &WalkOptions) -> Result<Vec<Dependency>> {
    gather_peer_dependencies_with(&DependencyWalker::new(*options), package_path)
}

/// Same as [`gather_peer_dependencies`] with a caller-supplied walker
pub fn gather_peer_dependencies_with<R: ModuleResolver>(
    walker: &DependencyWalker<R>,
    package_path: &Path,
) -> Result<Vec<Dependency>> {
    let mut collector = PeerDependencyCollector::new();
    walker.walk_from(package_path, &mut collector)?;
    Ok(collector.into_deduplicated())
}
