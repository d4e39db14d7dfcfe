//! Dependency tree walking
//!
//! Depth-first traversal of an installed package tree. Starting at a package
//! directory, every reachable runtime dependency is visited once; dev and
//! peer dependencies are reported to the visitor but never followed.

use crate::error::{PeerCheckError, Result};
use crate::models::package::{PackageDependencies, PackageManifest};
use crate::parsers::package_json::{PackageJsonParser, MANIFEST_FILE};
use crate::utils::path_resolver::{ModuleResolver, NodeModuleResolver};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Called once for every package reached by a walk
pub trait DependencyVisitor {
    fn visit(&mut self, package_path: &Path, manifest: &PackageManifest, dependencies: &PackageDependencies);
}

impl<F> DependencyVisitor for F
where
    F: FnMut(&Path, &PackageManifest, &PackageDependencies),
{
    fn visit(&mut self, package_path: &Path, manifest: &PackageManifest, dependencies: &PackageDependencies) {
        self(package_path, manifest, dependencies)
    }
}

/// Options consumed by the walker
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkOptions {
    /// Log every visited manifest and the peer dependencies it declares
    pub debug: bool,
}

/// State owned by one top-level walk
#[derive(Debug, Default)]
pub struct WalkContext {
    visited: HashSet<PathBuf>,
}

impl WalkContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `package_path`; returns false if it was already visited
    fn mark_visited(&mut self, package_path: &Path) -> bool {
        self.visited.insert(visit_key(package_path))
    }

    /// Whether `package_path` has been visited in this walk
    pub fn is_visited(&self, package_path: &Path) -> bool {
        self.visited.contains(&visit_key(package_path))
    }

    /// Number of distinct package directories visited so far
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }
}

/// Canonical form of a package directory, so different spellings of the
/// same directory collapse to one visit
fn visit_key(package_path: &Path) -> PathBuf {
    fs::canonicalize(package_path)
        .or_else(|_| std::path::absolute(package_path))
        .unwrap_or_else(|_| package_path.to_path_buf())
}

/// Walks a package's runtime dependency tree
pub struct DependencyWalker<R = NodeModuleResolver> {
    resolver: R,
    options: WalkOptions,
}

impl DependencyWalker<NodeModuleResolver> {
    /// Create a walker using Node.js module resolution
    pub fn new(options: WalkOptions) -> Self {
        Self::with_resolver(NodeModuleResolver, options)
    }
}

impl<R: ModuleResolver> DependencyWalker<R> {
    /// Create a walker with a custom module resolver
    pub fn with_resolver(resolver: R, options: WalkOptions) -> Self {
        Self { resolver, options }
    }

    pub fn options(&self) -> &WalkOptions {
        &self.options
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Walk the tree rooted at `package_path` with a fresh context
    pub fn walk_from<V: DependencyVisitor>(&self, package_path: &Path, visitor: &mut V) -> Result<WalkContext> {
        let mut context = WalkContext::new();
        self.walk(package_path, visitor, &mut context)?;
        Ok(context)
    }

    /// Visit `package_path` and, recursively, its runtime dependencies.
    ///
    /// Directories already recorded in `context` are skipped silently, which
    /// makes the walk terminate on cycles and visit diamonds once.
    pub fn walk<V: DependencyVisitor>(
        &self,
        package_path: &Path,
        visitor: &mut V,
        context: &mut WalkContext,
    ) -> Result<()> {
        // Mark before descending so a package depending on itself stops here
        if !context.mark_visited(package_path) {
            return Ok(());
        }

        let manifest_path = package_path.join(MANIFEST_FILE);
        if !manifest_path.is_file() {
            return Err(PeerCheckError::missing_manifest(manifest_path));
        }

        let manifest = PackageJsonParser::parse_file(&manifest_path)?;
        let dependencies = PackageJsonParser::classify_dependencies(package_path, &manifest);

        if self.options.debug {
            log::debug!("{}", manifest_path.display());
            for dependency in &dependencies.peer_dependencies {
                log::debug!("  {:?}", dependency);
            }
        }

        visitor.visit(package_path, &manifest, &dependencies);

        for dependency in &dependencies.dependencies {
            if self.resolver.is_core_module(&dependency.name) {
                continue;
            }

            let dependency_path = self
                .resolver
                .resolve_package_dir(package_path, &dependency.name)
                .ok_or_else(|| PeerCheckError::unresolved_dependency(&dependency.name, package_path))?;

            self.walk(&dependency_path, visitor, context)?;
        }

        Ok(())
    }
}

/// Walk the tree rooted at `package_path` using Node.js module resolution
pub fn walk_package_dependency_tree<V: DependencyVisitor>(
    package_path: &Path,
    visitor: &mut V,
    context: &mut WalkContext,
    options: &WalkOptions,
) -> Result<()> {
    DependencyWalker::new(*options).walk(package_path, visitor, context)
}
