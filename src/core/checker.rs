//! Peer dependency checking
//!
//! Collects peer dependencies from a package tree, looks up what is actually
//! installed for each of them and compares it with the requested range.

use crate::core::collector::gather_peer_dependencies_with;
use crate::core::installed::{is_local_link_version, strip_local_link_suffix, InstalledVersionResolver};
use crate::core::walker::{DependencyWalker, WalkOptions};
use crate::error::{PeerCheckError, Result};
use crate::models::config::{Settings, SortOrder};
use crate::models::package::Dependency;
use crate::models::report::PeerDependencyReport;
use crate::parsers::package_json::{PackageJsonParser, MANIFEST_FILE};
use crate::utils::path_resolver::{ModuleResolver, NodeModuleResolver};
use deno_semver::{RangeBound, Version, VersionBoundKind, VersionReq};
use glob::Pattern;
use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Options for a peer dependency check
#[derive(Debug, Clone)]
pub struct CheckOptions {
    pub walk: WalkOptions,
    /// Let pre-release installs satisfy ranges by their release version
    pub include_prerelease: bool,
    /// Only check peers declared by the root or its direct dependencies
    pub only_root_dependencies: bool,
    pub sort_order: SortOrder,
    /// Glob patterns on peer dependency names to skip
    pub ignore_patterns: Vec<String>,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            walk: WalkOptions::default(),
            include_prerelease: false,
            only_root_dependencies: false,
            sort_order: SortOrder::Depender,
            ignore_patterns: Vec::new(),
        }
    }
}

impl CheckOptions {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            walk: WalkOptions { debug: settings.debug },
            include_prerelease: settings.include_prerelease,
            only_root_dependencies: settings.only_root_dependencies,
            sort_order: settings.sort_order,
            ignore_patterns: settings.ignore_patterns.clone(),
        }
    }
}

/// Runs a full check: walk, filter, annotate, sort
pub struct PeerDependencyChecker<R = NodeModuleResolver> {
    walker: DependencyWalker<R>,
    installed: InstalledVersionResolver<R>,
    options: CheckOptions,
    ignore: Vec<Pattern>,
}

impl PeerDependencyChecker<NodeModuleResolver> {
    /// Checker resolving installed versions from the current directory
    pub fn new(options: CheckOptions) -> Result<Self> {
        Self::with_resolver(NodeModuleResolver, ".", options)
    }
}

impl<R: ModuleResolver + Clone> PeerDependencyChecker<R> {
    /// Checker with a custom resolver, looking up installed versions from `installed_base`
    pub fn with_resolver(resolver: R, installed_base: impl Into<PathBuf>, options: CheckOptions) -> Result<Self> {
        let ignore = options
            .ignore_patterns
            .iter()
            .map(|pattern| Pattern::new(pattern))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self {
            walker: DependencyWalker::with_resolver(resolver.clone(), options.walk),
            installed: InstalledVersionResolver::with_resolver(installed_base, resolver),
            options,
            ignore,
        })
    }

    pub fn options(&self) -> &CheckOptions {
        &self.options
    }

    /// Check every peer dependency reachable from `root_path`
    pub fn check(&self, root_path: &Path) -> Result<PeerDependencyReport> {
        let start_time = Instant::now();

        let mut dependencies = gather_peer_dependencies_with(&self.walker, root_path)?;
        log::debug!("collected {} unique peer dependencies", dependencies.len());

        if self.options.only_root_dependencies {
            dependencies = self.retain_root_dependencies(root_path, dependencies)?;
        }

        dependencies.retain(|dependency| !self.is_ignored(&dependency.name));

        let mut annotated = dependencies
            .into_iter()
            .map(|dependency| self.apply_semver_information(dependency))
            .collect::<Result<Vec<_>>>()?;

        sort_dependencies(&mut annotated, self.options.sort_order);

        let mut report = PeerDependencyReport::new(root_path);
        for dependency in annotated {
            report.add(dependency);
        }
        report.set_duration(start_time.elapsed());

        Ok(report)
    }

    /// Fill in installed version, local link flag and range satisfaction
    pub fn apply_semver_information(&self, mut dependency: Dependency) -> Result<Dependency> {
        let installed_version = self.installed.installed_version(&dependency)?;

        dependency.semver_satisfies = installed_version
            .as_deref()
            .map(|installed| semver_satisfies(installed, &dependency.version, self.options.include_prerelease))
            .unwrap_or(false);
        dependency.is_local_link = installed_version.as_deref().is_some_and(is_local_link_version);
        dependency.installed_version = installed_version;

        Ok(dependency)
    }

    fn is_ignored(&self, name: &str) -> bool {
        self.ignore.iter().any(|pattern| pattern.matches(name))
    }

    fn retain_root_dependencies(&self, root_path: &Path, dependencies: Vec<Dependency>) -> Result<Vec<Dependency>> {
        let manifest_path = root_path.join(MANIFEST_FILE);
        if !manifest_path.is_file() {
            return Err(PeerCheckError::missing_manifest(manifest_path));
        }
        let root = PackageJsonParser::parse_file(&manifest_path)?;

        Ok(dependencies
            .into_iter()
            .filter(|dependency| dependency.depender == root.name || root.has_runtime_dependency(&dependency.depender))
            .collect())
    }
}

/// Whether `installed` falls within the npm range `range`.
///
/// Unparseable versions or ranges and dist-tags never satisfy. A local link
/// suffix is ignored. With `include_prerelease` a pre-release install only has
/// to fall between the bounds of one of the range's alternatives.
pub fn semver_satisfies(installed: &str, range: &str, include_prerelease: bool) -> bool {
    let installed = strip_local_link_suffix(installed);

    let Ok(version) = Version::parse_from_npm(installed) else {
        return false;
    };
    let Ok(req) = VersionReq::parse_from_npm(range) else {
        return false;
    };
    if req.tag().is_some() {
        return false;
    }

    if req.matches(&version) {
        return true;
    }

    include_prerelease
        && !version.pre.is_empty()
        && range.split("||").any(|alternative| prerelease_within(alternative, &version))
}

/// Bounds check of a pre-release against one `||` alternative.
///
/// Upper bounds produced by `^`, `~`, x-ranges and partial versions exclude
/// the pre-releases of the bound itself. An explicit `<X.Y.Z` compares in
/// plain version order.
fn prerelease_within(alternative: &str, version: &Version) -> bool {
    let Ok(req) = VersionReq::parse_from_npm(alternative.trim()) else {
        return false;
    };
    let Some(ranges) = req.range() else {
        return false;
    };
    let explicit_upper = has_explicit_upper_bound(alternative);

    ranges
        .0
        .iter()
        .any(|range| above_start(&range.start, version) && below_end(&range.end, version, explicit_upper))
}

fn above_start(start: &RangeBound, version: &Version) -> bool {
    match start {
        RangeBound::Unbounded => true,
        RangeBound::Version(bound) => match version.cmp(&bound.version) {
            Ordering::Less => false,
            Ordering::Equal => bound.kind == VersionBoundKind::Inclusive,
            Ordering::Greater => true,
        },
    }
}

fn below_end(end: &RangeBound, version: &Version, explicit: bool) -> bool {
    match end {
        RangeBound::Unbounded => true,
        RangeBound::Version(bound)
            if !explicit && bound.kind == VersionBoundKind::Exclusive && bound.version.pre.is_empty() =>
        {
            release_tuple(version) < release_tuple(&bound.version)
        }
        RangeBound::Version(bound) => match version.cmp(&bound.version) {
            Ordering::Less => true,
            Ordering::Equal => bound.kind == VersionBoundKind::Inclusive,
            Ordering::Greater => false,
        },
    }
}

fn release_tuple(version: &Version) -> (u64, u64, u64) {
    (version.major, version.minor, version.patch)
}

/// `<X.Y.Z` or `<=X.Y.Z` with all three parts spelled out
fn has_explicit_upper_bound(alternative: &str) -> bool {
    let compact = alternative.replace("< ", "<").replace("<= ", "<=");
    compact.split_whitespace().any(|token| {
        token
            .strip_prefix('<')
            .map(|rest| rest.trim_start_matches('=').trim_start_matches('v'))
            .is_some_and(is_full_version)
    })
}

fn is_full_version(text: &str) -> bool {
    let release = text.split(['-', '+']).next().unwrap_or(text);
    let parts: Vec<&str> = release.split('.').collect();
    parts.len() == 3
        && parts
            .iter()
            .all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit()))
}

/// Stable sort by the configured grouping
pub fn sort_dependencies(dependencies: &mut [Dependency], order: SortOrder) {
    match order {
        SortOrder::Depender => dependencies.sort_by(|a, b| {
            a.depender.cmp(&b.depender).then_with(|| a.name.cmp(&b.name))
        }),
        SortOrder::Dependee => dependencies.sort_by(|a, b| {
            a.name.cmp(&b.name).then_with(|| a.depender.cmp(&b.depender))
        }),
    }
}
