//! Installed version lookup
//!
//! Answers "what version of this package is installed at the top level",
//! independently of which package declared the dependency.

use crate::error::Result;
use crate::models::package::Dependency;
use crate::parsers::package_json::{PackageJsonParser, MANIFEST_FILE};
use crate::utils::path_resolver::{ModuleResolver, NodeModuleResolver};
use std::path::{Path, PathBuf};

/// Marker file yalc leaves in packages it links
pub const LOCAL_LINK_MARKER: &str = "yalc.sig";

/// Appended to the version of a locally linked package
pub const LOCAL_LINK_SUFFIX: &str = "-yalc";

/// Looks up installed versions relative to a fixed base directory
pub struct InstalledVersionResolver<R = NodeModuleResolver> {
    base_dir: PathBuf,
    resolver: R,
}

impl InstalledVersionResolver<NodeModuleResolver> {
    /// Resolve relative to `base_dir`
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self::with_resolver(base_dir, NodeModuleResolver)
    }

    /// Resolve relative to the current working directory
    pub fn from_current_dir() -> Self {
        Self::new(".")
    }
}

impl<R: ModuleResolver> InstalledVersionResolver<R> {
    pub fn with_resolver(base_dir: impl Into<PathBuf>, resolver: R) -> Self {
        Self {
            base_dir: base_dir.into(),
            resolver,
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Installed version of `dependency`, or `None` if it is not installed.
    ///
    /// Locally linked installs carry [`LOCAL_LINK_SUFFIX`].
    pub fn installed_version(&self, dependency: &Dependency) -> Result<Option<String>> {
        let Some(package_dir) = self.resolver.resolve_package_dir(&self.base_dir, &dependency.name) else {
            return Ok(None);
        };

        let manifest = PackageJsonParser::parse_file(&package_dir.join(MANIFEST_FILE))?;

        if package_dir.join(LOCAL_LINK_MARKER).exists() {
            Ok(Some(format!("{}{}", manifest.version, LOCAL_LINK_SUFFIX)))
        } else {
            Ok(Some(manifest.version))
        }
    }
}

/// Installed version of `dependency` as seen from the current directory
pub fn get_installed_version(dependency: &Dependency) -> Result<Option<String>> {
    InstalledVersionResolver::from_current_dir().installed_version(dependency)
}

/// Whether a reported installed version carries the local link suffix
pub fn is_local_link_version(version: &str) -> bool {
    version.ends_with(LOCAL_LINK_SUFFIX)
}

/// Installed version with any local link suffix removed
pub fn strip_local_link_suffix(version: &str) -> &str {
    version.strip_suffix(LOCAL_LINK_SUFFIX).unwrap_or(version)
}
