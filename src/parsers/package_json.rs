//! Package.json parsing functionality
//!
//! This module reads package.json files into [`PackageManifest`]s and splits
//! their dependency fields into depender-stamped [`Dependency`] records.

use crate::error::{PeerCheckError, Result};
use crate::models::package::{
    Dependency, DependencyEntry, DependencyKind, PackageDependencies, PackageManifest,
};
use serde_json::{Map, Value};
use std::path::Path;

/// Name of the manifest file inside a package directory
pub const MANIFEST_FILE: &str = "package.json";

/// Parser for package.json files
pub struct PackageJsonParser;

impl PackageJsonParser {
    /// Parse package.json content into a PackageManifest
    pub fn parse(content: &str) -> Result<PackageManifest> {
        let json_value: Value = serde_json::from_str(content)
            .map_err(|e| PeerCheckError::json_parse_error(MANIFEST_FILE, e))?;

        let obj = match json_value {
            Value::Object(obj) => obj,
            _ => {
                return Err(PeerCheckError::InvalidPackageJson {
                    path: MANIFEST_FILE.into(),
                    message: "Root value is not an object".into(),
                });
            }
        };

        Ok(PackageManifest {
            name: Self::extract_string_or_empty(&obj, "name"),
            version: Self::extract_string_or_empty(&obj, "version"),
            dependencies: Self::extract_dependencies(&obj, DependencyKind::Runtime),
            dev_dependencies: Self::extract_dependencies(&obj, DependencyKind::Development),
            peer_dependencies: Self::extract_dependencies(&obj, DependencyKind::Peer),
        })
    }

    /// Parse package.json file from a path
    pub fn parse_file(path: &Path) -> Result<PackageManifest> {
        let content = std::fs::read_to_string(path).map_err(PeerCheckError::io_error)?;

        Self::parse(&content).map_err(|e| match e {
            PeerCheckError::JsonParse { source, .. } => PeerCheckError::JsonParse {
                file: path.to_path_buf(),
                source,
            },
            PeerCheckError::InvalidPackageJson { message, .. } => PeerCheckError::InvalidPackageJson {
                path: path.to_path_buf(),
                message,
            },
            _ => e,
        })
    }

    /// Split a manifest's three dependency fields into depender-stamped records
    pub fn classify_dependencies(package_path: &Path, manifest: &PackageManifest) -> PackageDependencies {
        PackageDependencies {
            package_name: manifest.name.clone(),
            dependencies: Self::build_dependencies(package_path, manifest, DependencyKind::Runtime),
            dev_dependencies: Self::build_dependencies(package_path, manifest, DependencyKind::Development),
            peer_dependencies: Self::build_dependencies(package_path, manifest, DependencyKind::Peer),
        }
    }

    fn build_dependencies(
        package_path: &Path,
        manifest: &PackageManifest,
        kind: DependencyKind,
    ) -> Vec<Dependency> {
        manifest
            .entries(kind)
            .iter()
            .map(|entry| Dependency {
                name: entry.name.clone(),
                version: entry.version_spec.clone(),
                depender: manifest.name.clone(),
                depender_path: package_path.to_path_buf(),
                depender_version: manifest.version.clone(),
                ..Default::default()
            })
            .collect()
    }

    /// Extract a dependency field, keeping declaration order
    fn extract_dependencies(obj: &Map<String, Value>, kind: DependencyKind) -> Vec<DependencyEntry> {
        let mut entries = Vec::new();

        if let Some(Value::Object(map)) = obj.get(kind.field_name()) {
            for (name, version) in map {
                if let Some(version_str) = version.as_str() {
                    entries.push(DependencyEntry::new(name.clone(), version_str));
                }
            }
        }

        entries
    }

    fn extract_string_or_empty(obj: &Map<String, Value>, field: &str) -> String {
        match obj.get(field) {
            Some(Value::String(s)) => s.clone(),
            _ => String::new(),
        }
    }
}
