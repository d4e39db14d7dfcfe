//! Parsing functionality for package files

pub mod package_json;

pub use package_json::{PackageJsonParser, MANIFEST_FILE};
