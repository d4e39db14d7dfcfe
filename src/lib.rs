//! peercheck - peer dependency checker for installed Node.js package trees
//!
//! This library walks a package and every runtime dependency installed beneath
//! it, collects the peer dependencies they declare and checks each one
//! against the version actually installed.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod output;
pub mod parsers;
pub mod utils;

// Re-export commonly used types
pub use crate::core::{
    dedupe_dependencies, gather_peer_dependencies, get_installed_version, walk_package_dependency_tree, CheckOptions,
    DependencyVisitor, DependencyWalker, PeerDependencyChecker, WalkContext, WalkOptions,
};
pub use error::{ErrorSeverity, PeerCheckError, Result, ResultExt};
pub use models::{
    config::Settings,
    package::{Dependency, PackageManifest},
    report::{PeerDependencyReport, PeerDependencyStatus},
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
