//! Core functionality: tree walking, peer dependency collection and checking

pub mod checker;
pub mod collector;
pub mod installed;
pub mod walker;

pub use checker::{semver_satisfies, CheckOptions, PeerDependencyChecker};
pub use collector::{dedupe_dependencies, gather_peer_dependencies, PeerDependencyCollector};
pub use installed::{get_installed_version, InstalledVersionResolver};
pub use walker::{walk_package_dependency_tree, DependencyVisitor, DependencyWalker, WalkContext, WalkOptions};
