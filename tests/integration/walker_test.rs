use super::common::{install, write_manifest};
use peercheck::{
    core::{walk_package_dependency_tree, DependencyWalker, WalkContext, WalkOptions},
    error::PeerCheckError,
    models::package::{PackageDependencies, PackageManifest},
};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

/// Walk `root` and return the names of the visited packages in visit order
fn visit_order(root: &Path) -> Vec<String> {
    let mut visited = Vec::new();
    let mut visitor = |_: &Path, manifest: &PackageManifest, _: &PackageDependencies| {
        visited.push(manifest.name.clone());
    };

    DependencyWalker::new(WalkOptions::default())
        .walk_from(root, &mut visitor)
        .unwrap();

    visited
}

#[test]
fn test_diamond_visits_shared_dependency_once() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path();

    write_manifest(root, "app", "1.0.0", &[("a", "^1.0.0"), ("b", "^1.0.0")], &[]);
    install(root, "a", "1.0.0", &[("c", "^1.0.0")], &[]);
    install(root, "b", "1.0.0", &[("c", "^1.0.0")], &[]);
    install(root, "c", "1.0.0", &[], &[]);

    assert_eq!(visit_order(root), vec!["app", "a", "c", "b"]);
}

#[test]
fn test_cycle_terminates() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path();

    write_manifest(root, "app", "1.0.0", &[("a", "*")], &[]);
    install(root, "a", "1.0.0", &[("b", "*")], &[]);
    install(root, "b", "1.0.0", &[("a", "*")], &[]);

    assert_eq!(visit_order(root), vec!["app", "a", "b"]);
}

#[test]
fn test_self_dependency_terminates() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path();

    write_manifest(root, "app", "1.0.0", &[("a", "*")], &[]);
    install(root, "a", "1.0.0", &[("a", "*")], &[]);

    assert_eq!(visit_order(root), vec!["app", "a"]);
}

#[test]
fn test_builtin_modules_are_skipped() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path();

    write_manifest(root, "app", "1.0.0", &[("fs", "*"), ("node:path", "*"), ("a", "*")], &[]);
    install(root, "a", "1.0.0", &[], &[]);

    assert_eq!(visit_order(root), vec!["app", "a"]);
}

#[test]
fn test_dev_and_peer_dependencies_are_not_followed() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path();

    fs::write(
        root.join("package.json"),
        r#"{
            "name": "app",
            "version": "1.0.0",
            "devDependencies": { "jest": "^29.0.0" },
            "peerDependencies": { "react": "^18.0.0" }
        }"#,
    )
    .unwrap();

    // Neither jest nor react is installed, yet the walk succeeds
    assert_eq!(visit_order(root), vec!["app"]);
}

#[test]
fn test_unresolved_dependency_fails() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path();

    write_manifest(root, "app", "1.0.0", &[("ghost", "^1.0.0")], &[]);

    let mut visitor = |_: &Path, _: &PackageManifest, _: &PackageDependencies| {};
    let err = DependencyWalker::new(WalkOptions::default())
        .walk_from(root, &mut visitor)
        .unwrap_err();

    match err {
        PeerCheckError::UnresolvedDependency { name, from } => {
            assert_eq!(name, "ghost");
            assert_eq!(from, root);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_missing_manifest_reports_exact_path() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path().join("empty");
    fs::create_dir_all(&root).unwrap();

    let mut visitor = |_: &Path, _: &PackageManifest, _: &PackageDependencies| {};
    let err = DependencyWalker::new(WalkOptions::default())
        .walk_from(&root, &mut visitor)
        .unwrap_err();

    match err {
        PeerCheckError::MissingManifest { path } => assert_eq!(path, root.join("package.json")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_malformed_manifest_fails() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path();

    write_manifest(root, "app", "1.0.0", &[("broken", "*")], &[]);
    let broken = root.join("node_modules").join("broken");
    fs::create_dir_all(&broken).unwrap();
    fs::write(broken.join("package.json"), "{ not json").unwrap();

    let mut visitor = |_: &Path, _: &PackageManifest, _: &PackageDependencies| {};
    let err = DependencyWalker::new(WalkOptions::default())
        .walk_from(root, &mut visitor)
        .unwrap_err();

    assert!(matches!(err, PeerCheckError::JsonParse { .. }));
}

#[test]
fn test_nested_install_shadows_top_level() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path();

    write_manifest(root, "app", "1.0.0", &[("a", "*"), ("c", "^1.0.0")], &[]);
    let a = install(root, "a", "1.0.0", &[("c", "^2.0.0")], &[]);
    install(&a, "c", "2.0.0", &[], &[]);
    install(root, "c", "1.0.0", &[], &[]);

    let mut versions = Vec::new();
    let mut visitor = |_: &Path, manifest: &PackageManifest, _: &PackageDependencies| {
        versions.push(format!("{}@{}", manifest.name, manifest.version));
    };
    DependencyWalker::new(WalkOptions::default())
        .walk_from(root, &mut visitor)
        .unwrap();

    assert_eq!(versions, vec!["app@1.0.0", "a@1.0.0", "c@2.0.0", "c@1.0.0"]);
}

#[test]
fn test_scoped_packages_resolve() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path();

    write_manifest(root, "app", "1.0.0", &[("@scope/lib", "^1.0.0")], &[]);
    install(root, "@scope/lib", "1.2.3", &[], &[]);

    assert_eq!(visit_order(root), vec!["app", "@scope/lib"]);
}

#[test]
fn test_shared_context_skips_other_spellings() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path();

    write_manifest(root, "app", "1.0.0", &[("a", "*")], &[]);
    install(root, "a", "1.0.0", &[], &[]);

    let mut count = 0;
    let mut visitor = |_: &Path, _: &PackageManifest, _: &PackageDependencies| count += 1;
    let mut context = WalkContext::new();
    let options = WalkOptions::default();

    walk_package_dependency_tree(root, &mut visitor, &mut context, &options).unwrap();
    walk_package_dependency_tree(&root.join("."), &mut visitor, &mut context, &options).unwrap();
    walk_package_dependency_tree(&root.join("node_modules").join("a"), &mut visitor, &mut context, &options).unwrap();

    assert_eq!(count, 2);
    assert_eq!(context.visited_count(), 2);
    assert!(context.is_visited(&root.join("node_modules").join("..").join("node_modules").join("a")));
}

#[test]
fn test_debug_walk_matches_plain_walk() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path();

    write_manifest(root, "app", "1.0.0", &[("a", "*")], &[("react", "^18.0.0")]);
    install(root, "a", "1.0.0", &[], &[("react", "^17.0.0")]);

    let mut plain = 0;
    let mut debug = 0;
    DependencyWalker::new(WalkOptions { debug: false })
        .walk_from(root, &mut |_: &Path, _: &PackageManifest, _: &PackageDependencies| plain += 1)
        .unwrap();
    DependencyWalker::new(WalkOptions { debug: true })
        .walk_from(root, &mut |_: &Path, _: &PackageManifest, _: &PackageDependencies| debug += 1)
        .unwrap();

    assert_eq!(plain, 2);
    assert_eq!(plain, debug);
}
