use super::common::{install, write_manifest};
use peercheck::{
    core::{dedupe_dependencies, gather_peer_dependencies, DependencyWalker, WalkOptions},
    core::collector::PeerDependencyCollector,
    error::PeerCheckError,
};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_same_peer_from_two_dependers_is_kept_twice() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path();

    write_manifest(root, "app", "1.0.0", &[("p", "*"), ("q", "*")], &[]);
    install(root, "p", "1.0.0", &[], &[("react", "^17.0.0")]);
    install(root, "q", "2.0.0", &[], &[("react", "^17.0.0")]);

    let peers = gather_peer_dependencies(root, &WalkOptions::default()).unwrap();

    assert_eq!(peers.len(), 2);
    assert_eq!(peers[0].name, "react");
    assert_eq!(peers[0].depender, "p");
    assert_eq!(peers[0].depender_version, "1.0.0");
    assert_eq!(peers[1].depender, "q");
    assert_eq!(peers[1].depender_version, "2.0.0");
}

#[test]
fn test_root_and_its_dependency_declare_the_same_peer() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path();

    write_manifest(root, "p", "1.0.0", &[("q", "^2.0.0")], &[("react", "^17.0.0")]);
    install(root, "q", "2.0.0", &[], &[("react", "^17.0.0")]);

    let peers = gather_peer_dependencies(root, &WalkOptions::default()).unwrap();
    let dependers: Vec<(&str, &str)> = peers
        .iter()
        .map(|peer| (peer.depender.as_str(), peer.depender_version.as_str()))
        .collect();

    assert_eq!(peers.len(), 2);
    assert!(peers.iter().all(|peer| peer.name == "react" && peer.version == "^17.0.0"));
    assert_eq!(dependers, vec![("p", "1.0.0"), ("q", "2.0.0")]);
}

#[test]
fn test_package_reached_twice_contributes_once() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path();

    write_manifest(root, "app", "1.0.0", &[("a", "*"), ("b", "*")], &[]);
    install(root, "a", "1.0.0", &[("shared", "*")], &[]);
    install(root, "b", "1.0.0", &[("shared", "*")], &[]);
    install(root, "shared", "3.1.0", &[], &[("lodash", "^4.0.0")]);

    let peers = gather_peer_dependencies(root, &WalkOptions::default()).unwrap();

    assert_eq!(peers.len(), 1);
    assert_eq!(peers[0].name, "lodash");
    assert_eq!(peers[0].version, "^4.0.0");
    assert_eq!(peers[0].depender, "shared");
}

#[test]
fn test_identical_declarations_in_different_directories_collapse() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path();

    // Two copies of the same package version in different directories
    write_manifest(root, "app", "1.0.0", &[("a", "*"), ("b", "*")], &[]);
    let a = install(root, "a", "1.0.0", &[("plugin", "*")], &[]);
    let b = install(root, "b", "1.0.0", &[("plugin", "*")], &[]);
    install(&a, "plugin", "1.0.0", &[], &[("react", ">=16")]);
    install(&b, "plugin", "1.0.0", &[], &[("react", ">=16")]);

    let mut collector = PeerDependencyCollector::new();
    DependencyWalker::new(WalkOptions::default())
        .walk_from(root, &mut collector)
        .unwrap();

    assert_eq!(collector.peer_dependencies().len(), 2);

    let unique = collector.into_deduplicated();
    assert_eq!(unique.len(), 1);
    assert_eq!(unique[0].depender_path, a.join("node_modules").join("plugin"));
}

#[test]
fn test_discovery_order_is_preserved() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path();

    write_manifest(root, "app", "1.0.0", &[("a", "*"), ("b", "*")], &[("typescript", ">=4")]);
    install(root, "a", "1.0.0", &[], &[("react", "^18.0.0"), ("react-dom", "^18.0.0")]);
    install(root, "b", "1.0.0", &[], &[("vue", "^3.0.0")]);

    let peers = gather_peer_dependencies(root, &WalkOptions::default()).unwrap();
    let names: Vec<&str> = peers.iter().map(|dep| dep.name.as_str()).collect();

    assert_eq!(names, vec!["typescript", "react", "react-dom", "vue"]);
}

#[test]
fn test_dedupe_is_idempotent_on_gathered_output() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path();

    write_manifest(root, "app", "1.0.0", &[("a", "*"), ("b", "*")], &[]);
    install(root, "a", "1.0.0", &[("b", "*")], &[("react", "^18.0.0")]);
    install(root, "b", "1.0.0", &[("a", "*")], &[("react", "^18.0.0")]);

    let once = gather_peer_dependencies(root, &WalkOptions::default()).unwrap();
    let twice = dedupe_dependencies(once.clone());

    assert_eq!(once.len(), twice.len());
    for (left, right) in once.iter().zip(&twice) {
        assert!(left.is_same(right));
    }
}

#[test]
fn test_no_peers_yields_empty_list() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path();

    write_manifest(root, "app", "1.0.0", &[("a", "*")], &[]);
    install(root, "a", "1.0.0", &[], &[]);

    assert!(gather_peer_dependencies(root, &WalkOptions::default()).unwrap().is_empty());
}

#[test]
fn test_gather_without_manifest_fails() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path().join("nothing-here");
    fs::create_dir_all(&root).unwrap();

    let result = gather_peer_dependencies(&root, &WalkOptions::default());
    assert!(matches!(result, Err(PeerCheckError::MissingManifest { .. })));
}
