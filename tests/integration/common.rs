//! Fixture helpers: hand-written package.json files and node_modules trees

use serde_json::{json, Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Write `package.json` for `name@version` into `dir`
pub fn write_manifest(dir: &Path, name: &str, version: &str, dependencies: &[(&str, &str)], peers: &[(&str, &str)]) {
    fs::create_dir_all(dir).unwrap();

    let manifest = json!({
        "name": name,
        "version": version,
        "dependencies": to_map(dependencies),
        "peerDependencies": to_map(peers),
    });

    fs::write(dir.join("package.json"), serde_json::to_string_pretty(&manifest).unwrap()).unwrap();
}

/// Install `name@version` under `<parent>/node_modules/<name>` and return its directory
pub fn install(parent: &Path, name: &str, version: &str, dependencies: &[(&str, &str)], peers: &[(&str, &str)]) -> PathBuf {
    let dir = parent.join("node_modules").join(name);
    write_manifest(&dir, name, version, dependencies, peers);
    dir
}

/// Mark an installed package as linked by yalc
pub fn mark_local_link(package_dir: &Path) {
    fs::write(package_dir.join("yalc.sig"), "0123456789abcdef").unwrap();
}

fn to_map(entries: &[(&str, &str)]) -> Value {
    let map: Map<String, Value> = entries
        .iter()
        .map(|(name, specifier)| (name.to_string(), Value::String(specifier.to_string())))
        .collect();
    Value::Object(map)
}
