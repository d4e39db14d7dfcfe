use super::common::{install, write_manifest};
use clap::Parser;
use peercheck::cli::{args::SortOrder, Args, Command};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command as Process, Output};
use tempfile::tempdir;

/// Run the binary inside `dir` with an isolated home directory
fn run(dir: &Path, args: &[&str]) -> Output {
    Process::new(env!("CARGO_BIN_EXE_peercheck"))
        .args(args)
        .current_dir(dir)
        .env("HOME", dir)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn satisfied_project(root: &Path) {
    write_manifest(root, "app", "1.0.0", &[("plugin", "*")], &[]);
    install(root, "plugin", "1.0.0", &[], &[("core", "^2.0.0")]);
    install(root, "core", "2.4.1", &[], &[]);
}

fn broken_project(root: &Path) {
    write_manifest(root, "app", "1.0.0", &[("plugin", "*")], &[]);
    install(root, "plugin", "1.0.0", &[], &[("core", "^2.0.0")]);
}

#[test]
fn test_cli_args_parsing() {
    let args = Args::parse_from(["peercheck", "--path", "/test/path", "--order-by", "dependee", "--debug"]);

    assert_eq!(args.path, Some(PathBuf::from("/test/path")));
    assert_eq!(args.order_by, Some(SortOrder::Dependee));
    assert!(args.debug);
    assert!(matches!(Command::from_args(args), Command::Check(_)));
}

#[test]
fn test_cli_config_option() {
    let args = Args::parse_from(["peercheck", "--config", "custom-config.toml"]);
    assert_eq!(args.config, Some(PathBuf::from("custom-config.toml")));
}

#[test]
fn test_exit_zero_when_satisfied() {
    let temp_dir = tempdir().unwrap();
    satisfied_project(temp_dir.path());

    let output = run(temp_dir.path(), &["--no-colors"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("All peer dependencies are satisfied"));
}

#[test]
fn test_exit_one_when_peer_missing() {
    let temp_dir = tempdir().unwrap();
    broken_project(temp_dir.path());

    let output = run(temp_dir.path(), &["--no-colors", "--quiet"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("[MISSING] core@^2.0.0 required by plugin@1.0.0"));
}

#[test]
fn test_ignore_flag_clears_problem() {
    let temp_dir = tempdir().unwrap();
    broken_project(temp_dir.path());

    let output = run(temp_dir.path(), &["--ignore", "co*"]);
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_json_output_file() {
    let temp_dir = tempdir().unwrap();
    satisfied_project(temp_dir.path());

    let output = run(temp_dir.path(), &["--output", "json", "--output-file", "peers.json"]);
    assert_eq!(output.status.code(), Some(0));

    let written = fs::read_to_string(temp_dir.path().join("peers.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(value["summary"]["satisfied"], 1);
}

#[test]
fn test_missing_manifest_exits_with_error() {
    let temp_dir = tempdir().unwrap();

    let output = run(temp_dir.path(), &[]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("package.json missing at"));
}

#[test]
fn test_missing_config_file_is_critical() {
    let temp_dir = tempdir().unwrap();
    satisfied_project(temp_dir.path());

    let output = run(temp_dir.path(), &["--config", "absent.toml"]);
    assert_eq!(output.status.code(), Some(2));
}

#[cfg(unix)]
#[test]
fn test_unwritable_output_directory_fails_the_run() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = tempdir().unwrap();
    satisfied_project(temp_dir.path());
    let locked = temp_dir.path().join("locked");
    fs::create_dir(&locked).unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o555)).unwrap();

    let output = run(temp_dir.path(), &["--output-file", "locked/report.txt"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("permission denied"));
    assert!(!locked.join("report.txt").exists());
}

#[test]
fn test_config_file_in_working_directory_is_used() {
    let temp_dir = tempdir().unwrap();
    broken_project(temp_dir.path());
    fs::write(temp_dir.path().join(".peercheck.toml"), "ignore_patterns = [\"core\"]\n").unwrap();

    let output = run(temp_dir.path(), &[]);
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_init_writes_default_config() {
    let temp_dir = tempdir().unwrap();

    let output = run(temp_dir.path(), &["--init"]);
    assert_eq!(output.status.code(), Some(0));

    let config = temp_dir.path().join(".peercheck.toml");
    assert!(config.is_file());

    // A second run leaves the existing file alone
    fs::write(&config, "debug = true\n").unwrap();
    let output = run(temp_dir.path(), &["--init"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(fs::read_to_string(&config).unwrap(), "debug = true\n");
}
