//! Module path resolution utilities
//!
//! Locates installed packages the way Node.js does: starting at a base
//! directory, look in `node_modules` of that directory and of every ancestor.

use crate::parsers::package_json::MANIFEST_FILE;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Resolves package names to the directory they would be loaded from
pub trait ModuleResolver {
    /// Directory holding `package_name` as seen from `basedir`, if any
    fn resolve_package_dir(&self, basedir: &Path, package_name: &str) -> Option<PathBuf>;

    /// Whether `name` is provided by the runtime itself and never installed
    fn is_core_module(&self, name: &str) -> bool {
        is_builtin_node_module(name)
    }
}

/// Node.js `node_modules` lookup
#[derive(Debug, Clone, Copy, Default)]
pub struct NodeModuleResolver;

impl NodeModuleResolver {
    pub fn new() -> Self {
        Self
    }

    /// Candidate `node_modules` directories for `basedir`, nearest first
    pub fn node_modules_paths(basedir: &Path) -> Vec<PathBuf> {
        let basedir = std::path::absolute(basedir).unwrap_or_else(|_| basedir.to_path_buf());

        basedir
            .ancestors()
            // `node_modules/node_modules` is never searched
            .filter(|dir| dir.file_name() != Some(OsStr::new("node_modules")))
            .map(|dir| dir.join("node_modules"))
            .collect()
    }
}

impl ModuleResolver for NodeModuleResolver {
    fn resolve_package_dir(&self, basedir: &Path, package_name: &str) -> Option<PathBuf> {
        if !is_valid_package_name(package_name) {
            return None;
        }

        // A package without any entry point still counts as long as its
        // manifest is there (e.g. @types/* packages)
        Self::node_modules_paths(basedir)
            .into_iter()
            .map(|node_modules| node_modules.join(package_name))
            .find(|candidate| candidate.join(MANIFEST_FILE).is_file())
    }
}

fn is_valid_package_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('.')
        && !name.starts_with('/')
        && !name.contains('\\')
        && !Path::new(name).is_absolute()
}

/// e.g. `is_builtin_node_module("fs")` or `is_builtin_node_module("node:fs")`
pub fn is_builtin_node_module(name: &str) -> bool {
    let name = name.strip_prefix("node:").unwrap_or(name);
    BUILTIN_NODE_MODULES.contains(&name)
}

/// Module names served by Node.js itself
pub static BUILTIN_NODE_MODULES: &[&str] = &[
    "_http_agent",
    "_http_client",
    "_http_common",
    "_http_incoming",
    "_http_outgoing",
    "_http_server",
    "_stream_duplex",
    "_stream_passthrough",
    "_stream_readable",
    "_stream_transform",
    "_stream_wrap",
    "_stream_writable",
    "_tls_common",
    "_tls_wrap",
    "assert",
    "assert/strict",
    "async_hooks",
    "buffer",
    "child_process",
    "cluster",
    "console",
    "constants",
    "crypto",
    "dgram",
    "diagnostics_channel",
    "dns",
    "dns/promises",
    "domain",
    "events",
    "fs",
    "fs/promises",
    "http",
    "http2",
    "https",
    "inspector",
    "module",
    "net",
    "os",
    "path",
    "path/posix",
    "path/win32",
    "perf_hooks",
    "process",
    "punycode",
    "querystring",
    "readline",
    "readline/promises",
    "repl",
    "stream",
    "stream/consumers",
    "stream/promises",
    "stream/web",
    "string_decoder",
    "sys",
    "timers",
    "timers/promises",
    "tls",
    "trace_events",
    "tty",
    "url",
    "util",
    "util/types",
    "v8",
    "vm",
    "wasi",
    "worker_threads",
    "zlib",
];
