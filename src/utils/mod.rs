//! Shared helpers

pub mod path_resolver;

pub use path_resolver::{is_builtin_node_module, ModuleResolver, NodeModuleResolver};
