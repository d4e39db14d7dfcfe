//! Error handling for peercheck
//!
//! This module provides the error enum, result alias and error context
//! utilities used throughout the crate.

pub mod context;
pub mod types;

pub use context::ResultExt;
pub use types::{ErrorSeverity, PeerCheckError, Result};
