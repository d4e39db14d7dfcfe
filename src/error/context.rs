//! Error context utilities for peercheck
//!
//! This module provides utilities for adding context to errors.

use crate::error::{PeerCheckError, Result};
use std::path::Path;

/// Extension trait for Result to add context to errors
pub trait ResultExt<T, E> {
    /// Add context to an error with a custom message
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display;

    /// Add file context to an error
    fn with_file_context<P: AsRef<Path>>(self, path: P) -> Result<T>;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display,
    {
        self.map_err(|err| PeerCheckError::Check {
            message: format!("{}: {}", context(), err),
        })
    }

    fn with_file_context<P: AsRef<Path>>(self, path: P) -> Result<T> {
        self.map_err(|err| {
            let dyn_err: &(dyn std::error::Error + 'static) = &err;
            if let Some(io_err) = dyn_err.downcast_ref::<std::io::Error>() {
                if io_err.kind() == std::io::ErrorKind::PermissionDenied {
                    return PeerCheckError::permission_denied(path.as_ref());
                }
            }

            PeerCheckError::Check {
                message: format!("{}: {}", path.as_ref().display(), err),
            }
        })
    }
}
