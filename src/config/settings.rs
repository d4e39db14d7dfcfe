//! Settings validation

use std::path::Path;

use crate::error::{PeerCheckError, Result, ResultExt};
use crate::models::config::Settings;

/// Settings validator for ensuring configuration is valid
pub struct SettingsValidator;

impl SettingsValidator {
    /// Validate settings and return errors if invalid
    pub fn validate(settings: &Settings) -> Result<()> {
        if !settings.root_path.exists() {
            return Err(PeerCheckError::InvalidPath {
                path: settings.root_path.clone(),
            });
        }

        for pattern in &settings.ignore_patterns {
            glob::Pattern::new(pattern).with_context(|| format!("Invalid ignore pattern: {}", pattern))?;
        }

        if let Some(path) = &settings.output_file {
            Self::validate_output_path(path)?;
        }

        Ok(())
    }

    /// Validate that an output path is writable
    fn validate_output_path(path: &Path) -> Result<()> {
        let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) else {
            return Ok(());
        };

        if !parent.exists() {
            return Err(PeerCheckError::InvalidPath {
                path: parent.to_path_buf(),
            });
        }

        // Best effort: only the owner write bit is inspected
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let metadata = std::fs::metadata(parent).with_file_context(parent)?;
            if metadata.permissions().mode() & 0o200 == 0 {
                return Err(PeerCheckError::permission_denied(parent));
            }
        }

        Ok(())
    }
}
