//! Local session persistence settings.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

const SESSION_DIR_NAME: &str = ".guardwise";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Directory holding the persisted staff and attendance records.
    /// Empty means `~/.guardwise`.
    #[serde(default)]
    pub dir: String,
}

impl SessionConfig {
    /// Resolve the session directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoSessionDir` when no directory is configured and
    /// the home directory cannot be determined.
    pub fn resolve_dir(&self) -> Result<PathBuf, ConfigError> {
        if !self.dir.trim().is_empty() {
            return Ok(PathBuf::from(self.dir.trim()));
        }
        dirs::home_dir()
            .map(|home| home.join(SESSION_DIR_NAME))
            .ok_or(ConfigError::NoSessionDir)
    }
}
