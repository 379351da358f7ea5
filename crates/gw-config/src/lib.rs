//! # gw-config
//!
//! Layered configuration loading for the Guardwise staff client using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`GUARDWISE_*` prefix, `__` as separator)
//! 2. Project-level `.guardwise/config.toml`
//! 3. User-level `~/.config/guardwise/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! `GUARDWISE_API__BASE_URL` -> `api.base_url`,
//! `GUARDWISE_POLLING__CONVEYANCE_INTERVAL_SECS` -> `polling.conveyance_interval_secs`.
//! `GUARDWISE_LOG` and `GUARDWISE_PASSWORD` are read by the CLI directly and
//! ignored here.
//!
//! # Usage
//!
//! ```no_run
//! use gw_config::GwConfig;
//!
//! let config = GwConfig::load_with_dotenv().expect("config");
//! println!("platform: {}", config.api.normalized_base_url());
//! ```

mod api;
mod error;
mod location;
mod polling;
mod session;

pub use api::ApiConfig;
pub use error::ConfigError;
pub use location::LocationConfig;
pub use polling::PollingConfig;
pub use session::SessionConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const ENV_PREFIX: &str = "GUARDWISE_";
const PROJECT_CONFIG_PATH: &str = ".guardwise/config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GwConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub polling: PollingConfig,
    #[serde(default)]
    pub location: LocationConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

impl GwConfig {
    /// Load configuration from all sources (TOML files + environment variables)
    /// and validate it.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source cannot be parsed and
    /// `ConfigError::InvalidValue` if a value fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate from an arbitrary figment (tests layer extra providers).
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(PROJECT_CONFIG_PATH);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(
            Env::prefixed(ENV_PREFIX)
                .ignore(&["log", "password"])
                .split("__"),
        )
    }

    /// Check cross-field constraints that serde defaults cannot express.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.api.validate()?;
        self.polling.validate()?;
        self.location.validate()?;
        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("guardwise").join("config.toml"))
    }
}
