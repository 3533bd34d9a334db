//! # sig-config
//!
//! Layered configuration loading for sig2moq using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SIG2MOQ_*` prefix, `__` as separator)
//! 2. Project-level `.sig2moq/config.toml`
//! 3. User-level `~/.config/sig2moq/config.toml`
//! 4. Built-in defaults
//!
//! `SIG2MOQ_SNIPPET__MOCK_NAME` maps to `snippet.mock_name`,
//! `SIG2MOQ_DELIVERY__TARGET` to `delivery.target`.
//!
//! ```no_run
//! use sig_config::Sig2MoqConfig;
//!
//! let config = Sig2MoqConfig::load_with_dotenv().expect("config");
//! let style = config.snippet_style();
//! assert_eq!(style.lambda_parameter, config.snippet.lambda_parameter);
//! ```

mod delivery;
mod error;
mod snippet;

pub use delivery::{DeliveryConfig, DeliveryTarget};
pub use error::ConfigError;
pub use snippet::SnippetConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use sig_engine::SnippetStyle;
use std::path::{Path, PathBuf};

/// Project-local config file, relative to the working directory.
pub const PROJECT_CONFIG_PATH: &str = ".sig2moq/config.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Sig2MoqConfig {
    #[serde(default)]
    pub snippet: SnippetConfig,
    #[serde(default)]
    pub delivery: DeliveryConfig,
}

impl Sig2MoqConfig {
    /// Load and validate configuration from TOML files and the environment.
    ///
    /// Does NOT read `.env`; use [`Self::load_with_dotenv`] for that.
    ///
    /// # Errors
    /// Returns `ConfigError` if a source fails to parse or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Like [`Self::load`], after loading `.env` from the working directory
    /// or one of its parents.
    ///
    /// # Errors
    /// Returns `ConfigError` if a source fails to parse or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Load with an explicit config file layered above the usual files and
    /// below the environment.
    ///
    /// Unlike the implicit global and project files, the explicit file must
    /// exist.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidValue` for field `config` if `path` is not
    /// a file, or `ConfigError` if a source fails to parse or a value is invalid.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.is_file() {
            return Err(ConfigError::invalid(
                "config",
                format!("{} is not a readable file", path.display()),
            ));
        }
        let figment = Self::file_layers()
            .merge(Toml::file(path))
            .merge(Self::env_provider());
        Self::from_figment(&figment)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect it or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        Self::file_layers().merge(Self::env_provider())
    }

    /// Extract and validate a config from any figment.
    ///
    /// # Errors
    /// Returns `ConfigError` if extraction fails or a value is invalid.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    /// Returns `ConfigError::InvalidValue` naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.snippet.validate()
    }

    #[must_use]
    pub fn snippet_style(&self) -> SnippetStyle {
        self.snippet.style()
    }

    /// Path to the user-global config file.
    #[must_use]
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("sig2moq").join("config.toml"))
    }

    fn file_layers() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(PROJECT_CONFIG_PATH);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment
    }

    fn env_provider() -> Env {
        Env::prefixed("SIG2MOQ_").split("__")
    }
}
