//! # scan-config
//!
//! Layered configuration loading for SymptoScan using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SYMPTOSCAN_*` prefix, `__` as separator)
//! 2. Project-level `.symptoscan/config.toml`
//! 3. User-level `~/.config/symptoscan/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SYMPTOSCAN_MATCHING__NAME_THRESHOLD` -> `matching.name_threshold`,
//! `SYMPTOSCAN_ADVISOR__API_KEY` -> `advisor.api_key`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use scan_config::ScanConfig;
//!
//! let config = ScanConfig::load_with_dotenv().expect("config");
//! if config.advisor.is_configured() {
//!     println!("advisor model: {}", config.advisor.model);
//! }
//! ```

mod advisor;
mod catalog;
mod dialogue;
mod error;
mod matching;

pub use advisor::AdvisorConfig;
pub use catalog::{CatalogConfig, is_url};
pub use dialogue::DialogueConfig;
pub use error::ConfigError;
pub use matching::MatchingConfig;

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// Name of the project-local config directory.
pub const PROJECT_DIR: &str = ".symptoscan";

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "SYMPTOSCAN_";

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct ScanConfig {
    #[serde(default)]
    pub matching: MatchingConfig,
    #[serde(default)]
    pub dialogue: DialogueConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub advisor: AdvisorConfig,
}

impl ScanConfig {
    /// Load configuration from all sources, rooted at the current directory.
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source fails to parse and
    /// [`ConfigError::InvalidValue`] if a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new("."))
    }

    /// Load configuration with the project config taken from `root/.symptoscan/`.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_from(root: &Path) -> Result<Self, ConfigError> {
        let config: Self = Self::figment_at(root).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain for the current directory.
    pub fn figment() -> Figment {
        Self::figment_at(Path::new("."))
    }

    /// Build the figment provider chain with the project layer under `root`.
    ///
    /// Public so tests can inspect the figment or add providers on top.
    pub fn figment_at(root: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = Self::project_config_path(root);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Check cross-field constraints figment cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.matching.validate()?;
        self.dialogue.validate()?;
        Ok(())
    }

    /// Path to the project config file under `root`.
    #[must_use]
    pub fn project_config_path(root: &Path) -> PathBuf {
        root.join(PROJECT_DIR).join("config.toml")
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("symptoscan").join("config.toml"))
    }
}
