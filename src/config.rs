//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/entities/entities.toml`
//! 3. Local config: a TOML file supplied by the caller
//! 4. Environment variables: `ENTITIES__*` prefix, `__` as separator

use std::path::{Path, PathBuf};

use config::{Config, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::domain::UserPolicy;

/// Errors raised while loading or rendering settings.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("environment override: {0}")]
    Source(#[from] config::ConfigError),

    #[error("serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Raw user policy for intermediate parsing (`None` means "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawUserPolicy {
    pub min_age: Option<i32>,
}

/// Raw settings for intermediate parsing.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub user: RawUserPolicy,
}

/// Unified configuration for entity validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Rules applied when constructing social-media users
    pub user: UserPolicy,
}

/// Get the XDG config directory for entities.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "entities").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("entities.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, SettingsError> {
    let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

impl Settings {
    /// Overlay values win where specified, otherwise keep self.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            user: UserPolicy {
                min_age: overlay.user.min_age.unwrap_or(self.user.min_age),
            },
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_path` - Optional TOML file applied on top of the global config
    ///
    /// A missing global file is skipped; a missing local file is an error.
    pub fn load(local_path: Option<&Path>) -> Result<Self, SettingsError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config
        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!(path = %global_path.display(), "loading global config");
                current = current.merge_with(&load_raw_settings(&global_path)?);
            }
        }

        // 3. Local config
        if let Some(path) = local_path {
            debug!(path = %path.display(), "loading local config");
            current = current.merge_with(&load_raw_settings(path)?);
        }

        // 4. Environment variables
        Self::apply_env_overrides(current)
    }

    /// Apply ENTITIES__* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, SettingsError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("ENTITIES")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        match config.get::<i32>("user.min_age") {
            Ok(val) => {
                debug!(min_age = val, "user.min_age overridden from environment");
                settings.user.min_age = val;
            }
            Err(config::ConfigError::NotFound(_)) => {}
            Err(e) => return Err(e.into()),
        }

        Ok(settings)
    }

    /// Render settings as TOML.
    pub fn to_toml(&self) -> Result<String, SettingsError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
