// soa-devtools: Seed of Andromeda developer tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. soa.toml (cwd, optional)
//! 3. --ini FILE (repeatable)
//! 4. SOA_* env vars
//! 5. CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! SOA_GLOBAL_DRY=true      → global.dry = true
//! SOA_DEPS_OVERWRITE=true  → deps.overwrite = true
//! SOA_SYNC_CLASSIFIER=...  → sync.classifier
//! ```
//!
//! # Example
//!
//! ```toml
//! [build]
//! generator = "Unix Makefiles"
//! definitions = { CMAKE_BUILD_TYPE = "Debug" }
//!
//! [deps]
//! search_dir = "/home/me/src"
//! ```

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ConfigError, Result};

use loader::ConfigLoader;
use types::{BuildConfig, DepsConfig, GlobalConfig, SyncConfig, ToolsConfig};

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Build wrapper options.
    pub build: BuildConfig,
    /// Dependency copier options.
    pub deps: DepsConfig,
    /// Submodule syncer options.
    pub sync: SyncConfig,
    /// Tool paths.
    pub tools: ToolsConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use soa_devtools::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("soa.toml")
    ///     .with_env_prefix("SOA")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Rejects values that would make a tool misbehave silently.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::InvalidValue` naming the offending key.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        let invalid = |section: &str, key: &str, message: &str| ConfigError::InvalidValue {
            section: section.to_string(),
            key: key.to_string(),
            message: message.to_string(),
        };

        if self.build.dir.as_os_str().is_empty() {
            return Err(invalid("build", "dir", "must not be empty"));
        }
        if self.deps.name.is_empty() {
            return Err(invalid("deps", "name", "must not be empty"));
        }
        if self.deps.name.contains(['/', '\\']) {
            return Err(invalid("deps", "name", "must be a single path component"));
        }
        if self.deps.env_var.is_empty() || self.deps.env_var.contains('=') {
            return Err(invalid(
                "deps",
                "env_var",
                "must be a non-empty variable name without '='",
            ));
        }
        if self.deps.dest.as_os_str().is_empty() {
            return Err(invalid("deps", "dest", "must not be empty"));
        }
        Ok(())
    }
}
