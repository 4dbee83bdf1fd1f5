// soa-devtools: Seed of Andromeda developer tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options shared by every binary.
//!
//! # Option Precedence
//!
//! ```text
//! --ini FILE        <- Additional config files (can repeat)
//! --dry             <- Log actions instead of performing them
//! --log-level N     <- Console verbosity (0-6)
//! --file-log-level  <- File verbosity (defaults to --log-level)
//! --log-file FILE   <- Also log to FILE
//!
//! Precedence: CLI flags > SOA_* env > --ini > soa.toml > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

use super::ConfigOverrides;
use crate::config::Config;
use crate::config::loader::ConfigLoader;
use crate::error::Result;
use crate::logging::{LogConfig, LogLevel};

/// Name of the optional configuration file picked up from the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "soa.toml";

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "SOA";

/// Global options available for all binaries.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional TOML configuration file(s).
    /// Can be specified multiple times; later files win.
    #[arg(short = 'i', long = "ini", value_name = "FILE", action = clap::ArgAction::Append)]
    pub inis: Vec<PathBuf>,

    /// Logs every action with a [dry-run] marker instead of performing it.
    #[arg(long)]
    pub dry: bool,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace, 6=dump).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub log_level: Option<u8>,

    /// File log level, defaults to --log-level.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

impl GlobalOptions {
    /// Logging setup derived from the flags alone, so logging is up before
    /// configuration is read.
    #[must_use]
    pub fn log_config(&self) -> LogConfig {
        let console_level = self
            .log_level
            .and_then(LogLevel::from_u8)
            .unwrap_or(LogLevel::INFO);

        let file_level = self
            .file_log_level
            .and_then(LogLevel::from_u8)
            .unwrap_or(console_level);

        LogConfig::builder()
            .with_console_level(console_level)
            .with_file_level(file_level)
            .maybe_with_log_file(self.log_file.as_ref().map(|p| p.display().to_string()))
            .build()
    }

    /// Loader with every layer below the command's own flags.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::ParseError` if an override key is rejected.
    pub fn config_loader(&self) -> Result<ConfigLoader> {
        let mut loader = ConfigLoader::new().add_toml_file_optional(DEFAULT_CONFIG_FILE);
        for ini_path in &self.inis {
            loader = loader.add_toml_file(ini_path);
        }
        self.apply(loader.with_env_prefix(ENV_PREFIX))
    }

    /// Loads configuration with the command's flags applied on top.
    ///
    /// # Errors
    ///
    /// Returns an error if a file is missing or malformed, or if the merged
    /// configuration fails validation.
    pub fn load_config(&self, command: &impl ConfigOverrides) -> Result<Config> {
        command.apply(self.config_loader()?)?.build()
    }
}

impl ConfigOverrides for GlobalOptions {
    fn apply(&self, mut loader: ConfigLoader) -> Result<ConfigLoader> {
        if let Some(level) = self.log_level {
            loader = loader.set("global.output_log_level", i64::from(level))?;
        }
        if let Some(level) = self.file_log_level.or(self.log_level) {
            loader = loader.set("global.file_log_level", i64::from(level))?;
        }
        if let Some(ref path) = self.log_file {
            loader = loader.set("global.log_file", path.display().to_string())?;
        }
        if self.dry {
            loader = loader.set("global.dry", true)?;
        }
        Ok(loader)
    }
}
