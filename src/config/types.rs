// soa-devtools: Seed of Andromeda developer tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types.
//!
//! ```text
//! Config: GlobalConfig, BuildConfig, DepsConfig, SyncConfig, ToolsConfig
//! ClassifierKind: ExitStatus | Patterns (default)
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::logging::LogLevel;

/// Global options.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log planned actions without touching the filesystem or spawning tools.
    pub dry: bool,
    /// Log level for console output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

/// Build wrapper options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Build directory, relative to the working directory.
    pub dir: PathBuf,
    /// Source directory passed to cmake, relative to the build directory.
    pub source: PathBuf,
    /// `CMake` generator (`-G`), cmake's default when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generator: Option<String>,
    /// Extra `-D` cache entries.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub definitions: BTreeMap<String, String>,
    /// Make target used by `--rebuild`.
    pub clean_target: String,
    /// Make target used by `--doc`.
    pub doc_target: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("build"),
            source: PathBuf::from(".."),
            generator: None,
            definitions: BTreeMap::new(),
            clean_target: "clean".to_string(),
            doc_target: "doc".to_string(),
        }
    }
}

/// Dependency copier options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DepsConfig {
    /// Dependency name; also the directory name searched for.
    pub name: String,
    /// Environment variable holding an explicit dependency root.
    pub env_var: String,
    /// Directory whose child (then parent's child) is probed for `name`.
    /// Defaults to the working directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_dir: Option<PathBuf>,
    /// Local destination tree.
    pub dest: PathBuf,
    /// Merge into existing destination directories instead of failing.
    pub overwrite: bool,
}

impl Default for DepsConfig {
    fn default() -> Self {
        Self {
            name: "Vorb".to_string(),
            env_var: "VORB_PATH".to_string(),
            search_dir: None,
            dest: PathBuf::from("deps"),
            overwrite: false,
        }
    }
}

/// Which output classifier the submodule syncer uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClassifierKind {
    /// Only a non-zero exit status is a failure.
    ExitStatus,
    /// Exit status plus `fatal:`/`error:`/`warning:` line prefixes.
    #[default]
    Patterns,
}

impl std::fmt::Display for ClassifierKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExitStatus => write!(f, "exit-status"),
            Self::Patterns => write!(f, "patterns"),
        }
    }
}

impl std::str::FromStr for ClassifierKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "exit-status" | "exit_status" => Ok(Self::ExitStatus),
            "patterns" => Ok(Self::Patterns),
            _ => Err(ConfigError::InvalidValue {
                section: "sync".to_string(),
                key: "classifier".to_string(),
                message: format!("expected 'exit-status' or 'patterns', got '{s}'"),
            }),
        }
    }
}

/// Submodule syncer options.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SyncConfig {
    pub classifier: ClassifierKind,
}

/// Explicit tool paths. Empty means "resolve on PATH".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolsConfig {
    pub cmake: PathBuf,
    pub make: PathBuf,
    pub git: PathBuf,
}
