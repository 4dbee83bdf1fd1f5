// soa-devtools: Seed of Andromeda developer tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `sync-submodules` arguments.

use std::path::PathBuf;

use clap::{Args, Parser};

use super::ConfigOverrides;
use super::global::GlobalOptions;
use crate::config::loader::ConfigLoader;
use crate::config::types::ClassifierKind;
use crate::error::Result;

/// Bring every git submodule up to date.
#[derive(Debug, Parser)]
#[command(name = "sync-submodules", author, version)]
pub struct SyncCli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(flatten)]
    pub args: SyncArgs,
}

/// Syncer flags.
#[derive(Debug, Clone, Default, Args)]
pub struct SyncArgs {
    /// Working tree to sync, the current directory by default.
    #[arg(long, value_name = "DIR")]
    pub repo: Option<PathBuf>,

    /// How git output is judged: exit-status or patterns.
    #[arg(long, value_name = "KIND")]
    pub classifier: Option<ClassifierKind>,
}

impl ConfigOverrides for SyncArgs {
    fn apply(&self, mut loader: ConfigLoader) -> Result<ConfigLoader> {
        if let Some(kind) = self.classifier {
            loader = loader.set("sync.classifier", kind.to_string())?;
        }
        Ok(loader)
    }
}
