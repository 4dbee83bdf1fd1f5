// soa-devtools: Seed of Andromeda developer tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `vorb-copy` arguments.

use std::path::PathBuf;

use clap::{Args, Parser};

use super::ConfigOverrides;
use super::global::GlobalOptions;
use crate::config::loader::ConfigLoader;
use crate::error::Result;

/// Copy prebuilt Vorb headers and libraries into ./deps.
#[derive(Debug, Parser)]
#[command(
    name = "vorb-copy",
    author,
    version,
    after_help = "LOOKUP ORDER:\n\n\
                  1. $VORB_PATH, when set and non-empty\n\
                  2. <search-dir>/Vorb\n\
                  3. <search-dir>/../Vorb\n\n\
                  <search-dir> defaults to the current directory."
)]
pub struct DepsCli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(flatten)]
    pub args: DepsArgs,
}

/// Copier flags.
#[derive(Debug, Clone, Default, Args)]
pub struct DepsArgs {
    /// Directory probed for Vorb (and whose parent is probed next).
    #[arg(long = "search-dir", value_name = "DIR")]
    pub search_dir: Option<PathBuf>,

    /// Destination tree, `deps` by default.
    #[arg(long, value_name = "DIR")]
    pub dest: Option<PathBuf>,

    /// Merges into existing destination directories instead of failing.
    #[arg(short = 'f', long)]
    pub force: bool,
}

impl ConfigOverrides for DepsArgs {
    fn apply(&self, mut loader: ConfigLoader) -> Result<ConfigLoader> {
        if let Some(ref dir) = self.search_dir {
            loader = loader.set("deps.search_dir", dir.display().to_string())?;
        }
        if let Some(ref dest) = self.dest {
            loader = loader.set("deps.dest", dest.display().to_string())?;
        }
        if self.force {
            loader = loader.set("deps.overwrite", true)?;
        }
        Ok(loader)
    }
}
