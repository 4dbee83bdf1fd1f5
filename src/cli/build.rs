// soa-devtools: Seed of Andromeda developer tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `soa-build` arguments.
//!
//! ```text
//! soa-build [-c] [-r] [-d] [-v|-q] [MAKE_ARGS]...
//!   -c  rm -rf build/ first
//!   -r  make clean
//!   -d  make doc
//!   -v  tool output straight to the terminal (default)
//!   -q  drop tool stdout, show stderr on failure
//! ```

use clap::{Args, Parser};

use super::ConfigOverrides;
use super::global::GlobalOptions;
use crate::build::BuildOptions;
use crate::config::loader::ConfigLoader;
use crate::error::Result;

/// Configure and build Seed of Andromeda with cmake and make.
#[derive(Debug, Parser)]
#[command(
    name = "soa-build",
    author,
    version,
    long_about = "soa-build Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Ensures ./build exists, runs `cmake ..` inside it and then make.\n\
                  Anything after the flags is passed to the final make."
)]
pub struct BuildCli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(flatten)]
    pub args: BuildArgs,
}

/// Build flags.
#[derive(Debug, Clone, Default, Args)]
pub struct BuildArgs {
    /// Deletes the build directory before configuring.
    #[arg(short = 'c', long)]
    pub clean: bool,

    /// Runs `make clean` before building.
    #[arg(short = 'r', long)]
    pub rebuild: bool,

    /// Builds the documentation (`make doc`).
    #[arg(short = 'd', long)]
    pub doc: bool,

    /// Shows cmake and make output as it happens (the default).
    #[arg(short = 'v', long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Hides cmake and make output; a failing step still prints its stderr.
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Extra arguments for the final make, e.g. `-j8 install`.
    #[arg(value_name = "MAKE_ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
    pub make_args: Vec<String>,
}

impl BuildArgs {
    #[must_use]
    pub fn options(&self) -> BuildOptions {
        BuildOptions::builder()
            .clean(self.clean)
            .rebuild(self.rebuild)
            .doc(self.doc)
            .verbose(self.verbose)
            .quiet(self.quiet)
            .extra_args(self.make_args.clone())
            .build()
    }
}

impl ConfigOverrides for BuildArgs {
    fn apply(&self, loader: ConfigLoader) -> Result<ConfigLoader> {
        Ok(loader)
    }
}
