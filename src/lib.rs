// soa-devtools: Seed of Andromeda developer tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!      soa-build        vorb-copy        sync-submodules
//!          |                |                  |
//!          +----------------+------------------+
//!          v                                   v
//!       cli (clap)                      cmd (handlers)
//!          |                                   |
//!          +-----------------+-----------------+
//!                            v
//!              ,---------------------------,
//!              |          config           |
//!              |   TOML, layered settings  |
//!              '--+-----------+--------+---'
//!                 |           |        |
//!                 v           v        v
//!              build        deps      sync
//!            BuildPlan   CopyPlan   SyncPlan
//!                 |           |        |
//!                 v           |        v
//!               tools         |      tools
//!             cmake/make      |       git
//!                             v
//!                      utility::fs::copy
//!
//!   +-----------------------------------------+
//!   |  core   process runner, cancellation    |
//!   +-----------------------------------------+
//!   |  foundation   error, logging, utility   |
//!   +-----------------------------------------+
//! ```

use std::process::ExitCode;

pub mod build;
pub mod cli;
pub mod cmd;
pub mod config;
pub mod core;
pub mod deps;
pub mod error;
pub mod logging;
pub mod sync;
pub mod tools;
pub mod utility;

/// Maps a command result to the process exit code, printing the error
/// chain to stderr on failure.
#[must_use]
pub fn exit_code(result: error::Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
