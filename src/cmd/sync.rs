// soa-devtools: Seed of Andromeda developer tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Submodule sync command implementation.

use super::interruptible_context;
use crate::cli::sync::SyncArgs;
use crate::config::Config;
use crate::error::Result;
use crate::sync::SubmoduleSyncer;

/// Main handler for `sync-submodules`.
///
/// # Errors
///
/// Returns an error if git cannot run or a command's output is classified
/// as a failure.
pub async fn run_sync_command(args: &SyncArgs, config: &Config, dry_run: bool) -> Result<()> {
    let ctx = interruptible_context(config, dry_run);
    let syncer = SubmoduleSyncer::new(&ctx).with_repo(args.repo.as_ref());

    let plan = syncer.plan().await?;
    syncer.run(&plan).await
}
