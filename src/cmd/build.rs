// soa-devtools: Seed of Andromeda developer tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Build command implementation.

use anyhow::Context;

use super::interruptible_context;
use crate::build::{BuildPlan, BuildRunner};
use crate::cli::build::BuildArgs;
use crate::config::Config;
use crate::error::Result;

/// Main handler for `soa-build`.
///
/// # Errors
///
/// Returns an error naming the first build step that failed.
pub async fn run_build_command(args: &BuildArgs, config: &Config, dry_run: bool) -> Result<()> {
    let options = args.options();
    let plan = BuildPlan::from_options(&options);
    tracing::debug!(steps = ?plan.steps(), "Build plan");

    let ctx = interruptible_context(config, dry_run).with_output_mode(options.output_mode());
    tracing::debug!(output = ?ctx.output_mode(), "Tool output");
    let cwd = std::env::current_dir().context("failed to read the current directory")?;

    BuildRunner::new(&ctx, &cwd).run(&plan).await
}
