// soa-devtools: Seed of Andromeda developer tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Dependency copy command implementation.

use std::path::Path;

use anyhow::Context;
use tracing::info;

use super::interruptible_context;
use crate::config::Config;
use crate::deps::{CopyPlan, DependencySpec, HostPlatform, resolve_root};
use crate::error::Result;

/// Main handler for `vorb-copy`, run from the current directory.
///
/// # Errors
///
/// Returns an error if the dependency root cannot be found or a copy fails.
pub async fn run_deps_command(config: &Config, dry_run: bool) -> Result<()> {
    let cwd = std::env::current_dir().context("failed to read the current directory")?;
    copy_dependency(config, &cwd, dry_run, |key| std::env::var(key).ok()).await
}

/// Resolves the dependency root from `cwd` and copies it into place.
///
/// # Errors
///
/// Returns an error if the dependency root cannot be found or a copy fails.
pub async fn copy_dependency<F>(config: &Config, cwd: &Path, dry_run: bool, env: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    let spec = DependencySpec::from_config(&config.deps, cwd)?;
    let root = resolve_root(&spec, env)?;

    let layout = HostPlatform::current().layout();
    let plan = CopyPlan::new(&root.path, &spec, layout);
    let ctx = interruptible_context(config, dry_run);

    let files = plan.execute(&ctx).await?;
    if !dry_run {
        info!(
            "Copied {files} files from {} into {}",
            root.path.display(),
            spec.dest.display()
        );
    }
    Ok(())
}
