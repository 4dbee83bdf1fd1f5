// soa-devtools: Seed of Andromeda developer tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `make` invocation inside a configured build directory.
//!
//! ```text
//! MakeTool::new(build_dir)
//!   .target("clean") | .target("doc") | .args(extra)
//! Runs: cd <build_dir> && make [args...]
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use futures_util::future::BoxFuture;
use tracing::{debug, info};

use super::{Tool, ToolContext};
use crate::core::process::builder::ProcessBuilder;
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct MakeTool {
    build_dir: PathBuf,
    args: Vec<String>,
}

impl MakeTool {
    #[must_use]
    pub fn new(build_dir: impl AsRef<Path>) -> Self {
        Self {
            build_dir: build_dir.as_ref().to_path_buf(),
            args: Vec::new(),
        }
    }

    #[must_use]
    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.args.push(target.into());
        self
    }

    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn arguments(&self) -> &[String] {
        &self.args
    }

    fn describe(&self) -> String {
        if self.args.is_empty() {
            "make".to_string()
        } else {
            format!("make {}", self.args.join(" "))
        }
    }

    async fn do_make(&self, ctx: &ToolContext) -> Result<()> {
        let description = self.describe();

        if ctx.is_dry_run() {
            info!(
                "[dry-run] Would run in {}: {description}",
                self.build_dir.display()
            );
            return Ok(());
        }

        let builder = ProcessBuilder::resolve(&ctx.config().tools.make, "make")?
            .args(&self.args)
            .cwd(&self.build_dir);

        debug!(cmd = %description, "Running make");

        ctx.apply_output_mode(builder)
            .run_with_cancellation(ctx.cancel_token().clone())
            .await
            .with_context(|| format!("`{description}` failed"))?;

        info!("`{description}` completed successfully");
        Ok(())
    }
}

impl Tool for MakeTool {
    fn name(&self) -> &'static str {
        "make"
    }

    fn run<'a>(&'a self, ctx: &'a ToolContext) -> BoxFuture<'a, Result<()>> {
        Box::pin(self.do_make(ctx))
    }
}
