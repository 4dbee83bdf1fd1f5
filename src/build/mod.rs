// soa-devtools: Seed of Andromeda developer tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Build wrapper: flags --> ordered steps --> cmake/make.
//!
//! ```text
//! BuildOptions { clean, rebuild, doc, verbose, quiet, extra_args }
//!        |
//!        v  BuildPlan::from_options (pure)
//! [RemoveBuildDir]   if clean (skipped at run time when absent)
//!  CreateBuildDir
//!  Configure         cmake ..
//! [MakeClean]        if rebuild
//! [MakeDoc]          if doc
//!  Make(args)        make [extra args]
//!        |
//!        v  BuildRunner::run
//!   first failure aborts the rest
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::Context;
use bon::Builder;
use tokio::fs;
use tracing::{debug, info};

use crate::config::types::BuildConfig;
use crate::error::{FsError, Result};
use crate::tools::cmake::CmakeTool;
use crate::tools::make::MakeTool;
use crate::tools::{OutputMode, Tool, ToolContext};

/// Flags accepted by the build wrapper.
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder)]
pub struct BuildOptions {
    /// Delete the build directory before configuring.
    #[builder(default)]
    pub clean: bool,
    /// Run `make clean` before building.
    #[builder(default)]
    pub rebuild: bool,
    /// Build documentation (`make doc`) before the main build.
    #[builder(default)]
    pub doc: bool,
    /// Pass tool output straight through to the terminal (the default).
    #[builder(default)]
    pub verbose: bool,
    /// Drop tool stdout; stderr is still shown when a step fails.
    #[builder(default)]
    pub quiet: bool,
    /// Extra arguments for the final `make`; each entry may hold several
    /// whitespace-separated words.
    #[builder(default)]
    pub extra_args: Vec<String>,
}

impl BuildOptions {
    /// `verbose` wins over `quiet`.
    #[must_use]
    pub const fn output_mode(&self) -> OutputMode {
        if self.quiet && !self.verbose {
            OutputMode::Quiet
        } else {
            OutputMode::Passthrough
        }
    }

    /// Extra make arguments split into individual words.
    #[must_use]
    pub fn make_args(&self) -> Vec<String> {
        self.extra_args
            .iter()
            .flat_map(|arg| arg.split_whitespace())
            .map(str::to_string)
            .collect()
    }
}

/// One step of the build sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildStep {
    RemoveBuildDir,
    CreateBuildDir,
    Configure,
    MakeClean,
    MakeDoc,
    Make(Vec<String>),
}

impl fmt::Display for BuildStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RemoveBuildDir => write!(f, "remove build directory"),
            Self::CreateBuildDir => write!(f, "create build directory"),
            Self::Configure => write!(f, "configure"),
            Self::MakeClean => write!(f, "make clean"),
            Self::MakeDoc => write!(f, "make doc"),
            Self::Make(args) if args.is_empty() => write!(f, "make"),
            Self::Make(args) => write!(f, "make {}", args.join(" ")),
        }
    }
}

/// Ordered build steps derived from [`BuildOptions`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildPlan {
    steps: Vec<BuildStep>,
}

impl BuildPlan {
    #[must_use]
    pub fn from_options(options: &BuildOptions) -> Self {
        let mut steps = Vec::with_capacity(6);
        if options.clean {
            steps.push(BuildStep::RemoveBuildDir);
        }
        steps.push(BuildStep::CreateBuildDir);
        steps.push(BuildStep::Configure);
        if options.rebuild {
            steps.push(BuildStep::MakeClean);
        }
        if options.doc {
            steps.push(BuildStep::MakeDoc);
        }
        steps.push(BuildStep::Make(options.make_args()));
        Self { steps }
    }

    #[must_use]
    pub fn steps(&self) -> &[BuildStep] {
        &self.steps
    }
}

/// Executes a [`BuildPlan`] against a build directory.
pub struct BuildRunner<'a> {
    ctx: &'a ToolContext,
    build_dir: PathBuf,
    settings: &'a BuildConfig,
}

impl<'a> BuildRunner<'a> {
    /// `root` is the directory the build directory lives in (normally cwd).
    #[must_use]
    pub fn new(ctx: &'a ToolContext, root: &Path) -> Self {
        let settings = &ctx.config().build;
        Self {
            ctx,
            build_dir: root.join(&settings.dir),
            settings,
        }
    }

    #[must_use]
    pub fn build_dir(&self) -> &Path {
        &self.build_dir
    }

    /// Runs every step in order, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Returns the first step's error, with the step named in the context.
    pub async fn run(&self, plan: &BuildPlan) -> Result<()> {
        let mut wiped = false;
        for step in plan.steps() {
            debug!(step = %step, "build step");
            self.run_step(step, wiped)
                .await
                .with_context(|| format!("build step '{step}' failed"))?;
            wiped |= *step == BuildStep::RemoveBuildDir;
        }
        info!(build = %self.build_dir.display(), "Build completed successfully");
        Ok(())
    }

    async fn run_step(&self, step: &BuildStep, wiped: bool) -> Result<()> {
        match step {
            BuildStep::RemoveBuildDir => self.remove_build_dir().await,
            BuildStep::CreateBuildDir => self.create_build_dir(wiped).await,
            BuildStep::Configure => {
                CmakeTool::new(&self.build_dir)
                    .source_dir(&self.settings.source)
                    .generator(self.settings.generator.clone())
                    .definitions(self.settings.definitions.clone())
                    .run(self.ctx)
                    .await
            }
            BuildStep::MakeClean => {
                MakeTool::new(&self.build_dir)
                    .target(&self.settings.clean_target)
                    .run(self.ctx)
                    .await
            }
            BuildStep::MakeDoc => {
                MakeTool::new(&self.build_dir)
                    .target(&self.settings.doc_target)
                    .run(self.ctx)
                    .await
            }
            BuildStep::Make(args) => {
                MakeTool::new(&self.build_dir)
                    .args(args.iter().cloned())
                    .run(self.ctx)
                    .await
            }
        }
    }

    async fn remove_build_dir(&self) -> Result<()> {
        let dir = &self.build_dir;
        if !dir.exists() {
            debug!(dir = %dir.display(), "build directory absent, nothing to clean");
            return Ok(());
        }
        if self.ctx.is_dry_run() {
            info!("[dry-run] Would remove {}", dir.display());
            return Ok(());
        }
        fs::remove_dir_all(dir)
            .await
            .map_err(|e| FsError::from_io(dir, e))?;
        info!(dir = %dir.display(), "Removed build directory");
        Ok(())
    }

    /// `wiped` means an earlier step removed the directory, which a dry run
    /// only pretended to do.
    async fn create_build_dir(&self, wiped: bool) -> Result<()> {
        let dir = &self.build_dir;
        if self.ctx.is_dry_run() {
            if wiped || !dir.is_dir() {
                info!("[dry-run] Would create {}", dir.display());
            }
            return Ok(());
        }
        fs::create_dir_all(dir)
            .await
            .map_err(|e| FsError::from_io(dir, e))?;
        Ok(())
    }
}
