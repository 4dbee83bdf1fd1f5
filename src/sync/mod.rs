// soa-devtools: Seed of Andromeda developer tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Submodule syncer.
//!
//! ```text
//! git --version --> GitVersion::parse --> SyncPlan::for_version
//!                                              |
//!            for each GitCommand: GitTool::capture --> OutputClassifier
//!                 Clean    continue
//!                 Warning  log, continue
//!                 Failed   output to stderr, stop with GitError::CommandFailed
//! ```

pub mod classifier;
pub mod plan;
pub mod version;

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::{debug, info, warn};

use crate::error::{GitError, Result};
use crate::tools::ToolContext;
use crate::tools::git::GitTool;

pub use classifier::{
    ExitStatusClassifier, OutputClassifier, PatternClassifier, Verdict, classifier_for,
};
pub use plan::{GitCommand, SyncPlan, SyncStrategy};
pub use version::GitVersion;

/// Runs a [`SyncPlan`] in one working tree.
pub struct SubmoduleSyncer<'a> {
    ctx: &'a ToolContext,
    repo: Option<PathBuf>,
    classifier: Box<dyn OutputClassifier>,
}

impl<'a> SubmoduleSyncer<'a> {
    /// Uses the classifier named by `sync.classifier`.
    #[must_use]
    pub fn new(ctx: &'a ToolContext) -> Self {
        Self {
            ctx,
            repo: None,
            classifier: classifier_for(ctx.config().sync.classifier),
        }
    }

    #[must_use]
    pub fn with_repo(mut self, repo: Option<impl AsRef<Path>>) -> Self {
        self.repo = repo.map(|r| r.as_ref().to_path_buf());
        self
    }

    #[must_use]
    pub fn with_classifier(mut self, classifier: Box<dyn OutputClassifier>) -> Self {
        self.classifier = classifier;
        self
    }

    fn git(&self, args: &[String]) -> GitTool {
        let tool = GitTool::new(args.iter().cloned());
        match self.repo {
            Some(ref repo) => tool.repo(repo),
            None => tool,
        }
    }

    /// Runs `git --version` (also in dry-run mode) and parses it.
    ///
    /// # Errors
    ///
    /// Returns an error if git cannot be found or started.
    pub async fn detect_version(&self) -> Result<Option<GitVersion>> {
        let output = self
            .git(&["--version".to_string()])
            .capture(self.ctx)
            .await
            .context("failed to query git version")?;
        let version = GitVersion::parse(output.stdout());
        debug!(raw = output.stdout().trim(), parsed = ?version, "git version");
        Ok(version)
    }

    /// Detects the git version and selects the matching plan.
    ///
    /// # Errors
    ///
    /// Returns an error if version detection fails.
    pub async fn plan(&self) -> Result<SyncPlan> {
        let version = self.detect_version().await?;
        let plan = SyncPlan::for_version(version);
        if plan.is_empty() {
            match version {
                Some(v) => warn!("git {v} is too old to sync submodules, nothing to do"),
                None => warn!("could not determine the git version, nothing to do"),
            }
        } else if let Some(v) = version {
            info!(strategy = ?plan.strategy(), "Using git {v}");
        }
        Ok(plan)
    }

    /// Runs each command in order, classifying its output.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::CommandFailed`] for the first command the
    /// classifier rejects, or a process error if git cannot run.
    pub async fn run(&self, plan: &SyncPlan) -> Result<()> {
        let dir = self
            .repo
            .as_deref()
            .unwrap_or_else(|| Path::new("."))
            .display()
            .to_string();

        for command in plan.commands() {
            if self.ctx.is_dry_run() {
                info!("[dry-run] Would run in {dir}: {command}");
                continue;
            }

            info!("Running {command}");
            let output = self
                .git(command.args())
                .capture(self.ctx)
                .await
                .with_context(|| format!("`{command}` could not run"))?;

            match self.classifier.classify(&output) {
                Verdict::Clean => debug!(cmd = %command, "clean"),
                Verdict::Warning(lines) => warn!(cmd = %command, "{lines}"),
                Verdict::Failed(reason) => {
                    eprintln!("{}", output.combined());
                    return Err(GitError::CommandFailed {
                        command: command.to_string(),
                        message: reason,
                    }
                    .into());
                }
            }
        }

        info!(classifier = self.classifier.name(), "Submodules synchronized");
        Ok(())
    }
}
