// soa-devtools: Seed of Andromeda developer tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git command runner with captured output.
//!
//! ```text
//! GitTool::new(["submodule", "update", "--recursive"])
//!   .repo(dir)
//!   .capture(ctx) --> ProcessOutput (any exit code)
//! ```
//!
//! Unlike cmake/make, git output is always captured and the exit code is
//! returned rather than treated as an error, so callers can classify it.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::ToolContext;
use crate::core::process::builder::{ProcessBuilder, ProcessFlags, ProcessOutput};
use crate::error::ProcessError;

/// Git invocation, e.g. `git fetch -a`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitTool {
    args: Vec<String>,
    repo: Option<PathBuf>,
}

impl GitTool {
    #[must_use]
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
            repo: None,
        }
    }

    /// Working tree to run in (defaults to the current directory).
    #[must_use]
    pub fn repo(mut self, path: impl AsRef<Path>) -> Self {
        self.repo = Some(path.as_ref().to_path_buf());
        self
    }

    #[must_use]
    pub fn arguments(&self) -> &[String] {
        &self.args
    }

    /// Runs git and returns its captured output whatever the exit code.
    ///
    /// This always executes, dry-run or not; callers decide whether a
    /// command is safe to run during a dry run.
    ///
    /// # Errors
    ///
    /// Returns `ExecutableNotFound` when git is missing, `Interrupted` on
    /// cancellation, or a spawn/wait failure.
    pub async fn capture(&self, ctx: &ToolContext) -> Result<ProcessOutput, ProcessError> {
        let mut builder = ProcessBuilder::resolve(&ctx.config().tools.git, "git")?
            .args(&self.args)
            .capture_output()
            .flag(ProcessFlags::ALLOW_FAILURE);
        if let Some(ref repo) = self.repo {
            builder = builder.cwd(repo);
        }

        debug!(cmd = %self, "Running git");

        builder
            .run_with_cancellation(ctx.cancel_token().clone())
            .await
    }
}

impl std::fmt::Display for GitTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "git")?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}
