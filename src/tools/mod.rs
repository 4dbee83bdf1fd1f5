// soa-devtools: Seed of Andromeda developer tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tool abstractions for external commands.
//!
//! ```text
//! cmd handler --> ToolContext --> Tool --> ProcessBuilder
//!                                  cmake, make, git
//! ToolContext: config, cancel token, dry-run, OutputMode
//! ```
//!
//! All tools support cancellation via `CancellationToken` and honor dry-run
//! by logging a `[dry-run]` line instead of spawning.

use std::sync::Arc;

use futures_util::future::BoxFuture;
use tokio_util::sync::CancellationToken;

use crate::config::Config;
use crate::core::process::builder::ProcessBuilder;
use crate::error::Result;

pub mod cmake;
pub mod git;
pub mod make;

/// Where cmake and make output goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Child stdout/stderr are the terminal's.
    #[default]
    Passthrough,
    /// Stdout is dropped; stderr is kept and logged if the tool fails.
    Quiet,
}

/// Context provided to tools during execution.
#[derive(Clone)]
pub struct ToolContext {
    cancel_token: CancellationToken,
    dry_run: bool,
    output_mode: OutputMode,
    config: Arc<Config>,
}

impl ToolContext {
    #[must_use]
    pub const fn new(config: Arc<Config>, cancel_token: CancellationToken, dry_run: bool) -> Self {
        Self {
            cancel_token,
            dry_run,
            output_mode: OutputMode::Passthrough,
            config,
        }
    }

    #[must_use]
    pub const fn with_output_mode(mut self, mode: OutputMode) -> Self {
        self.output_mode = mode;
        self
    }

    #[must_use]
    pub const fn config(&self) -> &Arc<Config> {
        &self.config
    }

    #[must_use]
    pub const fn cancel_token(&self) -> &CancellationToken {
        &self.cancel_token
    }

    #[must_use]
    pub const fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    #[must_use]
    pub const fn output_mode(&self) -> OutputMode {
        self.output_mode
    }

    /// Applies the context's output mode to a builder.
    #[must_use]
    pub fn apply_output_mode(&self, builder: ProcessBuilder) -> ProcessBuilder {
        match self.output_mode {
            OutputMode::Passthrough => builder.inherit_stdio(),
            OutputMode::Quiet => builder.quiet(),
        }
    }
}

/// Trait for tools that execute external processes.
///
/// Each tool encapsulates one external operation (cmake configure, a make
/// target, a git command).
pub trait Tool: Send + Sync {
    /// Returns the name of this tool (e.g., "cmake", "make", "git").
    fn name(&self) -> &str;

    /// Executes the tool's operation.
    ///
    /// Returns `Err` if the process could not be found or started, exited
    /// with a failure code, or was cancelled.
    fn run<'a>(&'a self, ctx: &'a ToolContext) -> BoxFuture<'a, Result<()>>;
}

#[cfg(test)]
pub(crate) mod test_utils;
