// soa-devtools: Seed of Andromeda developer tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Version-dependent submodule update sequences.
//!
//! ```text
//! >= 1.7.3   fetch -a | pull --recurse-submodules | submodule update --recursive
//! >= 1.6.1   fetch -a | submodule foreach git fetch -a | submodule foreach git pull
//! otherwise  (nothing)
//! ```

use std::fmt;

use super::version::GitVersion;

/// First version whose `pull` understands `--recurse-submodules`.
pub const RECURSIVE_PULL_SINCE: GitVersion = GitVersion::new(1, 7, 3);

/// First version with a usable `submodule foreach`.
pub const FOREACH_SINCE: GitVersion = GitVersion::new(1, 6, 1);

/// One git invocation as an argument vector (without the leading `git`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitCommand {
    args: Vec<String>,
}

impl GitCommand {
    #[must_use]
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for GitCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "git {}", self.args.join(" "))
    }
}

/// Which update strategy a plan uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStrategy {
    /// `git pull --recurse-submodules` followed by a recursive update.
    RecursivePull,
    /// Per-submodule fetch and pull through `submodule foreach`.
    Foreach,
    /// Git is too old or its version is unknown.
    Unsupported,
}

/// Ordered git commands for one sync run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncPlan {
    strategy: SyncStrategy,
    commands: Vec<GitCommand>,
}

impl SyncPlan {
    /// Picks the command sequence for `version`; `None` sorts below every
    /// known version and yields an empty plan.
    #[must_use]
    pub fn for_version(version: Option<GitVersion>) -> Self {
        let (strategy, commands) = match version {
            Some(v) if v >= RECURSIVE_PULL_SINCE => (
                SyncStrategy::RecursivePull,
                vec![
                    GitCommand::new(["fetch", "-a"]),
                    GitCommand::new(["pull", "--recurse-submodules"]),
                    GitCommand::new(["submodule", "update", "--recursive"]),
                ],
            ),
            Some(v) if v >= FOREACH_SINCE => (
                SyncStrategy::Foreach,
                vec![
                    GitCommand::new(["fetch", "-a"]),
                    GitCommand::new(["submodule", "foreach", "git", "fetch", "-a"]),
                    GitCommand::new(["submodule", "foreach", "git", "pull"]),
                ],
            ),
            _ => (SyncStrategy::Unsupported, Vec::new()),
        };
        Self { strategy, commands }
    }

    #[must_use]
    pub const fn strategy(&self) -> SyncStrategy {
        self.strategy
    }

    #[must_use]
    pub fn commands(&self) -> &[GitCommand] {
        &self.commands
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
