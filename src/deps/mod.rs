// soa-devtools: Seed of Andromeda developer tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Dependency copier: locate a prebuilt dependency and mirror it into `deps/`.
//!
//! ```text
//! DepsConfig + cwd --> DependencySpec
//!                          |
//!          resolve_root(spec, env lookup) --> ResolvedRoot { path, source }
//!                          |
//!   CopyPlan::new(root, spec, HostPlatform::current().layout())
//!     include/            --> deps/include/<name>/
//!     deps/lib/<lib32>/   --> deps/lib/<lib32>/
//!     deps/lib/<lib64>/   --> deps/lib/<lib64>/
//!     bin/<arch>/Release/<name>.lib    --> deps/lib/<arch>/
//!     bin/<arch>/Debug/<name>-d.lib    --> deps/lib/<arch>/
//!                          |
//!                CopyPlan::execute(ctx)
//! ```

pub mod plan;
pub mod platform;
pub mod resolve;

use std::path::{Component, Path, PathBuf};

use anyhow::Context;

use crate::config::types::DepsConfig;
use crate::error::Result;

pub use plan::{CopyOp, CopyPlan};
pub use platform::{HostPlatform, PlatformLayout};
pub use resolve::{ResolvedRoot, RootSource, resolve_root};

/// What to look for and where to put it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencySpec {
    /// Dependency directory name, also the library base name.
    pub name: String,
    /// Environment variable naming an explicit root.
    pub env_var: String,
    /// Absolute directory probed for `<name>` (then its parent).
    pub search_dir: PathBuf,
    /// Absolute destination tree.
    pub dest: PathBuf,
}

impl DependencySpec {
    /// Builds a spec from configuration, anchoring relative paths at `cwd`.
    ///
    /// # Errors
    ///
    /// Returns an error if `cwd` cannot be made absolute.
    pub fn from_config(config: &DepsConfig, cwd: &Path) -> Result<Self> {
        let cwd = std::path::absolute(cwd)
            .with_context(|| format!("failed to resolve {}", cwd.display()))?;
        let search_dir = config
            .search_dir
            .as_ref()
            .map_or_else(|| cwd.clone(), |dir| normalize(&cwd.join(dir)));
        Ok(Self {
            name: config.name.clone(),
            env_var: config.env_var.clone(),
            search_dir,
            dest: normalize(&cwd.join(&config.dest)),
        })
    }
}

/// Lexically drops `.` and folds `..` so that `parent()` means the real parent.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push(component);
                }
            }
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests;
