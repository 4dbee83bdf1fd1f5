// soa-devtools: Seed of Andromeda developer tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Dependency root lookup.
//!
//! ```text
//! $VORB_PATH (set, non-empty)  --> Environment
//! <search_dir>/Vorb exists     --> Local
//! <search_dir>/../Vorb exists  --> Parent
//! otherwise                    --> DepsError::RootNotFound
//! ```

use std::fmt;
use std::path::PathBuf;

use tracing::info;

use super::DependencySpec;
use crate::error::DepsError;

/// Where a dependency root was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootSource {
    Environment,
    Local,
    Parent,
}

impl fmt::Display for RootSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Environment => write!(f, "environment variable"),
            Self::Local => write!(f, "search directory"),
            Self::Parent => write!(f, "parent directory"),
        }
    }
}

/// A located dependency root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoot {
    pub path: PathBuf,
    pub source: RootSource,
}

/// Finds the dependency root for `spec`.
///
/// `env` looks up an environment variable; pass `|k| std::env::var(k).ok()`
/// for the real environment. Nothing is written back to the environment.
///
/// # Errors
///
/// Returns [`DepsError::RootNotFound`] listing the probed directories when
/// the variable is unset and neither sibling directory exists.
pub fn resolve_root<F>(spec: &DependencySpec, env: F) -> Result<ResolvedRoot, DepsError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = env(&spec.env_var).filter(|v| !v.is_empty()) {
        info!("Using {} environment variable", spec.env_var);
        return Ok(ResolvedRoot {
            path: PathBuf::from(value),
            source: RootSource::Environment,
        });
    }

    let mut candidates = vec![(spec.search_dir.join(&spec.name), RootSource::Local)];
    if let Some(parent) = spec.search_dir.parent() {
        candidates.push((parent.join(&spec.name), RootSource::Parent));
    }

    for (path, source) in &candidates {
        if path.exists() {
            info!("{} found in {source}: {}", spec.name, path.display());
            return Ok(ResolvedRoot {
                path: path.clone(),
                source: *source,
            });
        }
    }

    Err(DepsError::RootNotFound {
        name: spec.name.clone(),
        env_var: spec.env_var.clone(),
        candidates: candidates.into_iter().map(|(path, _)| path).collect(),
    })
}
