// soa-devtools: Seed of Andromeda developer tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Fixed copy set from a dependency root into the local `deps` tree.

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use tokio::fs;
use tracing::{debug, info};

use super::DependencySpec;
use super::platform::PlatformLayout;
use crate::error::{FsError, Result};
use crate::tools::ToolContext;
use crate::utility::fs::copy::{copy_file_preserving_async, copy_tree_async};

/// One copy operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOp {
    /// Recursive directory copy.
    Tree { src: PathBuf, dst: PathBuf },
    /// Single file copy keeping mtime and permissions.
    File { src: PathBuf, dst: PathBuf },
}

impl CopyOp {
    #[must_use]
    pub fn src(&self) -> &Path {
        match self {
            Self::Tree { src, .. } | Self::File { src, .. } => src,
        }
    }

    #[must_use]
    pub fn dst(&self) -> &Path {
        match self {
            Self::Tree { dst, .. } | Self::File { dst, .. } => dst,
        }
    }
}

impl fmt::Display for CopyOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.src().display(), self.dst().display())
    }
}

/// Ordered copy operations for one dependency root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyPlan {
    ops: Vec<CopyOp>,
}

impl CopyPlan {
    /// Builds the copy set:
    /// include dir, both library dirs, then release and debug precompiled
    /// libraries for each architecture.
    #[must_use]
    pub fn new(root: &Path, spec: &DependencySpec, layout: &PlatformLayout) -> Self {
        let name = &spec.name;
        let lib_dir = spec.dest.join("lib");
        let mut ops = Vec::with_capacity(7);

        ops.push(CopyOp::Tree {
            src: root.join("include"),
            dst: spec.dest.join("include").join(name),
        });
        for arch in layout.arches() {
            ops.push(CopyOp::Tree {
                src: root.join("deps").join("lib").join(arch),
                dst: lib_dir.join(arch),
            });
        }
        for arch in layout.arches() {
            let bin = root.join("bin").join(arch);
            for (config, file) in [
                ("Release", format!("{name}.{}", layout.lib_ext)),
                ("Debug", format!("{name}-d.{}", layout.lib_ext)),
            ] {
                ops.push(CopyOp::File {
                    src: bin.join(config).join(&file),
                    dst: lib_dir.join(arch).join(&file),
                });
            }
        }

        Self { ops }
    }

    #[must_use]
    pub fn ops(&self) -> &[CopyOp] {
        &self.ops
    }

    /// Runs every operation in order, stopping at the first failure.
    ///
    /// Honors dry-run, `deps.overwrite` and cancellation from `ctx`.
    /// Already copied items are left in place on failure. Returns the
    /// number of files written.
    ///
    /// # Errors
    ///
    /// Returns [`FsError::NotFound`] for a missing source,
    /// [`FsError::AlreadyExists`] for an existing destination tree when
    /// overwriting is off, or any I/O error.
    pub async fn execute(&self, ctx: &ToolContext) -> Result<u64> {
        let overwrite = ctx.config().deps.overwrite;
        let mut files = 0;

        for op in &self.ops {
            if ctx.cancel_token().is_cancelled() {
                bail!("copy interrupted before {op}");
            }
            if ctx.is_dry_run() {
                info!("[dry-run] Would copy {op}");
                continue;
            }

            info!("Copying {op}");
            files += execute_op(op, overwrite)
                .await
                .with_context(|| format!("failed to copy {op}"))?;
        }

        debug!(files, "dependency copy finished");
        Ok(files)
    }
}

async fn execute_op(op: &CopyOp, overwrite: bool) -> Result<u64> {
    match op {
        CopyOp::Tree { src, dst } => copy_tree_async(src, dst, overwrite).await,
        CopyOp::File { src, dst } => {
            if let Some(parent) = dst.parent() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| FsError::from_io(parent, e))?;
            }
            copy_file_preserving_async(src, dst).await?;
            Ok(1)
        }
    }
}
