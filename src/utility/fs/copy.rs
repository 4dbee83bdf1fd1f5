// soa-devtools: Seed of Andromeda developer tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::{Path, PathBuf};

use anyhow::Context;
use tokio::fs;

use crate::error::{FsError, Result};

/// Recursively copies the directory `src` to `dst` (async version).
///
/// Refuses an existing `dst` unless `overwrite` is set, in which case the
/// tree is merged into it and same-named files are replaced. Every file keeps
/// its permissions and modification time. Returns the number of files copied.
///
/// # Example
/// ```no_run
/// use soa_devtools::utility::fs::copy::copy_tree_async;
/// use std::path::Path;
///
/// # async fn example() -> anyhow::Result<()> {
/// let files = copy_tree_async(Path::new("/vorb/include"), Path::new("deps/include/Vorb"), false).await?;
/// # Ok(())
/// # }
/// ```
/// # Errors
///
/// Returns [`FsError::NotFound`] when `src` is not a directory,
/// [`FsError::AlreadyExists`] when `dst` exists and `overwrite` is false, or
/// an I/O error from any copy.
pub async fn copy_tree_async(src: &Path, dst: &Path, overwrite: bool) -> Result<u64> {
    if !fs::metadata(src).await.is_ok_and(|m| m.is_dir()) {
        return Err(FsError::NotFound(src.display().to_string()).into());
    }
    if !overwrite && fs::try_exists(dst).await.unwrap_or(false) {
        return Err(FsError::AlreadyExists(dst.display().to_string()).into());
    }
    copy_dir_contents_async(src, dst).await
}

async fn copy_dir_contents_async(src: &Path, dst: &Path) -> Result<u64> {
    fs::create_dir_all(dst)
        .await
        .map_err(|e| FsError::from_io(dst, e))
        .with_context(|| format!("failed to create directory {}", dst.display()))?;

    let mut entries = fs::read_dir(src)
        .await
        .with_context(|| format!("failed to read directory {}", src.display()))?;

    let mut copied = 0;
    while let Some(entry) = entries
        .next_entry()
        .await
        .with_context(|| format!("failed to read entry from {}", src.display()))?
    {
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            copied += Box::pin(copy_dir_contents_async(&src_path, &dst_path)).await?;
        } else {
            copy_file_preserving_async(&src_path, &dst_path).await?;
            copied += 1;
        }
    }

    Ok(copied)
}

/// Copies one file, keeping its permissions and modification time.
///
/// An existing `dst` file is replaced.
///
/// # Errors
///
/// Returns [`FsError::NotFound`] for a missing `src`, or an I/O error if the
/// copy or the timestamp update fails.
pub async fn copy_file_preserving_async(src: &Path, dst: &Path) -> Result<()> {
    let modified = fs::metadata(src)
        .await
        .and_then(|m| m.modified())
        .map_err(|e| FsError::from_io(src, e))?;

    fs::copy(src, dst)
        .await
        .map_err(|e| FsError::from_io(src, e))
        .with_context(|| format!("failed to copy {} to {}", src.display(), dst.display()))?;

    let target: PathBuf = dst.to_path_buf();
    tokio::task::spawn_blocking(move || {
        open_for_times(&target)
            .and_then(|file| file.set_modified(modified))
            .map_err(|e| FsError::from_io(&target, e))
    })
    .await
    .context("timestamp task panicked")?
    .with_context(|| format!("failed to set modification time on {}", dst.display()))?;

    Ok(())
}

// futimens accepts a read-only handle for the owner; Windows wants write access.
#[cfg(unix)]
fn open_for_times(path: &Path) -> std::io::Result<std::fs::File> {
    std::fs::File::open(path)
}

#[cfg(not(unix))]
fn open_for_times(path: &Path) -> std::io::Result<std::fs::File> {
    std::fs::OpenOptions::new().write(true).open(path)
}
