// soa-devtools: Seed of Andromeda developer tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filesystem utilities with async copy.
//!
//! ```text
//! copy:  copy_tree_async()             tokio::fs recursive directory copy
//!        copy_file_preserving_async()  single file, mtime kept
//! ```

pub mod copy;
