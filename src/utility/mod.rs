// soa-devtools: Seed of Andromeda developer tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Utility modules.
//!
//! ```text
//! fs
//!   copy:  copy_tree_async()             recursive, refuses existing dst
//!          copy_file_preserving_async()  keeps mode + mtime
//! ```

pub mod fs;
