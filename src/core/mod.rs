// soa-devtools: Seed of Andromeda developer tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core process management.
//!
//! ```text
//!        core
//!          |
//!          v
//!       process
//!          |
//!   Builder / Output
//!   classified ProcessError
//! ```

pub mod process;
