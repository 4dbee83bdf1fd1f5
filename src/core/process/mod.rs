// soa-devtools: Seed of Andromeda developer tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Async process spawning and management.
//!
//! ```text
//! ProcessBuilder::resolve(tools.cmake, "cmake")
//!   .args() .cwd() .capture_output() / .inherit_stdio()
//!   .run() / .run_with_cancellation()
//!       --> tokio::process::Command
//!           stream stdout/stderr
//!       --> ProcessOutput { exit_code, stdout, stderr }
//!        or ProcessError { ExecutableNotFound | SpawnFailed | NonZeroExit | Interrupted }
//! ```

pub mod builder;
mod io;
mod runner;
#[cfg(test)]
mod tests;
