// soa-devtools: Seed of Andromeda developer tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process execution and lifecycle management.
//!
//! ```text
//! run() / run_with_cancellation(token)
//!              |
//!              v
//!     build_command()
//!     args, cwd, stdio
//!              |
//!              v
//!          spawn() ---- NotFound ----> ExecutableNotFound
//!              |
//!              v
//!         run_child()
//!     (wait or cancel/kill)
//!              |
//!              v
//!    interrupted? --> Interrupted
//!    exit code != 0 (and no ALLOW_FAILURE) --> NonZeroExit
//!              |
//!              v
//!       ProcessOutput
//!    { exit_code, stdout, stderr }
//! ```

use std::process::Stdio;
use tokio::process::Command;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, trace};

use super::builder::{ProcessBuilder, ProcessFlags, ProcessOutput, StreamFlags};
use crate::error::ProcessError;

impl ProcessBuilder {
    /// Spawns and runs the process, waiting for completion.
    ///
    /// # Errors
    ///
    /// Returns a classified [`ProcessError`]:
    /// - `ExecutableNotFound` if the program does not exist.
    /// - `SpawnFailed` / `WaitFailed` for other I/O failures.
    /// - `NonZeroExit` if the exit code is not 0 (unless `ALLOW_FAILURE`).
    pub async fn run(self) -> Result<ProcessOutput, ProcessError> {
        self.run_with_cancellation(CancellationToken::new()).await
    }

    /// Spawns and runs the process, killing it if `token` is cancelled.
    ///
    /// # Errors
    ///
    /// Same as [`ProcessBuilder::run`], plus `Interrupted` when the token
    /// fires before the process exits.
    pub async fn run_with_cancellation(
        self,
        token: CancellationToken,
    ) -> Result<ProcessOutput, ProcessError> {
        let name = self.display_name();
        let cmd_line = self.command_line();

        if token.is_cancelled() {
            return Err(ProcessError::Interrupted { command: cmd_line });
        }

        if let Some(cwd) = self.working_dir() {
            debug!(cwd = %cwd.display(), "cd");
        }
        debug!(cmd = %cmd_line, "exec");

        let mut command = self.build_command();

        let mut child = command.spawn().map_err(|source| self.spawn_error(&cmd_line, source))?;

        trace!(process = %name, pid = ?child.id(), "spawned");

        let output = self
            .run_child(&name, &cmd_line, &mut child, token)
            .await?;

        if output.is_interrupted() {
            return Err(ProcessError::Interrupted { command: cmd_line });
        }

        if !self.process_flags().contains(ProcessFlags::ALLOW_FAILURE) && !output.success() {
            if !output.stderr().is_empty() {
                error!(process = %name, stderr = %output.stderr(), "process error output");
            }
            return Err(ProcessError::NonZeroExit {
                command: cmd_line,
                code: output.exit_code(),
            });
        }

        trace!(process = %name, exit_code = output.exit_code(), "completed");
        Ok(output)
    }

    /// Maps a spawn failure to "tool not found" or a generic spawn error.
    ///
    /// A missing working directory also reports `NotFound` on Unix, so that
    /// case is checked first.
    fn spawn_error(&self, cmd_line: &str, source: std::io::Error) -> ProcessError {
        let cwd_missing = self.working_dir().is_some_and(|dir| !dir.is_dir());
        if source.kind() == std::io::ErrorKind::NotFound && !cwd_missing {
            ProcessError::ExecutableNotFound {
                name: self.program().display().to_string(),
            }
        } else {
            ProcessError::SpawnFailed {
                command: cmd_line.to_string(),
                source,
            }
        }
    }

    /// Builds the tokio Command from this builder's configuration.
    fn build_command(&self) -> Command {
        let mut command = Command::new(self.program());

        command.args(self.args_slice());

        if let Some(cwd) = self.working_dir() {
            command.current_dir(cwd);
        }

        command.stdin(Stdio::null());
        command.stdout(Self::stdio_from_flags(self.stdout_flags()));
        command.stderr(Self::stdio_from_flags(self.stderr_flags()));

        command.kill_on_drop(true);

        command
    }

    fn stdio_from_flags(flags: StreamFlags) -> Stdio {
        if flags.contains(StreamFlags::INHERIT) {
            Stdio::inherit()
        } else if flags.contains(StreamFlags::BIT_BUCKET) {
            Stdio::null()
        } else {
            Stdio::piped()
        }
    }
}
