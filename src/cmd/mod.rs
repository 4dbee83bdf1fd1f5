// soa-devtools: Seed of Andromeda developer tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args + Config --> cmd::run_* handlers
//!   build  BuildPlan --> BuildRunner
//!   deps   resolve_root --> CopyPlan::execute
//!   sync   SubmoduleSyncer::plan --> run
//! ```

pub mod build;
pub mod deps;
pub mod sync;

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::config::Config;
use crate::tools::ToolContext;

/// Tool context whose token is cancelled on Ctrl+C.
pub(crate) fn interruptible_context(config: &Config, dry_run: bool) -> ToolContext {
    let cancel_token = CancellationToken::new();
    let on_signal = cancel_token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Received Ctrl+C, interrupting...");
            on_signal.cancel();
        }
    });
    ToolContext::new(Arc::new(config.clone()), cancel_token, dry_run)
}
