// soa-devtools: Seed of Andromeda developer tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `sync-submodules` entry point.

use std::process::ExitCode;

use clap::Parser;
use mimalloc::MiMalloc;

use soa_devtools::cli::sync::SyncCli;
use soa_devtools::cmd::sync::run_sync_command;
use soa_devtools::logging::init_logging;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = SyncCli::parse();

    let _log_guard = match init_logging(&cli.global.log_config()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    let result = match cli.global.load_config(&cli.args) {
        Ok(config) => run_sync_command(&cli.args, &config, config.global.dry).await,
        Err(e) => Err(e),
    };
    soa_devtools::exit_code(result)
}
