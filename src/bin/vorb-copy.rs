// soa-devtools: Seed of Andromeda developer tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `vorb-copy` entry point.

use std::process::ExitCode;

use clap::Parser;
use mimalloc::MiMalloc;

use soa_devtools::cli::deps::DepsCli;
use soa_devtools::cmd::deps::run_deps_command;
use soa_devtools::logging::init_logging;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = DepsCli::parse();

    let _log_guard = match init_logging(&cli.global.log_config()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    let result = match cli.global.load_config(&cli.args) {
        Ok(config) => run_deps_command(&config, config.global.dry).await,
        Err(e) => Err(e),
    };
    soa_devtools::exit_code(result)
}
