// soa-devtools: Seed of Andromeda developer tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `soa-build` entry point.
//!
//! ```text
//! BuildCli::parse() --> Logging --> Config --> run_build_command
//! ```

use std::process::ExitCode;

use clap::Parser;
use mimalloc::MiMalloc;

use soa_devtools::cli::build::BuildCli;
use soa_devtools::cmd::build::run_build_command;
use soa_devtools::logging::init_logging;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = BuildCli::parse();

    let _log_guard = match init_logging(&cli.global.log_config()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    let result = match cli.global.load_config(&cli.args) {
        Ok(config) => run_build_command(&cli.args, &config, config.global.dry).await,
        Err(e) => Err(e),
    };
    soa_devtools::exit_code(result)
}
