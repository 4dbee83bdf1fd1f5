// soa-devtools: Seed of Andromeda developer tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `CMake` configure step.
//!
//! ```text
//! CmakeTool
//! Builder: source_dir/build_dir/generator/definition
//! Runs:    cd <build_dir> && cmake [-G <gen>] [-D<k>=<v>...] <source_dir>
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::{debug, info};

use super::{Tool, ToolContext};
use crate::core::process::builder::ProcessBuilder;
use crate::error::Result;
use futures_util::future::BoxFuture;

/// `CMake` configure tool.
#[derive(Debug, Clone)]
pub struct CmakeTool {
    source_dir: PathBuf,
    build_dir: PathBuf,
    generator: Option<String>,
    definitions: BTreeMap<String, String>,
}

impl CmakeTool {
    /// Configure the project one level above the build directory (`cmake ..`).
    #[must_use]
    pub fn new(build_dir: impl AsRef<Path>) -> Self {
        Self {
            source_dir: PathBuf::from(".."),
            build_dir: build_dir.as_ref().to_path_buf(),
            generator: None,
            definitions: BTreeMap::new(),
        }
    }

    /// Source directory, relative to the build directory.
    #[must_use]
    pub fn source_dir(mut self, path: impl AsRef<Path>) -> Self {
        self.source_dir = path.as_ref().to_path_buf();
        self
    }

    #[must_use]
    pub fn generator(mut self, generator: Option<impl Into<String>>) -> Self {
        self.generator = generator.map(Into::into);
        self
    }

    #[must_use]
    pub fn definition(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.definitions.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn definitions<I, K, V>(mut self, definitions: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.definitions
            .extend(definitions.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Arguments passed to cmake, in order.
    #[must_use]
    pub fn arguments(&self) -> Vec<String> {
        let mut args = Vec::new();
        if let Some(ref generator) = self.generator {
            args.push("-G".to_string());
            args.push(generator.clone());
        }
        for (key, value) in &self.definitions {
            args.push(format!("-D{key}={value}"));
        }
        args.push(self.source_dir.display().to_string());
        args
    }

    async fn do_configure(&self, ctx: &ToolContext) -> Result<()> {
        let args = self.arguments();

        if ctx.is_dry_run() {
            info!(
                "[dry-run] Would run in {}: cmake {}",
                self.build_dir.display(),
                args.join(" ")
            );
            return Ok(());
        }

        let builder = ProcessBuilder::resolve(&ctx.config().tools.cmake, "cmake")?
            .args(&args)
            .cwd(&self.build_dir);

        debug!("Configuring CMake");

        ctx.apply_output_mode(builder)
            .run_with_cancellation(ctx.cancel_token().clone())
            .await
            .context("CMake configure failed")?;

        info!("CMake configure completed successfully");
        Ok(())
    }
}

impl Tool for CmakeTool {
    fn name(&self) -> &'static str {
        "cmake"
    }

    fn run<'a>(&'a self, ctx: &'a ToolContext) -> BoxFuture<'a, Result<()>> {
        Box::pin(self.do_configure(ctx))
    }
}
