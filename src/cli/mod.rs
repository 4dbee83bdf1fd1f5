// soa-devtools: Seed of Andromeda developer tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI definitions for the three binaries using clap derive.
//!
//! ```text
//! soa-build        [global] [-c] [-r] [-d] [-v] [MAKE_ARGS]...
//! vorb-copy        [global] [--search-dir DIR] [--dest DIR] [-f]
//! sync-submodules  [global] [--repo DIR] [--classifier KIND]
//!
//! global: -i/--ini FILE, --dry, -l/--log-level N, --file-log-level N, --log-file FILE
//! ```

pub mod build;
pub mod deps;
pub mod global;
pub mod sync;


use crate::config::loader::ConfigLoader;
use crate::error::Result;

/// Command flags that map onto configuration keys.
pub trait ConfigOverrides {
    /// Layers this command's flags on top of `loader`.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::ParseError` if an override key is rejected.
    fn apply(&self, loader: ConfigLoader) -> Result<ConfigLoader>;
}
