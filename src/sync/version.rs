// soa-devtools: Seed of Andromeda developer tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `git --version` parsing.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

/// Numeric git version; compares field by field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GitVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl GitVersion {
    #[must_use]
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Extracts the first `git version X.Y.Z` triple from `text`.
    ///
    /// Trailing vendor suffixes such as `.windows.1` or `(Apple Git-146)`
    /// are ignored. Returns `None` when no triple is present or a component
    /// does not fit in `u32`.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let captures = version_regex()?.captures(text)?;
        let field = |i: usize| captures.get(i)?.as_str().parse::<u32>().ok();
        Some(Self::new(field(1)?, field(2)?, field(3)?))
    }
}

impl fmt::Display for GitVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

fn version_regex() -> Option<&'static Regex> {
    static VERSION: OnceLock<Option<Regex>> = OnceLock::new();
    VERSION
        .get_or_init(|| Regex::new(r"git version (\d+)\.(\d+)\.(\d+)").ok())
        .as_ref()
}
