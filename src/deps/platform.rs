// soa-devtools: Seed of Andromeda developer tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Per-platform directory naming for prebuilt dependency artifacts.

use std::fmt;

/// Host family that decides the dependency directory layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostPlatform {
    Windows,
    Posix,
}

impl HostPlatform {
    /// The platform this binary was compiled for.
    #[must_use]
    pub const fn current() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Posix
        }
    }

    #[must_use]
    pub fn layout(self) -> &'static PlatformLayout {
        PLATFORM_LAYOUTS
            .iter()
            .find(|layout| layout.platform == self)
            .unwrap_or(&PLATFORM_LAYOUTS[0])
    }
}

impl fmt::Display for HostPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Windows => write!(f, "windows"),
            Self::Posix => write!(f, "posix"),
        }
    }
}

/// Directory names and library extension for one host family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformLayout {
    pub platform: HostPlatform,
    /// 32-bit library directory name.
    pub lib32: &'static str,
    /// 64-bit library directory name.
    pub lib64: &'static str,
    /// Extension of the precompiled library files, without the dot.
    pub lib_ext: &'static str,
}

impl PlatformLayout {
    /// Both architecture directory names, 32-bit first.
    #[must_use]
    pub const fn arches(&self) -> [&'static str; 2] {
        [self.lib32, self.lib64]
    }
}

/// One row per supported host.
pub const PLATFORM_LAYOUTS: &[PlatformLayout] = &[
    PlatformLayout {
        platform: HostPlatform::Windows,
        lib32: "Win32",
        lib64: "x64",
        lib_ext: "lib",
    },
    PlatformLayout {
        platform: HostPlatform::Posix,
        lib32: "lib32",
        lib64: "lib64",
        lib_ext: "lib",
    },
];
