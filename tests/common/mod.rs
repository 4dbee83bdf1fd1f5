// soa-devtools: Seed of Andromeda developer tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shared fixtures for the integration tests.
//!
//! Add `mod common;` to a test file, then use the helpers.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use soa_devtools::deps::HostPlatform;

/// Lays out a prebuilt Vorb tree for the host platform under `root`.
pub fn fake_vorb(root: &Path) {
    let layout = HostPlatform::current().layout();
    std::fs::create_dir_all(root.join("include/utils")).unwrap();
    std::fs::write(root.join("include/Vorb.h"), "#pragma once\n").unwrap();
    std::fs::write(root.join("include/utils/Timing.h"), "#pragma once\n").unwrap();
    for arch in layout.arches() {
        let libs = root.join("deps/lib").join(arch);
        std::fs::create_dir_all(&libs).unwrap();
        std::fs::write(libs.join("libglew.a"), arch).unwrap();
        for (config, suffix) in [("Release", ""), ("Debug", "-d")] {
            let dir = root.join("bin").join(arch).join(config);
            std::fs::create_dir_all(&dir).unwrap();
            std::fs::write(
                dir.join(format!("Vorb{suffix}.{}", layout.lib_ext)),
                format!("{arch} {config}"),
            )
            .unwrap();
        }
    }
}

/// Writes an executable shell script that appends `<name> <args>` to
/// `calls.log` in `dir`, then runs `body`.
#[cfg(unix)]
pub fn fake_tool(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let script = dir.join(name);
    let log = dir.join("calls.log");
    std::fs::write(
        &script,
        format!(
            "#!/bin/sh\necho \"{name} $*\" >> '{}'\n{body}\n",
            log.display()
        ),
    )
    .unwrap();
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();
    script
}

/// Lines recorded by [`fake_tool`] scripts in `dir`.
pub fn recorded_calls(dir: &Path) -> Vec<String> {
    std::fs::read_to_string(dir.join("calls.log"))
        .unwrap_or_default()
        .lines()
        .map(str::to_string)
        .collect()
}

/// Writes `content` as `soa.toml`-style config file and returns its path.
pub fn write_ini(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}
