// soa-devtools: Seed of Andromeda developer tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use tempfile::TempDir;
use tokio_util::sync::CancellationToken;

use super::*;
use crate::config::Config;
use crate::config::types::DepsConfig;
use crate::error::{DepsError, FsError};
use crate::tools::ToolContext;
use crate::tools::test_utils::dry_run_lines;

fn no_env(_: &str) -> Option<String> {
    None
}

fn spec_in(search_dir: &Path, dest: &Path) -> DependencySpec {
    DependencySpec {
        name: "Vorb".to_string(),
        env_var: "VORB_PATH".to_string(),
        search_dir: search_dir.to_path_buf(),
        dest: dest.to_path_buf(),
    }
}

fn ctx_with(toml: &str, dry_run: bool) -> ToolContext {
    let config = Config::parse(toml).unwrap();
    ToolContext::new(Arc::new(config), CancellationToken::new(), dry_run)
}

/// Lays out a minimal prebuilt dependency tree under `root`.
fn fake_root(root: &Path, layout: &PlatformLayout) {
    std::fs::create_dir_all(root.join("include/graphics")).unwrap();
    std::fs::write(root.join("include/Vorb.h"), "// vorb").unwrap();
    std::fs::write(root.join("include/graphics/SpriteBatch.h"), "// sb").unwrap();
    for arch in layout.arches() {
        let libs = root.join("deps/lib").join(arch);
        std::fs::create_dir_all(&libs).unwrap();
        std::fs::write(libs.join("libSDL2.a"), arch).unwrap();
        for (config, file) in [("Release", "Vorb.lib"), ("Debug", "Vorb-d.lib")] {
            let dir = root.join("bin").join(arch).join(config);
            std::fs::create_dir_all(&dir).unwrap();
            std::fs::write(dir.join(file), format!("{arch}/{config}")).unwrap();
        }
    }
}

// --- platform ---

#[test]
fn test_platform_table_rows() {
    let windows = HostPlatform::Windows.layout();
    assert_eq!(windows.arches(), ["Win32", "x64"]);
    assert_eq!(windows.lib_ext, "lib");

    let posix = HostPlatform::Posix.layout();
    assert_eq!(posix.arches(), ["lib32", "lib64"]);
    assert_eq!(posix.lib_ext, "lib");
}

#[test]
fn test_current_platform_matches_target() {
    let expected = if cfg!(windows) {
        HostPlatform::Windows
    } else {
        HostPlatform::Posix
    };
    assert_eq!(HostPlatform::current(), expected);
    assert_eq!(HostPlatform::current().layout().platform, expected);
}

// --- resolution ---

#[test]
fn test_resolve_prefers_environment() {
    let temp = TempDir::new().unwrap();
    std::fs::create_dir(temp.path().join("Vorb")).unwrap();
    let spec = spec_in(temp.path(), &temp.path().join("deps"));

    let root = resolve_root(&spec, |key| {
        (key == "VORB_PATH").then(|| "/opt/vorb".to_string())
    })
    .unwrap();

    assert_eq!(root.source, RootSource::Environment);
    assert_eq!(root.path, PathBuf::from("/opt/vorb"));
}

#[test]
fn test_resolve_ignores_empty_environment_value() {
    let temp = TempDir::new().unwrap();
    std::fs::create_dir(temp.path().join("Vorb")).unwrap();
    let spec = spec_in(temp.path(), &temp.path().join("deps"));

    let root = resolve_root(&spec, |_| Some(String::new())).unwrap();
    assert_eq!(root.source, RootSource::Local);
}

#[test]
fn test_resolve_local_before_parent() {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join("SoA");
    std::fs::create_dir_all(project.join("Vorb")).unwrap();
    std::fs::create_dir(temp.path().join("Vorb")).unwrap();
    let spec = spec_in(&project, &project.join("deps"));

    let root = resolve_root(&spec, no_env).unwrap();
    assert_eq!(root.source, RootSource::Local);
    assert_eq!(root.path, project.join("Vorb"));
}

#[test]
fn test_resolve_falls_back_to_parent() {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join("SoA");
    std::fs::create_dir(&project).unwrap();
    std::fs::create_dir(temp.path().join("Vorb")).unwrap();
    let spec = spec_in(&project, &project.join("deps"));

    let root = resolve_root(&spec, no_env).unwrap();
    assert_eq!(root.source, RootSource::Parent);
    assert_eq!(root.path, temp.path().join("Vorb"));
}

#[test]
fn test_resolve_not_found_lists_candidates() {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join("SoA");
    std::fs::create_dir(&project).unwrap();
    let spec = spec_in(&project, &project.join("deps"));

    let err = resolve_root(&spec, no_env).unwrap_err();
    let DepsError::RootNotFound {
        name,
        env_var,
        candidates,
    } = &err;
    assert_eq!(name, "Vorb");
    assert_eq!(env_var, "VORB_PATH");
    assert_eq!(
        candidates,
        &vec![project.join("Vorb"), temp.path().join("Vorb")]
    );
    assert!(err.to_string().starts_with("unable to find Vorb: set VORB_PATH"));
}

#[test]
fn test_spec_from_config_anchors_paths() {
    let temp = TempDir::new().unwrap();
    let cwd = temp.path().join("SoA");
    let config = DepsConfig {
        search_dir: Some(PathBuf::from("./sub/..")),
        dest: PathBuf::from("third_party"),
        ..DepsConfig::default()
    };

    let spec = DependencySpec::from_config(&config, &cwd).unwrap();
    assert_eq!(spec.search_dir, cwd);
    assert_eq!(spec.dest, cwd.join("third_party"));
    assert_eq!(spec.search_dir.parent(), Some(temp.path()));

    let spec = DependencySpec::from_config(&DepsConfig::default(), &cwd).unwrap();
    assert_eq!(spec.search_dir, cwd);
    assert_eq!(spec.dest, cwd.join("deps"));
}

// --- plan ---

#[cfg(unix)]
#[test]
fn test_copy_plan_posix_layout() {
    let spec = spec_in(Path::new("/src/SoA"), Path::new("/src/SoA/deps"));
    let plan = CopyPlan::new(Path::new("/src/Vorb"), &spec, HostPlatform::Posix.layout());
    let lines: Vec<String> = plan.ops().iter().map(ToString::to_string).collect();

    insta::assert_snapshot!(lines.join("\n"), @r"
    /src/Vorb/include to /src/SoA/deps/include/Vorb
    /src/Vorb/deps/lib/lib32 to /src/SoA/deps/lib/lib32
    /src/Vorb/deps/lib/lib64 to /src/SoA/deps/lib/lib64
    /src/Vorb/bin/lib32/Release/Vorb.lib to /src/SoA/deps/lib/lib32/Vorb.lib
    /src/Vorb/bin/lib32/Debug/Vorb-d.lib to /src/SoA/deps/lib/lib32/Vorb-d.lib
    /src/Vorb/bin/lib64/Release/Vorb.lib to /src/SoA/deps/lib/lib64/Vorb.lib
    /src/Vorb/bin/lib64/Debug/Vorb-d.lib to /src/SoA/deps/lib/lib64/Vorb-d.lib
    ");
}

#[test]
fn test_copy_plan_windows_layout_kinds() {
    let spec = spec_in(Path::new("SoA"), Path::new("SoA/deps"));
    let plan = CopyPlan::new(Path::new("Vorb"), &spec, HostPlatform::Windows.layout());
    let ops = plan.ops();

    assert_eq!(ops.len(), 7);
    assert!(ops[..3].iter().all(|op| matches!(op, CopyOp::Tree { .. })));
    assert!(ops[3..].iter().all(|op| matches!(op, CopyOp::File { .. })));
    assert_eq!(ops[1].dst(), Path::new("SoA/deps/lib/Win32"));
    assert_eq!(
        ops[6].src(),
        Path::new("Vorb/bin/x64/Debug/Vorb-d.lib")
    );
}

// --- execution ---

#[tokio::test]
async fn test_execute_copies_everything() -> Result<()> {
    let temp = TempDir::new()?;
    let layout = HostPlatform::current().layout();
    let root = temp.path().join("Vorb");
    fake_root(&root, layout);
    let dest = temp.path().join("SoA/deps");
    let spec = spec_in(&temp.path().join("SoA"), &dest);

    let files = CopyPlan::new(&root, &spec, layout)
        .execute(&ctx_with("", false))
        .await?;

    // 2 headers, 2 static libs, 4 precompiled libs
    assert_eq!(files, 8);
    assert!(dest.join("include/Vorb/graphics/SpriteBatch.h").is_file());
    for arch in layout.arches() {
        let libs = dest.join("lib").join(arch);
        assert_eq!(std::fs::read_to_string(libs.join("libSDL2.a"))?, arch);
        assert_eq!(
            std::fs::read_to_string(libs.join("Vorb.lib"))?,
            format!("{arch}/Release")
        );
        assert_eq!(
            std::fs::read_to_string(libs.join("Vorb-d.lib"))?,
            format!("{arch}/Debug")
        );
    }
    Ok(())
}

#[tokio::test]
async fn test_second_run_requires_overwrite() -> Result<()> {
    let temp = TempDir::new()?;
    let layout = HostPlatform::current().layout();
    let root = temp.path().join("Vorb");
    fake_root(&root, layout);
    let dest = temp.path().join("SoA/deps");
    let plan = CopyPlan::new(&root, &spec_in(&temp.path().join("SoA"), &dest), layout);

    plan.execute(&ctx_with("", false)).await?;

    let err = plan.execute(&ctx_with("", false)).await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<FsError>(),
        Some(FsError::AlreadyExists(_))
    ));

    let files = plan
        .execute(&ctx_with("[deps]\noverwrite = true\n", false))
        .await?;
    assert_eq!(files, 8);
    Ok(())
}

#[tokio::test]
async fn test_missing_source_stops_without_rollback() -> Result<()> {
    let temp = TempDir::new()?;
    let layout = HostPlatform::current().layout();
    let root = temp.path().join("Vorb");
    fake_root(&root, layout);
    std::fs::remove_dir_all(root.join("deps/lib").join(layout.lib64))?;
    let dest = temp.path().join("SoA/deps");
    let plan = CopyPlan::new(&root, &spec_in(&temp.path().join("SoA"), &dest), layout);

    let err = plan.execute(&ctx_with("", false)).await.unwrap_err();

    assert!(matches!(
        err.downcast_ref::<FsError>(),
        Some(FsError::NotFound(_))
    ));
    assert!(dest.join("include/Vorb/Vorb.h").is_file());
    assert!(dest.join("lib").join(layout.lib32).is_dir());
    assert!(!dest.join("lib").join(layout.lib64).exists());
    Ok(())
}

#[tokio::test(flavor = "current_thread")]
async fn test_dry_run_writes_nothing() -> Result<()> {
    let temp = TempDir::new()?;
    let layout = HostPlatform::current().layout();
    let dest = temp.path().join("SoA/deps");
    let plan = CopyPlan::new(
        &temp.path().join("Vorb"),
        &spec_in(&temp.path().join("SoA"), &dest),
        layout,
    );
    let ctx = ctx_with("", true);

    let (plan_ref, ctx_ref) = (&plan, &ctx);
    let lines = dry_run_lines(move || async move { plan_ref.execute(ctx_ref).await.map(drop) })
        .await?;

    assert_eq!(lines.len(), plan.ops().len());
    assert_eq!(lines[0], format!("[dry-run] Would copy {}", plan.ops()[0]));
    assert!(!dest.exists());
    Ok(())
}

#[tokio::test]
async fn test_cancelled_copy_does_nothing() {
    let temp = TempDir::new().unwrap();
    let layout = HostPlatform::current().layout();
    let root = temp.path().join("Vorb");
    fake_root(&root, layout);
    let dest = temp.path().join("SoA/deps");
    let plan = CopyPlan::new(&root, &spec_in(&temp.path().join("SoA"), &dest), layout);

    let token = CancellationToken::new();
    token.cancel();
    let ctx = ToolContext::new(Arc::new(Config::default()), token, false);

    assert!(plan.execute(&ctx).await.is_err());
    assert!(!dest.exists());
}
