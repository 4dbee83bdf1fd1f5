// soa-devtools: Seed of Andromeda developer tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the dependency copier.

mod common;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

use soa_devtools::cmd::deps::copy_dependency;
use soa_devtools::config::Config;
use soa_devtools::deps::HostPlatform;

// =============================================================================
// Library flow
// =============================================================================

#[tokio::test]
async fn deps_copy_from_sibling_checkout() {
    let temp = tempfile::tempdir().unwrap();
    let project = temp.path().join("SoA");
    std::fs::create_dir(&project).unwrap();
    common::fake_vorb(&temp.path().join("Vorb"));

    copy_dependency(&Config::default(), &project, false, |_| None)
        .await
        .unwrap();

    let layout = HostPlatform::current().layout();
    assert!(project.join("deps/include/Vorb/utils/Timing.h").is_file());
    for arch in layout.arches() {
        let libs = project.join("deps/lib").join(arch);
        assert!(libs.join("libglew.a").is_file());
        assert!(libs.join(format!("Vorb.{}", layout.lib_ext)).is_file());
        assert!(libs.join(format!("Vorb-d.{}", layout.lib_ext)).is_file());
    }
}

#[tokio::test]
async fn deps_environment_wins_over_siblings() {
    let temp = tempfile::tempdir().unwrap();
    let project = temp.path().join("SoA");
    std::fs::create_dir_all(project.join("Vorb")).unwrap();
    let elsewhere = temp.path().join("elsewhere");
    common::fake_vorb(&elsewhere);
    let value = elsewhere.display().to_string();

    copy_dependency(&Config::default(), &project, false, |key| {
        (key == "VORB_PATH").then(|| value.clone())
    })
    .await
    .unwrap();

    assert!(project.join("deps/include/Vorb/Vorb.h").is_file());
}

#[tokio::test]
async fn deps_not_found_names_candidates() {
    let temp = tempfile::tempdir().unwrap();
    let project = temp.path().join("SoA");
    std::fs::create_dir(&project).unwrap();

    let err = copy_dependency(&Config::default(), &project, false, |_| None)
        .await
        .unwrap_err();

    let message = err.to_string();
    assert!(message.starts_with("unable to find Vorb: set VORB_PATH"));
    assert!(message.contains(&project.join("Vorb").display().to_string()));
    assert!(!project.join("deps").exists());
}

#[tokio::test]
async fn deps_custom_name_and_dest() {
    let temp = tempfile::tempdir().unwrap();
    let project = temp.path().join("SoA");
    std::fs::create_dir(&project).unwrap();
    common::fake_vorb(&project.join("Vorb"));
    let config = Config::parse("[deps]\ndest = \"third_party\"\n").unwrap();

    copy_dependency(&config, &project, false, |_| None)
        .await
        .unwrap();

    assert!(project.join("third_party/include/Vorb/Vorb.h").is_file());
    assert!(!project.join("deps").exists());
}

// =============================================================================
// Binary
// =============================================================================

#[test]
fn vorb_copy_second_run_needs_force() {
    let temp = tempfile::tempdir().unwrap();
    let vorb = temp.path().join("Vorb");
    common::fake_vorb(&vorb);
    let project = temp.path().join("SoA");
    std::fs::create_dir(&project).unwrap();

    cargo_bin_cmd!("vorb-copy")
        .current_dir(&project)
        .env("VORB_PATH", &vorb)
        .assert()
        .code(0);

    cargo_bin_cmd!("vorb-copy")
        .current_dir(&project)
        .env("VORB_PATH", &vorb)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("destination already exists"));

    cargo_bin_cmd!("vorb-copy")
        .current_dir(&project)
        .env("VORB_PATH", &vorb)
        .arg("--force")
        .assert()
        .code(0);
}

#[test]
fn vorb_copy_missing_root_fails() {
    let temp = tempfile::tempdir().unwrap();
    let project = temp.path().join("SoA");
    std::fs::create_dir(&project).unwrap();

    cargo_bin_cmd!("vorb-copy")
        .current_dir(&project)
        .env_remove("VORB_PATH")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unable to find Vorb"));
}

#[test]
fn vorb_copy_dry_run_writes_nothing() {
    let temp = tempfile::tempdir().unwrap();
    let project = temp.path().join("SoA");
    std::fs::create_dir(&project).unwrap();
    common::fake_vorb(&project.join("Vorb"));

    cargo_bin_cmd!("vorb-copy")
        .current_dir(&project)
        .env_remove("VORB_PATH")
        .arg("--dry")
        .assert()
        .code(0)
        .stderr(predicate::str::contains("[dry-run] Would copy"));

    assert!(!project.join("deps").exists());
}

#[test]
fn vorb_copy_search_dir_flag() {
    let temp = tempfile::tempdir().unwrap();
    common::fake_vorb(&temp.path().join("checkouts/Vorb"));
    let project = temp.path().join("SoA");
    std::fs::create_dir(&project).unwrap();

    cargo_bin_cmd!("vorb-copy")
        .current_dir(&project)
        .env_remove("VORB_PATH")
        .args(["--search-dir", "../checkouts"])
        .assert()
        .code(0);

    assert!(project.join("deps/include/Vorb/Vorb.h").is_file());
}
