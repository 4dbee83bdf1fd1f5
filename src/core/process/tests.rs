// soa-devtools: Seed of Andromeda developer tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::builder::{ProcessBuilder, ProcessFlags, ProcessOutput};
use crate::error::ProcessError;
use std::path::Path;
use tokio_util::sync::CancellationToken;

#[cfg(unix)]
fn sh(script: &str) -> ProcessBuilder {
    ProcessBuilder::new("sh").arg("-c").arg(script)
}

#[cfg(unix)]
#[tokio::test]
async fn test_process_echo() {
    let output = ProcessBuilder::new("echo")
        .arg("hello")
        .capture_output()
        .run()
        .await
        .expect("echo should succeed");

    assert!(output.success());
    insta::assert_snapshot!(output.stdout().trim(), @"hello");
}

#[cfg(unix)]
#[tokio::test]
async fn test_process_captures_both_streams() {
    let output = sh("echo out; echo err 1>&2")
        .capture_output()
        .run()
        .await
        .expect("script should succeed");

    assert_eq!(output.stdout(), "out");
    assert_eq!(output.stderr(), "err");
    assert_eq!(output.lines().collect::<Vec<_>>(), vec!["out", "err"]);
}

#[cfg(unix)]
#[tokio::test]
async fn test_process_many_lines_do_not_stall() {
    let output = sh("i=0; while [ $i -lt 2000 ]; do echo line$i; i=$((i+1)); done")
        .capture_output()
        .run()
        .await
        .expect("script should succeed");

    assert_eq!(output.stdout().lines().count(), 2000);
}

#[cfg(unix)]
#[tokio::test]
async fn test_process_non_zero_exit_is_classified() {
    let err = sh("exit 42").quiet().run().await.unwrap_err();
    assert!(
        matches!(err, ProcessError::NonZeroExit { code: 42, .. }),
        "unexpected error: {err}"
    );
}

#[cfg(unix)]
#[tokio::test]
async fn test_process_allow_failure_returns_output() {
    let output = sh("exit 3")
        .flag(ProcessFlags::ALLOW_FAILURE)
        .run()
        .await
        .expect("process should complete");

    assert_eq!(output.exit_code(), 3);
    assert!(!output.success());
}

#[cfg(unix)]
#[tokio::test]
async fn test_process_quiet_drops_stdout_keeps_stderr() {
    let output = sh("echo noise; echo 'main.cpp:3: error: boom' 1>&2; exit 2")
        .quiet()
        .flag(ProcessFlags::ALLOW_FAILURE)
        .run()
        .await
        .expect("process should complete");

    assert_eq!(output.exit_code(), 2);
    assert_eq!(output.stdout(), "");
    insta::assert_snapshot!(output.stderr(), @"main.cpp:3: error: boom");
}

#[cfg(unix)]
#[tokio::test]
async fn test_process_cwd() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("marker.txt"), "").unwrap();

    let output = ProcessBuilder::new("ls")
        .cwd(dir.path())
        .capture_output()
        .run()
        .await
        .unwrap();
    assert_eq!(output.stdout(), "marker.txt");
}

#[tokio::test]
async fn test_missing_executable_is_not_found() {
    let err = ProcessBuilder::new("nonexistent_program_12345")
        .run()
        .await
        .unwrap_err();
    assert!(
        matches!(err, ProcessError::ExecutableNotFound { .. }),
        "unexpected error: {err}"
    );
}

#[cfg(unix)]
#[tokio::test]
async fn test_missing_cwd_is_spawn_failure() {
    let err = ProcessBuilder::new("echo")
        .cwd("/definitely/not/a/dir/12345")
        .run()
        .await
        .unwrap_err();
    assert!(
        matches!(err, ProcessError::SpawnFailed { .. }),
        "unexpected error: {err}"
    );
}

#[cfg(unix)]
#[tokio::test]
async fn test_cancelled_token_interrupts() {
    let token = CancellationToken::new();
    let canceller = token.clone();
    tokio::spawn(async move {
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        canceller.cancel();
    });

    let err = ProcessBuilder::new("sleep")
        .arg("30")
        .run_with_cancellation(token)
        .await
        .unwrap_err();
    assert!(matches!(err, ProcessError::Interrupted { .. }));
}

#[test]
fn test_command_line_quotes_spaces() {
    let builder = ProcessBuilder::new("/usr/bin/cmake")
        .arg("-G")
        .arg("Unix Makefiles")
        .arg("..");
    insta::assert_snapshot!(builder.command_line(), @r#"cmake -G "Unix Makefiles" .."#);
}

#[test]
fn test_resolve_rejects_missing_configured_path() {
    let err = ProcessBuilder::resolve(Path::new("/no/such/cmake-12345"), "cmake").unwrap_err();
    assert!(matches!(err, ProcessError::ExecutableNotFound { .. }));
}

#[test]
fn test_executable_lookup_not_found() {
    let program = "nonexistent_program_12345";
    assert!(ProcessBuilder::which(program).is_err());
    assert!(ProcessBuilder::find(program).is_none());
}

#[test]
fn test_output_combined() {
    let both = ProcessOutput::new(0, "a".into(), "b".into(), false);
    let only_err = ProcessOutput::new(1, String::new(), "fatal: x".into(), false);
    assert_eq!(both.combined(), "a\nb");
    assert_eq!(only_err.combined(), "fatal: x");
    assert_eq!(ProcessOutput::default().combined(), "");
}
