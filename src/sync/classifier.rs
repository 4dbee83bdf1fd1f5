// soa-devtools: Seed of Andromeda developer tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Decides whether a git command's captured output means success.
//!
//! ```text
//!                     exit != 0   fatal:/error: line   warning: line
//! ExitStatusClassifier  Failed       Clean               Clean
//! PatternClassifier     Failed       Failed              Warning
//! ```

use crate::config::types::ClassifierKind;
use crate::core::process::builder::ProcessOutput;

const FAILURE_PREFIXES: &[&str] = &["fatal:", "error:"];
const WARNING_PREFIXES: &[&str] = &["warning:"];

/// Outcome of classifying one command's output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Clean,
    /// Succeeded, with the lines worth surfacing.
    Warning(String),
    /// Failed, with the reason.
    Failed(String),
}

/// Pluggable result classification for captured git output.
pub trait OutputClassifier: Send + Sync {
    fn name(&self) -> &'static str;

    fn classify(&self, output: &ProcessOutput) -> Verdict;
}

/// Trusts git: only a non-zero exit is a failure.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExitStatusClassifier;

impl OutputClassifier for ExitStatusClassifier {
    fn name(&self) -> &'static str {
        "exit-status"
    }

    fn classify(&self, output: &ProcessOutput) -> Verdict {
        exit_verdict(output).unwrap_or(Verdict::Clean)
    }
}

/// Exit status plus git's `fatal:`, `error:` and `warning:` line prefixes.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternClassifier;

impl OutputClassifier for PatternClassifier {
    fn name(&self) -> &'static str {
        "patterns"
    }

    fn classify(&self, output: &ProcessOutput) -> Verdict {
        if let Some(failed) = exit_verdict(output) {
            return failed;
        }

        let mut warnings = Vec::new();
        for line in output.lines().map(str::trim_start) {
            if has_prefix(line, FAILURE_PREFIXES) {
                return Verdict::Failed(line.to_string());
            }
            if has_prefix(line, WARNING_PREFIXES) {
                warnings.push(line);
            }
        }

        if warnings.is_empty() {
            Verdict::Clean
        } else {
            Verdict::Warning(warnings.join("\n"))
        }
    }
}

/// Classifier selected by configuration.
#[must_use]
pub fn classifier_for(kind: ClassifierKind) -> Box<dyn OutputClassifier> {
    match kind {
        ClassifierKind::ExitStatus => Box::new(ExitStatusClassifier),
        ClassifierKind::Patterns => Box::new(PatternClassifier),
    }
}

fn exit_verdict(output: &ProcessOutput) -> Option<Verdict> {
    (!output.success()).then(|| Verdict::Failed(format!("exited with code {}", output.exit_code())))
}

fn has_prefix(line: &str, prefixes: &[&str]) -> bool {
    prefixes.iter().any(|prefix| line.starts_with(prefix))
}
