// SPDX-FileCopyrightText: 2026 Sened Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `sened self-test` command implementation.
//!
//! Classifies the builtin labelled samples and reports each outcome, the way
//! a health check lists its probes.

use std::io::IsTerminal;

use sened_classifier::samples::SampleOutcome;
use sened_classifier::{DocumentClassifier, REQUIRED_PASS_RATE, SAMPLE_DOCUMENTS, run_self_test};
use sened_core::SenedError;

/// Run the self-test. Fails when accuracy is below the required rate.
pub fn run_self_test_command(
    classifier: &DocumentClassifier,
    plain: bool,
) -> Result<(), SenedError> {
    let use_color = !plain && std::io::stdout().is_terminal();
    let report = run_self_test(classifier, SAMPLE_DOCUMENTS);

    println!();
    println!("  sened self-test");
    println!("  {}", "-".repeat(50));
    for outcome in &report.outcomes {
        println!("{}", outcome_line(outcome, use_color));
    }
    println!();

    let percent = (report.accuracy * 100.0).round();
    println!(
        "  {}/{} passed ({percent}%, need {}%).",
        report.passed,
        report.total,
        (REQUIRED_PASS_RATE * 100.0).round()
    );
    println!();

    if report.is_pass() {
        Ok(())
    } else {
        Err(SenedError::Internal(format!(
            "self-test failed: {}/{} samples classified correctly",
            report.passed, report.total
        )))
    }
}

fn outcome_line(outcome: &SampleOutcome, use_color: bool) -> String {
    let got = outcome.classification.category;
    let confidence = outcome.classification.confidence;
    if outcome.passed() {
        if use_color {
            use colored::Colorize;
            format!(
                "    {} {:<22} {got} ({confidence}%)",
                "✓".green(),
                outcome.label
            )
        } else {
            format!("    [OK]   {:<22} {got} ({confidence}%)", outcome.label)
        }
    } else {
        let detail = format!("expected {}, got {got}", outcome.expected);
        if use_color {
            use colored::Colorize;
            format!("    {} {:<22} {}", "✗".red(), outcome.label, detail.red())
        } else {
            format!("    [FAIL] {:<22} {detail}", outcome.label)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_classifier_passes() {
        assert!(run_self_test_command(&DocumentClassifier::new(), true).is_ok());
    }

    #[test]
    fn impossible_threshold_fails_with_internal_error() {
        let strict = DocumentClassifier::with_thresholds(1_000.0, 0.6);
        let err = run_self_test_command(&strict, true).unwrap_err();
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("0/14"));
    }

    #[test]
    fn plain_lines_mark_pass_and_fail() {
        let report = run_self_test(&DocumentClassifier::new(), &SAMPLE_DOCUMENTS[..1]);
        let line = outcome_line(&report.outcomes[0], false);
        assert!(line.starts_with("    [OK]   Amharic ID card"));
        assert!(line.contains("id_card"));

        let strict = DocumentClassifier::with_thresholds(1_000.0, 0.6);
        let report = run_self_test(&strict, &SAMPLE_DOCUMENTS[..1]);
        let line = outcome_line(&report.outcomes[0], false);
        assert!(line.contains("[FAIL]"));
        assert!(line.contains("expected id_card, got other"));
    }
}
