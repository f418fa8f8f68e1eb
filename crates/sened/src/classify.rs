// SPDX-FileCopyrightText: 2026 Sened Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `sened classify` and `sened analyze` command implementations.

use std::io::IsTerminal;

use sened_classifier::{Classification, Decision, DocumentClassifier, TextAnalysis};
use sened_core::SenedError;

/// Run `sened classify` on already-read text.
///
/// `--json` prints the full [`Classification`]; otherwise a short report,
/// coloured unless `--plain` is set or stdout is not a TTY.
pub fn run_classify(
    classifier: &DocumentClassifier,
    text: &str,
    json: bool,
    plain: bool,
) -> Result<(), SenedError> {
    let result = classifier.classify_with_confidence(text);
    if json {
        println!("{}", to_json(&result)?);
    } else {
        let use_color = !plain && std::io::stdout().is_terminal();
        for line in render_classification(&result, use_color) {
            println!("{line}");
        }
    }
    Ok(())
}

/// Run `sened analyze` on already-read text.
pub fn run_analyze(
    classifier: &DocumentClassifier,
    text: &str,
    json: bool,
) -> Result<(), SenedError> {
    let analysis = classifier.analyze(text);
    if json {
        println!("{}", to_json(&analysis)?);
    } else {
        for line in render_analysis(&analysis) {
            println!("{line}");
        }
    }
    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, SenedError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| SenedError::Internal(format!("failed to serialize output: {e}")))
}

/// Human-readable report lines for one classification.
fn render_classification(result: &Classification, use_color: bool) -> Vec<String> {
    let category = result.category;
    let label = format!("{category} ({})", category.display_name());
    let verdict = if use_color {
        use colored::Colorize;
        if result.decision == Decision::Accepted {
            format!("{} {}", "✓".green(), label.green())
        } else {
            format!("{} {}", "?".yellow(), label.yellow())
        }
    } else if result.decision == Decision::Accepted {
        format!("[OK]   {label}")
    } else {
        format!("[FALLBACK] {label}")
    };

    let mut lines = vec![
        String::new(),
        "  sened classify".to_string(),
        format!("  {}", "-".repeat(35)),
        format!("    Category:   {verdict}"),
        format!("    Confidence: {}%", result.confidence),
        format!("    Script:     {}", result.script),
        format!("    Decision:   {}", result.decision),
    ];
    if !result.contenders.is_empty() {
        let names: Vec<String> = result.contenders.iter().map(|c| c.to_string()).collect();
        lines.push(format!("    Contenders: {}", names.join(", ")));
    }
    let mut scored: Vec<_> = result.scores.non_zero().collect();
    if !scored.is_empty() {
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        lines.push("    Scores:".to_string());
        for (category, score) in scored {
            let name: &str = category.as_ref();
            lines.push(format!("      {name:<12} {score:>6.1}"));
        }
    }
    lines.push(String::new());
    lines
}

fn render_analysis(analysis: &TextAnalysis) -> Vec<String> {
    let result = &analysis.classification;
    vec![
        String::new(),
        "  sened analyze".to_string(),
        format!("  {}", "-".repeat(35)),
        format!("    Preview:    {}", analysis.preview.replace('\n', " ")),
        format!("    Script:     {}", analysis.script),
        format!("    Words:      {}", analysis.word_count),
        format!(
            "    Characters: {} Ethiopic, {} Latin",
            analysis.ethiopic_chars, analysis.latin_chars
        ),
        format!(
            "    Category:   {} ({}, {}%)",
            result.category,
            result.category.amharic_name(),
            result.confidence
        ),
        format!("    Decision:   {}", result.decision),
        String::new(),
    ]
}
