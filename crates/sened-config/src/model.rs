// SPDX-FileCopyrightText: 2026 Sened Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Sened classifier.
//!
//! All structs use `#[serde(deny_unknown_fields)]` so a misspelled key is
//! reported at startup instead of silently falling back to a default.

use sened_core::Category;
use serde::{Deserialize, Serialize};

/// Top-level Sened configuration.
///
/// Every section is optional and defaults to the values the builtin rule
/// table was tuned against.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SenedConfig {
    /// Log output settings.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Scoring and decision settings.
    #[serde(default)]
    pub classifier: ClassifierConfig,

    /// Input handling settings for the CLI.
    #[serde(default)]
    pub input: InputConfig,
}

/// Log output configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Classifier tuning.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ClassifierConfig {
    /// Minimum winning score for a non-fallback result.
    #[serde(default = "default_confidence_threshold")]
    pub confidence_threshold: f64,

    /// A runner-up scoring above `winner * ambiguity_ratio` (and above the
    /// threshold) makes the result ambiguous.
    #[serde(default = "default_ambiguity_ratio")]
    pub ambiguity_ratio: f64,

    /// Trimmed inputs shorter than this many characters are not scored.
    #[serde(default = "default_min_text_length")]
    pub min_text_length: usize,

    /// Bonus per additional non-overlapping match of a rule.
    #[serde(default = "default_repeat_match_bonus")]
    pub repeat_match_bonus: f64,

    /// Only boost categories that already matched at least one rule.
    #[serde(default = "default_boost_requires_base_match")]
    pub boost_requires_base_match: bool,

    /// Extra rules appended to the builtin table.
    #[serde(default)]
    pub rules: Vec<RuleConfig>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: default_confidence_threshold(),
            ambiguity_ratio: default_ambiguity_ratio(),
            min_text_length: default_min_text_length(),
            repeat_match_bonus: default_repeat_match_bonus(),
            boost_requires_base_match: default_boost_requires_base_match(),
            rules: Vec::new(),
        }
    }
}

fn default_confidence_threshold() -> f64 {
    2.0
}

fn default_ambiguity_ratio() -> f64 {
    0.6
}

fn default_min_text_length() -> usize {
    10
}

fn default_repeat_match_bonus() -> f64 {
    0.5
}

fn default_boost_requires_base_match() -> bool {
    true
}

/// A user-supplied rule, e.g.
///
/// ```toml
/// [[classifier.rules]]
/// category = "invoice"
/// pattern = "(?i)\\bproforma\\b"
/// weight = 3.0
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RuleConfig {
    /// Category the rule contributes evidence to.
    pub category: Category,
    /// Regular expression (`regex` crate syntax). Use `(?i)` for case-insensitive.
    pub pattern: String,
    /// Positive weight added on match.
    pub weight: f64,
}

/// Input handling configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct InputConfig {
    /// Inputs are truncated to this many characters before classification.
    #[serde(default = "default_max_chars")]
    pub max_chars: usize,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            max_chars: default_max_chars(),
        }
    }
}

fn default_max_chars() -> usize {
    200_000
}
