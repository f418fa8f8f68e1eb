// SPDX-FileCopyrightText: 2026 Sened Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Checks ranges serde cannot express: threshold sign, ratio bounds,
//! rule weights, and the log level vocabulary. Rule patterns are not
//! compiled here; a malformed pattern is skipped by the classifier.

use crate::diagnostic::ConfigError;
use crate::model::SenedConfig;

/// Accepted values for `logging.level`.
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Collects every problem instead of stopping at the first one.
pub fn validate_config(config: &SenedConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();
    let classifier = &config.classifier;

    let level = config.logging.level.trim().to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "logging.level `{}` is not one of {}",
                config.logging.level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    if !classifier.confidence_threshold.is_finite() || classifier.confidence_threshold < 0.0 {
        errors.push(ConfigError::Validation {
            message: format!(
                "classifier.confidence_threshold must be a non-negative number, got {}",
                classifier.confidence_threshold
            ),
        });
    }

    if !(classifier.ambiguity_ratio > 0.0 && classifier.ambiguity_ratio <= 1.0) {
        errors.push(ConfigError::Validation {
            message: format!(
                "classifier.ambiguity_ratio must be in (0, 1], got {}",
                classifier.ambiguity_ratio
            ),
        });
    }

    if !classifier.repeat_match_bonus.is_finite() || classifier.repeat_match_bonus < 0.0 {
        errors.push(ConfigError::Validation {
            message: format!(
                "classifier.repeat_match_bonus must be a non-negative number, got {}",
                classifier.repeat_match_bonus
            ),
        });
    }

    for (i, rule) in classifier.rules.iter().enumerate() {
        if rule.pattern.trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: format!("classifier.rules[{i}].pattern must not be empty"),
            });
        }
        if !rule.weight.is_finite() || rule.weight <= 0.0 {
            errors.push(ConfigError::Validation {
                message: format!(
                    "classifier.rules[{i}].weight must be positive, got {}",
                    rule.weight
                ),
            });
        }
    }

    if config.input.max_chars == 0 {
        errors.push(ConfigError::Validation {
            message: "input.max_chars must be at least 1".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
