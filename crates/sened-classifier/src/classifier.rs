// SPDX-FileCopyrightText: 2026 Sened Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Document classification: scoring, boosting, and the accept/reject decision.
//!
//! A result is accepted only when the leading category clears an absolute
//! threshold AND no other category comes within the ambiguity ratio of it.
//! Everything else falls back to [`Category::FALLBACK`].

use std::panic::{self, AssertUnwindSafe};

use sened_config::ClassifierConfig;
use sened_core::{Category, Script};
use serde::Serialize;
use tracing::{debug, error};

use crate::boost::ContextBoosters;
use crate::rules::RuleTable;
use crate::scorer::{self, ScoreVector};
use crate::script::{self, ScriptProfile};

/// Tunable scalars, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifierSettings {
    /// Minimum winning score for a non-fallback result.
    pub confidence_threshold: f64,
    /// Fraction of the winning score a rival must exceed to cause ambiguity.
    pub ambiguity_ratio: f64,
    /// Trimmed inputs shorter than this many characters are not scored.
    pub min_text_length: usize,
    /// Bonus per extra non-overlapping match of one rule.
    pub repeat_match_bonus: f64,
}

impl Default for ClassifierSettings {
    fn default() -> Self {
        Self::from(&ClassifierConfig::default())
    }
}

impl From<&ClassifierConfig> for ClassifierSettings {
    fn from(config: &ClassifierConfig) -> Self {
        Self {
            confidence_threshold: config.confidence_threshold,
            ambiguity_ratio: config.ambiguity_ratio,
            min_text_length: config.min_text_length,
            repeat_match_bonus: config.repeat_match_bonus,
        }
    }
}

/// Why the classifier returned what it returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    /// The leader cleared the threshold with no close rival.
    ///
    /// The leader may be the fallback category itself when only its generic
    /// rules matched; `category` is then `other` but the result is still a
    /// confident one, unlike every other decision.
    Accepted,
    /// Input shorter than the minimum length; nothing was scored.
    TooShort,
    /// No rule matched.
    NoEvidence,
    /// The leader scored below the confidence threshold.
    BelowThreshold,
    /// Two or more categories were too close to call.
    Ambiguous,
    /// Classification failed internally.
    Failed,
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = match self {
            Decision::Accepted => "accepted",
            Decision::TooShort => "text too short",
            Decision::NoEvidence => "no matching rules",
            Decision::BelowThreshold => "below confidence threshold",
            Decision::Ambiguous => "ambiguous between categories",
            Decision::Failed => "classification failed",
        };
        f.write_str(reason)
    }
}

/// Result of classifying one text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    /// The returned category. Always the fallback unless `decision` is
    /// `Accepted`.
    pub category: Category,
    /// Leader's share of the total score, 0-100.
    pub confidence: u8,
    /// Final scores after boosting.
    pub scores: ScoreVector,
    /// Dominant script of the input.
    pub script: Script,
    pub decision: Decision,
    /// Categories that made the result ambiguous; empty otherwise.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub contenders: Vec<Category>,
}

impl Classification {
    fn new(category: Category, decision: Decision, scores: ScoreVector, script: Script) -> Self {
        Self {
            category,
            confidence: confidence_percent(&scores),
            scores,
            script,
            decision,
            contenders: Vec::new(),
        }
    }

    fn fallback(decision: Decision, scores: ScoreVector, script: Script) -> Self {
        Self::new(Category::FALLBACK, decision, scores, script)
    }

    pub fn is_fallback(&self) -> bool {
        self.category.is_fallback()
    }
}

/// `leader / total * 100`, rounded and capped at 100; 0 when nothing scored.
fn confidence_percent(scores: &ScoreVector) -> u8 {
    let total = scores.total();
    match scores.leader() {
        Some((_, top)) if total > 0.0 => ((top / total) * 100.0).round().min(100.0) as u8,
        _ => 0,
    }
}

/// Run `evaluate`, turning a panic into a logged fallback result.
fn guarded(len: usize, evaluate: impl FnOnce() -> Classification) -> Classification {
    match panic::catch_unwind(AssertUnwindSafe(evaluate)) {
        Ok(classification) => classification,
        Err(payload) => {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            error!(error = %message, len, "classification failed, using fallback");
            Classification::fallback(Decision::Failed, ScoreVector::zeroed(), Script::Unknown)
        }
    }
}

/// Diagnostic breakdown of a text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextAnalysis {
    /// First 100 characters, with `...` appended when truncated.
    pub preview: String,
    pub script: Script,
    pub word_count: usize,
    pub ethiopic_chars: usize,
    pub latin_chars: usize,
    pub classification: Classification,
}

const PREVIEW_CHARS: usize = 100;

/// Rule-based document classifier.
///
/// Holds only immutable data, so one instance can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct DocumentClassifier {
    rules: RuleTable,
    boosters: ContextBoosters,
    settings: ClassifierSettings,
}

impl DocumentClassifier {
    /// Builtin rules, builtin boosters, default settings.
    pub fn new() -> Self {
        Self::from_parts(
            RuleTable::builtin(),
            ContextBoosters::builtin(),
            ClassifierSettings::default(),
        )
    }

    /// Builtin tables with a custom threshold and ambiguity ratio.
    pub fn with_thresholds(confidence_threshold: f64, ambiguity_ratio: f64) -> Self {
        Self::from_parts(
            RuleTable::builtin(),
            ContextBoosters::builtin(),
            ClassifierSettings {
                confidence_threshold,
                ambiguity_ratio,
                ..ClassifierSettings::default()
            },
        )
    }

    /// Builtin tables extended and tuned by configuration.
    pub fn from_config(config: &ClassifierConfig) -> Self {
        let rules = RuleTable::builtin().with_rules(
            config
                .rules
                .iter()
                .map(|r| (r.category, r.pattern.as_str(), r.weight)),
        );
        let boosters = ContextBoosters::builtin().require_base_match(config.boost_requires_base_match);
        Self::from_parts(rules, boosters, ClassifierSettings::from(config))
    }

    pub fn from_parts(
        rules: RuleTable,
        boosters: ContextBoosters,
        settings: ClassifierSettings,
    ) -> Self {
        Self {
            rules,
            boosters,
            settings,
        }
    }

    pub fn settings(&self) -> &ClassifierSettings {
        &self.settings
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Classify `text`, returning the fallback when unsure.
    pub fn classify(&self, text: &str) -> Category {
        self.classify_with_confidence(text).category
    }

    /// Classify `text` and report confidence, scores, and script.
    ///
    /// Never panics: an internal failure is logged and reported as
    /// [`Decision::Failed`] with the fallback category.
    pub fn classify_with_confidence(&self, text: &str) -> Classification {
        guarded(text.len(), || self.evaluate(text))
    }

    /// Rule scores before boosting.
    pub fn base_scores(&self, text: &str) -> ScoreVector {
        scorer::score_text(&self.rules, text, self.settings.repeat_match_bonus)
    }

    /// Rule scores with context boosts applied.
    pub fn scores(&self, text: &str) -> ScoreVector {
        let mut scores = self.base_scores(text);
        self.boosters.apply(text, &mut scores);
        scores
    }

    /// Classification plus character statistics.
    pub fn analyze(&self, text: &str) -> TextAnalysis {
        let profile = ScriptProfile::of(text);
        let mut preview: String = text.chars().take(PREVIEW_CHARS).collect();
        if text.chars().nth(PREVIEW_CHARS).is_some() {
            preview.push_str("...");
        }
        TextAnalysis {
            preview,
            script: profile.dominant(),
            word_count: text.split_whitespace().count(),
            ethiopic_chars: profile.ethiopic,
            latin_chars: profile.latin,
            classification: self.classify_with_confidence(text),
        }
    }

    fn evaluate(&self, text: &str) -> Classification {
        let script = script::detect_script(text);
        let length = text.trim().chars().count();
        if length < self.settings.min_text_length {
            debug!(length, min = self.settings.min_text_length, "text too short to classify");
            return Classification::fallback(Decision::TooShort, ScoreVector::zeroed(), script);
        }

        let mut scores = self.base_scores(text);
        let boosted = self.boosters.apply(text, &mut scores);

        let Some((leader, top)) = scores.leader() else {
            debug!(length, "no rule matched");
            return Classification::fallback(Decision::NoEvidence, scores, script);
        };

        let threshold = self.settings.confidence_threshold;
        if top < threshold {
            debug!(%leader, score = top, threshold, "leader below threshold");
            return Classification::fallback(Decision::BelowThreshold, scores, script);
        }

        let rivals: Vec<Category> = scores
            .iter()
            .filter(|(_, s)| *s > top * self.settings.ambiguity_ratio && *s > threshold)
            .map(|(c, _)| c)
            .collect();
        let tied: Vec<Category> = scores
            .iter()
            .filter(|(_, s)| *s == top)
            .map(|(c, _)| c)
            .collect();

        let contenders = if rivals.len() > 1 {
            rivals
        } else if tied.len() > 1 {
            tied
        } else {
            Vec::new()
        };

        if !contenders.is_empty() {
            debug!(?contenders, score = top, "ambiguous classification");
            let mut result = Classification::fallback(Decision::Ambiguous, scores, script);
            result.contenders = contenders;
            return result;
        }

        debug!(
            category = %leader,
            score = top,
            ?boosted,
            ?scores,
            length,
            "document classified"
        );
        Classification::new(leader, Decision::Accepted, scores, script)
    }
}

impl Default for DocumentClassifier {
    fn default() -> Self {
        Self::new()
    }
}
