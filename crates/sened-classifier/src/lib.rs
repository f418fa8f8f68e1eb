// SPDX-FileCopyrightText: 2026 Sened Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rule-based classification of Amharic and English document text.
//!
//! This crate provides:
//! - [`DocumentClassifier`]: weighted pattern scoring with context boosts and
//!   a conservative accept/reject decision
//! - [`RuleTable`]: the builtin bilingual rule set, extensible from config
//! - [`run_self_test`]: accuracy check against a labelled sample corpus
//!
//! The classifier never fails outward: weak, ambiguous, or too-short input
//! yields [`Category::Other`](sened_core::Category::Other).

pub mod boost;
pub mod classifier;
pub mod rules;
pub mod samples;
pub mod scorer;
pub mod script;

pub use boost::ContextBoosters;
pub use classifier::{
    Classification, ClassifierSettings, Decision, DocumentClassifier, TextAnalysis,
};
pub use rules::RuleTable;
pub use samples::{run_self_test, SelfTestReport, REQUIRED_PASS_RATE, SAMPLE_DOCUMENTS};
pub use scorer::ScoreVector;
pub use script::detect_script;
