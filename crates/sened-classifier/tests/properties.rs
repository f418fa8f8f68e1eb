// SPDX-FileCopyrightText: 2026 Sened Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property tests for classifier invariants.

use std::sync::LazyLock;

use proptest::prelude::*;
use sened_classifier::{ContextBoosters, Decision, DocumentClassifier};
use sened_core::Category;

static CLASSIFIER: LazyLock<DocumentClassifier> = LazyLock::new(DocumentClassifier::new);

/// Mix of keywords, Ethiopic, and noise so rules actually fire.
fn document_text() -> impl Strategy<Value = String> {
    let words = prop::sample::select(vec![
        "invoice", "total", "amount", "$100.00", "agreement", "court", "judge", "report",
        "summary", "diploma", "GPA", "doctor", "license", "valid", "ID", "2024-01-15",
        "ደረሰኝ", "ውል", "ሪፖርት", "መታወቂያ", "ፍርድ", "document", "the", "of", "and", "42",
    ]);
    prop::collection::vec(words, 0..40).prop_map(|w| w.join(" "))
}

proptest! {
    #[test]
    fn short_input_is_always_fallback(text in "\\PC{0,9}") {
        let result = CLASSIFIER.classify_with_confidence(&text);
        prop_assert_eq!(result.category, Category::Other);
        prop_assert_eq!(result.decision, Decision::TooShort);
        prop_assert!(result.scores.is_zero());
    }

    #[test]
    fn classification_is_deterministic(text in document_text()) {
        let first = CLASSIFIER.classify_with_confidence(&text);
        let second = CLASSIFIER.classify_with_confidence(&text);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn confidence_is_zero_only_without_evidence(text in document_text()) {
        let result = CLASSIFIER.classify_with_confidence(&text);
        prop_assert!(result.confidence <= 100);
        prop_assert_eq!(result.confidence == 0, result.scores.is_zero());
    }

    #[test]
    fn scores_are_non_negative(text in document_text()) {
        let scores = CLASSIFIER.scores(&text);
        prop_assert!(scores.iter().all(|(_, s)| s >= 0.0 && s.is_finite()));
    }

    #[test]
    fn accepted_result_clears_threshold(text in document_text()) {
        let result = CLASSIFIER.classify_with_confidence(&text);
        if result.decision == Decision::Accepted {
            let threshold = CLASSIFIER.settings().confidence_threshold;
            prop_assert!(result.scores.get(result.category) >= threshold);
        } else {
            prop_assert_eq!(result.category, Category::Other);
        }
    }

    #[test]
    fn boosts_never_lift_unmatched_categories(text in document_text()) {
        let base = CLASSIFIER.base_scores(&text);
        let boosted = CLASSIFIER.scores(&text);
        for (category, score) in base.iter() {
            if score == 0.0 {
                prop_assert_eq!(boosted.get(category), 0.0);
            } else {
                prop_assert!(boosted.get(category) >= score);
            }
        }
    }

    #[test]
    fn boosting_never_lowers_scores(text in document_text()) {
        let unboosted = DocumentClassifier::from_parts(
            CLASSIFIER.rules().clone(),
            ContextBoosters::none(),
            *CLASSIFIER.settings(),
        );
        let plain = unboosted.scores(&text);
        let boosted = CLASSIFIER.scores(&text);
        for (category, score) in plain.iter() {
            prop_assert!(boosted.get(category) >= score);
        }
    }
}
