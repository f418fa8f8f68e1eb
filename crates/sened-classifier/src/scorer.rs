// SPDX-FileCopyrightText: 2026 Sened Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-category score accumulation.

use std::collections::BTreeMap;

use sened_core::Category;
use serde::Serialize;
use strum::IntoEnumIterator;

use crate::rules::RuleTable;

/// Bonus per additional non-overlapping match of the same rule.
pub const DEFAULT_REPEAT_MATCH_BONUS: f64 = 0.5;

/// Accumulated evidence per category.
///
/// Always holds an entry for every category. Scores are non-negative and
/// only ever grow.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ScoreVector(BTreeMap<Category, f64>);

impl ScoreVector {
    /// Every category at zero.
    pub fn zeroed() -> Self {
        Self(Category::iter().map(|c| (c, 0.0)).collect())
    }

    pub fn get(&self, category: Category) -> f64 {
        self.0.get(&category).copied().unwrap_or(0.0)
    }

    /// Add non-negative evidence to a category.
    pub fn add(&mut self, category: Category, amount: f64) {
        debug_assert!(amount >= 0.0, "scores never decrease");
        *self.0.entry(category).or_insert(0.0) += amount.max(0.0);
    }

    /// Scores in category order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        self.0.iter().map(|(c, s)| (*c, *s))
    }

    pub fn total(&self) -> f64 {
        self.0.values().sum()
    }

    pub fn is_zero(&self) -> bool {
        self.0.values().all(|s| *s == 0.0)
    }

    /// The first category (in category order) holding the strictly greatest
    /// positive score, or `None` when nothing scored.
    pub fn leader(&self) -> Option<(Category, f64)> {
        self.iter().fold(None, |best, (c, s)| match best {
            Some((_, top)) if s <= top => best,
            _ if s > 0.0 => Some((c, s)),
            _ => best,
        })
    }

    /// Categories with a non-zero score.
    pub fn non_zero(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        self.iter().filter(|(_, s)| *s > 0.0)
    }
}

impl Default for ScoreVector {
    fn default() -> Self {
        Self::zeroed()
    }
}

/// Evaluate every rule of `table` against `text`.
///
/// A matching rule contributes its weight plus `repeat_match_bonus` for
/// each further non-overlapping match. A negative or NaN bonus counts as 0.
pub fn score_text(table: &RuleTable, text: &str, repeat_match_bonus: f64) -> ScoreVector {
    let repeat_match_bonus = repeat_match_bonus.max(0.0);
    let mut scores = ScoreVector::zeroed();
    for (category, rules) in table.iter() {
        for rule in rules {
            let matches = rule.match_count(text);
            if matches == 0 {
                continue;
            }
            let extra = (matches - 1) as f64 * repeat_match_bonus;
            scores.add(category, rule.weight() + extra);
        }
    }
    scores
}
