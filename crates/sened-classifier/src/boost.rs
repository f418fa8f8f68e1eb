// SPDX-FileCopyrightText: 2026 Sened Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Context boosts: bonus weight when several independent cues co-occur.
//!
//! A lone currency symbol says little, but a date next to an amount is a
//! strong invoice signal. Each booster is a conjunction of patterns scoped to
//! one category.

use std::sync::LazyLock;

use regex::Regex;
use sened_core::Category;
use tracing::warn;

use crate::scorer::ScoreVector;

/// One uncompiled booster.
#[derive(Debug, Clone, Copy)]
pub struct BoostDef {
    pub name: &'static str,
    pub category: Category,
    /// Every pattern must match somewhere in the text.
    pub conditions: &'static [&'static str],
    pub bonus: f64,
}

/// Dates like `15/01/2024`, `1-2-24`, or `2024-01-15`.
const DATE: &str = r"\b(\d{1,2}[/\-]\d{1,2}[/\-]\d{2,4}|\d{4}[/\-]\d{1,2}[/\-]\d{1,2})\b";

/// Builtin boosters.
pub const BUILTIN_BOOSTS: &[BoostDef] = &[
    BoostDef {
        name: "invoice_date_and_amount",
        category: Category::Invoice,
        conditions: &[DATE, r"(\$|€|£|ብር|ETB)\s*[\d,]+\.?\d*"],
        bonus: 2.0,
    },
    BoostDef {
        name: "id_number_and_birth_date",
        category: Category::IdCard,
        conditions: &[
            r"(?i)\b(ID|መታወቂያ|Card)[\s:]*([A-Z0-9\-]+)\b",
            r"(?i)\b(DOB|Date of Birth|የትውልድ ቀን)[\s:]*(\d{1,2}[/\-]\d{1,2}[/\-]\d{4})",
        ],
        bonus: 2.5,
    },
    BoostDef {
        name: "contract_dated_between_parties",
        category: Category::Contract,
        conditions: &[
            r"(?i)\b(effective|signed|dated|executed|ውጤታማ|ፊርማ)[\s:]*(\d{1,2}[/\-]\d{1,2}[/\-]\d{2,4})",
            r"(?i)\b(party|between|ከ...መካከል|በ...እና...መካከል)\b",
        ],
        bonus: 2.0,
    },
    BoostDef {
        name: "grade_and_degree",
        category: Category::Educational,
        conditions: &[
            r"(?i)\b(GPA|CGPA|Grade|Score|ነጥብ|ደረጃ)[\s:]*([A-F]|\d+\.?\d*)",
            r"(?i)\b(Bachelor|Master|Doctorate|Degree|ዲግሪ|ዲፕሎማ)\b",
        ],
        bonus: 2.0,
    },
    BoostDef {
        name: "prescription",
        category: Category::Medical,
        conditions: &[r"(?i)\b(prescription|medication|dosage|መድሃኒት|መጠን)"],
        bonus: 1.5,
    },
    BoostDef {
        name: "validity_period",
        category: Category::License,
        conditions: &[r"(?i)\b(expir|valid|ብቃት|የሚያበቃ)"],
        bonus: 1.5,
    },
];

static BUILTIN_BOOSTERS: LazyLock<Vec<ContextBooster>> = LazyLock::new(|| {
    BUILTIN_BOOSTS
        .iter()
        .filter_map(ContextBooster::compile)
        .collect()
});

/// A compiled booster.
#[derive(Debug, Clone)]
pub struct ContextBooster {
    name: &'static str,
    category: Category,
    conditions: Vec<Regex>,
    bonus: f64,
}

impl ContextBooster {
    /// Compile a booster; any bad condition drops the whole booster.
    pub fn compile(def: &BoostDef) -> Option<Self> {
        let conditions = def
            .conditions
            .iter()
            .map(|p| Regex::new(p))
            .collect::<Result<Vec<_>, _>>();
        match conditions {
            Ok(conditions) if def.bonus > 0.0 && !conditions.is_empty() => Some(Self {
                name: def.name,
                category: def.category,
                conditions,
                bonus: def.bonus,
            }),
            Ok(_) => {
                warn!(booster = def.name, "skipping booster without conditions or bonus");
                None
            }
            Err(e) => {
                warn!(booster = def.name, error = %e, "skipping booster with malformed condition");
                None
            }
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn bonus(&self) -> f64 {
        self.bonus
    }

    /// All conditions present in `text`.
    pub fn applies(&self, text: &str) -> bool {
        self.conditions.iter().all(|c| c.is_match(text))
    }
}

/// The set of boosters applied after base scoring.
#[derive(Debug, Clone)]
pub struct ContextBoosters {
    boosters: Vec<ContextBooster>,
    require_base_match: bool,
}

impl ContextBoosters {
    /// Builtin boosters; only categories with a base match are boosted.
    pub fn builtin() -> Self {
        Self {
            boosters: BUILTIN_BOOSTERS.clone(),
            require_base_match: true,
        }
    }

    /// No boosting at all.
    pub fn none() -> Self {
        Self {
            boosters: Vec::new(),
            require_base_match: true,
        }
    }

    pub fn from_defs(defs: &[BoostDef]) -> Self {
        Self {
            boosters: defs.iter().filter_map(ContextBooster::compile).collect(),
            require_base_match: true,
        }
    }

    /// When false, a booster may lift a category that matched no rule.
    pub fn require_base_match(mut self, require: bool) -> Self {
        self.require_base_match = require;
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &ContextBooster> {
        self.boosters.iter()
    }

    /// Add every applicable bonus to `scores`; returns the names of the
    /// boosters that fired.
    pub fn apply(&self, text: &str, scores: &mut ScoreVector) -> Vec<&'static str> {
        let mut fired = Vec::new();
        for booster in &self.boosters {
            if self.require_base_match && scores.get(booster.category) <= 0.0 {
                continue;
            }
            if booster.applies(text) {
                scores.add(booster.category, booster.bonus);
                fired.push(booster.name);
            }
        }
        fired
    }
}

impl Default for ContextBoosters {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(category: Category) -> ScoreVector {
        let mut scores = ScoreVector::zeroed();
        scores.add(category, 1.0);
        scores
    }

    #[test]
    fn builtin_boosters_all_compile() {
        assert_eq!(ContextBoosters::builtin().iter().count(), BUILTIN_BOOSTS.len());
    }

    #[test]
    fn invoice_needs_date_and_amount() {
        let boosters = ContextBoosters::builtin();

        let mut scores = seeded(Category::Invoice);
        let fired = boosters.apply("Due 2024-01-15, total $1,200.00", &mut scores);
        assert_eq!(fired, vec!["invoice_date_and_amount"]);
        assert_eq!(scores.get(Category::Invoice), 3.0);

        let mut scores = seeded(Category::Invoice);
        boosters.apply("Total $1,200.00 only", &mut scores);
        assert_eq!(scores.get(Category::Invoice), 1.0, "amount alone is not enough");
    }

    #[test]
    fn id_card_needs_number_and_birth_date() {
        let boosters = ContextBoosters::builtin();
        let mut scores = seeded(Category::IdCard);
        boosters.apply("ID: AB-12345 Date of Birth: 01/02/1990", &mut scores);
        assert_eq!(scores.get(Category::IdCard), 3.5);
    }

    #[test]
    fn contract_needs_signed_date_and_party() {
        let boosters = ContextBoosters::builtin();
        let mut scores = seeded(Category::Contract);
        boosters.apply("Signed 12/03/2023 between the first party and the second", &mut scores);
        assert_eq!(scores.get(Category::Contract), 3.0);
    }

    #[test]
    fn educational_needs_grade_and_degree() {
        let boosters = ContextBoosters::builtin();
        let mut scores = seeded(Category::Educational);
        boosters.apply("Bachelor of Science, GPA: 3.8", &mut scores);
        assert_eq!(scores.get(Category::Educational), 3.0);
    }

    #[test]
    fn single_condition_boosters() {
        let boosters = ContextBoosters::builtin();

        let mut scores = seeded(Category::Medical);
        boosters.apply("Dosage: twice daily", &mut scores);
        assert_eq!(scores.get(Category::Medical), 2.5);

        let mut scores = seeded(Category::License);
        boosters.apply("Expires next year", &mut scores);
        assert_eq!(scores.get(Category::License), 2.5);
    }

    #[test]
    fn zero_base_category_is_not_boosted() {
        let boosters = ContextBoosters::builtin();
        let mut scores = ScoreVector::zeroed();
        let fired = boosters.apply("Valid until 2030", &mut scores);
        assert!(fired.is_empty());
        assert!(scores.is_zero());
    }

    #[test]
    fn ungated_boost_lifts_zero_base() {
        let boosters = ContextBoosters::builtin().require_base_match(false);
        let mut scores = ScoreVector::zeroed();
        boosters.apply("Valid until 2030", &mut scores);
        assert_eq!(scores.get(Category::License), 1.5);
    }

    #[test]
    fn malformed_condition_drops_booster() {
        let defs = [
            BoostDef {
                name: "broken",
                category: Category::Report,
                conditions: &["(unclosed"],
                bonus: 1.0,
            },
            BoostDef {
                name: "fine",
                category: Category::Report,
                conditions: &[r"(?i)\bchart\b"],
                bonus: 1.0,
            },
        ];
        let boosters = ContextBoosters::from_defs(&defs);
        let names: Vec<&str> = boosters.iter().map(ContextBooster::name).collect();
        assert_eq!(names, vec!["fine"]);
    }

    #[test]
    fn none_never_changes_scores() {
        let mut scores = seeded(Category::Invoice);
        ContextBoosters::none().apply("2024-01-15 $100", &mut scores);
        assert_eq!(scores.get(Category::Invoice), 1.0);
    }
}
