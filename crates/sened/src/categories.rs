// SPDX-FileCopyrightText: 2026 Sened Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `sened categories` command implementation.

use sened_classifier::DocumentClassifier;
use sened_core::{Category, SenedError};
use serde::Serialize;
use strum::IntoEnumIterator;

/// One row of `sened categories --json`.
#[derive(Debug, Serialize)]
pub struct CategoryInfo {
    pub id: Category,
    pub name: &'static str,
    pub amharic_name: &'static str,
    pub rules: usize,
    pub fallback: bool,
}

fn category_infos(classifier: &DocumentClassifier) -> Vec<CategoryInfo> {
    Category::iter()
        .map(|c| CategoryInfo {
            id: c,
            name: c.display_name(),
            amharic_name: c.amharic_name(),
            rules: classifier.rules().rules_for(c).len(),
            fallback: c.is_fallback(),
        })
        .collect()
}

/// List every category with its labels and active rule count.
pub fn run_categories(classifier: &DocumentClassifier, json: bool) -> Result<(), SenedError> {
    let infos = category_infos(classifier);
    if json {
        let out = serde_json::to_string_pretty(&infos)
            .map_err(|e| SenedError::Internal(format!("failed to serialize categories: {e}")))?;
        println!("{out}");
        return Ok(());
    }

    println!();
    println!("  sened categories");
    println!("  {}", "-".repeat(60));
    for info in &infos {
        let id: &str = info.id.as_ref();
        let marker = if info.fallback { " (fallback)" } else { "" };
        println!(
            "    {id:<12} {:>3} rules  {} / {}{marker}",
            info.rules,
            info.name,
            info.amharic_name
        );
    }
    println!();
    Ok(())
}
