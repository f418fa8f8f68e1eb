// SPDX-FileCopyrightText: 2026 Sened Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Document categories and writing scripts.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumCount, EnumIter, EnumString};

/// Document category emitted by the classifier.
///
/// Declaration order is the scoring and tie-break order. `Other` is the
/// fallback and must stay last.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    EnumIter,
    EnumCount,
    AsRefStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Invoice,
    Contract,
    Report,
    IdCard,
    Educational,
    Medical,
    License,
    Legal,
    Other,
}

impl Category {
    /// The "I don't know" category.
    pub const FALLBACK: Category = Category::Other;

    /// Whether this is the fallback category.
    pub fn is_fallback(self) -> bool {
        self == Self::FALLBACK
    }

    /// English label used when filing documents.
    pub fn display_name(self) -> &'static str {
        match self {
            Category::Invoice => "Invoice / Bill / Receipt",
            Category::Contract => "Contract / Agreement",
            Category::Report => "Report / Analysis",
            Category::IdCard => "ID Card / Identification",
            Category::Educational => "Educational Document",
            Category::Medical => "Medical Document",
            Category::License => "License / Certificate",
            Category::Legal => "Legal Document",
            Category::Other => "Other Document",
        }
    }

    /// Amharic label used when filing documents.
    pub fn amharic_name(self) -> &'static str {
        match self {
            Category::Invoice => "የገቢዎች መግለጫ / ፋክተር / ሬሲፕት",
            Category::Contract => "ውል / ስምምነት",
            Category::Report => "ሪፖርት / ትንተና",
            Category::IdCard => "መታወቂያ ካርድ / መታወቂያ",
            Category::Educational => "የትምህርት ሰነድ",
            Category::Medical => "የጤና ሰነድ",
            Category::License => "ፍቃድ / ማረጋገጫ",
            Category::Legal => "የሕግ ሰነድ",
            Category::Other => "ሌላ ሰነድ",
        }
    }
}

/// Dominant writing script of a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Script {
    /// Ge'ez script (Amharic), U+1200..=U+137F.
    Ethiopic,
    /// ASCII Latin letters (English).
    Latin,
    /// Neither script present.
    Unknown,
}
