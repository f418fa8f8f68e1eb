// SPDX-FileCopyrightText: 2026 Sened Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dominant-script detection for diagnostics.

use std::ops::RangeInclusive;

use sened_core::Script;
use serde::Serialize;

/// The Ethiopic Unicode block used by Amharic.
pub const ETHIOPIC: RangeInclusive<char> = '\u{1200}'..='\u{137F}';

/// Character counts per script.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScriptProfile {
    pub ethiopic: usize,
    pub latin: usize,
}

impl ScriptProfile {
    pub fn of(text: &str) -> Self {
        text.chars().fold(Self::default(), |mut profile, c| {
            if ETHIOPIC.contains(&c) {
                profile.ethiopic += 1;
            } else if c.is_ascii_alphabetic() {
                profile.latin += 1;
            }
            profile
        })
    }

    /// Ethiopic wins only with strictly more characters.
    pub fn dominant(&self) -> Script {
        match (self.ethiopic, self.latin) {
            (0, 0) => Script::Unknown,
            (e, l) if e > l => Script::Ethiopic,
            _ => Script::Latin,
        }
    }
}

pub fn detect_script(text: &str) -> Script {
    ScriptProfile::of(text).dominant()
}
