// SPDX-FileCopyrightText: 2026 Sened Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in labelled corpus and the self-test that runs against it.

use sened_core::Category;
use serde::Serialize;
use tracing::info;

use crate::classifier::{Classification, DocumentClassifier};

/// Share of samples that must classify correctly for the self-test to pass.
pub const REQUIRED_PASS_RATE: f64 = 0.7;

/// One labelled sample.
#[derive(Debug, Clone, Copy)]
pub struct SampleDocument {
    pub label: &'static str,
    pub expected: Category,
    pub text: &'static str,
}

const fn sample(label: &'static str, expected: Category, text: &'static str) -> SampleDocument {
    SampleDocument {
        label,
        expected,
        text,
    }
}

pub const SAMPLE_DOCUMENTS: &[SampleDocument] = &[
    sample(
        "Amharic ID card",
        Category::IdCard,
        "የመንግሥት መታወቂያ ካርድ ሙሉ ስም አባት ስም ተወለደበት ቀን አድራሻ ፎቶ መታወቂያ ቁጥር የተሰጠበት ቀን የሚያበቃበት ቀን",
    ),
    sample(
        "Amharic invoice",
        Category::Invoice,
        "የሽያጭ ፋክተር ቁጥር INV-001 ቀን 2024-01-15 ጠቅላላ መጠን 1000 ብር የታክስ መጠን 150 ብር ደንበኛ ኩባንያ የክፍያ ዘዴ",
    ),
    sample(
        "Amharic contract",
        Category::Contract,
        "የሥራ ውል ስምምነት በኩባንያ እና በሰራተኛ መካከል ፊርማ ማህተም ውሎች እና ሁኔታዎች አንቀፅ 1 አንቀፅ 2",
    ),
    sample(
        "Amharic report",
        Category::Report,
        "ዓመታዊ ሪፖርት ማጠቃለያ የሥራ አፈጻጸም ትንተና ውጤት ማጠቃለያ ሃሳብ የበጀት ሪፖርት ግምገማ",
    ),
    sample(
        "Amharic educational",
        Category::Educational,
        "የትምህርት ማረጋገጫ ዩኒቨርሲቲ ዲፕሎማ ተማሪ ነጥብ ውጤት ደረጃ ምደባ ኮርስ መደብ",
    ),
    sample(
        "Amharic medical",
        Category::Medical,
        "የጤና ማረጋገጫ ህክምና ዶክተር መድሃኒት ምርመራ ላቦራቶሪ የደም ምርመራ ሕማም ምልክት",
    ),
    sample(
        "English invoice",
        Category::Invoice,
        "INVOICE NUMBER INV-001 DATE 2024-01-15 TOTAL AMOUNT $1000.00 TAX AMOUNT $150.00 CUSTOMER COMPANY PAYMENT METHOD",
    ),
    sample(
        "English contract",
        Category::Contract,
        "EMPLOYMENT CONTRACT AGREEMENT BETWEEN COMPANY AND EMPLOYEE SIGNATURE WITNESS TERMS AND CONDITIONS EFFECTIVE DATE",
    ),
    sample(
        "English report",
        Category::Report,
        "ANNUAL REPORT EXECUTIVE SUMMARY PERFORMANCE ANALYSIS FINDINGS RECOMMENDATIONS CONCLUSION GRAPHS CHARTS",
    ),
    sample(
        "English ID card",
        Category::IdCard,
        "GOVERNMENT ID CARD FULL NAME DATE OF BIRTH ADDRESS PHOTO ID NUMBER EXPIRY DATE PLACE OF BIRTH",
    ),
    sample(
        "English educational",
        Category::Educational,
        "UNIVERSITY DIPLOMA BACHELOR DEGREE TRANSCRIPT GPA CREDITS COURSES GRADUATION DATE HONORS",
    ),
    sample(
        "English medical",
        Category::Medical,
        "MEDICAL CERTIFICATE DOCTOR PRESCRIPTION MEDICATION LABORATORY TEST DIAGNOSIS TREATMENT HOSPITAL",
    ),
    sample(
        "English license",
        Category::License,
        "BUSINESS LICENSE PERMIT NUMBER ISSUE DATE EXPIRATION DATE AUTHORIZED ACTIVITIES REGISTRATION",
    ),
    sample(
        "English legal",
        Category::Legal,
        "COURT DOCUMENT LEGAL AFFIDAVIT WITNESS STATEMENT CASE NUMBER JUDGE SIGNATURE HEARING DATE",
    ),
];

/// Outcome for one sample.
#[derive(Debug, Clone, Serialize)]
pub struct SampleOutcome {
    pub label: &'static str,
    pub expected: Category,
    pub classification: Classification,
}

impl SampleOutcome {
    pub fn passed(&self) -> bool {
        self.classification.category == self.expected
    }
}

/// Aggregate result of [`run_self_test`].
#[derive(Debug, Clone, Serialize)]
pub struct SelfTestReport {
    pub outcomes: Vec<SampleOutcome>,
    pub passed: usize,
    pub total: usize,
    /// Passed share, 0.0-1.0.
    pub accuracy: f64,
}

impl SelfTestReport {
    pub fn is_pass(&self) -> bool {
        self.accuracy >= REQUIRED_PASS_RATE
    }

    pub fn failures(&self) -> impl Iterator<Item = &SampleOutcome> {
        self.outcomes.iter().filter(|o| !o.passed())
    }
}

/// Classify every sample in `samples` and tally the results.
pub fn run_self_test(classifier: &DocumentClassifier, samples: &[SampleDocument]) -> SelfTestReport {
    let outcomes: Vec<SampleOutcome> = samples
        .iter()
        .map(|s| SampleOutcome {
            label: s.label,
            expected: s.expected,
            classification: classifier.classify_with_confidence(s.text),
        })
        .collect();
    let passed = outcomes.iter().filter(|o| o.passed()).count();
    let total = outcomes.len();
    let accuracy = if total == 0 {
        0.0
    } else {
        passed as f64 / total as f64
    };
    info!(passed, total, accuracy, "self-test complete");
    SelfTestReport {
        outcomes,
        passed,
        total,
        accuracy,
    }
}
