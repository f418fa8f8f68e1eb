// SPDX-FileCopyrightText: 2026 Sened Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Builtin rule table and its compiled form.
//!
//! Rules are plain data: a category, a regular expression, and a positive
//! weight. Script-aware rules start with an Ethiopic character class and then
//! look ahead (lazily) for an Amharic keyword on the same line; Latin rules
//! are case-insensitive word alternations. Extending the table never touches
//! the scorer.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use sened_core::{Category, Result, SenedError};
use strum::IntoEnumIterator;
use tracing::warn;

/// One uncompiled rule.
#[derive(Debug, Clone, Copy)]
pub struct RuleDef {
    pub pattern: &'static str,
    pub weight: f64,
}

const fn rule(pattern: &'static str, weight: f64) -> RuleDef {
    RuleDef { pattern, weight }
}

/// The uncompiled rules of one category, in evaluation order.
#[derive(Debug, Clone, Copy)]
pub struct CategoryRules {
    pub category: Category,
    pub rules: &'static [RuleDef],
}

/// Builtin rules for Amharic and English documents.
pub const BUILTIN_RULES: &[CategoryRules] = &[
    CategoryRules {
        category: Category::Invoice,
        rules: &[
            rule(r"[\x{1200}-\x{137F}].*?(ደረሰኝ|ፋክተር|ቢል|ሪሴፕት|ክፍያ|ግብይት|የግብይት)", 3.5),
            rule(r"[\x{1200}-\x{137F}].*?(ጠቅላላ|ድምር|ታክስ|ግብይት ታክስ|ተ.ከፋይ|ዋጋ)", 3.0),
            rule(r"[\x{1200}-\x{137F}].*?(የሽያጭ|የግዢ|የክፍያ|የተለጠፈ|የንግድ)", 4.0),
            rule(r"[\x{1200}-\x{137F}].*?(ቀን|ታሪፍ|ቁጥር|መጠን|ዋጋ)", 2.5),
            rule(r"[\x{1200}-\x{137F}].*?(ከፋይ|ሸማች|ደንበኛ|ኩባንያ)", 2.0),
            rule(r"(?i)\b(invoice|bill|receipt|payment|voucher|statement)\b", 3.5),
            rule(r"(?i)\b(sales invoice|purchase invoice|tax invoice|commercial invoice|proforma)\b", 4.0),
            rule(r"(?i)\b(total amount|subtotal|tax amount|grand total|balance due|amount due)\b", 3.0),
            rule(r"(?i)\b(paid|unpaid|pending|settled|outstanding)\b", 2.5),
            rule(r"(?i)\b(customer|client|buyer|seller|vendor|supplier)\b", 2.0),
            rule(r"(?i)(ብር|ዶላር|ኢዩሮ|£|\$|€|ETB)\s*[\d,]+\.?\d*", 3.0),
            rule(r"(?i)\b(INV-\d+|BILL-\d+|ፋክተር-\d+|REC-\d+|INV\d+|RC\d+)", 3.5),
            rule(r"(?i)\b(quantity|qty|unit price|description|item)\b", 2.5),
        ],
    },
    CategoryRules {
        category: Category::Contract,
        rules: &[
            rule(r"[\x{1200}-\x{137F}].*?(ውል|ስምምነት|ኪራይ|ግብይት|ቃል ኪዳን|ስምምነት)", 4.0),
            rule(r"[\x{1200}-\x{137F}].*?(ፊርማ|ተፈራረማ|ማህተም|የማህተም|ምልክት)", 3.5),
            rule(r"[\x{1200}-\x{137F}].*?(ውሎ|በዚህ ውል|በዚህ ስምምነት|የተሰማራ)", 3.0),
            rule(r"[\x{1200}-\x{137F}].*?(አንቀፅ|ክፍል|ዓንቀጽ|ሁኔታ|ደንብ)", 2.5),
            rule(r"[\x{1200}-\x{137F}].*?(ወቅት|ጊዜ|ቀን|የሚጀምር|የሚያበቃ)", 2.0),
            rule(r"(?i)\b(contract|agreement|lease|deed|covenant|treaty|pact)\b", 4.0),
            rule(r"(?i)\b(employment contract|service agreement|rental agreement|partnership|memorandum)\b", 4.5),
            rule(r"(?i)\b(signature|signed|witness|notary|seal|stamp|endorsement)\b", 3.5),
            rule(r"(?i)\b(party|clause|article|section|whereas|therefore|hereby)\b", 3.0),
            rule(r"(?i)\b(terms and conditions|obligations|rights|responsibilities)\b", 3.0),
            rule(r"(?i)\b(effective date|termination|renewal|duration|period)\b", 2.5),
        ],
    },
    CategoryRules {
        category: Category::Report,
        rules: &[
            rule(r"[\x{1200}-\x{137F}].*?(ሪፖርት|ማጠቃለያ|ግኝት|ትንተና|የምርምር|ዘገባ)", 4.0),
            rule(r"[\x{1200}-\x{137F}].*?(ማጠቃለያ|የሥራ አፈጻጸም|ውጤት|መደምደሚያ|ሃሳብ)", 3.5),
            rule(r"[\x{1200}-\x{137F}].*?(የበጀት|ዓመታዊ|ወርሃዊ|የሥራ አፈጻጸም|የትንታኔ)", 3.5),
            rule(r"[\x{1200}-\x{137F}].*?(ግምገማ|ምዘና|ደረጃ|ነጥብ|ውጤት)", 3.0),
            rule(r"(?i)\b(report|summary|analysis|findings|research|evaluation|study)\b", 4.0),
            rule(r"(?i)\b(annual report|monthly report|progress report|performance report|financial report)\b", 4.5),
            rule(r"(?i)\b(executive summary|conclusion|recommendation|methodology|results)\b", 3.5),
            rule(r"(?i)\b(graph|chart|table|figure|diagram|statistics|data)\b", 3.0),
            rule(r"(?i)\b(analysis|evaluation|assessment|review|audit)\b", 3.0),
            rule(r"(?i)\b(objective|scope|methodology|limitations|appendix)\b", 2.5),
        ],
    },
    CategoryRules {
        category: Category::IdCard,
        rules: &[
            rule(r"[\x{1200}-\x{137F}].*?(መታወቂያ ካርድ|የመንግሥት መታወቂያ|ዲጂታል መታወቂያ|አይ ዲ ካርድ)", 5.0),
            rule(r"[\x{1200}-\x{137F}].*?(ስም|የአባት ስም|የአያት ስም|የትውልድ ስፍራ|ጾታ|ፆታ)", 4.0),
            rule(r"[\x{1200}-\x{137F}].*?(የትውልድ ቀን|ተወለደበት ቀን|አድራሻ|የተወለደበት ቦታ|ቀን የተወለደ)", 3.5),
            rule(r"[\x{1200}-\x{137F}].*?(ፎቶ|ስእል|የፎቶ ስእል|ፎቶግራፍ|ምስል)", 3.0),
            rule(r"[\x{1200}-\x{137F}].*?(የተሰጠበት ቀን|የሚያበቃበት ቀን|ብቃት|ማረጋገጫ)", 3.0),
            rule(r"(?i)\b(ID card|identification card|identity document|government ID|national ID)\b", 5.0),
            rule(r"(?i)\b(full name|date of birth|place of birth|gender|nationality|citizenship)\b", 4.0),
            rule(r"(?i)\b(address|residence|photo|photograph|signature|picture)\b", 3.5),
            rule(r"(?i)\b(ID number|identification number|personal number|card number)\b", 4.0),
            rule(r"(?i)\b(expiry date|date of issue|valid until|issued date)\b", 3.5),
            rule(r"(?i)\b(passport|driver license|residence permit|work permit)\b", 4.0),
        ],
    },
    CategoryRules {
        category: Category::Educational,
        rules: &[
            rule(r"[\x{1200}-\x{137F}].*?(ዲፕሎማ|ማረጋገጫ|ተመስጣኝ|የትምህርት ማረጋገጫ|ማስረጃ)", 5.0),
            rule(r"[\x{1200}-\x{137F}].*?(ዩኒቨርሲቲ|ኮሌጅ|ት/ቤት|ትምህርት ቤት|ከፍተኛ ትምህርት|አካዳሚ)", 4.0),
            rule(r"[\x{1200}-\x{137F}].*?(ነጥብ|ውጤት|ፅድቅ|መጠን|ደረጃ|ምዘና|ምደባ)", 3.5),
            rule(r"[\x{1200}-\x{137F}].*?(ተማሪ|ተማሪዎች|መምህር|ፕሮፌሰር|ዶክተር)", 3.0),
            rule(r"[\x{1200}-\x{137F}].*?(ኮርስ|መደብ|ትምህርት|ጥናት|ምረቃ)", 3.0),
            rule(r"(?i)\b(diploma|certificate|transcript|degree|qualification|credential)\b", 5.0),
            rule(r"(?i)\b(university|college|school|institution|academy|faculty)\b", 4.0),
            rule(r"(?i)\b(grade|score|mark|point|GPA|credit|assessment|examination)\b", 3.5),
            rule(r"(?i)\b(bachelor|master|doctorate|PhD|undergraduate|graduate|postgraduate)\b", 4.0),
            rule(r"(?i)\b(course|subject|module|program|curriculum|syllabus)\b", 3.0),
            rule(r"(?i)\b(graduation|completion|award|honors|distinction)\b", 3.0),
        ],
    },
    CategoryRules {
        category: Category::Medical,
        rules: &[
            rule(r"[\x{1200}-\x{137F}].*?(ጤና|ህክምና|የጤና ማረጋገጫ|ምርመራ|የጤና መግለጫ|ህክምናዊ)", 5.0),
            rule(r"[\x{1200}-\x{137F}].*?(ዶክተር|ሀኪም|መድሃኒት|በሽታ|ሕማም|የጤና ባለሙያ)", 4.0),
            rule(r"[\x{1200}-\x{137F}].*?(ላቦራቶሪ|በሽታ መጠሪያ|ሕማም|የደም ምርመራ|በሽታ ማረጋገጫ)", 3.5),
            rule(r"[\x{1200}-\x{137F}].*?(ህመም|ምልክት|ስሜት|ቁጥጥር|መጠን)", 3.0),
            rule(r"[\x{1200}-\x{137F}].*?(ሕክምና ቤት|ጤና ጣቢያ|ሆስፒታል|ክሊኒክ)", 3.5),
            rule(r"(?i)\b(medical|health|treatment|diagnosis|examination|healthcare)\b", 5.0),
            rule(r"(?i)\b(doctor|physician|prescription|medicine|drug|illness|disease)\b", 4.0),
            rule(r"(?i)\b(laboratory|test|blood test|medical test|diagnostic|scan)\b", 3.5),
            rule(r"(?i)\b(patient|medical history|family history|symptoms|condition)\b", 3.5),
            rule(r"(?i)\b(hospital|clinic|health center|medical center|pharmacy)\b", 3.0),
            rule(r"(?i)\b(prescription|medication|dosage|frequency|duration)\b", 3.0),
        ],
    },
    CategoryRules {
        category: Category::License,
        rules: &[
            rule(r"[\x{1200}-\x{137F}].*?(ፍቃድ|ብቃት ማረጋገጫ|ማረጋገጫ|የሥራ ፍቃድ|ማሰረጃ)", 5.0),
            rule(r"[\x{1200}-\x{137F}].*?(የሥራ ፍቃድ|የንግድ ፍቃድ|የመንጃ ፍቃድ|የቢዝነስ ፍቃድ|የሥራ ማስረጃ)", 4.5),
            rule(r"[\x{1200}-\x{137F}].*?(ባለቤት|ተፈቃድ|የተፈቀደ|የሚሠራበት ጊዜ|የሚያገለግልበት)", 3.5),
            rule(r"[\x{1200}-\x{137F}].*?(የተሰጠበት ቀን|የሚያበቃበት ቀን|ብቃት|አይነት|ዓይነት)", 3.0),
            rule(r"(?i)\b(license|certificate|permit|authorization|accreditation|certification)\b", 5.0),
            rule(r"(?i)\b(business license|driver license|work permit|professional license|operating license)\b", 4.5),
            rule(r"(?i)\b(license number|certificate number|permit number|registration number)\b", 4.0),
            rule(r"(?i)\b(licensed|certified|authorized|accredited|registered|approved)\b", 3.5),
            rule(r"(?i)\b(expiration date|renewal date|valid from|valid until|issue date)\b", 3.0),
        ],
    },
    CategoryRules {
        category: Category::Legal,
        rules: &[
            rule(r"[\x{1200}-\x{137F}].*?(የሕግ ሰነድ|ፍርድ|ፍትሕ|በፍርድ ቤት|የሕግ አዋጅ|ሕጋዊ)", 5.0),
            rule(r"[\x{1200}-\x{137F}].*?(ክርክር|መርማሪ|መከላከያ|ተከሳሽ|ጠበቃ|ዓቃቤ ሕግ)", 4.0),
            rule(r"[\x{1200}-\x{137F}].*?(ፍርድ ቤት|ጉዳይ|ወንጀል|ሰበካ|ችሎት)", 3.5),
            rule(r"[\x{1200}-\x{137F}].*?(ማስረጃ|ማረጋገጫ|ሰነድ|ወረቀት|መረጃ)", 3.0),
            rule(r"(?i)\b(legal document|court|judgment|law|statute|regulation)\b", 5.0),
            rule(r"(?i)\b(plaintiff|defendant|lawyer|attorney|case|lawsuit)\b", 4.0),
            rule(r"(?i)\b(affidavit|summons|warrant|subpoena|injunction)\b", 4.5),
            rule(r"(?i)\b(evidence|testimony|witness|hearing|trial|proceeding)\b", 3.5),
            rule(r"(?i)\b(judge|magistrate|prosecutor|counsel|advocate)\b", 3.5),
        ],
    },
    CategoryRules {
        category: Category::Other,
        rules: &[
            rule(r"[\x{1200}-\x{137F}].*?(ሰነድ|ፋይል|ወረቀት|መግለጫ|መረጃ|መግለጫ)", 1.0),
            rule(r"(?i)\b(document|file|paper|statement|information|record)\b", 1.0),
        ],
    },
];

static BUILTIN_TABLE: LazyLock<RuleTable> = LazyLock::new(|| RuleTable::from_defs(BUILTIN_RULES));

/// A rule whose pattern compiled and whose weight is positive.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    pattern: Regex,
    weight: f64,
}

impl CompiledRule {
    /// Compile a pattern, rejecting non-positive or non-finite weights.
    pub fn compile(category: Category, pattern: &str, weight: f64) -> Result<Self> {
        if !weight.is_finite() || weight <= 0.0 {
            return Err(SenedError::InvalidWeight {
                category,
                pattern: pattern.to_string(),
                weight,
            });
        }
        let pattern = Regex::new(pattern).map_err(|e| SenedError::InvalidPattern {
            category,
            pattern: pattern.to_string(),
            source: Box::new(e),
        })?;
        Ok(Self { pattern, weight })
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn as_str(&self) -> &str {
        self.pattern.as_str()
    }

    /// Number of non-overlapping matches in `text`.
    pub fn match_count(&self, text: &str) -> usize {
        self.pattern.find_iter(text).count()
    }
}

/// Compiled rules for every category, iterated in [`Category`] order.
///
/// Construction never fails: a rule that does not compile is logged and
/// left out, and every other rule is kept.
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: BTreeMap<Category, Vec<CompiledRule>>,
    skipped: usize,
}

impl RuleTable {
    /// The builtin table. Compiled once per process and cloned afterwards.
    pub fn builtin() -> Self {
        BUILTIN_TABLE.clone()
    }

    /// A table with no rules at all.
    pub fn empty() -> Self {
        Self {
            rules: Category::iter().map(|c| (c, Vec::new())).collect(),
            skipped: 0,
        }
    }

    /// Compile a table from rule definitions.
    pub fn from_defs(groups: &[CategoryRules]) -> Self {
        let mut table = Self::empty();
        for group in groups {
            for def in group.rules {
                table.push(group.category, def.pattern, def.weight);
            }
        }
        table
    }

    /// Append extra rules after the existing ones of their category.
    pub fn with_rules<'a>(
        mut self,
        extra: impl IntoIterator<Item = (Category, &'a str, f64)>,
    ) -> Self {
        for (category, pattern, weight) in extra {
            self.push(category, pattern, weight);
        }
        self
    }

    fn push(&mut self, category: Category, pattern: &str, weight: f64) {
        match CompiledRule::compile(category, pattern, weight) {
            Ok(rule) => self.rules.entry(category).or_default().push(rule),
            Err(e) => {
                warn!(%category, error = %e, "skipping rule");
                self.skipped += 1;
            }
        }
    }

    /// Rules of one category.
    pub fn rules_for(&self, category: Category) -> &[CompiledRule] {
        self.rules.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every category with its rules, in category order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[CompiledRule])> {
        self.rules.iter().map(|(c, r)| (*c, r.as_slice()))
    }

    /// Total number of compiled rules.
    pub fn len(&self) -> usize {
        self.rules.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of rules rejected during construction.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}
