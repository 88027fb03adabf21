//! Practice pattern catalog
//!
//! Three flat lookup tables drive the engine:
//! - practice -> ordered regex patterns (matched case-insensitively)
//! - forbidding phrases (negation of a practice)
//! - conditional phrases (hedging language)
//!
//! Pattern order within a practice is significance order: the first pattern
//! that matches anywhere in the text wins for that practice.

use std::sync::OnceLock;

use regex::{Regex, RegexBuilder};

use crate::error::{Result, ScanError};
use crate::types::Practice;

/// Upper bound on the compiled size of a single pattern
const PATTERN_SIZE_LIMIT: usize = 1 << 20;

/// Built-in practice patterns, in catalog order
pub const PRACTICE_PATTERNS: &[(Practice, &[&str])] = &[
    (
        Practice::DataSelling,
        &[
            r"sell.*data",
            r"sell.*information",
            r"monetize.*data",
            r"revenue.*personal",
            r"sell to third parties",
        ],
    ),
    (
        Practice::ThirdPartySharing,
        &[
            r"share.*third[\s-]part",
            r"disclose.*third[\s-]part",
            r"provide.*third[\s-]part",
            r"transfer.*third[\s-]part",
            r"third[\s-]part.*access",
            r"share.*partner",
            r"disclose.*partner",
        ],
    ),
    (
        Practice::Advertising,
        &[
            r"advertis",
            r"target.*ads",
            r"personalized ads",
            r"marketing purposes",
            r"promotional",
        ],
    ),
    (
        Practice::Retention,
        &[
            r"retain.*data",
            r"keep.*information",
            r"store.*\d+\s*(year|month|day)",
            r"retention period",
            r"delete.*after",
        ],
    ),
    (
        Practice::SensitiveData,
        &[
            r"health.*information",
            r"medical.*data",
            r"financial.*data",
            r"credit card",
            r"social security",
            r"biometric",
            r"genetic",
        ],
    ),
];

/// Phrases that negate a practice. Any hit resolves to FORBIDS.
pub const FORBID_PHRASES: &[&str] = &[
    "do not sell",
    "will not sell",
    "never sell",
    "do not share",
    "will not share",
    "prohibit",
    "forbidden",
    "not allow",
];

/// Hedging phrases. Any hit (without a forbidding phrase) resolves to CONDITIONAL.
pub const CONDITIONAL_PHRASES: &[&str] = &[
    "may share",
    "might share",
    "can share",
    "under certain",
    "in some cases",
    "with consent",
    "if you",
    "unless",
];

/// Compiled patterns for one practice
#[derive(Debug)]
pub struct PracticePatterns {
    pub practice: Practice,
    pub patterns: Vec<Regex>,
}

/// Compiled, read-only catalog shared by every classification call
#[derive(Debug)]
pub struct Catalog {
    practices: Vec<PracticePatterns>,
    forbid: Vec<String>,
    conditional: Vec<String>,
}

impl Catalog {
    /// Compile a catalog from raw tables.
    ///
    /// Phrases are lower-cased here since the resolver compares them against
    /// a lower-cased window.
    pub fn compile(
        practices: &[(Practice, &[&str])],
        forbid: &[&str],
        conditional: &[&str],
    ) -> Result<Self> {
        let practices = practices
            .iter()
            .map(|(practice, raw)| {
                let patterns = raw
                    .iter()
                    .map(|pattern| compile_pattern(*practice, pattern))
                    .collect::<Result<Vec<_>>>()?;
                Ok(PracticePatterns {
                    practice: *practice,
                    patterns,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            practices,
            forbid: forbid.iter().map(|p| p.to_lowercase()).collect(),
            conditional: conditional.iter().map(|p| p.to_lowercase()).collect(),
        })
    }

    /// The built-in catalog, compiled once per process
    pub fn builtin() -> Result<&'static Catalog> {
        static CATALOG: OnceLock<std::result::Result<Catalog, String>> = OnceLock::new();
        CATALOG
            .get_or_init(|| {
                Catalog::compile(PRACTICE_PATTERNS, FORBID_PHRASES, CONDITIONAL_PHRASES)
                    .map_err(|e| e.to_string())
            })
            .as_ref()
            .map_err(|e| ScanError::Internal(e.clone()))
    }

    pub fn practices(&self) -> &[PracticePatterns] {
        &self.practices
    }

    pub fn forbid_phrases(&self) -> &[String] {
        &self.forbid
    }

    pub fn conditional_phrases(&self) -> &[String] {
        &self.conditional
    }
}

fn compile_pattern(practice: Practice, pattern: &str) -> Result<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .size_limit(PATTERN_SIZE_LIMIT)
        .build()
        .map_err(|e| {
            ScanError::Internal(format!(
                "Invalid pattern for {}: {}: {}",
                practice, pattern, e
            ))
        })
}
