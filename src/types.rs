//! Core classification types
//!
//! Wire names are snake_case for practices and SCREAMING_CASE for statuses,
//! matching what downstream callers already consume.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScanError};

/// A category of data-handling behavior looked for in policy text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Practice {
    DataSelling,
    ThirdPartySharing,
    Advertising,
    Retention,
    SensitiveData,
}

impl Practice {
    /// All practices in catalog order. Output records follow this order.
    pub const ALL: [Practice; 5] = [
        Self::DataSelling,
        Self::ThirdPartySharing,
        Self::Advertising,
        Self::Retention,
        Self::SensitiveData,
    ];

    /// Wire name of the practice
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DataSelling => "data_selling",
            Self::ThirdPartySharing => "third_party_sharing",
            Self::Advertising => "advertising",
            Self::Retention => "retention",
            Self::SensitiveData => "sensitive_data",
        }
    }
}

impl std::fmt::Display for Practice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Practice {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| ScanError::InvalidInput(format!("unknown practice '{}'", s)))
    }
}

/// Polarity assigned to a detected practice mention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Allows,
    Forbids,
    Conditional,
    Unclear,
}

impl Status {
    /// Wire name of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Allows => "ALLOWS",
            Self::Forbids => "FORBIDS",
            Self::Conditional => "CONDITIONAL",
            Self::Unclear => "UNCLEAR",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One finding produced by the classifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationRecord {
    /// Caller-supplied opaque section identifier
    pub section_id: String,

    /// Detected practice
    pub practice: Practice,

    /// Polarity of the practice in the surrounding text
    pub status: Status,

    /// Verbatim excerpt of the input, possibly wrapped in `...` markers
    pub evidence: String,
}

/// Input to the classifier
///
/// Both fields default to empty so that a body missing one of them is
/// rejected by [`ClassificationRequest::validate`] rather than by the decoder.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassificationRequest {
    #[serde(default)]
    pub text: String,

    #[serde(default)]
    pub section_id: String,
}

impl ClassificationRequest {
    pub fn new(text: impl Into<String>, section_id: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            section_id: section_id.into(),
        }
    }

    /// Reject empty `text` or `section_id`
    pub fn validate(&self) -> Result<()> {
        validate_input(&self.text, &self.section_id)
    }
}

pub(crate) fn validate_input(text: &str, section_id: &str) -> Result<()> {
    if text.is_empty() || section_id.is_empty() {
        return Err(ScanError::InvalidInput(
            "Missing text or section_id".to_string(),
        ));
    }
    Ok(())
}
