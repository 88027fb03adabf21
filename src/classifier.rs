//! Result assembly
//!
//! Ties the matcher, resolver and evidence extractor together. The engine is
//! a pure function of its input: the catalog is read-only after compilation,
//! so a classifier can be shared across threads and called concurrently.

use crate::catalog::Catalog;
use crate::error::Result;
use crate::evidence::extract_evidence;
use crate::matcher::find_practices;
use crate::resolver::resolve_status;
use crate::types::{validate_input, ClassificationRecord, Practice, Status};

/// Evidence text of the placeholder record emitted when nothing matched
pub const FALLBACK_EVIDENCE: &str = "No specific privacy practices detected in this section";

/// Practice reported by the placeholder record.
///
/// This conflates "no findings" with "advertising, unclear". Downstream
/// callers depend on the exact shape, so it stays until they can handle a
/// dedicated no-findings marker.
pub const FALLBACK_PRACTICE: Practice = Practice::Advertising;

/// Classifier bound to a compiled catalog
#[derive(Debug, Clone, Copy)]
pub struct PracticeClassifier<'c> {
    catalog: &'c Catalog,
}

impl PracticeClassifier<'static> {
    /// Classifier over the built-in catalog
    pub fn builtin() -> Result<Self> {
        Ok(Self::new(Catalog::builtin()?))
    }
}

impl<'c> PracticeClassifier<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    /// Classify one section of policy text.
    ///
    /// Returns at most one record per practice in catalog order, or exactly
    /// one UNCLEAR placeholder when no practice matched. Fails with
    /// `InvalidInput` if `text` or `section_id` is empty.
    pub fn classify(&self, text: &str, section_id: &str) -> Result<Vec<ClassificationRecord>> {
        validate_input(text, section_id)?;

        let mut records: Vec<ClassificationRecord> = find_practices(self.catalog, text)
            .into_iter()
            .map(|m| {
                let status = resolve_status(self.catalog, text, m.start, m.end);
                tracing::debug!(
                    section_id,
                    practice = %m.practice,
                    pattern = m.pattern_index,
                    start = m.start,
                    %status,
                    "Practice detected"
                );
                ClassificationRecord {
                    section_id: section_id.to_string(),
                    practice: m.practice,
                    status,
                    evidence: extract_evidence(text, m.start),
                }
            })
            .collect();

        if records.is_empty() {
            tracing::debug!(section_id, "No practices detected");
            records.push(fallback_record(section_id));
        }

        Ok(records)
    }
}

/// Placeholder record for a section with no detected practice
pub fn fallback_record(section_id: &str) -> ClassificationRecord {
    ClassificationRecord {
        section_id: section_id.to_string(),
        practice: FALLBACK_PRACTICE,
        status: Status::Unclear,
        evidence: FALLBACK_EVIDENCE.to_string(),
    }
}

/// Classify `text` with the built-in catalog
pub fn classify(text: &str, section_id: &str) -> Result<Vec<ClassificationRecord>> {
    PracticeClassifier::builtin()?.classify(text, section_id)
}
