//! Practice matching
//!
//! Matching is first-hit-per-practice, not exhaustive: for each practice the
//! patterns are tried in catalog order, the first pattern with any match wins,
//! and only its leftmost match is kept. This caps output at one finding per
//! practice per section and keeps overlapping patterns from producing
//! near-duplicate detections.

use crate::catalog::{Catalog, PracticePatterns};
use crate::types::Practice;

/// Representative match for one practice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PracticeMatch {
    pub practice: Practice,
    /// Index of the winning pattern within the practice's list
    pub pattern_index: usize,
    /// Byte offset of the match start in the original text
    pub start: usize,
    /// Byte offset of the match end in the original text
    pub end: usize,
}

/// First match for a single practice, if any of its patterns hit
pub fn first_match(entry: &PracticePatterns, text: &str) -> Option<PracticeMatch> {
    entry
        .patterns
        .iter()
        .enumerate()
        .find_map(|(pattern_index, regex)| {
            regex.find(text).map(|m| PracticeMatch {
                practice: entry.practice,
                pattern_index,
                start: m.start(),
                end: m.end(),
            })
        })
}

/// Representative matches for every practice that occurs in `text`, in
/// catalog order
pub fn find_practices(catalog: &Catalog, text: &str) -> Vec<PracticeMatch> {
    catalog
        .practices()
        .iter()
        .filter_map(|entry| first_match(entry, text))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builtin() -> &'static Catalog {
        Catalog::builtin().unwrap()
    }

    #[test]
    fn test_no_match() {
        assert!(find_practices(builtin(), "The weather today is sunny.").is_empty());
    }

    #[test]
    fn test_single_practice() {
        let matches = find_practices(builtin(), "We use advertising cookies.");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].practice, Practice::Advertising);
        assert_eq!(matches[0].pattern_index, 0);
        assert_eq!(matches[0].start, 7);
    }

    #[test]
    fn test_earlier_pattern_wins_over_earlier_position() {
        // "retention period" (pattern 3) appears before "retain ... data"
        // (pattern 0), but pattern order decides.
        let text = "The retention period is short. We retain your data.";
        let matches = find_practices(builtin(), text);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].practice, Practice::Retention);
        assert_eq!(matches[0].pattern_index, 0);
        assert_eq!(matches[0].start, text.find("retain your").unwrap());
    }

    #[test]
    fn test_leftmost_occurrence_of_winning_pattern() {
        let text = "We sell data. We also sell data again.";
        let matches = find_practices(builtin(), text);
        assert_eq!(matches[0].practice, Practice::DataSelling);
        assert_eq!(matches[0].start, 3);
    }

    #[test]
    fn test_case_insensitive_offsets_refer_to_original() {
        let text = "WE SELL DATA";
        let matches = find_practices(builtin(), text);
        assert_eq!(matches.len(), 1);
        assert_eq!(&text[matches[0].start..matches[0].end], "SELL DATA");
    }

    #[test]
    fn test_multiple_practices_in_catalog_order() {
        let text = "Biometric identifiers are stored. We sell data and use advertising.";
        let practices: Vec<Practice> = find_practices(builtin(), text)
            .into_iter()
            .map(|m| m.practice)
            .collect();
        assert_eq!(
            practices,
            vec![
                Practice::DataSelling,
                Practice::Advertising,
                Practice::SensitiveData
            ]
        );
    }

    #[test]
    fn test_third_party_hyphen_variant() {
        let matches = find_practices(builtin(), "We share it with third-party vendors.");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].practice, Practice::ThirdPartySharing);
    }
}
