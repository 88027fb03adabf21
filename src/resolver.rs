//! Status resolution
//!
//! A practice match only proves the topic is discussed. Polarity comes from
//! negation or hedging language near the match, searched in a lower-cased
//! window of [`CONTEXT_RADIUS`] characters on each side of the match span.
//!
//! Precedence: FORBIDS > CONDITIONAL > ALLOWS. An explicit prohibition
//! dominates hedging that co-occurs with it ("we will not share your data
//! unless required by law"). No restrictive language at all means ALLOWS.

use crate::catalog::Catalog;
use crate::evidence::{chars_back, chars_forward};
use crate::types::Status;

/// Characters searched on each side of the match span
pub const CONTEXT_RADIUS: usize = 200;

/// Lower-cased context window around the byte span `start..end`
pub fn context_window(text: &str, start: usize, end: usize) -> String {
    let from = chars_back(text, start, CONTEXT_RADIUS);
    let to = chars_forward(text, end, CONTEXT_RADIUS);
    text[from..to].to_lowercase()
}

/// Resolve the status of a match spanning `start..end` in `text`
pub fn resolve_status(catalog: &Catalog, text: &str, start: usize, end: usize) -> Status {
    let window = context_window(text, start, end);

    if let Some(phrase) = find_phrase(&window, catalog.forbid_phrases()) {
        tracing::trace!(phrase, "Forbidding phrase in context");
        return Status::Forbids;
    }

    if let Some(phrase) = find_phrase(&window, catalog.conditional_phrases()) {
        tracing::trace!(phrase, "Conditional phrase in context");
        return Status::Conditional;
    }

    Status::Allows
}

fn find_phrase<'a>(window: &str, phrases: &'a [String]) -> Option<&'a str> {
    phrases
        .iter()
        .find(|phrase| window.contains(phrase.as_str()))
        .map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(text: &str, needle: &str) -> Status {
        let catalog = Catalog::builtin().unwrap();
        let start = text.find(needle).unwrap();
        resolve_status(catalog, text, start, start + needle.len())
    }

    #[test]
    fn test_forbidding_phrase() {
        assert_eq!(
            resolve("We will never sell your personal data.", "sell your personal data"),
            Status::Forbids
        );
    }

    #[test]
    fn test_conditional_phrase() {
        assert_eq!(
            resolve("We may share your information with partners.", "share"),
            Status::Conditional
        );
    }

    #[test]
    fn test_forbids_beats_conditional() {
        assert_eq!(
            resolve(
                "We will not share your data unless required by law.",
                "share your data"
            ),
            Status::Forbids
        );
    }

    #[test]
    fn test_no_restrictive_language_allows() {
        assert_eq!(
            resolve("We use advertising cookies for personalized ads.", "advertis"),
            Status::Allows
        );
    }

    #[test]
    fn test_phrase_matching_ignores_case() {
        assert_eq!(resolve("We DO NOT SELL data.", "SELL data"), Status::Forbids);
    }

    #[test]
    fn test_phrase_outside_window_is_ignored() {
        let text = format!(
            "We do not sell anything.{}We sell data to brokers.",
            " ".repeat(250)
        );
        let start = text.rfind("sell data").unwrap();
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(
            resolve_status(catalog, &text, start, start + "sell data".len()),
            Status::Allows
        );
    }

    #[test]
    fn test_window_reaches_past_match_end() {
        let text = format!("We sell data.{}We do not sell anything.", " ".repeat(150));
        assert_eq!(resolve(&text, "sell data"), Status::Forbids);
    }

    #[test]
    fn test_window_after_match_is_exactly_radius_chars() {
        // "sell data" ends at byte 12; "never sell" fills chars 190..200 after it
        let inside = format!("We sell data{}never sell", "x".repeat(190));
        assert_eq!(resolve(&inside, "sell data"), Status::Forbids);

        let outside = format!("We sell data{}never sell", "x".repeat(191));
        assert_eq!(resolve(&outside, "sell data"), Status::Allows);
    }

    #[test]
    fn test_window_before_match_is_exactly_radius_chars() {
        // "advertis" starts 200 chars in, so the window begins at "prohibit"
        let inside = format!("prohibit{}advertising", "y".repeat(192));
        assert_eq!(resolve(&inside, "advertis"), Status::Forbids);

        // one more char drops the leading "p"
        let outside = format!("prohibit{}advertising", "y".repeat(193));
        assert_eq!(resolve(&outside, "advertis"), Status::Allows);
    }

    #[test]
    fn test_context_window_is_lowercased_and_clipped() {
        let window = context_window("ABC Sell DEF", 4, 8);
        assert_eq!(window, "abc sell def");
    }
}
