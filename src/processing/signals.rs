//! Regex signal detection over raw resume text

use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Character class of the whitespace every text split and trim uses. Includes
/// U+FEFF and leaves out U+0085, unlike Unicode `White_Space`.
pub const WHITESPACE_CLASS: &str =
    r"[\t\n\x0B\x0C\r \u{00A0}\u{1680}\u{2000}-\u{200A}\u{2028}\u{2029}\u{202F}\u{205F}\u{3000}\u{FEFF}]";

/// Membership test for [`WHITESPACE_CLASS`], for trimming
pub fn is_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r' | ' ' | '\u{A0}' | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}' | '\u{2029}' | '\u{202F}' | '\u{205F}' | '\u{3000}' | '\u{FEFF}'
    )
}

/// Trim [`WHITESPACE_CLASS`] characters from both ends
pub fn trim(text: &str) -> &str {
    text.trim_matches(is_whitespace)
}

/// Features detected in a single piece of text. Recomputed on every analysis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalSet {
    pub has_action_verbs: bool,
    pub has_metrics: bool,
    pub has_skills_section: bool,
    pub has_dates: bool,
    pub has_objective: bool,
    pub has_education: bool,
    pub has_contact_info: bool,
    pub has_pronouns: bool,
    pub has_generic_terms: bool,
    pub word_count: usize,
}

impl SignalSet {
    /// Number of structural markers present (skills, dates, objective, education, contact)
    pub fn structural_marker_count(&self) -> usize {
        [
            self.has_skills_section,
            self.has_dates,
            self.has_objective,
            self.has_education,
            self.has_contact_info,
        ]
        .iter()
        .filter(|present| **present)
        .count()
    }
}

/// Compiled detectors. Build once and reuse across calls.
pub struct SignalDetector {
    action_verbs: Regex,
    metrics: Regex,
    skills_section: Regex,
    dates: Regex,
    objective: Regex,
    education: Regex,
    contact_info: Regex,
    pronouns: Regex,
    generic_terms: Regex,
    whitespace: Regex,
}

impl Default for SignalDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl SignalDetector {
    pub fn new() -> Self {
        // Case folding, `\b` and digit classes are ASCII only: `ſ` is not an `s`.
        let action_verbs = Regex::new(r"(?i-u)achieved|improved|led|managed|developed|created|implemented")
            .expect("Invalid action verb regex");

        let metrics = Regex::new(r"(?i-u)increased|decreased|reduced|improved by [0-9]+%|[0-9]+%|saved \$[0-9]+|\$[0-9]+k")
            .expect("Invalid metrics regex");

        let skills_section = Regex::new(r"(?i-u)skills|technologies|proficiencies")
            .expect("Invalid skills regex");

        let dates = Regex::new(r"(?i-u)\b(?:19|20)[0-9]{2}\b|present|current")
            .expect("Invalid date regex");

        let objective = Regex::new(r"(?i-u)objective|summary|profile")
            .expect("Invalid objective regex");

        let education = Regex::new(r"(?i-u)education|university|college|degree|bachelor|master|phd")
            .expect("Invalid education regex");

        let contact_info = Regex::new(r"(?i-u)email|phone|linkedin|github")
            .expect("Invalid contact regex");

        let pronouns = Regex::new(r"(?i-u)\bI\b|\bmy\b|\bme\b")
            .expect("Invalid pronoun regex");

        let generic_terms = Regex::new(r"(?i-u)hard worker|team player|detail-oriented|self-starter")
            .expect("Invalid generic terms regex");

        let whitespace = Regex::new(&format!("{}+", WHITESPACE_CLASS)).expect("Invalid whitespace regex");

        Self {
            action_verbs,
            metrics,
            skills_section,
            dates,
            objective,
            education,
            contact_info,
            pronouns,
            generic_terms,
            whitespace,
        }
    }

    /// Run every detector against `text`
    pub fn extract_signals(&self, text: &str) -> SignalSet {
        let signals = SignalSet {
            has_action_verbs: self.action_verbs.is_match(text),
            has_metrics: self.metrics.is_match(text),
            has_skills_section: self.skills_section.is_match(text),
            has_dates: self.dates.is_match(text),
            has_objective: self.objective.is_match(text),
            has_education: self.education.is_match(text),
            has_contact_info: self.contact_info.is_match(text),
            has_pronouns: self.pronouns.is_match(text),
            has_generic_terms: self.generic_terms.is_match(text),
            word_count: self.word_count(text),
        };

        debug!("Extracted signals: {:?}", signals);
        signals
    }

    /// Count the pieces left after splitting on whitespace runs.
    ///
    /// Leading or trailing whitespace yields an empty piece that still counts,
    /// and the empty string counts as one word.
    pub fn word_count(&self, text: &str) -> usize {
        self.whitespace.split(text).count()
    }
}

/// Convenience wrapper that builds a detector for a single call
pub fn extract_signals(text: &str) -> SignalSet {
    SignalDetector::new().extract_signals(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_has_no_signals() {
        let signals = extract_signals("");

        assert!(!signals.has_action_verbs);
        assert!(!signals.has_metrics);
        assert_eq!(signals.structural_marker_count(), 0);
        assert!(!signals.has_pronouns);
        assert!(!signals.has_generic_terms);
        assert_eq!(signals.word_count, 1);
    }

    #[test]
    fn test_action_verbs_and_metrics() {
        let detector = SignalDetector::new();

        let signals = detector.extract_signals("Implemented caching that cut latency by 40%");
        assert!(signals.has_action_verbs);
        assert!(signals.has_metrics);

        let signals = detector.extract_signals("Saved $12000 in licensing");
        assert!(!signals.has_action_verbs);
        assert!(signals.has_metrics);

        let signals = detector.extract_signals("Budget of $50k");
        assert!(signals.has_metrics);
    }

    #[test]
    fn test_patterns_match_inside_words() {
        // "led" inside "skilled" counts as an action verb
        let signals = extract_signals("A skilled person");
        assert!(signals.has_action_verbs);
        assert!(!signals.has_skills_section);
    }

    #[test]
    fn test_structural_markers() {
        let text = "PROFILE\nEmail: jane@example.com\nEDUCATION\nSKILLS\n2019 - Present";
        let signals = extract_signals(text);

        assert!(signals.has_objective);
        assert!(signals.has_contact_info);
        assert!(signals.has_education);
        assert!(signals.has_skills_section);
        assert!(signals.has_dates);
        assert_eq!(signals.structural_marker_count(), 5);
    }

    #[test]
    fn test_date_needs_word_boundaries() {
        assert!(!extract_signals("order 120245").has_dates);
        assert!(extract_signals("since 2015.").has_dates);
        assert!(!extract_signals("since 1899").has_dates);
    }

    #[test]
    fn test_pronouns() {
        assert!(extract_signals("I built things").has_pronouns);
        assert!(extract_signals("that was my project").has_pronouns);
        assert!(extract_signals("contact ME").has_pronouns);
        assert!(!extract_signals("Built mentoring programs").has_pronouns);
    }

    #[test]
    fn test_generic_terms() {
        assert!(extract_signals("A Team Player and self-starter").has_generic_terms);
        assert!(!extract_signals("Shipped payments platform").has_generic_terms);
    }

    #[test]
    fn test_word_count_counts_edge_pieces() {
        let detector = SignalDetector::new();

        assert_eq!(detector.word_count("one two  three"), 3);
        assert_eq!(detector.word_count("  one two "), 4);
        assert_eq!(detector.word_count("line\nbreak\ttab"), 3);
    }

    #[test]
    fn test_case_folding_is_ascii_only() {
        // U+017F LONG S and U+212A KELVIN SIGN fold to ASCII letters under Unicode rules
        assert!(!extract_signals("\u{17F}kills").has_skills_section);
        assert!(!extract_signals("lin\u{212A}edin").has_contact_info);
        assert!(extract_signals("SKILLS").has_skills_section);
    }

    #[test]
    fn test_word_count_whitespace_set() {
        let detector = SignalDetector::new();

        assert_eq!(detector.word_count("\u{FEFF}one two"), 3);
        assert_eq!(detector.word_count("one\u{85}two"), 1);
        assert_eq!(detector.word_count("one\u{A0}two\u{3000}three"), 3);
    }

    #[test]
    fn test_trim_uses_whitespace_set() {
        assert_eq!(trim("\u{FEFF} Acme \u{2028}"), "Acme");
        assert_eq!(trim("\u{85}Acme"), "\u{85}Acme");
    }
}
