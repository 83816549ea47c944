//! Fixed-vocabulary keyword extraction for job descriptions

use crate::error::{Result, ResumeForgeError};
use aho_corasick::AhoCorasick;
use log::debug;

/// Vocabulary in reporting order. Extraction never reorders by relevance.
pub const KEYWORD_VOCABULARY: [&str; 21] = [
    "JavaScript",
    "React",
    "Node.js",
    "AWS",
    "Python",
    "API",
    "agile",
    "cloud",
    "DevOps",
    "mobile",
    "testing",
    "UI/UX",
    "database",
    "SQL",
    "NoSQL",
    "Docker",
    "Kubernetes",
    "CI/CD",
    "innovative",
    "leadership",
    "communication",
];

pub const MAX_KEYWORDS: usize = 8;

/// Case-insensitive substring matcher over the vocabulary
pub struct KeywordExtractor {
    matcher: AhoCorasick,
}

impl KeywordExtractor {
    pub fn new() -> Result<Self> {
        // Standard match kind so overlapping terms ("NoSQL" and "SQL") are both reported
        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(KEYWORD_VOCABULARY)
            .map_err(|e| ResumeForgeError::InvalidInput(format!("Failed to build keyword matcher: {}", e)))?;

        Ok(Self { matcher })
    }

    /// Vocabulary terms present in `text`, in vocabulary order, at most eight
    pub fn extract(&self, text: &str) -> Vec<String> {
        // Full Unicode lowercasing first: U+0130 becomes `i` plus a combining dot, U+212A becomes `k`.
        let lowered = text.to_lowercase();
        let mut present = [false; KEYWORD_VOCABULARY.len()];
        for mat in self.matcher.find_overlapping_iter(&lowered) {
            present[mat.pattern().as_usize()] = true;
        }

        let keywords: Vec<String> = KEYWORD_VOCABULARY
            .iter()
            .zip(present)
            .filter(|(_, found)| *found)
            .map(|(keyword, _)| keyword.to_string())
            .take(MAX_KEYWORDS)
            .collect();

        debug!("Extracted {} job keywords: {:?}", keywords.len(), keywords);
        keywords
    }
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new().expect("Failed to create default keyword extractor")
    }
}

/// One-shot extraction with a freshly built matcher
pub fn extract_keywords(text: &str) -> Vec<String> {
    KeywordExtractor::default().extract(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_order_not_input_order() {
        let keywords = extract_keywords("We work in an agile team on AWS, building React apps.");
        assert_eq!(keywords, vec!["React", "AWS", "agile"]);
    }

    #[test]
    fn test_case_insensitive_substring() {
        let keywords = extract_keywords("strong COMMUNICATION skills, cloud-native, nodE.JS");
        assert_eq!(keywords, vec!["Node.js", "cloud", "communication"]);
    }

    #[test]
    fn test_overlapping_terms_are_both_found() {
        let keywords = extract_keywords("Experience with NoSQL stores");
        assert_eq!(keywords, vec!["SQL", "NoSQL"]);
    }

    #[test]
    fn test_capped_at_eight_in_vocabulary_order() {
        let text = KEYWORD_VOCABULARY.iter().rev().cloned().collect::<Vec<_>>().join(" ");
        let keywords = extract_keywords(&text);

        assert_eq!(keywords.len(), MAX_KEYWORDS);
        assert_eq!(
            keywords,
            KEYWORD_VOCABULARY[..MAX_KEYWORDS].iter().map(|k| k.to_string()).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_results_come_from_vocabulary_and_text() {
        let text = "Senior engineer: python, docker, kubernetes, leadership, testing";
        let lower = text.to_lowercase();
        for keyword in extract_keywords(text) {
            assert!(KEYWORD_VOCABULARY.contains(&keyword.as_str()));
            assert!(lower.contains(&keyword.to_lowercase()));
        }
    }

    #[test]
    fn test_empty_text() {
        assert!(extract_keywords("").is_empty());
    }

    #[test]
    fn test_text_is_lowercased_before_matching() {
        assert_eq!(extract_keywords("Build an AP\u{130} for \u{212A}ubernetes"), vec!["API", "Kubernetes"]);
        assert!(extract_keywords("\u{17F}QL").is_empty());
    }
}
