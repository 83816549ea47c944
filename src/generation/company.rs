//! Company-name extraction from a job description

use crate::processing::signals::{self, WHITESPACE_CLASS};
use log::debug;
use regex::Regex;

pub const COMPANY_PLACEHOLDER: &str = "[Company Name]";

/// Ordered lead-in patterns. The first one that matches wins.
pub struct CompanyNameExtractor {
    patterns: Vec<Regex>,
}

impl Default for CompanyNameExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl CompanyNameExtractor {
    pub fn new() -> Self {
        // Lead-in words fold ASCII case only; the name's leading letter may be lowercase.
        let name = format!("([A-Za-z][A-Za-z0-9{ws}]+)", ws = WHITESPACE_CLASS);
        let patterns: Vec<Regex> = [
            format!("(?i-u:at){ws}+{name}{ws}+(?i-u:we)", ws = WHITESPACE_CLASS, name = name),
            format!("(?i-u:join){ws}+{name}{ws}+(?i-u:as)", ws = WHITESPACE_CLASS, name = name),
            format!("{name}{ws}+(?i-u:is){ws}+(?i-u:looking)", ws = WHITESPACE_CLASS, name = name),
            format!("{name}{ws}+(?i-u:is){ws}+(?i-u:hiring)", ws = WHITESPACE_CLASS, name = name),
        ]
        .iter()
        .map(|p| Regex::new(p).expect("Invalid company regex"))
        .collect();

        Self { patterns }
    }

    pub fn extract(&self, text: &str) -> Option<String> {
        let company = self
            .patterns
            .iter()
            .find_map(|pattern| pattern.captures(text))
            .and_then(|caps| caps.get(1))
            .map(|m| signals::trim(m.as_str()).to_string());

        debug!("Company name: {:?}", company);
        company
    }

    /// Extracted name, or the bracketed placeholder
    pub fn extract_or_placeholder(&self, text: &str) -> String {
        self.extract(text).unwrap_or_else(|| COMPANY_PLACEHOLDER.to_string())
    }
}

pub fn extract_company_name(text: &str) -> Option<String> {
    CompanyNameExtractor::new().extract(text)
}
