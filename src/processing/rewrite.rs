//! Before/after example synthesis
//!
//! Literal, order-sensitive substring rewriting of the first bullet found in a
//! resume, plus two canned examples gated on detected sections.

use crate::processing::signals::{SignalSet, WHITESPACE_CLASS};
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const FALLBACK_BULLET: &str = "Responsible for managing projects";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeforeAfterExample {
    pub before: String,
    pub after: String,
    pub explanation: String,
}

pub struct BulletRewriter {
    bullet: Regex,
    marker_prefix: Regex,
    passive_opener: Regex,
    managing: Regex,
    projects: Regex,
}

impl Default for BulletRewriter {
    fn default() -> Self {
        Self::new()
    }
}

impl BulletRewriter {
    pub fn new() -> Self {
        // A marker anywhere, then the rest of its line; the line must end at `\n` or end of text.
        let bullet = Regex::new(r"[-•][^\n\r\u{2028}\u{2029}]*(?:\n|$)")
            .expect("Invalid bullet regex");
        let marker_prefix = Regex::new(&format!("^[-•]{}*", WHITESPACE_CLASS)).expect("Invalid marker regex");
        let passive_opener = Regex::new(r"(?i-u)^Responsible for ").expect("Invalid opener regex");
        let managing = Regex::new(r"(?i-u)managing").expect("Invalid managing regex");
        let projects = Regex::new(r"(?i-u)projects").expect("Invalid projects regex");

        Self {
            bullet,
            marker_prefix,
            passive_opener,
            managing,
            projects,
        }
    }

    /// First bullet-like line with its marker stripped, or the fallback line
    pub fn sample_bullet(&self, text: &str) -> String {
        let raw = self
            .bullet
            .find(text)
            .map(|m| m.as_str())
            .map(|s| s.strip_suffix('\n').unwrap_or(s))
            .unwrap_or(FALLBACK_BULLET);

        self.marker_prefix.replace(raw, "").into_owned()
    }

    /// Apply the three rewrites in order, each to its first match only
    pub fn improve(&self, bullet: &str) -> String {
        let step = self.passive_opener.replace(bullet, "Led ");
        let step = self.managing.replace(&step, "orchestrating");
        let step = self.projects.replace(
            &step,
            "cross-functional projects, increasing delivery efficiency by 35%",
        );
        step.into_owned()
    }

    pub fn examples(&self, text: &str, signals: &SignalSet) -> Vec<BeforeAfterExample> {
        let sample = self.sample_bullet(text);
        let improved = self.improve(&sample);

        vec![
            BeforeAfterExample {
                before: sample,
                after: improved,
                explanation: "The improved version starts with a stronger action verb, adds specificity, and includes a quantifiable achievement.".to_string(),
            },
            BeforeAfterExample {
                before: if signals.has_skills_section {
                    "Skills: JavaScript, React, Node.js"
                } else {
                    "Proficient in various programming languages and frameworks"
                }
                .to_string(),
                after: "Technical Skills: Frontend (JavaScript, React, Redux), Backend (Node.js, Express, MongoDB), DevOps (Docker, AWS, CI/CD)".to_string(),
                explanation: "The improved version organizes skills by category and provides more specific details about technologies.".to_string(),
            },
            BeforeAfterExample {
                before: if signals.has_objective {
                    "Looking for a challenging position where I can utilize my skills"
                } else {
                    "Experienced professional seeking new opportunities"
                }
                .to_string(),
                after: "Results-driven Software Engineer with 5+ years of experience building scalable web applications that drive business growth and enhance user experience".to_string(),
                explanation: "The improved version is specific, achievement-oriented, and focused on value to the employer rather than personal goals.".to_string(),
            },
        ]
    }
}
