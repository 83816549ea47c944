//! Resume roast engine: signals → category scores → feedback report

use crate::processing::rewrite::{BeforeAfterExample, BulletRewriter};
use crate::processing::scoring::{self, Category, CategoryScore, ScoreBand};
use crate::processing::signals::{SignalDetector, SignalSet};
use log::debug;
use serde::{Deserialize, Serialize};

/// Complete critique of one resume. Built fresh per call, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    /// Rounded mean of the three category scores (1-10)
    pub overall_score: u8,

    /// Impact, Structure and Clarity, in that order
    pub categories: [CategoryScore; 3],

    pub before_after_examples: Vec<BeforeAfterExample>,

    pub summary: String,
}

impl Feedback {
    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_score(self.overall_score)
    }

    /// First `per_category` issues of every category, in category order
    pub fn key_issues(&self, per_category: usize) -> Vec<&str> {
        self.categories
            .iter()
            .flat_map(|c| c.issues.iter().take(per_category))
            .map(String::as_str)
            .collect()
    }

    /// First `per_category` recommendations of every category, in category order
    pub fn top_recommendations(&self, per_category: usize) -> Vec<&str> {
        self.categories
            .iter()
            .flat_map(|c| c.recommendations.iter().take(per_category))
            .map(String::as_str)
            .collect()
    }
}

/// Holds the compiled detectors so repeated analyses skip regex compilation
pub struct ResumeAnalyzer {
    detector: SignalDetector,
    rewriter: BulletRewriter,
}

impl Default for ResumeAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl ResumeAnalyzer {
    pub fn new() -> Self {
        Self {
            detector: SignalDetector::new(),
            rewriter: BulletRewriter::new(),
        }
    }

    pub fn signals(&self, text: &str) -> SignalSet {
        self.detector.extract_signals(text)
    }

    /// Analyze resume text. Total over all strings, including the empty one.
    pub fn analyze(&self, text: &str) -> Feedback {
        let signals = self.detector.extract_signals(text);

        let categories = Category::ALL.map(|category| category.evaluate(&signals));

        let overall_score = scoring::overall_score(&categories);
        let [impact, structure, clarity] = &categories;
        debug!(
            "Scores: impact={} structure={} clarity={} overall={}",
            impact.score, structure.score, clarity.score, overall_score
        );

        Feedback {
            overall_score,
            categories,
            before_after_examples: self.rewriter.examples(text, &signals),
            summary: scoring::summary_for(overall_score).to_string(),
        }
    }
}

/// One-shot analysis with a freshly built analyzer
pub fn analyze_resume(text: &str) -> Feedback {
    ResumeAnalyzer::new().analyze(text)
}
