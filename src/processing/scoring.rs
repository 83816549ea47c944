//! Category scoring for the resume roast
//!
//! Three fixed axes (Impact, Structure, Clarity), each an affine function of a
//! few signals clamped to `1..=10`, plus the fixed issue and recommendation
//! wording picked by a binary branch per signal.

use crate::processing::signals::SignalSet;
use serde::{Deserialize, Serialize};

pub const MIN_SCORE: u8 = 1;
pub const MAX_SCORE: u8 = 10;

const IMPACT_SCALE: f64 = 1.4;
const SHORT_RESUME_WORDS: usize = 200;
const LONG_RESUME_WORDS: usize = 600;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub title: String,
    pub score: u8,
    pub description: String,
    pub issues: Vec<String>,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Impact,
    Structure,
    Clarity,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Impact, Category::Structure, Category::Clarity];

    pub fn title(&self) -> &'static str {
        match self {
            Category::Impact => "Impact & Achievements",
            Category::Structure => "Structure & Organization",
            Category::Clarity => "Clarity & Language",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Category::Impact => "How well your resume demonstrates concrete achievements and impact rather than just listing responsibilities.",
            Category::Structure => "How well your resume is organized, formatted, and structured for easy scanning by both humans and ATS systems.",
            Category::Clarity => "How clear, concise, and effective your language is, and how well it avoids common resume pitfalls.",
        }
    }

    /// Clamped score for this category
    pub fn score(&self, signals: &SignalSet) -> u8 {
        match self {
            Category::Impact => impact_score(signals),
            Category::Structure => structure_score(signals),
            Category::Clarity => clarity_score(signals),
        }
    }

    pub fn issues(&self, signals: &SignalSet) -> Vec<String> {
        let issues: Vec<&str> = match self {
            Category::Impact => vec![
                if signals.has_action_verbs {
                    "Some action verbs present, but could use more powerful ones"
                } else {
                    "Lacks strong action verbs that demonstrate initiative and leadership"
                },
                if signals.has_metrics {
                    "Some metrics included, but not consistently throughout"
                } else {
                    "Missing quantifiable achievements and metrics (numbers, percentages, dollar amounts)"
                },
                "Achievements are not clearly distinguished from routine responsibilities",
                "Too focused on tasks rather than results and impact",
            ],
            Category::Structure => vec![
                if signals.has_skills_section {
                    "Skills section could be better organized by categories"
                } else {
                    "Missing a dedicated skills section"
                },
                if signals.has_dates {
                    "Date format could be more consistent"
                } else {
                    "Employment dates are missing or unclear"
                },
                if signals.has_objective {
                    "Summary/objective could be more compelling"
                } else {
                    "Missing a professional summary or objective"
                },
                "Section headings could be more prominent for better scannability",
                "Information hierarchy needs improvement for better visual flow",
            ],
            Category::Clarity => vec![
                if signals.word_count < SHORT_RESUME_WORDS {
                    "Resume is too brief, lacking necessary detail"
                } else if signals.word_count > LONG_RESUME_WORDS {
                    "Resume is too verbose, exceeding optimal length"
                } else {
                    "Length is appropriate, but content could be more focused"
                },
                if signals.has_pronouns {
                    "Contains personal pronouns (I, me, my) which should be avoided"
                } else {
                    "Good job avoiding personal pronouns"
                },
                if signals.has_generic_terms {
                    "Contains generic buzzwords and clichés that lack specificity"
                } else {
                    "Could use more industry-specific terminology"
                },
                "Some phrases are passive rather than active",
                "Technical jargon needs better explanation for non-technical readers",
            ],
        };

        issues.into_iter().map(String::from).collect()
    }

    pub fn recommendations(&self) -> Vec<String> {
        let recommendations: &[&str] = match self {
            Category::Impact => &[
                "Start each bullet point with a strong action verb (e.g., 'Spearheaded', 'Orchestrated', 'Transformed')",
                "Add metrics to quantify your achievements (e.g., 'Increased sales by 27%', 'Reduced costs by $45K')",
                "Focus on outcomes and results, not just responsibilities",
                "Include at least one major achievement for each role",
            ],
            Category::Structure => &[
                "Use a clean, consistent format with clear section headings",
                "Organize skills into categories (e.g., Technical, Soft Skills, Languages)",
                "Ensure consistent date formatting throughout (MM/YYYY is recommended)",
                "Place the most relevant information at the top of each section",
                "Use bullet points consistently (3-5 per role is ideal)",
            ],
            Category::Clarity => &[
                "Aim for a 1-2 page resume depending on experience level",
                "Remove all personal pronouns (I, me, my)",
                "Replace generic terms like 'team player' with specific examples",
                "Use active voice consistently (e.g., 'Developed' instead of 'Was responsible for developing')",
                "Balance technical terms with clear explanations of their impact",
            ],
        };

        recommendations.iter().map(|r| r.to_string()).collect()
    }

    /// Build the full category block
    pub fn evaluate(&self, signals: &SignalSet) -> CategoryScore {
        CategoryScore {
            title: self.title().to_string(),
            score: self.score(signals),
            description: self.description().to_string(),
            issues: self.issues(signals),
            recommendations: self.recommendations(),
        }
    }
}

/// Presentation band for a 1..=10 score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreBand {
    Excellent,
    Good,
    NeedsWork,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            8..=u8::MAX => ScoreBand::Excellent,
            5..=7 => ScoreBand::Good,
            _ => ScoreBand::NeedsWork,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent",
            ScoreBand::Good => "Good",
            ScoreBand::NeedsWork => "Needs Work",
        }
    }
}

fn clamp_score(raw: f64) -> u8 {
    raw.round().clamp(MIN_SCORE as f64, MAX_SCORE as f64) as u8
}

pub fn impact_score(signals: &SignalSet) -> u8 {
    let raw = (if signals.has_action_verbs { 3 } else { 0 }) + (if signals.has_metrics { 4 } else { 0 });
    clamp_score(raw as f64 * IMPACT_SCALE)
}

pub fn structure_score(signals: &SignalSet) -> u8 {
    clamp_score((signals.structural_marker_count() * 2) as f64)
}

pub fn clarity_score(signals: &SignalSet) -> u8 {
    let length_points = if signals.word_count > SHORT_RESUME_WORDS && signals.word_count < LONG_RESUME_WORDS {
        5
    } else {
        2
    };
    let pronoun_points = if signals.has_pronouns { 0 } else { 3 };
    let generic_points = if signals.has_generic_terms { 0 } else { 2 };

    clamp_score((length_points + pronoun_points + generic_points) as f64)
}

/// Rounded mean of already clamped category scores
pub fn overall_score(categories: &[CategoryScore]) -> u8 {
    if categories.is_empty() {
        return MIN_SCORE;
    }
    let total: u32 = categories.iter().map(|c| c.score as u32).sum();
    (total as f64 / categories.len() as f64).round() as u8
}

pub fn summary_for(overall: u8) -> &'static str {
    match ScoreBand::from_score(overall) {
        ScoreBand::Excellent => "Your resume is strong overall, with just a few areas for improvement. Focus on enhancing your quantifiable achievements and ensuring consistent formatting to make it even more compelling.",
        ScoreBand::Good => "Your resume has good elements but needs significant improvement in how you present your achievements and structure your content. Implementing the recommendations will substantially increase your interview chances.",
        ScoreBand::NeedsWork => "Your resume requires major revisions to effectively showcase your qualifications. Focus on completely restructuring your content to highlight achievements with metrics and creating a more scannable format.",
    }
}
