//! Report structures shared by every output format

use crate::generation::PersonalInfo;
use crate::processing::Feedback;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// A roast result plus where and when it was produced
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoastReport {
    pub feedback: Feedback,
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadata {
    pub generated_at: DateTime<Local>,

    /// File path, or "pasted text" for `--text` and stdin input
    pub source: String,

    pub word_count: usize,

    pub forge_version: String,
}

impl RoastReport {
    pub fn new(feedback: Feedback, source: impl Into<String>, word_count: usize) -> Self {
        Self {
            feedback,
            metadata: ReportMetadata {
                generated_at: Local::now(),
                source: source.into(),
                word_count,
                forge_version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }

    pub fn generated_at_display(&self) -> String {
        self.metadata.generated_at.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

/// Plain-text report, the same layout users paste into notes or email
pub fn render_text_report(feedback: &Feedback) -> String {
    let categories = feedback
        .categories
        .iter()
        .map(|category| {
            format!(
                "\n{} ({}/10)\n{}\n\nIssues:\n{}\n\nRecommendations:\n{}\n",
                category.title.to_uppercase(),
                category.score,
                category.description,
                bullet_lines(&category.issues),
                bullet_lines(&category.recommendations),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "\nRESUME ANALYSIS REPORT\n\nOverall Score: {}/10\n\n{}\n\nSUMMARY:\n{}\n",
        feedback.overall_score, categories, feedback.summary
    )
}

fn bullet_lines(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("- {}", item))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Letterhead (name, contact lines, date) above the generated letter body
pub fn render_cover_letter_preview(info: &PersonalInfo, body: &str, date: DateTime<Local>) -> String {
    let mut preview = String::new();
    preview.push_str(&info.name);
    preview.push('\n');

    for line in [&info.email, &info.phone, &info.location] {
        if !line.is_empty() {
            preview.push_str(line);
            preview.push('\n');
        }
    }

    preview.push('\n');
    preview.push_str(&date.format("%m/%d/%Y").to_string());
    preview.push('\n');
    preview.push_str(body);
    preview
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::analyze_resume;
    use chrono::TimeZone;

    #[test]
    fn test_text_report_layout() {
        let feedback = analyze_resume("");
        let text = render_text_report(&feedback);

        assert!(text.starts_with("\nRESUME ANALYSIS REPORT\n\nOverall Score: "));
        assert!(text.contains("\nIMPACT & ACHIEVEMENTS ("));
        assert!(text.contains("\nSTRUCTURE & ORGANIZATION ("));
        assert!(text.contains("\nCLARITY & LANGUAGE ("));
        assert!(text.contains("\n\nIssues:\n- "));
        assert!(text.ends_with(&format!("\n\nSUMMARY:\n{}\n", feedback.summary)));

        // categories are separated by a blank line plus the leading newline of the next block
        let impact = text.find("IMPACT & ACHIEVEMENTS").unwrap();
        let structure = text.find("STRUCTURE & ORGANIZATION").unwrap();
        assert_eq!(&text[structure - 3..structure], "\n\n\n");
        assert!(impact < structure);
    }

    #[test]
    fn test_cover_letter_preview_header() {
        let info = PersonalInfo {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            location: "Austin, TX".to_string(),
            ..Default::default()
        };
        let date = Local.with_ymd_and_hms(2024, 3, 7, 9, 30, 0).unwrap();

        let preview = render_cover_letter_preview(&info, "Dear Hiring Manager,", date);
        assert_eq!(
            preview,
            "Jane Doe\njane@example.com\nAustin, TX\n\n03/07/2024\nDear Hiring Manager,"
        );
    }
}
