//! Output formatters for roast reports

use crate::config::OutputFormat;
use crate::error::{Result, ResumeForgeError};
use crate::output::report::{render_text_report, RoastReport};
use crate::processing::scoring::{ScoreBand, MAX_SCORE};
use askama::Template;
use colored::{Color, Colorize};
use std::path::Path;

/// Number of issues / recommendations per category shown in the short views
const HIGHLIGHTS_PER_CATEGORY: usize = 2;

pub trait OutputFormatter {
    fn format_report(&self, report: &RoastReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Coloured terminal output with score bars
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// Same text the report's "copy" action produces
pub struct TextFormatter;

pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
}

pub struct HtmlFormatter {
    include_styles: bool,
}

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    text_formatter: TextFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
}

#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Resume Roast Report</title>
    {% if include_styles %}
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            color: #333;
            max-width: 900px;
            margin: 0 auto;
            padding: 20px;
            background: #f8f9fa;
        }
        .container {
            background: white;
            padding: 30px;
            border-radius: 8px;
            box-shadow: 0 2px 10px rgba(0,0,0,0.1);
        }
        .header {
            text-align: center;
            margin-bottom: 30px;
            border-bottom: 3px solid #e8590c;
            padding-bottom: 20px;
        }
        .score-badge {
            display: inline-block;
            padding: 8px 16px;
            border-radius: 20px;
            font-weight: bold;
            color: white;
            margin-left: 10px;
        }
        .score-excellent { background: #28a745; }
        .score-good { background: #ffc107; color: #000; }
        .score-needs-work { background: #dc3545; }
        .section { margin: 25px 0; }
        .section h2 {
            color: #e8590c;
            border-bottom: 2px solid #e9ecef;
            padding-bottom: 10px;
        }
        .category {
            background: #f8f9fa;
            padding: 15px;
            border-radius: 6px;
            margin: 15px 0;
        }
        .bar {
            background: #e9ecef;
            border-radius: 4px;
            height: 10px;
            overflow: hidden;
        }
        .bar-fill { height: 10px; }
        .bar-excellent { background: #28a745; }
        .bar-good { background: #ffc107; }
        .bar-needs-work { background: #dc3545; }
        .example {
            background: white;
            padding: 15px;
            margin: 10px 0;
            border-radius: 6px;
            border-left: 4px solid #e8590c;
        }
        .before { color: #dc3545; }
        .after { color: #28a745; }
        ul { margin: 10px 0; }
        li { margin: 5px 0; }
        .metadata {
            background: #e9ecef;
            padding: 15px;
            border-radius: 6px;
            margin-top: 30px;
            font-size: 0.9em;
            color: #6c757d;
        }
    </style>
    {% endif %}
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>🔥 Resume Roast Report</h1>
            <p>Generated: {{ generated_at }}</p>
        </div>

        <div class="section">
            <h2>Overall Score</h2>
            <h3>{{ overall_score }}/10 <span class="score-badge score-{{ score_class }}">{{ score_label }}</span></h3>
            <p>{{ summary }}</p>
        </div>

        <div class="section">
            <h2>Category Breakdown</h2>
            {% for category in categories %}
            <div class="category">
                <h3>{{ category.title }} ({{ category.score }}/10)</h3>
                <div class="bar"><div class="bar-fill bar-{{ category.band_class }}" style="width: {{ category.percent }}%"></div></div>
                <p>{{ category.description }}</p>
                <h4>Issues</h4>
                <ul>
                    {% for issue in category.issues %}
                    <li>{{ issue }}</li>
                    {% endfor %}
                </ul>
                <h4>Recommendations</h4>
                <ul>
                    {% for rec in category.recommendations %}
                    <li>{{ rec }}</li>
                    {% endfor %}
                </ul>
            </div>
            {% endfor %}
        </div>

        <div class="section">
            <h2>Before &amp; After</h2>
            {% for example in examples %}
            <div class="example">
                <p class="before"><strong>Before:</strong> {{ example.before }}</p>
                <p class="after"><strong>After:</strong> {{ example.after }}</p>
                <p><em>{{ example.explanation }}</em></p>
            </div>
            {% endfor %}
        </div>

        <div class="metadata">
            <p><strong>Generated by Resume Forge v{{ version }}</strong></p>
            <p><strong>Source:</strong> {{ source }} | <strong>Words:</strong> {{ word_count }}</p>
        </div>
    </div>
</body>
</html>"#, ext = "html")]
struct HtmlTemplate<'a> {
    include_styles: bool,
    generated_at: String,
    overall_score: u8,
    score_class: &'static str,
    score_label: &'static str,
    summary: &'a str,
    categories: Vec<HtmlCategory<'a>>,
    examples: &'a [crate::processing::rewrite::BeforeAfterExample],
    version: &'a str,
    source: &'a str,
    word_count: usize,
}

struct HtmlCategory<'a> {
    title: &'a str,
    score: u8,
    percent: u32,
    band_class: &'static str,
    description: &'a str,
    issues: &'a [String],
    recommendations: &'a [String],
}

fn band_class(band: ScoreBand) -> &'static str {
    match band {
        ScoreBand::Excellent => "excellent",
        ScoreBand::Good => "good",
        ScoreBand::NeedsWork => "needs-work",
    }
}

fn band_color(band: ScoreBand) -> Color {
    match band {
        ScoreBand::Excellent => Color::Green,
        ScoreBand::Good => Color::Yellow,
        ScoreBand::NeedsWork => Color::Red,
    }
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Red,
            2 => Color::Yellow,
            _ => Color::White,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, score: u8) -> String {
        let band = ScoreBand::from_score(score);
        let badge = band.label().to_uppercase();

        if self.use_colors {
            format!("[{}]", badge.color(band_color(band)).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn score_bar(&self, score: u8) -> String {
        let filled = score.min(MAX_SCORE) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(filled),
            "░".repeat(MAX_SCORE as usize - filled)
        );
        self.colorize(&bar, band_color(ScoreBand::from_score(score)))
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &RoastReport) -> Result<String> {
        let feedback = &report.feedback;
        let mut output = String::new();

        output.push_str(&self.format_header("🔥 RESUME ROAST", 1));
        output.push_str(&format!(
            "Generated: {} | Source: {} | Words: {}\n",
            report.generated_at_display(),
            report.metadata.source,
            report.metadata.word_count
        ));

        output.push_str(&self.format_header("Overall Score", 2));
        output.push_str(&format!(
            "{}/10 {}\n",
            feedback.overall_score,
            self.format_score_badge(feedback.overall_score)
        ));
        output.push_str(&format!("{}\n", self.colorize(&feedback.summary, Color::Cyan)));

        output.push_str(&self.format_header("Category Scores", 2));
        for category in &feedback.categories {
            output.push_str(&format!(
                "  {:<26} {} {:>2}/10\n",
                category.title,
                self.score_bar(category.score),
                category.score
            ));
        }

        output.push_str(&self.format_header("⚠️  Key Issues", 3));
        for issue in feedback.key_issues(HIGHLIGHTS_PER_CATEGORY) {
            output.push_str(&format!("  • {}\n", self.colorize(issue, Color::Yellow)));
        }

        output.push_str(&self.format_header("💡 Top Recommendations", 3));
        for rec in feedback.top_recommendations(HIGHLIGHTS_PER_CATEGORY) {
            output.push_str(&format!("  • {}\n", self.colorize(rec, Color::Green)));
        }

        if self.detailed {
            output.push_str(&self.format_header("📊 Detailed Analysis", 2));
            for category in &feedback.categories {
                output.push_str(&self.format_header(
                    &format!("{} ({}/10)", category.title, category.score),
                    3,
                ));
                output.push_str(&format!("{}\n", self.colorize(&category.description, Color::BrightBlack)));
                output.push_str("Issues:\n");
                for issue in &category.issues {
                    output.push_str(&format!("  • {}\n", issue));
                }
                output.push_str("Recommendations:\n");
                for rec in &category.recommendations {
                    output.push_str(&format!("  • {}\n", rec));
                }
            }

            output.push_str(&self.format_header("✍️  Before & After", 2));
            for (i, example) in feedback.before_after_examples.iter().enumerate() {
                output.push_str(&format!("{}. {} {}\n", i + 1, self.colorize("Before:", Color::Red), example.before));
                output.push_str(&format!("   {} {}\n", self.colorize("After:", Color::Green), example.after));
                output.push_str(&format!("   {}\n\n", self.colorize(&example.explanation, Color::BrightBlack)));
            }
        }

        output.push_str(&format!(
            "\n{} Generated by Resume Forge v{}\n",
            self.colorize("ℹ️", Color::Blue),
            report.metadata.forge_version
        ));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl OutputFormatter for TextFormatter {
    fn format_report(&self, report: &RoastReport) -> Result<String> {
        Ok(render_text_report(&report.feedback))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Text
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &RoastReport) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(&report.feedback)?
        } else {
            serde_json::to_string(&report.feedback)?
        };
        Ok(json)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn markdown_score_badge(score: u8) -> &'static str {
        match ScoreBand::from_score(score) {
            ScoreBand::Excellent => "🟢 Excellent",
            ScoreBand::Good => "🟡 Good",
            ScoreBand::NeedsWork => "🔴 Needs Work",
        }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &RoastReport) -> Result<String> {
        let feedback = &report.feedback;
        let mut output = String::new();

        output.push_str("# 🔥 Resume Roast Report\n\n");

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {} | **Source:** `{}` | **Words:** {}\n\n",
                report.generated_at_display(),
                report.metadata.source,
                report.metadata.word_count
            ));
        }

        output.push_str("## Overall Score\n\n");
        output.push_str(&format!(
            "**{}/10** {}\n\n",
            feedback.overall_score,
            Self::markdown_score_badge(feedback.overall_score)
        ));
        output.push_str(&format!("{}\n\n", feedback.summary));

        output.push_str("### Category Scores\n\n");
        output.push_str("| Category | Score | Rating |\n");
        output.push_str("|----------|-------|--------|\n");
        for category in &feedback.categories {
            output.push_str(&format!(
                "| {} | {}/10 | {} |\n",
                category.title,
                category.score,
                Self::markdown_score_badge(category.score)
            ));
        }
        output.push('\n');

        output.push_str("## ⚠️ Key Issues\n\n");
        for issue in feedback.key_issues(HIGHLIGHTS_PER_CATEGORY) {
            output.push_str(&format!("- {}\n", issue));
        }
        output.push('\n');

        output.push_str("## 💡 Top Recommendations\n\n");
        for rec in feedback.top_recommendations(HIGHLIGHTS_PER_CATEGORY) {
            output.push_str(&format!("- {}\n", rec));
        }
        output.push('\n');

        output.push_str("## 📊 Detailed Analysis\n\n");
        for category in &feedback.categories {
            output.push_str(&format!("### {} ({}/10)\n\n", category.title, category.score));
            output.push_str(&format!("_{}_\n\n", category.description));
            output.push_str("**Issues**\n\n");
            for issue in &category.issues {
                output.push_str(&format!("- {}\n", issue));
            }
            output.push_str("\n**Recommendations**\n\n");
            for rec in &category.recommendations {
                output.push_str(&format!("- {}\n", rec));
            }
            output.push('\n');
        }

        output.push_str("## ✍️ Before & After\n\n");
        for (i, example) in feedback.before_after_examples.iter().enumerate() {
            output.push_str(&format!("### Example {}\n\n", i + 1));
            output.push_str(&format!("**Before:** {}\n\n", example.before));
            output.push_str(&format!("**After:** {}\n\n", example.after));
            output.push_str(&format!("> {}\n\n", example.explanation));
        }

        output.push_str("---\n");
        output.push_str(&format!("*Generated by Resume Forge v{}*\n", report.metadata.forge_version));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl HtmlFormatter {
    pub fn new(include_styles: bool) -> Self {
        Self { include_styles }
    }

    fn create_template_data<'a>(&self, report: &'a RoastReport) -> HtmlTemplate<'a> {
        let feedback = &report.feedback;
        let band = feedback.band();

        let categories = feedback
            .categories
            .iter()
            .map(|category| HtmlCategory {
                title: &category.title,
                score: category.score,
                percent: u32::from(category.score.min(MAX_SCORE)) * 100 / u32::from(MAX_SCORE),
                band_class: band_class(ScoreBand::from_score(category.score)),
                description: &category.description,
                issues: &category.issues,
                recommendations: &category.recommendations,
            })
            .collect();

        HtmlTemplate {
            include_styles: self.include_styles,
            generated_at: report.generated_at_display(),
            overall_score: feedback.overall_score,
            score_class: band_class(band),
            score_label: band.label(),
            summary: &feedback.summary,
            categories,
            examples: &feedback.before_after_examples,
            version: &report.metadata.forge_version,
            source: &report.metadata.source,
            word_count: report.metadata.word_count,
        }
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_report(&self, report: &RoastReport) -> Result<String> {
        self.create_template_data(report)
            .render()
            .map_err(|e| ResumeForgeError::OutputFormatting(e.to_string()))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, false, true)
    }

    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            text_formatter: TextFormatter,
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(true),
            html_formatter: HtmlFormatter::new(true),
        }
    }

    pub fn generate_report(&self, report: &RoastReport, format: OutputFormat) -> Result<String> {
        let formatter: &dyn OutputFormatter = match format {
            OutputFormat::Console => &self.console_formatter,
            OutputFormat::Text => &self.text_formatter,
            OutputFormat::Json => &self.json_formatter,
            OutputFormat::Markdown => &self.markdown_formatter,
            OutputFormat::Html => &self.html_formatter,
        };
        debug_assert_eq!(formatter.supports_format(), format);
        formatter.format_report(report)
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
}

/// `<resume stem>_roast[_<timestamp>].<ext>`, or `resume_roast...` for pasted text
pub fn suggest_filename(format: OutputFormat, source: &str, timestamp: bool) -> String {
    let base_name = Path::new(source)
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .filter(|stem| !stem.is_empty() && Path::new(source).extension().is_some())
        .unwrap_or_else(|| "resume".to_string());

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Local::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    let extension = match format {
        OutputFormat::Console | OutputFormat::Text => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
        OutputFormat::Html => "html",
    };

    format!("{}_roast{}.{}", base_name, timestamp_suffix, extension)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::{analyze_resume, Feedback};

    fn report_for(text: &str) -> RoastReport {
        RoastReport::new(analyze_resume(text), "resume.txt", 42)
    }

    #[test]
    fn test_console_plain_output() {
        let report = report_for("");
        let output = ConsoleFormatter::new(false, false)
            .format_report(&report)
            .unwrap();

        assert!(output.contains("█ 🔥 RESUME ROAST"));
        assert!(output.contains(&format!("{}/10 [", report.feedback.overall_score)));
        assert!(output.contains("Source: resume.txt | Words: 42"));
        assert!(output.contains("Key Issues"));
        assert!(!output.contains("Before & After"));
        assert!(!output.contains('\u{1b}'));

        let detailed = ConsoleFormatter::new(false, true)
            .format_report(&report)
            .unwrap();
        assert!(detailed.contains("Before & After"));
        assert!(detailed.contains("Responsible for managing projects"));
    }

    #[test]
    fn test_console_shows_two_issues_per_category() {
        let report = report_for("");
        let output = ConsoleFormatter::new(false, false)
            .format_report(&report)
            .unwrap();

        let key_issues = &output[output.find("Key Issues").unwrap()..output.find("Top Recommendations").unwrap()];
        assert_eq!(key_issues.matches("  • ").count(), 6);
    }

    #[test]
    fn test_json_is_feedback() {
        let report = report_for("Led a team, improved uptime by 20%.");
        let json = JsonFormatter::new(false).format_report(&report).unwrap();

        assert!(json.contains("\"overallScore\""));
        assert!(json.contains("\"beforeAfterExamples\""));
        let parsed: Feedback = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report.feedback);
    }

    #[test]
    fn test_markdown_sections() {
        let report = report_for("");
        let markdown = MarkdownFormatter::new(false).format_report(&report).unwrap();

        assert!(markdown.starts_with("# 🔥 Resume Roast Report\n\n## Overall Score"));
        assert!(markdown.contains("| Impact & Achievements | "));
        assert!(markdown.contains("### Example 3"));
    }

    #[test]
    fn test_html_escapes_content() {
        let report = report_for("- Built <script>alert(1)</script> tooling");
        let html = HtmlFormatter::new(false).format_report(&report).unwrap();

        assert!(html.contains("Resume Roast Report"));
        assert!(html.contains("Built "));
        assert!(!html.contains("<script>alert"));
        assert!(!html.contains("<style>"));
    }

    #[test]
    fn test_generator_routes_text_format() {
        let report = report_for("");
        let text = ReportGenerator::with_options(false, false, true)
            .generate_report(&report, OutputFormat::Text)
            .unwrap();
        assert!(text.starts_with("\nRESUME ANALYSIS REPORT"));
    }

    #[test]
    fn test_suggest_filename() {
        assert_eq!(suggest_filename(OutputFormat::Json, "docs/jane.pdf", false), "jane_roast.json");
        assert_eq!(suggest_filename(OutputFormat::Console, "pasted text", false), "resume_roast.txt");
        assert!(suggest_filename(OutputFormat::Html, "cv.md", true).starts_with("cv_roast_"));
    }

    #[test]
    fn test_save_report_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports").join("out.md");

        save_report_to_file("# hi\n", &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# hi\n");
    }
}
