//! Resume and cover letter generation
//! Keyword extraction, company detection and template composition

pub mod keywords;
pub mod company;
pub mod templates;

pub use company::{extract_company_name, COMPANY_PLACEHOLDER};
pub use keywords::extract_keywords;
pub use templates::{generate_cover_letter_body, generate_resume_body, TemplateComposer};

use crate::error::{Result, ResumeForgeError};
use crate::processing::signals::WHITESPACE_CLASS;
use log::info;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Everything the user tells us about themselves. All fields are free text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub summary: String,
    pub experience: String,
    pub education: String,
    /// Comma-separated
    pub skills: String,
}

impl PersonalInfo {
    /// Load from a `.toml` or `.json` file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase());

        match extension.as_deref() {
            Some("toml") => toml::from_str(&content).map_err(|e| {
                ResumeForgeError::InvalidInput(format!("Failed to parse personal info '{}': {}", path.display(), e))
            }),
            Some("json") => Ok(serde_json::from_str(&content)?),
            _ => Err(ResumeForgeError::UnsupportedFormat(format!(
                "Personal info must be a .toml or .json file: {}",
                path.display()
            ))),
        }
    }

    /// Generation needs at least a name and a job description
    pub fn validate_for_generation(&self, job_description: &str) -> Result<()> {
        if self.name.is_empty() {
            return Err(ResumeForgeError::InvalidInput("Full name is required".to_string()));
        }
        if job_description.is_empty() {
            return Err(ResumeForgeError::InvalidInput("Job description is required".to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedContent {
    pub resume: String,
    pub cover_letter: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Resume,
    CoverLetter,
}

impl DocumentKind {
    fn suffix(&self) -> &'static str {
        match self {
            DocumentKind::Resume => "Resume",
            DocumentKind::CoverLetter => "Cover_Letter",
        }
    }
}

/// Runs both templates against one job description
pub struct ContentGenerator {
    composer: TemplateComposer,
}

impl Default for ContentGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentGenerator {
    pub fn new() -> Self {
        Self {
            composer: TemplateComposer::new(),
        }
    }

    pub fn generate(&self, info: &PersonalInfo, job_description: &str) -> Result<GeneratedContent> {
        info.validate_for_generation(job_description)?;
        info!("Generating resume and cover letter for {}", info.name);

        Ok(GeneratedContent {
            resume: self.composer.resume_body(info, job_description),
            cover_letter: self.composer.cover_letter_body(info, job_description),
        })
    }

    pub fn keywords(&self, job_description: &str) -> Vec<String> {
        self.composer.keywords().extract(job_description)
    }

    pub fn company_name(&self, job_description: &str) -> Option<String> {
        self.composer.company().extract(job_description)
    }
}

/// Full markdown resume: header, summary, generated body, education
pub fn render_resume_document(info: &PersonalInfo, resume_body: &str) -> String {
    format!(
        "# {}\n{} | {} | {}\n\n## Summary\n{}\n\n{}\n\n## Education\n{}\n",
        info.name, info.email, info.phone, info.location, info.summary, resume_body, info.education
    )
}

/// `Jane_Doe_Resume.md` / `Jane_Doe_Cover_Letter.md`
pub fn document_filename(name: &str, kind: DocumentKind) -> String {
    let whitespace = Regex::new(&format!("{}+", WHITESPACE_CLASS)).expect("Invalid whitespace regex");
    format!("{}_{}.md", whitespace.replace_all(name, "_"), kind.suffix())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn jane() -> PersonalInfo {
        PersonalInfo {
            name: "Jane  Q Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: "555-0100".to_string(),
            location: "Austin, TX".to_string(),
            summary: "Engineer.".to_string(),
            education: "BSc".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_document_filenames() {
        assert_eq!(document_filename("Jane  Q Doe", DocumentKind::Resume), "Jane_Q_Doe_Resume.md");
        assert_eq!(
            document_filename("Jane Doe", DocumentKind::CoverLetter),
            "Jane_Doe_Cover_Letter.md"
        );
    }

    #[test]
    fn test_render_resume_document() {
        let doc = render_resume_document(&jane(), "BODY");
        assert_eq!(
            doc,
            "# Jane  Q Doe\njane@example.com | 555-0100 | Austin, TX\n\n## Summary\nEngineer.\n\nBODY\n\n## Education\nBSc\n"
        );
    }

    #[test]
    fn test_generation_requires_name_and_job() {
        let generator = ContentGenerator::new();

        assert!(generator.generate(&PersonalInfo::default(), "React role").is_err());
        assert!(generator.generate(&jane(), "").is_err());

        let content = generator.generate(&jane(), "Acme is hiring React developers").unwrap();
        assert!(content.resume.contains("React-based frontend applications"));
        assert!(content.cover_letter.contains("Dear Hiring Manager at Acme,"));
    }

    #[test]
    fn test_load_personal_info_from_toml_and_json() {
        let mut toml_file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(toml_file, "name = \"Jane Doe\"\nskills = \"Rust, Go\"").unwrap();
        let info = PersonalInfo::load(toml_file.path()).unwrap();
        assert_eq!(info.name, "Jane Doe");
        assert_eq!(info.skills, "Rust, Go");
        assert!(info.email.is_empty());

        let mut json_file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(json_file, "{{\"name\": \"Joe\", \"summary\": \"Designer.\"}}").unwrap();
        let info = PersonalInfo::load(json_file.path()).unwrap();
        assert_eq!(info.name, "Joe");
        assert_eq!(info.summary, "Designer.");

        let yaml_file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        assert!(PersonalInfo::load(yaml_file.path()).is_err());
    }
}
