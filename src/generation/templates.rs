//! Resume body and cover letter templates
//!
//! Fixed skeletons with `{placeholder}` slots. Every slot is filled in a single
//! pass, so user text that happens to contain `{name}` is left alone.

use crate::generation::company::CompanyNameExtractor;
use crate::generation::keywords::KeywordExtractor;
use crate::generation::PersonalInfo;
use crate::processing::signals;
use regex::{Captures, Regex};
use std::collections::HashMap;

const RESUME_TEMPLATE: &str = "
## Professional Experience

### Senior Developer
XYZ Company | 2020 - Present

- Led development of cloud-based solutions utilizing {cloud_platform}
- Implemented {frontend} with focus on performance
- {process} across multiple teams
- {backend} for enterprise applications

### Developer
ABC Tech | 2017 - 2020

- Developed {product_kind} for diverse client needs
- Collaborated with cross-functional teams to deliver projects on schedule
- {quality} through best practices
- Mentored junior developers on {language} fundamentals

## Skills

{user_skills}
{extra_skills}
  ";

const COVER_LETTER_TEMPLATE: &str = "
Dear Hiring Manager at {company},

I am writing to express my interest in the position described in your job posting. With my background in {background}, I believe I am well-positioned to contribute to your team.

The opportunity to work with {company_kind} company like yours is particularly exciting to me. My experience with {top_keywords} aligns perfectly with the requirements outlined in your job description.

Throughout my career at previous companies, I have:
- Demonstrated expertise in {expertise}
- Successfully delivered projects utilizing {technologies}
- Collaborated effectively with cross-functional teams to achieve {objectives}

I am particularly drawn to this role because it offers the opportunity to {opportunity}. My approach to work emphasizes {approach}, which I believe makes me an excellent fit for your organization.

I would welcome the opportunity to discuss how my background, skills, and experiences would benefit {company}. Thank you for considering my application.

Sincerely,
{name}
  ";

/// Fills the resume and cover letter skeletons from personal info and job keywords
pub struct TemplateComposer {
    keywords: KeywordExtractor,
    company: CompanyNameExtractor,
    placeholder: Regex,
}

impl Default for TemplateComposer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateComposer {
    pub fn new() -> Self {
        Self {
            keywords: KeywordExtractor::default(),
            company: CompanyNameExtractor::new(),
            placeholder: Regex::new(r"\{([a-z_]+)\}").expect("Invalid placeholder regex"),
        }
    }

    pub fn keywords(&self) -> &KeywordExtractor {
        &self.keywords
    }

    pub fn company(&self) -> &CompanyNameExtractor {
        &self.company
    }

    pub fn resume_body(&self, info: &PersonalInfo, job_description: &str) -> String {
        let keywords = self.keywords.extract(job_description);
        let has = |keyword: &str| keywords.iter().any(|k| k == keyword);

        let user_skills = info
            .skills
            .split(',')
            .map(|skill| format!("- {}", signals::trim(skill)))
            .collect::<Vec<_>>()
            .join("\n");

        let skills_lower = info.skills.to_lowercase();
        let extra_skills = keywords
            .iter()
            .filter(|keyword| !skills_lower.contains(&keyword.to_lowercase()))
            .map(|keyword| format!("- {}", keyword))
            .collect::<Vec<_>>()
            .join("\n");

        let mut values: HashMap<&str, String> = HashMap::new();
        values.insert("cloud_platform", pick(has("AWS"), "AWS", "cloud technologies"));
        values.insert(
            "frontend",
            pick(has("React"), "React-based frontend applications", "modern frontend frameworks"),
        );
        values.insert(
            "process",
            pick(has("agile"), "Practiced Agile methodologies", "Managed project timelines effectively"),
        );
        values.insert("backend", pick(has("API"), "Designed RESTful APIs", "Created backend services"));
        values.insert("product_kind", pick(has("mobile"), "mobile applications", "software solutions"));
        values.insert(
            "quality",
            pick(has("testing"), "Implemented automated testing", "Ensured code quality"),
        );
        values.insert("language", pick(has("JavaScript"), "JavaScript", "programming"));
        values.insert("user_skills", user_skills);
        values.insert("extra_skills", extra_skills);

        self.render(RESUME_TEMPLATE, &values)
    }

    pub fn cover_letter_body(&self, info: &PersonalInfo, job_description: &str) -> String {
        let keywords = self.keywords.extract(job_description);
        let has = |keyword: &str| keywords.iter().any(|k| k == keyword);
        let nth = |index: usize, fallback: &str| {
            keywords.get(index).cloned().unwrap_or_else(|| fallback.to_string())
        };

        let background = info.summary.split('.').next().unwrap_or_default().to_lowercase();
        let top_keywords = keywords.iter().take(3).cloned().collect::<Vec<_>>().join(", ");

        let mut values: HashMap<&str, String> = HashMap::new();
        values.insert("company", self.company.extract_or_placeholder(job_description));
        values.insert("background", background);
        values.insert("company_kind", pick(has("innovative"), "an innovative", "a leading"));
        values.insert("top_keywords", top_keywords);
        values.insert("expertise", nth(0, "software development"));
        values.insert("technologies", nth(1, "modern technologies"));
        values.insert("objectives", nth(2, "business objectives"));
        // raw job text, case-sensitive
        values.insert(
            "opportunity",
            pick(
                job_description.contains("challenge"),
                "tackle challenging problems",
                "contribute to meaningful projects",
            ),
        );
        values.insert(
            "approach",
            pick(job_description.contains("team"), "teamwork", "quality and efficiency"),
        );
        values.insert("name", info.name.clone());

        self.render(COVER_LETTER_TEMPLATE, &values)
    }

    fn render(&self, template: &str, values: &HashMap<&str, String>) -> String {
        self.placeholder
            .replace_all(template, |caps: &Captures| match values.get(&caps[1]) {
                Some(value) => value.clone(),
                None => caps[0].to_string(),
            })
            .into_owned()
    }
}

fn pick(condition: bool, when_true: &str, when_false: &str) -> String {
    let phrase = if condition { when_true } else { when_false };
    phrase.to_string()
}

pub fn generate_resume_body(info: &PersonalInfo, job_description: &str) -> String {
    TemplateComposer::new().resume_body(info, job_description)
}

pub fn generate_cover_letter_body(info: &PersonalInfo, job_description: &str) -> String {
    TemplateComposer::new().cover_letter_body(info, job_description)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info() -> PersonalInfo {
        PersonalInfo {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: "(555) 010-0000".to_string(),
            location: "Austin, TX".to_string(),
            summary: "Backend engineer with 8 years in payments. Loves Rust.".to_string(),
            experience: "Acme, 2016-2024".to_string(),
            education: "BSc Computer Science".to_string(),
            skills: "Rust, Python , PostgreSQL".to_string(),
        }
    }

    #[test]
    fn test_resume_body_with_matching_keywords() {
        let job = "Join Acme as a backend engineer. Python, AWS, REST API, agile, Docker.";
        let body = generate_resume_body(&info(), job);

        assert!(body.starts_with("\n## Professional Experience\n\n### Senior Developer\n"));
        assert!(body.contains("- Led development of cloud-based solutions utilizing AWS\n"));
        assert!(body.contains("- Implemented modern frontend frameworks with focus on performance\n"));
        assert!(body.contains("- Practiced Agile methodologies across multiple teams\n"));
        assert!(body.contains("- Designed RESTful APIs for enterprise applications\n"));
        assert!(body.contains("- Developed software solutions for diverse client needs\n"));
        assert!(body.contains("- Ensured code quality through best practices\n"));
        assert!(body.contains("- Mentored junior developers on programming fundamentals\n"));
        assert!(body.ends_with("\n  "));
    }

    #[test]
    fn test_skills_section_appends_missing_keywords() {
        let job = "We need Python, AWS and Docker experience";
        let body = generate_resume_body(&info(), job);

        // Python is already in the user's skills, case-insensitively
        assert!(body.ends_with("## Skills\n\n- Rust\n- Python\n- PostgreSQL\n- AWS\n- Docker\n  "));
    }

    #[test]
    fn test_resume_body_without_skills_or_keywords() {
        let body = generate_resume_body(&PersonalInfo::default(), "");
        assert!(body.contains("utilizing cloud technologies\n"));
        assert!(body.ends_with("## Skills\n\n- \n\n  "));
    }

    #[test]
    fn test_cover_letter_full_text() {
        let job = "At Initech we build innovative React and AWS systems. Every challenge is a team effort.";
        let letter = generate_cover_letter_body(&info(), job);

        let expected = "
Dear Hiring Manager at Initech,

I am writing to express my interest in the position described in your job posting. With my background in backend engineer with 8 years in payments, I believe I am well-positioned to contribute to your team.

The opportunity to work with an innovative company like yours is particularly exciting to me. My experience with React, AWS, innovative aligns perfectly with the requirements outlined in your job description.

Throughout my career at previous companies, I have:
- Demonstrated expertise in React
- Successfully delivered projects utilizing AWS
- Collaborated effectively with cross-functional teams to achieve innovative

I am particularly drawn to this role because it offers the opportunity to tackle challenging problems. My approach to work emphasizes teamwork, which I believe makes me an excellent fit for your organization.

I would welcome the opportunity to discuss how my background, skills, and experiences would benefit Initech. Thank you for considering my application.

Sincerely,
Jane Doe
  ";
        assert_eq!(letter, expected);
    }

    #[test]
    fn test_cover_letter_fallbacks() {
        let letter = generate_cover_letter_body(&info(), "Remote role. Great Challenge. Teamwork.");

        assert!(letter.starts_with("\nDear Hiring Manager at [Company Name],\n"));
        assert!(letter.contains("work with a leading company"));
        assert!(letter.contains("My experience with  aligns perfectly"));
        assert!(letter.contains("- Demonstrated expertise in software development\n"));
        assert!(letter.contains("- Successfully delivered projects utilizing modern technologies\n"));
        assert!(letter.contains("to achieve business objectives\n"));
        // "challenge"/"team" checks are case-sensitive
        assert!(letter.contains("opportunity to contribute to meaningful projects."));
        assert!(letter.contains("emphasizes quality and efficiency,"));
    }

    #[test]
    fn test_user_text_with_braces_is_not_expanded() {
        let mut person = info();
        person.name = "{company}".to_string();
        let letter = generate_cover_letter_body(&person, "Hooli is hiring");

        assert!(letter.contains("Dear Hiring Manager at Hooli,"));
        assert!(letter.ends_with("Sincerely,\n{company}\n  "));
    }

    #[test]
    fn test_skill_entries_trim_byte_order_marks() {
        let mut person = info();
        person.skills = "Rust,\u{FEFF}Go\u{A0}".to_string();
        let body = generate_resume_body(&person, "");

        assert!(body.ends_with("## Skills\n\n- Rust\n- Go\n\n  "));
    }
}
