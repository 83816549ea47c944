//! CLI interface for resume forge

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

pub const RESUME_EXTENSIONS: &[&str] = &["pdf", "docx", "txt", "md", "markdown"];
pub const JOB_EXTENSIONS: &[&str] = &["txt", "md", "markdown"];
pub const INFO_EXTENSIONS: &[&str] = &["toml", "json"];

#[derive(Parser)]
#[command(name = "resume-forge")]
#[command(version)]
#[command(about = "Roast an existing resume or build a tailored one from a job description")]
#[command(long_about = "Score a resume on impact, structure and clarity with before/after rewrites, \
or generate a keyword-tailored resume and cover letter from your details and a job posting")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable coloured output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Critique a resume and print feedback
    Roast {
        /// Resume file (PDF, DOCX, TXT, MD), or `-` to read stdin
        #[arg(conflicts_with = "text")]
        input: Option<PathBuf>,

        /// Resume file (PDF, DOCX, TXT, MD)
        #[arg(short, long, conflicts_with_all = ["input", "text"])]
        resume: Option<PathBuf>,

        /// Resume text pasted directly on the command line
        #[arg(short, long)]
        text: Option<String>,

        /// Output format: console, text, markdown, json, html
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Include the full category breakdown and before/after examples
        #[arg(short, long)]
        detailed: bool,
    },

    /// Generate a tailored resume and cover letter
    Build {
        /// Personal details (TOML or JSON)
        #[arg(short, long)]
        info: PathBuf,

        /// Job description file (TXT, MD)
        #[arg(short, long)]
        job: PathBuf,

        /// Directory the generated documents are written to
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Print both documents to the terminal as well
        #[arg(short, long)]
        preview: bool,
    },

    /// Show the keywords and company name detected in a job description
    Keywords {
        /// Job description file (TXT, MD)
        #[arg(short, long)]
        job: PathBuf,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file location
    Path,
}

/// Where the resume text for `roast` comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResumeSource {
    File(PathBuf),
    Text(String),
    Stdin,
}

impl ResumeSource {
    /// Resolve the positional argument, `--resume` and `--text` into one source
    pub fn resolve(input: Option<PathBuf>, resume: Option<PathBuf>, text: Option<String>) -> Option<Self> {
        if let Some(text) = text {
            return Some(ResumeSource::Text(text));
        }
        match input.or(resume) {
            Some(path) if path.as_os_str() == "-" => Some(ResumeSource::Stdin),
            Some(path) => Some(ResumeSource::File(path)),
            None => None,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            ResumeSource::File(path) => path.display().to_string(),
            ResumeSource::Text(_) => "pasted text".to_string(),
            ResumeSource::Stdin => "stdin".to_string(),
        }
    }
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "text" | "txt" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        "html" => Ok(OutputFormat::Html),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, text, markdown, json, html",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}
