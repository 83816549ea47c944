//! Resume forge: heuristic resume critique and tailored resume / cover letter generation

pub mod cli;
pub mod config;
pub mod error;
pub mod generation;
pub mod input;
pub mod output;
pub mod processing;

pub use config::Config;
pub use error::{Result, ResumeForgeError};
pub use generation::{
    extract_company_name, extract_keywords, generate_cover_letter_body, generate_resume_body,
    GeneratedContent, PersonalInfo,
};
pub use processing::signals::{extract_signals, SignalDetector, SignalSet};
pub use processing::{analyze_resume, Feedback};
