//! Resume analysis module
//! Signal detection, category scoring and before/after rewriting

pub mod signals;
pub mod scoring;
pub mod rewrite;
pub mod analyzer;

pub use analyzer::{analyze_resume, Feedback, ResumeAnalyzer};
