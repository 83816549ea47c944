//! Input manager for handling different file types

use crate::error::{Result, ResumeForgeError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{
    DocxExtractor, MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor,
};
use log::info;
use std::path::Path;
use tokio::io::AsyncReadExt;

pub const SUPPORTED_FORMATS_HINT: &str = "Please upload a PDF, DOCX, TXT or Markdown file";
pub const NO_RESUME_MESSAGE: &str = "No resume found: please upload or paste your resume first";

/// Refuse to roast an empty resume. Whitespace-only text is still analyzed.
pub fn require_resume_text(text: &str) -> Result<()> {
    if text.is_empty() {
        return Err(ResumeForgeError::InvalidInput(NO_RESUME_MESSAGE.to_string()));
    }
    Ok(())
}

/// Routes a file to the extractor for its extension
#[derive(Debug, Default)]
pub struct InputManager;

impl InputManager {
    pub fn new() -> Self {
        Self
    }

    pub async fn extract_text(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(ResumeForgeError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        match self.detect_file_type(path)? {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                PdfExtractor.extract(path).await
            }
            FileType::Docx => {
                info!("Extracting text from DOCX: {}", path.display());
                DocxExtractor.extract(path).await
            }
            FileType::Text => {
                info!("Reading plain text file: {}", path.display());
                PlainTextExtractor.extract(path).await
            }
            FileType::Markdown => {
                info!("Processing markdown file: {}", path.display());
                MarkdownExtractor.extract(path).await
            }
            FileType::Unknown => Err(ResumeForgeError::UnsupportedFormat(format!(
                "{}: {}",
                SUPPORTED_FORMATS_HINT,
                path.display()
            ))),
        }
    }

    /// Pasted resume text piped in on stdin
    pub async fn read_stdin(&self) -> Result<String> {
        let mut text = String::new();
        tokio::io::stdin().read_to_string(&mut text).await?;
        info!("Read {} bytes of resume text from stdin", text.len());
        Ok(text)
    }

    fn detect_file_type(&self, path: &Path) -> Result<FileType> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                ResumeForgeError::UnsupportedFormat(format!(
                    "{}: {} has no extension",
                    SUPPORTED_FORMATS_HINT,
                    path.display()
                ))
            })?;

        Ok(FileType::from_extension(extension))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_resume_text() {
        assert!(matches!(
            require_resume_text(""),
            Err(ResumeForgeError::InvalidInput(msg)) if msg == NO_RESUME_MESSAGE
        ));
        assert!(require_resume_text(" ").is_ok());
    }

    #[test]
    fn test_missing_extension_is_unsupported() {
        let manager = InputManager::new();
        assert!(matches!(
            manager.detect_file_type(Path::new("resume")),
            Err(ResumeForgeError::UnsupportedFormat(_))
        ));
        assert_eq!(manager.detect_file_type(Path::new("cv.DOCX")).unwrap(), FileType::Docx);
    }
}
