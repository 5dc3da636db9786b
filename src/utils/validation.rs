// file: src/utils/validation.rs
// description: input validation utilities and helpers
// reference: input validation patterns

use crate::error::{Result, SearchError};

pub struct Validator;

impl Validator {
    /// Rejects input that has no non-whitespace character, reporting `message` as-is.
    pub fn validate_not_blank(input: &str, message: &str) -> Result<()> {
        if input.trim().is_empty() {
            return Err(SearchError::Validation(message.to_string()));
        }
        Ok(())
    }

    pub fn validate_url(url: &str) -> Result<()> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(SearchError::Validation(format!(
                "Invalid URL format: {}",
                url
            )));
        }
        Ok(())
    }

    pub fn truncate_text(text: &str, max_chars: usize) -> String {
        if text.chars().count() <= max_chars {
            text.to_string()
        } else {
            let truncated: String = text.chars().take(max_chars).collect();
            format!("{}...", truncated)
        }
    }
}
