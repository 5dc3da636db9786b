// file: src/models/document.rs
// description: full document text returned by the gateway
// reference: gateway document endpoint response shape

use crate::utils::Validator;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentText {
    pub document_id: String,
    pub text: String,
    /// Storage location of the original upload, when the gateway reports it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s3_file_path: Option<String>,
}

impl DocumentText {
    pub fn new(document_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            document_id: document_id.into(),
            text: text.into(),
            s3_file_path: None,
        }
    }

    pub fn preview(&self, max_chars: usize) -> String {
        Validator::truncate_text(&self.text, max_chars)
    }
}
