// file: src/models/upload.rs
// description: upload request payload and the gateway's acknowledgement

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadPayload {
    pub document: String,
}

impl UploadPayload {
    pub fn new(document: impl Into<String>) -> Self {
        Self {
            document: document.into(),
        }
    }
}

/// Response payload of a successful upload, typically the storage path of the new object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadReceipt {
    pub location: String,
}

impl UploadReceipt {
    /// Builds a receipt from a raw response body. JSON strings are unwrapped,
    /// other JSON values are kept in compact form, and non-JSON bodies are kept as-is.
    pub fn from_body(body: &str) -> Self {
        let location = match serde_json::from_str::<Value>(body) {
            Ok(Value::String(s)) => s,
            Ok(other) => other.to_string(),
            Err(_) => body.to_string(),
        };
        Self { location }
    }
}
