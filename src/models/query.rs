// file: src/models/query.rs
// description: search query input and the hits returned by the gateway
// reference: gateway query endpoint response shape

use serde::{Deserialize, Serialize};

/// Query text exactly as the user entered it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchQuery {
    pub text: String,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// One entry of a search response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub document_id: String,

    /// Similarity score, when the gateway reports one
    #[serde(default)]
    pub score: Option<f64>,
}

impl SearchHit {
    pub fn new(document_id: impl Into<String>) -> Self {
        Self {
            document_id: document_id.into(),
            score: None,
        }
    }
}
