// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SearchError>;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Gateway request failed: {0}")]
    Transport(String),

    #[error("Gateway responded with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode gateway response: {0}")]
    Decode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl SearchError {
    /// The raw payload shown to the user when a request fails.
    ///
    /// Status errors surface the response body, with a JSON string body
    /// unwrapped to its contents; every other variant surfaces its message.
    pub fn payload(&self) -> String {
        match self {
            SearchError::Status { body, .. } => match serde_json::from_str::<String>(body) {
                Ok(unwrapped) => unwrapped,
                Err(_) => body.clone(),
            },
            SearchError::Config(msg)
            | SearchError::Validation(msg)
            | SearchError::Transport(msg)
            | SearchError::Decode(msg)
            | SearchError::Serialization(msg) => msg.clone(),
            SearchError::Io(err) => err.to_string(),
        }
    }
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            SearchError::Decode(err.to_string())
        } else {
            SearchError::Transport(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_payload_unwraps_json_string() {
        let err = SearchError::Status {
            status: 404,
            body: "\"Document ID not found\"".to_string(),
        };
        assert_eq!(err.payload(), "Document ID not found");
    }

    #[test]
    fn test_status_payload_keeps_raw_body() {
        let err = SearchError::Status {
            status: 502,
            body: "{\"message\": \"Internal server error\"}".to_string(),
        };
        assert_eq!(err.payload(), "{\"message\": \"Internal server error\"}");
    }

    #[test]
    fn test_transport_payload_is_message() {
        let err = SearchError::Transport("timeout".to_string());
        assert_eq!(err.payload(), "timeout");
        assert_eq!(err.to_string(), "Gateway request failed: timeout");
    }
}
