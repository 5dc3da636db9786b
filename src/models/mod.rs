// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod document;
pub mod query;
pub mod upload;

pub use document::DocumentText;
pub use query::{SearchHit, SearchQuery};
pub use upload::{UploadPayload, UploadReceipt};
