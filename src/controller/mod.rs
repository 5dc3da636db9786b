// file: src/controller/mod.rs
// description: query, document fetch and upload controllers
// reference: internal module structure

pub mod fetcher;
pub mod progress;
pub mod query;
pub mod upload;

#[cfg(test)]
pub(crate) mod test_support;

pub use fetcher::{DocumentFetcher, FetchOutcome};
pub use progress::{FetchProgress, FetchStats};
pub use query::{EMPTY_QUERY_MESSAGE, QueryController, QueryOutcome};
pub use upload::{EMPTY_DOCUMENT_MESSAGE, UploadController, UploadOutcome};
