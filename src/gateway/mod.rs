// file: src/gateway/mod.rs
// description: search gateway abstraction and request option bag
// reference: internal module structure

pub mod http;

pub use http::HttpGateway;

use crate::error::Result;
use crate::models::{DocumentText, SearchHit, SearchQuery, UploadPayload, UploadReceipt};

/// Extra headers and query-string parameters sent with a single request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    pub headers: Vec<(String, String)>,
    pub query_params: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn with_query_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.push((name.into(), value.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.query_params.is_empty()
    }
}

/// The three operations exposed by the search gateway.
///
/// Each call is a single request with one success and one failure outcome.
/// Controllers take the gateway by reference, so one client is shared by
/// every controller of a session.
#[allow(async_fn_in_trait)]
pub trait SearchGateway {
    async fn query(&self, query: &SearchQuery, options: &RequestOptions) -> Result<Vec<SearchHit>>;

    async fn document(&self, document_id: &str, options: &RequestOptions) -> Result<DocumentText>;

    async fn upload(
        &self,
        payload: &UploadPayload,
        options: &RequestOptions,
    ) -> Result<UploadReceipt>;
}
