// file: src/controller/fetcher.rs
// description: fetches one document by identifier and appends it to the result list

use crate::display::{Notifier, ResultList};
use crate::error::Result;
use crate::gateway::{RequestOptions, SearchGateway};
use crate::models::DocumentText;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Appended,
    Failed,
}

pub struct DocumentFetcher<'a, G> {
    gateway: &'a G,
    results: &'a dyn ResultList,
    notifier: &'a dyn Notifier,
    options: RequestOptions,
}

impl<'a, G: SearchGateway> DocumentFetcher<'a, G> {
    pub fn new(gateway: &'a G, results: &'a dyn ResultList, notifier: &'a dyn Notifier) -> Self {
        Self {
            gateway,
            results,
            notifier,
            options: RequestOptions::default(),
        }
    }

    pub fn with_options(mut self, options: RequestOptions) -> Self {
        self.options = options;
        self
    }

    /// Requests the document and shows it, or alerts with the failure payload.
    pub async fn get_document_text(&self, document_id: &str) -> FetchOutcome {
        let result = self.fetch(document_id).await;
        self.present(document_id, result)
    }

    /// Issues the request without touching the result list.
    pub async fn fetch(&self, document_id: &str) -> Result<DocumentText> {
        debug!("Fetching document {}", document_id);
        self.gateway.document(document_id, &self.options).await
    }

    pub fn present(&self, document_id: &str, result: Result<DocumentText>) -> FetchOutcome {
        match result {
            Ok(document) => {
                debug!("Document {}: {}", document_id, document.preview(80));
                self.results.append(&document);
                FetchOutcome::Appended
            }
            Err(err) => {
                warn!("Fetching document {} failed: {}", document_id, err);
                self.notifier.alert(&err.payload());
                FetchOutcome::Failed
            }
        }
    }
}
