// file: src/controller/test_support.rs
// description: scripted in-memory gateway for controller tests

use crate::error::{Result, SearchError};
use crate::gateway::{RequestOptions, SearchGateway};
use crate::models::{DocumentText, SearchHit, SearchQuery, UploadPayload, UploadReceipt};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Query(String),
    Document(String),
    Upload(String),
}

enum Reply {
    Ok(String),
    Fail(String),
}

struct ScriptedDocument {
    text: String,
    delay: Duration,
}

pub struct FakeGateway {
    hits: Vec<SearchHit>,
    query_failure: Option<String>,
    documents: HashMap<String, ScriptedDocument>,
    upload_reply: Reply,
    uploaded: Mutex<Vec<(String, String)>>,
    calls: Mutex<Vec<Call>>,
    last_options: Mutex<Option<RequestOptions>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl FakeGateway {
    pub fn new() -> Self {
        Self {
            hits: Vec::new(),
            query_failure: None,
            documents: HashMap::new(),
            upload_reply: Reply::Ok("ok".to_string()),
            uploaded: Mutex::new(Vec::new()),
            calls: Mutex::new(Vec::new()),
            last_options: Mutex::new(None),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        }
    }

    pub fn with_hits(mut self, ids: &[&str]) -> Self {
        self.hits = ids.iter().map(|id| SearchHit::new(*id)).collect();
        self
    }

    pub fn failing_query(mut self, message: &str) -> Self {
        self.query_failure = Some(message.to_string());
        self
    }

    pub fn with_document(self, id: &str, text: &str) -> Self {
        self.with_delayed_document(id, text, Duration::ZERO)
    }

    pub fn with_delayed_document(mut self, id: &str, text: &str, delay: Duration) -> Self {
        self.documents.insert(
            id.to_string(),
            ScriptedDocument {
                text: text.to_string(),
                delay,
            },
        );
        self
    }

    pub fn upload_replies(mut self, payload: &str) -> Self {
        self.upload_reply = Reply::Ok(payload.to_string());
        self
    }

    pub fn failing_upload(mut self, message: &str) -> Self {
        self.upload_reply = Reply::Fail(message.to_string());
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn document_calls(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Document(id) => Some(id),
                _ => None,
            })
            .collect()
    }

    pub fn last_options(&self) -> Option<RequestOptions> {
        self.last_options.lock().unwrap().clone()
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    fn record(&self, call: Call, options: &RequestOptions) {
        self.calls.lock().unwrap().push(call);
        *self.last_options.lock().unwrap() = Some(options.clone());
    }
}

impl SearchGateway for FakeGateway {
    async fn query(&self, query: &SearchQuery, options: &RequestOptions) -> Result<Vec<SearchHit>> {
        self.record(Call::Query(query.text.clone()), options);
        match &self.query_failure {
            Some(message) => Err(SearchError::Transport(message.clone())),
            None => {
                let mut hits = self.hits.clone();
                hits.extend(
                    self.uploaded
                        .lock()
                        .unwrap()
                        .iter()
                        .map(|(id, _)| SearchHit::new(id.clone())),
                );
                Ok(hits)
            }
        }
    }

    async fn document(&self, document_id: &str, options: &RequestOptions) -> Result<DocumentText> {
        self.record(Call::Document(document_id.to_string()), options);

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        let uploaded = self
            .uploaded
            .lock()
            .unwrap()
            .iter()
            .find(|(id, _)| id == document_id)
            .map(|(_, text)| text.clone());

        let result = match (self.documents.get(document_id), uploaded) {
            (None, Some(text)) => Ok(DocumentText::new(document_id, text)),
            (Some(scripted), _) => {
                if !scripted.delay.is_zero() {
                    tokio::time::sleep(scripted.delay).await;
                }
                Ok(DocumentText::new(document_id, scripted.text.clone()))
            }
            (None, None) => Err(SearchError::Status {
                status: 404,
                body: "\"Document ID not found\"".to_string(),
            }),
        };

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        result
    }

    async fn upload(
        &self,
        payload: &UploadPayload,
        options: &RequestOptions,
    ) -> Result<UploadReceipt> {
        self.record(Call::Upload(payload.document.clone()), options);
        match &self.upload_reply {
            Reply::Ok(body) => {
                let mut uploaded = self.uploaded.lock().unwrap();
                let id = format!("uploaded-{}", uploaded.len() + 1);
                uploaded.push((id, payload.document.clone()));
                Ok(UploadReceipt::from_body(body))
            }
            Reply::Fail(message) => Err(SearchError::Transport(message.clone())),
        }
    }
}
