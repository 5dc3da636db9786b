// file: src/display/collect.rs
// description: in-memory result list and notifier for export and tests

use crate::display::{Notifier, ResultList};
use crate::models::DocumentText;
use std::sync::Mutex;

/// Keeps appended documents in memory, in append order.
#[derive(Debug, Default)]
pub struct CollectingResultList {
    entries: Mutex<Vec<DocumentText>>,
}

impl CollectingResultList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<DocumentText> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    pub fn texts(&self) -> Vec<String> {
        self.entries().into_iter().map(|doc| doc.text).collect()
    }
}

impl ResultList for CollectingResultList {
    fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }

    fn append(&self, document: &DocumentText) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(document.clone());
        }
    }
}

/// Records every alert instead of showing it.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    alerts: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts
            .lock()
            .map(|alerts| alerts.clone())
            .unwrap_or_default()
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        if let Ok(mut alerts) = self.alerts.lock() {
            alerts.push(message.to_string());
        }
    }
}
