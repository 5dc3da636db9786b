// file: src/display/console.rs
// description: terminal rendering of result entries and alerts
// reference: colored status formatting from utils::logging

use crate::display::{Notifier, ResultList};
use crate::models::DocumentText;
use crate::utils::logging::{format_alert, format_entry};
use std::io::{self, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::debug;

/// Prints each appended document as a numbered entry on stdout.
#[derive(Debug, Default)]
pub struct ConsoleResultList {
    shown: AtomicUsize,
}

impl ConsoleResultList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.shown.load(Ordering::SeqCst)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ResultList for ConsoleResultList {
    fn clear(&self) {
        self.shown.store(0, Ordering::SeqCst);
    }

    fn append(&self, document: &DocumentText) {
        let position = self.shown.fetch_add(1, Ordering::SeqCst) + 1;
        debug!("Appending document {} at position {}", document.document_id, position);

        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", format_entry(position, &document.text)).ok();
    }
}

/// Writes alerts to stderr so they never mix with result entries on stdout.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn alert(&self, message: &str) {
        let mut stderr = io::stderr().lock();
        writeln!(stderr, "{}", format_alert(message)).ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_list_counts_and_clears() {
        let list = ConsoleResultList::new();
        assert!(list.is_empty());

        list.append(&DocumentText::new("d1", "hello"));
        list.append(&DocumentText::new("d2", "world"));
        assert_eq!(list.len(), 2);

        list.clear();
        assert!(list.is_empty());
    }
}
