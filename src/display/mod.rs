// file: src/display/mod.rs
// description: user-facing surfaces the controllers write to
// reference: internal module structure

pub mod collect;
pub mod console;

pub use collect::{CollectingResultList, RecordingNotifier};
pub use console::{ConsoleNotifier, ConsoleResultList};

use crate::models::DocumentText;

/// Visible list of fetched documents.
pub trait ResultList {
    /// Removes every entry shown so far.
    fn clear(&self);

    /// Appends one entry after the existing ones.
    fn append(&self, document: &DocumentText);
}

/// Blocking, modal message to the user.
pub trait Notifier {
    fn alert(&self, message: &str);
}
