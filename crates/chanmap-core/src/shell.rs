//! Operator interaction used by the workflows.

use std::io;

/// One selectable entry in a choice prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    /// Value returned when this entry is selected.
    pub value: String,
    /// Text shown to the operator.
    pub label: String,
}

impl Choice {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Progress of a row-by-row operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressUpdate {
    /// Another row has been handled; `processed` is the running total.
    Advanced { processed: usize },
    /// The operation is over.
    Finished { processed: usize },
}

/// Capabilities the workflows need from whoever is operating them.
///
/// `None` from [`present_choice`](Shell::present_choice) or
/// [`request_text`](Shell::request_text) means the operator cancelled.
pub trait Shell {
    fn present_choice(
        &mut self,
        title: &str,
        text: &str,
        choices: &[Choice],
    ) -> io::Result<Option<String>>;

    fn show_message(&mut self, title: &str, text: &str) -> io::Result<()>;

    fn request_text(&mut self, title: &str, text: &str) -> io::Result<Option<String>>;

    fn show_progress(&mut self, update: ProgressUpdate) -> io::Result<()>;
}
