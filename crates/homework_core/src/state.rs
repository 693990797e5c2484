use crate::Cursor;

/// What the poll loop remembers between cycles. Lives in memory only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollState {
    last_message: Option<String>,
    cursor: Cursor,
}

impl PollState {
    /// Fresh state: nothing sent yet, polling from `cursor`.
    pub fn new(cursor: Cursor) -> Self {
        Self {
            last_message: None,
            cursor,
        }
    }

    pub fn last_message(&self) -> Option<&str> {
        self.last_message.as_deref()
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub(crate) fn is_new_message(&self, message: &str) -> bool {
        self.last_message.as_deref() != Some(message)
    }

    pub(crate) fn remember_message(&mut self, message: String) {
        self.last_message = Some(message);
    }

    pub(crate) fn advance_cursor(&mut self, cursor: Cursor) {
        self.cursor = cursor;
    }
}
