//! Success acknowledgement for operations without a resource body.

/// Human-readable confirmation returned by delete operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    message: String,
}

impl Confirmation {
    /// Wrap a confirmation message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Message naming what was affected.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}
