use serde::{Deserialize, Serialize};
use std::fmt;

/// Structured error shared by the corpus, the audit runner and the CLI.
///
/// `code` is a stable SCREAMING_SNAKE identifier (`CORPUS_*`, `EXPORT_*`, `AI_*`, `RUN_STORE_*`,
/// `CONFIG_*`) that callers and tests match on; `message` is for humans.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppError {
    pub code: String,
    pub message: String,
    pub details: Option<String>,
    pub retryable: bool,
}

impl AppError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
            retryable: false,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_retryable(mut self, retryable: bool) -> Self {
        self.retryable = retryable;
        self
    }

    /// Multi-line rendering for terminals: the `Display` line followed by details, if any.
    pub fn render(&self) -> String {
        match &self.details {
            Some(d) => format!("{self}\n  {d}"),
            None => self.to_string(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {}
