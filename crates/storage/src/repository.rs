use std::path::PathBuf;

use quiz_core::model::{QuestionBank, QuestionError};
use thiserror::Error;

/// Errors surfaced by question bank sources.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("question bank not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read question bank: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid question {id}: {source}")]
    InvalidQuestion {
        id: String,
        #[source]
        source: QuestionError,
    },

    #[error("invalid question bank: {0}")]
    InvalidBank(#[source] QuestionError),
}

impl StorageError {
    /// True when the source could not be reached at all, as opposed to
    /// being reachable but malformed.
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::Io(_))
    }
}

/// Contract for anything that can supply a validated question bank.
pub trait QuestionBankSource: Send + Sync {
    /// Human-readable origin for diagnostics.
    fn describe(&self) -> String;

    /// Load and validate the full bank.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the source is unavailable or any record is invalid.
    fn load(&self) -> Result<QuestionBank, StorageError>;
}

/// Source backed by an already-built bank. Useful for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBank {
    bank: QuestionBank,
}

impl InMemoryBank {
    #[must_use]
    pub fn new(bank: QuestionBank) -> Self {
        Self { bank }
    }
}

impl QuestionBankSource for InMemoryBank {
    fn describe(&self) -> String {
        format!("in-memory bank ({} questions)", self.bank.len())
    }

    fn load(&self) -> Result<QuestionBank, StorageError> {
        Ok(self.bank.clone())
    }
}
