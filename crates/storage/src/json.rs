use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, info};
use quiz_core::model::{Question, QuestionBank, QuestionId, QuestionKind};
use serde::Deserialize;

use crate::repository::{QuestionBankSource, StorageError};

/// Bank files number their questions or give them string ids; both are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Number(u64),
    Text(String),
}

impl RawId {
    fn into_id(self) -> QuestionId {
        match self {
            Self::Number(n) => QuestionId::from(n),
            Self::Text(s) => QuestionId::new(s),
        }
    }
}

/// On-disk shape of a question.
///
/// This mirrors the domain `Question` but keeps `type` as free text so an
/// unknown type reports which record it came from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuestionRecord {
    pub id: RawId,
    pub stem: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub options: Vec<String>,
    pub answer: String,
    #[serde(default)]
    pub explanation: Option<String>,
}

impl QuestionRecord {
    /// Convert the record into a validated domain `Question`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::InvalidQuestion` naming the offending id.
    pub fn into_question(self) -> Result<Question, StorageError> {
        let id = self.id.into_id();
        let invalid = |source| StorageError::InvalidQuestion {
            id: id.to_string(),
            source,
        };
        let kind: QuestionKind = self.kind.parse().map_err(invalid)?;
        Question::new(
            id.clone(),
            self.stem,
            kind,
            self.options,
            self.answer,
            self.explanation,
        )
        .map_err(invalid)
    }
}

/// Parse a JSON array of question records into a bank.
///
/// # Errors
///
/// Returns `StorageError::Serialization` for malformed JSON, and
/// `InvalidQuestion`/`InvalidBank` for records that break bank invariants.
pub fn parse_bank(raw: &str) -> Result<QuestionBank, StorageError> {
    let records: Vec<QuestionRecord> = serde_json::from_str(raw)?;
    let questions = records
        .into_iter()
        .map(QuestionRecord::into_question)
        .collect::<Result<Vec<_>, _>>()?;
    QuestionBank::new(questions).map_err(StorageError::InvalidBank)
}

/// Question bank stored as a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileBank {
    path: PathBuf,
}

impl JsonFileBank {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl QuestionBankSource for JsonFileBank {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<QuestionBank, StorageError> {
        debug!("reading question bank from {}", self.path.display());
        let raw = std::fs::read_to_string(&self.path).map_err(|err| {
            if err.kind() == ErrorKind::NotFound {
                StorageError::NotFound(self.path.clone())
            } else {
                StorageError::Io(err)
            }
        })?;
        let bank = parse_bank(&raw)?;
        info!(
            "loaded {} questions from {} (single: {}, multiple: {}, judge: {})",
            bank.len(),
            self.path.display(),
            bank.count_kind(QuestionKind::Single),
            bank.count_kind(QuestionKind::Multiple),
            bank.count_kind(QuestionKind::Judge),
        );
        Ok(bank)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
