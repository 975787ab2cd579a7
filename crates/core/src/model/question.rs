use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::model::ids::QuestionId;

/// Options are addressed by a single capital letter, so a question can hold at most 26.
pub const MAX_OPTIONS: usize = 26;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question stem cannot be empty")]
    EmptyStem,

    #[error("question must have at least one option")]
    NoOptions,

    #[error("question has {0} options, at most 26 are supported")]
    TooManyOptions(usize),

    #[error("judge question must have exactly 2 options, got {0}")]
    JudgeOptionCount(usize),

    #[error("unknown question type: {0}")]
    UnknownKind(String),

    #[error("answer cannot be empty")]
    EmptyAnswer,

    #[error("answer letter {0:?} does not address an option")]
    AnswerOutOfRange(char),

    #[error("single-answer question expects exactly one letter, got {0:?}")]
    AnswerArity(String),

    #[error("multiple answer {0:?} must list distinct letters in ascending order")]
    UnsortedAnswer(String),

    #[error("duplicate question id {0}")]
    DuplicateId(QuestionId),
}

//
// ─── QUESTION KIND ─────────────────────────────────────────────────────────────
//

/// The three question shapes a bank can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    /// Exactly one correct option.
    Single,
    /// One or more correct options, answered as a set.
    Multiple,
    /// True/false: a single-choice question with exactly two options.
    Judge,
}

impl QuestionKind {
    pub const ALL: [QuestionKind; 3] = [Self::Single, Self::Multiple, Self::Judge];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Multiple => "multiple",
            Self::Judge => "judge",
        }
    }

    /// True when the answer is a single letter.
    #[must_use]
    pub fn is_single_answer(self) -> bool {
        !matches!(self, Self::Multiple)
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionKind {
    type Err = QuestionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single" => Ok(Self::Single),
            "multiple" => Ok(Self::Multiple),
            "judge" => Ok(Self::Judge),
            other => Err(QuestionError::UnknownKind(other.to_string())),
        }
    }
}

//
// ─── OPTION LETTER ─────────────────────────────────────────────────────────────
//

/// Position of an option, rendered as `A + index`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OptionLetter(u8);

impl OptionLetter {
    /// Letter for the option at `index`, if it fits in `A..=Z`.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        u8::try_from(index)
            .ok()
            .filter(|i| usize::from(*i) < MAX_OPTIONS)
            .map(Self)
    }

    /// Parses a capital letter `A..=Z`.
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        if ch.is_ascii_uppercase() {
            Some(Self(ch as u8 - b'A'))
        } else {
            None
        }
    }

    #[must_use]
    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    #[must_use]
    pub fn as_char(self) -> char {
        char::from(b'A' + self.0)
    }
}

impl fmt::Debug for OptionLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OptionLetter({})", self.as_char())
    }
}

impl fmt::Display for OptionLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// An immutable, validated question record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    stem: String,
    kind: QuestionKind,
    options: Vec<String>,
    answer: String,
    explanation: Option<String>,
}

impl Question {
    /// Creates a validated question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` when the stem is blank, the option list has the
    /// wrong shape for `kind`, or `answer` does not name valid options in
    /// canonical form (one letter, or ascending distinct letters for `multiple`).
    pub fn new(
        id: QuestionId,
        stem: impl Into<String>,
        kind: QuestionKind,
        options: Vec<String>,
        answer: impl Into<String>,
        explanation: Option<String>,
    ) -> Result<Self, QuestionError> {
        let stem = stem.into();
        if stem.trim().is_empty() {
            return Err(QuestionError::EmptyStem);
        }
        if options.is_empty() {
            return Err(QuestionError::NoOptions);
        }
        if options.len() > MAX_OPTIONS {
            return Err(QuestionError::TooManyOptions(options.len()));
        }
        if kind == QuestionKind::Judge && options.len() != 2 {
            return Err(QuestionError::JudgeOptionCount(options.len()));
        }

        let answer = answer.into();
        validate_answer(kind, options.len(), &answer)?;

        let explanation = explanation
            .map(|e| e.trim().to_owned())
            .filter(|e| !e.is_empty());

        Ok(Self {
            id,
            stem,
            kind,
            options,
            answer,
            explanation,
        })
    }

    // Accessors
    #[must_use]
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    #[must_use]
    pub fn stem(&self) -> &str {
        &self.stem
    }

    #[must_use]
    pub fn kind(&self) -> QuestionKind {
        self.kind
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Options paired with their letters, in display order.
    pub fn lettered_options(&self) -> impl Iterator<Item = (OptionLetter, &str)> {
        self.options
            .iter()
            .enumerate()
            .filter_map(|(i, text)| OptionLetter::from_index(i).map(|l| (l, text.as_str())))
    }

    /// Canonical answer letters, e.g. `"B"` or `"ACD"`.
    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    #[must_use]
    pub fn explanation(&self) -> Option<&str> {
        self.explanation.as_deref()
    }
}

fn validate_answer(kind: QuestionKind, option_count: usize, answer: &str) -> Result<(), QuestionError> {
    if answer.is_empty() {
        return Err(QuestionError::EmptyAnswer);
    }

    let mut previous: Option<OptionLetter> = None;
    for ch in answer.chars() {
        let letter = OptionLetter::from_char(ch).ok_or(QuestionError::AnswerOutOfRange(ch))?;
        if letter.index() >= option_count {
            return Err(QuestionError::AnswerOutOfRange(ch));
        }
        if previous.is_some_and(|p| p >= letter) {
            return Err(QuestionError::UnsortedAnswer(answer.to_string()));
        }
        previous = Some(letter);
    }

    if kind.is_single_answer() && answer.chars().count() != 1 {
        return Err(QuestionError::AnswerArity(answer.to_string()));
    }
    Ok(())
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
