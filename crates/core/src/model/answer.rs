use serde::{Deserialize, Serialize};

/// The latest submitted answer for one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    selected: String,
    is_correct: bool,
}

impl AnswerRecord {
    #[must_use]
    pub fn new(selected: impl Into<String>, is_correct: bool) -> Self {
        Self {
            selected: selected.into(),
            is_correct,
        }
    }

    /// Submitted letters, encoded like `Question::answer`.
    #[must_use]
    pub fn selected(&self) -> &str {
        &self.selected
    }

    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.is_correct
    }
}
