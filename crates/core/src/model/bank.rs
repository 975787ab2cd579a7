use std::collections::HashSet;
use std::sync::Arc;

use crate::model::question::{Question, QuestionError, QuestionKind};

/// Immutable, ordered question bank shared between the loader and sessions.
///
/// Order is significant: every filtered view preserves it. Cloning is cheap.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuestionBank {
    questions: Arc<[Question]>,
}

impl QuestionBank {
    /// Builds a bank from validated questions.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::DuplicateId` if two questions share an id.
    pub fn new(questions: Vec<Question>) -> Result<Self, QuestionError> {
        let mut seen = HashSet::with_capacity(questions.len());
        for question in &questions {
            if !seen.insert(question.id().clone()) {
                return Err(QuestionError::DuplicateId(question.id().clone()));
            }
        }
        Ok(Self {
            questions: questions.into(),
        })
    }

    /// A bank with no questions. Valid input; every filter yields nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }

    /// Number of questions of the given kind.
    #[must_use]
    pub fn count_kind(&self, kind: QuestionKind) -> usize {
        self.questions.iter().filter(|q| q.kind() == kind).count()
    }
}

impl<'a> IntoIterator for &'a QuestionBank {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ids::QuestionId;

    fn question(id: u64, kind: QuestionKind) -> Question {
        let (options, answer) = match kind {
            QuestionKind::Judge => (vec!["true".to_string(), "false".to_string()], "A"),
            _ => (vec!["x".to_string(), "y".to_string(), "z".to_string()], "B"),
        };
        Question::new(QuestionId::from(id), format!("Q{id}"), kind, options, answer, None).unwrap()
    }

    #[test]
    fn bank_rejects_duplicate_ids() {
        let err = QuestionBank::new(vec![
            question(1, QuestionKind::Single),
            question(1, QuestionKind::Judge),
        ])
        .unwrap_err();
        assert_eq!(err, QuestionError::DuplicateId(QuestionId::from(1)));
    }

    #[test]
    fn bank_preserves_order_and_counts_kinds() {
        let bank = QuestionBank::new(vec![
            question(3, QuestionKind::Judge),
            question(1, QuestionKind::Single),
            question(2, QuestionKind::Judge),
        ])
        .unwrap();

        let ids: Vec<&str> = bank.iter().map(|q| q.id().as_str()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
        assert_eq!(bank.count_kind(QuestionKind::Judge), 2);
        assert_eq!(bank.count_kind(QuestionKind::Multiple), 0);
    }

    #[test]
    fn empty_bank_is_valid() {
        let bank = QuestionBank::empty();
        assert!(bank.is_empty());
        assert_eq!(bank.len(), 0);
    }
}
