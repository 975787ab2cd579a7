use std::fmt;

use log::{debug, info};
use rand::Rng;

use quiz_core::model::{
    AnswerRecord, PracticeMode, Question, QuestionBank, QuestionId, Selection, TypeFilter,
};

use crate::error::SubmitError;
use crate::evaluator::{self, SubmissionOutcome};
use crate::filter::{FilterEngine, FilterSummary};
use crate::ledger::{AnswerLedger, WrongSet};
use crate::stats::{self, QuizStats};

//
// ─── PRESENTATION ──────────────────────────────────────────────────────────────
//

/// How the presentation layer should show a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Presentation {
    /// Submit is available. In review mode `prefill` carries the previous attempt.
    Unanswered { prefill: Option<Selection> },
    /// Normal mode with a recorded attempt: show the result, no resubmission.
    Answered { record: AnswerRecord },
}

impl Presentation {
    #[must_use]
    pub fn can_submit(&self) -> bool {
        matches!(self, Self::Unanswered { .. })
    }
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One learner's in-memory quiz session over a shared bank.
///
/// Owns the ledger, the wrong set, and the filter cursor. All operations are
/// synchronous; nothing is persisted.
pub struct QuizSession {
    bank: QuestionBank,
    ledger: AnswerLedger,
    filter: FilterEngine,
}

impl QuizSession {
    #[must_use]
    pub fn new(bank: QuestionBank) -> Self {
        info!("starting quiz session over {} questions", bank.len());
        Self {
            bank,
            ledger: AnswerLedger::new(),
            filter: FilterEngine::new(),
        }
    }

    #[must_use]
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    #[must_use]
    pub fn ledger(&self) -> &AnswerLedger {
        &self.ledger
    }

    #[must_use]
    pub fn wrong_set(&self) -> &WrongSet {
        self.ledger.wrong_set()
    }

    #[must_use]
    pub fn practice_mode(&self) -> PracticeMode {
        self.filter.practice_mode()
    }

    #[must_use]
    pub fn type_filter(&self) -> TypeFilter {
        self.filter.type_filter()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.filter.current_index()
    }

    /// The active subset, in bank order.
    #[must_use]
    pub fn filtered_questions(&self) -> Vec<&Question> {
        self.filter.filtered(&self.bank, self.ledger.wrong_set())
    }

    fn filtered_len(&self) -> usize {
        self.filtered_questions().len()
    }

    /// The question under the cursor, or `None` when the subset is empty.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.filtered_questions()
            .get(self.filter.current_index())
            .copied()
    }

    #[must_use]
    pub fn record_for(&self, id: &QuestionId) -> Option<&AnswerRecord> {
        self.ledger.record(id)
    }

    /// Presentation state for `question` under the current practice mode.
    #[must_use]
    pub fn presentation(&self, question: &Question) -> Presentation {
        let record = self.ledger.record(question.id());
        match (self.practice_mode(), record) {
            (PracticeMode::All, Some(record)) => Presentation::Answered {
                record: record.clone(),
            },
            (PracticeMode::All, None) => Presentation::Unanswered { prefill: None },
            (PracticeMode::Wrong, record) => Presentation::Unanswered {
                prefill: record.map(|r| Selection::from_answer(question.kind(), r.selected())),
            },
        }
    }

    #[must_use]
    pub fn stats(&self) -> QuizStats {
        stats::project(self.bank.len(), &self.ledger)
    }

    #[must_use]
    pub fn filter_summary(&self) -> FilterSummary {
        FilterSummary {
            practice_mode: self.practice_mode(),
            type_filter: self.type_filter(),
            filtered_count: self.filtered_len(),
            wrong_count: self.ledger.wrong_set().len(),
        }
    }

    pub fn set_practice_mode(&mut self, mode: PracticeMode) {
        self.filter
            .set_practice_mode(mode, &self.bank, self.ledger.wrong_set());
    }

    pub fn set_type_filter(&mut self, filter: TypeFilter) {
        self.filter
            .set_type_filter(filter, &self.bank, self.ledger.wrong_set());
    }

    /// Returns true if the cursor moved.
    pub fn previous(&mut self) -> bool {
        self.filter.previous()
    }

    /// Returns true if the cursor moved.
    pub fn next(&mut self) -> bool {
        let len = self.filtered_len();
        self.filter.next(len)
    }

    /// Jump to a random question in the subset.
    pub fn random(&mut self) -> bool {
        self.random_with(&mut rand::rng())
    }

    pub fn random_with<R: Rng>(&mut self, rng: &mut R) -> bool {
        let len = self.filtered_len();
        self.filter.random(len, rng)
    }

    /// Submit `selection` for the current question.
    ///
    /// The cursor is re-clamped afterwards: in review mode a correct answer
    /// removes the question from the subset.
    ///
    /// # Errors
    ///
    /// Returns `SubmitError::NoCurrentQuestion` when the subset is empty and
    /// `SubmitError::EmptySelection` when nothing was chosen.
    pub fn submit(&mut self, selection: &Selection) -> Result<SubmissionOutcome, SubmitError> {
        let bank = self.bank.clone();
        let question = self
            .filter
            .filtered(&bank, self.ledger.wrong_set())
            .get(self.filter.current_index())
            .copied()
            .ok_or(SubmitError::NoCurrentQuestion)?;

        let mode = self.practice_mode();
        let outcome = evaluator::submit(&mut self.ledger, mode, question, selection)?;

        let len = self.filtered_len();
        self.filter.clamp(len);
        Ok(outcome)
    }

    /// Forget every answer and flag. Facet selections are kept.
    pub fn reset(&mut self) {
        self.ledger.clear();
        self.filter.reset_index();
        debug!("session reset");
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("bank_len", &self.bank.len())
            .field("answered", &self.ledger.answered())
            .field("wrong_len", &self.ledger.wrong_set().len())
            .field("filter", &self.filter.state())
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
