use log::debug;

use quiz_core::model::{AnswerRecord, PracticeMode, Question, Selection};

use crate::error::SubmitError;
use crate::ledger::AnswerLedger;

/// How a submission changed the wrong set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrongSetChange {
    Added,
    Removed,
    Unchanged,
}

/// Result of a single submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionOutcome {
    pub record: AnswerRecord,
    pub wrong_set: WrongSetChange,
}

/// Grade `selection` against `question`.
///
/// The selection is normalized to ascending letters before comparison, so a
/// multi-select answer picked in any order matches the canonical key.
///
/// # Errors
///
/// Returns `SubmitError::EmptySelection` when nothing was chosen.
pub fn evaluate(question: &Question, selection: &Selection) -> Result<AnswerRecord, SubmitError> {
    if selection.is_empty() {
        return Err(SubmitError::EmptySelection);
    }
    let selected = selection.normalized();
    let is_correct = selected == question.answer();
    Ok(AnswerRecord::new(selected, is_correct))
}

/// Grade and record an answer, applying the wrong-set rules for `mode`.
///
/// - Normal practice: correct clears the flag, incorrect sets it.
/// - Review: correct clears the flag, incorrect leaves the wrong set as is.
///
/// The ledger always keeps the latest attempt.
///
/// # Errors
///
/// Returns `SubmitError::EmptySelection` and leaves the ledger untouched.
pub fn submit(
    ledger: &mut AnswerLedger,
    mode: PracticeMode,
    question: &Question,
    selection: &Selection,
) -> Result<SubmissionOutcome, SubmitError> {
    let record = evaluate(question, selection)?;
    let id = question.id();

    let wrong = ledger.wrong_set_mut();
    let change = match (mode, record.is_correct()) {
        (_, true) => {
            if wrong.remove(id) {
                WrongSetChange::Removed
            } else {
                WrongSetChange::Unchanged
            }
        }
        (PracticeMode::All, false) => {
            if wrong.insert(id.clone()) {
                WrongSetChange::Added
            } else {
                WrongSetChange::Unchanged
            }
        }
        (PracticeMode::Wrong, false) => WrongSetChange::Unchanged,
    };

    ledger.store(id.clone(), record.clone());
    debug!(
        "submitted {id} in {mode} mode: selected={} correct={} wrong_set={change:?}",
        record.selected(),
        record.is_correct(),
    );

    Ok(SubmissionOutcome {
        record,
        wrong_set: change,
    })
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
