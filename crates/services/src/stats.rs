use crate::ledger::AnswerLedger;

/// Aggregated answer statistics, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuizStats {
    pub total: usize,
    pub answered: usize,
    pub correct: usize,
    /// Percentage in `0.0..=100.0`; 0 when nothing has been answered.
    pub accuracy: f64,
}

impl QuizStats {
    /// Accuracy with one fractional digit, e.g. `"66.7"`.
    #[must_use]
    pub fn accuracy_label(&self) -> String {
        format!("{:.1}", self.accuracy)
    }
}

/// Project statistics from the bank size and the ledger. Pure.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn project(bank_len: usize, ledger: &AnswerLedger) -> QuizStats {
    let answered = ledger.answered();
    let correct = ledger.correct();
    let accuracy = if answered > 0 {
        correct as f64 / answered as f64 * 100.0
    } else {
        0.0
    };
    QuizStats {
        total: bank_len,
        answered,
        correct,
        accuracy,
    }
}
