use std::collections::{BTreeSet, HashMap};

use quiz_core::model::{AnswerRecord, QuestionId};

/// Question ids the learner should revisit.
///
/// Mutated only by submission rules; it is not a mirror of the ledger's
/// `is_correct` flags because review-mode attempts never add to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WrongSet {
    ids: BTreeSet<QuestionId>,
}

impl WrongSet {
    #[must_use]
    pub fn contains(&self, id: &QuestionId) -> bool {
        self.ids.contains(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &QuestionId> {
        self.ids.iter()
    }

    /// Returns true if the id was newly flagged.
    pub(crate) fn insert(&mut self, id: QuestionId) -> bool {
        self.ids.insert(id)
    }

    /// Returns true if the id was flagged before.
    pub(crate) fn remove(&mut self, id: &QuestionId) -> bool {
        self.ids.remove(id)
    }

    pub(crate) fn clear(&mut self) {
        self.ids.clear();
    }
}

/// Latest answer per question plus the wrong set.
#[derive(Debug, Clone, Default)]
pub struct AnswerLedger {
    records: HashMap<QuestionId, AnswerRecord>,
    wrong: WrongSet,
}

impl AnswerLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn record(&self, id: &QuestionId) -> Option<&AnswerRecord> {
        self.records.get(id)
    }

    pub fn records(&self) -> impl Iterator<Item = (&QuestionId, &AnswerRecord)> {
        self.records.iter()
    }

    /// Number of questions with at least one submission.
    #[must_use]
    pub fn answered(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn correct(&self) -> usize {
        self.records.values().filter(|r| r.is_correct()).count()
    }

    #[must_use]
    pub fn wrong_set(&self) -> &WrongSet {
        &self.wrong
    }

    pub(crate) fn wrong_set_mut(&mut self) -> &mut WrongSet {
        &mut self.wrong
    }

    /// Stores `record`, replacing any earlier attempt.
    pub(crate) fn store(&mut self, id: QuestionId, record: AnswerRecord) {
        self.records.insert(id, record);
    }

    /// Drops every record and flag.
    pub fn clear(&mut self) {
        self.records.clear();
        self.wrong.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_overwrites_previous_attempt() {
        let mut ledger = AnswerLedger::new();
        let id = QuestionId::from(1);
        ledger.store(id.clone(), AnswerRecord::new("B", false));
        ledger.store(id.clone(), AnswerRecord::new("A", true));

        assert_eq!(ledger.answered(), 1);
        assert_eq!(ledger.correct(), 1);
        assert_eq!(ledger.record(&id).unwrap().selected(), "A");
    }

    #[test]
    fn clear_empties_records_and_wrong_set() {
        let mut ledger = AnswerLedger::new();
        ledger.store(QuestionId::from(1), AnswerRecord::new("B", false));
        ledger.wrong_set_mut().insert(QuestionId::from(1));

        ledger.clear();

        assert_eq!(ledger.answered(), 0);
        assert!(ledger.wrong_set().is_empty());
    }

    #[test]
    fn wrong_set_insert_and_remove_report_changes() {
        let mut wrong = WrongSet::default();
        assert!(wrong.insert(QuestionId::from(4)));
        assert!(!wrong.insert(QuestionId::from(4)));
        assert!(wrong.contains(&QuestionId::new("4")));
        assert!(wrong.remove(&QuestionId::from(4)));
        assert!(!wrong.remove(&QuestionId::from(4)));
    }
}
