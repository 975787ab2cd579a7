use log::debug;
use rand::Rng;

use quiz_core::model::{PracticeMode, Question, QuestionBank, TypeFilter};

use crate::ledger::WrongSet;

/// Derive the active subset for the given facets.
///
/// Bank order is preserved. The type facet is applied first, then the mode
/// facet; a question must pass both.
#[must_use]
pub fn compute_filtered_questions<'a>(
    bank: &'a QuestionBank,
    wrong: &WrongSet,
    practice_mode: PracticeMode,
    type_filter: TypeFilter,
) -> Vec<&'a Question> {
    bank.iter()
        .filter(|q| type_filter.matches(q.kind()))
        .filter(|q| !practice_mode.is_review() || wrong.contains(q.id()))
        .collect()
}

/// Facet selections plus the cursor into the filtered subset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterState {
    pub practice_mode: PracticeMode,
    pub type_filter: TypeFilter,
    pub current_index: usize,
}

/// Owns the filter facets and keeps the cursor valid for the current subset.
///
/// The engine never stores the subset itself; callers pass the subset length
/// after every change so the cursor can be re-validated.
#[derive(Debug, Clone, Default)]
pub struct FilterEngine {
    state: FilterState,
}

impl FilterEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> FilterState {
        self.state
    }

    #[must_use]
    pub fn practice_mode(&self) -> PracticeMode {
        self.state.practice_mode
    }

    #[must_use]
    pub fn type_filter(&self) -> TypeFilter {
        self.state.type_filter
    }

    /// Cursor position; 0 when the subset is empty.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    #[must_use]
    pub fn filtered<'a>(&self, bank: &'a QuestionBank, wrong: &WrongSet) -> Vec<&'a Question> {
        compute_filtered_questions(bank, wrong, self.state.practice_mode, self.state.type_filter)
    }

    /// Switch the mode facet and restart the cursor on the new subset.
    pub fn set_practice_mode(&mut self, mode: PracticeMode, bank: &QuestionBank, wrong: &WrongSet) {
        self.state.practice_mode = mode;
        let len = self.filtered(bank, wrong).len();
        self.on_filter_change(len);
    }

    /// Switch the type facet and restart the cursor on the new subset.
    pub fn set_type_filter(&mut self, filter: TypeFilter, bank: &QuestionBank, wrong: &WrongSet) {
        self.state.type_filter = filter;
        let len = self.filtered(bank, wrong).len();
        self.on_filter_change(len);
    }

    /// Restart at the top of a freshly filtered subset of length `len`.
    pub fn on_filter_change(&mut self, len: usize) {
        self.state.current_index = 0;
        self.clamp(len);
        debug!(
            "filter changed: mode={} type={} len={len}",
            self.state.practice_mode, self.state.type_filter
        );
    }

    /// Keep the cursor inside a subset whose size or contents changed.
    pub fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.state.current_index = 0;
        } else if self.state.current_index >= len {
            self.state.current_index = len - 1;
        }
    }

    /// Returns true if the cursor moved.
    pub fn previous(&mut self) -> bool {
        if self.state.current_index > 0 {
            self.state.current_index -= 1;
            return true;
        }
        false
    }

    /// Returns true if the cursor moved.
    pub fn next(&mut self, len: usize) -> bool {
        if self.state.current_index + 1 < len {
            self.state.current_index += 1;
            return true;
        }
        false
    }

    /// Jump to a uniformly random index. Repeats are allowed.
    pub fn random<R: Rng>(&mut self, len: usize, rng: &mut R) -> bool {
        if len == 0 {
            return false;
        }
        self.state.current_index = rng.random_range(0..len);
        true
    }

    pub fn reset_index(&mut self) {
        self.state.current_index = 0;
    }
}

/// Data behind the "current filters" line; the presentation layer words it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSummary {
    pub practice_mode: PracticeMode,
    pub type_filter: TypeFilter,
    pub filtered_count: usize,
    pub wrong_count: usize,
}

impl FilterSummary {
    /// Why the subset is empty, if it is.
    #[must_use]
    pub fn empty_reason(&self) -> Option<EmptyReason> {
        if self.filtered_count > 0 {
            return None;
        }
        Some(match (self.practice_mode, self.type_filter) {
            (PracticeMode::Wrong, _) if self.wrong_count == 0 => EmptyReason::NoWrongQuestions,
            (PracticeMode::Wrong, TypeFilter::All) => EmptyReason::NoMatches,
            (PracticeMode::Wrong, _) => EmptyReason::NoWrongQuestionsOfType,
            (PracticeMode::All, TypeFilter::All) => EmptyReason::EmptyBank,
            (PracticeMode::All, _) => EmptyReason::NoQuestionsOfType,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReason {
    /// Review mode with nothing flagged.
    NoWrongQuestions,
    /// Review mode: flagged questions exist, none of the selected type.
    NoWrongQuestionsOfType,
    /// The bank has no questions of the selected type.
    NoQuestionsOfType,
    EmptyBank,
    NoMatches,
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::{QuestionId, QuestionKind};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn bank() -> QuestionBank {
        let kinds = [
            QuestionKind::Single,
            QuestionKind::Multiple,
            QuestionKind::Judge,
            QuestionKind::Single,
            QuestionKind::Judge,
        ];
        let questions = kinds
            .iter()
            .enumerate()
            .map(|(i, kind)| {
                Question::new(
                    QuestionId::from(i as u64 + 1),
                    format!("Q{}", i + 1),
                    *kind,
                    vec!["a".into(), "b".into()],
                    "A",
                    None,
                )
                .unwrap()
            })
            .collect();
        QuestionBank::new(questions).unwrap()
    }

    fn ids(questions: &[&Question]) -> Vec<String> {
        questions.iter().map(|q| q.id().to_string()).collect()
    }

    #[test]
    fn every_facet_combination_is_an_ordered_matching_subset() {
        let bank = bank();
        let mut wrong = WrongSet::default();
        wrong.insert(QuestionId::from(2));
        wrong.insert(QuestionId::from(5));

        for mode in [PracticeMode::All, PracticeMode::Wrong] {
            for filter in TypeFilter::ALL {
                let subset = compute_filtered_questions(&bank, &wrong, mode, filter);
                assert!(subset.len() <= bank.len());

                let positions: Vec<usize> = subset
                    .iter()
                    .map(|q| bank.iter().position(|b| b.id() == q.id()).unwrap())
                    .collect();
                assert!(positions.windows(2).all(|w| w[0] < w[1]));

                for q in &subset {
                    assert!(filter.matches(q.kind()));
                    if mode.is_review() {
                        assert!(wrong.contains(q.id()));
                    }
                }
            }
        }
    }

    #[test]
    fn facets_compose_with_and_semantics() {
        let bank = bank();
        let mut wrong = WrongSet::default();
        wrong.insert(QuestionId::from(1));
        wrong.insert(QuestionId::from(3));

        let singles = compute_filtered_questions(&bank, &wrong, PracticeMode::All, TypeFilter::Single);
        assert_eq!(ids(&singles), vec!["1", "4"]);

        let wrong_judge =
            compute_filtered_questions(&bank, &wrong, PracticeMode::Wrong, TypeFilter::Judge);
        assert_eq!(ids(&wrong_judge), vec!["3"]);
    }

    #[test]
    fn empty_bank_yields_empty_subsets() {
        let bank = QuestionBank::empty();
        let wrong = WrongSet::default();
        for filter in TypeFilter::ALL {
            assert!(compute_filtered_questions(&bank, &wrong, PracticeMode::All, filter).is_empty());
        }
    }

    #[test]
    fn navigation_stops_at_boundaries() {
        let mut engine = FilterEngine::new();
        assert!(!engine.previous());
        assert_eq!(engine.current_index(), 0);

        assert!(engine.next(3));
        assert!(engine.next(3));
        assert!(!engine.next(3));
        assert_eq!(engine.current_index(), 2);

        assert!(engine.previous());
        assert_eq!(engine.current_index(), 1);
    }

    #[test]
    fn next_on_empty_subset_is_noop() {
        let mut engine = FilterEngine::new();
        assert!(!engine.next(0));
        assert_eq!(engine.current_index(), 0);
    }

    #[test]
    fn filter_change_restarts_at_zero() {
        let mut engine = FilterEngine::new();
        engine.next(5);
        engine.next(5);
        engine.on_filter_change(5);
        assert_eq!(engine.current_index(), 0);
        engine.on_filter_change(0);
        assert_eq!(engine.current_index(), 0);
    }

    #[test]
    fn facet_setters_keep_cursor_valid() {
        let bank = bank();
        let mut wrong = WrongSet::default();
        let mut engine = FilterEngine::new();
        for _ in 0..4 {
            engine.next(bank.len());
        }
        assert_eq!(engine.current_index(), 4);

        engine.set_type_filter(TypeFilter::Multiple, &bank, &wrong);
        assert_eq!(engine.current_index(), 0);
        assert_eq!(ids(&engine.filtered(&bank, &wrong)), vec!["2"]);

        engine.set_type_filter(TypeFilter::All, &bank, &wrong);
        engine.next(bank.len());
        engine.set_practice_mode(PracticeMode::Wrong, &bank, &wrong);
        assert_eq!(engine.current_index(), 0);
        assert!(engine.filtered(&bank, &wrong).is_empty());

        wrong.insert(QuestionId::from(3));
        engine.set_practice_mode(PracticeMode::Wrong, &bank, &wrong);
        assert_eq!(engine.current_index(), 0);
        assert_eq!(ids(&engine.filtered(&bank, &wrong)), vec!["3"]);
    }

    #[test]
    fn clamp_pulls_cursor_back_into_range() {
        let mut engine = FilterEngine::new();
        for _ in 0..4 {
            engine.next(5);
        }
        engine.clamp(2);
        assert_eq!(engine.current_index(), 1);
        engine.clamp(0);
        assert_eq!(engine.current_index(), 0);
    }

    #[test]
    fn random_stays_in_range() {
        let mut engine = FilterEngine::new();
        let mut rng = StdRng::seed_from_u64(7);
        assert!(!engine.random(0, &mut rng));
        for _ in 0..50 {
            assert!(engine.random(3, &mut rng));
            assert!(engine.current_index() < 3);
        }
    }

    #[test]
    fn empty_reason_explains_empty_subsets() {
        let summary = FilterSummary {
            practice_mode: PracticeMode::Wrong,
            type_filter: TypeFilter::Judge,
            filtered_count: 0,
            wrong_count: 0,
        };
        assert_eq!(summary.empty_reason(), Some(EmptyReason::NoWrongQuestions));

        let summary = FilterSummary {
            wrong_count: 2,
            ..summary
        };
        assert_eq!(summary.empty_reason(), Some(EmptyReason::NoWrongQuestionsOfType));

        let summary = FilterSummary {
            practice_mode: PracticeMode::All,
            ..summary
        };
        assert_eq!(summary.empty_reason(), Some(EmptyReason::NoQuestionsOfType));

        let summary = FilterSummary {
            filtered_count: 1,
            ..summary
        };
        assert_eq!(summary.empty_reason(), None);
    }
}
