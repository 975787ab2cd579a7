use std::collections::BTreeSet;

use crate::model::question::{OptionLetter, QuestionKind};

/// What the learner picked, as handed over by the presentation layer.
///
/// `Single` carries one radio-style choice; `Multiple` carries a checkbox set.
/// The default value is an empty set, meaning nothing has been chosen yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Single(OptionLetter),
    Multiple(BTreeSet<OptionLetter>),
}

impl Default for Selection {
    fn default() -> Self {
        Self::Multiple(BTreeSet::new())
    }
}

impl Selection {
    #[must_use]
    pub fn single(letter: OptionLetter) -> Self {
        Self::Single(letter)
    }

    pub fn multiple(letters: impl IntoIterator<Item = OptionLetter>) -> Self {
        Self::Multiple(letters.into_iter().collect())
    }

    /// Rebuilds a selection from a stored answer string such as `"AC"`.
    ///
    /// Unknown characters are skipped; used to pre-fill a previous attempt.
    #[must_use]
    pub fn from_answer(kind: QuestionKind, answer: &str) -> Self {
        let mut letters = answer.chars().filter_map(OptionLetter::from_char);
        if kind.is_single_answer() {
            letters.next().map_or_else(Self::default, Self::Single)
        } else {
            Self::multiple(letters)
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Single(_) => false,
            Self::Multiple(letters) => letters.is_empty(),
        }
    }

    #[must_use]
    pub fn contains(&self, letter: OptionLetter) -> bool {
        match self {
            Self::Single(chosen) => *chosen == letter,
            Self::Multiple(letters) => letters.contains(&letter),
        }
    }

    /// Adds or removes `letter` from a checkbox set.
    ///
    /// A single choice is widened to a set first.
    pub fn toggle(&mut self, letter: OptionLetter) {
        if let Self::Single(chosen) = *self {
            *self = Self::multiple([chosen]);
        }
        if let Self::Multiple(letters) = self {
            if !letters.remove(&letter) {
                letters.insert(letter);
            }
        }
    }

    /// Letters in ascending order, the encoding used by answers.
    #[must_use]
    pub fn normalized(&self) -> String {
        match self {
            Self::Single(letter) => letter.as_char().to_string(),
            Self::Multiple(letters) => letters.iter().map(|l| l.as_char()).collect(),
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
