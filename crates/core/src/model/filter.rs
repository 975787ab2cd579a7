use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::model::question::QuestionKind;

/// Which pool of questions is being practiced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PracticeMode {
    /// Every question in the bank.
    #[default]
    All,
    /// Review mode: only questions currently in the wrong set.
    Wrong,
}

impl PracticeMode {
    #[must_use]
    pub fn is_review(self) -> bool {
        matches!(self, Self::Wrong)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Wrong => "wrong",
        }
    }
}

/// Restricts the bank to one question kind, or none.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeFilter {
    #[default]
    All,
    Single,
    Multiple,
    Judge,
}

impl TypeFilter {
    pub const ALL: [TypeFilter; 4] = [Self::All, Self::Single, Self::Multiple, Self::Judge];

    #[must_use]
    pub fn matches(self, kind: QuestionKind) -> bool {
        match self {
            Self::All => true,
            Self::Single => kind == QuestionKind::Single,
            Self::Multiple => kind == QuestionKind::Multiple,
            Self::Judge => kind == QuestionKind::Judge,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Single => "single",
            Self::Multiple => "multiple",
            Self::Judge => "judge",
        }
    }
}

impl From<QuestionKind> for TypeFilter {
    fn from(kind: QuestionKind) -> Self {
        match kind {
            QuestionKind::Single => Self::Single,
            QuestionKind::Multiple => Self::Multiple,
            QuestionKind::Judge => Self::Judge,
        }
    }
}

impl fmt::Display for PracticeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type for parsing a facet from string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFacetError(String);

impl fmt::Display for ParseFacetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown filter value: {}", self.0)
    }
}

impl std::error::Error for ParseFacetError {}

impl FromStr for PracticeMode {
    type Err = ParseFacetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "wrong" => Ok(Self::Wrong),
            other => Err(ParseFacetError(other.to_string())),
        }
    }
}

impl FromStr for TypeFilter {
    type Err = ParseFacetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "single" => Ok(Self::Single),
            "multiple" => Ok(Self::Multiple),
            "judge" => Ok(Self::Judge),
            other => Err(ParseFacetError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_filter_matches_every_kind() {
        for kind in QuestionKind::ALL {
            assert!(TypeFilter::All.matches(kind));
            assert!(TypeFilter::from(kind).matches(kind));
        }
        assert!(!TypeFilter::Judge.matches(QuestionKind::Single));
    }

    #[test]
    fn facets_round_trip_through_strings() {
        for filter in TypeFilter::ALL {
            assert_eq!(filter.as_str().parse::<TypeFilter>().unwrap(), filter);
        }
        assert_eq!("wrong".parse::<PracticeMode>().unwrap(), PracticeMode::Wrong);
        assert!("review".parse::<PracticeMode>().is_err());
    }
}
