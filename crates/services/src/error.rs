//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted when submitting an answer.
///
/// Both are user-correctable: the presentation layer prompts and lets the
/// learner retry. An empty filtered subset is a state, not an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SubmitError {
    #[error("select an answer before submitting")]
    EmptySelection,
    #[error("no question is selected under the current filters")]
    NoCurrentQuestion,
}
