#![forbid(unsafe_code)]

pub mod error;
pub mod evaluator;
pub mod filter;
pub mod ledger;
pub mod session;
pub mod stats;

pub use error::SubmitError;
pub use evaluator::{SubmissionOutcome, WrongSetChange, evaluate};
pub use filter::{EmptyReason, FilterEngine, FilterState, FilterSummary, compute_filtered_questions};
pub use ledger::{AnswerLedger, WrongSet};
pub use session::{Presentation, QuizSession};
pub use stats::QuizStats;
