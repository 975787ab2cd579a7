mod answer;
mod bank;
mod filter;
mod ids;
mod question;
mod selection;
mod settings;

pub use answer::AnswerRecord;
pub use bank::QuestionBank;
pub use filter::{PracticeMode, TypeFilter};
pub use ids::QuestionId;
pub use question::{OptionLetter, Question, QuestionError, QuestionKind};
pub use selection::Selection;
pub use settings::{QuizSettings, SettingsError};
