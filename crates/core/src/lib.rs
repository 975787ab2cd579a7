#![forbid(unsafe_code)]

pub mod model;

pub use model::{
    AnswerRecord, OptionLetter, PracticeMode, Question, QuestionBank, QuestionError, QuestionId,
    QuestionKind, QuizSettings, Selection, SettingsError, TypeFilter,
};
