use quiz_core::model::{Question, QuestionBank, QuestionId, QuestionKind};

use crate::repository::StorageError;

struct SampleQuestion {
    id: u64,
    stem: &'static str,
    kind: QuestionKind,
    options: &'static [&'static str],
    answer: &'static str,
    explanation: &'static str,
}

const SAMPLE: &[SampleQuestion] = &[
    SampleQuestion {
        id: 1,
        stem: "Which Python keyword defines a function?",
        kind: QuestionKind::Single,
        options: &["def", "function", "define", "func"],
        answer: "A",
        explanation: "Functions are introduced with the def keyword.",
    },
    SampleQuestion {
        id: 2,
        stem: "Which of these are built-in Python data types?",
        kind: QuestionKind::Multiple,
        options: &["int", "str", "list", "class"],
        answer: "ABC",
        explanation: "int, str and list are built-in types; class is a keyword.",
    },
    SampleQuestion {
        id: 3,
        stem: "Python is a compiled language.",
        kind: QuestionKind::Judge,
        options: &["True", "False"],
        answer: "B",
        explanation: "Python is an interpreted language.",
    },
    SampleQuestion {
        id: 4,
        stem: "Which of these is not a built-in Python data type?",
        kind: QuestionKind::Single,
        options: &["list", "tuple", "dict", "array"],
        answer: "D",
        explanation: "array lives in the array module and must be imported.",
    },
    SampleQuestion {
        id: 5,
        stem: "Python supports multiple inheritance.",
        kind: QuestionKind::Judge,
        options: &["True", "False"],
        answer: "A",
        explanation: "A class may inherit from several base classes.",
    },
];

/// Built-in bank used when the configured bank cannot be read.
///
/// # Errors
///
/// Returns `StorageError::InvalidQuestion` or `InvalidBank` if a built-in
/// record breaks a bank invariant; no record is ever dropped.
pub fn sample_bank() -> Result<QuestionBank, StorageError> {
    build_bank(SAMPLE)
}

fn build_bank(records: &[SampleQuestion]) -> Result<QuestionBank, StorageError> {
    let questions = records
        .iter()
        .map(|s| {
            Question::new(
                QuestionId::from(s.id),
                s.stem,
                s.kind,
                s.options.iter().map(|o| (*o).to_string()).collect(),
                s.answer,
                Some(s.explanation.to_string()),
            )
            .map_err(|source| StorageError::InvalidQuestion {
                id: s.id.to_string(),
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    QuestionBank::new(questions).map_err(StorageError::InvalidBank)
}
