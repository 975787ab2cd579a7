#![forbid(unsafe_code)]

pub mod json;
pub mod loader;
pub mod repository;
pub mod sample;

pub use json::JsonFileBank;
pub use loader::{BankOrigin, LoadedBank, load_with_fallback};
pub use repository::{InMemoryBank, QuestionBankSource, StorageError};
pub use sample::sample_bank;
