use log::warn;
use quiz_core::model::QuestionBank;

use crate::repository::{QuestionBankSource, StorageError};
use crate::sample::sample_bank;

/// Where the bank handed to the engine came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BankOrigin {
    Primary(String),
    Fallback,
}

#[derive(Debug, Clone)]
pub struct LoadedBank {
    pub bank: QuestionBank,
    pub origin: BankOrigin,
}

/// Load from `source`, substituting the sample bank when it is unavailable.
///
/// A source that exists but holds malformed records is not papered over.
///
/// # Errors
///
/// Returns `StorageError` for parse or validation failures, including a
/// broken built-in sample bank.
pub fn load_with_fallback(source: &dyn QuestionBankSource) -> Result<LoadedBank, StorageError> {
    match source.load() {
        Ok(bank) => Ok(LoadedBank {
            bank,
            origin: BankOrigin::Primary(source.describe()),
        }),
        Err(err) if err.is_unavailable() => {
            warn!("{err}; using the built-in sample bank");
            Ok(LoadedBank {
                bank: sample_bank()?,
                origin: BankOrigin::Fallback,
            })
        }
        Err(err) => Err(err),
    }
}
