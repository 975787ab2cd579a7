use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("auto advance seconds must be between 1 and 60")]
    InvalidAutoAdvanceSeconds,
}

/// Session-independent quiz preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizSettings {
    auto_advance_secs: u32,
}

impl Default for QuizSettings {
    /// Advance three seconds after a normal-mode answer.
    fn default() -> Self {
        Self {
            auto_advance_secs: 3,
        }
    }
}

impl QuizSettings {
    /// # Errors
    ///
    /// Returns `SettingsError::InvalidAutoAdvanceSeconds` outside `1..=60`.
    pub fn new(auto_advance_secs: u32) -> Result<Self, SettingsError> {
        if !(1..=60).contains(&auto_advance_secs) {
            return Err(SettingsError::InvalidAutoAdvanceSeconds);
        }
        Ok(Self { auto_advance_secs })
    }

    #[must_use]
    pub fn auto_advance_secs(&self) -> u32 {
        self.auto_advance_secs
    }

    #[must_use]
    pub fn auto_advance_delay(&self) -> Duration {
        Duration::from_secs(u64::from(self.auto_advance_secs))
    }
}
