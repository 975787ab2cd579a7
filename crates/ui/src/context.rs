use std::sync::Arc;

use quiz_core::model::{QuestionBank, QuizSettings};

/// What the composition root hands to the UI.
pub trait UiApp: Send + Sync {
    fn question_bank(&self) -> QuestionBank;
    fn settings(&self) -> QuizSettings;
    /// Where the bank came from, for the window title and logs.
    fn bank_label(&self) -> String;
}

#[derive(Clone, Debug)]
pub struct AppContext {
    bank: QuestionBank,
    settings: QuizSettings,
    bank_label: Arc<str>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            bank: app.question_bank(),
            settings: app.settings(),
            bank_label: Arc::from(app.bank_label()),
        }
    }

    /// Shared handle to the loaded bank; cloning is cheap.
    #[must_use]
    pub fn question_bank(&self) -> QuestionBank {
        self.bank.clone()
    }

    #[must_use]
    pub fn settings(&self) -> QuizSettings {
        self.settings
    }

    #[must_use]
    pub fn bank_label(&self) -> &str {
        &self.bank_label
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
