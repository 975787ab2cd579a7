use quiz_core::model::{
    AnswerRecord, OptionLetter, PracticeMode, Question, QuestionKind, Selection, TypeFilter,
};
use services::{EmptyReason, FilterSummary, Presentation, QuizSession, SubmitError};

use super::auto_advance::{AdvanceTicket, AutoAdvance};

#[must_use]
pub fn practice_mode_label(mode: PracticeMode) -> &'static str {
    match mode {
        PracticeMode::All => "All questions",
        PracticeMode::Wrong => "Wrong-answer review",
    }
}

#[must_use]
pub fn type_filter_label(filter: TypeFilter) -> &'static str {
    match filter {
        TypeFilter::All => "All types",
        TypeFilter::Single => "Single choice",
        TypeFilter::Multiple => "Multiple choice",
        TypeFilter::Judge => "True/False",
    }
}

fn kind_class(kind: QuestionKind) -> &'static str {
    match kind {
        QuestionKind::Single => "kind-single",
        QuestionKind::Multiple => "kind-multiple",
        QuestionKind::Judge => "kind-judge",
    }
}

fn empty_hint(reason: EmptyReason) -> Option<&'static str> {
    match reason {
        EmptyReason::NoWrongQuestions => Some("No wrong answers yet. Keep going!"),
        EmptyReason::NoWrongQuestionsOfType => {
            Some("No wrong answers of this type. Try another type or all types.")
        }
        EmptyReason::NoQuestionsOfType => {
            Some("The bank has no questions of this type. Please check the question bank.")
        }
        EmptyReason::EmptyBank | EmptyReason::NoMatches => None,
    }
}

#[must_use]
pub fn filter_info(summary: &FilterSummary) -> String {
    format!(
        "Current: {} + {} ({} questions)",
        practice_mode_label(summary.practice_mode),
        type_filter_label(summary.type_filter),
        summary.filtered_count
    )
}

//
// ─── VIEW MODELS ───────────────────────────────────────────────────────────────
//

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub letter: OptionLetter,
    pub label: String,
    pub checked: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub progress_label: String,
    pub kind_label: &'static str,
    pub kind_class: &'static str,
    pub in_review: bool,
    pub stem: String,
    pub multi: bool,
    pub options: Vec<OptionVm>,
    pub can_submit: bool,
    pub submit_label: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub correct: bool,
    pub headline: String,
    pub correct_answer: String,
    pub your_answer: String,
    pub explanation: Option<String>,
    pub show_explanation: bool,
    pub manual_hint: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScreenVm {
    pub title: String,
    pub total_label: String,
    pub answered_label: String,
    pub accuracy_label: String,
    pub mode_label: String,
    pub filter_info: String,
    pub practice_mode: PracticeMode,
    pub type_filter: TypeFilter,
    pub question: Option<QuestionVm>,
    pub empty_hint: Option<&'static str>,
    pub feedback: Option<FeedbackVm>,
    pub notice: Option<String>,
    pub confirm_reset: bool,
}

/// Result of the latest review-mode submission.
///
/// Kept separately because a correct review answer removes the question from
/// the subset it was asked in.
#[derive(Clone, Debug, PartialEq, Eq)]
struct ReviewFeedback {
    answer: String,
    explanation: Option<String>,
    record: AnswerRecord,
}

//
// ─── QUIZ VM ───────────────────────────────────────────────────────────────────
//

/// Presentation state around a `QuizSession`: the selection being edited,
/// feedback, the reset confirmation, and the auto-advance token.
pub struct QuizVm {
    session: QuizSession,
    draft: Selection,
    review_feedback: Option<ReviewFeedback>,
    notice: Option<String>,
    show_explanation: bool,
    confirm_reset: bool,
    auto_advance: AutoAdvance,
}

impl QuizVm {
    #[must_use]
    pub fn new(session: QuizSession) -> Self {
        let mut vm = Self {
            session,
            draft: Selection::default(),
            review_feedback: None,
            notice: None,
            show_explanation: false,
            confirm_reset: false,
            auto_advance: AutoAdvance::default(),
        };
        vm.load_current();
        vm
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    #[must_use]
    pub fn auto_advance_pending(&self) -> bool {
        self.auto_advance.is_pending()
    }

    /// Reset per-question presentation state after the cursor moved.
    fn load_current(&mut self) {
        self.auto_advance.cancel();
        self.review_feedback = None;
        self.notice = None;
        self.show_explanation = false;
        self.draft = match self
            .session
            .current_question()
            .map(|q| self.session.presentation(q))
        {
            Some(Presentation::Unanswered {
                prefill: Some(prefill),
            }) => prefill,
            _ => Selection::default(),
        };
    }

    pub fn set_practice_mode(&mut self, mode: PracticeMode) {
        self.session.set_practice_mode(mode);
        self.load_current();
    }

    pub fn set_type_filter(&mut self, filter: TypeFilter) {
        self.session.set_type_filter(filter);
        self.load_current();
    }

    pub fn previous(&mut self) {
        if self.session.previous() {
            self.load_current();
        }
    }

    pub fn next(&mut self) {
        if self.session.next() {
            self.load_current();
        }
    }

    pub fn random(&mut self) {
        if self.session.random() {
            self.load_current();
        }
    }

    /// True when the current question is answered in normal mode and so
    /// accepts no further edits until reset.
    fn current_locked(&self) -> bool {
        self.session
            .current_question()
            .is_some_and(|q| !self.session.presentation(q).can_submit())
    }

    /// Pick an option: replaces a single choice, toggles a checkbox.
    pub fn choose(&mut self, letter: OptionLetter) {
        if self.current_locked() {
            return;
        }
        let Some(kind) = self.session.current_question().map(Question::kind) else {
            return;
        };
        if kind.is_single_answer() {
            self.draft = Selection::single(letter);
        } else {
            self.draft.toggle(letter);
        }
        self.notice = None;
    }

    /// Submit the draft for the current question.
    ///
    /// Returns a ticket when an auto-advance should be scheduled.
    pub fn submit(&mut self) -> Option<AdvanceTicket> {
        if self.current_locked() {
            return None;
        }
        let question = self.session.current_question().cloned()?;
        let mode = self.session.practice_mode();
        match self.session.submit(&self.draft) {
            Ok(outcome) => {
                self.notice = None;
                self.show_explanation = false;
                if mode.is_review() {
                    self.review_feedback = Some(ReviewFeedback {
                        answer: question.answer().to_owned(),
                        explanation: question.explanation().map(str::to_owned),
                        record: outcome.record,
                    });
                    self.draft = self
                        .session
                        .current_question()
                        .and_then(|q| match self.session.presentation(q) {
                            Presentation::Unanswered { prefill } => prefill,
                            Presentation::Answered { .. } => None,
                        })
                        .unwrap_or_default();
                }
                self.auto_advance.schedule(mode)
            }
            Err(SubmitError::EmptySelection) => {
                self.notice = Some("Please select an answer first.".to_string());
                None
            }
            Err(err) => {
                self.notice = Some(err.to_string());
                None
            }
        }
    }

    /// Timer callback; advances only if `ticket` is still live.
    pub fn fire_auto_advance(&mut self, ticket: AdvanceTicket) {
        if !self.auto_advance.fire(ticket) || self.session.practice_mode().is_review() {
            return;
        }
        self.next();
    }

    pub fn toggle_explanation(&mut self) {
        self.show_explanation = !self.show_explanation;
    }

    pub fn request_reset(&mut self) {
        self.confirm_reset = true;
    }

    pub fn cancel_reset(&mut self) {
        self.confirm_reset = false;
    }

    pub fn confirm_reset(&mut self) {
        self.confirm_reset = false;
        self.session.reset();
        self.load_current();
        self.notice = Some("Progress has been reset.".to_string());
    }

    #[must_use]
    pub fn screen(&self) -> ScreenVm {
        let stats = self.session.stats();
        let summary = self.session.filter_summary();
        let mode = self.session.practice_mode();
        let filtered_len = summary.filtered_count;

        let current = self.session.current_question();
        let presentation = current.map(|q| self.session.presentation(q));

        let question = current.zip(presentation.as_ref()).map(|(q, presentation)| {
            let checked = |letter: OptionLetter| match presentation {
                Presentation::Answered { .. } => false,
                Presentation::Unanswered { .. } => self.draft.contains(letter),
            };
            QuestionVm {
                progress_label: format!(
                    "Question {}/{} (ID: {})",
                    self.session.current_index() + 1,
                    filtered_len,
                    q.id()
                ),
                kind_label: type_filter_label(TypeFilter::from(q.kind())),
                kind_class: kind_class(q.kind()),
                in_review: mode.is_review(),
                stem: q.stem().to_owned(),
                multi: !q.kind().is_single_answer(),
                options: q
                    .lettered_options()
                    .map(|(letter, text)| OptionVm {
                        letter,
                        label: format!("{letter}. {text}"),
                        checked: checked(letter),
                    })
                    .collect(),
                can_submit: presentation.can_submit(),
                submit_label: if mode.is_review() { "Resubmit" } else { "Submit" },
            }
        });

        let feedback = match (current, presentation) {
            (Some(q), Some(Presentation::Answered { record })) => Some(self.feedback_vm(
                q.answer(),
                q.explanation(),
                &record,
                false,
            )),
            _ => self.review_feedback.as_ref().map(|fb| {
                self.feedback_vm(&fb.answer, fb.explanation.as_deref(), &fb.record, true)
            }),
        };

        ScreenVm {
            title: format!("Quiz practice ({} questions)", stats.total),
            total_label: stats.total.to_string(),
            answered_label: stats.answered.to_string(),
            accuracy_label: format!("{}%", stats.accuracy_label()),
            mode_label: format!(
                "{}+{}",
                practice_mode_label(summary.practice_mode),
                type_filter_label(summary.type_filter)
            ),
            filter_info: filter_info(&summary),
            practice_mode: summary.practice_mode,
            type_filter: summary.type_filter,
            question,
            empty_hint: summary.empty_reason().and_then(empty_hint),
            feedback,
            notice: self.notice.clone(),
            confirm_reset: self.confirm_reset,
        }
    }

    fn feedback_vm(
        &self,
        answer: &str,
        explanation: Option<&str>,
        record: &AnswerRecord,
        review: bool,
    ) -> FeedbackVm {
        let headline = match (review, record.is_correct()) {
            (false, true) => "Correct!".to_string(),
            (false, false) => "Incorrect.".to_string(),
            (true, true) => "Review: correct this time!".to_string(),
            (true, false) => "Review: still incorrect".to_string(),
        };
        FeedbackVm {
            correct: record.is_correct(),
            headline,
            correct_answer: format!("Correct answer: {answer}"),
            your_answer: format!("Your answer: {}", record.selected()),
            explanation: Some(explanation.unwrap_or("No explanation available.").to_string()),
            show_explanation: self.show_explanation,
            manual_hint: review,
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::QuestionId;
    use storage::sample_bank;

    fn letter(ch: char) -> OptionLetter {
        OptionLetter::from_char(ch).unwrap()
    }

    fn vm() -> QuizVm {
        QuizVm::new(QuizSession::new(sample_bank().unwrap()))
    }

    #[test]
    fn initial_screen_shows_first_question() {
        let screen = vm().screen();
        assert_eq!(screen.title, "Quiz practice (5 questions)");
        assert_eq!(screen.accuracy_label, "0.0%");
        assert_eq!(screen.filter_info, "Current: All questions + All types (5 questions)");
        let question = screen.question.unwrap();
        assert_eq!(question.progress_label, "Question 1/5 (ID: 1)");
        assert_eq!(question.options[0].label, "A. def");
        assert!(question.can_submit);
        assert!(screen.feedback.is_none());
    }

    #[test]
    fn submit_without_choice_shows_notice() {
        let mut vm = vm();
        assert!(vm.submit().is_none());
        assert_eq!(vm.screen().notice.as_deref(), Some("Please select an answer first."));
        assert_eq!(vm.session().stats().answered, 0);
    }

    #[test]
    fn normal_submit_locks_question_and_schedules_advance() {
        let mut vm = vm();
        vm.choose(letter('B'));
        let ticket = vm.submit().expect("ticket");

        let screen = vm.screen();
        assert!(!screen.question.unwrap().can_submit);
        let feedback = screen.feedback.unwrap();
        assert!(!feedback.correct);
        assert_eq!(feedback.your_answer, "Your answer: B");
        assert_eq!(screen.answered_label, "1");

        vm.fire_auto_advance(ticket);
        assert_eq!(vm.session().current_index(), 1);
    }

    #[test]
    fn answered_question_ignores_further_edits() {
        let mut vm = vm();
        vm.choose(letter('B'));
        vm.submit().expect("ticket");
        assert!(vm.auto_advance_pending());

        vm.choose(letter('A'));
        assert!(vm.submit().is_none());

        let session = vm.session();
        let record = session.record_for(&QuestionId::from(1)).unwrap();
        assert_eq!(record.selected(), "B");
        assert!(!record.is_correct());
        assert!(session.wrong_set().contains(&QuestionId::from(1)));
        assert_eq!(session.ledger().answered(), 1);
        assert!(vm.auto_advance_pending());
        assert!(!vm.screen().question.unwrap().options[0].checked);
    }

    #[test]
    fn navigation_cancels_pending_advance() {
        let mut vm = vm();
        vm.choose(letter('A'));
        let ticket = vm.submit().expect("ticket");
        vm.next();
        vm.previous();
        vm.fire_auto_advance(ticket);
        assert_eq!(vm.session().current_index(), 0);
    }

    #[test]
    fn review_mode_never_auto_advances() {
        let mut vm = vm();
        vm.choose(letter('B'));
        vm.submit();
        vm.next();
        vm.choose(letter('A'));
        vm.submit();
        vm.set_practice_mode(PracticeMode::Wrong);
        assert_eq!(vm.session().filtered_questions().len(), 2);

        let question = vm.screen().question.unwrap();
        assert!(question.in_review);
        assert_eq!(question.submit_label, "Resubmit");
        assert!(question.options[1].checked);

        vm.choose(letter('A'));
        assert!(vm.submit().is_none());
        assert!(!vm.auto_advance_pending());

        let screen = vm.screen();
        let feedback = screen.feedback.unwrap();
        assert_eq!(feedback.headline, "Review: correct this time!");
        assert!(feedback.manual_hint);
        assert_eq!(vm.session().filtered_questions().len(), 1);
    }

    #[test]
    fn multiple_choice_toggles() {
        let mut vm = vm();
        vm.next();
        vm.choose(letter('C'));
        vm.choose(letter('A'));
        vm.choose(letter('B'));
        vm.submit();
        let feedback = vm.screen().feedback.unwrap();
        assert!(feedback.correct);
        assert_eq!(feedback.your_answer, "Your answer: ABC");
    }

    #[test]
    fn reset_requires_confirmation() {
        let mut vm = vm();
        vm.choose(letter('B'));
        vm.submit();
        vm.request_reset();
        assert!(vm.screen().confirm_reset);
        vm.cancel_reset();
        assert_eq!(vm.session().stats().answered, 1);

        vm.request_reset();
        vm.confirm_reset();
        let screen = vm.screen();
        assert!(!screen.confirm_reset);
        assert_eq!(screen.answered_label, "0");
        assert!(vm.session().wrong_set().is_empty());
    }

    #[test]
    fn empty_review_explains_itself() {
        let mut vm = vm();
        vm.set_practice_mode(PracticeMode::Wrong);
        let screen = vm.screen();
        assert!(screen.question.is_none());
        assert_eq!(screen.empty_hint, Some("No wrong answers yet. Keep going!"));
    }
}
