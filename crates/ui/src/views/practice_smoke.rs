use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::model::{QuestionBank, QuizSettings};
use storage::sample_bank;

use crate::context::{UiApp, build_app_context};
use crate::views::PracticeView;

struct TestApp {
    bank: QuestionBank,
}

impl UiApp for TestApp {
    fn question_bank(&self) -> QuestionBank {
        self.bank.clone()
    }

    fn settings(&self) -> QuizSettings {
        QuizSettings::default()
    }

    fn bank_label(&self) -> String {
        "test bank".to_string()
    }
}

#[component]
fn Harness(bank: QuestionBank) -> Element {
    let app: Arc<dyn UiApp> = Arc::new(TestApp { bank });
    use_context_provider(|| build_app_context(&app));
    rsx! { PracticeView {} }
}

fn render(bank: QuestionBank) -> String {
    let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { bank });
    dom.rebuild_in_place();
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dioxus_ssr::render(&dom)
}

#[tokio::test(flavor = "current_thread")]
async fn practice_view_smoke_renders_first_question() {
    let html = render(sample_bank().unwrap());
    assert!(html.contains("Quiz practice (5 questions)"), "missing title in {html}");
    assert!(html.contains("Question 1/5 (ID: 1)"), "missing progress in {html}");
    assert!(html.contains("A. def"), "missing option in {html}");
    assert!(html.contains("Accuracy: 0.0%"), "missing accuracy in {html}");
    assert!(
        html.contains("Current: All questions + All types (5 questions)"),
        "missing filter info in {html}"
    );
    assert!(html.contains("Submit"), "missing submit in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn practice_view_smoke_renders_empty_bank() {
    let html = render(QuestionBank::empty());
    assert!(html.contains("No questions available."), "missing empty state in {html}");
    assert!(html.contains("Quiz practice (0 questions)"), "missing title in {html}");
}
