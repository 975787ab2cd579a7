use dioxus::prelude::*;
use log::debug;

use quiz_core::model::{PracticeMode, TypeFilter};
use services::QuizSession;

use crate::context::AppContext;
use crate::vm::{FeedbackVm, OptionVm, QuizVm, practice_mode_label, type_filter_label};

const PRACTICE_MODES: [PracticeMode; 2] = [PracticeMode::All, PracticeMode::Wrong];

fn option_class(checked: bool) -> &'static str {
    if checked { "option option--checked" } else { "option" }
}

fn input_type(multi: bool) -> &'static str {
    if multi { "checkbox" } else { "radio" }
}

#[component]
pub fn PracticeView() -> Element {
    let ctx = use_context::<AppContext>();
    let delay = ctx.settings().auto_advance_delay();
    let bank = ctx.question_bank();
    let mut vm = use_signal(move || QuizVm::new(QuizSession::new(bank)));

    let screen = vm.read().screen();

    let on_submit = move |_| {
        let ticket = vm.write().submit();
        if let Some(ticket) = ticket {
            debug!("auto-advance in {delay:?}");
            spawn(async move {
                tokio::time::sleep(delay).await;
                vm.write().fire_auto_advance(ticket);
            });
        }
    };

    let feedback = screen.feedback.clone();
    let question = screen.question.clone();

    rsx! {
        div { class: "page practice-page",
            header { class: "practice-header",
                h1 { class: "practice-title", "{screen.title}" }
                div { class: "practice-stats",
                    span { class: "stat", "Total: {screen.total_label}" }
                    span { class: "stat", "Answered: {screen.answered_label}" }
                    span { class: "stat", "Accuracy: {screen.accuracy_label}" }
                    span { class: "stat stat--mode", "Mode: {screen.mode_label}" }
                }
            }

            section { class: "practice-filters",
                label { class: "filter",
                    "Practice mode "
                    select {
                        id: "practice-mode",
                        onchange: move |evt: FormEvent| {
                            if let Ok(mode) = evt.value().parse::<PracticeMode>() {
                                vm.write().set_practice_mode(mode);
                            }
                        },
                        for mode in PRACTICE_MODES {
                            option {
                                value: mode.as_str(),
                                selected: mode == screen.practice_mode,
                                "{practice_mode_label(mode)}"
                            }
                        }
                    }
                }
                label { class: "filter",
                    "Question type "
                    select {
                        id: "type-filter",
                        onchange: move |evt: FormEvent| {
                            if let Ok(filter) = evt.value().parse::<TypeFilter>() {
                                vm.write().set_type_filter(filter);
                            }
                        },
                        for filter in TypeFilter::ALL {
                            option {
                                value: filter.as_str(),
                                selected: filter == screen.type_filter,
                                "{type_filter_label(filter)}"
                            }
                        }
                    }
                }
                p { class: "filter-info", "{screen.filter_info}" }
            }

            if let Some(notice) = screen.notice.clone() {
                p { class: "notice", role: "status", "{notice}" }
            }

            main { class: "practice-body",
                if let Some(question) = question {
                    article { class: "question-card",
                        div { class: "question-meta",
                            span { class: "question-progress", "{question.progress_label}" }
                            span { class: "question-kind {question.kind_class}", "{question.kind_label}" }
                            if question.in_review {
                                span { class: "question-review-tag", "Review" }
                            }
                        }
                        p { class: "question-stem", "{question.stem}" }
                        ul { class: "question-options",
                            for OptionVm { letter, label, checked } in question.options.iter().cloned() {
                                li { key: "{letter}",
                                    label { class: option_class(checked),
                                        input {
                                            r#type: input_type(question.multi),
                                            name: "answer",
                                            value: "{letter}",
                                            checked: checked,
                                            disabled: !question.can_submit,
                                            onchange: move |_| vm.write().choose(letter),
                                        }
                                        span { "{label}" }
                                    }
                                }
                            }
                        }
                        if question.can_submit {
                            button {
                                class: "btn btn-primary",
                                id: "submit-answer",
                                r#type: "button",
                                onclick: on_submit,
                                "{question.submit_label}"
                            }
                        }
                    }
                } else if let Some(hint) = screen.empty_hint {
                    p { class: "empty-state", "{hint}" }
                } else {
                    p { class: "empty-state", "No questions available." }
                }

                if let Some(feedback) = feedback {
                    FeedbackPanel {
                        feedback,
                        on_toggle: move |_| vm.write().toggle_explanation(),
                    }
                }
            }

            nav { class: "practice-nav",
                button {
                    class: "btn btn-secondary",
                    id: "nav-previous",
                    r#type: "button",
                    onclick: move |_| vm.write().previous(),
                    "Previous"
                }
                button {
                    class: "btn btn-secondary",
                    id: "nav-random",
                    r#type: "button",
                    onclick: move |_| vm.write().random(),
                    "Random"
                }
                button {
                    class: "btn btn-secondary",
                    id: "nav-next",
                    r#type: "button",
                    onclick: move |_| vm.write().next(),
                    "Next"
                }
                button {
                    class: "btn btn-danger",
                    id: "reset-progress",
                    r#type: "button",
                    onclick: move |_| vm.write().request_reset(),
                    "Reset progress"
                }
            }

            if screen.confirm_reset {
                div { class: "confirm-overlay",
                    div {
                        class: "confirm-dialog",
                        role: "dialog",
                        aria_modal: "true",
                        p { "Reset all answers and the wrong-answer list?" }
                        button {
                            class: "btn btn-danger",
                            id: "reset-confirm",
                            r#type: "button",
                            onclick: move |_| vm.write().confirm_reset(),
                            "Reset"
                        }
                        button {
                            class: "btn btn-secondary",
                            id: "reset-cancel",
                            r#type: "button",
                            onclick: move |_| vm.write().cancel_reset(),
                            "Cancel"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn FeedbackPanel(feedback: FeedbackVm, on_toggle: EventHandler<()>) -> Element {
    let class = if feedback.correct {
        "feedback feedback--correct"
    } else {
        "feedback feedback--incorrect"
    };
    let toggle_label = if feedback.show_explanation {
        "Hide explanation"
    } else {
        "Show explanation"
    };

    rsx! {
        div { class: "{class}", role: "status",
            p { class: "feedback-headline", "{feedback.headline}" }
            p { "{feedback.correct_answer}" }
            p { "{feedback.your_answer}" }
            button {
                class: "btn btn-link",
                id: "toggle-explanation",
                r#type: "button",
                onclick: move |_| on_toggle.call(()),
                "{toggle_label}"
            }
            if feedback.show_explanation {
                if let Some(explanation) = feedback.explanation.clone() {
                    p { class: "feedback-explanation", "{explanation}" }
                }
            }
            if feedback.manual_hint {
                p { class: "feedback-hint", "Use Next or Random to continue." }
            }
        }
    }
}
