use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::PracticeView;

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    let title = format!("Quiz practice - {}", ctx.bank_label());

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "{title}" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                PracticeView {}
            }
        }
    }
}
