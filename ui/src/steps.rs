use dioxus::prelude::*;

/// Numbered list of routine steps, counting from 1.
#[component]
pub fn StepList(steps: Vec<String>, #[props(into, default)] tone: String) -> Element {
    rsx! {
        ol { class: "step-list",
            for (number, step) in steps.iter().enumerate().map(|(i, s)| (i + 1, s)) {
                li { key: "{number}", class: "step",
                    span { class: "step-number {tone}", "{number}" }
                    span { class: "step-text", "{step}" }
                }
            }
        }
    }
}
