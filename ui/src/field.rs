use dioxus::prelude::*;

/// A labelled, required input bound to a signal.
#[component]
pub fn Field(
    id: String,
    label: String,
    mut value: Signal<String>,
    #[props(default = "text".to_string())] kind: String,
    #[props(into, default)] placeholder: String,
) -> Element {
    rsx! {
        div { class: "form-group",
            label { class: "form-label", r#for: "{id}", "{label}" }
            input {
                id,
                class: "form-input",
                r#type: kind,
                placeholder,
                required: true,
                value: "{value}",
                oninput: move |e| value.set(e.value()),
            }
        }
    }
}

/// A labelled select. `options` are `(value, label)` pairs.
#[component]
pub fn SelectField(
    id: String,
    label: String,
    options: Vec<(String, String)>,
    selected: String,
    on_change: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "form-group",
            label { class: "form-label", r#for: "{id}", "{label}" }
            select {
                id,
                class: "form-input",
                value: "{selected}",
                onchange: move |e| on_change.call(e.value()),
                for (value, text) in options {
                    option {
                        key: "{value}",
                        selected: value == selected,
                        value: "{value}",
                        "{text}"
                    }
                }
            }
        }
    }
}
