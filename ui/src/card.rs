use dioxus::prelude::*;

#[component]
pub fn Card(#[props(into, default)] class: String, children: Element) -> Element {
    rsx! {
        div { class: "card {class}", {children} }
    }
}

/// Card title row with an optional leading icon and a muted description.
#[component]
pub fn CardHeader(
    #[props(into)] title: String,
    #[props(into, default)] description: String,
    #[props(into, default)] icon: String,
    #[props(into, default)] tone: String,
) -> Element {
    rsx! {
        div { class: "card-header",
            h3 { class: "card-title {tone}",
                if !icon.is_empty() {
                    span { class: "icon", "{icon}" }
                }
                span { "{title}" }
            }
            if !description.is_empty() {
                p { class: "card-description", "{description}" }
            }
        }
    }
}
