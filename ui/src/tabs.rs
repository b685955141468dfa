use dioxus::prelude::*;

#[component]
pub fn TabList(#[props(into, default)] class: String, children: Element) -> Element {
    rsx! {
        div { class: "tab-list {class}", role: "tablist", {children} }
    }
}

#[component]
pub fn TabTrigger(
    active: bool,
    onclick: EventHandler<MouseEvent>,
    #[props(into, default)] tone: String,
    children: Element,
) -> Element {
    let class = if active {
        format!("tab-trigger active {tone}")
    } else {
        "tab-trigger".to_string()
    };

    rsx! {
        button {
            r#type: "button",
            role: "tab",
            class,
            "aria-selected": "{active}",
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}
