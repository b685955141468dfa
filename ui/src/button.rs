use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Hero,
    Secondary,
    Accent,
    Outline,
    Ghost,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Hero => "btn btn-hero",
            ButtonVariant::Secondary => "btn btn-secondary",
            ButtonVariant::Accent => "btn btn-accent",
            ButtonVariant::Outline => "btn btn-outline",
            ButtonVariant::Ghost => "btn btn-ghost btn-sm",
        }
    }
}

/// A styled button. Without `onclick` it is purely decorative.
#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] submit: bool,
    #[props(default)] wide: bool,
    title: Option<String>,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let class = if wide {
        format!("{} btn-wide", variant.class())
    } else {
        variant.class().to_string()
    };

    rsx! {
        button {
            r#type: if submit { "submit" } else { "button" },
            class,
            title,
            onclick: move |evt| {
                if let Some(handler) = onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}
