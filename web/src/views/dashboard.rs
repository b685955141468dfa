use dioxus::prelude::*;
use types::{
    UserProfile,
    greeting::Greeting,
    routine::{PROGRESS, ProgressKind, TimeOfDay, assistant_intro, routine, tutorials},
};
use ui::{Button, ButtonVariant, Card, CardHeader, StepList, TabList, TabTrigger};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DashboardTab {
    Routine,
    Chat,
    Tutorials,
}

#[component]
pub fn Dashboard(user: UserProfile, on_logout: EventHandler<()>) -> Element {
    let mut tab = use_signal(|| DashboardTab::Routine);
    let greeting = Greeting::now();

    use_effect(move || tracing::debug!(tab = ?tab(), "dashboard tab selected"));

    rsx! {
        div { class: "page",
            header { class: "dashboard-header",
                div { class: "container header-row",
                    div { class: "header-user",
                        div { class: "brand-badge brand-badge-sm", "✨" }
                        div {
                            h1 { class: "header-greeting", "{greeting}, {user.name}!" }
                            p { class: "text-muted text-sm", "{user.summary()}" }
                        }
                    }
                    // The profile button doubles as sign out.
                    Button {
                        variant: ButtonVariant::Ghost,
                        title: "Sign out".to_string(),
                        onclick: move |_| on_logout.call(()),
                        span { class: "icon", "👤" }
                        "Profile"
                    }
                }
            }

            section { class: "hero",
                img {
                    class: "hero-image",
                    src: asset!("/assets/hero-skincare.svg"),
                    alt: "Skincare products",
                }
                div { class: "container hero-text",
                    h2 { "Your Personalized Skincare Journey" }
                    p { class: "text-muted", "AI-powered routines, voice guidance, and expert tutorials" }
                }
            }

            main { class: "container",
                TabList { class: "tabs-3",
                    TabTrigger {
                        active: tab() == DashboardTab::Routine,
                        tone: "tone-primary",
                        onclick: move |_| tab.set(DashboardTab::Routine),
                        span { class: "icon", "☀" }
                        span { class: "tab-label", "Daily Routine" }
                    }
                    TabTrigger {
                        active: tab() == DashboardTab::Chat,
                        tone: "tone-secondary",
                        onclick: move |_| tab.set(DashboardTab::Chat),
                        span { class: "icon", "💬" }
                        span { class: "tab-label", "AI Q&A Chat" }
                    }
                    TabTrigger {
                        active: tab() == DashboardTab::Tutorials,
                        tone: "tone-accent",
                        onclick: move |_| tab.set(DashboardTab::Tutorials),
                        span { class: "icon", "▶" }
                        span { class: "tab-label", "Tutorials" }
                    }
                }

                {match tab() {
                    DashboardTab::Routine => rsx! { RoutinePanel {} },
                    DashboardTab::Chat => rsx! { ChatPanel { user: user.clone() } },
                    DashboardTab::Tutorials => rsx! { TutorialsPanel { user: user.clone() } },
                }}
            }
        }
    }
}

#[component]
fn RoutinePanel() -> Element {
    rsx! {
        div { class: "panel",
            div { class: "grid-2",
                RoutineCard { time: TimeOfDay::Morning }
                RoutineCard { time: TimeOfDay::Night }
            }
            Card {
                CardHeader {
                    title: "Daily Progress Tracker",
                    description: "Track your skincare consistency",
                }
                div { class: "card-body grid-3",
                    for tile in PROGRESS {
                        div { key: "{tile.label}", class: "progress-tile",
                            span { class: "icon icon-lg", "{progress_icon(tile.kind)}" }
                            p { class: "text-muted text-sm", "{tile.label}" }
                            p { class: "progress-value", "{tile.value}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn RoutineCard(time: TimeOfDay) -> Element {
    let (icon, tone, variant) = match time {
        TimeOfDay::Morning => ("☀", "tone-primary", ButtonVariant::Hero),
        TimeOfDay::Night => ("☾", "tone-secondary", ButtonVariant::Secondary),
    };
    let steps: Vec<String> = routine(time).iter().map(|step| step.to_string()).collect();

    rsx! {
        Card {
            CardHeader {
                title: time.title(),
                description: time.tagline(),
                icon,
                tone,
            }
            div { class: "card-body",
                StepList { steps, tone }
                Button { variant, wide: true,
                    span { class: "icon", "🔔" }
                    "Read Aloud"
                }
            }
        }
    }
}

#[component]
fn ChatPanel(user: UserProfile) -> Element {
    rsx! {
        Card {
            CardHeader {
                title: "AI Skincare Assistant",
                description: "Ask me anything about skincare!",
                icon: "💬",
            }
            div { class: "card-body",
                div { class: "chat-window",
                    div { class: "chat-message",
                        div { class: "brand-badge brand-badge-sm badge-secondary", "✨" }
                        div { class: "chat-bubble",
                            p { class: "text-sm", "{assistant_intro(user.skin_type)}" }
                        }
                    }
                }
                div { class: "chat-actions",
                    Button { variant: ButtonVariant::Outline,
                        span { class: "icon", "💬" }
                        "Type Message"
                    }
                    Button { variant: ButtonVariant::Secondary,
                        span { class: "icon", "🔔" }
                        "Voice Chat"
                    }
                }
            }
        }
    }
}

#[component]
fn TutorialsPanel(user: UserProfile) -> Element {
    rsx! {
        div { class: "grid-2",
            for tutorial in tutorials(user.skin_type) {
                Card { key: "{tutorial.title}",
                    CardHeader {
                        title: tutorial.title,
                        description: tutorial.description,
                        icon: "▶",
                        tone: "tone-accent",
                    }
                    div { class: "card-body",
                        div { class: "video-placeholder", span { class: "icon icon-xl", "▶" } }
                        Button { variant: ButtonVariant::Accent, wide: true, "Watch Tutorial" }
                    }
                }
            }
        }
    }
}

fn progress_icon(kind: ProgressKind) -> &'static str {
    match kind {
        ProgressKind::Water => "💧",
        ProgressKind::Sleep => "🌙",
        ProgressKind::Sun => "☀",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_progress_tile_has_an_icon() {
        let icons: Vec<_> = PROGRESS.iter().map(|tile| progress_icon(tile.kind)).collect();
        assert_eq!(icons, ["💧", "🌙", "☀"]);
    }
}
