use dioxus::prelude::*;
use types::{
    AgeGroup, Result, SkinType, UserProfile,
    auth::{LoginForm, SignupForm},
    config::CONFIG,
};
use ui::{Button, Card, Field, SelectField, TabList, TabTrigger};

use crate::{ErrorState, use_error};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AuthTab {
    Login,
    Signup,
}

#[component]
pub fn AuthForm(on_authenticate: EventHandler<UserProfile>) -> Element {
    let mut tab = use_signal(|| AuthTab::Login);
    let mut error_state = use_error();

    let login_email = use_signal(String::new);
    let login_password = use_signal(String::new);

    let signup_name = use_signal(String::new);
    let signup_email = use_signal(String::new);
    let signup_password = use_signal(String::new);
    let mut skin_type = use_signal(SkinType::default);
    let mut age_group = use_signal(AgeGroup::default);

    use_effect(move || tracing::debug!(tab = ?tab(), "auth tab selected"));

    rsx! {
        div { class: "page-center",
            Card { class: "auth-card",
                div { class: "auth-header",
                    div { class: "brand-badge", "✨" }
                    h1 { class: "brand-title", "{CONFIG.title}" }
                    p { class: "text-muted", "{CONFIG.tagline}" }
                }
                TabList { class: "tabs-2",
                    TabTrigger {
                        active: tab() == AuthTab::Login,
                        onclick: move |_| tab.set(AuthTab::Login),
                        "Login"
                    }
                    TabTrigger {
                        active: tab() == AuthTab::Signup,
                        onclick: move |_| tab.set(AuthTab::Signup),
                        "Sign Up"
                    }
                }
                {match tab() {
                    AuthTab::Login => rsx! {
                        form {
                            class: "form-stack",
                            onsubmit: move |evt: FormEvent| {
                                evt.prevent_default();
                                let form = LoginForm {
                                    email: login_email(),
                                    password: login_password().into(),
                                };
                                finish(form.authenticate(), on_authenticate, error_state);
                            },
                            Field {
                                id: "login-email",
                                label: "Email",
                                kind: "email",
                                placeholder: "your@email.com",
                                value: login_email,
                            }
                            Field {
                                id: "login-password",
                                label: "Password",
                                kind: "password",
                                placeholder: "••••••••",
                                value: login_password,
                            }
                            Button { submit: true, wide: true,
                                span { class: "icon", "♥" }
                                "Welcome Back"
                            }
                        }
                    },
                    AuthTab::Signup => rsx! {
                        form {
                            class: "form-stack",
                            onsubmit: move |evt: FormEvent| {
                                evt.prevent_default();
                                let form = SignupForm {
                                    name: signup_name(),
                                    email: signup_email(),
                                    password: signup_password().into(),
                                    skin_type: skin_type(),
                                    age_group: age_group(),
                                };
                                finish(form.authenticate(), on_authenticate, error_state);
                            },
                            Field {
                                id: "signup-name",
                                label: "Full Name",
                                placeholder: "Your name",
                                value: signup_name,
                            }
                            Field {
                                id: "signup-email",
                                label: "Email",
                                kind: "email",
                                placeholder: "your@email.com",
                                value: signup_email,
                            }
                            Field {
                                id: "signup-password",
                                label: "Password",
                                kind: "password",
                                placeholder: "••••••••",
                                value: signup_password,
                            }
                            div { class: "grid-2",
                                SelectField {
                                    id: "skin-type",
                                    label: "Skin Type",
                                    options: skin_type_options(),
                                    selected: skin_type().as_str().to_string(),
                                    on_change: move |value: String| {
                                        match value.parse::<SkinType>() {
                                            Ok(skin) => skin_type.set(skin),
                                            Err(e) => error_state.set(e),
                                        }
                                    },
                                }
                                SelectField {
                                    id: "age-group",
                                    label: "Age Group",
                                    options: age_group_options(),
                                    selected: age_group().as_str().to_string(),
                                    on_change: move |value: String| {
                                        match value.parse::<AgeGroup>() {
                                            Ok(age) => age_group.set(age),
                                            Err(e) => error_state.set(e),
                                        }
                                    },
                                }
                            }
                            Button { submit: true, wide: true,
                                span { class: "icon", "👥" }
                                "Start Your Journey"
                            }
                        }
                    },
                }}
            }
        }
    }
}

fn finish(
    result: Result<UserProfile>,
    on_authenticate: EventHandler<UserProfile>,
    mut error_state: ErrorState,
) {
    match result {
        Ok(profile) => on_authenticate.call(profile),
        Err(e) => {
            tracing::warn!(error = %e, "form rejected");
            error_state.set(e);
        }
    }
}

fn skin_type_options() -> Vec<(String, String)> {
    SkinType::ALL
        .into_iter()
        .map(|skin| (skin.as_str().to_string(), skin.label().to_string()))
        .collect()
}

fn age_group_options() -> Vec<(String, String)> {
    AgeGroup::ALL
        .into_iter()
        .map(|age| (age.as_str().to_string(), age.as_str().to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skin_type_options_round_trip_through_select() {
        let options = skin_type_options();
        assert_eq!(
            options,
            vec![
                ("oily".to_string(), "Oily".to_string()),
                ("dry".to_string(), "Dry".to_string()),
                ("combination".to_string(), "Combination".to_string()),
            ]
        );
        for (value, _) in options {
            assert!(value.parse::<SkinType>().is_ok());
        }
    }

    #[test]
    fn age_group_options_list_every_group() {
        let values: Vec<String> = age_group_options().into_iter().map(|(v, _)| v).collect();
        assert_eq!(values, ["16-24", "25-35", "36-45", "46+"]);
    }
}
