use dioxus::prelude::*;

mod views;

use types::{Error, Session, UserProfile, config::CONFIG};
use views::{AuthForm, Dashboard, PageNotFound};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| ErrorState(Signal::new(None)));

    rsx! {
        document::Title { "{CONFIG.title}" }
        document::Link { rel: "icon", href: asset!("/assets/favicon.svg") }
        document::Link { rel: "stylesheet", href: asset!("/assets/main.css") }

        ErrorBanner {}
        Router::<Route> {}
    }
}

/// Switches between the auth form and the dashboard on the current session.
#[component]
fn Home() -> Element {
    let mut session = use_signal(Session::default);
    let mut error_state = use_error();
    let user = session.read().user().cloned();

    match user {
        None => rsx! {
            AuthForm {
                on_authenticate: move |profile: UserProfile| {
                    tracing::info!(
                        skin_type = %profile.skin_type,
                        age_group = %profile.age_group,
                        "signed in"
                    );
                    error_state.clear();
                    session.write().sign_in(profile);
                },
            }
        },
        Some(user) => rsx! {
            Dashboard {
                user,
                on_logout: move |_| {
                    if session.write().sign_out().is_some() {
                        tracing::info!("signed out");
                    }
                },
            }
        },
    }
}

/// Global error state - use `use_error()` to access
#[derive(Clone, Copy)]
pub struct ErrorState(Signal<Option<Error>>);

impl ErrorState {
    pub fn set(&mut self, error: impl Into<Error>) {
        self.0.set(Some(error.into()));
    }

    pub fn clear(&mut self) {
        self.0.set(None);
    }
}

/// Get the global error state for setting/clearing errors
pub fn use_error() -> ErrorState {
    use_context::<ErrorState>()
}

#[component]
fn ErrorBanner() -> Element {
    let mut error_state = use_context::<ErrorState>();
    let error = error_state.0.read();

    let Some(err) = error.as_ref() else {
        return rsx! {};
    };

    rsx! {
        div { class: "error-banner", role: "alert",
            div { class: "error-banner-header",
                span { class: "error-banner-message", "{err.message}" }
                button {
                    r#type: "button",
                    class: "error-banner-close",
                    onclick: move |_| error_state.clear(),
                    "×"
                }
            }
            if err.has_causes() {
                ol { class: "error-chain-list",
                    for (i, msg) in err.chain.iter().enumerate().skip(1) {
                        li { key: "{i}", class: "error-chain-item", "{msg}" }
                    }
                }
            }
        }
    }
}
