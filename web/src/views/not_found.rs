use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = requested_path(&segments);
    use_hook(|| tracing::warn!(%path, "no route matches path"));

    rsx! {
        div { class: "page-center",
            div { class: "not-found",
                h1 { class: "not-found-code", "404" }
                p { class: "text-muted", "Oops! Page not found" }
                Link { to: Route::Home {}, class: "link", "Return to Home" }
            }
        }
    }
}

fn requested_path(segments: &[String]) -> String {
    format!("/{}", segments.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rebuilds_requested_path() {
        assert_eq!(requested_path(&[]), "/");
        assert_eq!(
            requested_path(&["routines".to_string(), "night".to_string()]),
            "/routines/night"
        );
    }
}
