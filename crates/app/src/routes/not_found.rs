use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));
    tracing::debug!(%path, "no route matched");

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found-page",
            div { class: "not-found-code", "404" }
            h1 { class: "not-found-title", "Page not found" }
            p { class: "not-found-message",
                "Nothing lives at "
                code { "{path}" }
                "."
            }
            Link { to: Route::Dashboard {}, class: "not-found-link", "Back to dashboard" }
        }
    }
}
