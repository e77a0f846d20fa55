use dioxus::prelude::*;

/// Page heading with an optional subtitle. Children render as actions.
#[component]
pub fn PageHeader(
    title: String,
    #[props(default)] subtitle: Option<String>,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "page-header",
            div {
                h1 { class: "page-title", "{title}" }
                if let Some(text) = subtitle {
                    p { class: "page-subtitle", "{text}" }
                }
            }
            div { class: "page-actions", {children} }
        }
    }
}
