use dioxus::prelude::*;

/// Circle showing a person's initials.
#[component]
pub fn Avatar(initials: String, #[props(default = false)] large: bool) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            class: "avatar",
            "data-size": if large { "lg" } else { "md" },
            "aria-hidden": "true",
            "{initials}"
        }
    }
}
