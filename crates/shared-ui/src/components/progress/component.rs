use dioxus::prelude::*;

/// Horizontal completion bar. `value` is a percentage and is clamped to 0..=100.
#[component]
pub fn ProgressBar(value: u32, #[props(default)] label: Option<String>) -> Element {
    let width = value.min(100);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "progress",
            if let Some(text) = label {
                div { class: "progress-label",
                    span { "{text}" }
                    span { "{width}%" }
                }
            }
            div {
                class: "progress-track",
                role: "progressbar",
                "aria-valuemin": "0",
                "aria-valuemax": "100",
                "aria-valuenow": "{width}",
                div { class: "progress-fill", style: "width: {width}%" }
            }
        }
    }
}
