use dioxus::prelude::*;

/// Headline number on a dashboard, e.g. "Visits today: 6".
#[component]
pub fn StatCard(
    label: String,
    value: String,
    #[props(default)] detail: Option<String>,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "stat-card",
            div { class: "stat-card-top",
                span { class: "stat-card-label", "{label}" }
                span { class: "stat-card-icon", {children} }
            }
            span { class: "stat-card-value", "{value}" }
            if let Some(text) = detail {
                span { class: "stat-card-detail", "{text}" }
            }
        }
    }
}

/// Responsive grid of [`StatCard`]s.
#[component]
pub fn StatGrid(children: Element) -> Element {
    rsx! {
        div { class: "stat-grid", {children} }
    }
}
