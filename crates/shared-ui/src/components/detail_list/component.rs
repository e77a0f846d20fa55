use dioxus::prelude::*;

/// Label/value rows for a record's details.
#[component]
pub fn DetailList(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        dl { class: "detail-list", {children} }
    }
}

/// One row inside a [`DetailList`]. Callers skip the row entirely when a
/// value is absent rather than rendering a placeholder.
#[component]
pub fn DetailItem(label: String, value: String) -> Element {
    rsx! {
        div { class: "detail-item",
            dt { class: "detail-item-label", "{label}" }
            dd { class: "detail-item-value", "{value}" }
        }
    }
}
