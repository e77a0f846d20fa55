use dioxus::prelude::*;

/// Fixed tab bar along the bottom edge of narrow screens.
#[component]
pub fn BottomNav(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        nav { class: "bottom-nav", "aria-label": "Primary", {children} }
    }
}

#[component]
pub fn BottomNavItem(
    label: String,
    #[props(default = false)] active: bool,
    onselect: EventHandler<()>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: "bottom-nav-item",
            r#type: "button",
            "data-active": if active { "true" } else { "false" },
            "aria-current": if active { "page" } else { "false" },
            onclick: move |_| onselect.call(()),
            span { class: "bottom-nav-icon", {children} }
            span { class: "bottom-nav-label", "{label}" }
        }
    }
}
