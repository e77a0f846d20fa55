use dioxus::prelude::*;

/// Sidebar visibility. Wide screens show the sidebar in the page flow and
/// the trigger collapses it; narrow screens hide it off canvas and the
/// trigger opens it as an overlay. Both flags flip together so one trigger
/// serves either layout, and the stylesheet reads whichever applies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SidebarState {
    pub collapsed: bool,
    pub overlay_open: bool,
}

impl SidebarState {
    /// The overlay always starts closed.
    pub fn new(default_open: bool) -> Self {
        Self {
            collapsed: !default_open,
            overlay_open: false,
        }
    }

    pub fn toggled(self) -> Self {
        Self {
            collapsed: !self.collapsed,
            overlay_open: !self.overlay_open,
        }
    }

    /// After following a menu link: the overlay closes, the docked
    /// sidebar stays as it was.
    pub fn navigated(self) -> Self {
        Self {
            overlay_open: false,
            ..self
        }
    }
}

pub(crate) fn classed(class: &'static str, attributes: Vec<Attribute>) -> Vec<Attribute> {
    let base = vec![Attribute::new("class", class, None, false)];
    dioxus_primitives::merge_attributes(vec![base, attributes])
}

fn menu_link_class(active: bool) -> &'static str {
    if active {
        "sidebar-menu-button sidebar-menu-button-active"
    } else {
        "sidebar-menu-button"
    }
}

#[component]
pub fn SidebarProvider(#[props(default = true)] default_open: bool, children: Element) -> Element {
    let state = use_signal(|| SidebarState::new(default_open));
    use_context_provider(|| state);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "sidebar-provider", {children} }
    }
}

pub fn use_sidebar() -> Signal<SidebarState> {
    use_context::<Signal<SidebarState>>()
}

#[component]
pub fn Sidebar(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut state = use_sidebar();
    let current = state();
    let mut merged = classed("sidebar", attributes);
    merged.push(Attribute::new(
        "data-state",
        if current.collapsed { "collapsed" } else { "expanded" },
        None,
        false,
    ));
    merged.push(Attribute::new(
        "data-overlay",
        if current.overlay_open { "open" } else { "closed" },
        None,
        false,
    ));

    rsx! {
        if current.overlay_open {
            div {
                class: "sidebar-backdrop",
                onclick: move |_| state.set(state().navigated()),
            }
        }
        aside {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn SidebarHeader(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = classed("sidebar-header", attributes);
    rsx! {
        div { ..merged, {children} }
    }
}

#[component]
pub fn SidebarContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = classed("sidebar-content", attributes);
    rsx! {
        nav { ..merged, {children} }
    }
}

#[component]
pub fn SidebarFooter(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = classed("sidebar-footer", attributes);
    rsx! {
        div { ..merged, {children} }
    }
}

#[component]
pub fn SidebarGroup(label: Option<String>, children: Element) -> Element {
    rsx! {
        div { class: "sidebar-group",
            if let Some(text) = label {
                div { class: "sidebar-group-label", "{text}" }
            }
            {children}
        }
    }
}

#[component]
pub fn SidebarMenu(children: Element) -> Element {
    rsx! {
        ul { class: "sidebar-menu", {children} }
    }
}

#[component]
pub fn SidebarMenuItem(children: Element) -> Element {
    rsx! {
        li { class: "sidebar-menu-item", {children} }
    }
}

/// A navigation entry rendered as a router link. Following it closes an
/// overlaid sidebar.
#[component]
pub fn SidebarMenuLink(
    #[props(into)] to: NavigationTarget,
    #[props(default = false)] active: bool,
    children: Element,
) -> Element {
    let mut state = use_sidebar();

    rsx! {
        Link {
            to,
            class: menu_link_class(active),
            onclick: move |_| state.set(state().navigated()),
            {children}
        }
    }
}

#[component]
pub fn SidebarTrigger(children: Element) -> Element {
    let mut state = use_sidebar();

    rsx! {
        button {
            class: "sidebar-trigger",
            r#type: "button",
            "aria-label": "Toggle navigation",
            onclick: move |_| state.set(state().toggled()),
            {children}
        }
    }
}

/// Main content column beside the sidebar.
#[component]
pub fn SidebarInset(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = classed("sidebar-inset", attributes);
    rsx! {
        main { ..merged, {children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn overlay_starts_closed() {
        assert_eq!(
            SidebarState::new(true),
            SidebarState { collapsed: false, overlay_open: false }
        );
        assert!(!SidebarState::new(false).overlay_open);
    }

    #[test]
    fn following_a_link_keeps_the_docked_sidebar_expanded() {
        let docked = SidebarState::new(true).navigated();
        assert!(!docked.collapsed);

        let overlay = SidebarState::new(true).toggled();
        assert!(overlay.overlay_open);
        assert_eq!(overlay.navigated().overlay_open, false);
    }

    #[test]
    fn trigger_round_trips() {
        let start = SidebarState::new(true);
        assert_eq!(start.toggled().toggled(), start);
    }

    #[test]
    fn active_link_carries_the_active_class() {
        assert!(menu_link_class(true).contains("sidebar-menu-button-active"));
        assert!(!menu_link_class(false).contains("active"));
    }
}
