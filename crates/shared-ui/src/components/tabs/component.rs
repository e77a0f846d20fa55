use dioxus::prelude::*;

/// One entry in a [`TabBar`].
#[derive(Debug, Clone, PartialEq)]
pub struct TabOption {
    pub value: String,
    pub label: String,
    pub count: Option<usize>,
}

impl TabOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            count: None,
        }
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }
}

/// Row of filter tabs bound to a signal holding the selected value.
#[component]
pub fn TabBar(options: Vec<TabOption>, selected: Signal<String>) -> Element {
    let mut selected = selected;
    let current = selected();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "tab-bar", role: "tablist",
            for option in options {
                button {
                    key: "{option.value}",
                    class: "tab-trigger",
                    r#type: "button",
                    role: "tab",
                    "aria-selected": if option.value == current { "true" } else { "false" },
                    "data-state": if option.value == current { "active" } else { "inactive" },
                    onclick: {
                        let value = option.value.clone();
                        move |_| selected.set(value.clone())
                    },
                    "{option.label}"
                    if let Some(count) = option.count {
                        span { class: "tab-count", "{count}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_option_builder() {
        let tab = TabOption::new("pending", "Pending").with_count(3);
        assert_eq!(tab.value, "pending");
        assert_eq!(tab.count, Some(3));
        assert_eq!(TabOption::new("all", "All").count, None);
    }
}
