use dioxus::prelude::*;

/// Form wrapper that suppresses the browser's own submission.
#[component]
pub fn Form(
    #[props(default)] onsubmit: EventHandler<FormEvent>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "form", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        form {
            onsubmit: move |evt| {
                evt.prevent_default();
                onsubmit.call(evt);
            },
            ..merged,
            {children}
        }
    }
}

/// Labelled single-line input. A non-empty `error` renders under the field.
#[component]
pub fn TextField(
    label: String,
    value: String,
    on_input: EventHandler<String>,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] placeholder: String,
    #[props(default)] error: String,
) -> Element {
    let invalid = !error.is_empty();

    rsx! {
        label { class: "form-field",
            span { class: "form-label", "{label}" }
            input {
                class: "form-input",
                r#type: "{input_type}",
                value: "{value}",
                placeholder: "{placeholder}",
                "aria-invalid": if invalid { "true" } else { "false" },
                oninput: move |evt| on_input.call(evt.value()),
            }
            if !error.is_empty() {
                span { class: "form-error", "{error}" }
            }
        }
    }
}

/// Labelled multi-line input.
#[component]
pub fn TextAreaField(
    label: String,
    value: String,
    on_input: EventHandler<String>,
    #[props(default)] placeholder: String,
    #[props(default)] error: String,
) -> Element {
    rsx! {
        label { class: "form-field",
            span { class: "form-label", "{label}" }
            textarea {
                class: "form-input",
                rows: "3",
                value: "{value}",
                placeholder: "{placeholder}",
                oninput: move |evt| on_input.call(evt.value()),
            }
            if !error.is_empty() {
                span { class: "form-error", "{error}" }
            }
        }
    }
}

/// Horizontal group of fields that wraps on narrow screens.
#[component]
pub fn FormRow(children: Element) -> Element {
    rsx! {
        div { class: "form-row", {children} }
    }
}
