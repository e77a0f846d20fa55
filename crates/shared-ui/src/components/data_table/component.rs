use dioxus::prelude::*;

/// Scrollable table with a fixed header row.
///
/// Rows are passed as children. When `empty` is true the body is replaced
/// by `empty_message` spanning every column.
#[component]
pub fn DataTable(
    headers: Vec<String>,
    #[props(default = false)] empty: bool,
    #[props(default = "Nothing to show.".to_string())] empty_message: String,
    children: Element,
) -> Element {
    let span = headers.len().max(1);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "data-table",
            table {
                thead {
                    tr {
                        for header in headers.iter() {
                            th { "{header}" }
                        }
                    }
                }
                tbody {
                    if empty {
                        tr {
                            td { class: "data-table-empty", colspan: "{span}", "{empty_message}" }
                        }
                    } else {
                        {children}
                    }
                }
            }
        }
    }
}

#[component]
pub fn DataTableRow(children: Element) -> Element {
    rsx! {
        tr { class: "data-table-row", {children} }
    }
}

#[component]
pub fn DataTableCell(children: Element) -> Element {
    rsx! {
        td { {children} }
    }
}
