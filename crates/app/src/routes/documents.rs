use dioxus::prelude::*;
use shared_types::{Document, DocumentStatus, StatusCounts};
use shared_ui::{DataTable, DataTableCell, DataTableRow, PageHeader, TabBar};

use super::scope::Scope;
use super::status::{in_tab, status_badge, status_tabs, ALL_TAB};
use crate::format_helpers::format_date_human;
use crate::session::{use_role, use_user_name};
use crate::store::use_store;

#[component]
pub fn DocumentList() -> Element {
    let store = use_store();
    let role = use_role();
    let name = use_user_name();
    let selected = use_signal(|| ALL_TAB.to_string());

    // Owners are staff or clients, so either side of the scope may match.
    let scope = Scope::for_session(role, &name);
    let mut documents: Vec<Document> = store
        .documents
        .read()
        .iter()
        .filter(|d| scope.admits(&d.owner_name, &d.owner_name))
        .cloned()
        .collect();
    documents.sort_by(|a, b| a.expires_on.cmp(&b.expires_on));

    let counts = StatusCounts::<DocumentStatus>::tally(&documents);
    let attention = counts.get(DocumentStatus::Expiring) + counts.get(DocumentStatus::Expired);
    let tab = selected();
    let shown: Vec<Document> = documents
        .into_iter()
        .filter(|d| in_tab(&tab, d.status))
        .collect();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./pages.css") }
        PageHeader {
            title: "Documents",
            subtitle: format!("{attention} need attention"),
        }

        TabBar { options: status_tabs(&counts), selected }

        DataTable {
            headers: vec![
                "Title".to_string(),
                "Owner".to_string(),
                "Category".to_string(),
                "Uploaded".to_string(),
                "Expires".to_string(),
                "Status".to_string(),
            ],
            empty: shown.is_empty(),
            empty_message: "No documents in this view.",
            for doc in shown.iter() {
                DataTableRow { key: "{doc.id}",
                    DataTableCell { "{doc.title}" }
                    DataTableCell { "{doc.owner_name}" }
                    DataTableCell { "{doc.category}" }
                    DataTableCell { "{format_date_human(&doc.uploaded_on)}" }
                    DataTableCell {
                        match &doc.expires_on {
                            Some(date) => rsx! { "{format_date_human(date)}" },
                            None => rsx! { span { class: "muted", "No expiry" } },
                        }
                    }
                    DataTableCell { {status_badge(doc.status)} }
                }
            }
        }
    }
}
