use dioxus::prelude::*;
use shared_types::{CareLog, CareLogStatus, StatusCounts};
use shared_ui::{DataTable, DataTableCell, DataTableRow, PageHeader, TabBar};

use super::scope::Scope;
use super::status::{in_tab, status_badge, status_tabs, ALL_TAB};
use crate::format_helpers::format_date_human;
use crate::session::{use_role, use_user_name};
use crate::store::use_store;

#[component]
pub fn CareLogList() -> Element {
    let store = use_store();
    let scope = Scope::for_session(use_role(), &use_user_name());
    let selected = use_signal(|| ALL_TAB.to_string());

    let mut logs: Vec<CareLog> = store
        .care_logs
        .read()
        .iter()
        .filter(|l| scope.admits(&l.worker_name, &l.client_name))
        .cloned()
        .collect();
    logs.sort_by(|a, b| b.date.cmp(&a.date));

    let counts = StatusCounts::<CareLogStatus>::tally(&logs);
    let tab = selected();
    let awaiting = counts.get(CareLogStatus::Submitted);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./pages.css") }
        PageHeader {
            title: "Care logs",
            subtitle: format!("{awaiting} awaiting review"),
        }

        TabBar { options: status_tabs(&counts), selected }

        DataTable {
            headers: vec![
                "Date".to_string(),
                "Client".to_string(),
                "Care worker".to_string(),
                "Summary".to_string(),
                "Mood".to_string(),
                "Status".to_string(),
            ],
            empty: !logs.iter().any(|l| in_tab(&tab, l.status)),
            empty_message: "No care logs in this view.",
            for log in logs.iter().filter(|l| in_tab(&tab, l.status)) {
                DataTableRow { key: "{log.id}",
                    DataTableCell { "{format_date_human(&log.date)}" }
                    DataTableCell { "{log.client_name}" }
                    DataTableCell { "{log.worker_name}" }
                    DataTableCell { "{log.summary}" }
                    DataTableCell {
                        if let Some(mood) = &log.mood {
                            "{mood}"
                        } else {
                            span { class: "muted", "Not recorded" }
                        }
                    }
                    DataTableCell { {status_badge(log.status)} }
                }
            }
        }
    }
}
