use dioxus::prelude::*;
use shared_types::{Role, StatusCounts, Visit, VisitStatus};
use shared_ui::{
    Button, ButtonSize, ButtonVariant, DataTable, DataTableCell, DataTableRow, PageHeader, TabBar,
};

use super::scope::Scope;
use super::status::{in_tab, status_badge, status_tabs, ALL_TAB};
use crate::format_helpers::{format_date_human, format_time_range};
use crate::session::{use_role, use_user_name};
use crate::store::use_store;

#[component]
pub fn VisitList() -> Element {
    let store = use_store();
    let role = use_role();
    let name = use_user_name();
    let selected = use_signal(|| ALL_TAB.to_string());
    let error = use_signal(|| Option::<String>::None);

    let scope = Scope::for_session(role, &name);
    let mut visible: Vec<Visit> = store
        .visits
        .read()
        .iter()
        .filter(|v| scope.admits(&v.worker_name, &v.client_name))
        .cloned()
        .collect();
    visible.sort_by(|a, b| (&a.date, &a.start_time).cmp(&(&b.date, &b.start_time)));

    let counts = StatusCounts::<VisitStatus>::tally(&visible);
    let tab = selected();
    let shown: Vec<Visit> = visible.into_iter().filter(|v| in_tab(&tab, v.status)).collect();

    let title = if role == Some(Role::Client) { "My visits" } else { "Visits" };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./pages.css") }
        PageHeader {
            title: title.to_string(),
            subtitle: format!("{} visits, {} still open", counts.total(), counts.get(VisitStatus::Scheduled) + counts.get(VisitStatus::InProgress)),
        }

        if let Some(message) = error() {
            p { class: "page-error", "{message}" }
        }

        TabBar { options: status_tabs(&counts), selected }

        DataTable {
            headers: vec![
                "Date".to_string(),
                "Time".to_string(),
                "Client".to_string(),
                "Care worker".to_string(),
                "Service".to_string(),
                "Status".to_string(),
                String::new(),
            ],
            empty: shown.is_empty(),
            empty_message: "No visits in this view.",
            for visit in shown.iter() {
                DataTableRow { key: "{visit.id}",
                    DataTableCell { "{format_date_human(&visit.date)}" }
                    DataTableCell { "{format_time_range(&visit.start_time, &visit.end_time)}" }
                    DataTableCell {
                        span { class: "cell-stack",
                            "{visit.client_name}"
                            span { class: "cell-sub", "{visit.address}" }
                        }
                    }
                    DataTableCell { "{visit.worker_name}" }
                    DataTableCell { "{visit.service}" }
                    DataTableCell { {status_badge(visit.status)} }
                    DataTableCell {
                        VisitActions {
                            visit_id: visit.id.clone(),
                            status: visit.status,
                            is_worker: role == Some(Role::CareWorker),
                            is_manager: role.is_some_and(|r| r.is_manager()),
                            error,
                        }
                    }
                }
            }
        }
    }
}

/// Care workers start and complete visits; managers cancel them.
#[component]
fn VisitActions(
    visit_id: String,
    status: VisitStatus,
    is_worker: bool,
    is_manager: bool,
    error: Signal<Option<String>>,
) -> Element {
    let mut store = use_store();
    let mut error = error;

    let mut run = move |outcome: Result<(), shared_types::AppError>| match outcome {
        Ok(()) => error.set(None),
        Err(e) => error.set(Some(e.message)),
    };

    let start_id = visit_id.clone();
    let complete_id = visit_id.clone();
    let cancel_id = visit_id;

    rsx! {
        div { class: "row-actions",
            if is_worker && status.can_start() {
                Button {
                    size: ButtonSize::Small,
                    onclick: move |_| run(store.start_visit(&start_id)),
                    "Start"
                }
            }
            if is_worker && status.can_complete() {
                Button {
                    size: ButtonSize::Small,
                    variant: ButtonVariant::Success,
                    onclick: move |_| run(store.complete_visit(&complete_id)),
                    "Complete"
                }
            }
            if is_manager && status.can_cancel() {
                Button {
                    size: ButtonSize::Small,
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| run(store.cancel_visit(&cancel_id)),
                    "Cancel"
                }
            }
        }
    }
}
