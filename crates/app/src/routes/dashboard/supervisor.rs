use dioxus::prelude::*;
use shared_types::{
    mock, CareLogStatus, DashboardVariant, Incident, IncidentStatus, StatusCounts,
    TimesheetEntry, TimesheetStatus, Visit, VisitStatus,
};
use shared_ui::{
    Card, CardContent, CardHeader, DataTable, DataTableCell, DataTableRow, PageHeader, StatCard,
    StatGrid,
};

use super::{visits_on, VisitRow};
use crate::format_helpers::{format_date_human, format_hours};
use crate::routes::status::status_badge;
use crate::routes::Route;
use crate::store::use_store;

#[component]
pub fn SupervisorDashboard() -> Element {
    let store = use_store();

    let today: Vec<Visit> = visits_on(&store.visits.read(), mock::TODAY)
        .into_iter()
        .cloned()
        .collect();
    let visit_counts = StatusCounts::<VisitStatus>::tally(&today);
    let incident_counts = StatusCounts::<IncidentStatus>::tally(&store.incidents.read());
    let log_counts = StatusCounts::<CareLogStatus>::tally(&store.care_logs.read());

    let open_incidents: Vec<Incident> = store
        .incidents
        .read()
        .iter()
        .filter(|i| i.status != IncidentStatus::Resolved)
        .cloned()
        .collect();
    let pending: Vec<TimesheetEntry> = store
        .timesheets
        .read()
        .iter()
        .filter(|t| t.status == TimesheetStatus::Pending)
        .cloned()
        .collect();

    let unresolved =
        incident_counts.get(IncidentStatus::Open) + incident_counts.get(IncidentStatus::Investigating);
    let in_progress = visit_counts.get(VisitStatus::InProgress);

    rsx! {
        PageHeader {
            title: DashboardVariant::Supervisor.title().to_string(),
            subtitle: format_date_human(mock::TODAY),
        }

        StatGrid {
            StatCard {
                label: "Visits today",
                value: visit_counts.total().to_string(),
                detail: format!("{in_progress} in progress"),
            }
            StatCard { label: "Unresolved incidents", value: unresolved.to_string() }
            StatCard {
                label: "Care logs to review",
                value: log_counts.get(CareLogStatus::Submitted).to_string(),
            }
            StatCard { label: "Pending timesheets", value: pending.len().to_string() }
        }

        div { class: "dashboard-grid",
            Card {
                CardHeader { title: "Team schedule", description: "All visits today",
                    Link { to: Route::VisitList {}, class: "card-link", "View all" }
                }
                CardContent {
                    ul { class: "schedule-list",
                        for visit in today.iter() {
                            VisitRow { key: "{visit.id}", visit: visit.clone(), show_worker: true }
                        }
                    }
                }
            }

            Card {
                CardHeader { title: "Open incidents",
                    Link { to: Route::IncidentList {}, class: "card-link", "Triage" }
                }
                CardContent {
                    DataTable {
                        headers: vec!["Client".to_string(), "Category".to_string(), "Severity".to_string(), "Status".to_string()],
                        empty: open_incidents.is_empty(),
                        empty_message: "No open incidents.",
                        for incident in open_incidents.iter() {
                            DataTableRow { key: "{incident.id}",
                                DataTableCell { "{incident.client_name}" }
                                DataTableCell { "{incident.category}" }
                                DataTableCell { "{incident.severity.label()}" }
                                DataTableCell { {status_badge(incident.status)} }
                            }
                        }
                    }
                }
            }

            Card {
                CardHeader { title: "Timesheets awaiting approval",
                    Link { to: Route::TimesheetList {}, class: "card-link", "Review" }
                }
                CardContent {
                    if pending.is_empty() {
                        p { class: "empty-state", "Nothing to approve." }
                    }
                    ul { class: "attention-list",
                        for entry in pending.iter() {
                            li { key: "{entry.id}", class: "attention-item",
                                span { class: "attention-main",
                                    span { class: "attention-title", "{entry.worker_name}" }
                                    span { class: "muted", "{format_date_human(&entry.date)}" }
                                }
                                span { "{format_hours(entry.total_hours)}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
