use dioxus::prelude::*;
use shared_types::{Incident, IncidentStatus, Severity, StatusCounts};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonSize, DataTable, DataTableCell, DataTableRow, PageHeader,
    TabBar,
};

use super::scope::Scope;
use super::status::{in_tab, status_badge, status_tabs, ALL_TAB};
use crate::format_helpers::format_date_human;
use crate::session::{use_role, use_user_name};
use crate::store::use_store;

fn severity_badge(severity: Severity) -> Element {
    let variant = match severity {
        Severity::Low => BadgeVariant::Neutral,
        Severity::Medium => BadgeVariant::Warning,
        Severity::High => BadgeVariant::Danger,
    };
    let label = severity.label();
    rsx! {
        Badge { variant, "{label}" }
    }
}

fn advance_label(status: IncidentStatus) -> Option<&'static str> {
    match status.advance()? {
        IncidentStatus::Investigating => Some("Investigate"),
        IncidentStatus::Resolved => Some("Resolve"),
        IncidentStatus::Open => None,
    }
}

#[component]
pub fn IncidentList() -> Element {
    let mut store = use_store();
    let role = use_role();
    let scope = Scope::for_session(role, &use_user_name());
    let selected = use_signal(|| ALL_TAB.to_string());
    let mut error = use_signal(|| Option::<String>::None);
    let can_triage = role.is_some_and(|r| r.is_manager());

    let mut incidents: Vec<Incident> = store
        .incidents
        .read()
        .iter()
        .filter(|i| scope.admits(&i.reported_by, &i.client_name))
        .cloned()
        .collect();
    incidents.sort_by(|a, b| b.date.cmp(&a.date));

    let counts = StatusCounts::<IncidentStatus>::tally(&incidents);
    let tab = selected();
    let shown: Vec<Incident> = incidents
        .into_iter()
        .filter(|i| in_tab(&tab, i.status))
        .collect();
    let open = counts.get(IncidentStatus::Open);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./pages.css") }
        PageHeader { title: "Incidents", subtitle: format!("{open} open") }

        if let Some(message) = error() {
            p { class: "page-error", "{message}" }
        }

        TabBar { options: status_tabs(&counts), selected }

        DataTable {
            headers: vec![
                "Date".to_string(),
                "Client".to_string(),
                "Category".to_string(),
                "Severity".to_string(),
                "Reported by".to_string(),
                "Status".to_string(),
                String::new(),
            ],
            empty: shown.is_empty(),
            empty_message: "No incidents in this view.",
            for incident in shown.iter() {
                DataTableRow { key: "{incident.id}",
                    DataTableCell { "{format_date_human(&incident.date)}" }
                    DataTableCell {
                        span { class: "cell-stack",
                            "{incident.client_name}"
                            span { class: "cell-sub", "{incident.description}" }
                        }
                    }
                    DataTableCell { "{incident.category}" }
                    DataTableCell { {severity_badge(incident.severity)} }
                    DataTableCell { "{incident.reported_by}" }
                    DataTableCell { {status_badge(incident.status)} }
                    DataTableCell {
                        if can_triage {
                            if let Some(label) = advance_label(incident.status) {
                                Button {
                                    size: ButtonSize::Small,
                                    onclick: {
                                        let id = incident.id.clone();
                                        move |_| match store.advance_incident(&id) {
                                            Ok(()) => error.set(None),
                                            Err(e) => error.set(Some(e.message)),
                                        }
                                    },
                                    "{label}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
