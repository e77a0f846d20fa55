use dioxus::prelude::*;
use shared_types::{
    mock, unread_total, DashboardVariant, MedicationSchedule, MedicationStatus, Visit,
};
use shared_ui::{
    Card, CardContent, CardHeader, DetailItem, DetailList, PageHeader, StatCard, StatGrid,
};

use crate::format_helpers::{format_date_human, format_time_12h, format_time_range};
use crate::routes::status::status_badge;
use crate::routes::Route;
use crate::session::use_user_name;
use crate::store::use_store;

/// Upcoming visits, today's medication and the client's key contacts.
#[component]
pub fn ClientDashboard() -> Element {
    let store = use_store();
    let name = use_user_name();

    let mut upcoming: Vec<Visit> = store
        .visits
        .read()
        .iter()
        .filter(|v| v.client_name == name && v.status.is_open())
        .cloned()
        .collect();
    upcoming.sort_by(|a, b| (&a.date, &a.start_time).cmp(&(&b.date, &b.start_time)));

    let medication: Vec<MedicationSchedule> = store
        .medications
        .read()
        .iter()
        .filter(|m| m.client_name == name)
        .cloned()
        .collect();
    let due = medication
        .iter()
        .filter(|m| m.status == MedicationStatus::Due)
        .count();

    let profile = store.clients.read().iter().find(|c| c.name == name).cloned();
    let key_worker = profile
        .as_ref()
        .and_then(|p| p.key_worker.clone())
        .unwrap_or_else(|| "Not yet assigned".to_string());
    let unread = unread_total(&store.conversations.read(), &name);

    rsx! {
        PageHeader {
            title: DashboardVariant::Client.title().to_string(),
            subtitle: format!("Hello, {name}"),
        }

        StatGrid {
            StatCard { label: "Upcoming visits", value: upcoming.len().to_string() }
            StatCard { label: "Doses still due today", value: due.to_string() }
            StatCard { label: "Unread messages", value: unread.to_string() }
        }

        div { class: "dashboard-grid",
            Card {
                CardHeader { title: "Upcoming visits",
                    Link { to: Route::VisitList {}, class: "card-link", "All visits" }
                }
                CardContent {
                    if upcoming.is_empty() {
                        p { class: "empty-state", "No visits booked." }
                    }
                    ul { class: "schedule-list",
                        for visit in upcoming.iter() {
                            li { key: "{visit.id}", class: "schedule-item",
                                span { class: "schedule-time",
                                    "{format_date_human(&visit.date)}"
                                }
                                span { class: "schedule-main",
                                    span { class: "schedule-who", "{visit.worker_name}" }
                                    span { class: "schedule-what",
                                        "{visit.service}, {format_time_range(&visit.start_time, &visit.end_time)}"
                                    }
                                }
                                {status_badge(visit.status)}
                            }
                        }
                    }
                }
            }

            Card {
                CardHeader { title: "Today's medication" }
                CardContent {
                    ul { class: "schedule-list",
                        for dose in medication.iter() {
                            li { key: "{dose.id}", class: "schedule-item",
                                span { class: "schedule-time", "{format_time_12h(&dose.time)}" }
                                span { class: "schedule-main",
                                    span { class: "schedule-who", "{dose.medication}" }
                                    span { class: "schedule-what", "{dose.dosage}" }
                                }
                                {status_badge(dose.status)}
                            }
                        }
                    }
                }
            }

            Card {
                CardHeader { title: "Your care team" }
                CardContent {
                    DetailList {
                        DetailItem { label: "Key worker", value: key_worker }
                        if let Some(gp) = profile.as_ref().and_then(|p| p.gp_name.clone()) {
                            DetailItem { label: "GP", value: gp }
                        }
                        DetailItem { label: "Office", value: mock::SUPERVISOR_NAME.to_string() }
                    }
                }
            }
        }
    }
}
