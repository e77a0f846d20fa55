use dioxus::prelude::*;
use shared_types::{
    mock, percent, total_hours, unread_total, DashboardVariant, StatusCounts, TimesheetEntry,
    TrainingModule, TrainingStatus, Visit, VisitStatus,
};
use shared_ui::{Card, CardContent, CardHeader, PageHeader, ProgressBar, StatCard, StatGrid};

use super::{visits_on, VisitRow};
use crate::format_helpers::{format_date_human, format_hours};
use crate::routes::Route;
use crate::session::use_user_name;
use crate::store::use_store;

/// The signed-in worker's day: their visits, hours and training.
#[component]
pub fn CareWorkerDashboard() -> Element {
    let store = use_store();
    let name = use_user_name();

    let mine: Vec<Visit> = visits_on(&store.visits.read(), mock::TODAY)
        .into_iter()
        .filter(|v| v.worker_name == name)
        .cloned()
        .collect();
    let visit_counts = StatusCounts::<VisitStatus>::tally(&mine);
    let remaining = mine.iter().filter(|v| v.status.is_open()).count();

    let my_hours: Vec<TimesheetEntry> = store
        .timesheets
        .read()
        .iter()
        .filter(|t| t.worker_name == name)
        .cloned()
        .collect();
    let hours = total_hours(&my_hours);

    let my_training: Vec<TrainingModule> = store
        .training
        .read()
        .iter()
        .filter(|t| t.assignee == name)
        .cloned()
        .collect();
    let training = StatusCounts::<TrainingStatus>::tally(&my_training);
    let unread = unread_total(&store.conversations.read(), &name);
    let not_started = training.get(TrainingStatus::NotStarted);
    let underway = training.get(TrainingStatus::InProgress);
    let training_done = percent(training.get(TrainingStatus::Completed), training.total()) as u32;

    rsx! {
        PageHeader {
            title: DashboardVariant::CareWorker.title().to_string(),
            subtitle: format_date_human(mock::TODAY),
        }

        StatGrid {
            StatCard {
                label: "Visits today",
                value: visit_counts.total().to_string(),
                detail: format!("{remaining} still to do"),
            }
            StatCard {
                label: "Completed",
                value: visit_counts.get(VisitStatus::Completed).to_string(),
            }
            StatCard { label: "Hours logged", value: format_hours(hours) }
            StatCard { label: "Unread messages", value: unread.to_string() }
        }

        div { class: "dashboard-grid",
            Card {
                CardHeader { title: "My schedule",
                    Link { to: Route::VisitList {}, class: "card-link", "Open visits" }
                }
                CardContent {
                    if mine.is_empty() {
                        p { class: "empty-state", "No visits scheduled for you today." }
                    }
                    ul { class: "schedule-list",
                        for visit in mine.iter() {
                            VisitRow { key: "{visit.id}", visit: visit.clone(), show_worker: false }
                        }
                    }
                }
            }

            Card {
                CardHeader { title: "My training",
                    Link { to: Route::TrainingList {}, class: "card-link", "View modules" }
                }
                CardContent {
                    ProgressBar { label: "Completed", value: training_done }
                    p { class: "muted", "{not_started} not started, {underway} in progress" }
                }
            }
        }
    }
}
