use dioxus::prelude::*;
use shared_types::{
    mock, percent, DashboardVariant, DocumentStatus, Status, StaffStatus, StatusCounts,
    TimesheetStatus, TrainingStatus, Visit, VisitStatus,
};
use shared_ui::{Card, CardContent, CardHeader, PageHeader, ProgressBar, StatCard, StatGrid};

use super::visits_on;
use crate::format_helpers::format_date_human;
use crate::routes::status::status_badge;
use crate::store::use_store;

#[component]
pub fn AdminDashboard() -> Element {
    let store = use_store();

    let staff = StatusCounts::<StaffStatus>::tally(&store.staff.read());
    let client_count = store.clients.read().len();
    let timesheets = StatusCounts::<TimesheetStatus>::tally(&store.timesheets.read());
    let training = StatusCounts::<TrainingStatus>::tally(&store.training.read());

    let today: Vec<Visit> = visits_on(&store.visits.read(), mock::TODAY)
        .into_iter()
        .cloned()
        .collect();
    let today_counts = StatusCounts::<VisitStatus>::tally(&today);

    let attention: Vec<_> = store
        .documents
        .read()
        .iter()
        .filter(|d| d.status != DocumentStatus::Valid)
        .cloned()
        .collect();

    let on_leave = staff.get(StaffStatus::OnLeave);
    let completed_today = today_counts.get(VisitStatus::Completed);
    let training_done = percent(training.get(TrainingStatus::Completed), training.total()) as u32;

    rsx! {
        PageHeader {
            title: DashboardVariant::Admin.title().to_string(),
            subtitle: format_date_human(mock::TODAY),
        }

        StatGrid {
            StatCard {
                label: "Active staff",
                value: staff.get(StaffStatus::Active).to_string(),
                detail: format!("{on_leave} on leave"),
            }
            StatCard { label: "Clients", value: client_count.to_string() }
            StatCard {
                label: "Visits today",
                value: today_counts.total().to_string(),
                detail: format!("{completed_today} completed"),
            }
            StatCard {
                label: "Pending timesheets",
                value: timesheets.get(TimesheetStatus::Pending).to_string(),
            }
        }

        div { class: "dashboard-grid",
            Card {
                CardHeader { title: "Today's visits", description: "Share of visits by status" }
                CardContent {
                    for (status, _) in today_counts.iter() {
                        ProgressBar {
                            key: "{status.as_str()}",
                            label: status.label().to_string(),
                            value: today_counts.percent_of(status) as u32,
                        }
                    }
                }
            }

            Card {
                CardHeader { title: "Documents needing attention" }
                CardContent {
                    if attention.is_empty() {
                        p { class: "empty-state", "All documents are in date." }
                    }
                    ul { class: "attention-list",
                        for doc in attention.iter() {
                            li { key: "{doc.id}", class: "attention-item",
                                span { class: "attention-main",
                                    span { class: "attention-title", "{doc.title}" }
                                    span { class: "muted", "{doc.owner_name}" }
                                }
                                {status_badge(doc.status)}
                            }
                        }
                    }
                }
            }

            Card {
                CardHeader { title: "Training", description: "Modules completed across all staff" }
                CardContent {
                    ProgressBar { label: "Completed", value: training_done }
                }
            }
        }
    }
}
