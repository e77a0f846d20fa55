use dioxus::prelude::*;
use shared_types::{percent, StatusCounts, TrainingModule, TrainingStatus};
use shared_ui::{
    Card, CardContent, DataTable, DataTableCell, DataTableRow, PageHeader, ProgressBar, TabBar,
};

use super::scope::Scope;
use super::status::{in_tab, status_badge, status_tabs, ALL_TAB};
use crate::format_helpers::format_date_human;
use crate::session::{use_role, use_user_name};
use crate::store::use_store;

#[component]
pub fn TrainingList() -> Element {
    let store = use_store();
    let role = use_role();
    let name = use_user_name();
    let selected = use_signal(|| ALL_TAB.to_string());

    let everyone = Scope::for_session(role, &name) == Scope::Everyone;
    let mut modules: Vec<TrainingModule> = store
        .training
        .read()
        .iter()
        .filter(|m| everyone || m.assignee == name)
        .cloned()
        .collect();
    modules.sort_by(|a, b| a.due_on.cmp(&b.due_on));

    let counts = StatusCounts::<TrainingStatus>::tally(&modules);
    let completed = percent(counts.get(TrainingStatus::Completed), counts.total()) as u32;
    let title = if everyone { "Team training" } else { "My training" };

    let tab = selected();
    let shown: Vec<TrainingModule> = modules
        .into_iter()
        .filter(|m| in_tab(&tab, m.status))
        .collect();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./pages.css") }
        PageHeader { title: title.to_string(), subtitle: "Mandatory and refresher modules" }

        Card {
            CardContent {
                ProgressBar { label: "Completed", value: completed }
            }
        }

        div { class: "page-section",
            TabBar { options: status_tabs(&counts), selected }

            DataTable {
                headers: vec![
                    "Module".to_string(),
                    "Assigned to".to_string(),
                    "Due".to_string(),
                    "Length".to_string(),
                    "Status".to_string(),
                ],
                empty: shown.is_empty(),
                empty_message: "No modules in this view.",
                for module in shown.iter() {
                    DataTableRow { key: "{module.id}",
                        DataTableCell { "{module.title}" }
                        DataTableCell { "{module.assignee}" }
                        DataTableCell { "{format_date_human(&module.due_on)}" }
                        DataTableCell { "{module.duration_minutes} min" }
                        DataTableCell { {status_badge(module.status)} }
                    }
                }
            }
        }
    }
}
