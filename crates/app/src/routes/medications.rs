use dioxus::prelude::*;
use shared_types::{MedicationSchedule, MedicationStatus, Role, Status, StatusCounts};
use shared_ui::{
    Button, ButtonSize, ButtonVariant, DataTable, DataTableCell, DataTableRow, PageHeader, TabBar,
};

use super::scope::Scope;
use super::status::{in_tab, status_badge, status_tabs, ALL_TAB};
use crate::format_helpers::format_time_12h;
use crate::session::{use_role, use_user_name};
use crate::store::use_store;

fn outcome_variant(outcome: MedicationStatus) -> ButtonVariant {
    match outcome {
        MedicationStatus::Given => ButtonVariant::Success,
        MedicationStatus::Refused => ButtonVariant::Secondary,
        _ => ButtonVariant::Danger,
    }
}

/// Today's medication round. Care workers record an outcome against each
/// due dose; everyone else reads the schedule.
#[component]
pub fn MedicationList() -> Element {
    let mut store = use_store();
    let role = use_role();
    let name = use_user_name();
    let scope = Scope::for_session(role, &name);
    let selected = use_signal(|| ALL_TAB.to_string());
    let mut error = use_signal(|| Option::<String>::None);
    let can_record = role == Some(Role::CareWorker);

    let mut schedule: Vec<MedicationSchedule> = store
        .medications
        .read()
        .iter()
        .filter(|m| scope.admits_client(&m.client_name))
        .cloned()
        .collect();
    schedule.sort_by(|a, b| a.time.cmp(&b.time));

    let counts = StatusCounts::<MedicationStatus>::tally(&schedule);
    let tab = selected();
    let shown: Vec<MedicationSchedule> = schedule
        .into_iter()
        .filter(|m| in_tab(&tab, m.status))
        .collect();
    let due = counts.get(MedicationStatus::Due);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./pages.css") }
        PageHeader { title: "Medications", subtitle: format!("{due} doses due") }

        if let Some(message) = error() {
            p { class: "page-error", "{message}" }
        }

        TabBar { options: status_tabs(&counts), selected }

        DataTable {
            headers: vec![
                "Time".to_string(),
                "Client".to_string(),
                "Medication".to_string(),
                "Status".to_string(),
                "Recorded by".to_string(),
                String::new(),
            ],
            empty: shown.is_empty(),
            empty_message: "No doses in this view.",
            for dose in shown.iter() {
                DataTableRow { key: "{dose.id}",
                    DataTableCell { "{format_time_12h(&dose.time)}" }
                    DataTableCell { "{dose.client_name}" }
                    DataTableCell {
                        span { class: "cell-stack",
                            "{dose.medication} {dose.dosage}"
                            if let Some(instructions) = &dose.instructions {
                                span { class: "cell-sub", "{instructions}" }
                            }
                        }
                    }
                    DataTableCell { {status_badge(dose.status)} }
                    DataTableCell { "{dose.administered_by.as_deref().unwrap_or_default()}" }
                    DataTableCell {
                        if can_record && dose.status.is_due() {
                            div { class: "row-actions",
                                for outcome in MedicationStatus::OUTCOMES.iter().copied() {
                                    Button {
                                        key: "{outcome.as_str()}",
                                        size: ButtonSize::Small,
                                        variant: outcome_variant(outcome),
                                        onclick: {
                                            let id = dose.id.clone();
                                            let by = name.clone();
                                            move |_| match store.record_medication(&id, outcome, &by) {
                                                Ok(()) => error.set(None),
                                                Err(e) => error.set(Some(e.message)),
                                            }
                                        },
                                        "{outcome.label()}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
