use dioxus::prelude::*;
use shared_types::{
    mock, total_hours, AppError, Role, StatusCounts, TimesheetEntry, TimesheetStatus,
};
use shared_ui::{
    Button, ButtonSize, ButtonVariant, Card, CardContent, CardHeader, DataTable, DataTableCell,
    DataTableRow, Form, FormRow, PageHeader, TabBar, TextField,
};
use std::collections::HashMap;

use super::status::{in_tab, status_badge, status_tabs, ALL_TAB};
use crate::format_helpers::{format_date_human, format_hours, format_time_range};
use crate::session::{use_role, use_user_name};
use crate::store::use_store;

/// Break length from the form. Blank means no break.
fn parse_break(input: &str) -> Result<u32, AppError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed
        .parse::<u32>()
        .map_err(|_| AppError::invalid_field("break_minutes", "Enter whole minutes, e.g. 30"))
}

#[component]
pub fn TimesheetList() -> Element {
    let mut store = use_store();
    let role = use_role();
    let name = use_user_name();
    let selected = use_signal(|| ALL_TAB.to_string());
    let mut error = use_signal(|| Option::<String>::None);

    let can_review = role.is_some_and(|r| r.is_manager());
    let can_submit = role == Some(Role::CareWorker);

    let mut entries: Vec<TimesheetEntry> = store
        .timesheets
        .read()
        .iter()
        .filter(|t| can_review || t.worker_name == name)
        .cloned()
        .collect();
    entries.sort_by(|a, b| b.date.cmp(&a.date));

    let counts = StatusCounts::<TimesheetStatus>::tally(&entries);
    let approved: Vec<TimesheetEntry> = entries
        .iter()
        .filter(|t| t.status == TimesheetStatus::Approved)
        .cloned()
        .collect();
    let logged = format_hours(total_hours(&entries));
    let approved_hours = format_hours(total_hours(&approved));
    let pending = counts.get(TimesheetStatus::Pending);

    let subtitle = if can_review {
        "Review hours submitted by care workers"
    } else {
        "Your submitted hours"
    };

    let tab = selected();
    let shown: Vec<TimesheetEntry> = entries
        .into_iter()
        .filter(|t| in_tab(&tab, t.status))
        .collect();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./pages.css") }
        PageHeader { title: "Timesheets", subtitle: subtitle.to_string() }

        div { class: "page-summary",
            span { "Logged " strong { "{logged}" } }
            span { "Approved " strong { "{approved_hours}" } }
            span { "Pending " strong { "{pending}" } }
        }

        if can_submit {
            TimesheetForm { worker_name: name.clone() }
        }

        if let Some(message) = error() {
            p { class: "page-error", "{message}" }
        }

        div { class: "page-section",
            TabBar { options: status_tabs(&counts), selected }

            DataTable {
                headers: vec![
                    "Date".to_string(),
                    "Care worker".to_string(),
                    "Shift".to_string(),
                    "Break".to_string(),
                    "Hours".to_string(),
                    "Status".to_string(),
                    String::new(),
                ],
                empty: shown.is_empty(),
                empty_message: "No timesheets in this view.",
                for entry in shown.iter() {
                    DataTableRow { key: "{entry.id}",
                        DataTableCell { "{format_date_human(&entry.date)}" }
                        DataTableCell { "{entry.worker_name}" }
                        DataTableCell { "{format_time_range(&entry.check_in, &entry.check_out)}" }
                        DataTableCell { "{entry.break_minutes} min" }
                        DataTableCell { "{format_hours(entry.total_hours)}" }
                        DataTableCell { {status_badge(entry.status)} }
                        DataTableCell {
                            if can_review && entry.status == TimesheetStatus::Pending {
                                div { class: "row-actions",
                                    Button {
                                        size: ButtonSize::Small,
                                        variant: ButtonVariant::Success,
                                        onclick: {
                                            let id = entry.id.clone();
                                            move |_| match store.review_timesheet(&id, TimesheetStatus::Approved) {
                                                Ok(()) => error.set(None),
                                                Err(e) => error.set(Some(e.message)),
                                            }
                                        },
                                        "Approve"
                                    }
                                    Button {
                                        size: ButtonSize::Small,
                                        variant: ButtonVariant::Danger,
                                        onclick: {
                                            let id = entry.id.clone();
                                            move |_| match store.review_timesheet(&id, TimesheetStatus::Rejected) {
                                                Ok(()) => error.set(None),
                                                Err(e) => error.set(Some(e.message)),
                                            }
                                        },
                                        "Reject"
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

/// New shift entry. Hours are computed on submit and shown in the table.
#[component]
fn TimesheetForm(worker_name: String) -> Element {
    let mut store = use_store();
    let mut date = use_signal(|| mock::TODAY.to_string());
    let mut check_in = use_signal(|| "09:00".to_string());
    let mut check_out = use_signal(|| "17:00".to_string());
    let mut break_minutes = use_signal(|| "30".to_string());
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut saved = use_signal(|| false);

    let field_error =
        move |field: &str| field_errors.read().get(field).cloned().unwrap_or_default();

    let handle_submit = move |_| {
        saved.set(false);
        let outcome = parse_break(&break_minutes()).and_then(|minutes| {
            store.submit_timesheet(&worker_name, &date(), &check_in(), &check_out(), minutes)
        });
        match outcome {
            Ok(()) => {
                field_errors.set(HashMap::new());
                saved.set(true);
            }
            Err(e) => {
                tracing::debug!(error = %e, "timesheet rejected");
                field_errors.set(e.field_errors);
            }
        }
    };

    rsx! {
        Card {
            CardHeader { title: "Log a shift", description: "Same-day shifts only. Hours exclude your break." }
            CardContent {
                Form { onsubmit: handle_submit,
                    FormRow {
                        TextField {
                            label: "Date",
                            input_type: "date",
                            value: date(),
                            on_input: move |v| date.set(v),
                            error: field_error("date"),
                        }
                        TextField {
                            label: "Check in",
                            input_type: "time",
                            value: check_in(),
                            on_input: move |v| check_in.set(v),
                            error: field_error("check_in"),
                        }
                        TextField {
                            label: "Check out",
                            input_type: "time",
                            value: check_out(),
                            on_input: move |v| check_out.set(v),
                            error: field_error("check_out"),
                        }
                        TextField {
                            label: "Break (minutes)",
                            input_type: "number",
                            value: break_minutes(),
                            on_input: move |v| break_minutes.set(v),
                            error: field_error("break_minutes"),
                        }
                    }
                    div { class: "row-actions",
                        Button { submit: true, "Submit timesheet" }
                        if saved() {
                            span { class: "muted", "Submitted for approval." }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn break_parsing() {
        assert_eq!(parse_break("").unwrap(), 0);
        assert_eq!(parse_break(" 45 ").unwrap(), 45);
        let err = parse_break("half an hour").unwrap_err();
        assert!(err.field("break_minutes").is_some());
        assert!(parse_break("-5").is_err());
    }
}
