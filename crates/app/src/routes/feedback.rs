use dioxus::prelude::*;
use shared_types::{Feedback, FeedbackStatus, Role, StatusCounts, MAX_RATING};
use shared_ui::{
    Button, Card, CardContent, CardHeader, DataTable, DataTableCell, DataTableRow, Form,
    PageHeader, TabBar, TextAreaField,
};
use std::collections::HashMap;

use super::scope::Scope;
use super::status::{in_tab, status_badge, status_tabs, ALL_TAB};
use crate::format_helpers::format_date_human;
use crate::session::{use_role, use_user_name};
use crate::store::use_store;

/// Mean rating to one decimal place, or `None` with no entries.
fn average_rating(entries: &[Feedback]) -> Option<f64> {
    if entries.is_empty() {
        return None;
    }
    let sum: u32 = entries.iter().map(|f| u32::from(f.rating)).sum();
    let mean = f64::from(sum) / entries.len() as f64;
    Some((mean * 10.0).round() / 10.0)
}

#[component]
pub fn FeedbackList() -> Element {
    let store = use_store();
    let role = use_role();
    let name = use_user_name();
    let selected = use_signal(|| ALL_TAB.to_string());

    let scope = Scope::for_session(role, &name);
    let is_client = role == Some(Role::Client);

    let mut entries: Vec<Feedback> = store
        .feedback
        .read()
        .iter()
        .filter(|f| match &scope {
            Scope::Everyone => true,
            Scope::Client(client) => &f.client_name == client,
            Scope::Worker(_) => false,
        })
        .cloned()
        .collect();
    entries.sort_by(|a, b| b.submitted_on.cmp(&a.submitted_on));

    let counts = StatusCounts::<FeedbackStatus>::tally(&entries);
    let subtitle = match average_rating(&entries) {
        Some(avg) => format!("Average rating {avg:.1} of {MAX_RATING}"),
        None => "No feedback yet".to_string(),
    };
    let title = if is_client { "Your feedback" } else { "Client feedback" };

    let tab = selected();
    let shown: Vec<Feedback> = entries
        .into_iter()
        .filter(|f| in_tab(&tab, f.status))
        .collect();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./pages.css") }
        PageHeader { title: title.to_string(), subtitle }

        if is_client {
            FeedbackForm { client_name: name.clone() }
        }

        div { class: "page-section",
            TabBar { options: status_tabs(&counts), selected }

            DataTable {
                headers: vec![
                    "Submitted".to_string(),
                    "Client".to_string(),
                    "Rating".to_string(),
                    "Comment".to_string(),
                    "Status".to_string(),
                ],
                empty: shown.is_empty(),
                empty_message: "No feedback in this view.",
                for entry in shown.iter() {
                    DataTableRow { key: "{entry.id}",
                        DataTableCell { "{format_date_human(&entry.submitted_on)}" }
                        DataTableCell { "{entry.client_name}" }
                        DataTableCell {
                            span { class: "rating", "{entry.stars()}" }
                        }
                        DataTableCell { "{entry.comment}" }
                        DataTableCell { {status_badge(entry.status)} }
                    }
                }
            }
        }
    }
}

#[component]
fn FeedbackForm(client_name: String) -> Element {
    let mut store = use_store();
    let mut rating = use_signal(|| 0u8);
    let mut comment = use_signal(String::new);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut thanked = use_signal(|| false);

    let rating_error = field_errors.read().get("rating").cloned().unwrap_or_default();
    let comment_error = field_errors.read().get("comment").cloned().unwrap_or_default();

    let handle_submit = move |_| {
        thanked.set(false);
        match store.submit_feedback(&client_name, rating(), &comment()) {
            Ok(()) => {
                field_errors.set(HashMap::new());
                rating.set(0);
                comment.set(String::new());
                thanked.set(true);
            }
            Err(e) => field_errors.set(e.field_errors),
        }
    };

    rsx! {
        Card {
            CardHeader { title: "Rate your care", description: "Your care team reads every response." }
            CardContent {
                Form { onsubmit: handle_submit,
                    div { class: "form-field",
                        span { class: "form-label", "Rating" }
                        div { class: "rating-picker",
                            for star in 1..=MAX_RATING {
                                button {
                                    key: "{star}",
                                    r#type: "button",
                                    class: "rating-star",
                                    "aria-label": "{star} stars",
                                    "data-on": star <= rating(),
                                    onclick: move |_| rating.set(star),
                                    "\u{2605}"
                                }
                            }
                        }
                        if !rating_error.is_empty() {
                            span { class: "form-error", "{rating_error}" }
                        }
                    }
                    TextAreaField {
                        label: "Comments",
                        value: comment(),
                        on_input: move |v| comment.set(v),
                        error: comment_error,
                    }
                    div { class: "row-actions",
                        Button { submit: true, "Send feedback" }
                        if thanked() {
                            span { class: "muted", "Thank you for your feedback." }
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
    use pretty_assertions::assert_eq;
    use shared_types::mock;

    #[test]
    fn average_of_seeded_feedback() {
        assert_eq!(average_rating(&mock::feedback()), Some(5.0));
    }

    #[test]
    fn average_rounds_and_handles_empty() {
        let mut entries = mock::feedback();
        let mut second = entries[0].clone();
        second.id = "feedback-2".into();
        second.rating = 2;
        let mut third = second.clone();
        third.id = "feedback-3".into();
        third.rating = 4;
        entries.push(second);
        entries.push(third);
        // (5 + 2 + 4) / 3 = 3.666...
        assert_eq!(average_rating(&entries), Some(3.7));
        assert_eq!(average_rating(&[]), None);
    }
}
