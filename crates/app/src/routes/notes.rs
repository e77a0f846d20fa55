use dioxus::prelude::*;
use shared_types::{Note, NoteStatus, Role, StatusCounts};
use shared_ui::{
    Button, ButtonSize, ButtonVariant, Card, CardContent, CardHeader, Form, FormRow, PageHeader,
    TabBar, TextAreaField, TextField,
};
use std::collections::HashMap;

use super::scope::Scope;
use super::status::{in_tab, status_badge, status_tabs, ALL_TAB};
use crate::format_helpers::format_date_human;
use crate::session::{use_role, use_user_name};
use crate::store::use_store;

/// Whether `name` may archive `note`. Managers archive anything, authors
/// archive their own.
fn can_archive(note: &Note, role: Option<Role>, name: &str) -> bool {
    note.status != NoteStatus::Archived
        && (role.is_some_and(|r| r.is_manager()) || note.author == name)
}

#[component]
pub fn NoteList() -> Element {
    let mut store = use_store();
    let role = use_role();
    let name = use_user_name();
    let selected = use_signal(|| ALL_TAB.to_string());
    let mut error = use_signal(|| Option::<String>::None);

    let scope = Scope::for_session(role, &name);
    let can_write = matches!(
        role,
        Some(Role::Admin) | Some(Role::Supervisor) | Some(Role::CareWorker)
    );

    let mut notes: Vec<Note> = store
        .notes
        .read()
        .iter()
        .filter(|n| scope.admits(&n.author, &n.client_name))
        .cloned()
        .collect();
    notes.sort_by(|a, b| b.created_on.cmp(&a.created_on).then_with(|| b.id.cmp(&a.id)));

    let counts = StatusCounts::<NoteStatus>::tally(&notes);
    let tab = selected();
    let shown: Vec<Note> = notes.into_iter().filter(|n| in_tab(&tab, n.status)).collect();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./pages.css") }
        PageHeader { title: "Notes", subtitle: "Handover and care notes" }

        if can_write {
            NoteForm { author: name.clone() }
        }

        if let Some(message) = error() {
            p { class: "page-error", "{message}" }
        }

        div { class: "page-section",
            TabBar { options: status_tabs(&counts), selected }

            if shown.is_empty() {
                p { class: "muted", "No notes in this view." }
            }
            div { class: "card-grid",
                for note in shown.iter() {
                    Card { key: "{note.id}",
                        CardHeader {
                            title: note.client_name.clone(),
                            description: format!("{} \u{b7} {}", note.author, format_date_human(&note.created_on)),
                            {status_badge(note.status)}
                        }
                        CardContent {
                            p { "{note.body}" }
                            if can_archive(note, role, &name) {
                                Button {
                                    size: ButtonSize::Small,
                                    variant: ButtonVariant::Ghost,
                                    onclick: {
                                        let id = note.id.clone();
                                        move |_| match store.archive_note(&id) {
                                            Ok(()) => error.set(None),
                                            Err(e) => error.set(Some(e.message)),
                                        }
                                    },
                                    "Archive"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn NoteForm(author: String) -> Element {
    let mut store = use_store();
    let mut client_name = use_signal(String::new);
    let mut body = use_signal(String::new);
    let mut field_errors = use_signal(HashMap::<String, String>::new);

    let field_error =
        move |field: &str| field_errors.read().get(field).cloned().unwrap_or_default();

    let handle_submit = move |_| match store.add_note(&client_name(), &author, &body()) {
        Ok(()) => {
            field_errors.set(HashMap::new());
            client_name.set(String::new());
            body.set(String::new());
        }
        Err(e) => field_errors.set(e.field_errors),
    };

    rsx! {
        Card {
            CardHeader { title: "Add a note" }
            CardContent {
                Form { onsubmit: handle_submit,
                    FormRow {
                        TextField {
                            label: "Client",
                            value: client_name(),
                            placeholder: "Client name",
                            on_input: move |v| client_name.set(v),
                            error: field_error("client_name"),
                        }
                    }
                    TextAreaField {
                        label: "Note",
                        value: body(),
                        on_input: move |v| body.set(v),
                        error: field_error("body"),
                    }
                    Button { submit: true, "Save note" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::mock;

    fn note(author: &str, status: NoteStatus) -> Note {
        Note {
            id: "note-1".into(),
            client_name: mock::CLIENT_NAME.into(),
            author: author.into(),
            created_on: mock::TODAY.into(),
            body: "Ate well at lunch".into(),
            status,
        }
    }

    #[test]
    fn authors_archive_their_own_notes() {
        let n = note(mock::CARE_WORKER_NAME, NoteStatus::Open);
        assert!(can_archive(&n, Some(Role::CareWorker), mock::CARE_WORKER_NAME));
        assert!(!can_archive(&n, Some(Role::CareWorker), mock::SECOND_WORKER_NAME));
        assert!(can_archive(&n, Some(Role::Supervisor), mock::SUPERVISOR_NAME));
    }

    #[test]
    fn archived_notes_offer_no_archive() {
        let n = note(mock::CARE_WORKER_NAME, NoteStatus::Archived);
        assert!(!can_archive(&n, Some(Role::Admin), mock::ADMIN_NAME));
    }
}
