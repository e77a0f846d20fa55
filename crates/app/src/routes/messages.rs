use dioxus::prelude::*;
use shared_types::{unread_total, Conversation};
use shared_ui::{
    Badge, BadgeVariant, Button, Card, CardContent, CardHeader, Form, PageHeader, TextAreaField,
};

use crate::format_helpers::format_datetime_human;
use crate::session::use_user_name;
use crate::store::use_store;

/// Threads `reader` takes part in, most recent activity first.
fn inbox(conversations: &[Conversation], reader: &str) -> Vec<Conversation> {
    let mut threads: Vec<Conversation> = conversations
        .iter()
        .filter(|c| c.includes(reader))
        .cloned()
        .collect();
    threads.sort_by(|a, b| {
        let a_at = a.last_message().map(|m| m.sent_at.as_str()).unwrap_or_default();
        let b_at = b.last_message().map(|m| m.sent_at.as_str()).unwrap_or_default();
        b_at.cmp(a_at)
    });
    threads
}

#[component]
pub fn MessageCenter() -> Element {
    let mut store = use_store();
    let name = use_user_name();
    let mut selected = use_signal(|| Option::<String>::None);
    let mut error = use_signal(|| Option::<String>::None);

    let threads = inbox(&store.conversations.read(), &name);
    let unread = unread_total(&threads, &name);
    let open_thread = selected().and_then(|id| threads.iter().find(|c| c.id == id).cloned());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./pages.css") }
        PageHeader { title: "Messages", subtitle: format!("{unread} unread") }

        if let Some(message) = error() {
            p { class: "page-error", "{message}" }
        }

        div { class: "thread-layout",
            Card {
                ul { class: "thread-list",
                    if threads.is_empty() {
                        li { class: "muted", "No conversations yet." }
                    }
                    for thread in threads.iter() {
                        li { key: "{thread.id}",
                            button {
                                class: "thread-item",
                                "data-active": selected().as_deref() == Some(thread.id.as_str()),
                                onclick: {
                                    let id = thread.id.clone();
                                    let reader = name.clone();
                                    move |_| {
                                        match store.open_conversation(&id, &reader) {
                                            Ok(()) => error.set(None),
                                            Err(e) => error.set(Some(e.message)),
                                        }
                                        selected.set(Some(id.clone()));
                                    }
                                },
                                ThreadSummary { thread: thread.clone(), reader: name.clone() }
                            }
                        }
                    }
                }
            }

            match open_thread {
                Some(thread) => {
                    // Keyed so switching threads drops the previous draft.
                    let thread_key = thread.id.clone();
                    rsx! {
                        ThreadView { key: "{thread_key}", thread, reader: name.clone() }
                    }
                }
                None => rsx! {
                    Card {
                        CardContent {
                            p { class: "muted", "Choose a conversation to read it." }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn ThreadSummary(thread: Conversation, reader: String) -> Element {
    let unread = thread.unread_for(&reader);
    let preview = thread
        .last_message()
        .map(|m| m.body.clone())
        .unwrap_or_default();
    let counterpart = thread.counterpart(&reader).to_string();

    rsx! {
        span { class: "thread-item-top",
            strong { "{counterpart}" }
            if unread > 0 {
                Badge { variant: BadgeVariant::Info, "{unread}" }
            }
        }
        span { "{thread.subject}" }
        span { class: "thread-preview", "{preview}" }
    }
}

#[component]
fn ThreadView(thread: Conversation, reader: String) -> Element {
    let mut store = use_store();
    let mut draft = use_signal(String::new);
    let mut draft_error = use_signal(String::new);

    let thread_id = thread.id.clone();
    let sender = reader.clone();
    let handle_submit = move |_| match store.send_message(&thread_id, &sender, &draft()) {
        Ok(()) => {
            draft.set(String::new());
            draft_error.set(String::new());
        }
        Err(e) => draft_error.set(e.field("body").unwrap_or(e.message.as_str()).to_string()),
    };

    rsx! {
        Card {
            CardHeader {
                title: thread.subject.clone(),
                description: thread.participants.join(", "),
            }
            CardContent {
                div { class: "message-list",
                    for (index, message) in thread.messages.iter().enumerate() {
                        div {
                            key: "{index}",
                            class: "message",
                            "data-mine": message.sender == reader,
                            p { "{message.body}" }
                            span { class: "message-meta",
                                "{message.sender} \u{b7} {format_datetime_human(&message.sent_at)}"
                            }
                        }
                    }
                }
                Form { onsubmit: handle_submit,
                    TextAreaField {
                        label: "Reply",
                        value: draft(),
                        on_input: move |v| draft.set(v),
                        error: draft_error(),
                    }
                    Button { submit: true, "Send" }
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
    fn inbox_only_lists_reader_threads() {
        let all = mock::conversations();
        let threads = inbox(&all, mock::CARE_WORKER_NAME);
        assert!(!threads.is_empty());
        assert!(threads.iter().all(|c| c.includes(mock::CARE_WORKER_NAME)));
    }

    #[test]
    fn inbox_is_newest_first() {
        let threads = inbox(&mock::conversations(), mock::SUPERVISOR_NAME);
        let stamps: Vec<&str> = threads
            .iter()
            .filter_map(|c| c.last_message().map(|m| m.sent_at.as_str()))
            .collect();
        let mut sorted = stamps.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(stamps, sorted);
    }

    #[test]
    fn inbox_ids_distinguish_every_thread() {
        let threads = inbox(&mock::conversations(), mock::SUPERVISOR_NAME);
        let mut ids: Vec<&str> = threads.iter().map(|c| c.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), threads.len());
    }
}
