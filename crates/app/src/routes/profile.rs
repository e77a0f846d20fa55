use dioxus::prelude::*;
use shared_types::{ClientProfile, Role, Session, StaffMember};
use shared_ui::{Avatar, Card, CardContent, CardHeader, DetailItem, DetailList, PageHeader};

use crate::format_helpers::format_date_human;
use crate::session::use_session;
use crate::store::use_store;

/// Rows for a staff record. A missing phone number is left out.
fn staff_rows(member: &StaffMember) -> Vec<(&'static str, String)> {
    let mut rows = vec![
        ("Job Role", member.role.display_name().to_string()),
        ("Email", member.email.clone()),
    ];
    if let Some(phone) = &member.phone {
        rows.push(("Phone", phone.clone()));
    }
    rows.push(("Started", format_date_human(&member.start_date)));
    rows
}

#[component]
pub fn Profile() -> Element {
    let session = use_session();
    let store = use_store();

    let Some(current) = session.current.read().clone() else {
        return rsx! {};
    };

    let client: Option<ClientProfile> = match current.role() {
        Role::Client => store
            .clients
            .read()
            .iter()
            .find(|c| c.name == current.name())
            .cloned(),
        _ => None,
    };
    let staff: Option<StaffMember> = store
        .staff
        .read()
        .iter()
        .find(|s| s.name == current.name())
        .cloned();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./pages.css") }
        PageHeader { title: "Profile" }

        AccountCard { session: current.clone() }

        if let Some(client) = client {
            div { class: "page-section",
                Card {
                    CardHeader { title: "Care details" }
                    CardContent {
                        DetailList {
                            for (label, value) in client.detail_rows() {
                                DetailItem { key: "{label}", label: label.to_string(), value: value.to_string() }
                            }
                        }
                        if let Some(plan) = &client.care_plan_summary {
                            p { class: "muted", "{plan}" }
                        }
                    }
                }
            }
        }

        if let Some(member) = staff {
            div { class: "page-section",
                Card {
                    CardHeader { title: "Employment" }
                    CardContent {
                        DetailList {
                            for (label, value) in staff_rows(&member) {
                                DetailItem { key: "{label}", label: label.to_string(), value }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn AccountCard(session: Session) -> Element {
    let role = session.role().display_name().to_string();

    rsx! {
        Card {
            CardContent {
                div { class: "profile-identity",
                    Avatar { initials: session.initials(), large: true }
                    div { class: "cell-stack",
                        strong { "{session.name()}" }
                        span { class: "cell-sub", "{role}" }
                    }
                }
                DetailList {
                    DetailItem { label: "Email", value: session.email().to_string() }
                    DetailItem { label: "User ID", value: session.user_id().to_string() }
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
    fn staff_rows_skip_missing_phone() {
        let mut member = mock::staff()
            .into_iter()
            .find(|s| s.name == mock::CARE_WORKER_NAME)
            .unwrap();
        member.phone = None;
        let labels: Vec<&str> = staff_rows(&member).iter().map(|(l, _)| *l).collect();
        assert_eq!(labels, vec!["Job Role", "Email", "Started"]);
    }
}
