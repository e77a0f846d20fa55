use dioxus::prelude::*;
use shared_types::ClientProfile;
use shared_ui::{Card, CardContent, CardHeader, DetailItem, DetailList, PageHeader};

use super::scope::Scope;
use crate::session::{use_role, use_user_name};
use crate::store::use_store;

/// Clients a session may look up. Workers see the clients they are key
/// worker for.
fn visible_clients(clients: &[ClientProfile], scope: &Scope) -> Vec<ClientProfile> {
    clients
        .iter()
        .filter(|c| match scope {
            Scope::Everyone => true,
            Scope::Worker(name) => c.key_worker.as_deref() == Some(name.as_str()),
            Scope::Client(name) => &c.name == name,
        })
        .cloned()
        .collect()
}

#[component]
pub fn ClientList() -> Element {
    let store = use_store();
    let role = use_role();
    let name = use_user_name();

    let scope = Scope::for_session(role, &name);
    let mut clients = visible_clients(&store.clients.read(), &scope);
    clients.sort_by(|a, b| a.name.cmp(&b.name));
    let count = clients.len();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./pages.css") }
        PageHeader { title: "Clients", subtitle: format!("{count} people receiving care") }

        if clients.is_empty() {
            p { class: "muted", "No clients assigned to you." }
        }

        div { class: "card-grid",
            for client in clients.iter() {
                Card { key: "{client.id}",
                    CardHeader { title: client.name.clone() }
                    CardContent {
                        if let Some(plan) = &client.care_plan_summary {
                            p { class: "muted", "{plan}" }
                        }
                        DetailList {
                            for (label, value) in client.detail_rows() {
                                DetailItem { key: "{label}", label: label.to_string(), value: value.to_string() }
                            }
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
    use shared_types::mock;

    #[test]
    fn managers_see_every_client() {
        let all = mock::clients();
        assert_eq!(visible_clients(&all, &Scope::Everyone).len(), all.len());
    }

    #[test]
    fn clients_see_only_themselves() {
        let scope = Scope::Client(mock::CLIENT_NAME.to_string());
        let mine = visible_clients(&mock::clients(), &scope);
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].name, mock::CLIENT_NAME);
    }

    #[test]
    fn workers_see_clients_they_key_work() {
        let scope = Scope::Worker(mock::CARE_WORKER_NAME.to_string());
        let mine = visible_clients(&mock::clients(), &scope);
        assert!(mine
            .iter()
            .all(|c| c.key_worker.as_deref() == Some(mock::CARE_WORKER_NAME)));
    }
}
