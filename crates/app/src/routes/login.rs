use dioxus::prelude::*;
use shared_types::mock::demo_accounts;
use shared_types::Session;
use shared_ui::{Avatar, Card, CardContent, CardHeader};

use crate::config::config;
use crate::routes::Route;
use crate::session::use_session;

/// Demo sign-in. Each seeded account opens a session for its role.
#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let settings = config();
    let accounts = use_hook(demo_accounts);

    // Reads the session signal, so the effect reruns on sign in.
    use_effect(move || {
        if session.is_signed_in() {
            navigator().replace(Route::Dashboard {});
        }
    });

    let app_name = settings.app.name.clone();
    let tagline = settings.app.tagline.clone();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "login-page",
            div { class: "login-brand",
                h1 { class: "login-title", "{app_name}" }
                p { class: "login-tagline", "{tagline}" }
            }

            Card { class: "login-card",
                CardHeader {
                    title: "Choose a demo account",
                    description: "Each account signs in with a different role.",
                }
                CardContent {
                    ul { class: "login-accounts",
                        for account in accounts.iter().cloned() {
                            li { key: "{account.user_id()}",
                                AccountButton {
                                    account: account.clone(),
                                    onselect: move |chosen: Session| {
                                        session.sign_in(chosen);
                                        navigator().replace(Route::Dashboard {});
                                    },
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
fn AccountButton(account: Session, onselect: EventHandler<Session>) -> Element {
    let initials = account.initials();
    let name = account.name().to_string();
    let email = account.email().to_string();
    let role = account.role().display_name();

    rsx! {
        button {
            class: "login-account",
            r#type: "button",
            onclick: move |_| onselect.call(account.clone()),
            Avatar { initials }
            span { class: "login-account-text",
                span { class: "login-account-name", "{name}" }
                span { class: "login-account-email", "{email}" }
            }
            span { class: "login-account-role", "{role}" }
        }
    }
}
