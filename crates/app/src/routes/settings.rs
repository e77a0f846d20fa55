use dioxus::prelude::*;
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardHeader, DetailItem,
    DetailList, PageHeader,
};

use crate::config::{config, log_level};
use crate::routes::Route;
use crate::session::use_session;

/// Read-only view of the loaded configuration plus a sign-out action.
#[component]
pub fn Settings() -> Element {
    let mut session = use_session();
    let cfg = config();
    let level = log_level(cfg).to_string();
    let mobile_nav = cfg.features.mobile_nav;

    let account = session
        .current
        .read()
        .as_ref()
        .map(|s| format!("{} ({})", s.name(), s.role().display_name()))
        .unwrap_or_default();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./pages.css") }
        PageHeader { title: "Settings", subtitle: "Application configuration" }

        Card {
            CardHeader { title: "Application" }
            CardContent {
                DetailList {
                    DetailItem { label: "Name", value: cfg.app.name.clone() }
                    DetailItem { label: "Tagline", value: cfg.app.tagline.clone() }
                    DetailItem { label: "Log level", value: level }
                }
            }
        }

        div { class: "page-section",
            Card {
                CardHeader { title: "Features" }
                CardContent {
                    div { class: "row-actions",
                        span { class: "settings-flag", "mobile_nav" }
                        if mobile_nav {
                            Badge { variant: BadgeVariant::Success, "On" }
                        } else {
                            Badge { variant: BadgeVariant::Neutral, "Off" }
                        }
                    }
                }
            }
        }

        div { class: "page-section",
            Card {
                CardHeader { title: "Account" }
                CardContent {
                    p { "Signed in as {account}" }
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| {
                            session.sign_out();
                            navigator().replace(Route::Login {});
                        },
                        "Sign out"
                    }
                }
            }
        }
    }
}
