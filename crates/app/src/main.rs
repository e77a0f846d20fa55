use dioxus::prelude::*;

mod config;
mod format_helpers;
mod routes;
mod session;
mod store;

use routes::Route;
use session::SessionState;
use store::CareStore;

const THEME: Asset = asset!("/assets/theme.css");

fn main() {
    let config = config::load();
    if let Err(e) = dioxus::logger::init(config::log_level(config)) {
        eprintln!("[logging] subscriber already installed: {e}");
    }
    tracing::info!(app = %config.app.name, features = ?config.features, "starting");

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(SessionState::new);
    use_context_provider(CareStore::seeded);
    let app_name = config::config().app.name.clone();

    rsx! {
        document::Title { "{app_name}" }
        document::Link { rel: "stylesheet", href: THEME }
        Router::<Route> {}
    }
}
