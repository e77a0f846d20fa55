pub mod admin;
pub mod care_worker;
pub mod client;
pub mod supervisor;

use dioxus::prelude::*;
use shared_types::{DashboardVariant, Visit};

use crate::session::use_role;

/// Role-adaptive dashboard. Family members and a missing role get the
/// care-worker layout.
#[component]
pub fn Dashboard() -> Element {
    let variant = DashboardVariant::for_role(use_role());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }
        match variant {
            DashboardVariant::Admin => rsx! { admin::AdminDashboard {} },
            DashboardVariant::Supervisor => rsx! { supervisor::SupervisorDashboard {} },
            DashboardVariant::CareWorker => rsx! { care_worker::CareWorkerDashboard {} },
            DashboardVariant::Client => rsx! { client::ClientDashboard {} },
        }
    }
}

/// Visits on `date`, earliest first.
pub(crate) fn visits_on<'a>(visits: &'a [Visit], date: &str) -> Vec<&'a Visit> {
    let mut day: Vec<&Visit> = visits.iter().filter(|v| v.date == date).collect();
    day.sort_by(|a, b| a.start_time.cmp(&b.start_time));
    day
}

#[component]
pub(crate) fn VisitRow(visit: Visit, show_worker: bool) -> Element {
    let when = crate::format_helpers::format_time_range(&visit.start_time, &visit.end_time);
    let who = if show_worker {
        visit.worker_name.clone()
    } else {
        visit.client_name.clone()
    };

    rsx! {
        li { class: "schedule-item",
            span { class: "schedule-time", "{when}" }
            span { class: "schedule-main",
                span { class: "schedule-who", "{who}" }
                span { class: "schedule-what", "{visit.service}" }
            }
            {super::status::status_badge(visit.status)}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::mock;

    #[test]
    fn visits_on_sorts_by_start() {
        let visits = mock::visits();
        let today = visits_on(&visits, mock::TODAY);
        let times: Vec<&str> = today.iter().map(|v| v.start_time.as_str()).collect();
        assert_eq!(times, vec!["08:00", "10:00", "13:30", "16:00", "18:00"]);
    }

    #[test]
    fn visits_on_empty_day() {
        assert!(visits_on(&mock::visits(), "2030-01-01").is_empty());
    }
}
