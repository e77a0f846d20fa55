//! Status badges and status filter tabs shared by the list pages.

use dioxus::prelude::*;
use shared_types::{Status, StatusCounts};
use shared_ui::{Badge, BadgeVariant, TabOption};

/// Tab value that shows every record.
pub const ALL_TAB: &str = "all";

/// Badge colour for a status key. Keys are shared across record types.
pub fn tone(key: &str) -> BadgeVariant {
    match key {
        "completed" | "given" | "approved" | "valid" | "reviewed" | "resolved" | "active"
        | "acknowledged" => BadgeVariant::Success,
        "scheduled" | "in-progress" | "submitted" | "investigating" | "received" => {
            BadgeVariant::Info
        }
        "pending" | "due" | "expiring" | "draft" | "open" | "follow-up" | "not-started"
        | "on-leave" => BadgeVariant::Warning,
        "cancelled" | "missed" | "refused" | "rejected" | "expired" => BadgeVariant::Danger,
        _ => BadgeVariant::Neutral,
    }
}

pub fn status_badge<S: Status>(status: S) -> Element {
    let label = status.label();
    rsx! {
        Badge { variant: tone(status.as_str()), "{label}" }
    }
}

/// "All" followed by one tab per tallied status, each with its count.
pub fn status_tabs<S: Status>(counts: &StatusCounts<S>) -> Vec<TabOption> {
    let mut tabs = vec![TabOption::new(ALL_TAB, "All").with_count(counts.total())];
    tabs.extend(
        counts
            .iter()
            .map(|(status, n)| TabOption::new(status.as_str(), status.label()).with_count(n)),
    );
    tabs
}

pub fn in_tab<S: Status>(selected: &str, status: S) -> bool {
    selected == ALL_TAB || selected == status.as_str()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::{mock, DocumentStatus, MedicationStatus, VisitStatus};

    #[test]
    fn tabs_lead_with_all() {
        let counts = StatusCounts::tally(&mock::visits());
        let tabs = status_tabs(&counts);
        assert_eq!(tabs[0].value, ALL_TAB);
        assert_eq!(tabs[0].count, Some(8));
        let values: Vec<&str> = tabs.iter().skip(1).map(|t| t.value.as_str()).collect();
        assert_eq!(values, vec!["scheduled", "in-progress", "completed", "cancelled"]);
        let per_status: usize = tabs.iter().skip(1).filter_map(|t| t.count).sum();
        assert_eq!(per_status, 8);
    }

    #[test]
    fn tab_filter() {
        assert!(in_tab(ALL_TAB, VisitStatus::Cancelled));
        assert!(in_tab("cancelled", VisitStatus::Cancelled));
        assert!(!in_tab("scheduled", VisitStatus::Cancelled));
    }

    #[test]
    fn tones() {
        assert_eq!(tone(MedicationStatus::Refused.as_str()), BadgeVariant::Danger);
        assert_eq!(tone(DocumentStatus::Expiring.as_str()), BadgeVariant::Warning);
        assert_eq!(tone("archived"), BadgeVariant::Neutral);
    }
}
