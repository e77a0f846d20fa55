use serde::{Deserialize, Serialize};

use crate::collection::Record;
use crate::stats::{HasStatus, Status};

/// A scheduled home-care visit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Visit {
    pub id: String,
    pub client_name: String,
    pub worker_name: String,
    /// ISO date, e.g. "2025-03-14".
    pub date: String,
    /// "HH:MM", 24-hour.
    pub start_time: String,
    pub end_time: String,
    pub service: String,
    pub address: String,
    pub status: VisitStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VisitStatus {
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

impl Status for VisitStatus {
    const ALL: &'static [Self] = &[
        VisitStatus::Scheduled,
        VisitStatus::InProgress,
        VisitStatus::Completed,
        VisitStatus::Cancelled,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            VisitStatus::Scheduled => "scheduled",
            VisitStatus::InProgress => "in-progress",
            VisitStatus::Completed => "completed",
            VisitStatus::Cancelled => "cancelled",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            VisitStatus::Scheduled => "Scheduled",
            VisitStatus::InProgress => "In Progress",
            VisitStatus::Completed => "Completed",
            VisitStatus::Cancelled => "Cancelled",
        }
    }
}

impl VisitStatus {
    /// A care worker may check in to a scheduled visit.
    pub fn can_start(&self) -> bool {
        matches!(self, VisitStatus::Scheduled)
    }

    pub fn can_complete(&self) -> bool {
        matches!(self, VisitStatus::InProgress)
    }

    /// Only visits that have not begun can be cancelled.
    pub fn can_cancel(&self) -> bool {
        matches!(self, VisitStatus::Scheduled)
    }

    /// Scheduled or running visits still need attention.
    pub fn is_open(&self) -> bool {
        matches!(self, VisitStatus::Scheduled | VisitStatus::InProgress)
    }
}

impl HasStatus for Visit {
    type Status = VisitStatus;

    fn status(&self) -> VisitStatus {
        self.status
    }
}

impl Record for Visit {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_kebab_case() {
        let json = serde_json::to_string(&VisitStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
        assert_eq!(VisitStatus::InProgress.as_str(), "in-progress");
    }

    #[test]
    fn transitions_follow_visit_lifecycle() {
        assert!(VisitStatus::Scheduled.can_start());
        assert!(VisitStatus::Scheduled.can_cancel());
        assert!(!VisitStatus::Scheduled.can_complete());
        assert!(VisitStatus::InProgress.can_complete());
        assert!(!VisitStatus::InProgress.can_cancel());
        assert!(!VisitStatus::Completed.can_start());
        assert!(!VisitStatus::Cancelled.can_start());
    }

    #[test]
    fn open_visits() {
        let open: Vec<_> = VisitStatus::ALL.iter().filter(|s| s.is_open()).collect();
        assert_eq!(open, vec![&VisitStatus::Scheduled, &VisitStatus::InProgress]);
    }

    #[test]
    fn missing_notes_deserialize_as_none() {
        let json = r#"{
            "id": "visit-1", "client_name": "Margaret Lewis", "worker_name": "Sam Carter",
            "date": "2025-03-14", "start_time": "09:00", "end_time": "10:00",
            "service": "Personal care", "address": "12 Elm Road", "status": "scheduled"
        }"#;
        let visit: Visit = serde_json::from_str(json).unwrap();
        assert_eq!(visit.notes, None);
        assert_eq!(visit.status, VisitStatus::Scheduled);
    }
}
