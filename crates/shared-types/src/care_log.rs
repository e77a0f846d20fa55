use serde::{Deserialize, Serialize};

use crate::collection::Record;
use crate::stats::{HasStatus, Status};

/// Daily record of the care delivered during a visit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareLog {
    pub id: String,
    pub client_name: String,
    pub worker_name: String,
    pub date: String,
    pub summary: String,
    /// Mood observed during the visit, free text ("Cheerful", "Tired").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
    pub status: CareLogStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CareLogStatus {
    Draft,
    Submitted,
    Reviewed,
}

impl Status for CareLogStatus {
    const ALL: &'static [Self] = &[
        CareLogStatus::Draft,
        CareLogStatus::Submitted,
        CareLogStatus::Reviewed,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            CareLogStatus::Draft => "draft",
            CareLogStatus::Submitted => "submitted",
            CareLogStatus::Reviewed => "reviewed",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            CareLogStatus::Draft => "Draft",
            CareLogStatus::Submitted => "Submitted",
            CareLogStatus::Reviewed => "Reviewed",
        }
    }
}

impl HasStatus for CareLog {
    type Status = CareLogStatus;

    fn status(&self) -> CareLogStatus {
        self.status
    }
}

impl Record for CareLog {
    fn id(&self) -> &str {
        &self.id
    }
}
