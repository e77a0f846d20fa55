use serde::{Deserialize, Serialize};

use crate::collection::Record;
use crate::stats::{HasStatus, Status};

/// One scheduled dose on a client's medication round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicationSchedule {
    pub id: String,
    pub client_name: String,
    pub medication: String,
    pub dosage: String,
    /// "HH:MM", 24-hour.
    pub time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    pub status: MedicationStatus,
    /// Who recorded the outcome, once recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub administered_by: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MedicationStatus {
    Due,
    Given,
    Missed,
    Refused,
}

impl Status for MedicationStatus {
    const ALL: &'static [Self] = &[
        MedicationStatus::Due,
        MedicationStatus::Given,
        MedicationStatus::Missed,
        MedicationStatus::Refused,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            MedicationStatus::Due => "due",
            MedicationStatus::Given => "given",
            MedicationStatus::Missed => "missed",
            MedicationStatus::Refused => "refused",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            MedicationStatus::Due => "Due",
            MedicationStatus::Given => "Given",
            MedicationStatus::Missed => "Missed",
            MedicationStatus::Refused => "Refused",
        }
    }
}

impl MedicationStatus {
    /// Outcomes a care worker can record against a due dose.
    pub const OUTCOMES: &'static [MedicationStatus] = &[
        MedicationStatus::Given,
        MedicationStatus::Missed,
        MedicationStatus::Refused,
    ];

    pub fn is_due(&self) -> bool {
        matches!(self, MedicationStatus::Due)
    }
}

impl HasStatus for MedicationSchedule {
    type Status = MedicationStatus;

    fn status(&self) -> MedicationStatus {
        self.status
    }
}

impl Record for MedicationSchedule {
    fn id(&self) -> &str {
        &self.id
    }
}
