use serde::{Deserialize, Serialize};

use crate::collection::Record;
use crate::stats::{HasStatus, Status};

/// A reported safety or wellbeing incident.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Incident {
    pub id: String,
    pub client_name: String,
    pub reported_by: String,
    pub date: String,
    pub category: String,
    pub severity: Severity,
    pub description: String,
    pub status: IncidentStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IncidentStatus {
    Open,
    Investigating,
    Resolved,
}

impl Status for IncidentStatus {
    const ALL: &'static [Self] = &[
        IncidentStatus::Open,
        IncidentStatus::Investigating,
        IncidentStatus::Resolved,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            IncidentStatus::Open => "open",
            IncidentStatus::Investigating => "investigating",
            IncidentStatus::Resolved => "resolved",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            IncidentStatus::Open => "Open",
            IncidentStatus::Investigating => "Investigating",
            IncidentStatus::Resolved => "Resolved",
        }
    }
}

impl IncidentStatus {
    /// Next triage step, or `None` once resolved.
    pub fn advance(&self) -> Option<IncidentStatus> {
        match self {
            IncidentStatus::Open => Some(IncidentStatus::Investigating),
            IncidentStatus::Investigating => Some(IncidentStatus::Resolved),
            IncidentStatus::Resolved => None,
        }
    }
}

impl HasStatus for Incident {
    type Status = IncidentStatus;

    fn status(&self) -> IncidentStatus {
        self.status
    }
}

impl Record for Incident {
    fn id(&self) -> &str {
        &self.id
    }
}
