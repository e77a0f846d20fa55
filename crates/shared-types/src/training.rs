use serde::{Deserialize, Serialize};

use crate::collection::Record;
use crate::stats::{HasStatus, Status};

/// A mandatory training course assigned to a staff member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingModule {
    pub id: String,
    pub title: String,
    pub assignee: String,
    pub due_on: String,
    pub duration_minutes: u32,
    pub status: TrainingStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrainingStatus {
    NotStarted,
    InProgress,
    Completed,
}

impl Status for TrainingStatus {
    const ALL: &'static [Self] = &[
        TrainingStatus::NotStarted,
        TrainingStatus::InProgress,
        TrainingStatus::Completed,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            TrainingStatus::NotStarted => "not-started",
            TrainingStatus::InProgress => "in-progress",
            TrainingStatus::Completed => "completed",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            TrainingStatus::NotStarted => "Not Started",
            TrainingStatus::InProgress => "In Progress",
            TrainingStatus::Completed => "Completed",
        }
    }
}

impl HasStatus for TrainingModule {
    type Status = TrainingStatus;

    fn status(&self) -> TrainingStatus {
        self.status
    }
}

impl Record for TrainingModule {
    fn id(&self) -> &str {
        &self.id
    }
}
