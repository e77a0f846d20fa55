use serde::{Deserialize, Serialize};

use crate::collection::Record;
use crate::stats::{HasStatus, Status};

/// A free-text note a care worker keeps about a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub client_name: String,
    pub author: String,
    pub created_on: String,
    pub body: String,
    pub status: NoteStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NoteStatus {
    Open,
    FollowUp,
    Archived,
}

impl Status for NoteStatus {
    const ALL: &'static [Self] = &[NoteStatus::Open, NoteStatus::FollowUp, NoteStatus::Archived];

    fn as_str(&self) -> &'static str {
        match self {
            NoteStatus::Open => "open",
            NoteStatus::FollowUp => "follow-up",
            NoteStatus::Archived => "archived",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            NoteStatus::Open => "Open",
            NoteStatus::FollowUp => "Follow Up",
            NoteStatus::Archived => "Archived",
        }
    }
}

impl HasStatus for Note {
    type Status = NoteStatus;

    fn status(&self) -> NoteStatus {
        self.status
    }
}

impl Record for Note {
    fn id(&self) -> &str {
        &self.id
    }
}
