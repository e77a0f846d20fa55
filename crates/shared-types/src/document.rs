use serde::{Deserialize, Serialize};

use crate::collection::Record;
use crate::stats::{HasStatus, Status};

/// A compliance document held on file for a staff member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub title: String,
    pub owner_name: String,
    pub category: String,
    pub uploaded_on: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_on: Option<String>,
    pub status: DocumentStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentStatus {
    Valid,
    Expiring,
    Expired,
}

impl Status for DocumentStatus {
    const ALL: &'static [Self] = &[
        DocumentStatus::Valid,
        DocumentStatus::Expiring,
        DocumentStatus::Expired,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            DocumentStatus::Valid => "valid",
            DocumentStatus::Expiring => "expiring",
            DocumentStatus::Expired => "expired",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            DocumentStatus::Valid => "Valid",
            DocumentStatus::Expiring => "Expiring Soon",
            DocumentStatus::Expired => "Expired",
        }
    }
}

impl HasStatus for Document {
    type Status = DocumentStatus;

    fn status(&self) -> DocumentStatus {
        self.status
    }
}

impl Record for Document {
    fn id(&self) -> &str {
        &self.id
    }
}
