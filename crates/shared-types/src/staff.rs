use serde::{Deserialize, Serialize};

use crate::collection::Record;
use crate::session::Role;
use crate::stats::{HasStatus, Status};

/// A member of the agency's workforce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: String,
    pub name: String,
    pub role: Role,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub start_date: String,
    pub status: StaffStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StaffStatus {
    Active,
    OnLeave,
    Inactive,
}

impl Status for StaffStatus {
    const ALL: &'static [Self] = &[StaffStatus::Active, StaffStatus::OnLeave, StaffStatus::Inactive];

    fn as_str(&self) -> &'static str {
        match self {
            StaffStatus::Active => "active",
            StaffStatus::OnLeave => "on-leave",
            StaffStatus::Inactive => "inactive",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            StaffStatus::Active => "Active",
            StaffStatus::OnLeave => "On Leave",
            StaffStatus::Inactive => "Inactive",
        }
    }
}

impl HasStatus for StaffMember {
    type Status = StaffStatus;

    fn status(&self) -> StaffStatus {
        self.status
    }
}

impl Record for StaffMember {
    fn id(&self) -> &str {
        &self.id
    }
}
