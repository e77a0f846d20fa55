use serde::{Deserialize, Serialize};

use crate::collection::Record;
use crate::stats::{HasStatus, Status};

/// Highest rating a client can give.
pub const MAX_RATING: u8 = 5;

/// Feedback a client leaves about their care.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    pub id: String,
    pub client_name: String,
    pub submitted_on: String,
    /// 1 to [`MAX_RATING`].
    pub rating: u8,
    pub comment: String,
    pub status: FeedbackStatus,
}

impl Feedback {
    /// Filled and empty stars for display, e.g. "★★★★☆".
    pub fn stars(&self) -> String {
        let filled = self.rating.min(MAX_RATING) as usize;
        let empty = MAX_RATING as usize - filled;
        format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeedbackStatus {
    Received,
    Acknowledged,
}

impl Status for FeedbackStatus {
    const ALL: &'static [Self] = &[FeedbackStatus::Received, FeedbackStatus::Acknowledged];

    fn as_str(&self) -> &'static str {
        match self {
            FeedbackStatus::Received => "received",
            FeedbackStatus::Acknowledged => "acknowledged",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            FeedbackStatus::Received => "Received",
            FeedbackStatus::Acknowledged => "Acknowledged",
        }
    }
}

impl HasStatus for Feedback {
    type Status = FeedbackStatus;

    fn status(&self) -> FeedbackStatus {
        self.status
    }
}

impl Record for Feedback {
    fn id(&self) -> &str {
        &self.id
    }
}
