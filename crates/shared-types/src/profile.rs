use serde::{Deserialize, Serialize};

use crate::collection::Record;

/// Care recipient profile. Every contact detail is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientProfile {
    pub id: String,
    pub name: String,
    pub date_of_birth: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emergency_contact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gp_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub care_plan_summary: Option<String>,
    /// Primary care worker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_worker: Option<String>,
}

impl ClientProfile {
    /// Label/value rows for the details card. Absent fields produce no row.
    pub fn detail_rows(&self) -> Vec<(&'static str, &str)> {
        let optional = [
            ("Phone", &self.phone),
            ("Address", &self.address),
            ("Emergency Contact", &self.emergency_contact),
            ("GP", &self.gp_name),
            ("Key Worker", &self.key_worker),
        ];
        let mut rows = vec![("Date of Birth", self.date_of_birth.as_str())];
        rows.extend(
            optional
                .into_iter()
                .filter_map(|(label, value)| value.as_deref().map(|v| (label, v))),
        );
        rows
    }
}

impl Record for ClientProfile {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_are_omitted() {
        let profile = ClientProfile {
            id: "client-1".into(),
            name: "Margaret Lewis".into(),
            date_of_birth: "1941-06-02".into(),
            phone: Some("01632 960001".into()),
            address: None,
            emergency_contact: None,
            gp_name: Some("Dr. Okafor".into()),
            care_plan_summary: None,
            key_worker: None,
        };
        let labels: Vec<&str> = profile.detail_rows().iter().map(|(l, _)| *l).collect();
        assert_eq!(labels, vec!["Date of Birth", "Phone", "GP"]);
    }
}
