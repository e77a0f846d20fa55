use serde::{Deserialize, Serialize};

use crate::session::Role;

/// The dashboard layouts the application can render.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DashboardVariant {
    Admin,
    CareWorker,
    Supervisor,
    Client,
}

/// Roles with a dedicated dashboard. Roles missing here use [`FALLBACK_DASHBOARD`].
const DASHBOARD_BY_ROLE: &[(Role, DashboardVariant)] = &[
    (Role::Admin, DashboardVariant::Admin),
    (Role::CareWorker, DashboardVariant::CareWorker),
    (Role::Supervisor, DashboardVariant::Supervisor),
    (Role::Client, DashboardVariant::Client),
];

/// Served to family members and to a missing role.
///
/// Kept for parity with existing behavior; an explicit unauthorized view
/// would be the stricter choice.
pub const FALLBACK_DASHBOARD: DashboardVariant = DashboardVariant::CareWorker;

impl DashboardVariant {
    /// Resolve the dashboard for a role. Never fails.
    pub fn for_role(role: Option<Role>) -> Self {
        role.and_then(|role| {
            DASHBOARD_BY_ROLE
                .iter()
                .find(|(r, _)| *r == role)
                .map(|(_, variant)| *variant)
        })
        .unwrap_or(FALLBACK_DASHBOARD)
    }

    pub fn title(&self) -> &'static str {
        match self {
            DashboardVariant::Admin => "Agency Overview",
            DashboardVariant::CareWorker => "My Day",
            DashboardVariant::Supervisor => "Team Overview",
            DashboardVariant::Client => "My Care",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_roles_get_named_dashboards() {
        assert_eq!(DashboardVariant::for_role(Some(Role::Admin)), DashboardVariant::Admin);
        assert_eq!(
            DashboardVariant::for_role(Some(Role::CareWorker)),
            DashboardVariant::CareWorker
        );
        assert_eq!(
            DashboardVariant::for_role(Some(Role::Supervisor)),
            DashboardVariant::Supervisor
        );
        assert_eq!(DashboardVariant::for_role(Some(Role::Client)), DashboardVariant::Client);
    }

    #[test]
    fn family_falls_back_to_care_worker() {
        assert_eq!(
            DashboardVariant::for_role(Some(Role::Family)),
            DashboardVariant::CareWorker
        );
    }

    #[test]
    fn missing_role_falls_back_to_care_worker() {
        assert_eq!(DashboardVariant::for_role(None), DashboardVariant::CareWorker);
    }

    #[test]
    fn unparseable_role_string_falls_back() {
        let role = Role::parse("auditor");
        assert_eq!(DashboardVariant::for_role(role), FALLBACK_DASHBOARD);
    }
}
