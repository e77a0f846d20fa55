//! Role to dashboard resolution

use pretty_assertions::assert_eq;
use shared_types::{DashboardVariant, Role, FALLBACK_DASHBOARD};

use crate::common::every_role;

#[test]
fn each_named_role_resolves_to_its_own_dashboard() {
    let cases = [
        (Role::Admin, DashboardVariant::Admin),
        (Role::Supervisor, DashboardVariant::Supervisor),
        (Role::CareWorker, DashboardVariant::CareWorker),
        (Role::Client, DashboardVariant::Client),
    ];
    for (role, expected) in cases {
        assert_eq!(DashboardVariant::for_role(Some(role)), expected, "{role:?}");
    }
}

#[test]
fn family_falls_back_to_care_worker_view() {
    assert_eq!(DashboardVariant::for_role(Some(Role::Family)), FALLBACK_DASHBOARD);
    assert_eq!(FALLBACK_DASHBOARD, DashboardVariant::CareWorker);
}

#[test]
fn missing_role_falls_back() {
    assert_eq!(DashboardVariant::for_role(None), FALLBACK_DASHBOARD);
}

#[test]
fn resolution_never_fails_and_always_has_a_title() {
    for role in every_role() {
        let variant = DashboardVariant::for_role(role);
        assert!(!variant.title().is_empty(), "{role:?}");
    }
}
