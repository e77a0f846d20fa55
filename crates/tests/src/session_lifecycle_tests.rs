//! Demo accounts and session identity

use pretty_assertions::assert_eq;
use shared_types::{mock, DashboardVariant, Role, Session, ALL_ROLES};
use std::collections::HashSet;

use crate::common::demo;

#[test]
fn one_demo_account_per_role() {
    let accounts = mock::demo_accounts();
    let roles: HashSet<Role> = accounts.iter().map(Session::role).collect();
    assert_eq!(accounts.len(), ALL_ROLES.len());
    assert_eq!(roles.len(), ALL_ROLES.len());
}

#[test]
fn demo_user_ids_are_unique() {
    let accounts = mock::demo_accounts();
    let ids: HashSet<&str> = accounts.iter().map(Session::user_id).collect();
    assert_eq!(ids.len(), accounts.len());
}

#[test]
fn demo_names_match_seeded_records() {
    assert_eq!(demo(Role::CareWorker).name(), mock::CARE_WORKER_NAME);
    assert_eq!(demo(Role::Client).name(), mock::CLIENT_NAME);
    assert!(mock::clients().iter().any(|c| c.name == demo(Role::Client).name()));
    assert!(mock::staff().iter().any(|s| s.name == demo(Role::Supervisor).name()));
}

#[test]
fn session_role_drives_dashboard() {
    let session = demo(Role::Supervisor);
    assert_eq!(
        DashboardVariant::for_role(Some(session.role())),
        DashboardVariant::Supervisor
    );
}

#[test]
fn replacing_a_session_changes_role() {
    let mut current = Some(demo(Role::CareWorker));
    assert_eq!(current.as_ref().map(Session::role), Some(Role::CareWorker));
    current = Some(demo(Role::Admin));
    assert_eq!(current.as_ref().map(Session::role), Some(Role::Admin));
    current = None;
    assert_eq!(current.as_ref().map(Session::role), None);
}

#[test]
fn session_serializes_with_kebab_role() {
    let json = serde_json::to_value(demo(Role::CareWorker)).unwrap();
    assert_eq!(json["role"], "care-worker");
    let back: Session = serde_json::from_value(json).unwrap();
    assert_eq!(back, demo(Role::CareWorker));
}

#[test]
fn initials_for_every_demo_account() {
    let initials: Vec<String> = mock::demo_accounts().iter().map(Session::initials).collect();
    assert_eq!(initials, vec!["AM", "PS", "SC", "ML", "DL"]);
}
