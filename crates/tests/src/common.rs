use shared_types::{mock, Role, Session};

/// Every role the navigation tables must handle, including no session.
pub fn every_role() -> Vec<Option<Role>> {
    let mut roles: Vec<Option<Role>> = shared_types::ALL_ROLES.iter().copied().map(Some).collect();
    roles.push(None);
    roles
}

/// The seeded demo session for `role`.
pub fn demo(role: Role) -> Session {
    mock::demo_account(role).unwrap_or_else(|| panic!("no demo account for {role:?}"))
}
