//! Menu tables, mobile nav sets, active matching and page titles

use pretty_assertions::assert_eq;
use shared_types::navigation::{
    active_item, can_open, is_active, known_paths, menu_for, mobile_nav_for, page_title, paths,
    CARE_WORKER_MENU, DEFAULT_MOBILE_NAV, MOBILE_NAV_MAX,
};
use shared_types::Role;
use std::collections::HashSet;

use crate::common::every_role;

#[test]
fn every_menu_path_is_a_known_route_for_its_role() {
    let global: HashSet<&str> = paths::ALL.iter().copied().collect();
    for role in every_role() {
        let known: HashSet<&str> = known_paths(role).into_iter().collect();
        assert!(known.is_subset(&global), "{role:?}");
        for item in menu_for(role).iter().chain(mobile_nav_for(role)) {
            assert!(known.contains(item.path), "{role:?} links to {}", item.path);
        }
    }
}

#[test]
fn pages_off_the_role_menu_cannot_be_opened() {
    for role in [Some(Role::Client), Some(Role::Family), Some(Role::CareWorker), None] {
        assert!(!can_open(role, paths::STAFF), "{role:?}");
    }
    assert!(can_open(Some(Role::Admin), paths::STAFF));
    assert!(can_open(Some(Role::Supervisor), paths::STAFF));
    assert!(!can_open(Some(Role::Admin), paths::MEDICATIONS));
}

#[test]
fn dashboard_is_always_open() {
    for role in every_role() {
        assert!(can_open(role, paths::DASHBOARD), "{role:?}");
    }
}

#[test]
fn menus_have_no_duplicate_paths() {
    for role in every_role() {
        let items = menu_for(role);
        let unique: HashSet<&str> = items.iter().map(|i| i.path).collect();
        assert_eq!(unique.len(), items.len(), "{role:?}");
    }
}

#[test]
fn mobile_nav_never_exceeds_five_entries() {
    for role in every_role() {
        assert!(mobile_nav_for(role).len() <= MOBILE_NAV_MAX, "{role:?}");
    }
}

#[test]
fn admin_has_no_mobile_nav() {
    assert!(mobile_nav_for(Some(Role::Admin)).is_empty());
}

#[test]
fn supervisor_family_and_no_role_share_the_default_mobile_nav() {
    for role in [Some(Role::Supervisor), Some(Role::Family), None] {
        assert_eq!(mobile_nav_for(role), DEFAULT_MOBILE_NAV, "{role:?}");
    }
}

#[test]
fn family_and_no_role_get_the_care_worker_menu() {
    assert_eq!(menu_for(Some(Role::Family)), CARE_WORKER_MENU);
    assert_eq!(menu_for(None), CARE_WORKER_MENU);
}

#[test]
fn client_menu_is_scoped_to_own_care() {
    let client: Vec<&str> = menu_for(Some(Role::Client)).iter().map(|i| i.path).collect();
    assert!(client.contains(&paths::FEEDBACK));
    assert!(!client.contains(&paths::STAFF));
    assert!(!client.contains(&paths::TIMESHEETS));
}

#[test]
fn active_matching_is_exact() {
    assert!(is_active(paths::MESSAGES, "/dashboard/messages"));
    assert!(!is_active(paths::DASHBOARD, "/dashboard/messages"));
    assert!(!is_active(paths::MESSAGES, "/dashboard/messages/"));
}

#[test]
fn active_item_picks_the_matching_entry() {
    let item = active_item(menu_for(Some(Role::Supervisor)), paths::INCIDENTS);
    assert_eq!(item.map(|i| i.label), Some("Incidents"));
    assert_eq!(active_item(menu_for(Some(Role::Client)), paths::STAFF), None);
}

#[test]
fn page_title_follows_the_role_menu() {
    assert_eq!(page_title(Some(Role::Client), paths::VISITS), "My Visits");
    assert_eq!(page_title(Some(Role::CareWorker), paths::VISITS), "Visits");
}

#[test]
fn page_title_defaults_to_dashboard() {
    assert_eq!(page_title(Some(Role::Client), "/dashboard/staff"), "Dashboard");
    assert_eq!(page_title(None, "/nowhere"), "Dashboard");
}
