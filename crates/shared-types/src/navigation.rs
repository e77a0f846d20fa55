//! Role-keyed navigation tables.
//!
//! The sidebar, the mobile drawer and the bottom bar all read from
//! [`menu_for`] and [`mobile_nav_for`]; none of them branch on role.

use crate::session::Role;

/// Route paths shared between the navigation tables and the router.
pub mod paths {
    pub const LOGIN: &str = "/login";
    pub const DASHBOARD: &str = "/dashboard";
    pub const VISITS: &str = "/dashboard/visits";
    pub const CARE_LOGS: &str = "/dashboard/care-logs";
    pub const INCIDENTS: &str = "/dashboard/incidents";
    pub const MEDICATIONS: &str = "/dashboard/medications";
    pub const TIMESHEETS: &str = "/dashboard/timesheets";
    pub const NOTES: &str = "/dashboard/notes";
    pub const DOCUMENTS: &str = "/dashboard/documents";
    pub const TRAINING: &str = "/dashboard/training";
    pub const MESSAGES: &str = "/dashboard/messages";
    pub const STAFF: &str = "/dashboard/staff";
    pub const CLIENTS: &str = "/dashboard/clients";
    pub const FEEDBACK: &str = "/dashboard/feedback";
    pub const PROFILE: &str = "/dashboard/profile";
    pub const SETTINGS: &str = "/dashboard/settings";

    /// Every page reachable from a navigation surface.
    pub const ALL: &[&str] = &[
        DASHBOARD,
        VISITS,
        CARE_LOGS,
        INCIDENTS,
        MEDICATIONS,
        TIMESHEETS,
        NOTES,
        DOCUMENTS,
        TRAINING,
        MESSAGES,
        STAFF,
        CLIENTS,
        FEEDBACK,
        PROFILE,
        SETTINGS,
    ];
}

/// Icon slot for a menu entry. The UI maps each variant to a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    Dashboard,
    Calendar,
    Clipboard,
    Alert,
    Pill,
    Clock,
    Note,
    Folder,
    Training,
    Messages,
    Staff,
    Clients,
    Feedback,
    Profile,
    Settings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub icon: NavIcon,
    pub label: &'static str,
    pub path: &'static str,
}

const fn item(icon: NavIcon, label: &'static str, path: &'static str) -> NavItem {
    NavItem { icon, label, path }
}

pub const ADMIN_MENU: &[NavItem] = &[
    item(NavIcon::Dashboard, "Dashboard", paths::DASHBOARD),
    item(NavIcon::Staff, "Staff", paths::STAFF),
    item(NavIcon::Clients, "Clients", paths::CLIENTS),
    item(NavIcon::Calendar, "Visits", paths::VISITS),
    item(NavIcon::Clock, "Timesheets", paths::TIMESHEETS),
    item(NavIcon::Folder, "Documents", paths::DOCUMENTS),
    item(NavIcon::Training, "Training", paths::TRAINING),
    item(NavIcon::Messages, "Messages", paths::MESSAGES),
    item(NavIcon::Settings, "Settings", paths::SETTINGS),
];

pub const SUPERVISOR_MENU: &[NavItem] = &[
    item(NavIcon::Dashboard, "Dashboard", paths::DASHBOARD),
    item(NavIcon::Staff, "Staff", paths::STAFF),
    item(NavIcon::Clients, "Clients", paths::CLIENTS),
    item(NavIcon::Calendar, "Visits", paths::VISITS),
    item(NavIcon::Clipboard, "Care Logs", paths::CARE_LOGS),
    item(NavIcon::Alert, "Incidents", paths::INCIDENTS),
    item(NavIcon::Clock, "Timesheets", paths::TIMESHEETS),
    item(NavIcon::Messages, "Messages", paths::MESSAGES),
    item(NavIcon::Settings, "Settings", paths::SETTINGS),
];

pub const CARE_WORKER_MENU: &[NavItem] = &[
    item(NavIcon::Dashboard, "Dashboard", paths::DASHBOARD),
    item(NavIcon::Calendar, "Visits", paths::VISITS),
    item(NavIcon::Clipboard, "Care Logs", paths::CARE_LOGS),
    item(NavIcon::Pill, "Medications", paths::MEDICATIONS),
    item(NavIcon::Clock, "Timesheets", paths::TIMESHEETS),
    item(NavIcon::Note, "Notes", paths::NOTES),
    item(NavIcon::Folder, "Documents", paths::DOCUMENTS),
    item(NavIcon::Training, "Training", paths::TRAINING),
    item(NavIcon::Messages, "Messages", paths::MESSAGES),
    item(NavIcon::Profile, "Profile", paths::PROFILE),
];

pub const CLIENT_MENU: &[NavItem] = &[
    item(NavIcon::Dashboard, "Dashboard", paths::DASHBOARD),
    item(NavIcon::Calendar, "My Visits", paths::VISITS),
    item(NavIcon::Pill, "Medications", paths::MEDICATIONS),
    item(NavIcon::Messages, "Messages", paths::MESSAGES),
    item(NavIcon::Feedback, "Feedback", paths::FEEDBACK),
    item(NavIcon::Profile, "Profile", paths::PROFILE),
];

pub const CARE_WORKER_MOBILE_NAV: &[NavItem] = &[
    item(NavIcon::Dashboard, "Home", paths::DASHBOARD),
    item(NavIcon::Calendar, "Visits", paths::VISITS),
    item(NavIcon::Clock, "Hours", paths::TIMESHEETS),
    item(NavIcon::Messages, "Messages", paths::MESSAGES),
    item(NavIcon::Profile, "Profile", paths::PROFILE),
];

pub const CLIENT_MOBILE_NAV: &[NavItem] = &[
    item(NavIcon::Dashboard, "Home", paths::DASHBOARD),
    item(NavIcon::Calendar, "Visits", paths::VISITS),
    item(NavIcon::Messages, "Messages", paths::MESSAGES),
];

/// Bottom bar for supervisors, family members and unknown roles.
pub const DEFAULT_MOBILE_NAV: &[NavItem] = &[
    item(NavIcon::Dashboard, "Home", paths::DASHBOARD),
    item(NavIcon::Calendar, "Visits", paths::VISITS),
    item(NavIcon::Clock, "Timesheets", paths::TIMESHEETS),
    item(NavIcon::Messages, "Messages", paths::MESSAGES),
    item(NavIcon::Settings, "Settings", paths::SETTINGS),
];

/// Upper bound on bottom bar entries for any role.
pub const MOBILE_NAV_MAX: usize = 5;

const MENU_BY_ROLE: &[(Role, &[NavItem])] = &[
    (Role::Admin, ADMIN_MENU),
    (Role::Supervisor, SUPERVISOR_MENU),
    (Role::CareWorker, CARE_WORKER_MENU),
    (Role::Client, CLIENT_MENU),
];

/// Admin is absent from the mobile table on purpose: the bottom bar is empty.
const MOBILE_NAV_BY_ROLE: &[(Role, &[NavItem])] = &[
    (Role::Admin, &[]),
    (Role::CareWorker, CARE_WORKER_MOBILE_NAV),
    (Role::Client, CLIENT_MOBILE_NAV),
];

fn lookup(table: &[(Role, &'static [NavItem])], role: Option<Role>) -> Option<&'static [NavItem]> {
    let role = role?;
    table.iter().find(|(r, _)| *r == role).map(|(_, items)| *items)
}

/// Sidebar and drawer entries for a role. Family and missing roles get the
/// care-worker menu, matching the dashboard fallback.
pub fn menu_for(role: Option<Role>) -> &'static [NavItem] {
    lookup(MENU_BY_ROLE, role).unwrap_or(CARE_WORKER_MENU)
}

/// Bottom bar entries for a role. Empty for admins.
pub fn mobile_nav_for(role: Option<Role>) -> &'static [NavItem] {
    lookup(MOBILE_NAV_BY_ROLE, role).unwrap_or(DEFAULT_MOBILE_NAV)
}

/// Exact path comparison. `/dashboard` is not active under `/dashboard/messages`.
pub fn is_active(item_path: &str, current_path: &str) -> bool {
    item_path == current_path
}

/// The menu entry matching the current path, if any.
pub fn active_item(items: &[NavItem], current_path: &str) -> Option<NavItem> {
    items
        .iter()
        .find(|item| is_active(item.path, current_path))
        .copied()
}

/// Heading for the top bar: the active entry's label, else "Dashboard".
pub fn page_title(role: Option<Role>, current_path: &str) -> &'static str {
    active_item(menu_for(role), current_path)
        .map(|item| item.label)
        .unwrap_or("Dashboard")
}

/// Reachable from every signed-in layout: the home page and the profile
/// link in the top bar.
const ALWAYS_OPEN: &[&str] = &[paths::DASHBOARD, paths::PROFILE];

/// Paths `role` may open: its sidebar menu, its mobile nav and the pages
/// every layout links to. Order follows the menu.
pub fn known_paths(role: Option<Role>) -> Vec<&'static str> {
    let mut known: Vec<&'static str> = Vec::new();
    let linked = menu_for(role)
        .iter()
        .chain(mobile_nav_for(role))
        .map(|item| item.path)
        .chain(ALWAYS_OPEN.iter().copied());
    for path in linked {
        if !known.contains(&path) {
            known.push(path);
        }
    }
    known
}

/// Whether `role` may open `path`. Anything outside [`known_paths`] is
/// sent back to the dashboard.
pub fn can_open(role: Option<Role>, path: &str) -> bool {
    known_paths(role).iter().any(|known| *known == path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::ALL_ROLES;

    #[test]
    fn each_role_has_a_non_empty_menu() {
        for role in ALL_ROLES {
            assert!(!menu_for(Some(*role)).is_empty(), "{role:?}");
        }
        assert!(!menu_for(None).is_empty());
    }

    #[test]
    fn menus_start_at_dashboard() {
        for role in ALL_ROLES {
            assert_eq!(menu_for(Some(*role))[0].path, paths::DASHBOARD);
        }
    }

    #[test]
    fn menu_paths_are_known() {
        for role in ALL_ROLES {
            let known = known_paths(Some(*role));
            for entry in menu_for(Some(*role)).iter().chain(mobile_nav_for(Some(*role))) {
                assert!(paths::ALL.contains(&entry.path), "{}", entry.path);
                assert!(known.contains(&entry.path), "{role:?}: {}", entry.path);
            }
        }
    }

    #[test]
    fn client_cannot_open_staff_pages() {
        let role = Some(Role::Client);
        assert!(!can_open(role, paths::STAFF));
        assert!(!can_open(role, paths::TIMESHEETS));
        assert!(can_open(role, paths::FEEDBACK));
        assert!(can_open(role, paths::DASHBOARD));
    }

    #[test]
    fn topbar_profile_is_open_to_every_role() {
        for role in ALL_ROLES {
            assert!(can_open(Some(*role), paths::PROFILE), "{role:?}");
        }
        assert!(can_open(None, paths::PROFILE));
    }

    #[test]
    fn known_paths_have_no_duplicates() {
        let known = known_paths(Some(Role::CareWorker));
        let mut deduped = known.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(known.len(), deduped.len());
    }

    #[test]
    fn menu_paths_are_unique_per_role() {
        for role in ALL_ROLES {
            let items = menu_for(Some(*role));
            for (i, a) in items.iter().enumerate() {
                assert!(items[i + 1..].iter().all(|b| b.path != a.path));
            }
        }
    }

    #[test]
    fn family_and_missing_role_use_care_worker_menu() {
        assert_eq!(menu_for(Some(Role::Family)), CARE_WORKER_MENU);
        assert_eq!(menu_for(None), CARE_WORKER_MENU);
    }

    #[test]
    fn mobile_nav_sizes_per_role() {
        assert_eq!(mobile_nav_for(Some(Role::CareWorker)).len(), 5);
        assert_eq!(mobile_nav_for(Some(Role::Client)).len(), 3);
        assert_eq!(mobile_nav_for(Some(Role::Supervisor)).len(), 5);
        assert_eq!(mobile_nav_for(Some(Role::Family)).len(), 5);
        assert_eq!(mobile_nav_for(None).len(), 5);
        assert!(mobile_nav_for(Some(Role::Admin)).is_empty());
    }

    #[test]
    fn mobile_nav_never_exceeds_max() {
        for role in ALL_ROLES {
            assert!(mobile_nav_for(Some(*role)).len() <= MOBILE_NAV_MAX);
        }
    }

    #[test]
    fn active_match_is_exact() {
        assert!(is_active("/dashboard/messages", "/dashboard/messages"));
        assert!(!is_active("/dashboard", "/dashboard/messages"));
        assert!(!is_active("/dashboard/messages", "/dashboard/messages/42"));
    }

    #[test]
    fn only_one_entry_active_for_nested_path() {
        let active: Vec<_> = CARE_WORKER_MENU
            .iter()
            .filter(|i| is_active(i.path, "/dashboard/messages"))
            .collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].label, "Messages");
    }

    #[test]
    fn page_title_uses_role_menu_labels() {
        assert_eq!(page_title(Some(Role::Client), paths::VISITS), "My Visits");
        assert_eq!(page_title(Some(Role::CareWorker), paths::VISITS), "Visits");
        assert_eq!(page_title(Some(Role::Admin), "/nowhere"), "Dashboard");
    }
}
