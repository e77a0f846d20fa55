use dioxus::prelude::*;
use shared_types::{Role, StaffMember, StaffStatus, StatusCounts};
use shared_ui::{DataTable, DataTableCell, DataTableRow, PageHeader, TabBar};

use super::status::{in_tab, status_badge, status_tabs, ALL_TAB};
use crate::format_helpers::format_date_human;
use crate::session::use_role;
use crate::store::use_store;

/// The staff directory is for managers; anyone else sees an empty list.
fn visible_staff(staff: &[StaffMember], role: Option<Role>) -> Vec<StaffMember> {
    if role.is_some_and(|r| r.is_manager()) {
        staff.to_vec()
    } else {
        Vec::new()
    }
}

#[component]
pub fn StaffList() -> Element {
    let store = use_store();
    let role = use_role();
    let selected = use_signal(|| ALL_TAB.to_string());

    let mut staff = visible_staff(&store.staff.read(), role);
    staff.sort_by(|a, b| a.name.cmp(&b.name));

    let counts = StatusCounts::<StaffStatus>::tally(&staff);
    let active = counts.get(StaffStatus::Active);
    let tab = selected();
    let shown: Vec<StaffMember> = staff.into_iter().filter(|s| in_tab(&tab, s.status)).collect();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./pages.css") }
        PageHeader { title: "Staff", subtitle: format!("{active} active team members") }

        TabBar { options: status_tabs(&counts), selected }

        DataTable {
            headers: vec![
                "Name".to_string(),
                "Role".to_string(),
                "Email".to_string(),
                "Phone".to_string(),
                "Started".to_string(),
                "Status".to_string(),
            ],
            empty: shown.is_empty(),
            empty_message: "No staff in this view.",
            for member in shown.iter() {
                DataTableRow { key: "{member.id}",
                    DataTableCell { "{member.name}" }
                    DataTableCell { "{member.role.display_name()}" }
                    DataTableCell { "{member.email}" }
                    DataTableCell { "{member.phone.as_deref().unwrap_or_default()}" }
                    DataTableCell { "{format_date_human(&member.start_date)}" }
                    DataTableCell { {status_badge(member.status)} }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::mock;

    #[test]
    fn managers_see_the_whole_directory() {
        let staff = mock::staff();
        for role in [Role::Admin, Role::Supervisor] {
            assert_eq!(visible_staff(&staff, Some(role)).len(), staff.len());
        }
    }

    #[test]
    fn other_roles_see_no_staff() {
        let staff = mock::staff();
        for role in [Some(Role::CareWorker), Some(Role::Client), Some(Role::Family), None] {
            assert!(visible_staff(&staff, role).is_empty(), "{role:?}");
        }
    }
}
