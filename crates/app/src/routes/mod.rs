pub mod care_logs;
pub mod clients;
pub mod dashboard;
pub mod documents;
pub mod feedback;
pub mod incidents;
pub mod login;
pub mod medications;
pub mod messages;
pub mod not_found;
pub mod notes;
pub mod profile;
pub mod scope;
pub mod settings;
pub mod staff;
pub mod status;
pub mod timesheets;
pub mod training;
pub mod visits;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBookOpen, LdCalendar, LdClipboardList, LdClock, LdFileText, LdFlag, LdFolder, LdHeart,
    LdLayoutDashboard, LdLogOut, LdMenu, LdMessageSquare, LdPill, LdSettings, LdStar, LdUser,
    LdUserCheck, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::navigation::{
    can_open, is_active, menu_for, mobile_nav_for, page_title, paths,
};
use shared_types::{unread_total, NavIcon, NavItem, Role};
use shared_ui::{
    Avatar, Badge, BadgeVariant, BottomNav, BottomNavItem, Sidebar, SidebarContent,
    SidebarFooter, SidebarGroup, SidebarHeader, SidebarInset, SidebarMenu, SidebarMenuItem,
    SidebarMenuLink, SidebarProvider, SidebarTrigger,
};

use crate::config::config;
use crate::session::use_session;
use crate::store::use_store;

use care_logs::CareLogList;
use clients::ClientList;
use dashboard::Dashboard;
use documents::DocumentList;
use feedback::FeedbackList;
use incidents::IncidentList;
use login::Login;
use medications::MedicationList;
use messages::MessageCenter;
use not_found::NotFound;
use notes::NoteList;
use profile::Profile;
use settings::Settings;
use staff::StaffList;
use timesheets::TimesheetList;
use training::TrainingList;
use visits::VisitList;

/// Application routes. Paths mirror `shared_types::navigation::paths`.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::Login {})]
    #[route("/login")]
    Login {},
    #[layout(AuthGuard)]
    #[layout(AppLayout)]
        #[route("/dashboard")]
        Dashboard {},
        #[route("/dashboard/visits")]
        VisitList {},
        #[route("/dashboard/care-logs")]
        CareLogList {},
        #[route("/dashboard/incidents")]
        IncidentList {},
        #[route("/dashboard/medications")]
        MedicationList {},
        #[route("/dashboard/timesheets")]
        TimesheetList {},
        #[route("/dashboard/notes")]
        NoteList {},
        #[route("/dashboard/documents")]
        DocumentList {},
        #[route("/dashboard/training")]
        TrainingList {},
        #[route("/dashboard/messages")]
        MessageCenter {},
        #[route("/dashboard/staff")]
        StaffList {},
        #[route("/dashboard/clients")]
        ClientList {},
        #[route("/dashboard/feedback")]
        FeedbackList {},
        #[route("/dashboard/profile")]
        Profile {},
        #[route("/dashboard/settings")]
        Settings {},
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Route for a navigation table path.
pub fn route_for(path: &str) -> Route {
    path.parse::<Route>().unwrap_or(Route::Dashboard {})
}

/// Where the guard sends a visitor to `path`, or `None` to render the page.
fn redirect_for(role: Option<Role>, signed_in: bool, path: &str) -> Option<Route> {
    if !signed_in {
        return Some(Route::Login {});
    }
    if can_open(role, path) {
        None
    } else {
        Some(Route::Dashboard {})
    }
}

/// Redirects to the sign-in page when there is no session, and to the
/// dashboard when the page is not on the role's navigation.
#[component]
fn AuthGuard() -> Element {
    let session = use_session();
    let route: Route = use_route();
    let path = route.to_string();
    let redirect = redirect_for(session.role(), session.is_signed_in(), &path);

    use_effect(use_reactive!(|redirect| {
        if let Some(target) = redirect {
            tracing::debug!(%target, "route guard redirect");
            navigator().replace(target);
        }
    }));

    if redirect.is_none() {
        return rsx! { Outlet::<Route> {} };
    }

    rsx! {
        div { class: "auth-guard-loading",
            p { "Redirecting..." }
        }
    }
}

fn nav_icon(icon: NavIcon) -> Element {
    match icon {
        NavIcon::Dashboard => rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 } },
        NavIcon::Calendar => rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: 18, height: 18 } },
        NavIcon::Clipboard => rsx! { Icon::<LdClipboardList> { icon: LdClipboardList, width: 18, height: 18 } },
        NavIcon::Alert => rsx! { Icon::<LdFlag> { icon: LdFlag, width: 18, height: 18 } },
        NavIcon::Pill => rsx! { Icon::<LdPill> { icon: LdPill, width: 18, height: 18 } },
        NavIcon::Clock => rsx! { Icon::<LdClock> { icon: LdClock, width: 18, height: 18 } },
        NavIcon::Note => rsx! { Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 } },
        NavIcon::Folder => rsx! { Icon::<LdFolder> { icon: LdFolder, width: 18, height: 18 } },
        NavIcon::Training => rsx! { Icon::<LdBookOpen> { icon: LdBookOpen, width: 18, height: 18 } },
        NavIcon::Messages => rsx! { Icon::<LdMessageSquare> { icon: LdMessageSquare, width: 18, height: 18 } },
        NavIcon::Staff => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 } },
        NavIcon::Clients => rsx! { Icon::<LdUserCheck> { icon: LdUserCheck, width: 18, height: 18 } },
        NavIcon::Feedback => rsx! { Icon::<LdStar> { icon: LdStar, width: 18, height: 18 } },
        NavIcon::Profile => rsx! { Icon::<LdUser> { icon: LdUser, width: 18, height: 18 } },
        NavIcon::Settings => rsx! { Icon::<LdSettings> { icon: LdSettings, width: 18, height: 18 } },
    }
}

/// Sidebar, top bar and bottom bar around every signed-in page.
///
/// All three navigation surfaces read the same role tables; nothing here
/// branches on role directly.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let mut session = use_session();
    let store = use_store();
    let settings = config();

    let Some(user) = session.current.read().clone() else {
        return rsx! {};
    };
    let role = Some(user.role());
    let current_path = route.to_string();
    let title = page_title(role, &current_path);
    let menu = menu_for(role);
    let bottom: &[NavItem] = if settings.features.mobile_nav {
        mobile_nav_for(role)
    } else {
        &[]
    };
    let unread = unread_total(&store.conversations.read(), user.name());
    let initials = user.initials();
    let user_name = user.name().to_string();
    let role_name = user.role().display_name();
    let app_name = settings.app.name.clone();

    let sign_out = move |_| {
        session.sign_out();
        navigator().replace(Route::Login {});
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        SidebarProvider { default_open: true,
            Sidebar {
                SidebarHeader {
                    div { class: "sidebar-brand",
                        Icon::<LdHeart> { icon: LdHeart, width: 20, height: 20 }
                        span { class: "sidebar-brand-name", "{app_name}" }
                    }
                }
                SidebarContent {
                    SidebarGroup { label: role_name.to_string(),
                        SidebarMenu {
                            for item in menu.iter().copied() {
                                SidebarMenuItem { key: "{item.path}",
                                    SidebarMenuLink {
                                        to: route_for(item.path),
                                        active: is_active(item.path, &current_path),
                                        {nav_icon(item.icon)}
                                        span { class: "sidebar-item-label", "{item.label}" }
                                        if item.path == paths::MESSAGES && unread > 0 {
                                            Badge { variant: BadgeVariant::Info, "{unread}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                SidebarFooter {
                    div { class: "sidebar-user",
                        Avatar { initials: initials.clone() }
                        div { class: "sidebar-user-text",
                            span { class: "sidebar-user-name", "{user_name}" }
                            span { class: "sidebar-user-role", "{role_name}" }
                        }
                    }
                    button { class: "sign-out-button", r#type: "button", onclick: sign_out,
                        Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                        "Sign out"
                    }
                }
            }

            SidebarInset {
                header { class: "topbar",
                    SidebarTrigger {
                        Icon::<LdMenu> { icon: LdMenu, width: 18, height: 18 }
                    }
                    h2 { class: "topbar-title", "{title}" }
                    div { class: "topbar-spacer" }
                    Link { to: Route::Profile {}, class: "topbar-user",
                        span { class: "topbar-user-name", "{user_name}" }
                        Avatar { initials: initials.clone() }
                    }
                }

                div { class: "page-content",
                    Outlet::<Route> {}
                }

                if !bottom.is_empty() {
                    BottomNav {
                        for item in bottom.iter().copied() {
                            BottomNavItem {
                                key: "{item.path}",
                                label: item.label.to_string(),
                                active: is_active(item.path, &current_path),
                                onselect: move |_| {
                                    navigator().push(route_for(item.path));
                                },
                                {nav_icon(item.icon)}
                            }
                        }
                    }
                }
            }
        }
    }
}
