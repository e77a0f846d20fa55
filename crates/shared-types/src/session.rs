use serde::{Deserialize, Serialize};

/// Permission class of the signed-in user.
///
/// - `Admin`: agency administration, desktop only.
/// - `Supervisor`: oversees care workers, approves timesheets, triages incidents.
/// - `CareWorker`: delivers visits, records care logs and medications.
/// - `Client`: receives care, sees their own schedule.
/// - `Family`: a client's relative. Has no dedicated views and is served
///   the care-worker fallbacks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    Admin,
    CareWorker,
    Supervisor,
    Client,
    Family,
}

/// Every role in display order.
pub const ALL_ROLES: &[Role] = &[
    Role::Admin,
    Role::Supervisor,
    Role::CareWorker,
    Role::Client,
    Role::Family,
];

impl Role {
    /// Parse a role name. Unknown values yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Some(Role::Admin),
            "care-worker" | "care_worker" | "careworker" => Some(Role::CareWorker),
            "supervisor" => Some(Role::Supervisor),
            "client" => Some(Role::Client),
            "family" => Some(Role::Family),
            _ => None,
        }
    }

    /// Kebab-case name, identical to the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::CareWorker => "care-worker",
            Role::Supervisor => "supervisor",
            Role::Client => "client",
            Role::Family => "family",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::CareWorker => "Care Worker",
            Role::Supervisor => "Supervisor",
            Role::Client => "Client",
            Role::Family => "Family Member",
        }
    }

    /// Whether the role may approve timesheets and cancel visits.
    pub fn is_manager(&self) -> bool {
        matches!(self, Role::Admin | Role::Supervisor)
    }
}

/// The identity of the signed-in user.
///
/// A session carries exactly one role, fixed when it is created. Fields are
/// read-only; signing in as someone else means replacing the session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    user_id: String,
    name: String,
    email: String,
    role: Role,
}

impl Session {
    pub fn new(
        user_id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            name: name.into(),
            email: email.into(),
            role,
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Two uppercase letters for avatar fallbacks ("Sam Carter" -> "SC").
    pub fn initials(&self) -> String {
        let mut words = self.name.split_whitespace();
        let first = words.next().and_then(|w| w.chars().next());
        let last = words.last().and_then(|w| w.chars().next());
        match (first, last) {
            (Some(a), Some(b)) => format!("{a}{b}").to_uppercase(),
            (Some(a), None) => a.to_uppercase().to_string(),
            _ => "?".to_string(),
        }
    }
}
