use shared_types::Role;

/// Which records a session may see on the shared list pages.
#[derive(Debug, Clone, PartialEq)]
pub enum Scope {
    /// Managers see the whole agency.
    Everyone,
    /// Records where the named person delivers the care.
    Worker(String),
    /// Records about the named person's own care.
    Client(String),
}

impl Scope {
    /// Family members and a missing role are scoped like care workers,
    /// matching the navigation and dashboard fallbacks.
    pub fn for_session(role: Option<Role>, name: &str) -> Self {
        match role {
            Some(Role::Admin) | Some(Role::Supervisor) => Scope::Everyone,
            Some(Role::Client) => Scope::Client(name.to_string()),
            Some(Role::CareWorker) | Some(Role::Family) | None => Scope::Worker(name.to_string()),
        }
    }

    /// Whether a record delivered by `worker` to `client` is visible.
    pub fn admits(&self, worker: &str, client: &str) -> bool {
        match self {
            Scope::Everyone => true,
            Scope::Worker(name) => name == worker,
            Scope::Client(name) => name == client,
        }
    }

    /// For records that only name a client, such as medication schedules.
    /// Workers see every client's records.
    pub fn admits_client(&self, client: &str) -> bool {
        match self {
            Scope::Client(name) => name == client,
            Scope::Everyone | Scope::Worker(_) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn managers_see_everything() {
        for role in [Role::Admin, Role::Supervisor] {
            let scope = Scope::for_session(Some(role), "Priya Shah");
            assert_eq!(scope, Scope::Everyone);
            assert!(scope.admits("Anyone", "Anybody"));
        }
    }

    #[test]
    fn workers_and_fallbacks_see_their_own_visits() {
        for role in [Some(Role::CareWorker), Some(Role::Family), None] {
            let scope = Scope::for_session(role, "Sam Carter");
            assert!(scope.admits("Sam Carter", "Margaret Lewis"));
            assert!(!scope.admits("Jordan Blake", "Margaret Lewis"));
            assert!(scope.admits_client("Harold Finch"));
        }
    }

    #[test]
    fn clients_see_their_own_care() {
        let scope = Scope::for_session(Some(Role::Client), "Margaret Lewis");
        assert!(scope.admits("Jordan Blake", "Margaret Lewis"));
        assert!(!scope.admits("Sam Carter", "Harold Finch"));
        assert!(!scope.admits_client("Harold Finch"));
    }
}
