use dioxus::prelude::*;
use shared_types::{Role, Session};

/// The signed-in user, provided at the root of the app.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionState {
    pub current: Signal<Option<Session>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            current: Signal::new(None),
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.current.read().is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.current.read().as_ref().map(Session::role)
    }

    /// Replaces any existing session. Roles are fixed for a session's
    /// lifetime, so switching role means signing in again.
    pub fn sign_in(&mut self, session: Session) {
        tracing::info!(user_id = session.user_id(), role = session.role().as_str(), "signed in");
        self.current.set(Some(session));
    }

    pub fn sign_out(&mut self) {
        if let Some(session) = self.current.read().as_ref() {
            tracing::info!(user_id = session.user_id(), "signed out");
        }
        self.current.set(None);
    }
}

pub fn use_session() -> SessionState {
    use_context::<SessionState>()
}

/// Role of the signed-in user, `None` when signed out.
pub fn use_role() -> Option<Role> {
    use_session().role()
}

/// Display name of the signed-in user, empty when signed out.
pub fn use_user_name() -> String {
    use_session()
        .current
        .read()
        .as_ref()
        .map(|s| s.name().to_string())
        .unwrap_or_default()
}
