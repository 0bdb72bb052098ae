use contracts::system::session::{SessionState, ValidationError};
use leptos::prelude::*;

use super::storage;

/// One session signal for the whole app, provided at the root.
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub state: RwSignal<SessionState>,
}

impl SessionContext {
    /// Restore session state from the browser storage scopes.
    pub fn new() -> Self {
        let state = storage::browser_gate().bootstrap();
        if state.is_authenticated() {
            log::info!("session restored for {:?}", state.user.as_ref().map(|u| &u.email));
        }
        Self {
            state: RwSignal::new(state),
        }
    }

    pub fn is_authenticated(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().is_authenticated())
    }

    /// Validate and log in. Any syntactically valid pair succeeds; there is
    /// no backend behind this.
    pub fn login(
        &self,
        email: &str,
        password: &str,
        remember_me: bool,
    ) -> Result<(), ValidationError> {
        let new_state = storage::browser_gate().login(email, password, remember_me)?;
        self.state.set(new_state);
        Ok(())
    }

    pub fn logout(&self) {
        let new_state = storage::browser_gate().logout();
        self.state.set(new_state);
        log::info!("logged out");
    }

    /// Email to prefill the login form with after a "remember me" login.
    pub fn remembered_email(&self) -> Option<String> {
        storage::browser_gate().remembered_email()
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext not found in component tree")
}
