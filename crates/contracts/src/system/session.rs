use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Durable-scope flag set when "remember me" was checked at login.
pub const REMEMBER_FLAG_KEY: &str = "rememberLogin";
/// Durable-scope email stored alongside the remember flag.
pub const REMEMBER_EMAIL_KEY: &str = "userEmail";
/// Ephemeral-scope key holding the JSON-serialized [`StoredUser`].
pub const SESSION_USER_KEY: &str = "currentUser";

const MIN_PASSWORD_LEN: usize = 6;

/// String key-value scope. Implemented by the browser local/session storages
/// in the frontend and by an in-memory map in tests.
pub trait StorageScope {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredUser {
    pub email: String,
    #[serde(rename = "rememberMe", default)]
    pub remember_me: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionState {
    pub user: Option<StoredUser>,
}

impl SessionState {
    pub fn logged_in(user: StoredUser) -> Self {
        Self { user: Some(user) }
    }

    pub fn logged_out() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Login form validation failure. Recoverable; shown inline next to the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Enter both email and password.")]
    MissingFields,
    #[error("Enter a valid email address.")]
    BadEmailFormat,
    #[error("Password must be at least 6 characters.")]
    ShortPassword,
}

/// Mock authentication lifecycle over two storage scopes.
///
/// There is no backend: any syntactically valid email/password pair logs in.
/// The durable scope survives the browser session ("remember me"), the
/// ephemeral scope lives as long as the tab.
pub struct SessionGate<D: StorageScope, E: StorageScope> {
    durable: D,
    ephemeral: E,
}

impl<D: StorageScope, E: StorageScope> SessionGate<D, E> {
    pub fn new(durable: D, ephemeral: E) -> Self {
        Self { durable, ephemeral }
    }

    /// Restore session state at application start.
    ///
    /// The durable scope wins over the ephemeral one; a malformed ephemeral
    /// payload is treated as absent and never raises.
    pub fn bootstrap(&self) -> SessionState {
        let flag = self.durable.get(REMEMBER_FLAG_KEY).unwrap_or_default();
        let email = self.durable.get(REMEMBER_EMAIL_KEY).unwrap_or_default();
        if !flag.is_empty() && !email.is_empty() {
            return SessionState::logged_in(StoredUser {
                email,
                remember_me: true,
            });
        }

        if let Some(raw) = self.ephemeral.get(SESSION_USER_KEY) {
            if let Ok(user) = serde_json::from_str::<StoredUser>(&raw) {
                return SessionState::logged_in(user);
            }
        }

        SessionState::logged_out()
    }

    /// Validate the credentials and write the storage scopes.
    ///
    /// The ephemeral scope is written on every successful login; the durable
    /// scope only when `remember_me` is set. On failure nothing is written.
    pub fn login(
        &self,
        email: &str,
        password: &str,
        remember_me: bool,
    ) -> Result<SessionState, ValidationError> {
        if email.is_empty() || password.is_empty() {
            return Err(ValidationError::MissingFields);
        }
        if !is_valid_email(email) {
            return Err(ValidationError::BadEmailFormat);
        }
        if password.len() < MIN_PASSWORD_LEN {
            return Err(ValidationError::ShortPassword);
        }

        let user = StoredUser {
            email: email.to_string(),
            remember_me,
        };

        if let Ok(serialized) = serde_json::to_string(&user) {
            self.ephemeral.set(SESSION_USER_KEY, &serialized);
        }
        if remember_me {
            self.durable.set(REMEMBER_FLAG_KEY, "true");
            self.durable.set(REMEMBER_EMAIL_KEY, email);
        }

        Ok(SessionState::logged_in(user))
    }

    /// Clear both scopes. Safe to call from any state.
    pub fn logout(&self) -> SessionState {
        self.durable.remove(REMEMBER_FLAG_KEY);
        self.durable.remove(REMEMBER_EMAIL_KEY);
        self.ephemeral.remove(SESSION_USER_KEY);
        SessionState::logged_out()
    }

    /// Email remembered from a previous "remember me" login, for prefilling
    /// the login form.
    pub fn remembered_email(&self) -> Option<String> {
        let flag = self.durable.get(REMEMBER_FLAG_KEY)?;
        if flag.is_empty() {
            return None;
        }
        self.durable.get(REMEMBER_EMAIL_KEY).filter(|e| !e.is_empty())
    }
}

/// `local@domain.tld` shape: exactly one `@`, a dot in the domain, no
/// whitespace, no empty segments.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    domain
        .split('.')
        .filter(|segment| !segment.is_empty())
        .count()
        >= 2
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::BTreeMap;

    #[derive(Default)]
    struct MemoryScope(RefCell<BTreeMap<String, String>>);

    impl MemoryScope {
        fn with(pairs: &[(&str, &str)]) -> Self {
            let scope = Self::default();
            for (k, v) in pairs {
                scope.set(k, v);
            }
            scope
        }

        fn len(&self) -> usize {
            self.0.borrow().len()
        }
    }

    impl StorageScope for MemoryScope {
        fn get(&self, key: &str) -> Option<String> {
            self.0.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) {
            self.0.borrow_mut().insert(key.to_string(), value.to_string());
        }

        fn remove(&self, key: &str) {
            self.0.borrow_mut().remove(key);
        }
    }

    fn empty_gate() -> SessionGate<MemoryScope, MemoryScope> {
        SessionGate::new(MemoryScope::default(), MemoryScope::default())
    }

    #[test]
    fn bootstrap_from_durable_scope() {
        let gate = SessionGate::new(
            MemoryScope::with(&[(REMEMBER_FLAG_KEY, "true"), (REMEMBER_EMAIL_KEY, "a@b.com")]),
            MemoryScope::default(),
        );
        let state = gate.bootstrap();
        assert!(state.is_authenticated());
        let user = state.user.unwrap();
        assert_eq!(user.email, "a@b.com");
        assert!(user.remember_me);
    }

    #[test]
    fn bootstrap_from_ephemeral_scope() {
        let gate = SessionGate::new(
            MemoryScope::default(),
            MemoryScope::with(&[(
                SESSION_USER_KEY,
                r#"{"email":"x@y.com","rememberMe":false}"#,
            )]),
        );
        let state = gate.bootstrap();
        let user = state.user.unwrap();
        assert_eq!(user.email, "x@y.com");
        assert!(!user.remember_me);
    }

    #[test]
    fn bootstrap_with_empty_scopes_is_logged_out() {
        assert!(!empty_gate().bootstrap().is_authenticated());
    }

    #[test]
    fn bootstrap_ignores_malformed_ephemeral_payload() {
        let gate = SessionGate::new(
            MemoryScope::default(),
            MemoryScope::with(&[(SESSION_USER_KEY, "{not json")]),
        );
        assert!(!gate.bootstrap().is_authenticated());
    }

    #[test]
    fn bootstrap_prefers_durable_over_ephemeral() {
        let gate = SessionGate::new(
            MemoryScope::with(&[(REMEMBER_FLAG_KEY, "true"), (REMEMBER_EMAIL_KEY, "a@b.com")]),
            MemoryScope::with(&[(
                SESSION_USER_KEY,
                r#"{"email":"x@y.com","rememberMe":false}"#,
            )]),
        );
        assert_eq!(gate.bootstrap().user.unwrap().email, "a@b.com");
    }

    #[test]
    fn login_rejects_missing_fields() {
        let gate = empty_gate();
        assert_eq!(gate.login("", "", false), Err(ValidationError::MissingFields));
        assert_eq!(
            gate.login("a@b.com", "", false),
            Err(ValidationError::MissingFields)
        );
    }

    #[test]
    fn login_rejects_bad_email_and_leaves_storage_untouched() {
        let gate = empty_gate();
        assert_eq!(
            gate.login("bad-email", "123456", false),
            Err(ValidationError::BadEmailFormat)
        );
        assert_eq!(gate.durable.len(), 0);
        assert_eq!(gate.ephemeral.len(), 0);
    }

    #[test]
    fn login_rejects_short_password() {
        let gate = empty_gate();
        assert_eq!(
            gate.login("a@b.com", "short", false),
            Err(ValidationError::ShortPassword)
        );
        assert_eq!(gate.ephemeral.len(), 0);
    }

    #[test]
    fn login_with_remember_writes_both_scopes() {
        let gate = empty_gate();
        let state = gate.login("a@b.com", "validpass", true).unwrap();
        assert!(state.is_authenticated());
        assert_eq!(gate.durable.get(REMEMBER_FLAG_KEY).as_deref(), Some("true"));
        assert_eq!(
            gate.durable.get(REMEMBER_EMAIL_KEY).as_deref(),
            Some("a@b.com")
        );
        let raw = gate.ephemeral.get(SESSION_USER_KEY).unwrap();
        let stored: StoredUser = serde_json::from_str(&raw).unwrap();
        assert_eq!(stored.email, "a@b.com");
        assert!(stored.remember_me);
    }

    #[test]
    fn login_without_remember_writes_only_ephemeral() {
        let gate = empty_gate();
        gate.login("a@b.com", "validpass", false).unwrap();
        assert_eq!(gate.durable.len(), 0);
        assert!(gate.ephemeral.get(SESSION_USER_KEY).is_some());
    }

    #[test]
    fn logout_clears_both_scopes_and_is_idempotent() {
        let gate = empty_gate();
        gate.login("a@b.com", "validpass", true).unwrap();
        let state = gate.logout();
        assert!(!state.is_authenticated());
        assert_eq!(gate.durable.len(), 0);
        assert_eq!(gate.ephemeral.len(), 0);

        // Second logout from an already logged-out state.
        assert!(!gate.logout().is_authenticated());
    }

    #[test]
    fn remembered_email_round_trip() {
        let gate = empty_gate();
        assert_eq!(gate.remembered_email(), None);
        gate.login("a@b.com", "validpass", true).unwrap();
        assert_eq!(gate.remembered_email().as_deref(), Some("a@b.com"));
        gate.logout();
        assert_eq!(gate.remembered_email(), None);
    }

    #[test]
    fn email_validation_shapes() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last@sub.domain.co"));
        assert!(!is_valid_email("bad-email"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@b@c.com"));
        assert!(!is_valid_email("a@b.com."));
    }
}
