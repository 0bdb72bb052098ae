use contracts::system::session::{SessionGate, StorageScope};
use web_sys::window;

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

fn session_storage() -> Option<web_sys::Storage> {
    window()?.session_storage().ok()?
}

/// Durable scope: survives the browser session (localStorage).
#[derive(Clone, Copy, Default)]
pub struct LocalScope;

impl StorageScope for LocalScope {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Ephemeral scope: lives as long as the tab (sessionStorage).
#[derive(Clone, Copy, Default)]
pub struct SessionScope;

impl StorageScope for SessionScope {
    fn get(&self, key: &str) -> Option<String> {
        session_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = session_storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = session_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Session gate wired to the two browser storage scopes.
pub fn browser_gate() -> SessionGate<LocalScope, SessionScope> {
    SessionGate::new(LocalScope, SessionScope)
}
