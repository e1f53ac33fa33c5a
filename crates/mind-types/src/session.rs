//! Browser session: stored credentials and the startup check that turns
//! them into a [`SessionPhase`].

use std::cell::RefCell;
use std::collections::HashMap;

use crate::account::{CurrentUser, Role};
use crate::error::ApiError;
use crate::guard::is_invite_path;

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
pub const USER_ROLE_KEY: &str = "user_role";

pub const CREDENTIAL_KEYS: [&str; 3] = [ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, USER_ROLE_KEY];

/// Key/value storage that outlives a page load.
pub trait CredentialStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);

    fn access_token(&self) -> Option<String> {
        self.get(ACCESS_TOKEN_KEY).filter(|t| !t.is_empty())
    }

    fn store_tokens(&self, access: &str, refresh: &str) {
        self.set(ACCESS_TOKEN_KEY, access);
        self.set(REFRESH_TOKEN_KEY, refresh);
    }

    fn store_role(&self, role: &Role) {
        self.set(USER_ROLE_KEY, role.as_str());
    }

    fn clear(&self) {
        for key in CREDENTIAL_KEYS {
            self.remove(key);
        }
    }
}

/// In-process store, used off the browser and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl CredentialStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum SessionPhase {
    /// Startup check still in flight.
    #[default]
    Checking,
    Anonymous,
    Authenticated(Role),
}

impl SessionPhase {
    pub fn role(&self) -> Option<&Role> {
        match self {
            SessionPhase::Authenticated(role) => Some(role),
            _ => None,
        }
    }
}

/// What the app has to do after reading storage on mount.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Startup {
    Anonymous,
    /// Confirm the stored token by fetching the current user.
    Verify { token: String },
}

/// First half of the startup check. Invite links never inherit a session.
pub fn begin(store: &impl CredentialStore, path: &str) -> Startup {
    if is_invite_path(path) {
        store.clear();
        return Startup::Anonymous;
    }

    match store.access_token() {
        Some(token) => Startup::Verify { token },
        None => Startup::Anonymous,
    }
}

/// Second half: any failure, or a user without a role, ends the session.
pub fn finish(store: &impl CredentialStore, result: Result<CurrentUser, ApiError>) -> SessionPhase {
    match result {
        Ok(CurrentUser {
            role: Some(role), ..
        }) => {
            store.store_role(&role);
            SessionPhase::Authenticated(role)
        }
        _ => {
            store.clear();
            SessionPhase::Anonymous
        }
    }
}

/// Which HTTP client a request goes through.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClientKind {
    /// Sends the stored bearer token; a 401 ends the session.
    Authenticated,
    /// Never sends credentials. Invite, reset, registration and login.
    Public,
    /// Sends the given token without touching storage. Used while a
    /// session is being established, so failures stay with the caller.
    Bearer(String),
}

impl ClientKind {
    pub fn authorization(&self, store: &impl CredentialStore) -> Option<String> {
        match self {
            ClientKind::Authenticated => store.access_token().map(|t| format!("Bearer {t}")),
            ClientKind::Public => None,
            ClientKind::Bearer(token) => Some(format!("Bearer {token}")),
        }
    }

    /// Applies the response policy; returns true when the caller must
    /// leave for the login page.
    pub fn on_status(&self, store: &impl CredentialStore, status: u16) -> bool {
        if *self == ClientKind::Authenticated && status == 401 {
            store.clear();
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logged_in_store() -> MemoryStore {
        let store = MemoryStore::new();
        store.store_tokens("access-1", "refresh-1");
        store.store_role(&Role::Admin);
        store
    }

    #[test]
    fn no_token_means_anonymous() {
        let store = MemoryStore::new();
        assert_eq!(begin(&store, "/dashboard"), Startup::Anonymous);
    }

    #[test]
    fn stored_token_is_verified() {
        let store = logged_in_store();
        assert_eq!(
            begin(&store, "/dashboard"),
            Startup::Verify {
                token: "access-1".into()
            }
        );
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn invite_path_clears_credentials_without_verifying() {
        let store = logged_in_store();
        assert_eq!(begin(&store, "/invite/5f0c-token"), Startup::Anonymous);
        assert!(store.is_empty());
    }

    #[test]
    fn successful_check_caches_role() {
        let store = MemoryStore::new();
        store.store_tokens("a", "r");
        let phase = finish(
            &store,
            Ok(CurrentUser {
                role: Some(Role::User),
                ..CurrentUser::default()
            }),
        );
        assert_eq!(phase, SessionPhase::Authenticated(Role::User));
        assert_eq!(store.get(USER_ROLE_KEY).as_deref(), Some("USER"));
    }

    #[test]
    fn failed_check_clears_everything() {
        for result in [
            Err(ApiError::Network("offline".into())),
            Err(ApiError::Unauthorized),
            Ok(CurrentUser::default()),
        ] {
            let store = logged_in_store();
            assert_eq!(finish(&store, result), SessionPhase::Anonymous);
            assert!(store.is_empty());
        }
    }

    #[test]
    fn public_client_never_sends_authorization() {
        let store = logged_in_store();
        assert_eq!(
            ClientKind::Authenticated.authorization(&store).as_deref(),
            Some("Bearer access-1")
        );
        assert_eq!(ClientKind::Public.authorization(&store), None);
        assert_eq!(
            ClientKind::Bearer("fresh".into()).authorization(&store).as_deref(),
            Some("Bearer fresh")
        );
    }

    #[test]
    fn unauthorized_response_logs_out_authenticated_client_only() {
        let store = logged_in_store();
        assert!(!ClientKind::Public.on_status(&store, 401));
        assert!(!ClientKind::Bearer("stale".into()).on_status(&store, 401));
        assert_eq!(store.len(), 3);

        assert!(!ClientKind::Authenticated.on_status(&store, 403));
        assert_eq!(store.len(), 3);

        assert!(ClientKind::Authenticated.on_status(&store, 401));
        for key in CREDENTIAL_KEYS {
            assert_eq!(store.get(key), None);
        }
    }

    #[test]
    fn empty_token_counts_as_missing() {
        let store = MemoryStore::new();
        store.set(ACCESS_TOKEN_KEY, "");
        assert_eq!(begin(&store, "/"), Startup::Anonymous);
        assert_eq!(ClientKind::Authenticated.authorization(&store), None);
    }
}
