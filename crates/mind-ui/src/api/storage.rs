use gloo_storage::{LocalStorage, Storage};
use leptos::logging::warn;
use mind_types::session::CredentialStore;

/// Credentials kept in `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

impl CredentialStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = LocalStorage::raw().set_item(key, value) {
            warn!("could not store {key}: {e:?}");
        }
    }

    fn remove(&self, key: &str) {
        if let Err(e) = LocalStorage::raw().remove_item(key) {
            warn!("could not remove {key}: {e:?}");
        }
    }
}
