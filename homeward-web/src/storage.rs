//! `localStorage` and `location` adapters.

use homeward_core::{KeyValueStore, Redirector, UiError};

use crate::dom;

/// Consent persistence in `localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, UiError> {
        dom::local_storage()
            .and_then(|storage| storage.get_item(key))
            .map_err(dom::storage_error)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), UiError> {
        dom::local_storage()
            .and_then(|storage| storage.set_item(key, value))
            .map_err(dom::storage_error)
    }
}

/// Navigates by assigning `location.href`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocationRedirector;

impl Redirector for LocationRedirector {
    fn redirect(&self, target: &str) {
        let Some(win) = dom::window() else {
            log::error!("cannot navigate to {target}: no window");
            return;
        };
        if let Err(err) = win.location().set_href(target) {
            log::error!("navigation to {target} failed: {}", dom::js_error_message(&err));
        }
    }
}
