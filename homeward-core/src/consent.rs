//! Cookie consent banner.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::UiError;
use crate::runtime::{Redirector, UiRuntime};
use crate::scheduler::{Scheduler, TimerId};

pub const CONSENT_KEY: &str = "cc_cookie_accepted";
pub const CONSENT_ACCEPTED: &str = "1";

/// Durable per-origin string store.
pub trait KeyValueStore {
    /// # Errors
    ///
    /// Returns an error if the store is unavailable.
    fn get(&self, key: &str) -> Result<Option<String>, UiError>;

    /// # Errors
    ///
    /// Returns an error if the store is unavailable or full.
    fn set(&self, key: &str, value: &str) -> Result<(), UiError>;
}

/// In-process store for headless hosts. Survives as long as the value does.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, UiError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), UiError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Host seam over the banner element.
pub trait BannerSurface {
    /// # Errors
    ///
    /// Returns an error if the banner element cannot be toggled.
    fn set_visible(&self, visible: bool) -> Result<(), UiError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BannerConfig {
    /// Delay between install and the automatic show.
    pub show_delay_ms: u32,
    pub consent_key: String,
    /// Where the "Manage" action navigates.
    pub manage_href: String,
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            show_delay_ms: 800,
            consent_key: CONSENT_KEY.to_string(),
            manage_href: "#privacy".to_string(),
        }
    }
}

impl BannerConfig {
    /// # Errors
    ///
    /// Returns an error if the consent key is blank.
    pub fn validate(&self) -> Result<(), UiError> {
        if self.consent_key.trim().is_empty() {
            return Err(UiError::invalid_config(
                "banner.consent_key",
                "must not be empty",
            ));
        }
        Ok(())
    }
}

#[derive(Clone)]
pub struct ConsentBanner {
    store: Rc<dyn KeyValueStore>,
    surface: Rc<dyn BannerSurface>,
    scheduler: Rc<dyn Scheduler>,
    redirector: Rc<dyn Redirector>,
    config: BannerConfig,
}

impl ConsentBanner {
    #[must_use]
    pub fn new(runtime: &UiRuntime, surface: Rc<dyn BannerSurface>) -> Self {
        Self {
            store: runtime.store(),
            surface,
            scheduler: runtime.scheduler(),
            redirector: runtime.redirector(),
            config: runtime.config().banner.clone(),
        }
    }

    /// Whether the visitor already accepted. An unreadable store counts as
    /// undecided so the banner keeps asking.
    #[must_use]
    pub fn has_consent(&self) -> bool {
        match self.store.get(&self.config.consent_key) {
            Ok(value) => value.is_some_and(|v| !v.is_empty()),
            Err(err) => {
                log::warn!("consent flag unreadable, treating as undecided: {err}");
                false
            }
        }
    }

    /// Reveal the banner unless consent is on record. Returns whether it was
    /// revealed.
    pub fn show(&self) -> bool {
        if self.has_consent() {
            return false;
        }
        match self.surface.set_visible(true) {
            Ok(()) => true,
            Err(err) => {
                log::debug!("cookie banner not shown: {err}");
                false
            }
        }
    }

    /// Hide the banner and record consent.
    pub fn accept(&self) {
        if let Err(err) = self.surface.set_visible(false) {
            log::debug!("cookie banner not hidden: {err}");
        }
        if let Err(err) = self.store.set(&self.config.consent_key, CONSENT_ACCEPTED) {
            log::warn!("consent not persisted: {err}");
        }
    }

    pub fn manage(&self) {
        self.redirector.redirect(&self.config.manage_href);
    }

    /// Queue the automatic show that follows page load.
    pub fn schedule_auto_show(&self) -> TimerId {
        let banner = self.clone();
        self.scheduler.schedule(
            self.config.show_delay_ms,
            Box::new(move || {
                banner.show();
            }),
        )
    }
}
