//! The runtime value that owns page-wide resources.
//!
//! Components receive a `&UiRuntime` at construction instead of discovering
//! globals: the scheduler, the redirector, the persistent store, the shared
//! overlay registry and the preference snapshot all live here.

use std::rc::Rc;

use crate::config::HomewardConfig;
use crate::consent::KeyValueStore;
use crate::overlay::{OverlayRegistry, OverlaySpec, OverlaySurface};
use crate::scheduler::Scheduler;

/// Performs the actual page navigation.
pub trait Redirector {
    fn redirect(&self, target: &str);
}

/// Environment preferences sampled once at load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Preferences {
    pub reduce_motion: bool,
}

/// Host-provided implementations of the runtime seams.
pub struct RuntimeHost {
    pub scheduler: Rc<dyn Scheduler>,
    pub redirector: Rc<dyn Redirector>,
    pub store: Rc<dyn KeyValueStore>,
    pub overlay_surface: Rc<dyn OverlaySurface>,
}

#[derive(Clone)]
pub struct UiRuntime {
    scheduler: Rc<dyn Scheduler>,
    redirector: Rc<dyn Redirector>,
    store: Rc<dyn KeyValueStore>,
    overlay: OverlayRegistry,
    preferences: Preferences,
    config: Rc<HomewardConfig>,
}

impl UiRuntime {
    #[must_use]
    pub fn new(host: RuntimeHost, preferences: Preferences, config: HomewardConfig) -> Self {
        Self {
            scheduler: host.scheduler,
            redirector: host.redirector,
            store: host.store,
            overlay: OverlayRegistry::new(host.overlay_surface, OverlaySpec::default()),
            preferences,
            config: Rc::new(config),
        }
    }

    #[must_use]
    pub fn scheduler(&self) -> Rc<dyn Scheduler> {
        Rc::clone(&self.scheduler)
    }

    #[must_use]
    pub fn redirector(&self) -> Rc<dyn Redirector> {
        Rc::clone(&self.redirector)
    }

    #[must_use]
    pub fn store(&self) -> Rc<dyn KeyValueStore> {
        Rc::clone(&self.store)
    }

    #[must_use]
    pub const fn overlay(&self) -> &OverlayRegistry {
        &self.overlay
    }

    #[must_use]
    pub const fn preferences(&self) -> Preferences {
        self.preferences
    }

    #[must_use]
    pub fn config(&self) -> &HomewardConfig {
        &self.config
    }

    /// Drop every pending timer. Components stay usable afterwards.
    pub fn shutdown(&self) {
        self.scheduler.cancel_all();
        log::debug!("homeward runtime shut down");
    }
}
