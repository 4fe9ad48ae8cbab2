//! Page-enter flourish: a brief flash of the navigation overlay whenever the
//! page is shown, including back/forward cache restores.

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::UiError;
use crate::overlay::OverlayRegistry;
use crate::runtime::{Preferences, UiRuntime};
use crate::scheduler::Scheduler;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlourishConfig {
    pub start_delay_ms: u32,
    pub visible_ms: u32,
}

impl Default for FlourishConfig {
    fn default() -> Self {
        Self {
            start_delay_ms: 20,
            visible_ms: 220,
        }
    }
}

impl FlourishConfig {
    /// # Errors
    ///
    /// Returns an error if the flash would have no visible duration.
    pub fn validate(&self) -> Result<(), UiError> {
        if self.visible_ms == 0 {
            return Err(UiError::invalid_config(
                "flourish.visible_ms",
                "must be greater than zero",
            ));
        }
        Ok(())
    }
}

pub struct PageEnterFlourish {
    overlay: OverlayRegistry,
    scheduler: Rc<dyn Scheduler>,
    preferences: Preferences,
    config: FlourishConfig,
}

impl PageEnterFlourish {
    #[must_use]
    pub fn new(runtime: &UiRuntime) -> Self {
        Self {
            overlay: runtime.overlay().clone(),
            scheduler: runtime.scheduler(),
            preferences: runtime.preferences(),
            config: runtime.config().flourish.clone(),
        }
    }

    /// Queue the flourish. Returns `false` when reduced motion is preferred.
    ///
    /// The overlay is never created here; pages without one stay untouched.
    pub fn on_page_show(&self) -> bool {
        if self.preferences.reduce_motion {
            return false;
        }
        let overlay = self.overlay.clone();
        let scheduler = Rc::clone(&self.scheduler);
        let visible_ms = self.config.visible_ms;
        self.scheduler.schedule(
            self.config.start_delay_ms,
            Box::new(move || {
                let Some(handle) = overlay.find() else {
                    return;
                };
                match handle.show() {
                    Ok(ticket) => {
                        scheduler.schedule(
                            visible_ms,
                            Box::new(move || {
                                if let Err(err) = handle.hide_if_current(ticket) {
                                    log::debug!("page-enter overlay not hidden: {err}");
                                }
                            }),
                        );
                    }
                    Err(err) => log::debug!("page-enter overlay skipped: {err}"),
                }
            }),
        );
        true
    }
}
