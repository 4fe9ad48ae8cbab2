//! Guarded "go home" navigation.

pub mod placement;
pub mod shortcut;

use std::cell::Cell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::UiError;
use crate::overlay::OverlayRegistry;
use crate::runtime::{Redirector, UiRuntime};
use crate::scheduler::Scheduler;

pub use placement::{BRANDING_SELECTORS, HEADER_SELECTORS, PageLayout, Placement};
pub use shortcut::{FocusTarget, Modifiers, Shortcut};

pub const MIN_REDIRECT_DELAY_MS: u32 = 340;
pub const MAX_REDIRECT_DELAY_MS: u32 = 420;

/// Timing, target and shortcut for the home button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HomeNavConfig {
    /// Relative page to redirect to.
    pub target: String,
    /// Time given to the overlay fade before leaving the page.
    pub redirect_delay_ms: u32,
    pub shortcut: char,
}

impl Default for HomeNavConfig {
    fn default() -> Self {
        Self {
            target: "home.html".to_string(),
            redirect_delay_ms: MIN_REDIRECT_DELAY_MS,
            shortcut: 'h',
        }
    }
}

impl HomeNavConfig {
    /// # Errors
    ///
    /// Returns an error if the target is empty, the delay leaves the
    /// 340–420 ms window, or the shortcut is not an ASCII letter.
    pub fn validate(&self) -> Result<(), UiError> {
        if self.target.trim().is_empty() {
            return Err(UiError::invalid_config("nav.target", "must not be empty"));
        }
        if !(MIN_REDIRECT_DELAY_MS..=MAX_REDIRECT_DELAY_MS).contains(&self.redirect_delay_ms) {
            return Err(UiError::invalid_config(
                "nav.redirect_delay_ms",
                format!(
                    "must be between {MIN_REDIRECT_DELAY_MS} and {MAX_REDIRECT_DELAY_MS} (got {})",
                    self.redirect_delay_ms
                ),
            ));
        }
        if !self.shortcut.is_ascii_alphabetic() {
            return Err(UiError::invalid_config(
                "nav.shortcut",
                format!("must be an ASCII letter (got {:?})", self.shortcut),
            ));
        }
        Ok(())
    }
}

/// What a `go_home` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    /// Overlay shown, redirect pending.
    Scheduled,
    /// Overlay failed; redirected on the spot.
    Immediate,
    /// Navigation already under way.
    Ignored,
}

pub struct HomeNav {
    config: HomeNavConfig,
    overlay: OverlayRegistry,
    scheduler: Rc<dyn Scheduler>,
    redirector: Rc<dyn Redirector>,
    navigating: Cell<bool>,
}

impl HomeNav {
    #[must_use]
    pub fn new(runtime: &UiRuntime, config: HomeNavConfig) -> Self {
        Self {
            config,
            overlay: runtime.overlay().clone(),
            scheduler: runtime.scheduler(),
            redirector: runtime.redirector(),
            navigating: Cell::new(false),
        }
    }

    #[must_use]
    pub const fn config(&self) -> &HomeNavConfig {
        &self.config
    }

    #[must_use]
    pub const fn shortcut(&self) -> Shortcut {
        Shortcut::new(self.config.shortcut)
    }

    #[must_use]
    pub fn is_navigating(&self) -> bool {
        self.navigating.get()
    }

    /// Play the overlay, then leave for the home page. One-shot per page life.
    pub fn go_home(&self) -> NavOutcome {
        if self.navigating.replace(true) {
            log::debug!("go_home ignored: navigation already started");
            return NavOutcome::Ignored;
        }
        match self.overlay.ensure().and_then(|handle| handle.show()) {
            Ok(_) => {
                let redirector = Rc::clone(&self.redirector);
                let target = self.config.target.clone();
                self.scheduler.schedule(
                    self.config.redirect_delay_ms,
                    Box::new(move || redirector.redirect(&target)),
                );
                NavOutcome::Scheduled
            }
            Err(err) => {
                log::warn!("overlay unavailable, redirecting immediately: {err}");
                self.redirector.redirect(&self.config.target);
                NavOutcome::Immediate
            }
        }
    }

    /// Keyboard entry point. `None` when the key is not the shortcut or focus
    /// is in a text-entry element.
    pub fn handle_key(&self, key: &str, focus: &FocusTarget) -> Option<NavOutcome> {
        self.handle_chord(key, Modifiers::default(), focus)
    }

    /// Like [`HomeNav::handle_key`], but a held Ctrl, Meta or Alt leaves the
    /// key to the browser.
    pub fn handle_chord(
        &self,
        key: &str,
        modifiers: Modifiers,
        focus: &FocusTarget,
    ) -> Option<NavOutcome> {
        self.shortcut()
            .matches_chord(key, modifiers, focus)
            .then(|| self.go_home())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HomewardConfig;
    use crate::consent::MemoryStore;
    use crate::overlay::{OverlaySpec, OverlayState, OverlaySurface};
    use crate::runtime::{Preferences, RuntimeHost};
    use crate::scheduler::ManualScheduler;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        targets: RefCell<Vec<String>>,
    }

    impl Redirector for Recorder {
        fn redirect(&self, target: &str) {
            self.targets.borrow_mut().push(target.to_string());
        }
    }

    struct Doc {
        created: Cell<bool>,
        broken: bool,
        state: Cell<OverlayState>,
    }

    impl OverlaySurface for Doc {
        fn exists(&self, _id: &str) -> bool {
            self.created.get()
        }

        fn create(&self, _spec: &OverlaySpec) -> Result<(), UiError> {
            if self.broken {
                return Err(UiError::Dom("body missing".into()));
            }
            self.created.set(true);
            Ok(())
        }

        fn apply(&self, _id: &str, state: OverlayState) -> Result<(), UiError> {
            self.state.set(state);
            Ok(())
        }
    }

    fn setup(broken: bool) -> (Rc<ManualScheduler>, Rc<Recorder>, Rc<Doc>, HomeNav) {
        let sched = Rc::new(ManualScheduler::new());
        let recorder = Rc::new(Recorder::default());
        let doc = Rc::new(Doc {
            created: Cell::new(false),
            broken,
            state: Cell::new(OverlayState::Hidden),
        });
        let runtime = UiRuntime::new(
            RuntimeHost {
                scheduler: sched.clone(),
                redirector: recorder.clone(),
                store: Rc::new(MemoryStore::default()),
                overlay_surface: doc.clone(),
            },
            Preferences::default(),
            HomewardConfig::default(),
        );
        let nav = HomeNav::new(&runtime, HomeNavConfig::default());
        (sched, recorder, doc, nav)
    }

    #[test]
    fn redirects_once_after_delay() {
        let (sched, recorder, doc, nav) = setup(false);
        assert_eq!(nav.go_home(), NavOutcome::Scheduled);
        assert_eq!(nav.go_home(), NavOutcome::Ignored);
        assert_eq!(doc.state.get(), OverlayState::Shown);
        sched.advance(339);
        assert!(recorder.targets.borrow().is_empty());
        sched.advance(1);
        assert_eq!(*recorder.targets.borrow(), vec!["home.html".to_string()]);
        sched.run_until_idle();
        assert_eq!(recorder.targets.borrow().len(), 1);
    }

    #[test]
    fn overlay_failure_falls_back_to_immediate_redirect() {
        let (sched, recorder, _doc, nav) = setup(true);
        assert_eq!(nav.go_home(), NavOutcome::Immediate);
        assert_eq!(recorder.targets.borrow().len(), 1);
        assert_eq!(sched.pending(), 0);
        assert_eq!(nav.go_home(), NavOutcome::Ignored);
    }

    #[test]
    fn shortcut_respects_focus() {
        let (sched, recorder, _doc, nav) = setup(false);
        assert_eq!(nav.handle_key("h", &FocusTarget::element("input")), None);
        assert_eq!(nav.handle_key("x", &FocusTarget::element("body")), None);
        assert!(!nav.is_navigating());
        assert_eq!(
            nav.handle_key("H", &FocusTarget::element("body")),
            Some(NavOutcome::Scheduled)
        );
        sched.run_until_idle();
        assert_eq!(recorder.targets.borrow().len(), 1);
    }

    #[test]
    fn ctrl_h_does_not_navigate() {
        let (sched, recorder, _doc, nav) = setup(false);
        let ctrl = Modifiers {
            ctrl: true,
            ..Modifiers::default()
        };
        assert_eq!(
            nav.handle_chord("h", ctrl, &FocusTarget::element("body")),
            None
        );
        sched.run_until_idle();
        assert!(recorder.targets.borrow().is_empty());
        assert!(!nav.is_navigating());
    }

    #[test]
    fn config_rejects_out_of_window_delay() {
        let mut cfg = HomeNavConfig::default();
        cfg.redirect_delay_ms = 420;
        assert!(cfg.validate().is_ok());
        cfg.redirect_delay_ms = 500;
        assert!(cfg.validate().is_err());
        cfg.redirect_delay_ms = 380;
        cfg.shortcut = '7';
        assert!(cfg.validate().is_err());
    }
}
