//! Fullscreen image transition overlay.
//!
//! Rapid repeated calls are expected: every call bumps a generation and
//! cancels the previous hide timer, and a timer only acts when its generation
//! is still the latest.

use std::cell::Cell;
use std::rc::{Rc, Weak};

use serde::{Deserialize, Serialize};

use crate::UiError;
use crate::runtime::UiRuntime;
use crate::scheduler::{Scheduler, TimerId};

/// Called once the overlay has been hidden again.
pub type Completion = Box<dyn FnOnce()>;

/// Bundled animated image shown when no source is given.
pub const TRANSITION_GIF: &str = "transition.gif";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionDefaults {
    pub src: String,
    pub duration_ms: u32,
    /// Beat between reveal and the start of the visible duration.
    pub entrance_ms: u32,
}

impl Default for TransitionDefaults {
    fn default() -> Self {
        Self {
            src: TRANSITION_GIF.to_string(),
            duration_ms: 1200,
            entrance_ms: 60,
        }
    }
}

impl TransitionDefaults {
    /// # Errors
    ///
    /// Returns an error if the default source is blank or the overlay would
    /// never be visible.
    pub fn validate(&self) -> Result<(), UiError> {
        if self.src.trim().is_empty() {
            return Err(UiError::invalid_config("transition.src", "must not be blank"));
        }
        if self.duration_ms == 0 {
            return Err(UiError::invalid_config(
                "transition.duration_ms",
                "must be greater than zero",
            ));
        }
        Ok(())
    }
}

/// Host seam over the transition overlay element.
pub trait TransitionSurface {
    /// Set the image source and make the overlay visible.
    ///
    /// # Errors
    ///
    /// Returns an error if the overlay or its image is missing.
    fn reveal(&self, src: &str) -> Result<(), UiError>;

    /// # Errors
    ///
    /// Returns an error if the overlay is missing.
    fn conceal(&self) -> Result<(), UiError>;
}

struct TransitionInner {
    surface: Rc<dyn TransitionSurface>,
    scheduler: Rc<dyn Scheduler>,
    defaults: TransitionDefaults,
    generation: Cell<u64>,
    pending: Cell<Option<TimerId>>,
}

#[derive(Clone)]
pub struct TransitionOverlay {
    inner: Rc<TransitionInner>,
}

impl TransitionOverlay {
    #[must_use]
    pub fn new(runtime: &UiRuntime, surface: Rc<dyn TransitionSurface>) -> Self {
        Self {
            inner: Rc::new(TransitionInner {
                surface,
                scheduler: runtime.scheduler(),
                defaults: runtime.config().transition.clone(),
                generation: Cell::new(0),
                pending: Cell::new(None),
            }),
        }
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.inner.generation.get()
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.inner.pending.get().is_some()
    }

    /// Reveal `src` (or the bundled gif), hide it after `duration_ms` (or the
    /// default), then run `callback`. Returns the generation of this call.
    ///
    /// A later call supersedes this one: its hide and callback never run.
    pub fn show(
        &self,
        src: Option<&str>,
        duration_ms: Option<u32>,
        callback: Option<Completion>,
    ) -> u64 {
        let inner = &self.inner;
        let generation = inner.generation.get() + 1;
        inner.generation.set(generation);
        if let Some(previous) = inner.pending.take() {
            inner.scheduler.cancel(previous);
        }

        let src = src.unwrap_or(inner.defaults.src.as_str());
        if let Err(err) = inner.surface.reveal(src) {
            log::debug!("transition overlay skipped: {err}");
            if let Some(callback) = callback {
                callback();
            }
            return generation;
        }

        let delay = inner
            .defaults
            .entrance_ms
            .saturating_add(duration_ms.unwrap_or(inner.defaults.duration_ms));
        let weak: Weak<TransitionInner> = Rc::downgrade(&self.inner);
        let timer = inner.scheduler.schedule(
            delay,
            Box::new(move || {
                let Some(inner) = weak.upgrade() else {
                    return;
                };
                if inner.generation.get() != generation {
                    return;
                }
                inner.pending.set(None);
                if let Err(err) = inner.surface.conceal() {
                    log::debug!("transition overlay not concealed: {err}");
                }
                if let Some(callback) = callback {
                    callback();
                }
            }),
        );
        inner.pending.set(Some(timer));
        generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HomewardConfig;
    use crate::consent::MemoryStore;
    use crate::overlay::{OverlaySpec, OverlayState, OverlaySurface};
    use crate::runtime::{Preferences, Redirector, RuntimeHost};
    use crate::scheduler::ManualScheduler;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Screen {
        events: RefCell<Vec<String>>,
        fail: Cell<bool>,
    }

    impl TransitionSurface for Screen {
        fn reveal(&self, src: &str) -> Result<(), UiError> {
            if self.fail.get() {
                return Err(UiError::Dom("no overlay".into()));
            }
            self.events.borrow_mut().push(format!("show:{src}"));
            Ok(())
        }

        fn conceal(&self) -> Result<(), UiError> {
            self.events.borrow_mut().push("hide".into());
            Ok(())
        }
    }

    struct Quiet;

    impl Redirector for Quiet {
        fn redirect(&self, _target: &str) {}
    }

    impl OverlaySurface for Quiet {
        fn exists(&self, _id: &str) -> bool {
            true
        }
        fn create(&self, _spec: &OverlaySpec) -> Result<(), UiError> {
            Ok(())
        }
        fn apply(&self, _id: &str, _state: OverlayState) -> Result<(), UiError> {
            Ok(())
        }
    }

    fn overlay() -> (Rc<ManualScheduler>, Rc<Screen>, TransitionOverlay) {
        let sched = Rc::new(ManualScheduler::new());
        let screen = Rc::new(Screen::default());
        let runtime = UiRuntime::new(
            RuntimeHost {
                scheduler: sched.clone(),
                redirector: Rc::new(Quiet),
                store: Rc::new(MemoryStore::default()),
                overlay_surface: Rc::new(Quiet),
            },
            Preferences::default(),
            HomewardConfig::default(),
        );
        let overlay = TransitionOverlay::new(&runtime, screen.clone());
        (sched, screen, overlay)
    }

    fn counter() -> (Rc<Cell<u32>>, Completion) {
        let hits = Rc::new(Cell::new(0));
        let h = Rc::clone(&hits);
        (hits, Box::new(move || h.set(h.get() + 1)))
    }

    #[test]
    fn superseded_call_never_calls_back() {
        let (sched, screen, overlay) = overlay();
        let (first, cb1) = counter();
        let (second, cb2) = counter();
        overlay.show(Some("a.gif"), Some(100), Some(cb1));
        overlay.show(Some("b.gif"), Some(200), Some(cb2));

        sched.advance(259);
        assert_eq!(second.get(), 0);
        sched.advance(1);
        assert_eq!(second.get(), 1);
        sched.run_until_idle();
        assert_eq!(first.get(), 0);
        assert_eq!(second.get(), 1);
        assert_eq!(
            *screen.events.borrow(),
            vec!["show:a.gif", "show:b.gif", "hide"]
        );
        assert!(!overlay.is_pending());
    }

    #[test]
    fn defaults_apply_when_omitted() {
        let (sched, screen, overlay) = overlay();
        overlay.show(None, None, None);
        sched.advance(1259);
        assert_eq!(screen.events.borrow().len(), 1);
        sched.advance(1);
        assert_eq!(*screen.events.borrow(), vec!["show:transition.gif", "hide"]);
    }

    #[test]
    fn surface_failure_still_calls_back() {
        let (sched, screen, overlay) = overlay();
        screen.fail.set(true);
        let (hits, cb) = counter();
        overlay.show(Some("x.gif"), Some(10), Some(cb));
        assert_eq!(hits.get(), 1);
        assert_eq!(sched.pending(), 0);
    }
}
