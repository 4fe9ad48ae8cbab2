//! Transient premium promo card.
//!
//! Showing again while a card is up replaces it at once. Each show starts a
//! new generation; auto-hide and exit-clear timers from an older generation
//! leave the current card alone.

pub mod media;
pub mod options;

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use serde::{Deserialize, Serialize};

use crate::UiError;
use crate::runtime::UiRuntime;
use crate::scheduler::{Scheduler, TimerId};
use crate::transition::TransitionOverlay;

pub use media::PromoMedia;
pub use options::{PromoAction, PromoOptions};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromoTiming {
    /// Length of the exit animation.
    pub exit_animation_ms: u32,
    /// Delay before the card content is cleared after hiding.
    pub exit_clear_ms: u32,
    /// How long a clicked promo image plays fullscreen.
    pub image_transition_ms: u32,
}

impl Default for PromoTiming {
    fn default() -> Self {
        Self {
            exit_animation_ms: 280,
            exit_clear_ms: 360,
            image_transition_ms: 1800,
        }
    }
}

impl PromoTiming {
    /// # Errors
    ///
    /// Returns an error if content would be cleared before the exit animation
    /// ends.
    pub fn validate(&self) -> Result<(), UiError> {
        if self.exit_clear_ms < self.exit_animation_ms {
            return Err(UiError::invalid_config(
                "promo.exit_clear_ms",
                format!(
                    "must not be shorter than exit_animation_ms ({} < {})",
                    self.exit_clear_ms, self.exit_animation_ms
                ),
            ));
        }
        Ok(())
    }
}

/// Render model handed to the surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromoCard {
    pub generation: u64,
    pub title: String,
    pub body: String,
    pub cta: String,
    pub media: PromoMedia,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromoPhase {
    Hidden,
    Shown,
    Exiting,
}

/// Host seam over the promo container.
pub trait PromoSurface {
    /// Replace the container content with `card`.
    ///
    /// # Errors
    ///
    /// Returns an error if the card cannot be rendered.
    fn render(&self, card: &PromoCard, events: PromoEvents) -> Result<(), UiError>;

    /// Apply the entrance/exit classes and `aria-hidden` for `phase`.
    ///
    /// # Errors
    ///
    /// Returns an error if the container is missing.
    fn set_phase(&self, phase: PromoPhase) -> Result<(), UiError>;

    /// # Errors
    ///
    /// Returns an error if the container is missing.
    fn clear(&self) -> Result<(), UiError>;
}

struct PromoInner {
    surface: Rc<dyn PromoSurface>,
    scheduler: Rc<dyn Scheduler>,
    transition: TransitionOverlay,
    timing: PromoTiming,
    generation: Cell<u64>,
    phase: Cell<PromoPhase>,
    card: RefCell<Option<PromoCard>>,
    on_click: RefCell<Option<PromoAction>>,
    auto_hide: Cell<Option<TimerId>>,
    exit_clear: Cell<Option<TimerId>>,
}

/// Callbacks a rendered card uses to talk back to its coordinator.
#[derive(Clone)]
pub struct PromoEvents {
    coordinator: Weak<PromoInner>,
    generation: u64,
}

impl PartialEq for PromoEvents {
    fn eq(&self, other: &Self) -> bool {
        self.generation == other.generation && Weak::ptr_eq(&self.coordinator, &other.coordinator)
    }
}

impl PromoEvents {
    fn coordinator(&self) -> Option<PromoCoordinator> {
        self.coordinator
            .upgrade()
            .map(|inner| PromoCoordinator { inner })
    }

    /// The action button was pressed.
    pub fn activate(&self) {
        if let Some(coordinator) = self.coordinator() {
            coordinator.activate(self.generation);
        }
    }

    /// The media image was clicked.
    pub fn open_media(&self) {
        if let Some(coordinator) = self.coordinator() {
            coordinator.open_media(self.generation);
        }
    }
}

#[derive(Clone)]
pub struct PromoCoordinator {
    inner: Rc<PromoInner>,
}

impl PromoCoordinator {
    #[must_use]
    pub fn new(
        runtime: &UiRuntime,
        surface: Rc<dyn PromoSurface>,
        transition: TransitionOverlay,
    ) -> Self {
        Self {
            inner: Rc::new(PromoInner {
                surface,
                scheduler: runtime.scheduler(),
                transition,
                timing: runtime.config().promo.clone(),
                generation: Cell::new(0),
                phase: Cell::new(PromoPhase::Hidden),
                card: RefCell::new(None),
                on_click: RefCell::new(None),
                auto_hide: Cell::new(None),
                exit_clear: Cell::new(None),
            }),
        }
    }

    #[must_use]
    pub fn phase(&self) -> PromoPhase {
        self.inner.phase.get()
    }

    #[must_use]
    pub fn is_shown(&self) -> bool {
        self.phase() == PromoPhase::Shown
    }

    #[must_use]
    pub fn current_card(&self) -> Option<PromoCard> {
        self.inner.card.borrow().clone()
    }

    fn cancel(&self, slot: &Cell<Option<TimerId>>) {
        if let Some(id) = slot.take() {
            self.inner.scheduler.cancel(id);
        }
    }

    fn events(&self, generation: u64) -> PromoEvents {
        PromoEvents {
            coordinator: Rc::downgrade(&self.inner),
            generation,
        }
    }

    /// Render a card, replacing any visible one. Returns its generation.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are invalid or the card cannot be
    /// rendered.
    pub fn show(&self, options: PromoOptions) -> Result<u64, UiError> {
        let options = options.validated()?;
        let inner = &self.inner;
        let generation = inner.generation.get() + 1;
        inner.generation.set(generation);
        self.cancel(&inner.auto_hide);
        self.cancel(&inner.exit_clear);

        let card = PromoCard {
            generation,
            media: PromoMedia::resolve(&options.icon, options.use_transition_gif),
            title: options.title,
            body: options.body,
            cta: options.cta,
        };
        *inner.on_click.borrow_mut() = options.on_click;
        inner.surface.render(&card, self.events(generation))?;
        *inner.card.borrow_mut() = Some(card);
        inner.surface.set_phase(PromoPhase::Shown)?;
        inner.phase.set(PromoPhase::Shown);

        if options.duration_ms > 0 {
            let weak = Rc::downgrade(&self.inner);
            let timer = inner.scheduler.schedule(
                options.duration_ms,
                Box::new(move || {
                    let Some(inner) = weak.upgrade() else {
                        return;
                    };
                    if inner.generation.get() != generation {
                        return;
                    }
                    inner.auto_hide.set(None);
                    PromoCoordinator { inner }.hide();
                }),
            );
            inner.auto_hide.set(Some(timer));
        }
        Ok(generation)
    }

    /// Play the exit phase and clear the card once it finishes. Returns
    /// `false` when no card was shown.
    pub fn hide(&self) -> bool {
        let inner = &self.inner;
        if inner.phase.get() != PromoPhase::Shown {
            return false;
        }
        self.cancel(&inner.auto_hide);
        inner.phase.set(PromoPhase::Exiting);
        if let Err(err) = inner.surface.set_phase(PromoPhase::Exiting) {
            log::debug!("promo exit not animated: {err}");
        }

        let generation = inner.generation.get();
        let weak = Rc::downgrade(&self.inner);
        let timer = inner.scheduler.schedule(
            inner.timing.exit_clear_ms,
            Box::new(move || {
                let Some(inner) = weak.upgrade() else {
                    return;
                };
                if inner.generation.get() != generation || inner.phase.get() != PromoPhase::Exiting
                {
                    return;
                }
                inner.exit_clear.set(None);
                inner.phase.set(PromoPhase::Hidden);
                inner.card.borrow_mut().take();
                inner.on_click.borrow_mut().take();
                if let Err(err) = inner
                    .surface
                    .clear()
                    .and_then(|()| inner.surface.set_phase(PromoPhase::Hidden))
                {
                    log::debug!("promo not cleared: {err}");
                }
            }),
        );
        inner.exit_clear.set(Some(timer));
        true
    }

    fn activate(&self, generation: u64) {
        if generation != self.inner.generation.get() || !self.is_shown() {
            return;
        }
        let action = self.inner.on_click.borrow().clone();
        if let Some(action) = action {
            action();
        }
        // The action may have shown a replacement card.
        if generation == self.inner.generation.get() {
            self.hide();
        }
    }

    fn open_media(&self, generation: u64) {
        if generation != self.inner.generation.get() {
            return;
        }
        let src = self
            .inner
            .card
            .borrow()
            .as_ref()
            .and_then(|card| card.media.image_src().map(str::to_string));
        if let Some(src) = src {
            self.inner.transition.show(
                Some(&src),
                Some(self.inner.timing.image_transition_ms),
                None,
            );
        }
    }
}
