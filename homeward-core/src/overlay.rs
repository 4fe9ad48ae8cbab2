//! Shared navigation overlay.
//!
//! Several independent installers need the same full-screen overlay. The
//! registry finds it by its well-known id and only creates it when missing, so
//! every caller converges on a single element.

use std::cell::Cell;
use std::rc::Rc;

use crate::UiError;

/// Well-known id of the navigation overlay element.
pub const OVERLAY_ID: &str = "ptOverlay";

/// Class toggled on the overlay while it is shown.
pub const SHOW_CLASS: &str = "show";

/// Visible state of the overlay.
///
/// The class, opacity and pointer-events are derived from one value so a host
/// can never apply a mixed pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayState {
    Hidden,
    Shown,
}

impl OverlayState {
    #[must_use]
    pub const fn is_shown(self) -> bool {
        matches!(self, Self::Shown)
    }

    #[must_use]
    pub const fn opacity(self) -> &'static str {
        match self {
            Self::Hidden => "0",
            Self::Shown => "1",
        }
    }

    #[must_use]
    pub const fn pointer_events(self) -> &'static str {
        match self {
            Self::Hidden => "none",
            Self::Shown => "auto",
        }
    }
}

/// Construction parameters for the overlay and its spinner child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlaySpec {
    pub id: String,
    pub z_index: i32,
    pub background: String,
    pub transition: String,
    pub spinner_size_px: u32,
    pub spinner_background: String,
    pub spinner_blur_px: u32,
}

impl Default for OverlaySpec {
    fn default() -> Self {
        Self {
            id: OVERLAY_ID.to_string(),
            z_index: 99_998,
            background: "radial-gradient(circle at center, rgba(0,0,0,0.6), rgba(0,0,0,0.95))"
                .to_string(),
            transition: "opacity .45s ease".to_string(),
            spinner_size_px: 84,
            spinner_background:
                "conic-gradient(rgba(255,255,255,0.06), rgba(255,255,255,0.02))".to_string(),
            spinner_blur_px: 6,
        }
    }
}

impl OverlaySpec {
    /// Inline declarations for the container, starting hidden.
    #[must_use]
    pub fn container_style(&self) -> Vec<(&'static str, String)> {
        let hidden = OverlayState::Hidden;
        vec![
            ("position", "fixed".to_string()),
            ("inset", "0".to_string()),
            ("display", "grid".to_string()),
            ("place-items", "center".to_string()),
            ("background", self.background.clone()),
            ("z-index", self.z_index.to_string()),
            ("opacity", hidden.opacity().to_string()),
            ("transition", self.transition.clone()),
            ("pointer-events", hidden.pointer_events().to_string()),
        ]
    }

    #[must_use]
    pub fn spinner_style(&self) -> Vec<(&'static str, String)> {
        let size = format!("{}px", self.spinner_size_px);
        vec![
            ("width", size.clone()),
            ("height", size),
            ("border-radius", "50%".to_string()),
            ("background", self.spinner_background.clone()),
            ("filter", format!("blur({}px)", self.spinner_blur_px)),
        ]
    }
}

/// Host seam over the document holding the overlay.
pub trait OverlaySurface {
    /// Whether an element with `id` is already in the document.
    fn exists(&self, id: &str) -> bool;

    /// Build the overlay (container plus spinner) and attach it.
    ///
    /// # Errors
    ///
    /// Returns an error if the element cannot be created or attached.
    fn create(&self, spec: &OverlaySpec) -> Result<(), UiError>;

    /// Apply class, opacity and pointer-events for `state` in one step.
    ///
    /// # Errors
    ///
    /// Returns an error if the element is missing or cannot be styled.
    fn apply(&self, id: &str, state: OverlayState) -> Result<(), UiError>;
}

/// Generation stamp returned by [`OverlayHandle::show`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowTicket(u64);

struct RegistryInner {
    surface: Rc<dyn OverlaySurface>,
    spec: OverlaySpec,
    generation: Cell<u64>,
}

/// Find-or-create access to the shared overlay.
#[derive(Clone)]
pub struct OverlayRegistry {
    inner: Rc<RegistryInner>,
}

impl OverlayRegistry {
    #[must_use]
    pub fn new(surface: Rc<dyn OverlaySurface>, spec: OverlaySpec) -> Self {
        Self {
            inner: Rc::new(RegistryInner {
                surface,
                spec,
                generation: Cell::new(0),
            }),
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.inner.spec.id
    }

    /// Return a handle to the overlay, creating the element if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the overlay is missing and cannot be created.
    pub fn ensure(&self) -> Result<OverlayHandle, UiError> {
        if !self.inner.surface.exists(self.id()) {
            self.inner.surface.create(&self.inner.spec)?;
            log::debug!("created overlay #{}", self.id());
        }
        Ok(self.handle())
    }

    /// Handle to the overlay only if some installer already created it.
    #[must_use]
    pub fn find(&self) -> Option<OverlayHandle> {
        self.inner
            .surface
            .exists(self.id())
            .then(|| self.handle())
    }

    fn handle(&self) -> OverlayHandle {
        OverlayHandle {
            registry: self.clone(),
        }
    }
}

/// Show/hide access to an overlay known to exist.
#[derive(Clone)]
pub struct OverlayHandle {
    registry: OverlayRegistry,
}

impl OverlayHandle {
    fn bump(&self) -> u64 {
        let generation = &self.registry.inner.generation;
        let next = generation.get() + 1;
        generation.set(next);
        next
    }

    fn apply(&self, state: OverlayState) -> Result<(), UiError> {
        let inner = &self.registry.inner;
        inner.surface.apply(&inner.spec.id, state)
    }

    /// # Errors
    ///
    /// Returns an error if the host cannot style the overlay.
    pub fn show(&self) -> Result<ShowTicket, UiError> {
        let ticket = ShowTicket(self.bump());
        self.apply(OverlayState::Shown)?;
        Ok(ticket)
    }

    /// # Errors
    ///
    /// Returns an error if the host cannot style the overlay.
    pub fn hide(&self) -> Result<(), UiError> {
        self.bump();
        self.apply(OverlayState::Hidden)
    }

    /// Hide only if nobody showed or hid the overlay since `ticket` was issued.
    ///
    /// # Errors
    ///
    /// Returns an error if the host cannot style the overlay.
    pub fn hide_if_current(&self, ticket: ShowTicket) -> Result<bool, UiError> {
        if self.registry.inner.generation.get() != ticket.0 {
            return Ok(false);
        }
        self.hide()?;
        Ok(true)
    }
}
