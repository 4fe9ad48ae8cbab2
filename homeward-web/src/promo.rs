//! Promo card container, rendered with yew.

use std::cell::RefCell;

use homeward_core::{PromoCard, PromoEvents, PromoPhase, PromoSurface, UiError};
use web_sys::{Document, HtmlElement};
use yew::AppHandle;

use crate::components::promo_card::{Props, PromoCardView};
use crate::{a11y, dom};

pub const WRAP_CLASS: &str = "promo-wrap";

/// `(show, hide, aria-hidden)` for a phase.
#[must_use]
pub const fn phase_classes(phase: PromoPhase) -> (bool, bool, bool) {
    match phase {
        PromoPhase::Shown => (true, false, false),
        PromoPhase::Exiting => (false, true, false),
        PromoPhase::Hidden => (false, false, true),
    }
}

pub struct PromoDom {
    wrap: HtmlElement,
    app: RefCell<Option<AppHandle<PromoCardView>>>,
}

impl PromoDom {
    /// # Errors
    /// Returns [`UiError::Dom`] if the wrapper cannot be attached.
    pub fn create(doc: &Document) -> Result<Self, UiError> {
        let wrap = dom::create_html(doc, "div")?;
        wrap.set_class_name(WRAP_CLASS);
        a11y::set_aria_hidden(&wrap, true);
        dom::body(doc)?
            .append_child(&wrap)
            .map_err(dom::dom_error)?;
        Ok(Self {
            wrap,
            app: RefCell::new(None),
        })
    }

    fn unmount(&self) {
        let previous = self.app.borrow_mut().take();
        if let Some(app) = previous {
            app.destroy();
        }
    }

    pub fn remove(&self) {
        self.unmount();
        self.wrap.remove();
    }
}

impl PromoSurface for PromoDom {
    fn render(&self, card: &PromoCard, events: PromoEvents) -> Result<(), UiError> {
        self.unmount();
        self.wrap.set_inner_html("");
        let props = Props::from_card(card, events);
        let app = yew::Renderer::<PromoCardView>::with_root_and_props(self.wrap.clone().into(), props)
            .render();
        *self.app.borrow_mut() = Some(app);
        Ok(())
    }

    fn set_phase(&self, phase: PromoPhase) -> Result<(), UiError> {
        let (show, hide, hidden) = phase_classes(phase);
        dom::toggle_class(&self.wrap, "show", show)?;
        dom::toggle_class(&self.wrap, "hide", hide)?;
        a11y::set_aria_hidden(&self.wrap, hidden);
        Ok(())
    }

    fn clear(&self) -> Result<(), UiError> {
        self.unmount();
        self.wrap.set_inner_html("");
        Ok(())
    }
}
