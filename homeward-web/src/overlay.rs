//! DOM rendition of the shared navigation overlay.

use homeward_core::overlay::SHOW_CLASS;
use homeward_core::{OverlaySpec, OverlayState, OverlaySurface, UiError};
use web_sys::Document;

use crate::dom;

pub struct DomOverlay {
    document: Document,
}

impl DomOverlay {
    #[must_use]
    pub const fn new(document: Document) -> Self {
        Self { document }
    }
}

impl OverlaySurface for DomOverlay {
    fn exists(&self, id: &str) -> bool {
        self.document.get_element_by_id(id).is_some()
    }

    fn create(&self, spec: &OverlaySpec) -> Result<(), UiError> {
        let overlay = dom::create_html(&self.document, "div")?;
        overlay.set_id(&spec.id);
        dom::set_styles(&overlay, &spec.container_style())?;

        let spinner = dom::create_html(&self.document, "div")?;
        dom::set_styles(&spinner, &spec.spinner_style())?;
        overlay.append_child(&spinner).map_err(dom::dom_error)?;

        dom::body(&self.document)?
            .append_child(&overlay)
            .map_err(dom::dom_error)?;
        log::debug!("created #{}", spec.id);
        Ok(())
    }

    fn apply(&self, id: &str, state: OverlayState) -> Result<(), UiError> {
        let overlay = dom::html_by_id(&self.document, id)?;
        dom::toggle_class(&overlay, SHOW_CLASS, state.is_shown())?;
        dom::set_styles(
            &overlay,
            &[
                ("opacity", state.opacity()),
                ("pointer-events", state.pointer_events()),
            ],
        )
    }
}
