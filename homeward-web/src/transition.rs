//! Fullscreen transition overlay element.

use homeward_core::{TransitionSurface, UiError};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlImageElement};

use crate::{a11y, dom, paths};

pub const OVERLAY_CLASS: &str = "transition-overlay";

pub struct TransitionDom {
    root: HtmlElement,
    image: HtmlImageElement,
}

impl TransitionDom {
    /// # Errors
    /// Returns [`UiError::Dom`] if the overlay cannot be built or attached.
    pub fn create(doc: &Document) -> Result<Self, UiError> {
        let root = dom::create_html(doc, "div")?;
        root.set_class_name(OVERLAY_CLASS);
        a11y::set_aria_hidden(&root, true);

        let surround = dom::create_html(doc, "div")?;
        surround.set_class_name("surround");
        a11y::set_aria_hidden(&surround, true);

        let image = doc
            .create_element("img")
            .map_err(dom::dom_error)?
            .dyn_into::<HtmlImageElement>()
            .map_err(|_| UiError::Dom("<img> is not an image element".to_string()))?;
        image.set_alt("transition");

        root.append_child(&surround).map_err(dom::dom_error)?;
        root.append_child(&image).map_err(dom::dom_error)?;
        dom::body(doc)?
            .append_child(&root)
            .map_err(dom::dom_error)?;
        Ok(Self { root, image })
    }

    pub fn remove(&self) {
        self.root.remove();
    }
}

impl TransitionSurface for TransitionDom {
    fn reveal(&self, src: &str) -> Result<(), UiError> {
        self.image.set_src(&paths::image_src(src));
        dom::toggle_class(&self.root, "show", true)?;
        a11y::set_aria_hidden(&self.root, false);
        Ok(())
    }

    fn conceal(&self) -> Result<(), UiError> {
        dom::toggle_class(&self.root, "show", false)?;
        a11y::set_aria_hidden(&self.root, true);
        Ok(())
    }
}
