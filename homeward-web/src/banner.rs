//! Cookie consent banner container.

use homeward_core::{BannerSurface, ConsentBanner, UiError};
use web_sys::{Document, HtmlElement};
use yew::{AppHandle, Callback};

use crate::components::cookie_banner::{CookieBannerView, DEFAULT_MESSAGE, Props};
use crate::dom;

pub const BANNER_CLASS: &str = "cookie-banner";

#[derive(Clone)]
pub struct BannerDom {
    root: HtmlElement,
}

impl BannerDom {
    /// # Errors
    /// Returns [`UiError::Dom`] if the container cannot be attached.
    pub fn create(doc: &Document) -> Result<Self, UiError> {
        let root = dom::create_html(doc, "div")?;
        root.set_class_name(BANNER_CLASS);
        root.set_attribute("role", "dialog").map_err(dom::dom_error)?;
        root.set_attribute("aria-live", "polite")
            .map_err(dom::dom_error)?;
        dom::body(doc)?
            .append_child(&root)
            .map_err(dom::dom_error)?;
        Ok(Self { root })
    }

    /// Render the banner content wired to `banner`.
    #[must_use]
    pub fn mount(&self, banner: &ConsentBanner) -> AppHandle<CookieBannerView> {
        let accept = banner.clone();
        let manage = banner.clone();
        let props = Props {
            message: DEFAULT_MESSAGE.into(),
            on_accept: Callback::from(move |()| accept.accept()),
            on_manage: Callback::from(move |()| manage.manage()),
        };
        yew::Renderer::<CookieBannerView>::with_root_and_props(self.root.clone().into(), props).render()
    }

    pub fn remove(&self) {
        self.root.remove();
    }
}

impl BannerSurface for BannerDom {
    fn set_visible(&self, visible: bool) -> Result<(), UiError> {
        dom::toggle_class(&self.root, "show", visible)
    }
}
