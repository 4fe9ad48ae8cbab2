//! The injected "Home" button and its keyboard shortcut.

use std::rc::Rc;

use homeward_core::nav::{BRANDING_SELECTORS, HEADER_SELECTORS};
use homeward_core::{FocusTarget, HomeNav, Modifiers, PageLayout, Placement, UiError};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, KeyboardEvent};

use crate::dom::{self, EventBinding};

pub const BUTTON_CLASS: &str = "home-nav-btn";

const BASE_STYLE: [(&str, &str); 11] = [
    ("display", "inline-flex"),
    ("align-items", "center"),
    ("gap", "8px"),
    ("padding", "6px 10px"),
    ("height", "36px"),
    ("border-radius", "10px"),
    ("background", "transparent"),
    ("border", "1px solid rgba(255,255,255,0.06)"),
    ("color", "var(--muted, #cbd6ee)"),
    ("cursor", "pointer"),
    ("font-weight", "700"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonIcon {
    FontAwesome,
    Emoji,
}

impl ButtonIcon {
    #[must_use]
    pub const fn markup(self) -> &'static str {
        match self {
            Self::FontAwesome => r#"<i class="fas fa-home" aria-hidden="true"></i>"#,
            Self::Emoji => "🏠",
        }
    }

    /// FontAwesome counts as present when its global is defined or its
    /// stylesheet is linked.
    #[must_use]
    pub fn detect(doc: &Document) -> Self {
        let global = dom::window()
            .and_then(|win| js_sys::Reflect::has(&win, &"FontAwesome".into()).ok())
            .unwrap_or(false);
        let linked = doc
            .query_selector(r#"link[href*="font-awesome"]"#)
            .ok()
            .flatten()
            .is_some();
        if global || linked {
            Self::FontAwesome
        } else {
            Self::Emoji
        }
    }
}

#[must_use]
pub fn button_markup(icon: ButtonIcon) -> String {
    format!(r#"{}&nbsp;<span class="hn-label">Home</span>"#, icon.markup())
}

/// Header and branding elements found on the page.
struct Anchors {
    header: Option<Element>,
    branding: Option<Element>,
}

impl Anchors {
    fn probe(doc: &Document) -> Self {
        let header = doc
            .document_element()
            .and_then(|root| dom::query_first(&root, &HEADER_SELECTORS));
        let branding = header
            .as_ref()
            .and_then(|h| dom::query_first(h, &BRANDING_SELECTORS))
            .filter(|b| b.parent_node().is_some());
        Self { header, branding }
    }

    const fn layout(&self) -> PageLayout {
        PageLayout {
            has_header: self.header.is_some(),
            has_branding: self.branding.is_some(),
        }
    }
}

/// A mounted button plus the listeners that drive navigation.
pub struct HomeButton {
    element: HtmlElement,
    _bindings: Vec<EventBinding>,
}

impl HomeButton {
    /// Build the button, place it by the first strategy that applies, and
    /// bind the click and the document-wide shortcut.
    ///
    /// # Errors
    /// Returns [`UiError::Dom`] if the button cannot be created or inserted.
    pub fn mount(doc: &Document, nav: Rc<HomeNav>) -> Result<Self, UiError> {
        let button = dom::create_html(doc, "button")?;
        button.set_class_name(BUTTON_CLASS);
        button.set_title("Home");
        button
            .set_attribute("aria-label", "Go to Home")
            .map_err(dom::dom_error)?;
        button.set_inner_html(&button_markup(ButtonIcon::detect(doc)));
        dom::set_styles(&button, &BASE_STYLE)?;

        let anchors = Anchors::probe(doc);
        let placement = Placement::resolve(&anchors.layout());
        dom::set_styles(&button, placement.extra_style())?;
        insert(doc, &button, placement, &anchors)?;
        log::debug!("home button placed: {placement:?}");

        let click = {
            let nav = Rc::clone(&nav);
            EventBinding::new(&button, "click", move |event: Event| {
                event.prevent_default();
                nav.go_home();
            })?
        };
        let key = EventBinding::new(doc, "keydown", move |event: Event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let modifiers = Modifiers {
                ctrl: event.ctrl_key(),
                meta: event.meta_key(),
                alt: event.alt_key(),
            };
            if nav
                .handle_chord(&event.key(), modifiers, &focus_target(event))
                .is_some()
            {
                event.prevent_default();
            }
        })?;

        Ok(Self {
            element: button,
            _bindings: vec![click, key],
        })
    }

    /// Detach the button; dropping `self` removes its listeners.
    pub fn unmount(self) {
        self.element.remove();
    }
}

fn insert(
    doc: &Document,
    button: &HtmlElement,
    placement: Placement,
    anchors: &Anchors,
) -> Result<(), UiError> {
    match (placement, &anchors.header, &anchors.branding) {
        (Placement::AfterBranding, _, Some(branding)) => {
            let parent = branding
                .parent_node()
                .ok_or_else(|| UiError::Dom("branding element detached".to_string()))?;
            parent
                .insert_before(button, branding.next_sibling().as_ref())
                .map_err(dom::dom_error)?;
        }
        (Placement::AppendToHeader, Some(header), _) => {
            header.append_child(button).map_err(dom::dom_error)?;
        }
        _ => {
            dom::body(doc)?
                .append_child(button)
                .map_err(dom::dom_error)?;
        }
    }
    Ok(())
}

/// What had focus when the key went down.
fn focus_target(event: &KeyboardEvent) -> FocusTarget {
    let Some(el) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
        return FocusTarget::default();
    };
    let content_editable = el
        .dyn_ref::<HtmlElement>()
        .is_some_and(HtmlElement::is_content_editable);
    FocusTarget {
        tag_name: Some(el.tag_name().to_ascii_lowercase()),
        content_editable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markup_falls_back_to_emoji() {
        assert_eq!(
            button_markup(ButtonIcon::Emoji),
            r#"🏠&nbsp;<span class="hn-label">Home</span>"#
        );
        assert!(button_markup(ButtonIcon::FontAwesome).starts_with("<i class=\"fas fa-home\""));
    }

    #[test]
    fn base_style_is_a_plain_inline_button() {
        assert!(BASE_STYLE.contains(&("display", "inline-flex")));
        assert!(BASE_STYLE.iter().all(|(name, _)| *name != "position"));
    }
}
