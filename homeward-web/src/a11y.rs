// Accessibility helpers

use web_sys::Element;

/// Media query for the user's reduced-motion preference.
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Focus ring and screen-reader utility rules, injected with the stylesheet.
#[must_use]
pub const fn visible_focus_css() -> &'static str {
    ".home-nav-btn:focus-visible,.cb-btn:focus-visible,.promo-card .cta:focus-visible{outline:3px solid #00D9C0;outline-offset:2px} .sr-only{position:absolute;width:1px;height:1px;margin:-1px;overflow:hidden;clip:rect(0 0 0 0);white-space:nowrap;}"
}

/// Whether the user asked for reduced motion.
///
/// Read once at start-up; a missing `matchMedia` counts as "no preference".
#[must_use]
pub fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|win| win.match_media(REDUCED_MOTION_QUERY).ok().flatten())
        .is_some_and(|mql| mql.matches())
}

#[must_use]
pub const fn aria_hidden_value(hidden: bool) -> &'static str {
    if hidden { "true" } else { "false" }
}

/// Toggle `aria-hidden` on a decorative or dismissed region.
pub fn set_aria_hidden(el: &Element, hidden: bool) {
    let _ = el.set_attribute("aria-hidden", aria_hidden_value(hidden));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aria_values_are_literal_booleans() {
        assert_eq!(aria_hidden_value(true), "true");
        assert_eq!(aria_hidden_value(false), "false");
    }

    #[test]
    fn focus_css_targets_injected_controls() {
        let css = visible_focus_css();
        assert!(css.contains(".home-nav-btn:focus-visible"));
        assert!(css.contains(".sr-only"));
    }
}
