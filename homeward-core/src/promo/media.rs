use once_cell::sync::Lazy;
use regex::Regex;

use super::options::DEFAULT_ICON;
use crate::transition::TRANSITION_GIF;

static IMAGE_REF: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"(?i)\.(gif|png|jpg|jpeg|svg)$").ok());

/// What the promo card shows in its media slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromoMedia {
    /// Emoji or short text.
    Glyph(String),
    Image(String),
    /// The bundled animated image, with decorative crumbs.
    TransitionGif,
}

impl PromoMedia {
    /// An image reference wins; the flag or the `transition.gif` sentinel
    /// only apply to icons that are not images themselves.
    #[must_use]
    pub fn resolve(icon: &str, use_transition_gif: bool) -> Self {
        let icon = icon.trim();
        if is_image_ref(icon) && !icon.eq_ignore_ascii_case(TRANSITION_GIF) {
            Self::Image(icon.to_string())
        } else if use_transition_gif || icon.eq_ignore_ascii_case(TRANSITION_GIF) {
            Self::TransitionGif
        } else if icon.is_empty() {
            Self::Glyph(DEFAULT_ICON.to_string())
        } else {
            Self::Glyph(icon.to_string())
        }
    }

    /// Source to replay fullscreen when the media is clicked.
    #[must_use]
    pub fn image_src(&self) -> Option<&str> {
        match self {
            Self::Glyph(_) => None,
            Self::Image(src) => Some(src),
            Self::TransitionGif => Some(TRANSITION_GIF),
        }
    }
}

#[must_use]
pub fn is_image_ref(icon: &str) -> bool {
    IMAGE_REF.as_ref().is_some_and(|re| re.is_match(icon))
}
