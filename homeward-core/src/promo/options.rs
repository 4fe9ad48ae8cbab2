use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Deserializer};

use crate::UiError;

/// Callback run when the promo action button is pressed.
pub type PromoAction = Rc<dyn Fn()>;

pub const DEFAULT_TITLE: &str = "Premium";
pub const DEFAULT_BODY: &str = "Upgrade for perks";
pub const DEFAULT_ICON: &str = "⭐";
pub const DEFAULT_CTA: &str = "Learn";
pub const DEFAULT_DURATION_MS: u32 = 6000;

/// Promo card configuration. Keys follow the JavaScript API (camelCase) and
/// every field is optional.
#[derive(Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PromoOptions {
    pub title: String,
    pub body: String,
    /// Emoji/text, an image reference, or `transition.gif`.
    pub icon: String,
    pub cta: String,
    /// Auto-dismiss delay; 0 keeps the card until dismissed. Only the
    /// options-less call gets [`DEFAULT_DURATION_MS`]; a supplied object
    /// without `duration` never auto-hides.
    #[serde(rename = "duration", default, deserialize_with = "lenient_duration")]
    pub duration_ms: u32,
    pub use_transition_gif: bool,
    #[serde(skip)]
    pub on_click: Option<PromoAction>,
}

impl Default for PromoOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            body: DEFAULT_BODY.to_string(),
            icon: DEFAULT_ICON.to_string(),
            cta: DEFAULT_CTA.to_string(),
            duration_ms: DEFAULT_DURATION_MS,
            use_transition_gif: false,
            on_click: None,
        }
    }
}

/// Milliseconds from any JSON number: missing, non-finite or non-positive
/// values mean "no auto-hide", fractions round.
#[must_use]
pub fn duration_ms_from(raw: Option<f64>) -> u32 {
    match raw {
        Some(ms) if ms.is_finite() && ms > 0.0 => {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let ms = ms.round().min(f64::from(u32::MAX)) as u32;
            ms
        }
        _ => 0,
    }
}

fn lenient_duration<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    Option::<f64>::deserialize(deserializer).map(duration_ms_from)
}

impl fmt::Debug for PromoOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PromoOptions")
            .field("title", &self.title)
            .field("body", &self.body)
            .field("icon", &self.icon)
            .field("cta", &self.cta)
            .field("duration_ms", &self.duration_ms)
            .field("use_transition_gif", &self.use_transition_gif)
            .field("on_click", &self.on_click.is_some())
            .finish()
    }
}

impl PromoOptions {
    #[must_use]
    pub fn with_on_click(mut self, action: impl Fn() + 'static) -> Self {
        self.on_click = Some(Rc::new(action));
        self
    }

    /// Trim text, restore defaults for blank icon and cta, and reject a card
    /// with nothing to say.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::InvalidOptions`] when both title and body are blank.
    pub fn validated(mut self) -> Result<Self, UiError> {
        self.title = self.title.trim().to_string();
        self.body = self.body.trim().to_string();
        self.icon = self.icon.trim().to_string();
        self.cta = self.cta.trim().to_string();
        if self.title.is_empty() && self.body.is_empty() {
            return Err(UiError::InvalidOptions(
                "a promo needs a title or a body".to_string(),
            ));
        }
        if self.icon.is_empty() {
            self.icon = DEFAULT_ICON.to_string();
        }
        if self.cta.is_empty() {
            self.cta = DEFAULT_CTA.to_string();
        }
        Ok(self)
    }
}
