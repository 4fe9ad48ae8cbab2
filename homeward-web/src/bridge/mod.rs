//! JavaScript API published on `window`.

mod window_api;

pub use window_api::{BridgeBindings, expose, promo_options_from_js};

pub const HOME_NAV_GLOBAL: &str = "__homeNav";
pub const SOUNDS_GLOBAL: &str = "__cc_ui_sounds";
pub const TRANSITIONS_GLOBAL: &str = "UITransitions";

/// Milliseconds from a JS number. Missing, non-finite or negative values
/// fall back to the configured default.
#[must_use]
pub fn duration_from_js(value: Option<f64>) -> Option<u32> {
    let ms = value.filter(|v| v.is_finite() && *v >= 0.0)?;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let ms = ms.round().min(f64::from(u32::MAX)) as u32;
    Some(ms)
}
