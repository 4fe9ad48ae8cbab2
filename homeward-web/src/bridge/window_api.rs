use homeward_core::{Completion, PromoOptions, UiError};
use js_sys::{Function, Object, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::Window;

use super::{HOME_NAV_GLOBAL, SOUNDS_GLOBAL, TRANSITIONS_GLOBAL, duration_from_js};
use crate::bootstrap::Controls;
use crate::dom;

/// Keeps the exposed closures alive; dropping it unpublishes the globals.
pub struct BridgeBindings {
    window: Window,
    _go_home: Closure<dyn FnMut()>,
    _play_click: Closure<dyn FnMut()>,
    _play_hover: Closure<dyn FnMut()>,
    _show_promo: Closure<dyn FnMut(JsValue)>,
    _hide_promo: Closure<dyn FnMut()>,
    _show_banner: Closure<dyn FnMut()>,
    _hide_banner: Closure<dyn FnMut()>,
    _show_transition: Closure<dyn FnMut(JsValue, JsValue, JsValue)>,
}

impl Drop for BridgeBindings {
    fn drop(&mut self) {
        for name in [HOME_NAV_GLOBAL, SOUNDS_GLOBAL, TRANSITIONS_GLOBAL] {
            let _ = Reflect::delete_property(&self.window, &JsValue::from_str(name));
        }
    }
}

/// Read `showPremiumPromo`'s argument. `undefined`/`null` mean defaults.
///
/// # Errors
/// Returns [`UiError::InvalidOptions`] when the object has the wrong shape.
pub fn promo_options_from_js(value: &JsValue) -> Result<PromoOptions, UiError> {
    if value.is_undefined() || value.is_null() {
        return Ok(PromoOptions::default());
    }
    let options: PromoOptions = serde_wasm_bindgen::from_value(value.clone())
        .map_err(|err| UiError::InvalidOptions(err.to_string()))?;
    let on_click = Reflect::get(value, &JsValue::from_str("onClick"))
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok());
    Ok(match on_click {
        Some(callback) => options.with_on_click(move || call_js(&callback, "onClick")),
        None => options,
    })
}

fn call_js(callback: &Function, label: &str) {
    if let Err(err) = callback.call0(&JsValue::NULL) {
        log::warn!("{label} callback threw: {}", dom::js_error_message(&err));
    }
}

fn set(target: &Object, key: &str, value: &JsValue) -> Result<(), UiError> {
    Reflect::set(target, &JsValue::from_str(key), value)
        .map(|_| ())
        .map_err(dom::dom_error)
}

/// Publish `__homeNav`, `__cc_ui_sounds` and `UITransitions` on `window`.
///
/// # Errors
/// Returns [`UiError::Dom`] if a property cannot be set.
pub fn expose(window: &Window, controls: &Controls) -> Result<BridgeBindings, UiError> {
    let go_home = {
        let nav = controls.nav.clone();
        Closure::wrap(Box::new(move || {
            nav.go_home();
        }) as Box<dyn FnMut()>)
    };
    let home_nav = Object::new();
    set(&home_nav, "goHome", go_home.as_ref())?;

    let play_click = {
        let sounds = controls.sounds.clone();
        Closure::wrap(Box::new(move || sounds.play_click()) as Box<dyn FnMut()>)
    };
    let play_hover = {
        let sounds = controls.sounds.clone();
        Closure::wrap(Box::new(move || sounds.play_hover()) as Box<dyn FnMut()>)
    };
    let sounds = Object::new();
    set(&sounds, "playClick", play_click.as_ref())?;
    set(&sounds, "playHover", play_hover.as_ref())?;

    let show_promo = {
        let promo = controls.promo.clone();
        Closure::wrap(Box::new(move |options: JsValue| {
            let shown = promo_options_from_js(&options).and_then(|options| promo.show(options));
            if let Err(err) = shown {
                log::warn!("showPremiumPromo: {err}");
            }
        }) as Box<dyn FnMut(JsValue)>)
    };
    let hide_promo = {
        let promo = controls.promo.clone();
        Closure::wrap(Box::new(move || {
            promo.hide();
        }) as Box<dyn FnMut()>)
    };
    let show_banner = {
        let banner = controls.banner.clone();
        Closure::wrap(Box::new(move || {
            banner.show();
        }) as Box<dyn FnMut()>)
    };
    let hide_banner = {
        let banner = controls.banner.clone();
        Closure::wrap(Box::new(move || banner.accept()) as Box<dyn FnMut()>)
    };
    let show_transition = {
        let transition = controls.transition.clone();
        Closure::wrap(Box::new(move |src: JsValue, duration: JsValue, done: JsValue| {
            let src = src.as_string();
            let callback: Option<Completion> = done.dyn_into::<Function>().ok().map(|f| {
                Box::new(move || call_js(&f, "showTransitionOverlay")) as Completion
            });
            transition.show(src.as_deref(), duration_from_js(duration.as_f64()), callback);
        }) as Box<dyn FnMut(JsValue, JsValue, JsValue)>)
    };
    let transitions = Object::new();
    set(&transitions, "showPremiumPromo", show_promo.as_ref())?;
    set(&transitions, "hidePremiumPromo", hide_promo.as_ref())?;
    set(&transitions, "showCookieBanner", show_banner.as_ref())?;
    set(&transitions, "hideCookieBanner", hide_banner.as_ref())?;
    set(&transitions, "showTransitionOverlay", show_transition.as_ref())?;

    set(window, HOME_NAV_GLOBAL, &home_nav)?;
    set(window, SOUNDS_GLOBAL, &sounds)?;
    set(window, TRANSITIONS_GLOBAL, &transitions)?;

    Ok(BridgeBindings {
        window: window.clone(),
        _go_home: go_home,
        _play_click: play_click,
        _play_hover: play_hover,
        _show_promo: show_promo,
        _hide_promo: hide_promo,
        _show_banner: show_banner,
        _hide_banner: hide_banner,
        _show_transition: show_transition,
    })
}
