use homeward_core::promo::options::DEFAULT_DURATION_MS;
use homeward_web::bridge::promo_options_from_js;
use js_sys::{Function, Object, Reflect};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

fn options_object(entries: &[(&str, JsValue)]) -> Object {
    let options = Object::new();
    for (key, value) in entries {
        Reflect::set(&options, &JsValue::from_str(key), value).expect("set");
    }
    options
}

#[wasm_bindgen_test]
fn promo_options_accept_plain_objects() {
    let options = options_object(&[
        ("title", "Hello".into()),
        ("duration", JsValue::from_f64(0.0)),
        ("onClick", Function::new_no_args("").into()),
    ]);
    let parsed = promo_options_from_js(&options).expect("options");
    assert_eq!(parsed.title, "Hello");
    assert_eq!(parsed.duration_ms, 0);
    assert_eq!(parsed.cta, "Learn");
    assert!(parsed.on_click.is_some());
}

#[wasm_bindgen_test]
fn only_a_missing_object_gets_the_default_duration() {
    let none = promo_options_from_js(&JsValue::UNDEFINED).expect("defaults");
    assert_eq!(none.duration_ms, DEFAULT_DURATION_MS);

    let without_duration = options_object(&[("title", "T".into()), ("body", "B".into())]);
    let parsed = promo_options_from_js(&without_duration).expect("options");
    assert_eq!(parsed.duration_ms, 0);
}

#[wasm_bindgen_test]
fn odd_durations_still_show_the_card() {
    for raw in [-250.0, f64::NAN, 1200.4] {
        let options = options_object(&[("duration", JsValue::from_f64(raw))]);
        let parsed = promo_options_from_js(&options).expect("options");
        assert_eq!(parsed.duration_ms, if raw > 0.0 { 1200 } else { 0 });
    }
}
