use homeward_core::{KeyValueStore, OVERLAY_ID};
use homeward_web::storage::LocalStore;
use homeward_web::{bootstrap, dom, styles};
use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;

fn global(path: &[&str]) -> JsValue {
    let mut value: JsValue = dom::window().expect("window").into();
    for key in path {
        value = Reflect::get(&value, &JsValue::from_str(key)).expect("property");
    }
    value
}

fn reset_header() {
    let doc = dom::document().expect("document");
    let body = doc.body().expect("body");
    body.set_inner_html(r#"<header><div class="logo-container">Brand</div><nav></nav></header>"#);
}

#[wasm_bindgen_test]
fn start_installs_once_and_publishes_api() {
    reset_header();
    bootstrap::start().expect("install");
    bootstrap::start().expect("second start is a no-op");

    let doc = dom::document().expect("document");
    assert_eq!(
        doc.query_selector_all(".home-nav-btn").expect("query").length(),
        1
    );
    assert!(doc.get_element_by_id(OVERLAY_ID).is_some());
    assert!(global(&["__homeNav", "goHome"]).is_instance_of::<Function>());
    assert!(global(&["__cc_ui_sounds", "playHover"]).is_instance_of::<Function>());
    assert!(global(&["UITransitions", "showTransitionOverlay"]).is_instance_of::<Function>());

    bootstrap::stop();
    assert!(global(&["UITransitions"]).is_undefined());
    assert!(doc.query_selector(".home-nav-btn").expect("query").is_none());
}

#[wasm_bindgen_test]
fn button_sits_after_branding() {
    reset_header();
    bootstrap::start().expect("install");
    let doc = dom::document().expect("document");
    let logo = doc
        .query_selector(".logo-container")
        .expect("query")
        .expect("logo");
    let next = logo.next_element_sibling().expect("sibling");
    assert_eq!(next.class_name(), "home-nav-btn");
    bootstrap::stop();
}

#[wasm_bindgen_test]
fn stylesheet_is_injected_once() {
    let doc = dom::document().expect("document");
    let _ = styles::inject(&doc).expect("inject");
    assert!(!styles::inject(&doc).expect("inject again"));
    assert_eq!(
        doc.query_selector_all(&format!("#{}", styles::STYLE_ID))
            .expect("query")
            .length(),
        1
    );
}

#[wasm_bindgen_test]
fn local_store_round_trips_consent() {
    let store = LocalStore;
    store.set("homeward.test", "1").expect("write");
    assert_eq!(store.get("homeward.test").expect("read").as_deref(), Some("1"));
    let _ = dom::local_storage().map(|s| s.remove_item("homeward.test"));
}
