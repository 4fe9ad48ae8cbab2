use std::cell::RefCell;
use std::rc::Rc;

use homeward_core::UiError;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, EventTarget,
    HtmlElement, Storage, Window,
};

/// Retrieve the global `window` object, if running in a browser.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Retrieve the document object for DOM interactions.
#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

#[must_use]
pub fn dom_error(value: JsValue) -> UiError {
    UiError::Dom(js_error_message(&value))
}

#[must_use]
pub fn storage_error(value: JsValue) -> UiError {
    UiError::Storage(js_error_message(&value))
}

#[must_use]
pub fn audio_error(value: JsValue) -> UiError {
    UiError::Audio(js_error_message(&value))
}

/// Access the browser `localStorage` handle.
///
/// # Errors
/// Returns an error if the browser window cannot be accessed or `localStorage` is unavailable.
pub fn local_storage() -> Result<Storage, JsValue> {
    window()
        .ok_or_else(|| JsValue::from_str("window unavailable"))?
        .local_storage()?
        .ok_or_else(|| JsValue::from_str("localStorage unavailable"))
}

/// The document body.
///
/// # Errors
/// Returns [`UiError::Dom`] when the page has no body yet.
pub fn body(doc: &Document) -> Result<HtmlElement, UiError> {
    doc.body()
        .ok_or_else(|| UiError::Dom("document has no body".to_string()))
}

/// Create an element and view it as an `HtmlElement`.
///
/// # Errors
/// Returns [`UiError::Dom`] if the element cannot be created.
pub fn create_html(doc: &Document, tag: &str) -> Result<HtmlElement, UiError> {
    doc.create_element(tag)
        .map_err(dom_error)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| UiError::Dom(format!("<{tag}> is not an HTML element")))
}

/// Look an element up by id as an `HtmlElement`.
///
/// # Errors
/// Returns [`UiError::Dom`] when no such element exists.
pub fn html_by_id(doc: &Document, id: &str) -> Result<HtmlElement, UiError> {
    doc.get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| UiError::Dom(format!("#{id} not found")))
}

/// First match of the first selector in `selectors` that matches anything.
#[must_use]
pub fn query_first(scope: &Element, selectors: &[&str]) -> Option<Element> {
    selectors
        .iter()
        .find_map(|sel| scope.query_selector(sel).ok().flatten())
}

/// Apply inline style declarations.
///
/// # Errors
/// Returns [`UiError::Dom`] if a property is rejected.
pub fn set_styles<V: AsRef<str>>(el: &HtmlElement, decls: &[(&str, V)]) -> Result<(), UiError> {
    let style = el.style();
    for (name, value) in decls {
        style
            .set_property(name, value.as_ref())
            .map_err(dom_error)?;
    }
    Ok(())
}

/// Add or remove a class.
///
/// # Errors
/// Returns [`UiError::Dom`] if the class list rejects the token.
pub fn toggle_class(el: &Element, class: &str, on: bool) -> Result<(), UiError> {
    el.class_list()
        .toggle_with_force(class, on)
        .map(|_| ())
        .map_err(dom_error)
}

/// An event listener that is removed again when dropped.
pub struct EventBinding {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventBinding {
    /// # Errors
    /// Returns [`UiError::Dom`] if the listener cannot be attached.
    pub fn new(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, UiError> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(dom_error)?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }

    /// Same as [`EventBinding::new`] with `{ passive: true }`.
    ///
    /// # Errors
    /// Returns [`UiError::Dom`] if the listener cannot be attached.
    pub fn passive(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, UiError> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                event,
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .map_err(dom_error)?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for EventBinding {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Run `bind` now if the document is parsed, otherwise on `DOMContentLoaded`.
/// Listeners it returns (and the deferral listener itself) land in `sink`.
///
/// # Errors
/// Returns an error from an immediate `bind`, or if deferral cannot be set up.
pub fn when_ready<F>(doc: &Document, sink: Rc<RefCell<Vec<EventBinding>>>, bind: F) -> Result<(), UiError>
where
    F: FnOnce(&Document) -> Result<Vec<EventBinding>, UiError> + 'static,
{
    if doc.ready_state() != "loading" {
        let bindings = bind(doc)?;
        sink.borrow_mut().extend(bindings);
        return Ok(());
    }
    let loaded = doc.clone();
    let deferred = Rc::clone(&sink);
    let mut bind = Some(bind);
    let listener = EventBinding::new(doc, "DOMContentLoaded", move |_: Event| {
        let Some(bind) = bind.take() else {
            return;
        };
        match bind(&loaded) {
            Ok(bindings) => deferred.borrow_mut().extend(bindings),
            Err(err) => log::warn!("deferred binding failed: {err}"),
        }
    })?;
    sink.borrow_mut().push(listener);
    Ok(())
}
