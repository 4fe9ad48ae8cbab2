//! WebAudio synthesis for UI sounds.

use std::cell::RefCell;
use std::rc::Rc;

use homeward_core::{
    AudioFactory, Envelope, Gesture, INTERACTIVE_SELECTORS, SoundManager, Tone, ToneContext,
    UiError, Waveform,
};
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{AudioContext, AudioContextState, Document, Event, EventTarget, OscillatorType};

use crate::dom::{self, EventBinding, audio_error};

pub type WebSounds = SoundManager<WebAudioFactory>;

#[derive(Debug, Clone, Copy, Default)]
pub struct WebAudioFactory;

impl AudioFactory for WebAudioFactory {
    type Context = WebToneContext;

    fn create(&self) -> Result<WebToneContext, UiError> {
        AudioContext::new().map(WebToneContext).map_err(audio_error)
    }
}

pub struct WebToneContext(AudioContext);

#[must_use]
pub const fn oscillator_type(waveform: Waveform) -> OscillatorType {
    match waveform {
        Waveform::Sine => OscillatorType::Sine,
        Waveform::Triangle => OscillatorType::Triangle,
        Waveform::Square => OscillatorType::Square,
        Waveform::Sawtooth => OscillatorType::Sawtooth,
    }
}

impl ToneContext for WebToneContext {
    fn is_suspended(&self) -> bool {
        self.0.state() == AudioContextState::Suspended
    }

    fn resume(&self) {
        match self.0.resume() {
            Ok(promise) => spawn_local(async move {
                if let Err(err) = JsFuture::from(promise).await {
                    log::debug!("audio resume rejected: {}", dom::js_error_message(&err));
                }
            }),
            Err(err) => log::debug!("audio resume failed: {}", dom::js_error_message(&err)),
        }
    }

    fn play(&self, tone: &Tone, envelope: &Envelope) -> Result<(), UiError> {
        let ctx = &self.0;
        let osc = ctx.create_oscillator().map_err(audio_error)?;
        let gain = ctx.create_gain().map_err(audio_error)?;
        osc.set_type(oscillator_type(tone.waveform));
        osc.frequency().set_value(tone.frequency_hz);

        let level = gain.gain();
        level.set_value(envelope.floor);
        osc.connect_with_audio_node(&gain).map_err(audio_error)?;
        gain.connect_with_audio_node(&ctx.destination())
            .map_err(audio_error)?;

        let now = ctx.current_time();
        level.cancel_scheduled_values(now).map_err(audio_error)?;
        level
            .set_value_at_time(envelope.floor, now)
            .map_err(audio_error)?;
        level
            .exponential_ramp_to_value_at_time(envelope.peak, now + envelope.attack_end_s)
            .map_err(audio_error)?;
        osc.start_with_when(now).map_err(audio_error)?;
        level
            .exponential_ramp_to_value_at_time(envelope.floor, now + envelope.decay_end_s)
            .map_err(audio_error)?;
        osc.stop_with_when(now + envelope.stop_s)
            .map_err(audio_error)?;
        Ok(())
    }
}

/// Attach click (and, unless reduced motion, pointer-enter) sounds to every
/// interactive element currently in the document.
///
/// # Errors
/// Returns [`UiError::Dom`] if the selector query or a listener fails.
pub fn bind_interactive(doc: &Document, sounds: &Rc<WebSounds>) -> Result<Vec<EventBinding>, UiError> {
    let nodes = doc
        .query_selector_all(INTERACTIVE_SELECTORS)
        .map_err(dom::dom_error)?;
    let mut bindings = Vec::new();
    for index in 0..nodes.length() {
        let Some(node) = nodes.get(index) else {
            continue;
        };
        let target: &EventTarget = &node;
        let on_click = Rc::clone(sounds);
        bindings.push(EventBinding::passive(target, "click", move |_: Event| {
            on_click.on_gesture(Gesture::Click);
        })?);
        if sounds.binds_hover() {
            let on_hover = Rc::clone(sounds);
            bindings.push(EventBinding::new(target, "pointerenter", move |_: Event| {
                on_hover.on_gesture(Gesture::PointerEnter);
            })?);
        }
    }
    log::debug!("ui sounds bound to {} elements", nodes.length());
    Ok(bindings)
}

/// Bind now, or once the document has finished parsing.
///
/// # Errors
/// Returns [`UiError::Dom`] if binding or deferring fails.
pub fn bind_when_ready(
    doc: &Document,
    sounds: Rc<WebSounds>,
    sink: Rc<RefCell<Vec<EventBinding>>>,
) -> Result<(), UiError> {
    dom::when_ready(doc, sink, move |doc| bind_interactive(doc, &sounds))
}
