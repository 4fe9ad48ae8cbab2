//! UI sound effects.
//!
//! Browsers refuse to start audio before a user gesture, so the context is
//! created lazily by the first click or pointer-enter. Every synthesis failure
//! is swallowed: sound is decoration.

use std::cell::RefCell;

use serde::{Deserialize, Serialize};

use crate::UiError;
use crate::runtime::Preferences;

/// Elements that receive click and hover sounds.
pub const INTERACTIVE_SELECTORS: &str = ".dept, .cta, a, button";

/// Gain floor; exponential ramps cannot reach zero.
pub const ENVELOPE_FLOOR: f32 = 0.0001;
const ATTACK_S: f64 = 0.01;
const STOP_TAIL_S: f64 = 0.02;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Waveform {
    Sine,
    Triangle,
    Square,
    Sawtooth,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tone {
    pub frequency_hz: f32,
    pub waveform: Waveform,
    pub duration_s: f64,
    pub volume: f32,
}

impl Tone {
    pub const CLICK: Self = Self {
        frequency_hz: 660.0,
        waveform: Waveform::Sine,
        duration_s: 0.09,
        volume: 0.08,
    };

    pub const HOVER: Self = Self {
        frequency_hz: 920.0,
        waveform: Waveform::Triangle,
        duration_s: 0.06,
        volume: 0.03,
    };

    #[must_use]
    pub fn envelope(&self) -> Envelope {
        Envelope {
            floor: ENVELOPE_FLOOR,
            peak: self.volume.max(ENVELOPE_FLOOR),
            attack_end_s: ATTACK_S,
            decay_end_s: self.duration_s.max(ATTACK_S),
            stop_s: self.duration_s.max(ATTACK_S) + STOP_TAIL_S,
        }
    }
}

/// Gain automation for one tone. Times are offsets from the start instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Envelope {
    pub floor: f32,
    pub peak: f32,
    pub attack_end_s: f64,
    pub decay_end_s: f64,
    pub stop_s: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoundConfig {
    pub click: Tone,
    pub hover: Tone,
}

impl Default for SoundConfig {
    fn default() -> Self {
        Self {
            click: Tone::CLICK,
            hover: Tone::HOVER,
        }
    }
}

impl SoundConfig {
    /// # Errors
    ///
    /// Returns an error if a tone has a non-positive frequency or duration, or
    /// a volume outside `(0, 1]`.
    pub fn validate(&self) -> Result<(), UiError> {
        for (field, tone) in [("sound.click", &self.click), ("sound.hover", &self.hover)] {
            if tone.frequency_hz <= 0.0 || tone.duration_s <= 0.0 {
                return Err(UiError::invalid_config(
                    field,
                    "frequency and duration must be positive",
                ));
            }
            if !(tone.volume > 0.0 && tone.volume <= 1.0) {
                return Err(UiError::invalid_config(
                    field,
                    format!("volume must be in (0, 1] (got {})", tone.volume),
                ));
            }
        }
        Ok(())
    }
}

/// A live audio context.
pub trait ToneContext {
    fn is_suspended(&self) -> bool;

    /// Ask a suspended context to resume. Fire and forget.
    fn resume(&self);

    /// Synthesize one enveloped tone starting now.
    ///
    /// # Errors
    ///
    /// Returns an error if the oscillator graph cannot be built.
    fn play(&self, tone: &Tone, envelope: &Envelope) -> Result<(), UiError>;
}

/// Creates the audio context on demand.
pub trait AudioFactory {
    type Context: ToneContext;

    /// # Errors
    ///
    /// Returns an error if the platform has no usable audio context.
    fn create(&self) -> Result<Self::Context, UiError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Click,
    PointerEnter,
}

pub struct SoundManager<F: AudioFactory> {
    factory: F,
    context: RefCell<Option<F::Context>>,
    enabled: bool,
    reduce_motion: bool,
    config: SoundConfig,
}

impl<F: AudioFactory> SoundManager<F> {
    #[must_use]
    pub const fn new(factory: F, preferences: Preferences, config: SoundConfig) -> Self {
        Self {
            factory,
            context: RefCell::new(None),
            enabled: true,
            reduce_motion: preferences.reduce_motion,
            config,
        }
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.context.borrow().is_some()
    }

    /// Hover listeners are only attached when motion is allowed.
    #[must_use]
    pub const fn binds_hover(&self) -> bool {
        !self.reduce_motion
    }

    pub fn init_audio(&self) {
        if self.is_initialized() {
            return;
        }
        match self.factory.create() {
            Ok(context) => {
                *self.context.borrow_mut() = Some(context);
                log::debug!("audio context created");
            }
            Err(err) => log::debug!("audio unavailable: {err}"),
        }
    }

    /// Listener entry point: initialize, wake the context, then play.
    pub fn on_gesture(&self, gesture: Gesture) {
        self.init_audio();
        if let Some(context) = self.context.borrow().as_ref() {
            if context.is_suspended() {
                context.resume();
            }
        }
        match gesture {
            Gesture::Click => self.play_click(),
            Gesture::PointerEnter => self.play_hover(),
        }
    }

    pub fn play_click(&self) {
        self.play_tone(&self.config.click);
    }

    pub fn play_hover(&self) {
        if self.reduce_motion {
            return;
        }
        self.play_tone(&self.config.hover);
    }

    fn play_tone(&self, tone: &Tone) {
        if !self.enabled {
            return;
        }
        let context = self.context.borrow();
        let Some(context) = context.as_ref() else {
            return;
        };
        if let Err(err) = context.play(tone, &tone.envelope()) {
            log::debug!("ui tone skipped: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Speaker {
        played: RefCell<Vec<f32>>,
        suspended: Cell<bool>,
        resumed: Cell<u32>,
    }

    struct SharedSpeaker(Rc<Speaker>);

    impl ToneContext for SharedSpeaker {
        fn is_suspended(&self) -> bool {
            self.0.suspended.get()
        }

        fn resume(&self) {
            self.0.resumed.set(self.0.resumed.get() + 1);
            self.0.suspended.set(false);
        }

        fn play(&self, tone: &Tone, _envelope: &Envelope) -> Result<(), UiError> {
            self.0.played.borrow_mut().push(tone.frequency_hz);
            Ok(())
        }
    }

    struct Factory {
        speaker: Rc<Speaker>,
        available: bool,
    }

    impl AudioFactory for Factory {
        type Context = SharedSpeaker;

        fn create(&self) -> Result<SharedSpeaker, UiError> {
            if self.available {
                Ok(SharedSpeaker(Rc::clone(&self.speaker)))
            } else {
                Err(UiError::Audio("AudioContext missing".into()))
            }
        }
    }

    fn manager(reduce_motion: bool, available: bool) -> (Rc<Speaker>, SoundManager<Factory>) {
        let speaker = Rc::new(Speaker::default());
        let factory = Factory {
            speaker: Rc::clone(&speaker),
            available,
        };
        let manager = SoundManager::new(
            factory,
            Preferences { reduce_motion },
            SoundConfig::default(),
        );
        (speaker, manager)
    }

    #[test]
    fn silent_until_first_gesture() {
        let (speaker, sounds) = manager(false, true);
        sounds.play_click();
        sounds.play_hover();
        assert!(speaker.played.borrow().is_empty());
        sounds.on_gesture(Gesture::Click);
        sounds.play_hover();
        assert_eq!(*speaker.played.borrow(), vec![660.0, 920.0]);
    }

    #[test]
    fn reduced_motion_mutes_hover_only() {
        let (speaker, sounds) = manager(true, true);
        assert!(!sounds.binds_hover());
        sounds.on_gesture(Gesture::PointerEnter);
        sounds.play_hover();
        assert!(speaker.played.borrow().is_empty());
        sounds.on_gesture(Gesture::Click);
        assert_eq!(*speaker.played.borrow(), vec![660.0]);
    }

    #[test]
    fn suspended_context_is_resumed_before_playing() {
        let (speaker, sounds) = manager(false, true);
        speaker.suspended.set(true);
        sounds.on_gesture(Gesture::Click);
        assert_eq!(speaker.resumed.get(), 1);
        assert_eq!(speaker.played.borrow().len(), 1);
    }

    #[test]
    fn missing_audio_is_swallowed() {
        let (speaker, sounds) = manager(false, false);
        sounds.on_gesture(Gesture::Click);
        assert!(!sounds.is_initialized());
        assert!(speaker.played.borrow().is_empty());
    }

    #[test]
    fn envelope_ramps_from_floor_and_stops_after_decay() {
        let env = Tone::CLICK.envelope();
        assert_eq!(env.floor, ENVELOPE_FLOOR);
        assert_eq!(env.peak, 0.08);
        assert!(env.attack_end_s < env.decay_end_s);
        assert!((env.stop_s - 0.11).abs() < 1e-9);
    }

    #[test]
    fn config_rejects_loud_tones() {
        let mut cfg = SoundConfig::default();
        assert!(cfg.validate().is_ok());
        cfg.hover.volume = 1.5;
        assert!(cfg.validate().is_err());
    }
}
