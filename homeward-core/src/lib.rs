//! Homeward Core
//!
//! Platform-agnostic coordination for Homeward's page embellishments: the
//! shared navigation overlay, the guarded "go home" action, UI sounds, the
//! promo card, the cookie banner and the fullscreen transition overlay.
//! This crate never touches a DOM; hosts implement the surface, scheduler,
//! storage and audio traits.

pub mod config;
pub mod consent;
pub mod error;
pub mod flourish;
pub mod nav;
pub mod overlay;
pub mod promo;
pub mod runtime;
pub mod scheduler;
pub mod sound;
pub mod transition;

// Re-export commonly used types
pub use config::HomewardConfig;
pub use consent::{
    BannerConfig, BannerSurface, CONSENT_ACCEPTED, CONSENT_KEY, ConsentBanner, KeyValueStore,
    MemoryStore,
};
pub use error::UiError;
pub use flourish::{FlourishConfig, PageEnterFlourish};
pub use nav::{
    FocusTarget, HomeNav, HomeNavConfig, Modifiers, NavOutcome, PageLayout, Placement, Shortcut,
};
pub use overlay::{
    OVERLAY_ID, OverlayHandle, OverlayRegistry, OverlaySpec, OverlayState, OverlaySurface,
    ShowTicket,
};
pub use promo::{
    PromoAction, PromoCard, PromoCoordinator, PromoEvents, PromoMedia, PromoOptions, PromoPhase,
    PromoSurface, PromoTiming,
};
pub use runtime::{Preferences, Redirector, RuntimeHost, UiRuntime};
pub use scheduler::{ManualScheduler, Scheduler, Task, TimerId};
pub use sound::{
    AudioFactory, Envelope, Gesture, INTERACTIVE_SELECTORS, SoundConfig, SoundManager, Tone,
    ToneContext, Waveform,
};
pub use transition::{
    Completion, TRANSITION_GIF, TransitionDefaults, TransitionOverlay, TransitionSurface,
};
