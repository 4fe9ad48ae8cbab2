//! Page-wide configuration.
//!
//! Defaults ship embedded from `static/homeward.json`; every section can be
//! omitted and falls back to its `Default`.

use serde::{Deserialize, Serialize};

use crate::UiError;
use crate::consent::BannerConfig;
use crate::flourish::FlourishConfig;
use crate::nav::HomeNavConfig;
use crate::promo::PromoTiming;
use crate::sound::SoundConfig;
use crate::transition::TransitionDefaults;

const DEFAULT_CONFIG_DATA: &str = include_str!("../static/homeward.json");

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HomewardConfig {
    pub nav: HomeNavConfig,
    pub sound: SoundConfig,
    pub promo: PromoTiming,
    pub banner: BannerConfig,
    pub transition: TransitionDefaults,
    pub flourish: FlourishConfig,
}

impl HomewardConfig {
    /// Parse and validate a JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a section fails validation.
    pub fn from_json(json: &str) -> Result<Self, UiError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// The embedded defaults, or `Default` if they fail to load.
    #[must_use]
    pub fn load_from_static() -> Self {
        Self::from_json(DEFAULT_CONFIG_DATA).unwrap_or_else(|err| {
            log::error!("embedded homeward config rejected: {err}");
            Self::default()
        })
    }

    /// # Errors
    ///
    /// Returns the first section that fails validation.
    pub fn validate(&self) -> Result<(), UiError> {
        self.nav.validate()?;
        self.sound.validate()?;
        self.promo.validate()?;
        self.banner.validate()?;
        self.transition.validate()?;
        self.flourish.validate()?;
        Ok(())
    }
}
