use cosmic::cosmic_config::{self, Config, ConfigGet, ConfigSet, CosmicConfigEntry};
use lightbox_types::CaptionStyle;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const CONFIG_VERSION: u64 = 1;
pub const APP_ID: &str = "org.codeberg.bhh32.Lightbox";

/// Tunables of the swipe recognizer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwipeConfig {
    /// Minimum horizontal travel for a swipe.
    pub threshold_distance: f32,
    /// Maximum perpendicular travel. Accepted but not used when classifying.
    pub restraint_distance: f32,
    /// Maximum time between touch start and touch end.
    pub allowed_time_ms: u64,
}

impl SwipeConfig {
    pub fn allowed_time(&self) -> Duration {
        Duration::from_millis(self.allowed_time_ms)
    }

    pub fn with_threshold(mut self, threshold_distance: f32) -> Self {
        self.threshold_distance = threshold_distance;
        self
    }

    pub fn with_allowed_time_ms(mut self, allowed_time_ms: u64) -> Self {
        self.allowed_time_ms = allowed_time_ms;
        self
    }
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            threshold_distance: 150.0,
            restraint_distance: 100.0,
            allowed_time_ms: 300,
        }
    }
}

/// Tunables of the scroll-wheel navigator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WheelConfig {
    pub enabled: bool,
    /// Wheel events arriving this soon after a navigation are swallowed.
    pub cooldown_ms: u64,
}

impl WheelConfig {
    pub fn cooldown(&self) -> Duration {
        Duration::from_millis(self.cooldown_ms)
    }
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            cooldown_ms: 600,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightboxConfig {
    pub show_thumbnails: bool,
    pub show_caption: bool,
    pub show_controls: bool,
    /// Fade-in duration of a new slide in milliseconds.
    pub transition_speed: u32,
    pub autoplay_speed_ms: u64,
    pub caption_style: CaptionStyle,
    pub swipe: SwipeConfig,
    pub wheel: WheelConfig,
}

impl Default for LightboxConfig {
    fn default() -> Self {
        Self {
            show_thumbnails: true,
            show_caption: true,
            show_controls: true,
            transition_speed: 600,
            autoplay_speed_ms: 3000,
            caption_style: CaptionStyle::default(),
            swipe: SwipeConfig::default(),
            wheel: WheelConfig::default(),
        }
    }
}

impl LightboxConfig {
    pub fn autoplay_interval(&self) -> Duration {
        // A zero interval would spin the timer
        Duration::from_millis(self.autoplay_speed_ms.max(100))
    }
}

impl CosmicConfigEntry for LightboxConfig {
    const VERSION: u64 = CONFIG_VERSION;

    fn write_entry(&self, config: &cosmic_config::Config) -> Result<(), cosmic_config::Error> {
        config.set("show_thumbnails", self.show_thumbnails)?;
        config.set("show_caption", self.show_caption)?;
        config.set("show_controls", self.show_controls)?;
        config.set("transition_speed", self.transition_speed)?;
        config.set("autoplay_speed_ms", self.autoplay_speed_ms)?;
        config.set("caption_style", self.caption_style.clone())?;
        config.set("swipe", self.swipe)?;
        config.set("wheel", self.wheel)?;
        Ok(())
    }

    fn get_entry(
        config: &cosmic_config::Config,
    ) -> Result<Self, (Vec<cosmic_config::Error>, Self)> {
        let mut errors = Vec::new();
        let mut cfg = LightboxConfig::default();

        macro_rules! get_field {
            ($name:literal, $field:ident, $type:ty) => {
                match config.get::<$type>($name) {
                    Ok(val) => cfg.$field = val,
                    Err(e) => errors.push(e),
                }
            };
        }

        get_field!("show_thumbnails", show_thumbnails, bool);
        get_field!("show_caption", show_caption, bool);
        get_field!("show_controls", show_controls, bool);
        get_field!("transition_speed", transition_speed, u32);
        get_field!("autoplay_speed_ms", autoplay_speed_ms, u64);
        get_field!("caption_style", caption_style, CaptionStyle);
        get_field!("swipe", swipe, SwipeConfig);
        get_field!("wheel", wheel, WheelConfig);

        if errors.is_empty() {
            Ok(cfg)
        } else {
            Err((errors, cfg))
        }
    }

    fn update_keys<T: AsRef<str>>(
        &mut self,
        config: &cosmic_config::Config,
        changed_keys: &[T],
    ) -> (Vec<cosmic_config::Error>, Vec<&'static str>) {
        let mut errors = Vec::new();
        let mut updated = Vec::new();

        macro_rules! update_field {
            ($name:literal, $target:expr, $type:ty) => {
                match config.get::<$type>($name) {
                    Ok(val) => {
                        $target = val;
                        updated.push($name);
                    }
                    Err(e) => errors.push(e),
                }
            };
        }

        for key in changed_keys {
            match key.as_ref() {
                "show_thumbnails" => update_field!("show_thumbnails", self.show_thumbnails, bool),
                "show_caption" => update_field!("show_caption", self.show_caption, bool),
                "show_controls" => update_field!("show_controls", self.show_controls, bool),
                "transition_speed" => update_field!("transition_speed", self.transition_speed, u32),
                "autoplay_speed_ms" => update_field!("autoplay_speed_ms", self.autoplay_speed_ms, u64),
                "caption_style" => update_field!("caption_style", self.caption_style, CaptionStyle),
                "swipe" => update_field!("swipe", self.swipe, SwipeConfig),
                "wheel" => update_field!("wheel", self.wheel, WheelConfig),
                _ => {}
            }
        }

        (errors, updated)
    }
}

pub fn config() -> Result<Config, cosmic_config::Error> {
    Config::new(APP_ID, CONFIG_VERSION)
}

/// Load the persisted configuration, falling back to defaults field by field.
pub fn load() -> (LightboxConfig, Option<Config>) {
    match config() {
        Ok(handler) => {
            let config = match LightboxConfig::get_entry(&handler) {
                Ok(config) => config,
                Err((errors, config)) => {
                    tracing::debug!("{} config entries could not be read", errors.len());
                    config
                }
            };
            (config, Some(handler))
        }
        Err(e) => {
            tracing::warn!("config unavailable, using defaults: {e}");
            (LightboxConfig::default(), None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swipe_defaults() {
        let swipe = SwipeConfig::default();
        assert_eq!(swipe.threshold_distance, 150.0);
        assert_eq!(swipe.restraint_distance, 100.0);
        assert_eq!(swipe.allowed_time(), Duration::from_millis(300));
    }

    #[test]
    fn test_swipe_builder() {
        let swipe = SwipeConfig::default()
            .with_threshold(80.0)
            .with_allowed_time_ms(500);
        assert_eq!(swipe.threshold_distance, 80.0);
        assert_eq!(swipe.allowed_time_ms, 500);
        assert_eq!(swipe.restraint_distance, 100.0);
    }

    #[test]
    fn test_lightbox_defaults() {
        let config = LightboxConfig::default();
        assert!(config.show_thumbnails);
        assert!(config.show_caption);
        assert_eq!(config.transition_speed, 600);
        assert_eq!(config.wheel.cooldown(), Duration::from_millis(600));
        assert_eq!(config.caption_style, CaptionStyle::default());
    }

    #[test]
    fn test_autoplay_interval_has_floor() {
        let config = LightboxConfig {
            autoplay_speed_ms: 0,
            ..LightboxConfig::default()
        };
        assert_eq!(config.autoplay_interval(), Duration::from_millis(100));
    }
}
