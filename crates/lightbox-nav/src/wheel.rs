//! Scroll-wheel navigation.
//!
//! Wheel up advances, wheel down goes back. A trackpad flick delivers dozens
//! of wheel events, so after each navigation further events are swallowed
//! until the cooldown has passed.

use crate::Step;
use lightbox_config::WheelConfig;
use std::time::Instant;

#[derive(Debug, Clone, Default)]
pub struct WheelNavigator {
    config: WheelConfig,
    last_step_at: Option<Instant>,
}

impl WheelNavigator {
    pub fn new(config: WheelConfig) -> Self {
        Self {
            config,
            last_step_at: None,
        }
    }

    pub fn set_config(&mut self, config: WheelConfig) {
        self.config = config;
    }

    /// `delta_y` is positive when scrolling up.
    pub fn on_wheel(&mut self, delta_y: f32, at: Instant) -> Option<Step> {
        if !self.config.enabled || !delta_y.is_finite() || delta_y == 0.0 {
            return None;
        }

        if let Some(last) = self.last_step_at
            && at.saturating_duration_since(last) < self.config.cooldown()
        {
            return None;
        }

        let step = if delta_y > 0.0 {
            Step::Next
        } else {
            Step::Previous
        };

        self.last_step_at = Some(at);
        tracing::trace!(?step, delta_y, "wheel navigation");

        Some(step)
    }

    pub fn reset(&mut self) {
        self.last_step_at = None;
    }
}
