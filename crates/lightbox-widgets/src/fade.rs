use std::time::{Duration, Instant};

/// Opacity of a slide `elapsed` after it was shown.
pub fn fade_opacity(elapsed: Duration, transition_speed: u32) -> f32 {
    if transition_speed == 0 {
        return 1.0;
    }

    let progress = elapsed.as_secs_f32() * 1000.0 / transition_speed as f32;
    progress.clamp(0.0, 1.0)
}

/// Fade-in clock for the slide on stage.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fade {
    started_at: Option<Instant>,
    transition_speed: u32,
}

impl Fade {
    pub fn new(transition_speed: u32) -> Self {
        Self {
            started_at: None,
            transition_speed,
        }
    }

    pub fn set_speed(&mut self, transition_speed: u32) {
        self.transition_speed = transition_speed;
    }

    pub fn restart(&mut self, at: Instant) {
        self.started_at = Some(at);
    }

    /// Time since the last restart. Unbounded when never started.
    pub fn elapsed(&self, now: Instant) -> Duration {
        self.started_at
            .map(|start| now.saturating_duration_since(start))
            .unwrap_or(Duration::MAX)
    }

    pub fn opacity(&self, now: Instant) -> f32 {
        fade_opacity(self.elapsed(now), self.transition_speed)
    }

    pub fn is_running(&self, now: Instant) -> bool {
        self.opacity(now) < 1.0
    }
}
