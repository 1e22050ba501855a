//! Swipe recognition over a single touch sequence.
//!
//! A sequence is a touch start followed by a touch end. Only horizontal travel
//! and elapsed time decide the outcome; the restraint distance is carried in
//! [`SwipeConfig`] but never consulted, so a long vertical drag is simply not
//! a swipe.

use crate::Step;
use lightbox_config::SwipeConfig;
use lightbox_types::Point;
use std::time::{Duration, Instant};

/// Start of an in-progress touch sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSample {
    pub start: Point,
    pub started_at: Instant,
}

/// Distances and time of a finished sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeMeasurement {
    pub dx: f32,
    /// End x minus start y. Not used when classifying.
    pub dy: f32,
    pub elapsed: Duration,
}

impl GestureSample {
    pub fn new(start: Point, started_at: Instant) -> Self {
        Self { start, started_at }
    }

    pub fn measure(&self, end: Point, ended_at: Instant) -> SwipeMeasurement {
        SwipeMeasurement {
            dx: end.x - self.start.x,
            dy: end.x - self.start.y,
            elapsed: ended_at.saturating_duration_since(self.started_at),
        }
    }
}

pub fn classify(measurement: &SwipeMeasurement, config: &SwipeConfig) -> Option<Step> {
    if measurement.elapsed > config.allowed_time() {
        return None;
    }

    let dx = measurement.dx;
    if !dx.is_finite() || dx.abs() < config.threshold_distance {
        return None;
    }

    // Finger moved towards the leading edge: advance. `dx == 0` can only
    // get here with a zero threshold and counts as Next.
    if dx <= 0.0 {
        Some(Step::Next)
    } else {
        Some(Step::Previous)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SwipeRecognizer {
    config: SwipeConfig,
    sample: Option<GestureSample>,
}

impl SwipeRecognizer {
    pub fn new(config: SwipeConfig) -> Self {
        Self {
            config,
            sample: None,
        }
    }

    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: SwipeConfig) {
        self.config = config;
    }

    pub fn sample(&self) -> Option<&GestureSample> {
        self.sample.as_ref()
    }

    pub fn is_tracking(&self) -> bool {
        self.sample.is_some()
    }

    /// Begin a sequence, replacing any sample left by an unfinished one.
    pub fn touch_start(&mut self, point: Point, at: Instant) {
        self.sample = Some(GestureSample::new(point, at));
    }

    /// Finish the sequence and classify it. The sample is consumed either way.
    pub fn touch_end(&mut self, point: Point, at: Instant) -> Option<Step> {
        let sample = self.sample.take()?;

        if !point.is_finite() {
            tracing::debug!("ignoring touch end at non-finite position");
            return None;
        }

        let measurement = sample.measure(point, at);
        let swipe = classify(&measurement, &self.config);

        tracing::trace!(
            dx = measurement.dx,
            elapsed_ms = measurement.elapsed.as_millis() as u64,
            ?swipe,
            "touch sequence finished"
        );

        swipe
    }

    /// The host lost the touch; forget the sequence without classifying.
    pub fn touch_cancel(&mut self) {
        self.sample = None;
    }
}
