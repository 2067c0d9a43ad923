use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::normalize_angle;
use crate::core::progress::FULL_TURN_DEGREES;

/// Called once when an animation ends: `true` when it ran to its end, `false`
/// when it was paused, stopped or replaced.
pub type AnimationCompletion = Box<dyn FnOnce(bool) + 'static>;

/// Duration policy of an angle animation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationTiming {
    /// Seconds.
    pub duration: f64,
    /// Scales `duration` by the share of a full turn traveled.
    pub relative_duration: bool,
}

impl AnimationTiming {
    /// Duration scaled by the angular distance traveled.
    #[must_use]
    pub const fn relative(duration: f64) -> Self {
        Self {
            duration,
            relative_duration: true,
        }
    }

    /// Fixed duration regardless of distance.
    #[must_use]
    pub const fn absolute(duration: f64) -> Self {
        Self {
            duration,
            relative_duration: false,
        }
    }

    /// Effective duration in seconds for a `from` to `to` animation.
    #[must_use]
    pub fn effective_duration(self, from: f64, to: f64) -> f64 {
        if !self.relative_duration {
            return self.duration;
        }
        let traveled = normalize_angle(to - from);
        traveled * self.duration / FULL_TURN_DEGREES
    }
}

impl Default for AnimationTiming {
    fn default() -> Self {
        Self::relative(1.0)
    }
}

/// Linear interpolation between two angles, advanced by the host clock.
pub struct AngleAnimation {
    from: f64,
    to: f64,
    duration: f64,
    elapsed: f64,
    completion: Option<AnimationCompletion>,
}

impl AngleAnimation {
    #[must_use]
    pub fn new(from: f64, to: f64, duration: f64, completion: Option<AnimationCompletion>) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: 0.0,
            completion,
        }
    }

    #[must_use]
    pub fn from_angle(&self) -> f64 {
        self.from
    }

    #[must_use]
    pub fn to_angle(&self) -> f64 {
        self.to
    }

    #[must_use]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    #[must_use]
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

    /// Interpolated angle at the current elapsed time.
    #[must_use]
    pub fn current_angle(&self) -> f64 {
        self.from + (self.to - self.from) * self.progress()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }

    /// Advances the clock; negative or non-finite deltas are ignored.
    pub fn step(&mut self, delta_seconds: f64) {
        if delta_seconds.is_finite() && delta_seconds > 0.0 {
            self.elapsed += delta_seconds;
        }
    }

    /// Consumes the animation and reports `completed` to its callback.
    pub fn finish(mut self, completed: bool) {
        if let Some(completion) = self.completion.take() {
            completion(completed);
        }
    }
}

impl fmt::Debug for AngleAnimation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AngleAnimation")
            .field("from", &self.from)
            .field("to", &self.to)
            .field("duration", &self.duration)
            .field("elapsed", &self.elapsed)
            .field("has_completion", &self.completion.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::{AngleAnimation, AnimationTiming};

    #[test]
    fn relative_timing_scales_by_traveled_share_of_turn() {
        let timing = AnimationTiming::relative(2.0);
        assert!((timing.effective_duration(0.0, 90.0) - 0.5).abs() <= 1e-12);
        // Going backwards travels the long way round.
        assert!((timing.effective_duration(90.0, 0.0) - 1.5).abs() <= 1e-12);
        assert_eq!(AnimationTiming::absolute(2.0).effective_duration(0.0, 90.0), 2.0);
    }

    #[test]
    fn step_ignores_negative_and_non_finite_deltas() {
        let mut animation = AngleAnimation::new(0.0, 100.0, 1.0, None);
        animation.step(-1.0);
        animation.step(f64::NAN);
        assert_eq!(animation.elapsed(), 0.0);
        animation.step(0.25);
        assert!((animation.current_angle() - 25.0).abs() <= 1e-9);
    }

    #[test]
    fn finish_reports_flag_to_completion() {
        let reported = Rc::new(Cell::new(None));
        let sink = Rc::clone(&reported);
        let animation = AngleAnimation::new(
            0.0,
            10.0,
            1.0,
            Some(Box::new(move |completed| sink.set(Some(completed)))),
        );
        animation.finish(false);
        assert_eq!(reported.get(), Some(false));
    }
}
