//! Time-based easing for the cosmetic parts of the screen.
//!
//! Nothing here affects phase or progress. Tweens are advanced by `Tick`
//! events; oscillators are sampled directly from the elapsed screen time.

/// Easing curves matching the ones used by the screen's transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Map linear progress (0.0-1.0) onto the curve.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

/// Eased transition of a scalar toward a target value.
#[derive(Clone, Debug, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    /// Time accumulator for the current leg.
    elapsed: f32,
    duration: f32,
    easing: Easing,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration: f32, easing: Easing) -> Self {
        Self {
            from,
            to,
            elapsed: 0.0,
            duration,
            easing,
        }
    }

    /// A tween already resting at `value`.
    pub fn settled(value: f32) -> Self {
        Self::new(value, value, 0.0, Easing::Linear)
    }

    /// Advance the tween, returns true while still moving.
    pub fn update(&mut self, dt: f32) -> bool {
        if self.is_finished() {
            return false;
        }
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.duration);
        !self.is_finished()
    }

    /// Head toward a new target from wherever the tween currently is.
    /// Retargeting to the current target keeps the running leg.
    pub fn retarget(&mut self, to: f32, duration: f32, easing: Easing) {
        if to == self.to {
            return;
        }
        *self = Self::new(self.value(), to, duration, easing);
    }

    pub fn value(&self) -> f32 {
        self.from + (self.to - self.from) * self.easing.apply(self.fraction())
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    fn fraction(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            self.elapsed / self.duration
        }
    }
}

/// Endless back-and-forth between two values, eased in and out on each leg.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Oscillator {
    pub from: f32,
    pub to: f32,
    /// Seconds for one leg (from -> to).
    pub duration: f32,
    /// Seconds spent at `from` before the first leg starts.
    pub delay: f32,
}

impl Oscillator {
    pub fn new(from: f32, to: f32, duration: f32) -> Self {
        Self {
            from,
            to,
            duration,
            delay: 0.0,
        }
    }

    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }

    pub fn sample(&self, time: f32) -> f32 {
        if self.duration <= 0.0 {
            return self.from;
        }
        let t = (time - self.delay).max(0.0) / self.duration;
        let cycle = t.rem_euclid(2.0);
        let leg = if cycle <= 1.0 { cycle } else { 2.0 - cycle };
        self.from + (self.to - self.from) * Easing::EaseInOut.apply(leg)
    }
}

/// Angle in degrees of a linear rotation completing a turn every `period`.
pub fn rotation_degrees(time: f32, period: f32) -> f32 {
    if period <= 0.0 {
        return 0.0;
    }
    (time / period).rem_euclid(1.0) * 360.0
}
