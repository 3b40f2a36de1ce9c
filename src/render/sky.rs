//! Sky decorations: star field, shooting stars and clouds.
//!
//! Positions are normalized to the sky area (0.0-1.0 on both axes, origin at
//! the top-left) so they survive terminal resizes.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use crate::core::phase::Phase;
use crate::render::animation::{Easing, Oscillator};

/// Opacity of the star layer before any fade-in is applied
pub fn star_layer_opacity(phase: Phase, progress: f32) -> f32 {
    match phase {
        Phase::Evening | Phase::Night => 1.0,
        // Stars leave during the first half of dawn
        Phase::Dawn => (1.0 - progress * 2.0).max(0.0),
        _ => 0.0,
    }
}

/// Opacity of the cloud layer, `None` when clouds are hidden
pub fn cloud_layer_opacity(phase: Phase) -> Option<f32> {
    if !phase.is_daytime() {
        return None;
    }
    Some(match phase {
        Phase::Dawn => 0.5,
        Phase::Afternoon => 0.7,
        _ => 0.8,
    })
}

// ============================================================================
// Stars
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub x: f32,
    pub y: f32,
    /// Diameter in the reference point space (1-3 small, 2-4 bright)
    pub size: f32,
    pub base_opacity: f32,
    pub bright: bool,
    /// Opacity multiplier over time
    pub twinkle: Oscillator,
    /// Size multiplier over time
    pub pulse: Oscillator,
}

impl Star {
    pub fn opacity_at(&self, time: f32) -> f32 {
        (self.base_opacity * self.twinkle.sample(time)).clamp(0.0, 1.0)
    }

    pub fn size_at(&self, time: f32) -> f32 {
        self.size * self.pulse.sample(time)
    }

    /// Terminal glyph for the star at a given moment
    pub fn glyph(&self, time: f32) -> char {
        let size = self.size_at(time);
        if self.bright {
            if size >= 3.0 {
                '✦'
            } else {
                '✧'
            }
        } else if size >= 2.5 {
            '•'
        } else if size >= 1.5 {
            '·'
        } else {
            '.'
        }
    }
}

/// Fixed set of stars generated once per screen
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StarField {
    pub stars: Vec<Star>,
}

impl StarField {
    /// Generate `count` small stars anywhere and `bright_count` bright stars
    /// in the upper 80% of the sky.
    pub fn generate(count: usize, bright_count: usize, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut stars = Vec::with_capacity(count + bright_count);

        for _ in 0..count {
            let twinkle_speed = rng.gen_range(1.0..=3.0);
            stars.push(Star {
                x: rng.gen_range(0.0..=1.0),
                y: rng.gen_range(0.0..=1.0),
                size: rng.gen_range(1.0..=3.0),
                base_opacity: rng.gen_range(0.5..=1.0),
                bright: false,
                twinkle: random_twinkle(&mut rng, twinkle_speed),
                pulse: random_pulse(&mut rng, twinkle_speed),
            });
        }

        for _ in 0..bright_count {
            let twinkle_speed = rng.gen_range(1.5..=2.5);
            stars.push(Star {
                x: rng.gen_range(0.0..=1.0),
                y: rng.gen_range(0.0..=0.8),
                size: rng.gen_range(2.0..=4.0),
                base_opacity: 1.0,
                bright: true,
                twinkle: random_twinkle(&mut rng, twinkle_speed),
                pulse: random_pulse(&mut rng, twinkle_speed),
            });
        }

        tracing::debug!(count, bright_count, seed, "generated star field");
        Self { stars }
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }
}

fn random_twinkle(rng: &mut ChaCha8Rng, speed: f32) -> Oscillator {
    Oscillator::new(rng.gen_range(0.5..=1.0), rng.gen_range(0.2..=0.7), speed)
}

fn random_pulse(rng: &mut ChaCha8Rng, speed: f32) -> Oscillator {
    Oscillator::new(1.0, rng.gen_range(0.8..=1.2), speed * 1.2)
        .with_delay(rng.gen_range(0.0..=1.0))
}

// ============================================================================
// Shooting stars
// ============================================================================

/// Horizontal and vertical travel of a streak, as fractions of the sky.
/// The streak starts up-left of its anchor and ends down-right of it.
const STREAK_TRAVEL_X: f32 = 0.75;
const STREAK_TRAVEL_Y: f32 = 0.35;

/// A streak launched at `launched_at` (screen time, seconds)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShootingStar {
    /// Anchor point (x anywhere, y in the upper third)
    pub x: f32,
    pub y: f32,
    pub launched_at: f32,
}

/// Where a shooting star is drawn in one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StreakFrame {
    pub x: f32,
    pub y: f32,
    pub opacity: f32,
}

impl ShootingStar {
    pub fn new(x: f32, y: f32, launched_at: f32) -> Self {
        Self {
            x: x.clamp(0.0, 1.0),
            y: y.clamp(0.0, 1.0 / 3.0),
            launched_at,
        }
    }

    /// Head position at `time`, `None` once the flight is over
    pub fn frame_at(&self, time: f32, duration: f32) -> Option<StreakFrame> {
        let elapsed = time - self.launched_at;
        if elapsed < 0.0 || elapsed > duration || duration <= 0.0 {
            return None;
        }
        let t = Easing::EaseOut.apply(elapsed / duration);
        // Offset runs from -1 to +1 around the anchor
        let offset = t * 2.0 - 1.0;
        Some(StreakFrame {
            x: self.x + offset * STREAK_TRAVEL_X,
            y: self.y + offset * STREAK_TRAVEL_Y,
            opacity: t,
        })
    }

    pub fn is_finished(&self, time: f32, duration: f32) -> bool {
        time - self.launched_at > duration
    }
}

// ============================================================================
// Clouds
// ============================================================================

/// One rounded puff of a cloud, in the cloud's 200x100 reference frame
struct Capsule {
    cx: f32,
    cy: f32,
    width: f32,
    height: f32,
    opacity: f32,
}

const CLOUD_FRAME_WIDTH: f32 = 200.0;
const CLOUD_FRAME_HEIGHT: f32 = 100.0;

const CAPSULES: [Capsule; 3] = [
    Capsule { cx: 20.0, cy: 10.0, width: 120.0, height: 60.0, opacity: 0.8 },
    Capsule { cx: -30.0, cy: 20.0, width: 90.0, height: 40.0, opacity: 0.8 },
    Capsule { cx: 0.0, cy: 0.0, width: 110.0, height: 50.0, opacity: 1.0 },
];

impl Capsule {
    fn contains(&self, px: f32, py: f32) -> bool {
        let radius = self.height / 2.0;
        let straight = (self.width / 2.0 - radius).max(0.0);
        let dx = ((px - self.cx).abs() - straight).max(0.0);
        let dy = py - self.cy;
        dx * dx + dy * dy <= radius * radius
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Cloud {
    /// Center, as fractions of the sky
    pub x: f32,
    pub y: f32,
    /// Extent, as fractions of the sky
    pub width: f32,
    pub height: f32,
    pub opacity: f32,
}

pub const CLOUDS: [Cloud; 4] = [
    Cloud { x: 0.2, y: 0.25, width: 0.50, height: 0.12, opacity: 0.7 },
    Cloud { x: 0.8, y: 0.4, width: 0.75, height: 0.18, opacity: 0.6 },
    Cloud { x: 0.5, y: 0.15, width: 0.62, height: 0.14, opacity: 0.8 },
    Cloud { x: 0.3, y: 0.6, width: 0.55, height: 0.13, opacity: 0.5 },
];

impl Cloud {
    /// Cloud opacity at a normalized sky point, 0.0 outside the cloud
    pub fn coverage(&self, x: f32, y: f32) -> f32 {
        if self.width <= 0.0 || self.height <= 0.0 {
            return 0.0;
        }
        let px = (x - self.x) / self.width * CLOUD_FRAME_WIDTH;
        let py = (y - self.y) / self.height * CLOUD_FRAME_HEIGHT;
        CAPSULES
            .iter()
            .filter(|capsule| capsule.contains(px, py))
            .map(|capsule| capsule.opacity)
            .fold(0.0, f32::max)
            * self.opacity
    }
}

/// Combined coverage of all clouds at a point (before the layer opacity)
pub fn cloud_coverage(x: f32, y: f32) -> f32 {
    CLOUDS
        .iter()
        .map(|cloud| cloud.coverage(x, y))
        .fold(0.0, f32::max)
}
