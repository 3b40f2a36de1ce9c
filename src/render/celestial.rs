//! Sun and moon placement for each phase of the day.
//!
//! Vertical offsets use a 400-point reference sky: offset -100 sits at the
//! top edge and +300 at the bottom edge, positive values pointing down.
//! Bodies are always horizontally centered.

use serde::Serialize;

use crate::core::phase::Phase;
use crate::render::animation::{rotation_degrees, Oscillator};
use crate::render::colors::{Color, ORANGE, YELLOW};

/// Offset of the top edge of the sky
pub const SKY_TOP_OFFSET: f32 = -100.0;

/// Height of the reference sky in points
pub const SKY_SPAN: f32 = 400.0;

/// Diameter of the moon disc in points
const MOON_DIAMETER: f32 = 60.0;

/// Diameter of the shadow disc that carves the moon's phase
const MOON_SHADOW_DIAMETER: f32 = 55.0;

pub const SUN_RAY_COUNT: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "body", rename_all = "lowercase")]
pub enum BodyKind {
    Sun { color: Color },
    /// `progress` slides the shadow disc across the face, left to right
    Moon { progress: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CelestialBody {
    #[serde(flatten)]
    pub kind: BodyKind,
    /// Vertical offset in reference points
    pub offset: f32,
    pub opacity: f32,
}

impl CelestialBody {
    fn sun(color: Color, offset: f32, opacity: f32) -> Self {
        Self {
            kind: BodyKind::Sun { color },
            offset,
            opacity: opacity.clamp(0.0, 1.0),
        }
    }

    fn moon(progress: f32, offset: f32, opacity: f32) -> Self {
        Self {
            kind: BodyKind::Moon { progress },
            offset,
            opacity: opacity.clamp(0.0, 1.0),
        }
    }

    /// Vertical position as a fraction of the sky (0.0 top, 1.0 bottom).
    /// Values outside 0.0-1.0 are off screen.
    pub fn vertical_fraction(&self) -> f32 {
        (self.offset - SKY_TOP_OFFSET) / SKY_SPAN
    }

    pub fn is_sun(&self) -> bool {
        matches!(self.kind, BodyKind::Sun { .. })
    }
}

/// Bodies visible for a phase at the given progress, back to front
pub fn celestial_bodies(phase: Phase, progress: f32) -> Vec<CelestialBody> {
    let p = progress.clamp(0.0, 1.0);
    match phase {
        Phase::Dawn => vec![
            CelestialBody::moon(0.9, 100.0 + p * 200.0, 1.0 - p * 2.0),
            CelestialBody::sun(ORANGE, 300.0 - p * 400.0, p * 2.0),
        ],
        Phase::Morning => vec![CelestialBody::sun(YELLOW, -50.0 - p * 50.0, 1.0)],
        Phase::Noon => vec![CelestialBody::sun(YELLOW, -100.0, 1.0)],
        Phase::Afternoon => vec![CelestialBody::sun(ORANGE, -100.0 + p * 150.0, 1.0)],
        Phase::Evening => {
            let mut bodies = vec![CelestialBody::sun(
                ORANGE,
                50.0 + p * 200.0,
                1.0 - p * 1.5,
            )];
            // Moonrise begins 30% into the evening
            if p > 0.3 {
                let rise = (p - 0.3) / 0.7;
                bodies.push(CelestialBody::moon(
                    rise,
                    300.0 - rise * 300.0,
                    (p - 0.3) * 3.0,
                ));
            }
            bodies
        }
        Phase::Night => vec![CelestialBody::moon(p, -50.0 + p * 150.0, 1.0)],
    }
}

/// Horizontal shadow offset as a fraction of the moon radius
pub fn moon_shadow_shift(progress: f32) -> f32 {
    (-25.0 + 50.0 * progress) / (MOON_DIAMETER / 2.0)
}

/// Whether a point on the moon face (unit disc coordinates) is in shadow
pub fn moon_shaded(dx: f32, dy: f32, progress: f32) -> bool {
    let shadow_radius = MOON_SHADOW_DIAMETER / MOON_DIAMETER;
    let sx = dx - moon_shadow_shift(progress);
    sx * sx + dy * dy <= shadow_radius * shadow_radius
}

/// Crater centers and radii in unit disc coordinates
pub const MOON_CRATERS: [(f32, f32, f32); 3] = [
    (0.5, -0.33, 0.25),
    (-0.33, 0.5, 0.2),
    (-0.5, -0.5, 0.17),
];

/// Angles (degrees) of the sun rays at `time`
pub fn sun_ray_angles(time: f32, period: f32) -> [f32; SUN_RAY_COUNT] {
    let rotation = rotation_degrees(time, period);
    let mut angles = [0.0; SUN_RAY_COUNT];
    for (i, angle) in angles.iter_mut().enumerate() {
        *angle = (i as f32 * 30.0 + rotation) % 360.0;
    }
    angles
}

/// Scale applied to the whole celestial group
pub fn group_scale(time: f32, pulse_period: f32) -> f32 {
    Oscillator::new(1.0, 1.05, pulse_period).sample(time)
}

/// Breathing of the sun halo and moon glow
pub fn halo_scale(time: f32) -> f32 {
    Oscillator::new(1.0, 1.1, 3.0).sample(time)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::phase::PhaseProgress;

    #[test]
    fn test_noon_sun_at_top() {
        let bodies = celestial_bodies(Phase::Noon, 0.5);
        assert_eq!(bodies.len(), 1);
        assert!(bodies[0].is_sun());
        assert_eq!(bodies[0].vertical_fraction(), 0.0);
    }

    #[test]
    fn test_dawn_crossfades_moon_into_sun() {
        let start = celestial_bodies(Phase::Dawn, 0.0);
        assert_eq!(start[0].opacity, 1.0);
        assert_eq!(start[1].opacity, 0.0);

        let late = celestial_bodies(Phase::Dawn, 0.6);
        assert_eq!(late[0].opacity, 0.0);
        assert_eq!(late[1].opacity, 1.0);
        assert!(late[1].offset < start[1].offset);
    }

    #[test]
    fn test_evening_moon_rises_after_thirty_percent() {
        assert_eq!(celestial_bodies(Phase::Evening, 0.3).len(), 1);

        let bodies = celestial_bodies(Phase::Evening, 1.0);
        assert_eq!(bodies.len(), 2);
        assert_eq!(bodies[0].opacity, 0.0);
        assert!(!bodies[1].is_sun());
        assert_eq!(bodies[1].opacity, 1.0);
        assert!(bodies[1].offset.abs() < 1e-3);
    }

    #[test]
    fn test_night_moon_sinks() {
        let early = celestial_bodies(Phase::Night, 0.0);
        let late = celestial_bodies(Phase::Night, 1.0);
        assert_eq!(early[0].offset, -50.0);
        assert_eq!(late[0].offset, 100.0);
    }

    #[test]
    fn test_opacity_always_bounded() {
        for hour in 0..24 {
            for minute in [0, 15, 30, 45, 59] {
                let mapped = PhaseProgress::at(hour, minute);
                for body in celestial_bodies(mapped.phase, mapped.progress) {
                    assert!((0.0..=1.0).contains(&body.opacity));
                }
            }
        }
    }

    #[test]
    fn test_moon_shadow_moves_across() {
        // Shadow starts left of center and ends right of it
        assert!(moon_shaded(-0.8, 0.0, 0.0));
        assert!(!moon_shaded(0.95, 0.0, 0.0));
        assert!(moon_shaded(0.8, 0.0, 1.0));
        assert!(!moon_shaded(-0.95, 0.0, 1.0));
    }

    #[test]
    fn test_sun_rays_evenly_spaced() {
        let angles = sun_ray_angles(0.0, 20.0);
        assert_eq!(angles[0], 0.0);
        assert_eq!(angles[3], 90.0);

        let turned = sun_ray_angles(5.0, 20.0);
        assert!((turned[0] - 90.0).abs() < 1e-3);
    }

    #[test]
    fn test_group_scale_range() {
        for step in 0..20 {
            let scale = group_scale(step as f32 * 0.5, 4.0);
            assert!((1.0..=1.05 + 1e-6).contains(&scale));
        }
    }
}
