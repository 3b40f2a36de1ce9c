//! Scene derivation for the time cycle screen
//!
//! Turns the current `AppState` into every visual parameter a frame needs.
//! This module is READ-ONLY - it never modifies screen state.

pub mod animation;
pub mod celestial;
pub mod colors;
pub mod sky;

use serde::Serialize;

use crate::core::phase::Phase;
use crate::ui::state::AppState;
use celestial::{CelestialBody, SUN_RAY_COUNT};
use colors::{Color, SkyPalette};
use sky::StreakFrame;

/// Snapshot of everything drawn in one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    /// `"7:30"`
    pub clock: String,
    /// `"AM"` or `"PM"`
    pub meridiem: &'static str,
    pub phase: Phase,
    pub label: &'static str,
    pub progress: f32,
    pub accent: Color,
    /// Background gradient, cross-faded after a phase change
    pub palette: SkyPalette,
    pub bodies: Vec<CelestialBody>,
    pub group_scale: f32,
    pub halo_scale: f32,
    pub ray_angles: [f32; SUN_RAY_COUNT],
    pub star_opacity: f32,
    pub cloud_opacity: Option<f32>,
    pub shooting_star: Option<StreakFrame>,
    /// Opacity of the clock and label text
    pub text_opacity: f32,
    pub slider_fraction: f32,
    /// Hour indicator to highlight (24 when the thumb sits at the right end)
    pub selected_hour: u32,
    pub dragging: bool,
    pub thumb_scale: f32,
    /// Screen time in seconds, drives twinkling
    pub time: f32,
}

impl Scene {
    pub fn build(state: &AppState) -> Self {
        let phase = state.phase.phase;
        let progress = state.phase.progress;
        let time = state.elapsed;
        let timings = &state.timings;

        let palette = colors::sky_palette(state.previous_phase)
            .lerp(&colors::sky_palette(phase), state.palette_blend.value());

        let shooting_star = state
            .shooting_star
            .and_then(|streak| streak.frame_at(time, timings.shooting_star_duration_secs));

        Self {
            clock: state.selection.formatted_time(),
            meridiem: state.selection.meridiem(),
            phase,
            label: phase.display_name(),
            progress,
            accent: colors::accent_color(phase),
            palette,
            bodies: celestial::celestial_bodies(phase, progress),
            group_scale: celestial::group_scale(time, timings.pulse_period_secs),
            halo_scale: celestial::halo_scale(time),
            ray_angles: celestial::sun_ray_angles(time, timings.ray_period_secs),
            star_opacity: state.star_opacity(),
            cloud_opacity: sky::cloud_layer_opacity(phase),
            shooting_star,
            text_opacity: state.text_opacity.value(),
            slider_fraction: state.slider.fraction(),
            selected_hour: state.slider.hour_index(),
            dragging: state.is_dragging(),
            thumb_scale: state.thumb_scale.value(),
            time,
        }
    }

    /// Sky color at a vertical position (0.0 top, 1.0 bottom)
    pub fn sky_at(&self, position: f32) -> Color {
        self.palette.sample(position)
    }
}
