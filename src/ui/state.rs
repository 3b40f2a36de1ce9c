//! Screen state and the event-driven update function.
//!
//! All mutation goes through [`update`]; the renderer only reads the
//! resulting state.

use crate::core::clock::{ClockTime, SliderPosition, TimeSelection};
use crate::core::config::ScreenConfig;
use crate::core::phase::{Phase, PhaseProgress};
use crate::render::animation::{Easing, Tween};
use crate::render::sky::{star_layer_opacity, ShootingStar};

/// Thumb scale while the slider is held
const DRAG_THUMB_SCALE: f32 = 1.2;

/// Whether the user is holding the slider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Interaction {
    #[default]
    Idle,
    Dragging,
}

/// Everything that can change the screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppEvent {
    /// Pointer pressed on the slider at a track fraction (0.0-1.0)
    DragStarted { fraction: f32 },
    /// Pointer moved while held
    DragMoved { fraction: f32 },
    /// Pointer released
    DragEnded,
    /// Frame clock advanced by `dt` seconds
    Tick { dt: f32 },
    /// Cosmetic timer fired; anchor in normalized sky coordinates
    ShootingStar { x: f32, y: f32 },
    Quit,
}

/// Durations copied out of the config so `update` stays self-contained
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timings {
    pub palette_transition_secs: f32,
    pub star_fade_secs: f32,
    pub shooting_star_duration_secs: f32,
    pub drag_text_opacity: f32,
    pub text_recover_secs: f32,
    pub ray_period_secs: f32,
    pub pulse_period_secs: f32,
}

impl From<&ScreenConfig> for Timings {
    fn from(config: &ScreenConfig) -> Self {
        Self {
            palette_transition_secs: config.palette_transition_secs,
            star_fade_secs: config.star_fade_secs,
            shooting_star_duration_secs: config.shooting_star_duration_secs,
            drag_text_opacity: config.drag_text_opacity,
            text_recover_secs: config.text_recover_secs,
            ray_period_secs: config.ray_period_secs,
            pulse_period_secs: config.pulse_period_secs,
        }
    }
}

impl Default for Timings {
    fn default() -> Self {
        Self::from(&ScreenConfig::default())
    }
}

/// The single in-memory state record of the screen
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    /// Source of truth for the selected time
    pub slider: SliderPosition,
    /// 12h clock derived from the slider
    pub selection: TimeSelection,
    /// Phase and progress derived from the slider
    pub phase: PhaseProgress,
    pub interaction: Interaction,
    /// Phase whose palette is fading out
    pub previous_phase: Phase,
    /// 0.0 shows the previous palette, 1.0 the current one
    pub palette_blend: Tween,
    /// Fade-in of the star layer in evening and night
    pub star_fade: Tween,
    /// Opacity of the clock and phase label
    pub text_opacity: Tween,
    pub thumb_scale: Tween,
    pub shooting_star: Option<ShootingStar>,
    /// Seconds since the screen opened
    pub elapsed: f32,
    pub running: bool,
    pub timings: Timings,
}

impl AppState {
    pub fn new(initial: ClockTime, timings: Timings) -> Self {
        let slider = SliderPosition::from_clock(initial);
        let clock = slider.clock_time();
        let phase = clock.phase_progress();

        Self {
            slider,
            selection: TimeSelection::from_clock(clock),
            phase,
            interaction: Interaction::Idle,
            previous_phase: phase.phase,
            palette_blend: Tween::settled(1.0),
            star_fade: Tween::new(0.0, 1.0, timings.star_fade_secs, Easing::EaseIn),
            text_opacity: Tween::settled(1.0),
            thumb_scale: Tween::settled(1.0),
            shooting_star: None,
            elapsed: 0.0,
            running: true,
            timings,
        }
    }

    /// State with every transition already finished, as a still frame shows it
    pub fn settled(initial: ClockTime, timings: Timings) -> Self {
        Self {
            star_fade: Tween::settled(1.0),
            ..Self::new(initial, timings)
        }
    }

    pub fn from_config(config: &ScreenConfig) -> crate::core::error::Result<Self> {
        Ok(Self::new(config.initial_clock()?, Timings::from(config)))
    }

    pub fn is_dragging(&self) -> bool {
        self.interaction == Interaction::Dragging
    }

    /// Star layer opacity including the evening/night fade-in
    pub fn star_opacity(&self) -> f32 {
        let base = star_layer_opacity(self.phase.phase, self.phase.progress);
        if self.phase.phase.is_starry() {
            base * self.star_fade.value()
        } else {
            base
        }
    }

    /// Move the slider and recompute every derived field together
    fn set_slider(&mut self, slider: SliderPosition) {
        self.slider = slider;
        let clock = slider.clock_time();
        self.selection = TimeSelection::from_clock(clock);

        let next = clock.phase_progress();
        let current = self.phase.phase;
        if next.phase != current {
            tracing::debug!(from = %current, to = %next.phase, time = %self.selection, "phase changed");
            self.previous_phase = current;
            self.palette_blend = Tween::new(
                0.0,
                1.0,
                self.timings.palette_transition_secs,
                Easing::EaseInOut,
            );
            if next.phase.is_starry() && !current.is_starry() {
                self.star_fade = Tween::new(0.0, 1.0, self.timings.star_fade_secs, Easing::EaseIn);
            }
        }
        self.phase = next;
    }

    fn advance(&mut self, dt: f32) {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.elapsed += dt;
        self.palette_blend.update(dt);
        self.star_fade.update(dt);
        self.text_opacity.update(dt);
        self.thumb_scale.update(dt);

        if let Some(streak) = self.shooting_star {
            if streak.is_finished(self.elapsed, self.timings.shooting_star_duration_secs) {
                self.shooting_star = None;
            }
        }
    }
}

/// Apply one event to the state, returning the next state.
pub fn update(mut state: AppState, event: AppEvent) -> AppState {
    match event {
        AppEvent::DragStarted { fraction } => {
            state.interaction = Interaction::Dragging;
            state
                .thumb_scale
                .retarget(DRAG_THUMB_SCALE, 0.3, Easing::EaseOut);
            state.text_opacity.retarget(
                state.timings.drag_text_opacity,
                0.2,
                Easing::EaseOut,
            );
            state.set_slider(SliderPosition::from_fraction(fraction));
        }
        AppEvent::DragMoved { fraction } => {
            if state.is_dragging() {
                state.set_slider(SliderPosition::from_fraction(fraction));
            }
        }
        AppEvent::DragEnded => {
            // The continuous value is kept as-is, no snapping
            if state.is_dragging() {
                state.interaction = Interaction::Idle;
                state.thumb_scale.retarget(1.0, 0.5, Easing::EaseOut);
                let recover = state.timings.text_recover_secs;
                state.text_opacity.retarget(1.0, recover, Easing::EaseIn);
                tracing::debug!(time = %state.selection, phase = %state.phase.phase, "drag ended");
            }
        }
        AppEvent::Tick { dt } => state.advance(dt),
        AppEvent::ShootingStar { x, y } => {
            if state.star_opacity() > 0.0 && state.shooting_star.is_none() {
                state.shooting_star = Some(ShootingStar::new(x, y, state.elapsed));
            }
        }
        AppEvent::Quit => {
            tracing::info!("quit requested");
            state.running = false;
        }
    }
    state
}
