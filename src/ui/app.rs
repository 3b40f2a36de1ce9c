//! The interactive screen: event loop tying input, timers and drawing together.

use std::time::{Duration, Instant};

use crossterm::event;
use tokio::runtime::Runtime;
use tokio::sync::mpsc;

use crate::core::clock::ClockTime;
use crate::core::config::ScreenConfig;
use crate::core::error::Result;
use crate::render::sky::StarField;
use crate::render::Scene;
use crate::ui::display::{self, ScreenLayout};
use crate::ui::input;
use crate::ui::state::{update, AppEvent, AppState, Timings};
use crate::ui::terminal::TerminalGuard;
use crate::ui::timers::TimerSet;

/// Run the screen until the user quits, returning the final state
pub fn run(config: &ScreenConfig, initial: ClockTime) -> Result<AppState> {
    let runtime = Runtime::new()?;
    let (events, mut timer_events) = mpsc::unbounded_channel();
    let mut timers = TimerSet::new();
    timers.spawn_shooting_stars(
        runtime.handle(),
        events,
        config.shooting_star_min_delay_secs,
        config.shooting_star_max_delay_secs,
    );

    let seed = config.star_seed.unwrap_or_else(rand::random);
    let stars = StarField::generate(config.star_count, config.bright_star_count, seed);
    let frame_time = Duration::from_secs_f64(1.0 / config.frame_rate.max(1) as f64);

    let mut state = AppState::new(initial, Timings::from(config));
    tracing::info!(
        time = %state.selection,
        phase = %state.phase.phase,
        seed,
        "time cycle screen starting"
    );

    let mut guard = TerminalGuard::new()?;
    let mut last_tick = Instant::now();

    while state.running {
        let layout = ScreenLayout::new(guard.terminal.size()?);
        let scene = Scene::build(&state);
        guard
            .terminal
            .draw(|frame| display::draw(frame, &layout, &scene, &stars, config.body_radius))?;

        let wait = (last_tick + frame_time).saturating_duration_since(Instant::now());
        if event::poll(wait)? {
            let slider = layout.slider_geometry();
            loop {
                let terminal_event = event::read()?;
                if let Some(app_event) = input::translate(&terminal_event, &slider, state.interaction)
                {
                    state = update(state, app_event);
                }
                if !event::poll(Duration::ZERO)? {
                    break;
                }
            }
        }

        while let Ok(timer_event) = timer_events.try_recv() {
            state = update(state, timer_event);
        }

        let now = Instant::now();
        let dt = now.duration_since(last_tick).as_secs_f32();
        last_tick = now;
        state = update(state, AppEvent::Tick { dt });
    }

    timers.cancel_all();
    drop(guard);
    tracing::info!(time = %state.selection, elapsed = state.elapsed, "time cycle screen closed");
    Ok(state)
}
