//! Slider interaction integration tests
//!
//! Drives the screen the way the event loop does: terminal events through
//! `input::translate`, then `update`, then a rendered frame.

use crossterm::event::{Event, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;

use time_cycle::core::{ClockTime, Phase, ScreenConfig};
use time_cycle::render::sky::StarField;
use time_cycle::render::Scene;
use time_cycle::ui::display::{self, ScreenLayout};
use time_cycle::ui::input::translate;
use time_cycle::ui::{update, AppEvent, AppState, Interaction, Timings};

const WIDTH: u16 = 80;
const HEIGHT: u16 = 40;

fn layout() -> ScreenLayout {
    ScreenLayout::new(Rect::new(0, 0, WIDTH, HEIGHT))
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

/// Column where the thumb sits for a given hour of the day
fn column_for(layout: &ScreenLayout, hours: f32) -> u16 {
    layout.slider_geometry().thumb_column(hours / 24.0)
}

fn apply(state: AppState, layout: &ScreenLayout, event: Event) -> AppState {
    match translate(&event, &layout.slider_geometry(), state.interaction) {
        Some(app_event) => update(state, app_event),
        None => state,
    }
}

fn render(state: &AppState) -> String {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    let layout = layout();
    let scene = Scene::build(state);
    let stars = StarField::generate(100, 10, 42);
    terminal
        .draw(|frame| display::draw(frame, &layout, &scene, &stars, 3))
        .unwrap();

    let buffer = terminal.backend().buffer();
    (0..HEIGHT)
        .map(|y| {
            (0..WIDTH)
                .map(|x| buffer.get(x, y).symbol().to_string())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_full_drag_through_the_day() {
    let layout = layout();
    let config = ScreenConfig::default();
    let state = AppState::from_config(&config).unwrap();
    assert_eq!(state.phase.phase, Phase::Dawn);

    let row = layout.slider_geometry().track_row();
    let state = apply(
        state,
        &layout,
        mouse(MouseEventKind::Down(MouseButton::Left), column_for(&layout, 12.0), row),
    );
    assert_eq!(state.interaction, Interaction::Dragging);
    assert_eq!(state.phase.phase, Phase::Noon);

    // Sweep right through the afternoon and evening into night
    let mut seen = vec![state.phase.phase];
    let mut state = state;
    for hours in [15.0, 19.0, 22.0] {
        state = apply(
            state,
            &layout,
            mouse(MouseEventKind::Drag(MouseButton::Left), column_for(&layout, hours), row),
        );
        state = update(state, AppEvent::Tick { dt: 1.0 / 30.0 });
        seen.push(state.phase.phase);
    }
    assert_eq!(
        seen,
        vec![Phase::Noon, Phase::Afternoon, Phase::Evening, Phase::Night]
    );

    let value = state.slider.value();
    let state = apply(
        state,
        &layout,
        mouse(MouseEventKind::Up(MouseButton::Left), column_for(&layout, 22.0), row),
    );
    assert_eq!(state.interaction, Interaction::Idle);
    assert_eq!(state.slider.value(), value);
    assert_eq!(state.selection.meridiem(), "PM");
}

#[test]
fn test_press_outside_slider_does_nothing() {
    let layout = layout();
    let state = AppState::new(ClockTime::new(9, 0), Timings::default());
    let after = apply(
        state.clone(),
        &layout,
        mouse(MouseEventKind::Down(MouseButton::Left), 40, 5),
    );
    assert_eq!(after, state);
}

#[test]
fn test_drag_to_right_end_shows_midnight() {
    let layout = layout();
    let geometry = layout.slider_geometry();
    let state = AppState::new(ClockTime::new(20, 0), Timings::default());
    let right = geometry.area.right() - 1;

    let state = apply(
        state,
        &layout,
        mouse(MouseEventKind::Down(MouseButton::Left), right, geometry.track_row()),
    );
    assert_eq!(state.selection.to_string(), "12:00 AM");
    assert_eq!(state.phase.phase, Phase::Night);
    assert_eq!(Scene::build(&state).selected_hour, 24);
}

#[test]
fn test_rendered_frame_follows_state() {
    let state = AppState::new(ClockTime::new(7, 30), Timings::default());
    let frame = render(&state);
    assert!(frame.contains("Dawn"));
    assert!(frame.contains("AM"));
    assert!(frame.contains("6 PM"));

    let layout = layout();
    let row = layout.slider_geometry().track_row();
    let state = apply(
        state,
        &layout,
        mouse(MouseEventKind::Down(MouseButton::Left), column_for(&layout, 19.0), row),
    );
    let frame = render(&state);
    assert!(frame.contains("Evening"));
    assert!(frame.contains("PM"));
    assert!(frame.contains('◉'));
}

#[test]
fn test_quit_stops_the_screen() {
    let layout = layout();
    let state = AppState::new(ClockTime::new(12, 0), Timings::default());
    let quit = Event::Key(crossterm::event::KeyEvent::new(
        crossterm::event::KeyCode::Char('q'),
        KeyModifiers::NONE,
    ));
    let state = apply(state, &layout, quit);
    assert!(!state.running);
}
