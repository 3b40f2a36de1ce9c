//! Terminal input to screen events.
//!
//! Only a left-button drag on the slider and the quit keys do anything.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::ui::slider::SliderGeometry;
use crate::ui::state::{AppEvent, Interaction};

/// Map a crossterm event onto an [`AppEvent`], if it means anything here
pub fn translate(
    event: &Event,
    slider: &SliderGeometry,
    interaction: Interaction,
) -> Option<AppEvent> {
    match event {
        Event::Key(key) => translate_key(key),
        Event::Mouse(mouse) => translate_mouse(mouse, slider, interaction),
        // Losing focus mid-drag counts as a release
        Event::FocusLost if interaction == Interaction::Dragging => Some(AppEvent::DragEnded),
        _ => None,
    }
}

fn translate_key(key: &KeyEvent) -> Option<AppEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(AppEvent::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(AppEvent::Quit)
        }
        _ => None,
    }
}

fn translate_mouse(
    mouse: &MouseEvent,
    slider: &SliderGeometry,
    interaction: Interaction,
) -> Option<AppEvent> {
    let dragging = interaction == Interaction::Dragging;
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) if slider.hit_test(mouse.column, mouse.row) => {
            Some(AppEvent::DragStarted {
                fraction: slider.fraction_at(mouse.column),
            })
        }
        MouseEventKind::Drag(MouseButton::Left) if dragging => Some(AppEvent::DragMoved {
            fraction: slider.fraction_at(mouse.column),
        }),
        MouseEventKind::Up(MouseButton::Left) if dragging => Some(AppEvent::DragEnded),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Rect;

    fn slider() -> SliderGeometry {
        SliderGeometry::new(Rect::new(2, 10, 25, 3))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_press_on_slider_starts_drag() {
        let event = mouse(MouseEventKind::Down(MouseButton::Left), 14, 11);
        assert_eq!(
            translate(&event, &slider(), Interaction::Idle),
            Some(AppEvent::DragStarted { fraction: 0.5 })
        );
    }

    #[test]
    fn test_press_elsewhere_ignored() {
        let event = mouse(MouseEventKind::Down(MouseButton::Left), 14, 3);
        assert_eq!(translate(&event, &slider(), Interaction::Idle), None);

        let right = mouse(MouseEventKind::Down(MouseButton::Right), 14, 11);
        assert_eq!(translate(&right, &slider(), Interaction::Idle), None);
    }

    #[test]
    fn test_drag_follows_column_anywhere() {
        // Rows outside the block still move the thumb once held
        let event = mouse(MouseEventKind::Drag(MouseButton::Left), 26, 0);
        assert_eq!(
            translate(&event, &slider(), Interaction::Dragging),
            Some(AppEvent::DragMoved { fraction: 1.0 })
        );
        assert_eq!(translate(&event, &slider(), Interaction::Idle), None);
    }

    #[test]
    fn test_release_ends_drag() {
        let event = mouse(MouseEventKind::Up(MouseButton::Left), 5, 5);
        assert_eq!(
            translate(&event, &slider(), Interaction::Dragging),
            Some(AppEvent::DragEnded)
        );
        assert_eq!(translate(&event, &slider(), Interaction::Idle), None);
        assert_eq!(
            translate(&Event::FocusLost, &slider(), Interaction::Dragging),
            Some(AppEvent::DragEnded)
        );
    }

    #[test]
    fn test_quit_keys() {
        let quit = [
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE),
            KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        ];
        for key in quit {
            assert_eq!(
                translate(&Event::Key(key), &slider(), Interaction::Idle),
                Some(AppEvent::Quit)
            );
        }

        let other = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);
        assert_eq!(translate(&Event::Key(other), &slider(), Interaction::Idle), None);
    }
}
