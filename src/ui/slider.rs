//! The 24-hour slider: geometry, hit testing and drawing.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::widgets::Widget;

use crate::render::colors::{Color, WHITE};
use crate::render::Scene;

/// Labels under the track and their positions as track fractions
pub const HOUR_LABELS: [(&str, f32); 5] = [
    ("12 AM", 0.0),
    ("6 AM", 0.25),
    ("12 PM", 0.5),
    ("6 PM", 0.75),
    ("12 AM", 1.0),
];

/// Rows of the slider block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SliderGeometry {
    /// Whole block: indicators, track, labels
    pub area: Rect,
}

impl SliderGeometry {
    pub fn new(area: Rect) -> Self {
        Self { area }
    }

    pub fn indicator_row(&self) -> u16 {
        self.area.y
    }

    pub fn track_row(&self) -> u16 {
        self.area.y + 1u16.min(self.area.height.saturating_sub(1))
    }

    pub fn label_row(&self) -> u16 {
        self.area.y + 2u16.min(self.area.height.saturating_sub(1))
    }

    /// Track fraction (0.0-1.0) under a terminal column
    pub fn fraction_at(&self, column: u16) -> f32 {
        if self.area.width <= 1 {
            return 0.0;
        }
        let offset = column.saturating_sub(self.area.x) as f32;
        (offset / (self.area.width - 1) as f32).clamp(0.0, 1.0)
    }

    /// Column of the thumb for a track fraction
    pub fn thumb_column(&self, fraction: f32) -> u16 {
        let span = self.area.width.saturating_sub(1) as f32;
        self.area.x + (fraction.clamp(0.0, 1.0) * span).round() as u16
    }

    /// Column of an hour indicator, centered in its 1/24 slot
    pub fn indicator_column(&self, hour: u32) -> u16 {
        let slot = self.area.width as f32 / 24.0;
        let column = ((hour.min(23) as f32 + 0.5) * slot) as u16;
        self.area.x + column.min(self.area.width.saturating_sub(1))
    }

    /// Whether a press at this cell grabs the slider
    pub fn hit_test(&self, column: u16, row: u16) -> bool {
        self.area.width > 0
            && self.area.height > 0
            && column >= self.area.x
            && column < self.area.right()
            && row >= self.area.y
            && row < self.area.bottom()
    }
}

/// Draws the slider over whatever sky is already in the buffer
pub struct SliderWidget<'a> {
    pub scene: &'a Scene,
}

impl<'a> SliderWidget<'a> {
    pub fn new(scene: &'a Scene) -> Self {
        Self { scene }
    }
}

impl Widget for SliderWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 2 || area.height == 0 {
            return;
        }
        let geometry = SliderGeometry::new(area);
        let scene = self.scene;
        let accent = scene.accent;

        // Hour indicators
        for hour in 0..24 {
            let column = geometry.indicator_column(hour);
            if hour == scene.selected_hour {
                paint_fg(buf, column, geometry.indicator_row(), '┃', accent, 1.0);
            } else {
                paint_fg(buf, column, geometry.indicator_row(), '│', WHITE, 0.4);
            }
        }

        if area.height < 2 {
            return;
        }

        // Track, filled up to the thumb
        let thumb = geometry.thumb_column(scene.slider_fraction);
        let row = geometry.track_row();
        for column in area.x..area.right() {
            if column <= thumb {
                let along = (column - area.x) as f32 / area.width as f32;
                let fill = accent.darken(0.8).lerp(accent, along);
                paint_fg(buf, column, row, '━', fill, 1.0);
            } else {
                paint_fg(buf, column, row, '─', WHITE, 0.2);
            }
        }

        let cell = buf.get_mut(thumb, row);
        cell.set_char(if scene.dragging { '◉' } else { '●' });
        cell.set_fg(WHITE.to_terminal());
        if scene.thumb_scale > 1.05 {
            cell.modifier.insert(Modifier::BOLD);
        }

        if area.height < 3 {
            return;
        }

        let row = geometry.label_row();
        for (label, fraction) in HOUR_LABELS {
            let width = label.chars().count() as u16;
            let center = geometry.thumb_column(fraction);
            let start = center
                .saturating_sub(width / 2)
                .max(area.x)
                .min(area.right().saturating_sub(width));
            for (i, ch) in label.chars().enumerate() {
                paint_fg(buf, start + i as u16, row, ch, WHITE, 0.8);
            }
        }
    }
}

/// Write a glyph whose color is flattened onto the cell's background
pub fn paint_fg(buf: &mut Buffer, x: u16, y: u16, ch: char, color: Color, opacity: f32) {
    let area = buf.area;
    if x < area.x || x >= area.right() || y < area.y || y >= area.bottom() {
        return;
    }
    let cell = buf.get_mut(x, y);
    let background = Color::from_terminal(cell.bg).unwrap_or(crate::render::colors::BLACK);
    cell.set_char(ch);
    cell.set_fg(color.over(background, opacity).to_terminal());
}
