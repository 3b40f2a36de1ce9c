//! Frame composition: sky, celestial bodies, clock header and slider.
//!
//! Every widget here reads a [`Scene`] and paints into the ratatui buffer.
//! Layers are flattened as they go since terminal cells carry no alpha.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::Widget;
use ratatui::Frame;

use crate::render::celestial::{moon_shaded, BodyKind, CelestialBody, MOON_CRATERS};
use crate::render::colors::{Color, BLACK, GRAY, WHITE};
use crate::render::sky::{cloud_coverage, StarField};
use crate::render::Scene;
use crate::ui::slider::{paint_fg, SliderGeometry, SliderWidget};

/// Rows taken by the big clock digits
const DIGIT_ROWS: u16 = 5;

/// Terminal cells are roughly twice as tall as they are wide
const CELL_ASPECT: f32 = 2.0;

/// Where each part of the screen goes for a given terminal size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Whole terminal, painted with the sky
    pub sky: Rect,
    /// Clock digits plus the phase label underneath
    pub header: Rect,
    /// Band the sun and moon move through
    pub celestial: Rect,
    /// Indicators, track and hour labels
    pub slider: Rect,
}

impl ScreenLayout {
    pub fn new(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(DIGIT_ROWS + 2),
                Constraint::Min(0),
                Constraint::Length(3),
                Constraint::Length(2),
            ])
            .split(area);

        let slider = Layout::default()
            .direction(Direction::Horizontal)
            .horizontal_margin(3)
            .constraints([Constraint::Min(0)])
            .split(rows[3])[0];

        Self {
            sky: area,
            header: rows[1],
            celestial: rows[2],
            slider,
        }
    }

    pub fn slider_geometry(&self) -> SliderGeometry {
        SliderGeometry::new(self.slider)
    }
}

/// Draw one complete frame
pub fn draw(
    frame: &mut Frame,
    layout: &ScreenLayout,
    scene: &Scene,
    stars: &StarField,
    body_radius: u16,
) {
    frame.render_widget(SkyWidget { scene, stars }, layout.sky);
    frame.render_widget(
        BodiesWidget {
            scene,
            radius: body_radius,
        },
        layout.celestial,
    );
    frame.render_widget(HeaderWidget { scene }, layout.header);
    frame.render_widget(SliderWidget::new(scene), layout.slider);
}

// ============================================================================
// Sky
// ============================================================================

/// Gradient, stars, shooting star and clouds
pub struct SkyWidget<'a> {
    pub scene: &'a Scene,
    pub stars: &'a StarField,
}

impl Widget for SkyWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let scene = self.scene;
        let rows = area.height.saturating_sub(1).max(1) as f32;
        let columns = area.width.saturating_sub(1).max(1) as f32;

        for y in area.top()..area.bottom() {
            let color = scene.sky_at((y - area.y) as f32 / rows).to_terminal();
            for x in area.left()..area.right() {
                let cell = buf.get_mut(x, y);
                cell.reset();
                cell.set_bg(color);
            }
        }

        if scene.star_opacity > 0.0 {
            for star in &self.stars.stars {
                let opacity = scene.star_opacity * star.opacity_at(scene.time);
                if opacity < 0.02 {
                    continue;
                }
                let x = area.x + (star.x * columns).round() as u16;
                let y = area.y + (star.y * rows).round() as u16;
                paint_fg(buf, x, y, star.glyph(scene.time), WHITE, opacity);
            }
        }

        if let Some(streak) = scene.shooting_star {
            let x = streak.x * columns;
            let y = streak.y * rows;
            // Trail fades toward where the streak came from
            for step in (0..4u16).rev() {
                let tx = x - step as f32 * CELL_ASPECT;
                let ty = y - step as f32;
                if tx < 0.0 || ty < 0.0 {
                    continue;
                }
                let glyph = if step == 0 { '✶' } else { '·' };
                let opacity = streak.opacity * (1.0 - step as f32 * 0.25);
                paint_fg(
                    buf,
                    area.x + tx.round() as u16,
                    area.y + ty.round() as u16,
                    glyph,
                    WHITE,
                    opacity,
                );
            }
        }

        if let Some(layer) = scene.cloud_opacity {
            for y in area.top()..area.bottom() {
                let ny = (y - area.y) as f32 / rows;
                for x in area.left()..area.right() {
                    let nx = (x - area.x) as f32 / columns;
                    let coverage = cloud_coverage(nx, ny) * layer;
                    if coverage <= 0.0 {
                        continue;
                    }
                    blend_bg(buf, x, y, WHITE, coverage);
                    if coverage > 0.5 {
                        buf.get_mut(x, y).set_char(' ');
                    }
                }
            }
        }
    }
}

/// Flatten `color` at `opacity` onto a cell's background
fn blend_bg(buf: &mut Buffer, x: u16, y: u16, color: Color, opacity: f32) {
    let area = buf.area;
    if x < area.x || x >= area.right() || y < area.y || y >= area.bottom() {
        return;
    }
    let cell = buf.get_mut(x, y);
    let background = Color::from_terminal(cell.bg).unwrap_or(BLACK);
    cell.set_bg(color.over(background, opacity).to_terminal());
}

// ============================================================================
// Sun and moon
// ============================================================================

/// Sun and moon, centered horizontally inside the celestial band
pub struct BodiesWidget<'a> {
    pub scene: &'a Scene,
    /// Disc radius in rows before the group pulse
    pub radius: u16,
}

impl Widget for BodiesWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let radius = self.radius.max(1) as f32 * self.scene.group_scale;
        for body in &self.scene.bodies {
            // The band dims together with the header while dragging
            let body = &CelestialBody {
                opacity: body.opacity * self.scene.text_opacity,
                ..*body
            };
            if body.opacity <= 0.0 {
                continue;
            }
            let cx = area.x as f32 + (area.width.saturating_sub(1)) as f32 / 2.0;
            let cy = area.y as f32
                + body.vertical_fraction() * area.height.saturating_sub(1) as f32;
            let canvas = BodyCanvas {
                area,
                cx,
                cy,
                radius,
            };
            match body.kind {
                BodyKind::Sun { color } => canvas.sun(buf, self.scene, body, color),
                BodyKind::Moon { progress } => canvas.moon(buf, self.scene, body, progress),
            }
        }
    }
}

/// One body's center and radius in buffer coordinates
struct BodyCanvas {
    area: Rect,
    cx: f32,
    cy: f32,
    radius: f32,
}

impl BodyCanvas {
    /// Cells within `reach` radii, with their offsets in row units
    fn cells(&self, reach: f32) -> Vec<(u16, u16, f32, f32)> {
        let extent = self.radius * reach;
        let top = (self.cy - extent).floor().max(self.area.y as f32) as u16;
        let bottom = (self.cy + extent).ceil().min(self.area.bottom() as f32 - 1.0);
        let left = (self.cx - extent * CELL_ASPECT)
            .floor()
            .max(self.area.x as f32) as u16;
        let right = (self.cx + extent * CELL_ASPECT)
            .ceil()
            .min(self.area.right() as f32 - 1.0);
        if bottom < top as f32 || right < left as f32 {
            return Vec::new();
        }

        let mut cells = Vec::new();
        for y in top..=bottom as u16 {
            for x in left..=right as u16 {
                let dx = (x as f32 - self.cx) / CELL_ASPECT;
                let dy = y as f32 - self.cy;
                cells.push((x, y, dx, dy));
            }
        }
        cells
    }

    fn sun(&self, buf: &mut Buffer, scene: &Scene, body: &CelestialBody, color: Color) {
        let halo = self.radius * 1.3 * scene.halo_scale;
        for (x, y, dx, dy) in self.cells(2.0) {
            let distance = (dx * dx + dy * dy).sqrt();
            if distance <= self.radius {
                let core = WHITE.lerp(color, distance / self.radius);
                blend_bg(buf, x, y, core, body.opacity);
                buf.get_mut(x, y).set_char(' ');
            } else if distance <= halo {
                let falloff = 1.0 - (distance - self.radius) / (halo - self.radius);
                blend_bg(buf, x, y, color, 0.35 * falloff * body.opacity);
            }

            if distance >= self.radius * 1.4 && distance <= self.radius * 2.0 {
                let angle = dx.atan2(-dy).to_degrees().rem_euclid(360.0);
                let on_ray = scene.ray_angles.iter().any(|ray| {
                    let diff = (angle - ray).rem_euclid(360.0);
                    diff.min(360.0 - diff) < 7.0
                });
                if on_ray {
                    paint_fg(buf, x, y, '•', color, 0.6 * body.opacity);
                }
            }
        }
    }

    fn moon(&self, buf: &mut Buffer, scene: &Scene, body: &CelestialBody, progress: f32) {
        let glow = self.radius * 1.3 * scene.halo_scale;
        for (x, y, dx, dy) in self.cells(1.5) {
            let distance = (dx * dx + dy * dy).sqrt();
            if distance > self.radius {
                if distance <= glow {
                    blend_bg(buf, x, y, WHITE, 0.15 * body.opacity);
                }
                continue;
            }

            let (ux, uy) = (dx / self.radius, dy / self.radius);
            if moon_shaded(ux, uy, progress) {
                continue;
            }
            let cratered = MOON_CRATERS.iter().any(|&(mx, my, mr)| {
                let (ex, ey) = (ux - mx, uy - my);
                ex * ex + ey * ey <= mr * mr
            });
            let surface = if cratered { GRAY } else { WHITE };
            blend_bg(buf, x, y, surface, body.opacity);
            buf.get_mut(x, y).set_char(' ');
        }
    }
}

// ============================================================================
// Clock header
// ============================================================================

/// 3x5 block digits, one string per row
const DIGITS: [[&str; 5]; 10] = [
    ["███", "█ █", "█ █", "█ █", "███"],
    [" █ ", "██ ", " █ ", " █ ", "███"],
    ["███", "  █", "███", "█  ", "███"],
    ["███", "  █", "███", "  █", "███"],
    ["█ █", "█ █", "███", "  █", "  █"],
    ["███", "█  ", "███", "  █", "███"],
    ["███", "█  ", "███", "█ █", "███"],
    ["███", "  █", "  █", "  █", "  █"],
    ["███", "█ █", "███", "█ █", "███"],
    ["███", "█ █", "███", "  █", "███"],
];

const COLON: [&str; 5] = [" ", "█", " ", "█", " "];

fn big_glyph(ch: char) -> Option<[&'static str; 5]> {
    match ch {
        ':' => Some(COLON),
        _ => ch.to_digit(10).map(|digit| DIGITS[digit as usize]),
    }
}

/// Width in cells of `text` drawn in block digits, one blank column apart
pub fn big_text_width(text: &str) -> u16 {
    let glyphs: u16 = text
        .chars()
        .filter_map(big_glyph)
        .map(|glyph| glyph[0].chars().count() as u16)
        .sum();
    let count = text.chars().filter(|&ch| big_glyph(ch).is_some()).count() as u16;
    glyphs + count.saturating_sub(1)
}

/// Time in block digits with AM/PM beside it, phase label below
pub struct HeaderWidget<'a> {
    pub scene: &'a Scene,
}

impl Widget for HeaderWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let scene = self.scene;
        let opacity = scene.text_opacity;
        let meridiem_width = scene.meridiem.len() as u16 + 1;
        let digits_width = big_text_width(&scene.clock);

        let label_row = if area.height > DIGIT_ROWS + 1
            && area.width >= digits_width + meridiem_width
        {
            let mut x = centered_start(area, digits_width + meridiem_width);
            for glyph in scene.clock.chars().filter_map(big_glyph) {
                for (dy, line) in glyph.iter().enumerate() {
                    for (dx, ch) in line.chars().enumerate() {
                        if ch != ' ' {
                            paint_fg(buf, x + dx as u16, area.y + dy as u16, ch, WHITE, opacity);
                        }
                    }
                }
                x += glyph[0].chars().count() as u16 + 1;
            }
            paint_text(buf, x, area.y + DIGIT_ROWS - 1, scene.meridiem, WHITE, opacity);
            area.y + DIGIT_ROWS + 1
        } else {
            let text = format!("{} {}", scene.clock, scene.meridiem);
            let x = centered_start(area, text.chars().count() as u16);
            paint_text(buf, x, area.y, &text, WHITE, opacity);
            area.y + 1
        };

        if label_row < area.bottom() {
            let x = centered_start(area, scene.label.chars().count() as u16);
            paint_text(buf, x, label_row, scene.label, scene.accent, opacity);
        }
    }
}

fn centered_start(area: Rect, width: u16) -> u16 {
    area.x + area.width.saturating_sub(width) / 2
}

fn paint_text(buf: &mut Buffer, x: u16, y: u16, text: &str, color: Color, opacity: f32) {
    for (i, ch) in text.chars().enumerate() {
        paint_fg(buf, x + i as u16, y, ch, color, opacity);
    }
}
