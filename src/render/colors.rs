//! Color definitions for phases, sky gradients and celestial bodies

use serde::Serialize;

use crate::core::phase::Phase;

/// RGBA color (0.0 to 1.0 per channel)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Darken color by a factor (0.0 = black, 1.0 = unchanged)
    pub fn darken(&self, factor: f32) -> Self {
        Self {
            r: self.r * factor,
            g: self.g * factor,
            b: self.b * factor,
            a: self.a,
        }
    }

    /// Linear interpolation toward `to`, `t` clamped to 0.0-1.0
    pub fn lerp(&self, to: Color, t: f32) -> Self {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        Self {
            r: self.r + (to.r - self.r) * t,
            g: self.g + (to.g - self.g) * t,
            b: self.b + (to.b - self.b) * t,
            a: self.a + (to.a - self.a) * t,
        }
    }

    /// Composite `self` at `opacity` over an opaque background.
    ///
    /// Terminal cells have no alpha channel, so every translucent layer is
    /// flattened against what is already drawn underneath.
    pub fn over(&self, background: Color, opacity: f32) -> Self {
        background.lerp(*self, opacity * self.a)
    }

    pub fn to_terminal(&self) -> ratatui::style::Color {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        ratatui::style::Color::Rgb(channel(self.r), channel(self.g), channel(self.b))
    }

    /// Recover an opaque color from an RGB terminal color
    pub fn from_terminal(color: ratatui::style::Color) -> Option<Self> {
        match color {
            ratatui::style::Color::Rgb(r, g, b) => Some(Self::rgb(
                r as f32 / 255.0,
                g as f32 / 255.0,
                b as f32 / 255.0,
            )),
            _ => None,
        }
    }
}

pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
pub const GRAY: Color = Color::rgb(0.557, 0.557, 0.576);
pub const ORANGE: Color = Color::rgb(1.0, 0.584, 0.0);
pub const YELLOW: Color = Color::rgb(1.0, 0.8, 0.0);
pub const PURPLE: Color = Color::rgb(0.686, 0.322, 0.871);
pub const INDIGO: Color = Color::rgb(0.345, 0.337, 0.839);

/// Accent used by the slider and hour indicators
pub fn accent_color(phase: Phase) -> Color {
    match phase {
        Phase::Dawn => ORANGE,
        Phase::Morning => YELLOW,
        Phase::Noon => YELLOW,
        Phase::Afternoon => ORANGE,
        Phase::Evening => PURPLE,
        Phase::Night => INDIGO,
    }
}

/// Three-stop vertical sky gradient
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SkyPalette {
    pub top: Color,
    pub mid: Color,
    pub bottom: Color,
}

impl SkyPalette {
    pub const fn new(top: Color, mid: Color, bottom: Color) -> Self {
        Self { top, mid, bottom }
    }

    /// Sample the gradient at a vertical position (0.0 = top, 1.0 = bottom)
    pub fn sample(&self, position: f32) -> Color {
        let position = position.clamp(0.0, 1.0);
        if position < 0.5 {
            self.top.lerp(self.mid, position * 2.0)
        } else {
            self.mid.lerp(self.bottom, (position - 0.5) * 2.0)
        }
    }

    /// Stop-by-stop blend toward another palette
    pub fn lerp(&self, to: &SkyPalette, t: f32) -> Self {
        Self {
            top: self.top.lerp(to.top, t),
            mid: self.mid.lerp(to.mid, t),
            bottom: self.bottom.lerp(to.bottom, t),
        }
    }
}

/// Background gradient for a phase
pub fn sky_palette(phase: Phase) -> SkyPalette {
    match phase {
        Phase::Dawn => SkyPalette::new(
            Color::rgb(0.7, 0.4, 0.5),  // Dusky rose
            Color::rgb(0.9, 0.6, 0.4),  // Apricot
            Color::rgb(0.95, 0.8, 0.6), // Pale gold
        ),
        Phase::Morning => SkyPalette::new(
            Color::rgb(0.6, 0.8, 0.95),
            Color::rgb(0.7, 0.9, 1.0),
            Color::rgb(0.9, 0.95, 1.0),
        ),
        Phase::Noon => SkyPalette::new(
            Color::rgb(0.4, 0.75, 0.95), // Deepest blue of the day
            Color::rgb(0.6, 0.85, 1.0),
            Color::rgb(0.7, 0.9, 1.0),
        ),
        Phase::Afternoon => SkyPalette::new(
            Color::rgb(0.5, 0.7, 0.9),
            Color::rgb(0.7, 0.8, 0.95),
            Color::rgb(0.9, 0.9, 0.95),
        ),
        Phase::Evening => SkyPalette::new(
            Color::rgb(0.2, 0.2, 0.5), // Twilight blue
            Color::rgb(0.6, 0.3, 0.6), // Violet
            Color::rgb(0.8, 0.5, 0.5), // Sunset glow
        ),
        Phase::Night => SkyPalette::new(
            Color::rgb(0.05, 0.05, 0.2),
            Color::rgb(0.1, 0.1, 0.3),
            Color::rgb(0.2, 0.15, 0.4),
        ),
    }
}
