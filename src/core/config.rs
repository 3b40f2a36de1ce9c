//! Screen configuration with documented tunables
//!
//! Every timing and density knob of the visualizer lives here. Values can be
//! overridden from a TOML file; missing keys fall back to the defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::clock::ClockTime;
use crate::core::error::{CycleError, Result};

/// Configuration for the time cycle screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    // === CLOCK ===
    /// Time shown when the screen opens, `"7:30 AM"` or `"07:30"`
    pub initial_time: String,

    // === FRAME LOOP ===
    /// Frames drawn per second. Also the rate of `Tick` events.
    pub frame_rate: u32,

    // === STARS ===
    /// Small background stars
    pub star_count: usize,

    /// Larger twinkling stars, kept out of the bottom fifth of the sky
    pub bright_star_count: usize,

    /// Seed for the star field. A random seed is drawn when unset.
    pub star_seed: Option<u64>,

    /// Fade-in time of the star layer when evening or night begins
    pub star_fade_secs: f32,

    // === SHOOTING STARS ===
    /// Shortest pause between two shooting stars
    pub shooting_star_min_delay_secs: f32,

    /// Longest pause between two shooting stars
    pub shooting_star_max_delay_secs: f32,

    /// Flight time of a single shooting star
    pub shooting_star_duration_secs: f32,

    // === TRANSITIONS ===
    /// Cross-fade time between two sky palettes after a phase change
    pub palette_transition_secs: f32,

    /// Opacity of the clock text while the slider is dragged
    pub drag_text_opacity: f32,

    /// Time for the clock text to recover full opacity after a drag
    pub text_recover_secs: f32,

    // === CELESTIAL ===
    /// Seconds for the sun rays to complete one turn
    pub ray_period_secs: f32,

    /// Seconds for one leg of the celestial pulse (1.0 to 1.05 scale)
    pub pulse_period_secs: f32,

    /// Radius of the sun and moon discs in terminal rows
    pub body_radius: u16,

    // === LOGGING ===
    /// Log file used while the terminal UI owns the screen
    pub log_file: Option<PathBuf>,

    /// Default filter when `RUST_LOG` is not set
    pub log_filter: String,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            initial_time: "7:30 AM".to_string(),

            frame_rate: 30,

            star_count: 200,
            bright_star_count: 20,
            star_seed: None,
            star_fade_secs: 2.0,

            shooting_star_min_delay_secs: 3.0,
            shooting_star_max_delay_secs: 15.0,
            shooting_star_duration_secs: 0.8,

            palette_transition_secs: 1.5,
            drag_text_opacity: 0.7,
            text_recover_secs: 0.3,

            ray_period_secs: 20.0,
            pulse_period_secs: 4.0,
            body_radius: 3,

            log_file: None,
            log_filter: "time_cycle=info".to_string(),
        }
    }
}

impl ScreenConfig {
    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        tracing::info!(path = %path.display(), "loaded screen config");
        Ok(config)
    }

    /// Parse and validate TOML content
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: ScreenConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn initial_clock(&self) -> Result<ClockTime> {
        self.initial_time.parse()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| Err(CycleError::InvalidConfig(msg));

        self.initial_clock()?;

        if self.frame_rate == 0 || self.frame_rate > 240 {
            return invalid(format!(
                "frame_rate ({}) should be within 1..=240",
                self.frame_rate
            ));
        }

        let delays = [
            ("shooting_star_min_delay_secs", self.shooting_star_min_delay_secs),
            ("shooting_star_max_delay_secs", self.shooting_star_max_delay_secs),
        ];
        for (name, value) in delays {
            if !value.is_finite() {
                return invalid(format!("{name} ({value}) must be finite"));
            }
        }

        if self.shooting_star_min_delay_secs <= 0.0 {
            return invalid("shooting_star_min_delay_secs must be positive".into());
        }

        if self.shooting_star_min_delay_secs > self.shooting_star_max_delay_secs {
            return invalid(format!(
                "shooting_star_min_delay_secs ({}) should be <= shooting_star_max_delay_secs ({})",
                self.shooting_star_min_delay_secs, self.shooting_star_max_delay_secs
            ));
        }

        let durations = [
            ("star_fade_secs", self.star_fade_secs),
            ("shooting_star_duration_secs", self.shooting_star_duration_secs),
            ("palette_transition_secs", self.palette_transition_secs),
            ("text_recover_secs", self.text_recover_secs),
            ("ray_period_secs", self.ray_period_secs),
            ("pulse_period_secs", self.pulse_period_secs),
        ];
        for (name, value) in durations {
            if !(value.is_finite() && value > 0.0) {
                return invalid(format!("{name} ({value}) must be positive"));
            }
        }

        if !(self.drag_text_opacity > 0.0 && self.drag_text_opacity <= 1.0) {
            return invalid(format!(
                "drag_text_opacity ({}) should be within (0, 1]",
                self.drag_text_opacity
            ));
        }

        if self.body_radius == 0 {
            return invalid("body_radius must be at least 1".into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ScreenConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.initial_clock().unwrap(), ClockTime::new(7, 30));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ScreenConfig::from_toml(
            r#"
            initial_time = "9:15 PM"
            star_seed = 42
            "#,
        )
        .unwrap();
        assert_eq!(config.initial_clock().unwrap(), ClockTime::new(21, 15));
        assert_eq!(config.star_seed, Some(42));
        assert_eq!(config.star_count, 200);
        assert_eq!(config.frame_rate, 30);
    }

    #[test]
    fn test_load_sample_config() {
        let config = ScreenConfig::load(Path::new("config/time_cycle.toml"))
            .expect("sample config should load");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_inverted_delays() {
        let config = ScreenConfig {
            shooting_star_min_delay_secs: 10.0,
            shooting_star_max_delay_secs: 2.0,
            ..ScreenConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(CycleError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_rejects_non_finite_delays() {
        for (min, max) in [(f32::NAN, 15.0), (3.0, f32::INFINITY), (f32::NAN, f32::NAN)] {
            let config = ScreenConfig {
                shooting_star_min_delay_secs: min,
                shooting_star_max_delay_secs: max,
                ..ScreenConfig::default()
            };
            assert!(matches!(
                config.validate(),
                Err(CycleError::InvalidConfig(_))
            ));
        }
    }

    #[test]
    fn test_rejects_bad_initial_time() {
        let result = ScreenConfig::from_toml(r#"initial_time = "25:00""#);
        assert!(matches!(result, Err(CycleError::InvalidTime(_))));
    }

    #[test]
    fn test_rejects_unparseable_toml() {
        let result = ScreenConfig::from_toml("frame_rate = \"fast\"");
        assert!(matches!(result, Err(CycleError::ConfigParse(_))));
    }

    #[test]
    fn test_rejects_zero_frame_rate() {
        let config = ScreenConfig {
            frame_rate: 0,
            ..ScreenConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
