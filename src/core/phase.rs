//! Phases of the day and the clock-time to phase-progress mapping
//!
//! The day is split into six phases with fixed hour windows. Night is the
//! only window that wraps past midnight: it runs from 21:00 to 05:00, so its
//! progress keeps counting through 00:00 instead of restarting.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Length of the dawn, morning, noon and evening windows
pub const SHORT_WINDOW_MINUTES: u32 = 180;

/// Length of the afternoon window (14:00-18:00)
pub const AFTERNOON_WINDOW_MINUTES: u32 = 240;

/// Length of the night window (21:00-05:00)
pub const NIGHT_WINDOW_MINUTES: u32 = 480;

/// Named segment of the 24-hour cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// 05:00-08:00
    Dawn,
    /// 08:00-11:00
    Morning,
    /// 11:00-14:00
    Noon,
    /// 14:00-18:00
    Afternoon,
    /// 18:00-21:00
    Evening,
    /// 21:00-05:00, wrapping past midnight
    Night,
}

impl Phase {
    pub const ALL: [Phase; 6] = [
        Phase::Dawn,
        Phase::Morning,
        Phase::Noon,
        Phase::Afternoon,
        Phase::Evening,
        Phase::Night,
    ];

    /// Get the phase for an hour (0-23). Hours past 23 fall into night.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=7 => Phase::Dawn,
            8..=10 => Phase::Morning,
            11..=13 => Phase::Noon,
            14..=17 => Phase::Afternoon,
            18..=20 => Phase::Evening,
            _ => Phase::Night, // 21-23, 0-4
        }
    }

    /// First hour of the window
    pub fn window_start(&self) -> u32 {
        match self {
            Phase::Dawn => 5,
            Phase::Morning => 8,
            Phase::Noon => 11,
            Phase::Afternoon => 14,
            Phase::Evening => 18,
            Phase::Night => 21,
        }
    }

    pub fn window_minutes(&self) -> u32 {
        match self {
            Phase::Afternoon => AFTERNOON_WINDOW_MINUTES,
            Phase::Night => NIGHT_WINDOW_MINUTES,
            _ => SHORT_WINDOW_MINUTES,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Phase::Dawn => "Dawn",
            Phase::Morning => "Morning",
            Phase::Noon => "Noon",
            Phase::Afternoon => "Afternoon",
            Phase::Evening => "Evening",
            Phase::Night => "Night",
        }
    }

    /// Phases during which clouds drift across the sky
    pub fn is_daytime(&self) -> bool {
        matches!(
            self,
            Phase::Dawn | Phase::Morning | Phase::Noon | Phase::Afternoon
        )
    }

    /// Phases whose star field is fully lit
    pub fn is_starry(&self) -> bool {
        matches!(self, Phase::Evening | Phase::Night)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A phase together with the normalized position inside its window.
///
/// Both halves are always computed together from the same clock time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhaseProgress {
    pub phase: Phase,
    /// 0.0 at the start of the window, approaching 1.0 at its end
    pub progress: f32,
}

impl PhaseProgress {
    /// Map a 24h clock time to its phase and progress.
    ///
    /// Hours are clamped to 0-23 and minutes to 0-59 before dispatch.
    pub fn at(hour24: u32, minute: u32) -> Self {
        let hour = hour24.min(23);
        let minute = minute.min(59);
        let phase = Phase::from_hour(hour);

        let minutes_into_window = match phase {
            // Early-morning hours continue the window that opened at 21:00
            Phase::Night if hour < Phase::Dawn.window_start() => (hour + 3) * 60 + minute,
            _ => (hour - phase.window_start()) * 60 + minute,
        };

        Self {
            phase,
            progress: minutes_into_window as f32 / phase.window_minutes() as f32,
        }
    }
}

/// Map a 24h clock time to `(phase, progress)`
pub fn map_time(hour24: u32, minute: u32) -> (Phase, f32) {
    let mapped = PhaseProgress::at(hour24, minute);
    (mapped.phase, mapped.progress)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-3,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_phase_from_hour() {
        assert_eq!(Phase::from_hour(4), Phase::Night);
        assert_eq!(Phase::from_hour(5), Phase::Dawn);
        assert_eq!(Phase::from_hour(7), Phase::Dawn);
        assert_eq!(Phase::from_hour(8), Phase::Morning);
        assert_eq!(Phase::from_hour(11), Phase::Noon);
        assert_eq!(Phase::from_hour(14), Phase::Afternoon);
        assert_eq!(Phase::from_hour(17), Phase::Afternoon);
        assert_eq!(Phase::from_hour(18), Phase::Evening);
        assert_eq!(Phase::from_hour(21), Phase::Night);
        assert_eq!(Phase::from_hour(0), Phase::Night);
    }

    #[test]
    fn test_window_boundaries() {
        assert_eq!(map_time(5, 0), (Phase::Dawn, 0.0));
        assert_eq!(map_time(8, 0), (Phase::Morning, 0.0));
        assert_eq!(map_time(14, 0), (Phase::Afternoon, 0.0));
        assert_eq!(map_time(21, 0), (Phase::Night, 0.0));

        let (phase, progress) = map_time(7, 59);
        assert_eq!(phase, Phase::Dawn);
        assert_close(progress, 179.0 / 180.0);

        let (phase, progress) = map_time(17, 59);
        assert_eq!(phase, Phase::Afternoon);
        assert_close(progress, 239.0 / 240.0);
    }

    #[test]
    fn test_night_wraps_past_midnight() {
        let (phase, progress) = map_time(0, 0);
        assert_eq!(phase, Phase::Night);
        assert_close(progress, 0.375);

        let (phase, progress) = map_time(4, 59);
        assert_eq!(phase, Phase::Night);
        assert_close(progress, 479.0 / 480.0);

        let (_, before_midnight) = map_time(23, 59);
        let (_, after_midnight) = map_time(0, 0);
        assert!(after_midnight > before_midnight);
    }

    #[test]
    fn test_out_of_range_input_is_clamped() {
        assert_eq!(PhaseProgress::at(24, 0), PhaseProgress::at(23, 0));
        assert_eq!(PhaseProgress::at(12, 75), PhaseProgress::at(12, 59));
    }

    #[test]
    fn test_window_lengths_cover_the_day() {
        let total: u32 = Phase::ALL.iter().map(|p| p.window_minutes()).sum();
        assert_eq!(total, 24 * 60);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Phase::Dawn.to_string(), "Dawn");
        assert_eq!(Phase::Afternoon.to_string(), "Afternoon");
        assert_eq!(Phase::Night.display_name(), "Night");
    }
}
