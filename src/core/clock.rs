//! Clock representations driven by the time slider
//!
//! `SliderPosition` is the source of truth while the user drags. The 24h
//! `ClockTime` and the 12h `TimeSelection` are both derived from it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::{CycleError, Result};
use crate::core::phase::PhaseProgress;

pub const HOURS_PER_DAY: u32 = 24;
pub const MINUTES_PER_HOUR: u32 = 60;

/// Wall-clock time in 24h form, always within 00:00-23:59
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ClockTime {
    hour: u32,
    minute: u32,
}

impl ClockTime {
    /// Create a clock time, clamping hour to 0-23 and minute to 0-59
    pub fn new(hour: u32, minute: u32) -> Self {
        Self {
            hour: hour.min(HOURS_PER_DAY - 1),
            minute: minute.min(MINUTES_PER_HOUR - 1),
        }
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn minute_of_day(&self) -> u32 {
        self.hour * MINUTES_PER_HOUR + self.minute
    }

    pub fn phase_progress(&self) -> PhaseProgress {
        PhaseProgress::at(self.hour, self.minute)
    }
}

impl Default for ClockTime {
    fn default() -> Self {
        Self::new(7, 30)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for ClockTime {
    type Err = CycleError;

    /// Accepts `"7:30 AM"`, `"7:30pm"` or 24h `"19:30"`.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || CycleError::InvalidTime(s.to_string());
        let upper = s.trim().to_ascii_uppercase();

        let (digits, meridiem) = if let Some(rest) = upper.strip_suffix("AM") {
            (rest.trim_end(), Some(true))
        } else if let Some(rest) = upper.strip_suffix("PM") {
            (rest.trim_end(), Some(false))
        } else {
            (upper.as_str(), None)
        };

        let (hour, minute) = digits.split_once(':').ok_or_else(invalid)?;
        let hour: u32 = hour.trim().parse().map_err(|_| invalid())?;
        let minute: u32 = minute.trim().parse().map_err(|_| invalid())?;
        if minute >= MINUTES_PER_HOUR {
            return Err(invalid());
        }

        let hour24 = match meridiem {
            Some(is_am) => {
                if !(1..=12).contains(&hour) {
                    return Err(invalid());
                }
                hour % 12 + if is_am { 0 } else { 12 }
            }
            None => {
                if hour >= HOURS_PER_DAY {
                    return Err(invalid());
                }
                hour
            }
        };

        Ok(Self::new(hour24, minute))
    }
}

/// User-facing 12-hour clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSelection {
    /// 0-11, where 0 is displayed as 12
    pub hour12: u32,
    pub minute: u32,
    pub is_am: bool,
}

impl TimeSelection {
    pub fn from_clock(time: ClockTime) -> Self {
        Self {
            hour12: time.hour() % 12,
            minute: time.minute(),
            is_am: time.hour() < 12,
        }
    }

    pub fn hour24(&self) -> u32 {
        self.hour12 + if self.is_am { 0 } else { 12 }
    }

    pub fn display_hour(&self) -> u32 {
        if self.hour12 == 0 {
            12
        } else {
            self.hour12
        }
    }

    /// `"7:30"`, without the meridiem
    pub fn formatted_time(&self) -> String {
        format!("{}:{:02}", self.display_hour(), self.minute)
    }

    pub fn meridiem(&self) -> &'static str {
        if self.is_am {
            "AM"
        } else {
            "PM"
        }
    }
}

impl Default for TimeSelection {
    fn default() -> Self {
        Self::from_clock(ClockTime::default())
    }
}

impl fmt::Display for TimeSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.formatted_time(), self.meridiem())
    }
}

/// Continuous slider value in hours, 0.0 at the left end of the track and
/// 24.0 at the right end.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderPosition {
    value: f64,
}

/// Slack when flooring to whole minutes, so a value built from an exact
/// clock time never lands one minute short
const MINUTE_EPSILON: f64 = 1e-9;

impl SliderPosition {
    /// Position from a fraction of the track (0.0-1.0). Not rounded.
    pub fn from_fraction(fraction: f32) -> Self {
        let fraction = if fraction.is_finite() {
            fraction.clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self {
            value: f64::from(fraction) * f64::from(HOURS_PER_DAY),
        }
    }

    pub fn from_hours(value: f64) -> Self {
        let value = if value.is_finite() {
            value.clamp(0.0, f64::from(HOURS_PER_DAY))
        } else {
            0.0
        };
        Self { value }
    }

    pub fn from_clock(time: ClockTime) -> Self {
        Self {
            value: f64::from(time.minute_of_day()) / f64::from(MINUTES_PER_HOUR),
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn fraction(&self) -> f32 {
        (self.value / f64::from(HOURS_PER_DAY)) as f32
    }

    /// Whole hours under the thumb, without wrapping (24 at the right end)
    pub fn hour_index(&self) -> u32 {
        (self.value + MINUTE_EPSILON).floor() as u32
    }

    /// Derive the wall-clock time under the thumb.
    ///
    /// The right end of the track (24.0) wraps to midnight.
    pub fn clock_time(&self) -> ClockTime {
        let minutes = self.value * f64::from(MINUTES_PER_HOUR) + MINUTE_EPSILON;
        let minutes = minutes.floor() as u32;
        let hour = (minutes / MINUTES_PER_HOUR) % HOURS_PER_DAY;
        ClockTime::new(hour, minutes % MINUTES_PER_HOUR)
    }
}

impl Default for SliderPosition {
    fn default() -> Self {
        Self::from_clock(ClockTime::default())
    }
}
