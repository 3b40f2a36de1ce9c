pub mod clock;
pub mod config;
pub mod error;
pub mod phase;

pub use clock::{ClockTime, SliderPosition, TimeSelection};
pub use config::ScreenConfig;
pub use phase::{map_time, Phase, PhaseProgress};
