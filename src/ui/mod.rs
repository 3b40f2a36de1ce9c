//! UI module - ratatui front-end for the time cycle screen

pub mod app;
pub mod display;
pub mod input;
pub mod slider;
pub mod state;
pub mod terminal;
pub mod timers;

pub use display::ScreenLayout;
pub use slider::SliderGeometry;
pub use state::{update, AppEvent, AppState, Interaction, Timings};
