//! Time Cycle - day/night cycle visualizer driven by a 24-hour time slider

pub mod core;
pub mod render;
pub mod ui;
