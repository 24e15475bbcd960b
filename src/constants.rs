//! Application-wide constants.
//!
//! Centralizes magic numbers and configuration values for maintainability.

use std::time::Duration;

/// Animation tick period (~60 frames per second).
pub const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Breath pace slider bounds, in breaths per minute.
pub mod pace {
    pub const MIN: f64 = 2.0;
    pub const MAX: f64 = 9.0;
    pub const STEP: f64 = 0.5;
    pub const DEFAULT: f64 = 5.5;
}

/// Session length slider bounds, in minutes.
pub mod session {
    pub const MIN: f64 = 0.5;
    pub const MAX: f64 = 60.0;
    pub const STEP: f64 = 0.5;
    pub const DEFAULT: f64 = 5.0;
}

/// Layout dimensions for the main UI structure.
pub mod layout {
    /// Header height including ASCII art and info panel.
    pub const HEADER_HEIGHT: u16 = 6;
    /// Commands bar height.
    pub const COMMANDS_BAR_HEIGHT: u16 = 3;
    /// Status bar height.
    pub const STATUS_BAR_HEIGHT: u16 = 1;
    /// Width of the controls panel to the right of the canvas.
    pub const CONTROLS_WIDTH: u16 = 42;
}

/// Breathing circle geometry, in canvas units.
pub mod circle {
    /// Half-extent of the canvas coordinate space.
    pub const BOUND: f64 = 1.0;
    /// Gap between the fully grown circle and the canvas edge.
    pub const PADDING: f64 = 0.1;
    /// Number of straight segments used to approximate the progress arc.
    pub const ARC_SEGMENTS: usize = 96;
    /// Largest arc extent; a full 360 would collapse onto its start point.
    pub const MAX_ARC_DEGREES: f64 = 359.99;
}

/// Dialog dimensions (percentages of screen size).
pub mod dialog {
    /// Help overlay width percentage.
    pub const HELP_WIDTH: u16 = 65;
    /// Help overlay height percentage.
    pub const HELP_HEIGHT: u16 = 75;
    /// Input dialog width percentage.
    pub const INPUT_WIDTH: u16 = 50;
    /// Input dialog height percentage.
    pub const INPUT_HEIGHT: u16 = 25;
}
