//! Default sizes, colors and timings (all in surface pixels)

use std::time::Duration;

pub const FONT_NAME: &str = "Verdana";
pub const FONT_COLOR: &str = "#ffffff";
pub const FONT_SIZE: f64 = 14.0;

pub const CIRCLE_STROKE: &str = "#443";
pub const LINE_STROKE: &str = "#f0f0f0";
pub const RECTANGLE_FILL: &str = "#f0f0f0";
pub const LINE_WIDTH: f64 = 1.0;

pub const LAYOUT_PADDING: f64 = 10.0;

/// 60 frames per second
pub const FRAME_INTERVAL: Duration = Duration::from_micros(16_667);

