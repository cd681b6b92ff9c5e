//! Fixed geometry of the score sheet.
//!
//! Positions are given in inches from the bottom-left corner and line
//! offsets below the top baseline, then converted to PDF points.

use upda_core::models::metric::Metric;

pub const POINTS_PER_INCH: f32 = 72.0;

pub const PAGE_WIDTH: f32 = 8.5 * POINTS_PER_INCH;
pub const PAGE_HEIGHT: f32 = 11.0 * POINTS_PER_INCH;

/// Resource name of the sheet's only font.
pub const FONT_NAME: &str = "F1";
pub const FONT_FACE: &str = "Helvetica";
pub const FONT_SIZE: f32 = 12.0;

/// Baseline everything else is measured down from.
pub const TOP: f32 = 10.0 * POINTS_PER_INCH;

pub const NAME_X: f32 = 7.0 * POINTS_PER_INCH;
pub const TIMESTAMP_X: f32 = 3.25 * POINTS_PER_INCH;
pub const TIMESTAMP_LINES: f32 = 4.0;

pub const PERCENTAGE_X: f32 = 4.25 * POINTS_PER_INCH;
pub const RAW_X: f32 = 6.40 * POINTS_PER_INCH;

/// A point on the page, in PDF user space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

fn below_top(lines: f32) -> f32 {
    TOP - FONT_SIZE * lines
}

pub fn name_position() -> Position {
    Position::new(NAME_X, TOP)
}

pub fn timestamp_position() -> Position {
    Position::new(TIMESTAMP_X, below_top(TIMESTAMP_LINES))
}

/// Lines below the top baseline for each metric row.
pub fn metric_lines(metric: Metric) -> f32 {
    match metric {
        Metric::Ftap => 12.5,
        Metric::Htap => 14.75,
        Metric::Ptrem => 17.0,
        Metric::Ktrem => 19.25,
        Metric::Rtrem => 21.5,
        Metric::Crest => 23.75,
    }
}

pub fn percentage_position(metric: Metric) -> Position {
    Position::new(PERCENTAGE_X, below_top(metric_lines(metric)))
}

pub fn raw_position(metric: Metric) -> Position {
    Position::new(RAW_X, below_top(metric_lines(metric)))
}
