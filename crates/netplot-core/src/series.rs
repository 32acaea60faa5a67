// File: crates/netplot-core/src/series.rs
// Summary: Line series model and the column specs that extract them from a dataset.

use skia_safe as skia;

use crate::dataset::Dataset;

/// Which vertical axis a series is scaled against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisSide {
    /// Left y-axis.
    Primary,
    /// Right y2-axis.
    Secondary,
}

pub const RED: skia::Color = skia::Color::new(0xFF_FF_00_00);
pub const BLUE: skia::Color = skia::Color::new(0xFF_00_00_FF);
pub const GREEN: skia::Color = skia::Color::new(0xFF_00_96_00);

/// How to build one series from dataset columns (1-indexed).
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesSpec {
    pub label: String,
    pub x_column: usize,
    pub y_column: usize,
    pub axis: AxisSide,
    pub color: skia::Color,
}

impl SeriesSpec {
    pub fn new(label: impl Into<String>, x_column: usize, y_column: usize) -> Self {
        Self { label: label.into(), x_column, y_column, axis: AxisSide::Primary, color: RED }
    }

    pub fn on_axis(mut self, axis: AxisSide) -> Self {
        self.axis = axis;
        self
    }

    pub fn with_color(mut self, color: skia::Color) -> Self {
        self.color = color;
        self
    }

    /// Column 2 against column 1, red, left axis.
    pub fn network_size() -> Self {
        Self::new("Network size", 1, 2).with_color(RED)
    }

    /// Column 3 against column 1, blue, right axis.
    pub fn number_of_sections() -> Self {
        Self::new("Number of sections", 1, 3).on_axis(AxisSide::Secondary).with_color(BLUE)
    }

    /// Column 4 against column 1, green, right axis.
    pub fn complete_sections() -> Self {
        Self::new("Complete sections", 1, 4).on_axis(AxisSide::Secondary).with_color(GREEN)
    }

    /// Build the series; also returns line numbers of rows that were too short.
    pub fn extract(&self, data: &Dataset) -> (Series, Vec<usize>) {
        let pair = data.column_pair(self.x_column, self.y_column);
        let series = Series::with_data(self.label.clone(), pair.points)
            .on_axis(self.axis)
            .with_color(self.color);
        (series, pair.skipped_lines)
    }
}

#[derive(Clone, Debug)]
pub struct Series {
    pub label: String,
    pub axis: AxisSide,
    pub color: skia::Color,
    pub stroke_width: f32,
    pub data_xy: Vec<(f64, f64)>,
}

impl Series {
    pub fn with_data(label: impl Into<String>, data: Vec<(f64, f64)>) -> Self {
        Self { label: label.into(), axis: AxisSide::Primary, color: RED, stroke_width: 2.0, data_xy: data }
    }

    pub fn on_axis(mut self, axis: AxisSide) -> Self {
        self.axis = axis;
        self
    }

    pub fn with_color(mut self, color: skia::Color) -> Self {
        self.color = color;
        self
    }

    /// Downsample XY data using LTTB to at most `max_points`.
    pub fn downsample_xy_lttb(&self, max_points: usize) -> Self {
        use crate::downsample::lttb;
        let data = if self.data_xy.len() > max_points && max_points >= 2 {
            lttb(&self.data_xy, max_points)
        } else {
            self.data_xy.clone()
        };
        Series { data_xy: data, label: self.label.clone(), ..*self }
    }
}
