// File: crates/netplot-core/src/view.rs
// Data extents per axis and autoscaling to nice tick boundaries.

use crate::grid::nice_range;
use crate::series::AxisSide;
use crate::Chart;

/// Approximate number of tick intervals along x.
pub const X_TICK_TARGET: usize = 10;
/// Approximate number of tick intervals along y and y2.
pub const Y_TICK_TARGET: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    pub y2_min: f64,
    pub y2_max: f64,
}

#[derive(Clone, Copy)]
struct Extent {
    min: f64,
    max: f64,
}

impl Extent {
    const EMPTY: Self = Self { min: f64::INFINITY, max: f64::NEG_INFINITY };

    fn add(&mut self, v: f64) {
        self.min = self.min.min(v);
        self.max = self.max.max(v);
    }

    /// Finite bounds or the unit range when nothing was added.
    fn or_unit(self) -> (f64, f64) {
        if self.min.is_finite() && self.max.is_finite() { (self.min, self.max) } else { (0.0, 1.0) }
    }
}

impl ViewState {
    /// Raw data bounds: x over every series, y and y2 over the series bound to each.
    pub fn from_chart(chart: &Chart) -> Self {
        let mut x = Extent::EMPTY;
        let mut y = Extent::EMPTY;
        let mut y2 = Extent::EMPTY;
        for s in &chart.series {
            let target = match s.axis {
                AxisSide::Primary => &mut y,
                AxisSide::Secondary => &mut y2,
            };
            for &(px, py) in &s.data_xy {
                x.add(px);
                target.add(py);
            }
        }
        let (x_min, x_max) = x.or_unit();
        let (y_min, y_max) = y.or_unit();
        let (y2_min, y2_max) = y2.or_unit();
        Self { x_min, x_max, y_min, y_max, y2_min, y2_max }
    }

    /// Widen every range outward to tick multiples.
    pub fn nice(&self) -> Self {
        let (x_min, x_max, _) = nice_range(self.x_min, self.x_max, X_TICK_TARGET);
        let (y_min, y_max, _) = nice_range(self.y_min, self.y_max, Y_TICK_TARGET);
        let (y2_min, y2_max, _) = nice_range(self.y2_min, self.y2_max, Y_TICK_TARGET);
        Self { x_min, x_max, y_min, y_max, y2_min, y2_max }
    }

    pub fn apply_to_chart(&self, chart: &mut Chart) {
        chart.x_axis.min = self.x_min;
        chart.x_axis.max = self.x_max;
        chart.y_axis.min = self.y_min;
        chart.y_axis.max = self.y_max;
        chart.y2_axis.min = self.y2_min;
        chart.y2_axis.max = self.y2_max;
    }
}
