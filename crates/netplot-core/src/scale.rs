// File: crates/netplot-core/src/scale.rs
// Summary: Linear data-to-pixel transforms for the horizontal and vertical axes.
// Notes:
// - Offsets are taken on halved values so ranges spanning most of f64 do not overflow.

use crate::axis::Axis;

/// Horizontal scale mapping `[vmin, vmax]` onto `[left, right]` pixels.
#[derive(Clone, Copy, Debug)]
pub struct XScale {
    pub left_px: f32,
    pub right_px: f32,
    pub vmin: f64,
    pub vmax: f64,
}

impl XScale {
    pub fn new(left_px: f32, right_px: f32, vmin: f64, vmax: f64) -> Self {
        let mut s = Self { left_px, right_px, vmin, vmax };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }
    pub fn for_axis(axis: &Axis, left_px: f32, right_px: f32) -> Self {
        Self::new(left_px, right_px, axis.min, axis.max)
    }
    #[inline]
    pub fn to_px(&self, x: f64) -> f32 {
        self.left_px + fraction(x, self.vmin, self.vmax) * (self.right_px - self.left_px)
    }
}

/// Vertical value scale mapping data range to [top, bottom] pixels (bottom = vmin).
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub vmin: f64,
    pub vmax: f64,
}

impl ValueScale {
    pub fn new_linear(top_px: f32, bottom_px: f32, vmin: f64, vmax: f64) -> Self {
        let mut s = Self { top_px, bottom_px, vmin, vmax };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }
    pub fn for_axis(axis: &Axis, top_px: f32, bottom_px: f32) -> Self {
        Self::new_linear(top_px, bottom_px, axis.min, axis.max)
    }
    #[inline]
    pub fn to_px(&self, y: f64) -> f32 {
        self.bottom_px - fraction(y, self.vmin, self.vmax) * (self.bottom_px - self.top_px)
    }
}

/// Position of `v` within `[vmin, vmax]` as a fraction (0 at `vmin`).
#[inline]
fn fraction(v: f64, vmin: f64, vmax: f64) -> f32 {
    ((v / 2.0 - vmin / 2.0) / (vmax / 2.0 - vmin / 2.0)) as f32
}
