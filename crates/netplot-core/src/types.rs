// File: crates/netplot-core/src/types.rs
// Summary: Shared types and constants (output size, paddings).

/// Output surface width in pixels.
pub const WIDTH: i32 = 1920;
/// Output surface height in pixels.
pub const HEIGHT: i32 = 1080;

/// Screen margins around the plot area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    /// Room for tick labels on both vertical edges (y and y2).
    fn default() -> Self {
        Self::new(110, 110, 60, 80)
    }
}
