// File: crates/netplot-core/src/axis.rs
// Summary: Axis model with labels, ranges and tic placement.

/// Where tick marks (and their labels) are drawn for an axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tics {
    /// Draw tics on the axis' own edge.
    pub show: bool,
    /// Repeat the tics (without labels) on the opposite edge.
    pub mirror: bool,
}

impl Tics {
    pub const fn new(show: bool, mirror: bool) -> Self {
        Self { show, mirror }
    }
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub tics: Tics,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, tics: Tics::new(true, true) }
    }

    pub fn with_tics(mut self, tics: Tics) -> Self {
        self.tics = tics;
        self
    }

    /// Bottom axis: tics on the bottom edge, mirrored on top.
    pub fn default_x() -> Self {
        Self::new("", 0.0, 10.0)
    }

    /// Left axis: tics on the left edge only.
    pub fn default_y() -> Self {
        Self::new("", 0.0, 10.0).with_tics(Tics::new(true, false))
    }

    /// Right axis: tics on the right edge only.
    pub fn default_y2() -> Self {
        Self::new("", 0.0, 10.0).with_tics(Tics::new(true, false))
    }
}
