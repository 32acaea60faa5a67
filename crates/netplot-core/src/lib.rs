// File: crates/netplot-core/src/lib.rs
// Summary: Core library entry point; exports dataset loading, chart model and PNG rendering.

pub mod axis;
pub mod chart;
pub mod dataset;
pub mod downsample;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod render;
pub mod scale;
pub mod series;
pub mod text;
pub mod theme;
pub mod types;
pub mod view;

pub use axis::{Axis, Tics};
pub use chart::{Chart, RenderOptions};
pub use dataset::{Dataset, Row};
pub use downsample::lttb;
pub use error::PlotError;
pub use render::{render, render_with, ChartSpec, RenderReport, SeriesReport};
pub use series::{AxisSide, Series, SeriesSpec};
pub use text::TextShaper;
pub use theme::Theme;
pub use view::ViewState;
