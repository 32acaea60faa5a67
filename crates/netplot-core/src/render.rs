// File: crates/netplot-core/src/render.rs
// Summary: One-shot pipeline from a data file to the network-growth PNG.
// Notes:
// - Rows too short for a series are skipped for that series only and logged.
// - Nothing is written unless the image encodes successfully.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::axis::{Axis, Tics};
use crate::chart::{Chart, RenderOptions};
use crate::dataset::Dataset;
use crate::error::{PlotError, Result};
use crate::series::SeriesSpec;
use crate::types::{HEIGHT, WIDTH};

/// At most this many offending line numbers are listed in a skip warning.
const SKIP_LINES_SHOWN: usize = 5;

/// Fixed chart layout: output size, axes and the series to draw.
#[derive(Clone, Debug)]
pub struct ChartSpec {
    pub width: i32,
    pub height: i32,
    pub series: Vec<SeriesSpec>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub y2_axis: Axis,
    pub title: Option<String>,
}

impl Default for ChartSpec {
    fn default() -> Self {
        Self::network_growth()
    }
}

impl ChartSpec {
    /// 1920x1080; network size (red, left axis) and number of sections
    /// (blue, right axis) against column 1. Left tics are not mirrored.
    pub fn network_growth() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            series: vec![SeriesSpec::network_size(), SeriesSpec::number_of_sections()],
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y().with_tics(Tics::new(true, false)),
            y2_axis: Axis::default_y2().with_tics(Tics::new(true, false)),
            title: None,
        }
    }

    /// Also plot complete sections (column 4) on the right axis.
    pub fn with_complete_sections(mut self) -> Self {
        self.series.push(SeriesSpec::complete_sections());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Extract every series from `data` and autoscale the axes.
    /// Fails with `NoData` when no series received a single point.
    pub fn build(&self, data: &Dataset) -> Result<(Chart, RenderReport)> {
        let mut chart = Chart::new();
        chart.x_axis = self.x_axis.clone();
        chart.y_axis = self.y_axis.clone();
        chart.y2_axis = self.y2_axis.clone();
        chart.title = self.title.clone();

        let mut report = RenderReport { rows: data.len(), series: Vec::with_capacity(self.series.len()) };
        for spec in &self.series {
            let (series, skipped_lines) = spec.extract(data);
            if !skipped_lines.is_empty() {
                warn!(
                    series = %spec.label,
                    skipped = skipped_lines.len(),
                    lines = ?&skipped_lines[..skipped_lines.len().min(SKIP_LINES_SHOWN)],
                    "rows without column {} skipped",
                    spec.y_column.max(spec.x_column)
                );
            }
            report.series.push(SeriesReport {
                label: spec.label.clone(),
                points: series.data_xy.len(),
                skipped_lines,
            });
            chart.add_series(series);
        }

        if report.series.iter().all(|s| s.points == 0) {
            return Err(PlotError::NoData);
        }

        chart.autoscale_axes();
        Ok((chart, report))
    }
}

/// Per-series outcome of a render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeriesReport {
    pub label: String,
    pub points: usize,
    pub skipped_lines: Vec<usize>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderReport {
    /// Data rows read (comments and blank lines excluded).
    pub rows: usize,
    pub series: Vec<SeriesReport>,
}

impl RenderReport {
    pub fn skipped_rows(&self) -> usize {
        self.series.iter().map(|s| s.skipped_lines.len()).sum()
    }
}

/// Render `input_path` to a 1920x1080 PNG at `output_path` with the default layout.
pub fn render(input_path: impl AsRef<Path>, output_path: impl AsRef<Path>) -> Result<RenderReport> {
    render_with(input_path, output_path, &ChartSpec::network_growth(), &RenderOptions::default())
}

/// As [`render`], with an explicit layout and render options.
/// `spec.width` and `spec.height` take precedence over the size in `opts`.
pub fn render_with(
    input_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    spec: &ChartSpec,
    opts: &RenderOptions,
) -> Result<RenderReport> {
    let input_path = input_path.as_ref();
    let output_path = output_path.as_ref();

    let data = Dataset::from_path(input_path)?;
    let (chart, report) = spec.build(&data)?;

    let opts = RenderOptions { width: spec.width, height: spec.height, ..opts.clone() };
    debug!(width = opts.width, height = opts.height, theme = opts.theme.name, "rendering");
    chart.render_to_png(&opts, output_path)?;

    info!(
        input = %input_path.display(),
        output = %output_path.display(),
        rows = report.rows,
        skipped = report.skipped_rows(),
        "chart written"
    );
    Ok(report)
}
