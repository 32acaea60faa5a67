// File: crates/netplot-core/src/chart.rs
// Summary: Chart struct and headless PNG rendering pipeline using Skia CPU raster surfaces.
// Notes:
// - Layout: bordered plot area, x tics bottom (+ mirror top), y tics left, y2 tics right.
// - Series are clipped to the plot area; the legend sits in its top-right corner.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use skia_safe as skia;
use tracing::debug;

use crate::axis::Axis;
use crate::error::{PlotError, Result};
use crate::geometry::RectI32;
use crate::grid::{format_tick, range_step, ticks};
use crate::scale::{ValueScale, XScale};
use crate::series::{AxisSide, Series};
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};
use crate::view::{ViewState, X_TICK_TARGET, Y_TICK_TARGET};

/// Tic length, drawn inward from the border.
const TIC_LEN: f32 = 10.0;
const TICK_FONT: f32 = 18.0;
const LABEL_FONT: f32 = 20.0;
const LEGEND_FONT: f32 = 20.0;
const TITLE_FONT: f32 = 26.0;
/// Length of the colored sample stroke next to each legend entry.
const LEGEND_SAMPLE: f32 = 60.0;
const LEGEND_ROW: f32 = 28.0;

/// Suffix counter so concurrent writes in one process never share a temp file.
static TEMP_SEQ: AtomicU64 = AtomicU64::new(0);

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Draw text (tick labels, legend labels, title); off gives font-independent pixels.
    pub draw_labels: bool,
    /// Series longer than this are LTTB-downsampled before stroking.
    pub max_points: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            draw_labels: true,
            max_points: 4000,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Chart {
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub y2_axis: Axis,
    pub title: Option<String>,
    pub show_legend: bool,
}

impl Default for Chart {
    fn default() -> Self {
        Self::new()
    }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            y2_axis: Axis::default_y2(),
            title: None,
            show_legend: true,
        }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Fit every axis to its series, widened to tick multiples.
    pub fn autoscale_axes(&mut self) -> ViewState {
        let view = ViewState::from_chart(self).nice();
        view.apply_to_chart(self);
        debug!(
            x = ?(view.x_min, view.x_max),
            y = ?(view.y_min, view.y_max),
            y2 = ?(view.y2_min, view.y2_max),
            "autoscaled axes"
        );
        view
    }

    /// Render onto a fresh CPU raster surface.
    pub fn render_to_surface(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| PlotError::Render(format!("failed to create {}x{} raster surface", opts.width, opts.height)))?;
        let text = opts.draw_labels.then(TextShaper::new);
        self.paint(surface.canvas(), opts, text.as_ref());
        Ok(surface)
    }

    /// Render and encode as PNG in memory.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.render_to_surface(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| PlotError::Render("encode PNG failed".into()))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render to unpremultiplied RGBA8; returns `(pixels, width, height, stride)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.render_to_surface(opts)?;
        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = opts.width as usize * 4;
        let mut pixels = vec![0u8; stride * opts.height as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(PlotError::Render("reading back pixels failed".into()));
        }
        Ok((pixels, opts.width as u32, opts.height as u32, stride))
    }

    /// Render the chart to a PNG at `output_png_path`.
    ///
    /// The image is encoded before anything touches the filesystem, then written
    /// to a sibling temporary file and renamed over the target. The parent
    /// directory must already exist.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        write_replacing(output_png_path.as_ref(), &bytes)
    }

    fn paint(&self, canvas: &skia::Canvas, opts: &RenderOptions, text: Option<&TextShaper>) {
        let theme = &opts.theme;
        canvas.clear(theme.background);

        let rect = RectI32::inset(opts.width, opts.height, &opts.insets);
        let (l, t, r, b) = (rect.left as f32, rect.top as f32, rect.right as f32, rect.bottom as f32);
        let xs = XScale::for_axis(&self.x_axis, l, r);
        let ys = ValueScale::for_axis(&self.y_axis, t, b);
        let y2s = ValueScale::for_axis(&self.y2_axis, t, b);

        let x_marks = marks(&self.x_axis, X_TICK_TARGET, |v| xs.to_px(v));
        let y_marks = marks(&self.y_axis, Y_TICK_TARGET, |v| ys.to_px(v));
        let y2_marks = marks(&self.y2_axis, Y_TICK_TARGET, |v| y2s.to_px(v));

        draw_grid(canvas, &rect, &x_marks, &y_marks, theme);

        canvas.save();
        canvas.clip_rect(rect.to_skia(), skia::ClipOp::Intersect, true);
        for s in &self.series {
            let scale = match s.axis {
                AxisSide::Primary => &ys,
                AxisSide::Secondary => &y2s,
            };
            draw_line_series(canvas, &xs, scale, &s.downsample_xy_lttb(opts.max_points));
        }
        canvas.restore();

        draw_border(canvas, &rect, theme);

        if self.x_axis.tics.show {
            draw_tics(canvas, &rect, Edge::Bottom, &x_marks, true, theme, text);
            if self.x_axis.tics.mirror {
                draw_tics(canvas, &rect, Edge::Top, &x_marks, false, theme, text);
            }
        }
        if self.y_axis.tics.show {
            draw_tics(canvas, &rect, Edge::Left, &y_marks, true, theme, text);
            if self.y_axis.tics.mirror {
                draw_tics(canvas, &rect, Edge::Right, &y_marks, false, theme, text);
            }
        }
        if self.y2_axis.tics.show {
            draw_tics(canvas, &rect, Edge::Right, &y2_marks, true, theme, text);
            if self.y2_axis.tics.mirror {
                draw_tics(canvas, &rect, Edge::Left, &y2_marks, false, theme, text);
            }
        }

        if let Some(text) = text {
            draw_axis_labels(canvas, text, &rect, self, theme);
            if let Some(title) = &self.title {
                text.draw_centered(canvas, title, (l + r) * 0.5, t - 20.0, TITLE_FONT, theme.axis_label);
            }
        }

        if self.show_legend {
            draw_legend(canvas, &rect, &self.series, theme, text);
        }
    }
}

// ---- helpers ----------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Edge {
    Bottom,
    Top,
    Left,
    Right,
}

/// Tick pixel positions along an axis with their labels.
fn marks(axis: &Axis, target: usize, to_px: impl Fn(f64) -> f32) -> Vec<(f32, String)> {
    let step = range_step(axis.min, axis.max, target);
    ticks(axis.min, axis.max, step)
        .into_iter()
        .map(|v| (to_px(v), format_tick(v, step)))
        .collect()
}

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

fn draw_grid(canvas: &skia::Canvas, rect: &RectI32, x_marks: &[(f32, String)], y_marks: &[(f32, String)], theme: &Theme) {
    let paint = stroke_paint(theme.grid, 1.0);
    let (l, t, r, b) = (rect.left as f32, rect.top as f32, rect.right as f32, rect.bottom as f32);

    // verticals
    for (x, _) in x_marks {
        canvas.draw_line((*x, t), (*x, b), &paint);
    }
    // horizontals
    for (y, _) in y_marks {
        canvas.draw_line((l, *y), (r, *y), &paint);
    }
}

fn draw_border(canvas: &skia::Canvas, rect: &RectI32, theme: &Theme) {
    canvas.draw_rect(rect.to_skia(), &stroke_paint(theme.border, 1.5));
}

fn draw_tics(
    canvas: &skia::Canvas,
    rect: &RectI32,
    edge: Edge,
    marks: &[(f32, String)],
    labeled: bool,
    theme: &Theme,
    text: Option<&TextShaper>,
) {
    let paint = stroke_paint(theme.tick, 1.5);
    let (l, t, r, b) = (rect.left as f32, rect.top as f32, rect.right as f32, rect.bottom as f32);

    for (p, label) in marks {
        let p = *p;
        match edge {
            Edge::Bottom => canvas.draw_line((p, b), (p, b - TIC_LEN), &paint),
            Edge::Top => canvas.draw_line((p, t), (p, t + TIC_LEN), &paint),
            Edge::Left => canvas.draw_line((l, p), (l + TIC_LEN, p), &paint),
            Edge::Right => canvas.draw_line((r, p), (r - TIC_LEN, p), &paint),
        };

        let Some(text) = text.filter(|_| labeled) else { continue };
        let color = theme.axis_label;
        match edge {
            Edge::Bottom => text.draw_centered(canvas, label, p, b + 28.0, TICK_FONT, color),
            Edge::Top => text.draw_centered(canvas, label, p, t - 10.0, TICK_FONT, color),
            Edge::Left => text.draw_right(canvas, label, l - 10.0, p + 6.0, TICK_FONT, color),
            Edge::Right => text.draw_left(canvas, label, r + 10.0, p + 6.0, TICK_FONT, color),
        }
    }
}

fn draw_axis_labels(canvas: &skia::Canvas, text: &TextShaper, rect: &RectI32, chart: &Chart, theme: &Theme) {
    let (l, t, r, b) = (rect.left as f32, rect.top as f32, rect.right as f32, rect.bottom as f32);
    let mid_y = (t + b) * 0.5;
    let color = theme.axis_label;

    if !chart.x_axis.label.is_empty() {
        text.draw_centered(canvas, &chart.x_axis.label, (l + r) * 0.5, b + 62.0, LABEL_FONT, color);
    }
    if !chart.y_axis.label.is_empty() {
        text.draw_rotated(canvas, &chart.y_axis.label, l - 85.0, mid_y, -90.0, LABEL_FONT, color);
    }
    if !chart.y2_axis.label.is_empty() {
        text.draw_rotated(canvas, &chart.y2_axis.label, r + 85.0, mid_y, 90.0, LABEL_FONT, color);
    }
}

/// Label right-aligned against a short sample stroke, one row per series.
fn draw_legend(canvas: &skia::Canvas, rect: &RectI32, series: &[Series], theme: &Theme, text: Option<&TextShaper>) {
    let sample_right = rect.right as f32 - 20.0;
    let sample_left = sample_right - LEGEND_SAMPLE;

    for (i, s) in series.iter().enumerate() {
        let y = rect.top as f32 + 30.0 + i as f32 * LEGEND_ROW;
        if let Some(text) = text {
            text.draw_right(canvas, &s.label, sample_left - 12.0, y + 7.0, LEGEND_FONT, theme.legend_text);
        }
        canvas.draw_line((sample_left, y), (sample_right, y), &stroke_paint(s.color, s.stroke_width));
    }
}

fn draw_line_series(canvas: &skia::Canvas, xs: &XScale, ys: &ValueScale, series: &Series) {
    let data = &series.data_xy;
    if data.len() < 2 {
        return;
    }

    let mut path = skia::PathBuilder::new();
    let (x0, y0) = data[0];
    path.move_to((xs.to_px(x0), ys.to_px(y0)));
    for &(x, y) in data.iter().skip(1) {
        path.line_to((xs.to_px(x), ys.to_px(y)));
    }

    let mut stroke = stroke_paint(series.color, series.stroke_width);
    stroke.set_stroke_join(skia::paint::Join::Round);
    canvas.draw_path(&path.detach(), &stroke);
}

/// Write through a sibling temp file so a failed write never leaves a truncated target.
fn write_replacing(path: &Path, bytes: &[u8]) -> Result<()> {
    let write_err = |source| PlotError::OutputWrite { path: path.to_path_buf(), source };
    let tmp = temp_sibling(path).ok_or_else(|| {
        write_err(std::io::Error::new(std::io::ErrorKind::InvalidInput, "output path has no file name"))
    })?;

    std::fs::write(&tmp, bytes).map_err(|e| {
        let _ = std::fs::remove_file(&tmp);
        write_err(e)
    })?;
    std::fs::rename(&tmp, path).map_err(|e| {
        let _ = std::fs::remove_file(&tmp);
        write_err(e)
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "wrote png");
    Ok(())
}

fn temp_sibling(path: &Path) -> Option<PathBuf> {
    let name = path.file_name()?.to_string_lossy();
    let seq = TEMP_SEQ.fetch_add(1, Ordering::Relaxed);
    Some(path.with_file_name(format!(".{name}.{}.{seq}.tmp", std::process::id())))
}
