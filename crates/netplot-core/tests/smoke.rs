// File: crates/netplot-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use netplot_core::{AxisSide, Axis, Chart, RenderOptions, Series};

#[test]
fn render_smoke_png() {
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("X", 0.0, 4.0);
    chart.y_axis = Axis::new("Y", 0.0, 40.0);
    chart.y2_axis = Axis::new("Y2", 0.0, 4.0);
    chart.add_series(Series::with_data(
        "size",
        vec![(0.0, 0.0), (1.0, 20.0), (2.0, 10.0), (3.0, 35.0), (4.0, 25.0)],
    ));
    chart.add_series(
        Series::with_data("sections", vec![(0.0, 1.0), (2.0, 2.0), (4.0, 3.0)]).on_axis(AxisSide::Secondary),
    );

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();

    chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn zero_sized_surface_is_a_render_error() {
    let chart = Chart::new();
    let opts = RenderOptions { width: 0, height: 0, ..RenderOptions::default() };
    let err = chart.render_to_png_bytes(&opts).unwrap_err();
    assert!(matches!(err, netplot_core::PlotError::Render(_)), "got {err:?}");
}
