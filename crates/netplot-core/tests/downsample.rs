// File: crates/netplot-core/tests/downsample.rs
// Purpose: LTTB keeps endpoints and the requested budget.

use netplot_core::{lttb, Series};

fn wave(n: usize) -> Vec<(f64, f64)> {
    (0..n).map(|i| (i as f64, (i as f64 * 0.01).sin() * 10.0)).collect()
}

#[test]
fn lttb_respects_threshold_and_endpoints() {
    let data = wave(10_000);
    let out = lttb(&data, 500);
    assert_eq!(out.len(), 500);
    assert_eq!(out.first(), data.first());
    assert_eq!(out.last(), data.last());
    assert!(out.windows(2).all(|w| w[0].0 < w[1].0), "x must stay increasing");
}

#[test]
fn lttb_short_inputs_pass_through() {
    let data = wave(10);
    assert_eq!(lttb(&data, 20), data);
    assert!(lttb(&data, 0).is_empty());
    assert_eq!(lttb(&data, 2), vec![data[0], data[9]]);
}

#[test]
fn lttb_keeps_a_single_spike() {
    let mut data: Vec<(f64, f64)> = (0..1000).map(|i| (i as f64, 0.0)).collect();
    data[437].1 = 100.0;
    let out = lttb(&data, 50);
    assert!(out.contains(&(437.0, 100.0)));
}

#[test]
fn series_downsample_keeps_style() {
    let s = Series::with_data("size", wave(5000)).with_color(netplot_core::series::BLUE);
    let small = s.downsample_xy_lttb(100);
    assert_eq!(small.data_xy.len(), 100);
    assert_eq!(small.label, "size");
    assert_eq!(small.color, s.color);
    assert_eq!(s.downsample_xy_lttb(10_000).data_xy.len(), 5000);
}
