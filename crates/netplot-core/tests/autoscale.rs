// File: crates/netplot-core/tests/autoscale.rs
// Purpose: Validate per-axis autoscale and nice tick layout.

use netplot_core::grid::{format_tick, nice_range, nice_step, range_step, ticks, MAX_TICKS};
use netplot_core::{AxisSide, Chart, Series};

#[test]
fn autoscale_splits_primary_and_secondary() {
    let mut chart = Chart::new();
    chart.add_series(Series::with_data("size", vec![(0.0, 3.0), (50.0, 930.0)]));
    chart.add_series(Series::with_data("sections", vec![(10.0, 1.0), (75.0, 17.0)]).on_axis(AxisSide::Secondary));

    let view = chart.autoscale_axes();

    // X covers both series
    assert!(chart.x_axis.min <= 0.0 + 1e-9);
    assert!(chart.x_axis.max >= 75.0 - 1e-9);

    // Y only sees the primary series, Y2 only the secondary one
    assert!(chart.y_axis.min <= 3.0 && chart.y_axis.max >= 930.0);
    assert!(chart.y_axis.max <= 1000.0 + 1e-9);
    assert!(chart.y2_axis.min <= 1.0 && chart.y2_axis.max >= 17.0);
    assert!(chart.y2_axis.max <= 20.0 + 1e-9);

    assert_eq!(view.y2_min, chart.y2_axis.min);
}

#[test]
fn empty_secondary_axis_falls_back_to_unit_range() {
    let mut chart = Chart::new();
    chart.add_series(Series::with_data("size", vec![(1.0, 10.0), (3.0, 15.0)]));
    chart.autoscale_axes();
    assert_eq!(chart.y2_axis.min, 0.0);
    assert!((chart.y2_axis.max - 1.0).abs() < 1e-9);
}

#[test]
fn nice_steps_are_1_2_5() {
    assert_eq!(nice_step(10.0, 10), 1.0);
    assert_eq!(nice_step(10.0, 8), 2.0);
    assert_eq!(nice_step(930.0, 8), 200.0);
    assert!((nice_step(0.3, 6) - 0.05).abs() < 1e-12);
    assert_eq!(nice_step(0.0, 8), 1.0);
}

#[test]
fn nice_range_widens_outward() {
    assert_eq!(nice_range(3.0, 930.0, 8), (0.0, 1000.0, 200.0));
    assert_eq!(nice_range(1.0, 17.0, 8), (0.0, 18.0, 2.0));
    // degenerate range is opened around the value
    let (lo, hi, _) = nice_range(5.0, 5.0, 8);
    assert!(lo < 5.0 && hi > 5.0);
}

#[test]
fn ticks_include_both_ends() {
    assert_eq!(ticks(0.0, 10.0, 2.0), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
    assert_eq!(ticks(-3.0, 3.0, 2.5), vec![-2.5, 0.0, 2.5]);
    assert!(ticks(0.0, 1.0, 0.0).is_empty());
}

#[test]
fn tick_labels_match_step_precision() {
    assert_eq!(format_tick(200.0, 200.0), "200");
    assert_eq!(format_tick(0.25, 0.05), "0.25");
    assert_eq!(format_tick(-1e-17, 0.5), "0.0");
}

#[test]
fn range_step_matches_nice_step_for_ordinary_spans() {
    assert_eq!(range_step(0.0, 10.0, 8), nice_step(10.0, 8));
    assert_eq!(range_step(3.0, 930.0, 8), nice_step(927.0, 8));
}

#[test]
fn extreme_finite_range_gets_a_bounded_tick_set() {
    // hi - lo overflows to infinity here
    let (lo, hi, step) = nice_range(-1e308, 1e308, 8);
    assert!(lo.is_finite() && hi.is_finite(), "range ({lo}, {hi})");
    assert!(step.is_finite() && step > 0.0, "step {step}");
    assert!(lo < -1e307 && hi > 1e307);

    let values = ticks(lo, hi, range_step(lo, hi, 8));
    assert!(!values.is_empty());
    assert!(values.len() <= 20, "{} ticks", values.len());
    assert!(values.iter().all(|v| v.is_finite()));
}

#[test]
fn degenerate_range_at_f64_max_stays_finite() {
    let (lo, hi, _) = nice_range(f64::MAX, f64::MAX, 8);
    assert!(lo.is_finite() && hi.is_finite());
    assert!(lo < f64::MAX);
}

#[test]
fn ticks_refuse_runaway_counts() {
    assert!(ticks(-1e308, 1e308, 1.0).is_empty());
    assert!(ticks(0.0, MAX_TICKS as f64 * 2.0, 1.0).is_empty());
    assert_eq!(ticks(0.0, 100.0, 1.0).len(), 101);
}

#[test]
fn autoscale_survives_values_near_f64_limits() {
    let mut chart = Chart::new();
    chart.add_series(Series::with_data("size", vec![(0.0, -1e308), (1.0, 1e308)]));
    chart.autoscale_axes();
    assert!(chart.y_axis.min.is_finite() && chart.y_axis.max.is_finite());
    assert!(chart.y_axis.min < -1e307 && chart.y_axis.max > 1e307);
}
