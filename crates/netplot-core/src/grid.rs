// File: crates/netplot-core/src/grid.rs
// Summary: Tick layout helpers: "nice" 1/2/5 steps, tick values and labels.
// Notes:
// - Ranges near the f64 limits are handled without overflowing the span.

/// Upper bound on the number of tick values `ticks` will produce.
pub const MAX_TICKS: usize = 1000;

/// Round `span / target` up to 1, 2 or 5 times a power of ten.
pub fn nice_step(span: f64, target: usize) -> f64 {
    let span = span.abs();
    if !span.is_finite() || span < f64::EPSILON {
        return 1.0;
    }
    let raw = span / target.max(1) as f64;
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * mag
}

/// Nice step for `[min, max]`. When `max - min` overflows, the step is taken
/// from the half span against half the target, which is the same ratio.
pub fn range_step(min: f64, max: f64, target: usize) -> f64 {
    let span = max - min;
    if span.is_finite() {
        nice_step(span, target)
    } else {
        nice_step(max / 2.0 - min / 2.0, (target / 2).max(1))
    }
}

/// Widen `[min, max]` outward to multiples of a nice step; returns `(min, max, step)`.
/// A zero-width range is opened up around its value first.
pub fn nice_range(min: f64, max: f64, target: usize) -> (f64, f64, f64) {
    let (mut lo, mut hi) = if min <= max { (min, max) } else { (max, min) };
    if (hi - lo).abs() < 1e-12 {
        let pad = if lo.abs() > 1e-12 { lo.abs() * 0.1 } else { 1.0 };
        lo = (lo - pad).max(f64::MIN);
        hi = (hi + pad).min(f64::MAX);
    }
    let step = range_step(lo, hi, target);
    let nice_lo = (lo / step).floor() * step;
    let nice_hi = (hi / step).ceil() * step;
    // Widening past f64::MAX keeps the data bound instead.
    (
        if nice_lo.is_finite() { nice_lo } else { lo },
        if nice_hi.is_finite() { nice_hi } else { hi },
        step,
    )
}

/// Tick values from `min` to `max` inclusive at multiples of `step`.
/// Empty when the step is unusable or would yield more than [`MAX_TICKS`] values.
pub fn ticks(min: f64, max: f64, step: f64) -> Vec<f64> {
    if !(step > 0.0) || !min.is_finite() || !max.is_finite() || max < min {
        return Vec::new();
    }
    let first = (min / step - 1e-9).ceil();
    let last = (max / step + 1e-9).floor();
    if !(last - first < MAX_TICKS as f64) {
        return Vec::new();
    }
    (first as i64..=last as i64).map(|k| k as f64 * step).collect()
}

/// Tick label with only as many decimals as `step` needs.
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step >= 1.0 { 0 } else { (-step.log10().floor()) as usize };
    // avoid "-0"
    let v = if value.abs() < step * 1e-6 { 0.0 } else { value };
    format!("{:.*}", decimals, v)
}
