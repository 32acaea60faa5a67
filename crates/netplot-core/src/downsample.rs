// File: crates/netplot-core/src/downsample.rs
// Summary: Largest-Triangle-Three-Buckets downsampling for long XY series.

/// Returns up to `threshold` points preserving overall shape.
/// First and last points are always kept.
pub fn lttb(points: &[(f64, f64)], threshold: usize) -> Vec<(f64, f64)> {
    let n = points.len();
    if threshold == 0 || n == 0 { return Vec::new(); }
    if threshold >= n || n <= 2 { return points.to_vec(); }
    if threshold == 1 { return vec![points[0]]; }
    if threshold == 2 { return vec![points[0], points[n - 1]]; }

    let bucket_size = (n - 2) as f64 / (threshold - 2) as f64;
    let mut sampled = Vec::with_capacity(threshold);
    sampled.push(points[0]);

    let mut a = 0usize; // index of the point picked from the previous bucket

    for i in 0..(threshold - 2) {
        let start = (1.0 + (i as f64) * bucket_size).floor() as usize;
        let end = (1.0 + ((i + 1) as f64) * bucket_size).floor().min((n - 1) as f64) as usize;

        // Average of the next bucket
        let next_end = (1.0 + ((i + 2) as f64) * bucket_size).floor().min(n as f64 - 1.0) as usize;
        let rs = end.max(1);
        let re = next_end.max(rs + 1).min(n);
        let (mut avg_x, mut avg_y) = (0.0f64, 0.0f64);
        for p in &points[rs..re] {
            avg_x += p.0;
            avg_y += p.1;
        }
        let count = (re - rs) as f64;
        avg_x /= count;
        avg_y /= count;

        // Point in the current bucket spanning the largest triangle with
        // the previous pick and the next bucket's average.
        let (a_x, a_y) = points[a];
        let mut max_area = -1.0f64;
        let mut max_idx = start;
        for (k, p) in points.iter().enumerate().take(end.max(start + 1)).skip(start) {
            let area = ((a_x - p.0) * (avg_y - a_y) - (a_x - avg_x) * (p.1 - a_y)).abs();
            if area > max_area {
                max_area = area;
                max_idx = k;
            }
        }
        sampled.push(points[max_idx]);
        a = max_idx;
    }

    sampled.push(points[n - 1]);
    sampled
}
