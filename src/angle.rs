//! Angle utilities used across the stability pipeline.
//!
//! All angles are compass degrees; arcs run in increasing-angle direction
//! and wrap through 360 → 0.

/// Normalizes an angle into the range [0, 360).
#[inline]
pub fn normalize_360(angle: f64) -> f64 {
    let norm = angle.rem_euclid(360.0);
    // rem_euclid of a tiny negative rounds up to exactly 360.0
    if norm >= 360.0 {
        0.0
    } else {
        norm
    }
}

/// Tests whether `target` lies on the arc running from `a` to `b` in
/// increasing-angle direction, wrapping through 360 → 0 when `b < a`.
/// Inclusive at both endpoints.
#[inline]
pub fn is_between(target: f64, a: f64, b: f64) -> bool {
    let n = normalize_360(target);
    let a = normalize_360(a);
    let b = normalize_360(b);
    if a < b {
        a <= n && n <= b
    } else {
        a <= n || n <= b
    }
}

/// Orders two boundary angles so the arc from the first to the second, in
/// increasing-angle direction, spans at most 180 degrees (the minor arc).
/// An exact half-turn keeps the `(a, b)` ordering.
///
/// Returns `None` when the angles coincide after normalization; callers
/// treat that as degenerate rather than guessing an orientation.
pub fn minor_arc_order(a: f64, b: f64) -> Option<(f64, f64)> {
    let a = normalize_360(a);
    let b = normalize_360(b);
    let span = normalize_360(b - a);
    if span == 0.0 {
        return None;
    }
    if span <= 180.0 {
        Some((a, b))
    } else {
        Some((b, a))
    }
}
