use nalgebra::Vector2;
use std::f64::consts::PI;

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Linear interpolation that keeps extrapolating outside `[0, 1]`.
#[inline]
pub fn lerp_unclamped(start: f64, end: f64, factor: f64) -> f64 {
    start + (end - start) * factor
}

/// Catmull-Rom cubic through `p1`..`p2` using the outer neighbours `p0` and `p3`.
///
/// `t` is the fractional position between `p1` (t = 0) and `p2` (t = 1).
#[inline]
pub fn catmull_rom(p0: f64, p1: f64, p2: f64, p3: f64, t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    0.5 * (2.0 * p1
        + (-p0 + p2) * t
        + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t2
        + (-p0 + 3.0 * p1 - 3.0 * p2 + p3) * t3)
}

/// Locates `x` within equally spaced bands starting at `first`.
///
/// Returns the lower band index (clamped so that `index + 1` is a valid band)
/// and the fractional weight towards the upper band.
pub fn band_weight(x: f64, first: f64, width: f64, count: usize) -> (usize, f64) {
    let raw = ((x - first) / width).floor();
    let index = if raw < 0.0 {
        0
    } else {
        (raw as usize).min(count.saturating_sub(2))
    };
    let lower = first + index as f64 * width;
    (index, (x - lower) / width)
}

/// Piecewise-linear interpolation over sorted `(x, y)` pairs, holding the end values.
pub fn interp_linear(points: &[(f64, f64)], x: f64) -> f64 {
    match points {
        [] => 0.0,
        [only] => only.1,
        _ => {
            let first = points[0];
            let last = points[points.len() - 1];
            if x <= first.0 {
                return first.1;
            }
            if x >= last.0 {
                return last.1;
            }
            let upper = points.iter().position(|p| p.0 >= x).unwrap_or(points.len() - 1);
            let (x0, y0) = points[upper - 1];
            let (x1, y1) = points[upper];
            if (x1 - x0).abs() < f64::EPSILON {
                y1
            } else {
                y0 + (y1 - y0) * (x - x0) / (x1 - x0)
            }
        }
    }
}

/// Rotates a body-frame point `(x aft, z up)` by a nose-up pitch angle (radians).
#[inline]
pub fn pitch_rotate(point: Vector2<f64>, pitch: f64) -> Vector2<f64> {
    let (s, c) = pitch.sin_cos();
    Vector2::new(point.x * c + point.y * s, -point.x * s + point.y * c)
}

/// Clamps `value` to `range`, reporting whether it had to move.
#[inline]
pub fn clamp_report(value: f64, range: (f64, f64)) -> (f64, bool) {
    let clamped = value.clamp(range.0, range.1);
    (clamped, clamped != value)
}
