//! Single-axis curve math.
//!
//! Every function here works on one coordinate at a time. Call it once with
//! the x values and once with the y values to get a 2-D result, or use
//! [`crate::Point`], which does exactly that.

/// Smoothing applied by [`smooth_control_point`].
pub const DEFAULT_SMOOTH_FACTOR: f64 = 0.75;

/// Average of `p1` and `p2`.
#[inline]
pub fn mid(p1: f64, p2: f64) -> f64 {
    (p1 + p2) / 2.0
}

/// Mirror `p1` in `p2`, scaled by `factor`.
///
/// A factor of 0 returns `p2`; 1 puts the result as far past `p2` as `p1` is
/// before it.
#[inline]
pub fn mirror(p1: f64, p2: f64, factor: f64) -> f64 {
    p2 + factor * (p2 - p1)
}

/// Point reflection of `p1` through `p2`.
#[inline]
pub fn reflect(p1: f64, p2: f64) -> f64 {
    mirror(p1, p2, 1.0)
}

/// Cubic Bézier blend of four control values at parameter `t`.
///
/// `t = 0` gives `p1` and `t = 1` gives `p4`. Values outside `[0, 1]`
/// extrapolate along the same polynomial.
#[inline]
pub fn bezier_point(t: f64, p1: f64, p2: f64, p3: f64, p4: f64) -> f64 {
    let s = 1.0 - t;
    s.powi(3) * p1 + 3.0 * s.powi(2) * t * p2 + 3.0 * s * t.powi(2) * p3 + t.powi(3) * p4
}

/// Control value near anchor `p2` for a smooth join between the segment
/// arriving from `p1` and the one leaving toward `next`.
///
/// `p1` is mirrored through `p2` by `smooth_factor`, pulled halfway back to
/// `p2`, and averaged with the midpoint of `p2` and `next`.
pub fn control_point(p1: f64, p2: f64, next: f64, smooth_factor: f64) -> f64 {
    let sa = mirror(p1, p2, smooth_factor);
    let sb = mid(p2, sa);
    let m = mid(p2, next);
    mid(sb, m)
}

/// [`control_point`] with [`DEFAULT_SMOOTH_FACTOR`].
#[inline]
pub fn smooth_control_point(p1: f64, p2: f64, next: f64) -> f64 {
    control_point(p1, p2, next, DEFAULT_SMOOTH_FACTOR)
}

/// Angle in degrees of the line from `(x0, y0)` to `(x1, y1)`.
///
/// Measured from the horizontal with y growing downward, so a line going up
/// the screen has a positive angle: `(0,0)→(1,0)` is 0, `(0,0)→(0,1)` is -90
/// and `(0,0)→(-1,0)` is 180. Lines pointing left land in `(90, 270]`.
///
/// Coincident points have no direction and give NaN; callers must skip
/// zero-length segments.
pub fn line_angle(x0: f64, y0: f64, x1: f64, y1: f64) -> f64 {
    let dx = x1 - x0;
    let dy = y1 - y0;
    let length = dx.hypot(dy);
    let v = ((y0 - y1) / length).asin().to_degrees();
    if dx < 0.0 { 180.0 - v } else { v }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPSILON,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_mid() {
        assert_eq!(mid(2.0, 4.0), 3.0);
        assert_eq!(mid(-1.0, 1.0), 0.0);
    }

    #[test]
    fn test_mirror() {
        assert_eq!(mirror(1.0, 3.0, 0.0), 3.0);
        assert_eq!(mirror(1.0, 3.0, 1.0), 5.0);
        assert_eq!(mirror(1.0, 3.0, 0.5), 4.0);
        assert_eq!(reflect(1.0, 3.0), 5.0);
    }

    #[test]
    fn test_bezier_midpoint() {
        // (1/8)*0 + (3/8)*1 + (3/8)*2 + (1/8)*3
        assert_close(bezier_point(0.5, 0.0, 1.0, 2.0, 3.0), 1.5);
        assert_close(bezier_point(0.5, 0.0, 0.0, 8.0, 8.0), 4.0);
    }

    #[test]
    fn test_bezier_extrapolates() {
        // A straight line stays straight outside [0, 1].
        assert_close(bezier_point(2.0, 0.0, 1.0, 2.0, 3.0), 6.0);
        assert_close(bezier_point(-1.0, 0.0, 1.0, 2.0, 3.0), -3.0);
    }

    #[test]
    fn test_control_point() {
        // sa = 10 + 0.75 * 10 = 17.5, sb = 13.75, m = 15, result = 14.375
        assert_close(control_point(0.0, 10.0, 20.0, 0.75), 14.375);
        assert_close(smooth_control_point(0.0, 10.0, 20.0), 14.375);
    }

    #[test]
    fn test_control_point_collinear_anchors() {
        // With no smoothing the control point is the mean of p2 and the
        // midpoint toward the next anchor.
        assert_close(control_point(0.0, 10.0, 20.0, 0.0), 12.5);
        assert_close(control_point(5.0, 5.0, 5.0, 0.75), 5.0);
    }

    #[test]
    fn test_line_angle_axes() {
        assert_close(line_angle(0.0, 0.0, 1.0, 0.0), 0.0);
        assert_close(line_angle(0.0, 0.0, 0.0, 1.0), -90.0);
        assert_close(line_angle(0.0, 0.0, -1.0, 0.0), 180.0);
        assert_close(line_angle(0.0, 0.0, 0.0, -1.0), 90.0);
    }

    #[test]
    fn test_line_angle_diagonals() {
        assert_close(line_angle(0.0, 0.0, 1.0, -1.0), 45.0);
        assert_close(line_angle(0.0, 0.0, -1.0, -1.0), 135.0);
        assert_close(line_angle(0.0, 0.0, -1.0, 1.0), 225.0);
        assert_close(line_angle(0.0, 0.0, 1.0, 1.0), -45.0);
    }

    #[test]
    fn test_line_angle_is_translation_invariant() {
        assert_close(line_angle(10.0, 20.0, 13.0, 17.0), line_angle(0.0, 0.0, 3.0, -3.0));
    }

    #[test]
    fn test_line_angle_coincident_points_is_nan() {
        assert!(line_angle(3.0, 4.0, 3.0, 4.0).is_nan());
    }
}
