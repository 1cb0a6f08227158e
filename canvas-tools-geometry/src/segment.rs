//! Cubic segments and smoothing of polylines into curves.

use crate::point::Point;

/// One cubic Bézier segment: two anchors and their control points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSegment {
    pub from: Point,
    pub ctrl1: Point,
    pub ctrl2: Point,
    pub to: Point,
}

impl CubicSegment {
    #[must_use]
    pub const fn new(from: Point, ctrl1: Point, ctrl2: Point, to: Point) -> Self {
        Self {
            from,
            ctrl1,
            ctrl2,
            to,
        }
    }

    /// Point at parameter `t`; 0 is `from`, 1 is `to`.
    #[must_use]
    pub fn eval(&self, t: f64) -> Point {
        Point::bezier(t, self.from, self.ctrl1, self.ctrl2, self.to)
    }

    /// `steps + 1` evenly spaced points from `from` to `to` inclusive.
    ///
    /// Zero steps is treated as one, giving just the two anchors.
    #[must_use]
    pub fn flatten(&self, steps: usize) -> Vec<Point> {
        let steps = steps.max(1);
        (0..=steps)
            .map(|i| self.eval(i as f64 / steps as f64))
            .collect()
    }
}

/// Turn a polyline into a chain of cubic segments passing through every
/// point.
///
/// The segment from `points[i]` to `points[i + 1]` gets its first control
/// point from the anchor's neighbours `points[i - 1]` and `points[i + 1]`,
/// and its second from `points[i + 2]` and `points[i]`, both via
/// [`Point::control_point`]. A missing neighbour at either end is replaced by
/// the anchor itself. Fewer than two points produce no segments.
#[must_use]
pub fn smooth_segments(points: &[Point], smooth_factor: f64) -> Vec<CubicSegment> {
    points
        .windows(2)
        .enumerate()
        .map(|(i, pair)| {
            let (from, to) = (pair[0], pair[1]);
            let before = if i > 0 { points[i - 1] } else { from };
            let after = points.get(i + 2).copied().unwrap_or(to);

            CubicSegment::new(
                from,
                from.control_point(before, to, smooth_factor),
                to.control_point(after, from, smooth_factor),
                to,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::DEFAULT_SMOOTH_FACTOR;

    #[test]
    fn test_too_few_points() {
        assert!(smooth_segments(&[], DEFAULT_SMOOTH_FACTOR).is_empty());
        assert!(smooth_segments(&[Point::new(1.0, 1.0)], DEFAULT_SMOOTH_FACTOR).is_empty());
    }

    #[test]
    fn test_segments_pass_through_anchors() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 5.0),
            Point::new(20.0, 0.0),
            Point::new(30.0, 5.0),
        ];
        let segments = smooth_segments(&points, DEFAULT_SMOOTH_FACTOR);
        assert_eq!(segments.len(), 3);
        for (segment, pair) in segments.iter().zip(points.windows(2)) {
            assert_eq!(segment.eval(0.0), pair[0]);
            assert_eq!(segment.eval(1.0), pair[1]);
        }
    }

    #[test]
    fn test_end_controls_use_anchor_as_neighbour() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(8.0, 0.0);
        let segments = smooth_segments(&[a, b], 0.0);
        // With no smoothing and a clamped neighbour, each control point sits a
        // quarter of the way toward the other anchor.
        assert_eq!(segments[0].ctrl1, Point::new(2.0, 0.0));
        assert_eq!(segments[0].ctrl2, Point::new(6.0, 0.0));
    }

    #[test]
    fn test_flatten() {
        let segment = CubicSegment::new(
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(3.0, 0.0),
        );
        let points = segment.flatten(3);
        assert_eq!(points.len(), 4);
        assert_eq!(points[0], Point::new(0.0, 0.0));
        assert!((points[1].x - 1.0).abs() < 1e-9);
        assert_eq!(points[3], Point::new(3.0, 0.0));
        assert_eq!(segment.flatten(0).len(), 2);
    }
}
