//! 2-D convenience layer over the per-axis functions in [`crate::curve`].

use crate::curve;

/// A point on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Apply a per-axis function to the x and y coordinates separately.
    #[inline]
    fn per_axis(self, other: Point, f: impl Fn(f64, f64) -> f64) -> Point {
        Point::new(f(self.x, other.x), f(self.y, other.y))
    }

    /// Midpoint between `self` and `other`.
    #[inline]
    pub fn mid(self, other: Point) -> Point {
        self.per_axis(other, curve::mid)
    }

    /// `self` mirrored in `center` by `factor`; see [`curve::mirror`].
    #[inline]
    pub fn mirror(self, center: Point, factor: f64) -> Point {
        self.per_axis(center, |p1, p2| curve::mirror(p1, p2, factor))
    }

    /// Point reflection of `self` through `center`.
    #[inline]
    pub fn reflect(self, center: Point) -> Point {
        self.mirror(center, 1.0)
    }

    /// Control point near `self` for a smooth join between the segment from
    /// `prev` and the one toward `next`; see [`curve::control_point`].
    pub fn control_point(self, prev: Point, next: Point, smooth_factor: f64) -> Point {
        Point::new(
            curve::control_point(prev.x, self.x, next.x, smooth_factor),
            curve::control_point(prev.y, self.y, next.y, smooth_factor),
        )
    }

    /// [`Point::control_point`] with [`curve::DEFAULT_SMOOTH_FACTOR`].
    pub fn smooth_control_point(self, prev: Point, next: Point) -> Point {
        self.control_point(prev, next, curve::DEFAULT_SMOOTH_FACTOR)
    }

    /// Angle in degrees of the line from `self` to `other`; see
    /// [`curve::line_angle`].
    pub fn angle_to(self, other: Point) -> f64 {
        curve::line_angle(self.x, self.y, other.x, other.y)
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Cubic Bézier point at `t` for control points `p1`..`p4`.
    pub fn bezier(t: f64, p1: Point, p2: Point, p3: Point, p4: Point) -> Point {
        Point::new(
            curve::bezier_point(t, p1.x, p2.x, p3.x, p4.x),
            curve::bezier_point(t, p1.y, p2.y, p3.y, p4.y),
        )
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}
