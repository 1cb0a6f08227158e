//! Curve geometry for smoothed canvas paths.
//!
//! The core functions in [`curve`] operate on a single coordinate axis and
//! are meant to be called once per axis:
//!
//! ```
//! use canvas_tools_geometry::curve::{bezier_point, smooth_control_point};
//!
//! let (x, y) = (bezier_point(0.5, 0.0, 1.0, 2.0, 3.0), bezier_point(0.5, 0.0, 2.0, 2.0, 0.0));
//! assert_eq!((x, y), (1.5, 1.5));
//!
//! let cx = smooth_control_point(0.0, 10.0, 20.0);
//! assert_eq!(cx, 14.375);
//! ```
//!
//! [`Point`] and [`CubicSegment`] apply the same math in 2-D, and
//! [`smooth_segments`] turns a polyline into a chain of cubic segments.

pub mod curve;
pub mod point;
pub mod segment;

pub use curve::{
    DEFAULT_SMOOTH_FACTOR, bezier_point, control_point, line_angle, mid, mirror, reflect,
    smooth_control_point,
};
pub use point::Point;
pub use segment::{CubicSegment, smooth_segments};
