//! `bezier` module implements quadratic and cubic bezier curve evaluation through
//! De Casteljau interpolation.
//!

use crate::vectors::Point;

/// Evaluates quadratic (3-point) bezier curve at parameter `t`.
///
/// `t` is expected to lie in `[0.0; 1.0]` but is deliberately not clamped:
/// values outside the range extrapolate the curve and are the caller's
/// responsibility.
///
/// # Example
/// ```rust
/// # use traject::bezier::bezier_quadratic;
/// # use traject::vectors::Point;
/// let start: Point = Point::zero();
/// let control: Point = Point { x: 1.0, y: 2.0 };
/// let end: Point = Point { x: 2.0, y: 0.0 };
/// assert_eq!(bezier_quadratic(start, control, end, 0.0), start);
/// assert_eq!(bezier_quadratic(start, control, end, 1.0), end);
/// assert_eq!(bezier_quadratic(start, control, end, 0.5), Point { x: 1.0, y: 1.0 });
/// ```
///
pub fn bezier_quadratic(start: Point, control: Point, end: Point, t: f32) -> Point {
    let a: Point = start.lerp_unclamped(control, t);
    let b: Point = control.lerp_unclamped(end, t);
    a.lerp_unclamped(b, t)
}

/// Evaluates cubic (4-point) bezier curve at parameter `t`.
///
/// Same parameter contract as [`bezier_quadratic`]: `t` is not clamped.
///
pub fn bezier_cubic(start: Point, control1: Point, control2: Point, end: Point, t: f32) -> Point {
    let a: Point = start.lerp_unclamped(control1, t);
    let b: Point = control1.lerp_unclamped(control2, t);
    let c: Point = control2.lerp_unclamped(end, t);

    let d: Point = a.lerp_unclamped(b, t);
    let e: Point = b.lerp_unclamped(c, t);

    d.lerp_unclamped(e, t)
}
