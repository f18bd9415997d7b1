//! `equations` module implements quadratic and line equations along with line and
//! segment queries that are built from them (perpendiculars, intersections,
//! closest points, point-versus-line and point-versus-segment predicates).
//!
//! # Sentinels
//! A vertical line cannot be written as `y = kx + b`, so [`LineEquation`] encodes
//! it with `k = NaN` and `b` holding the x-intercept. `k` is `NaN` if and only if
//! the line is vertical; no other value of `k` is reserved.
//! In the same spirit, "no unique intersection" is reported as a `(NaN, NaN)`
//! point. Callers are expected to check sentinels before consuming coordinates:
//! `NaN` that is fed further downstream stays `NaN`.
//!

use crate::rects::Rect;
use crate::vectors::Point;
use serde::{Deserialize, Serialize};

/// [`QuadraticEquation`] struct holds coefficients of `ax^2 + bx + c = 0`.
///
/// # Example
/// ```rust
/// # use traject::equations::QuadraticEquation;
/// let eq: QuadraticEquation = QuadraticEquation { a: 1.0, b: -3.0, c: 2.0 };
/// assert_eq!(eq.roots(), Some((1.0, 2.0)));
/// assert_eq!(eq.eval(1.0), 0.0);
/// ```
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq)]
pub struct QuadraticEquation {
    /// Coefficient at `x^2`.
    ///
    pub a: f32,
    /// Coefficient at `x`.
    ///
    pub b: f32,
    /// Free coefficient.
    ///
    pub c: f32,
}
impl QuadraticEquation {
    /// Evaluates left-hand side of the equation at given `x`.
    ///
    pub fn eval(&self, x: f32) -> f32 {
        self.a * x * x + self.b * x + self.c
    }

    /// Returns discriminant `b^2 - 4ac`.
    ///
    pub fn discriminant(&self) -> f32 {
        self.b * self.b - 4.0 * self.a * self.c
    }

    /// Returns real roots of the equation in ascending order, duplicated when the
    /// root is single.
    ///
    /// `a == 0` degrades the equation to a linear one with the root `-c/b`.
    /// `None` means there is no real solution (`a == 0 && b == 0`, or negative
    /// discriminant) - that is a normal, expected outcome and not an error.
    ///
    /// # Example
    /// ```rust
    /// # use traject::equations::QuadraticEquation;
    /// assert_eq!(QuadraticEquation { a: 1.0, b: -2.0, c: 1.0 }.roots(), Some((1.0, 1.0)));
    /// assert_eq!(QuadraticEquation { a: 0.0, b: 2.0, c: -4.0 }.roots(), Some((2.0, 2.0)));
    /// assert_eq!(QuadraticEquation { a: 1.0, b: 0.0, c: 1.0 }.roots(), None);
    /// assert_eq!(QuadraticEquation { a: 0.0, b: 0.0, c: 5.0 }.roots(), None);
    /// ```
    ///
    pub fn roots(&self) -> Option<(f32, f32)> {
        if self.a != 0.0 {
            let d: f32 = self.discriminant();
            if d < 0.0 {
                None
            } else if d == 0.0 {
                let root: f32 = -self.b / (2.0 * self.a);
                Some((root, root))
            } else {
                let root1: f32 = (-self.b - d.sqrt()) / (2.0 * self.a);
                let root2: f32 = (-self.b + d.sqrt()) / (2.0 * self.a);
                // negative `a` flips the ordering of the two expressions
                Some((root1.min(root2), root1.max(root2)))
            }
        } else if self.b != 0.0 {
            let root: f32 = -self.c / self.b;
            Some((root, root))
        } else {
            None
        }
    }
}

/// [`LineEquation`] struct represents a line in slope-intercept form `y = kx + b`.
///
/// Vertical line is encoded with the `NaN` sentinel: `k = NaN`, `b` = x-intercept.
///
/// # Example
/// ```rust
/// # use traject::equations::LineEquation;
/// # use traject::vectors::Point;
/// let line: LineEquation = LineEquation::through(
///     Point { x: 0.0, y: 1.0 },
///     Point { x: 2.0, y: 5.0 },
/// );
/// assert_eq!(line, LineEquation { k: 2.0, b: 1.0 });
/// assert!(!line.is_vertical());
///
/// let vertical: LineEquation = LineEquation::through(
///     Point { x: 0.0, y: 0.0 },
///     Point { x: 0.0, y: 5.0 },
/// );
/// assert!(vertical.is_vertical());
/// assert_eq!(vertical.b, 0.0);
/// ```
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug)]
pub struct LineEquation {
    /// Slope of the line (`NaN` for vertical lines).
    ///
    pub k: f32,
    /// Y-intercept of the line (x-intercept for vertical lines).
    ///
    pub b: f32,
}
impl LineEquation {
    /// Constructs equation of the line that goes through two given points.
    ///
    /// If both points share the same `x` (including the degenerate case of a
    /// repeated point), the vertical sentinel is returned.
    ///
    pub fn through(point1: Point, point2: Point) -> Self {
        if point1.x == point2.x {
            return LineEquation {
                k: f32::NAN,
                b: point1.x,
            };
        }

        let k: f32 = (point1.y - point2.y) / (point1.x - point2.x);
        LineEquation {
            k,
            b: point1.y - k * point1.x,
        }
    }

    /// Returns whether this equation encodes a vertical line.
    ///
    pub fn is_vertical(&self) -> bool {
        self.k.is_nan()
    }

    /// Returns `y` of the line point at given `x`.
    ///
    /// For a vertical line the result is `NaN`-poisoned by the sentinel slope.
    ///
    pub fn y_at(&self, x: f32) -> f32 {
        self.k * x + self.b
    }

    /// Constructs equation of the perpendicular line that goes through given point.
    ///
    /// Perpendicular of a vertical line is the horizontal through `point.y`;
    /// perpendicular of a horizontal line is the vertical through `point.x`;
    /// otherwise the slope is the negative reciprocal.
    ///
    /// # Example
    /// ```rust
    /// # use traject::equations::LineEquation;
    /// # use traject::vectors::Point;
    /// let line: LineEquation = LineEquation { k: 2.0, b: 0.0 };
    /// let perpendicular: LineEquation = line.perpendicular_through(Point { x: 0.0, y: 5.0 });
    /// assert_eq!(perpendicular, LineEquation { k: -0.5, b: 5.0 });
    /// ```
    ///
    pub fn perpendicular_through(&self, point: Point) -> Self {
        if self.is_vertical() {
            return LineEquation { k: 0.0, b: point.y };
        }

        if self.k == 0.0 {
            return LineEquation {
                k: f32::NAN,
                b: point.x,
            };
        }

        let k: f32 = -1.0 / self.k;
        LineEquation {
            k,
            b: point.y - k * point.x,
        }
    }

    /// Returns point at which two lines cross.
    ///
    /// Two vertical lines have no unique intersection, so `(NaN, NaN)` is
    /// returned. Two identical (or parallel) non-vertical lines degrade to the
    /// same sentinel numerically through the division by the zero slope
    /// difference - that behavior is accepted and not guarded.
    ///
    /// # Example
    /// ```rust
    /// # use traject::equations::LineEquation;
    /// # use traject::vectors::Point;
    /// let diagonal_up: LineEquation = LineEquation::through(Point::zero(), Point { x: 2.0, y: 2.0 });
    /// let diagonal_down: LineEquation = LineEquation::through(Point { x: 0.0, y: 2.0 }, Point { x: 2.0, y: 0.0 });
    /// assert_eq!(diagonal_up.intersection(diagonal_down), Point { x: 1.0, y: 1.0 });
    /// ```
    ///
    pub fn intersection(&self, other: LineEquation) -> Point {
        match (self.is_vertical(), other.is_vertical()) {
            (true, false) => Point {
                x: self.b,
                y: other.k * self.b + other.b,
            },
            (false, true) => Point {
                x: other.b,
                y: self.k * other.b + self.b,
            },
            (true, true) => Point {
                x: f32::NAN,
                y: f32::NAN,
            },
            (false, false) => {
                let x: f32 = (other.b - self.b) / (self.k - other.k);
                Point { x, y: self.y_at(x) }
            }
        }
    }

    /// Returns point of this line that is the closest to given point.
    ///
    /// Composition of [`LineEquation::perpendicular_through`] and
    /// [`LineEquation::intersection`].
    ///
    pub fn closest_point_to(&self, point: Point) -> Point {
        self.intersection(self.perpendicular_through(point))
    }

    /// Returns whether given point lies below this line (to the left of it for
    /// vertical lines).
    ///
    /// `inclusive` selects whether a point lying exactly on the line counts.
    ///
    /// # Example
    /// ```rust
    /// # use traject::equations::LineEquation;
    /// # use traject::vectors::Point;
    /// let line: LineEquation = LineEquation { k: 1.0, b: 0.0 };
    /// assert!(line.point_below_or_left(Point { x: 2.0, y: 1.0 }, false));
    /// assert!(line.point_below_or_left(Point { x: 2.0, y: 2.0 }, true));
    /// assert!(!line.point_below_or_left(Point { x: 2.0, y: 2.0 }, false));
    /// ```
    ///
    pub fn point_below_or_left(&self, point: Point, inclusive: bool) -> bool {
        if self.is_vertical() {
            if inclusive {
                point.x <= self.b
            } else {
                point.x < self.b
            }
        } else {
            let line_y: f32 = self.y_at(point.x);
            if inclusive {
                point.y <= line_y
            } else {
                point.y < line_y
            }
        }
    }
}
impl PartialEq for LineEquation {
    fn eq(&self, other: &Self) -> bool {
        if self.is_vertical() || other.is_vertical() {
            return self.is_vertical()
                && other.is_vertical()
                && crate::floats::almost_equal(self.b, other.b);
        }
        crate::floats::almost_equal(self.k, other.k) && crate::floats::almost_equal(self.b, other.b)
    }
}

/// Returns point at which lines containing two given segments cross.
///
/// Shorthand for constructing both [`LineEquation`]s and intersecting them, with
/// the same `(NaN, NaN)` sentinel for collinear/parallel inputs.
///
pub fn segments_cross_point(
    segment1_start: Point,
    segment1_end: Point,
    segment2_start: Point,
    segment2_end: Point,
) -> Point {
    let line1: LineEquation = LineEquation::through(segment1_start, segment1_end);
    let line2: LineEquation = LineEquation::through(segment2_start, segment2_end);
    line1.intersection(line2)
}

/// Returns whether given point lies within `radius` of the segment, measured
/// along the perpendicular from the point to the segment's line.
///
/// The point is projected onto the segment's line; a `NaN` foot means no finite
/// projection and yields `false`. A foot that coincides with the point exactly is
/// an immediate `true`. A foot outside of the rectangle spanned by the segment's
/// endpoints is `false`. Otherwise the squared distance from the foot to the
/// point is compared against `radius^2`.
///
/// # Example
/// ```rust
/// # use traject::equations::segment_touches_point;
/// # use traject::vectors::Point;
/// let start: Point = Point::zero();
/// let end: Point = Point { x: 4.0, y: 0.0 };
/// assert!(segment_touches_point(start, end, Point { x: 2.0, y: 0.5 }, 1.0));
/// assert!(!segment_touches_point(start, end, Point { x: 2.0, y: 2.0 }, 1.0));
/// ```
///
pub fn segment_touches_point(
    segment_start: Point,
    segment_end: Point,
    point: Point,
    radius: f32,
) -> bool {
    let line: LineEquation = LineEquation::through(segment_start, segment_end);
    let perpendicular: LineEquation = line.perpendicular_through(point);
    let foot: Point = line.intersection(perpendicular);

    if foot.x.is_nan() || foot.y.is_nan() {
        return false;
    }
    if point.x == foot.x && point.y == foot.y {
        return true;
    }
    if !Rect::spanning(segment_start, segment_end).contains_point(foot) {
        return false;
    }

    (foot - point).sqr_magnitude() <= radius * radius
}
