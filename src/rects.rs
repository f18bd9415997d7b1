//! `rects` module implements axis-aligned rectangles, their containment and
//! intersection queries.
//!

use crate::floats::almost_equal;
use crate::vectors::{Point, Vector2};
use serde::{Deserialize, Serialize};

/// [`Rect`] struct represents an axis-aligned rectangle stored as its minimal
/// corner and size.
///
/// # Example
/// ```rust
/// # use traject::rects::Rect;
/// # use traject::vectors::{Point, Vector2};
/// let rect: Rect = Rect::new(0.0, 0.0, 2.0, 2.0);
/// assert_eq!(rect.min(), Point::zero());
/// assert_eq!(rect.max(), Point { x: 2.0, y: 2.0 });
/// assert!(rect.contains_point(Point { x: 1.0, y: 2.0 }));
/// assert_eq!(rect.size(), Vector2 { x: 2.0, y: 2.0 });
/// ```
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug)]
pub struct Rect {
    /// X coordinate of the minimal corner.
    ///
    pub x: f32,
    /// Y coordinate of the minimal corner.
    ///
    pub y: f32,
    /// Width of the rectangle.
    ///
    pub width: f32,
    /// Height of the rectangle.
    ///
    pub height: f32,
}
impl Rect {
    /// Constructs rectangle from its minimal corner and size.
    ///
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    /// Constructs rectangle from its minimal and maximal corners.
    ///
    pub fn from_min_max(min: Point, max: Point) -> Self {
        Rect {
            x: min.x,
            y: min.y,
            width: max.x - min.x,
            height: max.y - min.y,
        }
    }

    /// Constructs the axis-aligned rectangle spanned by two corner points given
    /// in any relative orientation.
    ///
    /// The corners are normalized through componentwise min/max, which covers all
    /// four possible orientations of the corner pair.
    ///
    /// # Example
    /// ```rust
    /// # use traject::rects::Rect;
    /// # use traject::vectors::Point;
    /// let rect: Rect = Rect::spanning(Point { x: 3.0, y: 0.0 }, Point { x: 1.0, y: 2.0 });
    /// assert_eq!(rect, Rect::new(1.0, 0.0, 2.0, 2.0));
    /// ```
    ///
    pub fn spanning(corner1: Point, corner2: Point) -> Self {
        Rect::from_min_max(corner1.min(corner2), corner1.max(corner2))
    }

    /// Returns minimal corner of the rectangle.
    ///
    pub fn min(&self) -> Point {
        Point {
            x: self.x,
            y: self.y,
        }
    }
    /// Returns maximal corner of the rectangle.
    ///
    pub fn max(&self) -> Point {
        Point {
            x: self.x + self.width,
            y: self.y + self.height,
        }
    }
    /// Returns size of the rectangle.
    ///
    pub fn size(&self) -> Vector2 {
        Vector2 {
            x: self.width,
            y: self.height,
        }
    }

    /// Returns whether given point lies inside the rectangle.
    ///
    /// All edges are inclusive, so a point lying exactly on the border counts as
    /// contained.
    ///
    pub fn contains_point(&self, point: Point) -> bool {
        let (min, max): (Point, Point) = (self.min(), self.max());
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }

    /// Returns intersection of two rectangles, or `None` when they do not
    /// intersect.
    ///
    /// The candidate intersection takes the componentwise maximum of the minimal
    /// corners and the componentwise minimum of the maximal corners. With
    /// `include_zero_size` a touching, zero-width/height result still counts as
    /// an intersection; otherwise strictly positive size is required.
    ///
    /// # Example
    /// ```rust
    /// # use traject::rects::Rect;
    /// let r1: Rect = Rect::new(0.0, 0.0, 2.0, 2.0);
    /// let r2: Rect = Rect::new(1.0, 1.0, 2.0, 2.0);
    /// assert_eq!(r1.intersection(r2, false), Some(Rect::new(1.0, 1.0, 1.0, 1.0)));
    ///
    /// let touching: Rect = Rect::new(2.0, 0.0, 2.0, 2.0);
    /// assert_eq!(r1.intersection(touching, false), None);
    /// assert_eq!(r1.intersection(touching, true), Some(Rect::new(2.0, 0.0, 0.0, 2.0)));
    /// ```
    ///
    pub fn intersection(&self, other: Rect, include_zero_size: bool) -> Option<Rect> {
        let candidate: Rect =
            Rect::from_min_max(self.min().max(other.min()), self.max().min(other.max()));

        let fits: bool = if include_zero_size {
            candidate.width >= 0.0 && candidate.height >= 0.0
        } else {
            candidate.width > 0.0 && candidate.height > 0.0
        };
        fits.then_some(candidate)
    }

    /// Returns whether this rectangle fully encloses the inner one.
    ///
    /// True exactly when intersecting the two (zero-size results excluded) yields
    /// the inner rectangle back.
    ///
    /// # Example
    /// ```rust
    /// # use traject::rects::Rect;
    /// let outer: Rect = Rect::new(0.0, 0.0, 4.0, 4.0);
    /// assert!(outer.encloses(Rect::new(1.0, 1.0, 2.0, 2.0)));
    /// assert!(!outer.encloses(Rect::new(3.0, 3.0, 2.0, 2.0)));
    /// ```
    ///
    pub fn encloses(&self, inner: Rect) -> bool {
        match self.intersection(inner, false) {
            Some(intersection) => intersection == inner,
            None => false,
        }
    }
}
impl PartialEq for Rect {
    fn eq(&self, other: &Self) -> bool {
        almost_equal(self.x, other.x)
            && almost_equal(self.y, other.y)
            && almost_equal(self.width, other.width)
            && almost_equal(self.height, other.height)
    }
}
