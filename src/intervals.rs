//! `intervals` module implements one-dimensional intervals along a single axis and
//! their overlap queries.
//!

use crate::floats::almost_equal;
use serde::{Deserialize, Serialize};

/// [`Interval`] struct represents a one-dimensional span along a single axis.
///
/// There is no `start <= end` invariant: callers may hand endpoints in any order
/// and queries sort internally where it matters.
///
/// # Example
/// ```rust
/// # use traject::intervals::Interval;
/// let a: Interval = Interval { start: 0.0, end: 2.0 };
/// let b: Interval = Interval { start: 3.0, end: 1.0 };
/// assert!(a.overlaps(b));
/// assert_eq!(a.overlap_width(b), 1.0);
/// ```
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug)]
pub struct Interval {
    /// First endpoint of the interval.
    ///
    pub start: f32,
    /// Second endpoint of the interval.
    ///
    pub end: f32,
}
impl Interval {
    /// Returns this interval with endpoints in ascending order.
    ///
    pub fn sorted(self) -> Self {
        if self.start > self.end {
            Interval {
                start: self.end,
                end: self.start,
            }
        } else {
            self
        }
    }

    /// Returns length of the interval (always >= 0).
    ///
    pub fn width(self) -> f32 {
        let sorted: Interval = self.sorted();
        sorted.end - sorted.start
    }

    /// Returns whether two intervals overlap.
    ///
    /// Both intervals are sorted before the comparison; touching endpoints count
    /// as an overlap.
    ///
    /// # Example
    /// ```rust
    /// # use traject::intervals::Interval;
    /// let a: Interval = Interval { start: 0.0, end: 1.0 };
    /// assert!(a.overlaps(Interval { start: 1.0, end: 2.0 }));
    /// assert!(!a.overlaps(Interval { start: 1.5, end: 2.0 }));
    /// ```
    ///
    pub fn overlaps(self, other: Interval) -> bool {
        let (a, b): (Interval, Interval) = (self.sorted(), other.sorted());

        let (left, right): (Interval, Interval) = if a.start < b.start { (a, b) } else { (b, a) };
        right.end >= left.start && left.end >= right.start
    }

    /// Returns width of the overlap of two intervals, or 0 when they are disjoint.
    ///
    /// When the intervals do overlap, the overlap is the gap between the second
    /// and the third of the four sorted endpoints. The result is always >= 0 and
    /// symmetric in its arguments.
    ///
    /// # Example
    /// ```rust
    /// # use traject::intervals::Interval;
    /// let a: Interval = Interval { start: 0.0, end: 2.0 };
    /// let b: Interval = Interval { start: 1.0, end: 3.0 };
    /// assert_eq!(a.overlap_width(b), 1.0);
    /// assert_eq!(b.overlap_width(a), 1.0);
    /// assert_eq!(a.overlap_width(Interval { start: 5.0, end: 6.0 }), 0.0);
    /// ```
    ///
    pub fn overlap_width(self, other: Interval) -> f32 {
        if !self.overlaps(other) {
            return 0.0;
        }

        let (a, b): (Interval, Interval) = (self.sorted(), other.sorted());
        let mut points: [f32; 4] = [a.start, a.end, b.start, b.end];
        points.sort_by(|p, q| p.total_cmp(q));
        points[2] - points[1]
    }
}
impl PartialEq for Interval {
    fn eq(&self, other: &Self) -> bool {
        almost_equal(self.start, other.start) && almost_equal(self.end, other.end)
    }
}

#[cfg(test)]
mod tests {
    use super::Interval;

    #[test]
    fn sorting() {
        let interval = Interval {
            start: 3.0,
            end: -1.0,
        };
        assert_eq!(
            interval.sorted(),
            Interval {
                start: -1.0,
                end: 3.0
            }
        );
        assert_eq!(interval.width(), 4.0);
    }

    #[test]
    fn overlap_queries() {
        let a = Interval {
            start: 0.0,
            end: 2.0,
        };

        assert!(a.overlaps(Interval {
            start: 1.0,
            end: 3.0
        }));
        // order of endpoints does not matter
        assert!(a.overlaps(Interval {
            start: 3.0,
            end: 1.0
        }));
        // touching endpoints count
        assert!(a.overlaps(Interval {
            start: 2.0,
            end: 4.0
        }));
        assert!(!a.overlaps(Interval {
            start: 2.5,
            end: 4.0
        }));

        assert_eq!(
            a.overlap_width(Interval {
                start: 1.0,
                end: 3.0
            }),
            1.0
        );
        // containment: overlap is the inner interval
        assert_eq!(
            a.overlap_width(Interval {
                start: 0.5,
                end: 1.5
            }),
            1.0
        );
        // touching gives zero width while still overlapping
        assert_eq!(
            a.overlap_width(Interval {
                start: 2.0,
                end: 4.0
            }),
            0.0
        );
        assert_eq!(
            a.overlap_width(Interval {
                start: 3.0,
                end: 4.0
            }),
            0.0
        );
    }
}
