//! `vectors` module implements two-dimensional vector on a plane which can be used to represent
//! force, speed, acceleration, coordinates and other things.
//!

use crate::floats::{almost_equal, FloatOperations};
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// [`Vector2`] struct represents two-dimensional vector and two-dimensional point with `f32` coordinates on a plane.
///
/// # Example
/// ```rust
/// # use traject::vectors::Vector2;
/// let v: Vector2 = Vector2 { x: 3.0, y: 4.0 };
/// assert_eq!(v.magnitude(), 5.0);
/// assert_eq!(v + Vector2::one(), Vector2 { x: 4.0, y: 5.0 });
/// assert_eq!(v * 2.0, Vector2 { x: 6.0, y: 8.0 });
/// ```
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, Default)]
pub struct Vector2 {
    /// X component of vector.
    ///
    pub x: f32,

    /// Y component of vector.
    ///
    pub y: f32,
}
impl Vector2 {
    /// Initializes vector with zeroes.
    ///
    pub const fn zero() -> Self {
        Vector2 { x: 0.0, y: 0.0 }
    }
    /// Initializes vector with ones.
    ///
    pub const fn one() -> Self {
        Vector2 { x: 1.0, y: 1.0 }
    }

    /// Applies function to every vector element and returns changed vector.
    ///
    pub fn map(self, f: impl Fn(f32) -> f32) -> Self {
        Vector2 {
            x: f(self.x),
            y: f(self.y),
        }
    }
    /// Combines vectors by applying function on their elements.
    ///
    pub fn combine(self, other: Self, f: impl Fn(f32, f32) -> f32) -> Self {
        Vector2 {
            x: f(self.x, other.x),
            y: f(self.y, other.y),
        }
    }

    /// Returns squared magnitude of a vector (vector length).
    ///
    pub fn sqr_magnitude(&self) -> f32 {
        self.x * self.x + self.y * self.y
    }
    /// Returns magnitude of vector.
    ///
    pub fn magnitude(&self) -> f32 {
        self.sqr_magnitude().sqrt()
    }
    /// Returns new vector that is normalized.
    ///
    pub fn normalized(self) -> Self {
        self / self.magnitude()
    }

    /// Returns vector that is made from the largest components of two vectors.
    ///
    pub fn max(self, other: Self) -> Self {
        self.combine(other, |a, b| a.max(b))
    }
    /// Returns vector that is made from the smallest components of two vectors.
    ///
    pub fn min(self, other: Self) -> Self {
        self.combine(other, |a, b| a.min(b))
    }

    /// Multiplies two vectors component-wise.
    ///
    pub fn scale(self, other: Self) -> Self {
        self.combine(other, |a, b| a * b)
    }

    /// Performs dot product operation on two vectors.
    ///
    pub fn dot_product(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }
    /// Returns scalar that represents cross product of two-dimensional vectors.
    ///
    pub fn cross_product(self, other: Self) -> f32 {
        (self.x * other.y) - (self.y * other.x)
    }

    /// Linearly interpolates between vectors `self` and `other` by `t`.
    ///
    /// `t` will be clamped between `[0.0; 1.0]`.
    ///
    /// # Example
    /// ```rust
    /// # use traject::vectors::Vector2;
    /// let a: Vector2 = Vector2::zero();
    /// let b: Vector2 = Vector2 { x: 2.0, y: 4.0 };
    /// assert_eq!(a.lerp(b, 0.5), Vector2 { x: 1.0, y: 2.0 });
    /// assert_eq!(a.lerp(b, 2.0), b);
    /// ```
    ///
    pub fn lerp(self, other: Self, t: f32) -> Self {
        self.lerp_unclamped(other, t.clamp(0.0, 1.0))
    }
    /// Linearly interpolates between vectors `self` and `other` by `t` without
    /// clamping `t`, so values outside `[0.0; 1.0]` extrapolate along the line.
    ///
    pub fn lerp_unclamped(self, other: Self, t: f32) -> Self {
        self + (other - self) * t
    }
}
impl FloatOperations for Vector2 {
    fn correct_to(self, digits: i32) -> Self {
        self.map(|elem| elem.correct_to(digits))
    }

    fn round_up_to(self, digits: i32) -> Self {
        self.map(|elem| elem.round_up_to(digits))
    }
}
impl PartialEq for Vector2 {
    fn eq(&self, other: &Self) -> bool {
        almost_equal(self.x, other.x) && almost_equal(self.y, other.y)
    }
}
impl From<[f32; 2]> for Vector2 {
    fn from(arr: [f32; 2]) -> Self {
        Vector2 {
            x: arr[0],
            y: arr[1],
        }
    }
}
impl Neg for Vector2 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.map(|a| -a)
    }
}
impl Add<Self> for Vector2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.combine(rhs, |a, b| a + b)
    }
}
impl Sub<Self> for Vector2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.combine(rhs, |a, b| a - b)
    }
}
impl Mul<f32> for Vector2 {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self::Output {
        self.map(|a| a * rhs)
    }
}
impl Div<f32> for Vector2 {
    type Output = Self;

    fn div(self, rhs: f32) -> Self::Output {
        self.map(|a| a / rhs)
    }
}
impl AddAssign<Self> for Vector2 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}
impl SubAssign<Self> for Vector2 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}
impl MulAssign<f32> for Vector2 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}
impl DivAssign<f32> for Vector2 {
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

/// Type alias for [`Vector2`].
///
pub type Point = Vector2;
