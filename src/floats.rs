//! `floats` module implements several consts, functions and traits that help in
//! work with `f32` type.
//!
//! [`almost_equal`] function and [`EPSILON`] const are dealing with floating point equality.
//!
//! [`FloatOperations`] trait and [`CLOSE_TO_ZERO`], [`CLOSE_TO_ONE`] consts are dealing with
//! distortions that may be caused by float operations.
//!
//! [`remap`] function and [`Sign`] enum are small value helpers that geometry and
//! kinematics code reaches for constantly.
//!

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::ops::{Mul, MulAssign, Neg};

/// Constant that is used in floating point equality.
///
/// It represents amount of difference that is allowed for two `f32` values to still be considered
/// equal.
///
pub const EPSILON: f32 = 0.00001;
/// This function implements floating point equality for `traject` crate.
///
/// It is used for implementing `PartialEq` on types that are based on float.
///
/// # Example
/// ```rust
/// # use traject::floats::almost_equal;
/// assert!(almost_equal(0.15 + 0.15, 0.1 + 0.2));
/// ```
///
pub fn almost_equal(a: f32, b: f32) -> bool {
    if a == b {
        return true;
    }

    let diff = (a - b).abs();
    let norm = (a.abs() + b.abs()).min(f32::MAX);
    diff < (norm * EPSILON).max(f32::MIN)
}

/// Constant that is used in floating point correction.
///
/// It defines the threshold for number to be considered small enough to then be floored.
///
pub const CLOSE_TO_ZERO: f32 = 0.0001;
/// Constant that is used in floating point correction.
///
/// It defines the threshold for number to be considered big enough to then be ceiled.
///
pub const CLOSE_TO_ONE: f32 = 0.9999;
/// [`FloatOperations`] trait defines `correct_to` and `round_up_to` associated functions that work
/// with floating point values.
///
pub trait FloatOperations {
    /// Corrects distortions that may be caused by float operations.
    ///
    /// For example, this function fixes such things as -0.0 into 0.0,
    /// 0.0001 (anything that is less than `CLOSE_TO_ZERO`) into 0.0 and
    /// 0.9999 (anything that is greater than `CLOSE_TO_ONE`) into 1.0.
    ///
    fn correct_to(self, digits: i32) -> Self;

    /// Rounds to given amount of digits after floating point.
    ///
    /// Passing negative number shifts floating point to the left.
    ///
    fn round_up_to(self, digits: i32) -> Self;
}
impl FloatOperations for f32 {
    /// Corrects distortions that may be caused by float operations.
    ///
    /// # Example
    /// ```rust
    /// # use traject::floats::FloatOperations;
    /// assert_eq!(-0.0_f32.correct_to(0), 0.0);
    /// assert_eq!(0.00009_f32.correct_to(0), 0.0);
    /// assert_eq!(0.99999_f32.correct_to(0), 1.0);
    ///
    /// assert_eq!(0.200009_f32.correct_to(1), 0.2);
    /// assert_eq!(-0.199999_f32.correct_to(1), -0.2);
    /// ```
    ///
    fn correct_to(self, digits: i32) -> Self {
        let mul = 10_f32.powi(digits);

        let n = self * mul;

        if n == -0.0 {
            return 0.0;
        }

        let fract = n.abs().fract();
        if !(CLOSE_TO_ZERO..=CLOSE_TO_ONE).contains(&fract) {
            return n.round() / mul;
        }

        n / mul
    }

    /// Rounds to given amount of digits after floating point.
    ///
    /// # Example
    /// ```rust
    /// # use traject::floats::FloatOperations;
    /// assert_eq!(12.345_f32.round_up_to(2), 12.35);
    /// assert_eq!(12.345_f32.round_up_to(-1), 10.0);
    /// ```
    ///
    fn round_up_to(self, digits: i32) -> Self {
        let mul = 10_f32.powi(digits);
        (self * mul).round() / mul
    }
}
impl<T: FloatOperations, const N: usize> FloatOperations for [T; N] {
    fn correct_to(self, digits: i32) -> Self {
        self.map(|elem| elem.correct_to(digits))
    }

    fn round_up_to(self, digits: i32) -> Self {
        self.map(|elem| elem.round_up_to(digits))
    }
}

/// Remaps `value` from `[in_min; in_max]` range to `[out_min; out_max]` range.
///
/// Value is first inverse-lerped into a parameter (clamped to `[0.0; 1.0]`) and
/// then lerped onto the output range, so results never leave the output range.
/// If the input range is degenerate (`in_min == in_max`), parameter is 0.
///
/// # Example
/// ```rust
/// # use traject::floats::remap;
/// assert_eq!(remap(0.0, 10.0, 0.0, 100.0, 5.0), 50.0);
/// assert_eq!(remap(0.0, 10.0, 0.0, 100.0, 20.0), 100.0);
/// assert_eq!(remap(5.0, 5.0, 0.0, 100.0, 5.0), 0.0);
/// ```
///
pub fn remap(in_min: f32, in_max: f32, out_min: f32, out_max: f32, value: f32) -> f32 {
    let t: f32 = if in_min == in_max {
        0.0
    } else {
        ((value - in_min) / (in_max - in_min)).clamp(0.0, 1.0)
    };
    out_min + (out_max - out_min) * t
}

/// [`Sign`] unit-only enum represents value's sign (value can be negative, positive or be equal to zero).
///
/// `From` implementations take sign from given value.
///
/// # Example
/// ```rust
/// # use traject::floats::Sign;
/// let mut sign: Sign = Sign::Positive;
/// sign = -sign;
/// assert_eq!(sign, Sign::Negative * Sign::Positive);
/// assert_eq!(sign.factor(), -1.0);
/// ```
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Sign {
    /// Negative sign (-1).
    ///
    Negative = -1,
    /// Zero (0).
    ///
    Zero = 0,
    /// Positive sign (+1).
    ///
    Positive = 1,
}
impl Sign {
    /// Returns multiplier that corresponds to this sign (-1.0, 0.0 or 1.0).
    ///
    pub fn factor(self) -> f32 {
        match self {
            Self::Negative => -1.0,
            Self::Zero => 0.0,
            Self::Positive => 1.0,
        }
    }

    /// Returns [`Sign::Negative`] or [`Sign::Positive`] with equal probability.
    ///
    /// RNG is passed by the caller so that code that needs reproducibility can
    /// seed its own generator.
    ///
    /// # Example
    /// ```rust
    /// # use traject::floats::Sign;
    /// let sign: Sign = Sign::random(&mut rand::thread_rng());
    /// assert!(matches!(sign, Sign::Negative | Sign::Positive));
    /// ```
    ///
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.gen::<bool>() {
            Self::Positive
        } else {
            Self::Negative
        }
    }
}
impl Neg for Sign {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Self::Negative => Self::Positive,
            Self::Zero => Self::Zero,
            Self::Positive => Self::Negative,
        }
    }
}
impl Mul<Self> for Sign {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Self::Positive, Self::Positive) | (Self::Negative, Self::Negative) => Self::Positive,
            (Self::Positive, Self::Negative) | (Self::Negative, Self::Positive) => Self::Negative,
            _ => Self::Zero,
        }
    }
}
impl MulAssign<Self> for Sign {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}
impl From<f32> for Sign {
    fn from(value: f32) -> Self {
        if value == 0.0 || -value == 0.0 {
            Self::Zero
        } else if value.is_sign_positive() {
            Self::Positive
        } else {
            Self::Negative
        }
    }
}
impl From<i32> for Sign {
    fn from(value: i32) -> Self {
        match value.cmp(&0) {
            std::cmp::Ordering::Less => Self::Negative,
            std::cmp::Ordering::Equal => Self::Zero,
            std::cmp::Ordering::Greater => Self::Positive,
        }
    }
}
