//! Floating-point coordinate type for [`Rect`](crate::Rect) and friends.
//!
//! Implemented for `f32` and `f64` only. Math goes through
//! [`num_traits::Float`], which falls back to `libm` in `no_std` builds.

use core::fmt::{Debug, Display};

use num_traits::Float;

/// Scalar type used for continuous coordinates.
pub trait Scalar: Float + Default + Debug + Display + 'static {
    /// Converts a pixel coordinate. Exact for every `i32` an image can address.
    fn from_i32(value: i32) -> Self;

    /// Truncates toward zero, saturating at the `i32` range. NaN becomes 0.
    fn to_i32(self) -> i32;

    /// Converts to `f64`, the coordinate type of [`kurbo`].
    fn as_f64(self) -> f64;

    /// Converts from `f64`, rounding to the nearest value for `f32`.
    fn from_f64(value: f64) -> Self;

    /// `2`, for midpoint math.
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// `0.5`.
    fn half() -> Self {
        Self::one() / Self::two()
    }
}

impl Scalar for f32 {
    fn from_i32(value: i32) -> Self {
        value as f32
    }

    fn to_i32(self) -> i32 {
        self as i32
    }

    fn as_f64(self) -> f64 {
        self as f64
    }

    fn from_f64(value: f64) -> Self {
        value as f32
    }
}

impl Scalar for f64 {
    fn from_i32(value: i32) -> Self {
        value as f64
    }

    fn to_i32(self) -> i32 {
        self as i32
    }

    fn as_f64(self) -> f64 {
        self
    }

    fn from_f64(value: f64) -> Self {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_i32_truncates_toward_zero() {
        assert_eq!(2.9f32.to_i32(), 2);
        assert_eq!((-2.9f32).to_i32(), -2);
        assert_eq!(7.5f64.to_i32(), 7);
    }

    #[test]
    fn to_i32_saturates() {
        assert_eq!(1e20f64.to_i32(), i32::MAX);
        assert_eq!((-1e20f32).to_i32(), i32::MIN);
        assert_eq!(f32::NAN.to_i32(), 0);
    }

    #[test]
    fn helpers() {
        assert_eq!(f32::two(), 2.0);
        assert_eq!(f64::half(), 0.5);
        assert_eq!(f64::from_i32(-3), -3.0);
        assert_eq!(0.1f32.as_f64() as f32, 0.1f32);
        assert_eq!(f32::from_f64(0.5), 0.5);
    }
}
