//! Two-component points and offsets.

use core::fmt;
use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use crate::scalar::Scalar;

/// A 2D point or offset.
///
/// Regions use it both for positions (corners, centers) and for
/// translations; the distinction is in how a method treats it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Vec2<T> {
    pub x: T,
    pub y: T,
}

/// Integer pixel point / offset.
pub type IVec2 = Vec2<i32>;
/// Single-precision point / offset.
pub type Vec2f = Vec2<f32>;
/// Double-precision point / offset.
pub type Vec2d = Vec2<f64>;

impl<T> Vec2<T> {
    /// Create a new vector.
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl IVec2 {
    /// `(0, 0)`.
    pub const ZERO: Self = Self::new(0, 0);

    /// Component-wise `saturating_add`.
    pub fn saturating_add(self, rhs: Self) -> Self {
        Self::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }

    /// Component-wise `saturating_sub`.
    pub fn saturating_sub(self, rhs: Self) -> Self {
        Self::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

impl<T: Scalar> Vec2<T> {
    /// Convert a pixel point.
    pub fn from_ivec2(v: IVec2) -> Self {
        Self::new(T::from_i32(v.x), T::from_i32(v.y))
    }

    /// Truncate toward zero into a pixel point.
    pub fn to_ivec2(self) -> IVec2 {
        IVec2::new(self.x.to_i32(), self.y.to_i32())
    }

    /// Squared Euclidean length.
    pub fn length_squared(self) -> T {
        self.x * self.x + self.y * self.y
    }

    /// Euclidean length.
    pub fn length(self) -> T {
        self.length_squared().sqrt()
    }
}

impl<T: Add<Output = T>> Add for Vec2<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Sub<Output = T>> Sub for Vec2<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Neg<Output = T>> Neg for Vec2<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl<T: Copy + Mul<Output = T>> Mul<T> for Vec2<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl<T: Copy + Div<Output = T>> Div<T> for Vec2<T> {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl<T: AddAssign> AddAssign for Vec2<T> {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl<T: SubAssign> SubAssign for Vec2<T> {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl<T> From<(T, T)> for Vec2<T> {
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}

impl<T: fmt::Display> fmt::Display for Vec2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
