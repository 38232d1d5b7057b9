//! Continuous axis-aligned rectangles with closed bounds.
//!
//! [`Rect<T>`] lives on the geometric plane rather than the pixel grid: both
//! edges are part of the rectangle, so `Rectf::new(0.0, 0.0, 10.0, 10.0)`
//! contains `(10.0, 10.0)`. Compare [`Area`], whose right and bottom edges
//! are exclusive.
//!
//! Unlike [`Area`], a `Rect` keeps its corners in the order given. Call
//! [`canonicalize`](Rect::canonicalize) when an operation needs
//! `x1 <= x2` and `y1 <= y2`.
//!
//! # Example
//!
//! ```
//! use zenregion::{Area, Rectf, Vec2f};
//!
//! let r = Rectf::new(0.0, 0.0, 10.0, 10.0);
//! assert!(r.contains(Vec2f::new(10.0, 10.0)));
//!
//! // Scaling about the center keeps the center; scaling from the origin does not.
//! assert_eq!(r.scaled_about_center(2.0), Rectf::new(-5.0, -5.0, 15.0, 15.0));
//! assert_eq!(r.scaled_from_origin(2.0), Rectf::new(0.0, 0.0, 20.0, 20.0));
//!
//! // Back to whole pixels.
//! assert_eq!(Rectf::new(0.5, 0.5, 9.5, 9.5).interior_area(), Area::new(1, 1, 10, 10));
//! ```

use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

use kurbo::{Affine, Point};

use crate::area::Area;
use crate::fit::Scaling;
use crate::scalar::Scalar;
use crate::vector::Vec2;

/// Axis-aligned rectangle over a continuous coordinate type.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rect<T> {
    pub x1: T,
    pub y1: T,
    pub x2: T,
    pub y2: T,
}

/// Single-precision rectangle.
pub type Rectf = Rect<f32>;
/// Double-precision rectangle.
pub type Rectd = Rect<f64>;

impl<T: Scalar> Rect<T> {
    /// Create a rectangle. Coordinates are stored as given.
    pub fn new(x1: T, y1: T, x2: T, y2: T) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Create a rectangle from its upper-left and lower-right corners.
    pub fn from_corners(ul: Vec2<T>, lr: Vec2<T>) -> Self {
        Self::new(ul.x, ul.y, lr.x, lr.y)
    }

    /// Canonical bounding box of `points`, or `None` if there are none.
    pub fn from_points<I: IntoIterator<Item = Vec2<T>>>(points: I) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut r = Self::from_corners(first, first);
        r.include_points(iter);
        Some(r)
    }

    /// Assign all four coordinates as given.
    pub fn set(&mut self, x1: T, y1: T, x2: T, y2: T) {
        *self = Self::new(x1, y1, x2, y2);
    }

    /// `x2 - x1`. Negative when the rectangle is not canonical.
    pub fn width(&self) -> T {
        self.x2 - self.x1
    }

    /// `y2 - y1`. Negative when the rectangle is not canonical.
    pub fn height(&self) -> T {
        self.y2 - self.y1
    }

    /// `(width, height)`.
    pub fn size(&self) -> Vec2<T> {
        Vec2::new(self.width(), self.height())
    }

    /// `width / height`.
    pub fn aspect_ratio(&self) -> T {
        self.width() / self.height()
    }

    /// `width * height`. Negative when exactly one axis is inverted.
    pub fn calc_area(&self) -> T {
        self.width() * self.height()
    }

    /// Midpoint of the two corners.
    pub fn center(&self) -> Vec2<T> {
        Vec2::new(
            (self.x1 + self.x2) / T::two(),
            (self.y1 + self.y2) / T::two(),
        )
    }

    /// True when either extent is zero, negative, or NaN.
    pub fn is_empty(&self) -> bool {
        !(self.width() > T::zero() && self.height() > T::zero())
    }

    /// Upper-left corner, `(x1, y1)`.
    pub fn ul(&self) -> Vec2<T> {
        Vec2::new(self.x1, self.y1)
    }

    /// Upper-right corner, `(x2, y1)`.
    pub fn ur(&self) -> Vec2<T> {
        Vec2::new(self.x2, self.y1)
    }

    /// Lower-left corner, `(x1, y2)`.
    pub fn ll(&self) -> Vec2<T> {
        Vec2::new(self.x1, self.y2)
    }

    /// Lower-right corner, `(x2, y2)`.
    pub fn lr(&self) -> Vec2<T> {
        Vec2::new(self.x2, self.y2)
    }

    /// Swap coordinates so that `x1 <= x2` and `y1 <= y2`.
    pub fn canonicalize(&mut self) {
        if self.x1 > self.x2 {
            core::mem::swap(&mut self.x1, &mut self.x2);
        }
        if self.y1 > self.y2 {
            core::mem::swap(&mut self.y1, &mut self.y2);
        }
    }

    /// Non-mutating [`canonicalize`](Self::canonicalize).
    pub fn canonicalized(mut self) -> Self {
        self.canonicalize();
        self
    }

    /// Shrink to the part of `self` inside `clip`.
    ///
    /// A rectangle that misses `clip` collapses to zero width or height
    /// rather than inverting.
    pub fn clip_by(&mut self, clip: &Rect<T>) {
        self.x1 = self.x1.max(clip.x1);
        self.x2 = self.x2.min(clip.x2);
        self.y1 = self.y1.max(clip.y1);
        self.y2 = self.y2.min(clip.y2);

        self.x1 = self.x1.min(self.x2);
        self.y1 = self.y1.min(self.y2);
    }

    /// Non-mutating [`clip_by`](Self::clip_by).
    pub fn clipped_by(mut self, clip: &Rect<T>) -> Self {
        self.clip_by(clip);
        self
    }

    /// Translate by `v`.
    pub fn offset(&mut self, v: Vec2<T>) {
        self.x1 = self.x1 + v.x;
        self.x2 = self.x2 + v.x;
        self.y1 = self.y1 + v.y;
        self.y2 = self.y2 + v.y;
    }

    /// Non-mutating [`offset`](Self::offset).
    pub fn offset_by(mut self, v: Vec2<T>) -> Self {
        self.offset(v);
        self
    }

    /// Translate so the upper-left corner lands on `ul`.
    pub fn move_ul_to(&mut self, ul: Vec2<T>) {
        let d = ul - self.ul();
        self.offset(d);
    }

    /// Non-mutating [`move_ul_to`](Self::move_ul_to).
    pub fn moved_ul_to(mut self, ul: Vec2<T>) -> Self {
        self.move_ul_to(ul);
        self
    }

    /// Translate so the center lands on `center`.
    pub fn center_on(&mut self, center: Vec2<T>) {
        let d = center - self.center();
        self.offset(d);
    }

    /// Non-mutating [`center_on`](Self::center_on).
    pub fn centered_on(mut self, center: Vec2<T>) -> Self {
        self.center_on(center);
        self
    }

    /// Push every edge outward by `amount` (inward for negative amounts).
    ///
    /// Assumes a canonical rectangle.
    pub fn inflate(&mut self, amount: Vec2<T>) {
        self.x1 = self.x1 - amount.x;
        self.x2 = self.x2 + amount.x;
        self.y1 = self.y1 - amount.y;
        self.y2 = self.y2 + amount.y;
    }

    /// Non-mutating [`inflate`](Self::inflate).
    pub fn inflated(mut self, amount: Vec2<T>) -> Self {
        self.inflate(amount);
        self
    }

    /// Scale width and height by `s`, keeping the center fixed.
    pub fn scale_about_center(&mut self, s: T) {
        self.scale_about_center_xy(Vec2::new(s, s));
    }

    /// Per-axis [`scale_about_center`](Self::scale_about_center).
    pub fn scale_about_center_xy(&mut self, s: Vec2<T>) {
        let c = self.center();
        let half_w = self.width() * s.x / T::two();
        let half_h = self.height() * s.y / T::two();
        self.x1 = c.x - half_w;
        self.x2 = c.x + half_w;
        self.y1 = c.y - half_h;
        self.y2 = c.y + half_h;
    }

    /// Non-mutating [`scale_about_center`](Self::scale_about_center).
    pub fn scaled_about_center(mut self, s: T) -> Self {
        self.scale_about_center(s);
        self
    }

    /// Non-mutating [`scale_about_center_xy`](Self::scale_about_center_xy).
    pub fn scaled_about_center_xy(mut self, s: Vec2<T>) -> Self {
        self.scale_about_center_xy(s);
        self
    }

    /// Multiply all four coordinates by `s`, i.e. scale about the origin.
    ///
    /// The center moves unless it is at the origin. Use
    /// [`scale_about_center`](Self::scale_about_center) to resize in place.
    pub fn scale_from_origin(&mut self, s: T) {
        self.scale_from_origin_xy(Vec2::new(s, s));
    }

    /// Per-axis [`scale_from_origin`](Self::scale_from_origin).
    pub fn scale_from_origin_xy(&mut self, s: Vec2<T>) {
        self.x1 = self.x1 * s.x;
        self.x2 = self.x2 * s.x;
        self.y1 = self.y1 * s.y;
        self.y2 = self.y2 * s.y;
    }

    /// Non-mutating [`scale_from_origin`](Self::scale_from_origin).
    pub fn scaled_from_origin(mut self, s: T) -> Self {
        self.scale_from_origin(s);
        self
    }

    /// Non-mutating [`scale_from_origin_xy`](Self::scale_from_origin_xy).
    pub fn scaled_from_origin_xy(mut self, s: Vec2<T>) -> Self {
        self.scale_from_origin_xy(s);
        self
    }

    /// Replace `self` with the axis-aligned bounds of its four corners under `m`.
    ///
    /// The math runs in `f64`. The result is canonical and is a tight box
    /// around a rotated or sheared rectangle.
    pub fn transform(&mut self, m: &Affine) {
        let mut lo = Point::new(f64::INFINITY, f64::INFINITY);
        let mut hi = Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
        for corner in [self.ul(), self.ur(), self.ll(), self.lr()] {
            let p = *m * Point::new(corner.x.as_f64(), corner.y.as_f64());
            lo = Point::new(lo.x.min(p.x), lo.y.min(p.y));
            hi = Point::new(hi.x.max(p.x), hi.y.max(p.y));
        }
        self.set(
            T::from_f64(lo.x),
            T::from_f64(lo.y),
            T::from_f64(hi.x),
            T::from_f64(hi.y),
        );
    }

    /// Non-mutating [`transform`](Self::transform).
    pub fn transformed(mut self, m: &Affine) -> Self {
        self.transform(m);
        self
    }

    /// Closed point test: both edges are inside.
    pub fn contains(&self, p: Vec2<T>) -> bool {
        p.x >= self.x1 && p.x <= self.x2 && p.y >= self.y1 && p.y <= self.y2
    }

    /// Whether the rectangles overlap. Shared edges count as overlap.
    pub fn intersects(&self, other: &Rect<T>) -> bool {
        !(self.x1 > other.x2 || self.x2 < other.x1 || self.y1 > other.y2 || self.y2 < other.y1)
    }

    /// The point of the rectangle nearest `p` (`p` itself when inside).
    pub fn closest_point(&self, p: Vec2<T>) -> Vec2<T> {
        let clamp = |v: T, lo: T, hi: T| {
            if v < lo {
                lo
            } else if v > hi {
                hi
            } else {
                v
            }
        };
        Vec2::new(clamp(p.x, self.x1, self.x2), clamp(p.y, self.y1, self.y2))
    }

    /// Squared distance from `p` to the rectangle; zero inside.
    pub fn distance_squared(&self, p: Vec2<T>) -> T {
        (p - self.closest_point(p)).length_squared()
    }

    /// Distance from `p` to the rectangle; zero inside.
    pub fn distance(&self, p: Vec2<T>) -> T {
        self.distance_squared(p).sqrt()
    }

    /// Grow so the rectangle reaches `p`.
    pub fn include_point(&mut self, p: Vec2<T>) {
        self.x1 = self.x1.min(p.x);
        self.x2 = self.x2.max(p.x);
        self.y1 = self.y1.min(p.y);
        self.y2 = self.y2.max(p.y);
    }

    /// [`include_point`](Self::include_point) for every point.
    pub fn include_points<I: IntoIterator<Item = Vec2<T>>>(&mut self, points: I) {
        for p in points {
            self.include_point(p);
        }
    }

    /// Grow to cover `other` (taken in canonical form).
    pub fn include_rect(&mut self, other: &Rect<T>) {
        let o = other.canonicalized();
        self.include_point(o.ul());
        self.include_point(o.lr());
    }

    /// Scale to fit inside `other`, centered on it, keeping the aspect ratio.
    ///
    /// With [`Scaling::WhenNeeded`], a rectangle that is already strictly
    /// smaller than `other` on both axes is only re-centered.
    pub fn centered_fit(&self, other: &Rect<T>, scaling: Scaling) -> Self {
        let mut result = self.centered_on(other.center());

        let is_inside = result.width() < other.width() && result.height() < other.height();
        if scaling == Scaling::Always || !is_inside {
            let aspect_aspect = result.aspect_ratio() / other.aspect_ratio();
            let s = if aspect_aspect >= T::one() {
                other.width() / result.width()
            } else {
                other.height() / result.height()
            };
            result.scale_about_center(s);
        }
        result
    }

    /// Scale to cover `other`, centered on it, keeping the aspect ratio.
    ///
    /// With [`Scaling::WhenNeeded`], a rectangle that is already strictly
    /// larger than `other` on both axes is only re-centered.
    pub fn centered_fill(&self, other: &Rect<T>, scaling: Scaling) -> Self {
        let mut result = self.centered_on(other.center());

        let covers = result.width() > other.width() && result.height() > other.height();
        if scaling == Scaling::Always || !covers {
            let aspect_aspect = result.aspect_ratio() / other.aspect_ratio();
            let s = if aspect_aspect <= T::one() {
                other.width() / result.width()
            } else {
                other.height() / result.height()
            };
            result.scale_about_center(s);
        }
        result
    }

    /// The whole pixels this rectangle addresses.
    ///
    /// After canonicalizing, every edge is rounded up: the result holds the
    /// pixels whose upper-left corner lies in `[x1, x2) × [y1, y2)`. A
    /// fractional lower-right edge therefore takes in the partly covered
    /// pixel, while an integral rectangle maps back onto the same [`Area`].
    pub fn interior_area(&self) -> Area {
        let c = self.canonicalized();
        Area::new(
            c.x1.ceil().to_i32(),
            c.y1.ceil().to_i32(),
            c.x2.ceil().to_i32(),
            c.y2.ceil().to_i32(),
        )
    }
}

impl<T: Scalar> From<Area> for Rect<T> {
    fn from(a: Area) -> Self {
        Self::new(
            T::from_i32(a.x1),
            T::from_i32(a.y1),
            T::from_i32(a.x2),
            T::from_i32(a.y2),
        )
    }
}

impl<T: Scalar> From<Rect<T>> for Area {
    /// Truncates each coordinate toward zero, then canonicalizes.
    fn from(r: Rect<T>) -> Self {
        Area::new(r.x1.to_i32(), r.y1.to_i32(), r.x2.to_i32(), r.y2.to_i32())
    }
}

impl<T: Scalar> Add<Vec2<T>> for Rect<T> {
    type Output = Self;

    fn add(self, rhs: Vec2<T>) -> Self {
        self.offset_by(rhs)
    }
}

impl<T: Scalar> Sub<Vec2<T>> for Rect<T> {
    type Output = Self;

    fn sub(self, rhs: Vec2<T>) -> Self {
        self.offset_by(-rhs)
    }
}

impl<T: Scalar> AddAssign<Vec2<T>> for Rect<T> {
    fn add_assign(&mut self, rhs: Vec2<T>) {
        self.offset(rhs);
    }
}

impl<T: Scalar> SubAssign<Vec2<T>> for Rect<T> {
    fn sub_assign(&mut self, rhs: Vec2<T>) {
        self.offset(-rhs);
    }
}

impl<T: Scalar> Mul<T> for Rect<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        self.scaled_from_origin(rhs)
    }
}

impl<T: Scalar> MulAssign<T> for Rect<T> {
    fn mul_assign(&mut self, rhs: T) {
        self.scale_from_origin(rhs);
    }
}

impl<T: Scalar> Div<T> for Rect<T> {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        Self::new(self.x1 / rhs, self.y1 / rhs, self.x2 / rhs, self.y2 / rhs)
    }
}

impl<T: Scalar> DivAssign<T> for Rect<T> {
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

impl<T: fmt::Display> fmt::Display for Rect<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})-({}, {})", self.x1, self.y1, self.x2, self.y2)
    }
}
