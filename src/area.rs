//! Integer pixel regions with half-open bounds.
//!
//! An [`Area`] addresses a block of whole pixels in a raster buffer. Its
//! lower-right corner is *exclusive*: `(0, 0)-(4, 3)` covers columns `0..4`
//! and rows `0..3`, so `width() == 4` and `height() == 3` are pixel counts.
//!
//! This differs from [`Rect`](crate::Rect), whose bounds are closed. Convert
//! explicitly with `Rect::from(area)` and [`Rect::interior_area`](crate::Rect::interior_area)
//! when crossing between the two.
//!
//! # Example
//!
//! ```
//! use zenregion::{Area, IVec2};
//!
//! let a = Area::new(10, 20, 30, 35);
//! assert!(a.contains(IVec2::new(10, 20)));
//! assert!(!a.contains(IVec2::new(30, 20))); // right edge is exclusive
//!
//! // Touching edges do not intersect.
//! assert!(!a.intersects(&Area::new(30, 20, 40, 35)));
//! ```

use core::fmt;
use core::ops::{Add, AddAssign, Sub, SubAssign};

use crate::fit::{Gravity, Scaling};
use crate::vector::{IVec2, Vec2f};

/// Axis-aligned integer region, half-open on the lower-right.
///
/// Constructors and [`set`](Self::set) keep `x1 <= x2` and `y1 <= y2`. The
/// fields are public; assigning them directly can break that ordering, and
/// the other methods then behave as if the region were empty.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Area {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Area {
    /// The empty area at the origin.
    pub const ZERO: Self = Self {
        x1: 0,
        y1: 0,
        x2: 0,
        y2: 0,
    };

    /// Create an area from two corners given in any order.
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        let mut a = Self::ZERO;
        a.set(x1, y1, x2, y2);
        a
    }

    /// Create an area spanning two corner points given in any order.
    pub fn from_corners(a: IVec2, b: IVec2) -> Self {
        Self::new(a.x, a.y, b.x, b.y)
    }

    /// Create a `width`×`height` area with its upper-left at `origin`.
    pub fn from_size(origin: IVec2, width: u32, height: u32) -> Self {
        Self::new(
            origin.x,
            origin.y,
            origin.x.saturating_add_unsigned(width),
            origin.y.saturating_add_unsigned(height),
        )
    }

    /// Assign all four coordinates, swapping as needed so `x1 <= x2`, `y1 <= y2`.
    pub fn set(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        self.x1 = x1.min(x2);
        self.x2 = x1.max(x2);
        self.y1 = y1.min(y2);
        self.y2 = y1.max(y2);
    }

    /// Number of pixel columns, saturating at `i32::MAX`.
    pub fn width(&self) -> i32 {
        self.x2.saturating_sub(self.x1)
    }

    /// Number of pixel rows, saturating at `i32::MAX`.
    pub fn height(&self) -> i32 {
        self.y2.saturating_sub(self.y1)
    }

    /// `(width, height)`.
    pub fn size(&self) -> IVec2 {
        IVec2::new(self.width(), self.height())
    }

    /// Geometric center, which may fall between pixels.
    pub fn center(&self) -> Vec2f {
        Vec2f::new(
            (self.x1 as f32 + self.x2 as f32) / 2.0,
            (self.y1 as f32 + self.y2 as f32) / 2.0,
        )
    }

    /// Pixel count, widened so large areas cannot overflow.
    pub fn calc_area(&self) -> i64 {
        let (w, h) = self.wide_size();
        w.max(0) * h.max(0)
    }

    /// Exact `(width, height)` in `i64`.
    fn wide_size(&self) -> (i64, i64) {
        (
            self.x2 as i64 - self.x1 as i64,
            self.y2 as i64 - self.y1 as i64,
        )
    }

    /// True when the area covers no pixels.
    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// Upper-left corner (inclusive).
    pub fn ul(&self) -> IVec2 {
        IVec2::new(self.x1, self.y1)
    }

    /// Upper-right corner.
    pub fn ur(&self) -> IVec2 {
        IVec2::new(self.x2, self.y1)
    }

    /// Lower-left corner.
    pub fn ll(&self) -> IVec2 {
        IVec2::new(self.x1, self.y2)
    }

    /// Lower-right corner (exclusive).
    pub fn lr(&self) -> IVec2 {
        IVec2::new(self.x2, self.y2)
    }

    /// Shrink to the part of `self` that lies inside `clip`.
    ///
    /// Every coordinate is clamped into `clip`, so the result never leaves
    /// `clip`. When the two do not overlap the result has zero width or
    /// height; check [`is_empty`](Self::is_empty) before using it.
    pub fn clip_by(&mut self, clip: &Area) {
        self.x1 = self.x1.clamp(clip.x1, clip.x2.max(clip.x1));
        self.x2 = self.x2.clamp(clip.x1, clip.x2.max(clip.x1));
        self.y1 = self.y1.clamp(clip.y1, clip.y2.max(clip.y1));
        self.y2 = self.y2.clamp(clip.y1, clip.y2.max(clip.y1));
    }

    /// Non-mutating [`clip_by`](Self::clip_by).
    pub fn clipped_by(mut self, clip: &Area) -> Self {
        self.clip_by(clip);
        self
    }

    /// Translate by `v`.
    ///
    /// Coordinates saturate at the `i32` range.
    pub fn offset(&mut self, v: IVec2) {
        self.x1 = self.x1.saturating_add(v.x);
        self.x2 = self.x2.saturating_add(v.x);
        self.y1 = self.y1.saturating_add(v.y);
        self.y2 = self.y2.saturating_add(v.y);
    }

    /// Non-mutating [`offset`](Self::offset).
    pub fn offset_by(mut self, v: IVec2) -> Self {
        self.offset(v);
        self
    }

    /// Translate so the upper-left corner lands on `ul`, keeping the size.
    ///
    /// The lower-right corner saturates at `i32::MAX`.
    pub fn move_ul_to(&mut self, ul: IVec2) {
        let size = self.size();
        self.x1 = ul.x;
        self.y1 = ul.y;
        self.x2 = ul.x.saturating_add(size.x);
        self.y2 = ul.y.saturating_add(size.y);
    }

    /// Non-mutating [`move_ul_to`](Self::move_ul_to).
    pub fn moved_ul_to(mut self, ul: IVec2) -> Self {
        self.move_ul_to(ul);
        self
    }

    /// Half-open point test: `x1 <= x < x2` and `y1 <= y < y2`.
    pub fn contains(&self, p: IVec2) -> bool {
        p.x >= self.x1 && p.x < self.x2 && p.y >= self.y1 && p.y < self.y2
    }

    /// Whether every pixel of `other` is also in `self`.
    ///
    /// Empty areas are contained in anything.
    pub fn contains_area(&self, other: &Area) -> bool {
        other.is_empty()
            || (other.x1 >= self.x1
                && other.x2 <= self.x2
                && other.y1 >= self.y1
                && other.y2 <= self.y2)
    }

    /// Whether the two areas share at least one pixel. Touching edges do not count,
    /// and an empty area intersects nothing.
    pub fn intersects(&self, other: &Area) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.x1 < other.x2
            && self.x2 > other.x1
            && self.y1 < other.y2
            && self.y2 > other.y1
    }

    /// Grow so the bounds reach `p`.
    ///
    /// Extends each bound to the point's coordinate; because the lower-right
    /// bound is exclusive, a point on the new right or bottom edge is not
    /// itself [`contains`](Self::contains)-ed. Starting from a default area
    /// also pulls the bounds toward the origin; seed with the first point
    /// instead (`Area::from_corners(p, p)`) when that matters.
    pub fn include_point(&mut self, p: IVec2) {
        self.x1 = self.x1.min(p.x);
        self.x2 = self.x2.max(p.x);
        self.y1 = self.y1.min(p.y);
        self.y2 = self.y2.max(p.y);
    }

    /// [`include_point`](Self::include_point) for every point.
    pub fn include_points<I: IntoIterator<Item = IVec2>>(&mut self, points: I) {
        for p in points {
            self.include_point(p);
        }
    }

    /// Grow to cover `other` as well.
    pub fn include_area(&mut self, other: &Area) {
        self.include_point(other.ul());
        self.include_point(other.lr());
    }

    /// Largest area with `src`'s aspect ratio that fits inside `dst`.
    ///
    /// The longer axis of `src` is fitted first; if that makes the other axis
    /// overflow `dst`, the fit is redone against the other axis. With
    /// [`Scaling::WhenNeeded`] the result is never larger than `src` itself.
    /// The result is positioned inside `dst` by `gravity`. An empty `src`
    /// yields an empty area at that position.
    ///
    /// ```
    /// use zenregion::{Area, Gravity, Scaling};
    ///
    /// let fit = Area::proportional_fit(
    ///     &Area::new(0, 0, 400, 200),
    ///     &Area::new(0, 0, 100, 100),
    ///     Gravity::Center,
    ///     Scaling::WhenNeeded,
    /// );
    /// assert_eq!(fit, Area::new(0, 25, 100, 75));
    /// ```
    pub fn proportional_fit(src: &Area, dst: &Area, gravity: Gravity, scaling: Scaling) -> Area {
        let (sw, sh) = src.wide_size();
        let (dw, dh) = dst.wide_size();
        let expand = scaling == Scaling::Always;

        let (w, h) = if sw <= 0 || sh <= 0 {
            (0, 0)
        } else if sw >= sh {
            let mut w = if expand { dw } else { dw.min(sw) };
            let mut h = w * sh / sw;
            if h > dh {
                h = dh;
                w = h * sw / sh;
            }
            (w, h)
        } else {
            let mut h = if expand { dh } else { dh.min(sh) };
            let mut w = h * sw / sh;
            if w > dw {
                w = dw;
                h = w * sh / sw;
            }
            (w, h)
        };
        // Bounded by the destination extent, so the far edges stay in range.
        let x = dst.x1 as i64 + gravity.offset_1d(dw - w, true);
        let y = dst.y1 as i64 + gravity.offset_1d(dh - h, false);
        Area::new(x as i32, y as i32, (x + w) as i32, (y + h) as i32)
    }
}

impl Add<IVec2> for Area {
    type Output = Self;

    fn add(self, rhs: IVec2) -> Self {
        self.offset_by(rhs)
    }
}

impl Sub<IVec2> for Area {
    type Output = Self;

    fn sub(self, rhs: IVec2) -> Self {
        let mut a = self;
        a -= rhs;
        a
    }
}

impl AddAssign<IVec2> for Area {
    fn add_assign(&mut self, rhs: IVec2) {
        self.offset(rhs);
    }
}

impl SubAssign<IVec2> for Area {
    fn sub_assign(&mut self, rhs: IVec2) {
        self.x1 = self.x1.saturating_sub(rhs.x);
        self.x2 = self.x2.saturating_sub(rhs.x);
        self.y1 = self.y1.saturating_sub(rhs.y);
        self.y2 = self.y2.saturating_sub(rhs.y);
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})-({}, {})", self.x1, self.y1, self.x2, self.y2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── construction ────────────────────────────────────────────────────

    #[test]
    fn new_canonicalizes() {
        let a = Area::new(30, 40, 10, 20);
        assert_eq!((a.x1, a.y1, a.x2, a.y2), (10, 20, 30, 40));
        assert_eq!(a, Area::new(10, 40, 30, 20));
    }

    #[test]
    fn set_canonicalizes_in_place() {
        let mut a = Area::ZERO;
        a.set(5, -5, -5, 5);
        assert_eq!(a, Area::new(-5, -5, 5, 5));
        assert!(a.x1 <= a.x2 && a.y1 <= a.y2);
    }

    #[test]
    fn from_corners_and_size() {
        assert_eq!(
            Area::from_corners(IVec2::new(8, 2), IVec2::new(1, 9)),
            Area::new(1, 2, 8, 9)
        );
        assert_eq!(Area::from_size(IVec2::new(3, 4), 10, 5), Area::new(3, 4, 13, 9));
    }

    #[test]
    fn dimensions() {
        let a = Area::new(10, 20, 30, 35);
        assert_eq!(a.width(), 20);
        assert_eq!(a.height(), 15);
        assert_eq!(a.size(), IVec2::new(20, 15));
        assert_eq!(a.calc_area(), 300);
        assert_eq!(a.center(), Vec2f::new(20.0, 27.5));
        assert_eq!(a.ul(), IVec2::new(10, 20));
        assert_eq!(a.ur(), IVec2::new(30, 20));
        assert_eq!(a.ll(), IVec2::new(10, 35));
        assert_eq!(a.lr(), IVec2::new(30, 35));
        assert!(!a.is_empty());
        assert!(Area::new(5, 5, 5, 9).is_empty());
    }

    #[test]
    fn calc_area_does_not_overflow() {
        let a = Area::new(0, 0, 100_000, 100_000);
        assert_eq!(a.calc_area(), 10_000_000_000);
    }

    // ── clipping ────────────────────────────────────────────────────────

    #[test]
    fn clip_overlapping() {
        let a = Area::new(-10, -10, 50, 50);
        assert_eq!(a.clipped_by(&Area::new(0, 0, 100, 100)), Area::new(0, 0, 50, 50));
    }

    #[test]
    fn clip_disjoint_collapses_inside_clip() {
        let clip = Area::new(0, 0, 10, 10);
        let c = Area::new(20, 20, 30, 30).clipped_by(&clip);
        assert!(c.is_empty());
        assert_eq!(c, Area::new(10, 10, 10, 10));
        assert!(clip.contains_area(&c));
    }

    #[test]
    fn clip_is_idempotent() {
        let a = Area::new(-3, 4, 17, 40);
        let b = Area::new(0, 0, 10, 10);
        let once = a.clipped_by(&b);
        assert_eq!(once.clipped_by(&b), once);
    }

    #[test]
    fn clip_by_self_is_identity() {
        let a = Area::new(3, 4, 17, 40);
        assert_eq!(a.clipped_by(&a), a);
    }

    // ── translation ─────────────────────────────────────────────────────

    #[test]
    fn offset_and_move() {
        let a = Area::new(1, 2, 5, 7);
        assert_eq!(a.offset_by(IVec2::new(10, -2)), Area::new(11, 0, 15, 5));
        assert_eq!(a.moved_ul_to(IVec2::new(100, 100)), Area::new(100, 100, 104, 105));
        assert_eq!(a + IVec2::new(1, 1), Area::new(2, 3, 6, 8));
        assert_eq!(a - IVec2::new(1, 1), Area::new(0, 1, 4, 6));

        let mut b = a;
        b += IVec2::new(2, 2);
        b -= IVec2::new(1, 0);
        assert_eq!(b, Area::new(2, 4, 6, 9));
    }

    // ── containment / intersection ──────────────────────────────────────

    #[test]
    fn contains_is_half_open() {
        let a = Area::new(0, 0, 10, 10);
        assert!(a.contains(IVec2::new(0, 0)));
        assert!(a.contains(IVec2::new(9, 9)));
        assert!(!a.contains(IVec2::new(10, 9)));
        assert!(!a.contains(IVec2::new(9, 10)));
        assert!(!a.contains(IVec2::new(-1, 0)));
    }

    #[test]
    fn touching_edges_do_not_intersect() {
        let a = Area::new(10, 20, 30, 20 + 15);
        let b = Area::new(30, 20, 40, 35);
        assert!(!a.intersects(&b));
        assert!(!b.intersects(&a));
    }

    #[test]
    fn overlap_intersects_both_ways() {
        let a = Area::new(0, 0, 10, 10);
        let b = Area::new(9, 9, 20, 20);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(a.intersects(&a));
    }

    #[test]
    fn contains_area() {
        let outer = Area::new(0, 0, 10, 10);
        assert!(outer.contains_area(&Area::new(2, 2, 10, 10)));
        assert!(!outer.contains_area(&Area::new(2, 2, 11, 10)));
        assert!(outer.contains_area(&Area::new(50, 50, 50, 60)));
    }

    // ── include ─────────────────────────────────────────────────────────

    #[test]
    fn include_point_grows() {
        let mut a = Area::from_corners(IVec2::new(5, 5), IVec2::new(5, 5));
        a.include_point(IVec2::new(2, 8));
        a.include_point(IVec2::new(9, 1));
        assert_eq!(a, Area::new(2, 1, 9, 8));
    }

    #[test]
    fn include_from_default_keeps_origin() {
        let mut a = Area::default();
        a.include_points([IVec2::new(5, 5), IVec2::new(8, 9)]);
        assert_eq!(a, Area::new(0, 0, 8, 9));
    }

    #[test]
    fn include_area() {
        let mut a = Area::new(0, 0, 4, 4);
        a.include_area(&Area::new(10, -2, 12, 3));
        assert_eq!(a, Area::new(0, -2, 12, 4));
    }

    // ── proportional_fit ────────────────────────────────────────────────

    #[test]
    fn proportional_fit_wide_source_centered() {
        let r = Area::proportional_fit(
            &Area::new(0, 0, 400, 200),
            &Area::new(0, 0, 100, 100),
            Gravity::Center,
            Scaling::WhenNeeded,
        );
        assert_eq!(r, Area::new(0, 25, 100, 75));
    }

    #[test]
    fn proportional_fit_tall_source_falls_back_to_width() {
        // 100×300 into 200×100: height-first gives 33×100.
        let r = Area::proportional_fit(
            &Area::new(0, 0, 100, 300),
            &Area::new(0, 0, 200, 100),
            Gravity::TOP_LEFT,
            Scaling::Always,
        );
        assert_eq!(r, Area::new(0, 0, 33, 100));

        // 200×210 into 100×400: height-first keeps 210 rows, which needs
        // 200 columns and overflows, so width constrains → 100×105.
        let r = Area::proportional_fit(
            &Area::new(0, 0, 200, 210),
            &Area::new(0, 0, 100, 400),
            Gravity::TOP_LEFT,
            Scaling::WhenNeeded,
        );
        assert_eq!(r, Area::new(0, 0, 100, 105));
    }

    #[test]
    fn proportional_fit_wide_overflow_constrains_height() {
        // 300×200 into 400×100 with expand: width 400 → height 266 > 100,
        // so height constrains → 150×100.
        let r = Area::proportional_fit(
            &Area::new(0, 0, 300, 200),
            &Area::new(0, 0, 400, 100),
            Gravity::Center,
            Scaling::Always,
        );
        assert_eq!(r, Area::new(125, 0, 275, 100));
    }

    #[test]
    fn proportional_fit_when_needed_does_not_upscale() {
        let r = Area::proportional_fit(
            &Area::new(0, 0, 40, 20),
            &Area::new(0, 0, 100, 100),
            Gravity::Center,
            Scaling::WhenNeeded,
        );
        assert_eq!(r, Area::new(30, 40, 70, 60));

        let r = Area::proportional_fit(
            &Area::new(0, 0, 40, 20),
            &Area::new(0, 0, 100, 100),
            Gravity::Center,
            Scaling::Always,
        );
        assert_eq!(r, Area::new(0, 25, 100, 75));
    }

    #[test]
    fn proportional_fit_offsets_by_dst_origin() {
        let r = Area::proportional_fit(
            &Area::new(0, 0, 400, 200),
            &Area::new(50, 60, 150, 160),
            Gravity::TOP_LEFT,
            Scaling::WhenNeeded,
        );
        assert_eq!(r, Area::new(50, 60, 150, 110));
    }

    #[test]
    fn proportional_fit_empty_source() {
        let r = Area::proportional_fit(
            &Area::new(0, 0, 0, 10),
            &Area::new(0, 0, 100, 100),
            Gravity::Center,
            Scaling::Always,
        );
        assert!(r.is_empty());
        assert_eq!(r.ul(), IVec2::new(50, 50));
    }

    #[test]
    fn empty_area_intersects_nothing() {
        let big = Area::new(0, 0, 10, 10);
        let point = Area::new(5, 5, 5, 5);
        let line = Area::new(2, 0, 2, 10);
        assert!(!point.intersects(&big));
        assert!(!big.intersects(&point));
        assert!(!line.intersects(&big));
        assert!(!point.intersects(&point));
    }

    // ── i32 limits ──────────────────────────────────────────────────────

    #[test]
    fn full_range_extent_saturates() {
        let a = Area::new(i32::MIN, 0, i32::MAX, 1);
        assert_eq!(a.width(), i32::MAX);
        assert_eq!(a.calc_area(), u32::MAX as i64);
        assert!(!a.is_empty());
    }

    #[test]
    fn offset_saturates() {
        let a = Area::new(0, 0, 10, 10).offset_by(IVec2::new(i32::MAX - 5, i32::MIN));
        assert_eq!(a, Area::new(i32::MAX - 5, i32::MIN, i32::MAX, i32::MIN + 10));

        let b = Area::new(-10, 0, 0, 1) - IVec2::new(i32::MAX, 0);
        assert_eq!(b.x1, i32::MIN);
        assert_eq!(b.x2, -i32::MAX);
    }

    #[test]
    fn move_ul_to_far_corner_keeps_ul() {
        let a = Area::new(-5, -5, 5, 5).moved_ul_to(IVec2::new(i32::MAX - 3, i32::MIN));
        assert_eq!(a.ul(), IVec2::new(i32::MAX - 3, i32::MIN));
        assert_eq!(a.lr(), IVec2::new(i32::MAX, i32::MIN + 10));

        let wide = Area::new(i32::MIN, 0, i32::MAX, 1).moved_ul_to(IVec2::ZERO);
        assert_eq!(wide, Area::new(0, 0, i32::MAX, 1));
    }

    #[test]
    fn proportional_fit_wide_areas() {
        let src = Area::new(-2_000_000_000, 0, 2_000_000_000, 10);
        let r = Area::proportional_fit(&src, &Area::new(0, 0, 400, 400), Gravity::Center, Scaling::Always);
        assert_eq!(r.width(), 400);
        assert_eq!(r.height(), 0);

        let dst = Area::new(i32::MIN, i32::MIN, i32::MAX, i32::MAX);
        let r = Area::proportional_fit(&Area::new(0, 0, 20, 10), &dst, Gravity::TOP_LEFT, Scaling::Always);
        assert_eq!(r.ul(), dst.ul());
        assert!(dst.contains_area(&r));
    }

    // ── misc ────────────────────────────────────────────────────────────

    #[test]
    fn ordering_is_lexicographic() {
        assert!(Area::new(0, 0, 5, 5) < Area::new(1, 0, 2, 2));
        assert!(Area::new(0, 0, 5, 5) < Area::new(0, 0, 5, 6));
    }

    #[test]
    fn display() {
        extern crate std;
        use std::string::ToString;
        assert_eq!(Area::new(1, 2, 3, 4).to_string(), "(1, 2)-(3, 4)");
    }
}
