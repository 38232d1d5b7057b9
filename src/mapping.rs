//! Linear mapping between two rectangles' coordinate spaces.
//!
//! # Example
//!
//! ```
//! use zenregion::{RectMapping, Rectf, Vec2f};
//!
//! let m = RectMapping::new(
//!     Rectf::new(0.0, 0.0, 10.0, 10.0),
//!     Rectf::new(0.0, 0.0, 100.0, 100.0),
//! );
//! assert_eq!(m.map_point(Vec2f::new(5.0, 5.0)), Vec2f::new(50.0, 50.0));
//! ```

use core::fmt;

use crate::rect::Rect;
use crate::scalar::Scalar;
use crate::vector::Vec2;

/// Maps points and rectangles from `src` space into `dst` space.
///
/// Each axis is an independent affine map, so `src` edges land on the
/// matching `dst` edges. Only axis-aligned scale and translation are
/// expressible; use [`Affine`](crate::Affine) for anything else.
///
/// The plain constructors accept a zero-width or zero-height `src`; mapping
/// through one then produces `inf` or `NaN` coordinates. Use
/// [`try_new`](Self::try_new) to reject such sources up front.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RectMapping<T = f32> {
    src: Rect<T>,
    dst: Rect<T>,
}

/// Why a [`RectMapping`] could not be built.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MappingError {
    /// The source rectangle has zero or non-finite width or height.
    DegenerateSource,
}

impl fmt::Display for MappingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateSource => f.write_str("source rectangle has zero or non-finite extent"),
        }
    }
}

impl core::error::Error for MappingError {}

impl<T: Scalar> RectMapping<T> {
    /// Map `src` onto `dst` exactly, stretching if the aspect ratios differ.
    pub fn new(src: Rect<T>, dst: Rect<T>) -> Self {
        Self { src, dst }
    }

    /// Like [`new`](Self::new), but rejects a source that would divide by zero.
    pub fn try_new(src: Rect<T>, dst: Rect<T>) -> Result<Self, MappingError> {
        let (w, h) = (src.width(), src.height());
        if w == T::zero() || h == T::zero() || !w.is_finite() || !h.is_finite() {
            return Err(MappingError::DegenerateSource);
        }
        Ok(Self::new(src, dst))
    }

    /// Map `src` onto the largest centered part of `dst` with `src`'s aspect ratio.
    ///
    /// A source narrower than the destination is pillarboxed (the target is
    /// inset left and right); otherwise it is letterboxed (inset top and
    /// bottom).
    pub fn preserving_aspect(src: Rect<T>, dst: Rect<T>) -> Self {
        let src_aspect = src.aspect_ratio();
        let dst_aspect = dst.aspect_ratio();
        let mut target = dst;
        if src_aspect < dst_aspect {
            let width = dst.height() * src_aspect;
            let inset = (dst.width() - width) * T::half();
            target.x1 = dst.x1 + inset;
            target.x2 = target.x1 + width;
        } else {
            let height = dst.width() / src_aspect;
            let inset = (dst.height() - height) * T::half();
            target.y1 = dst.y1 + inset;
            target.y2 = target.y1 + height;
        }
        Self::new(src, target)
    }

    /// The source rectangle.
    pub fn src_rect(&self) -> Rect<T> {
        self.src
    }

    /// The destination rectangle (after any aspect-preserving inset).
    pub fn dst_rect(&self) -> Rect<T> {
        self.dst
    }

    /// The mapping from `dst` space back into `src` space.
    pub fn inverse(&self) -> Self {
        Self::new(self.dst, self.src)
    }

    /// Map a point from source to destination space.
    pub fn map_point(&self, p: Vec2<T>) -> Vec2<T> {
        let x = (p.x - self.src.x1) / self.src.width() * self.dst.width() + self.dst.x1;
        let y = (p.y - self.src.y1) / self.src.height() * self.dst.height() + self.dst.y1;
        Vec2::new(x, y)
    }

    /// Map a rectangle corner by corner.
    pub fn map_rect(&self, r: &Rect<T>) -> Rect<T> {
        Rect::from_corners(self.map_point(r.ul()), self.map_point(r.lr()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rect::{Rectd, Rectf};
    use crate::vector::{Vec2d, Vec2f};

    #[test]
    fn map_point_scales() {
        let m = RectMapping::new(
            Rectf::new(0.0, 0.0, 10.0, 10.0),
            Rectf::new(0.0, 0.0, 100.0, 100.0),
        );
        assert_eq!(m.map_point(Vec2f::new(5.0, 5.0)), Vec2f::new(50.0, 50.0));
        assert_eq!(m.map_point(Vec2f::new(10.0, 0.0)), Vec2f::new(100.0, 0.0));
    }

    #[test]
    fn map_point_translates_and_scales_per_axis() {
        let m = RectMapping::new(
            Rectd::new(10.0, 20.0, 30.0, 30.0),
            Rectd::new(0.0, 0.0, 40.0, 5.0),
        );
        assert_eq!(m.map_point(Vec2d::new(10.0, 20.0)), Vec2d::new(0.0, 0.0));
        assert_eq!(m.map_point(Vec2d::new(20.0, 25.0)), Vec2d::new(20.0, 2.5));
        assert_eq!(m.map_point(Vec2d::new(0.0, 20.0)), Vec2d::new(-20.0, 0.0));
    }

    #[test]
    fn map_rect_maps_corners() {
        let m = RectMapping::new(
            Rectd::new(0.0, 0.0, 10.0, 10.0),
            Rectd::new(100.0, 100.0, 200.0, 300.0),
        );
        assert_eq!(
            m.map_rect(&Rectd::new(2.0, 5.0, 4.0, 10.0)),
            Rectd::new(120.0, 200.0, 140.0, 300.0)
        );
    }

    #[test]
    fn inverse_round_trips() {
        let m = RectMapping::new(
            Rectd::new(0.0, 0.0, 8.0, 4.0),
            Rectd::new(-10.0, 10.0, 22.0, 50.0),
        );
        let p = Vec2d::new(3.0, 1.0);
        assert_eq!(m.inverse().map_point(m.map_point(p)), p);
    }

    #[test]
    fn preserving_aspect_pillarbox() {
        // 1:2 source into 2:1 destination → inset horizontally.
        let m = RectMapping::preserving_aspect(
            Rectf::new(0.0, 0.0, 10.0, 20.0),
            Rectf::new(0.0, 0.0, 200.0, 100.0),
        );
        assert_eq!(m.dst_rect(), Rectf::new(75.0, 0.0, 125.0, 100.0));
        assert_eq!(m.src_rect(), Rectf::new(0.0, 0.0, 10.0, 20.0));
    }

    #[test]
    fn preserving_aspect_letterbox() {
        // 4:1 source into square destination → inset vertically.
        let m = RectMapping::preserving_aspect(
            Rectf::new(0.0, 0.0, 40.0, 10.0),
            Rectf::new(10.0, 10.0, 110.0, 110.0),
        );
        assert_eq!(m.dst_rect(), Rectf::new(10.0, 47.5, 110.0, 72.5));
        assert_eq!(m.map_point(Vec2f::new(40.0, 10.0)), Vec2f::new(110.0, 72.5));
    }

    #[test]
    fn preserving_aspect_same_ratio_is_identity_inset() {
        let m = RectMapping::preserving_aspect(
            Rectf::new(0.0, 0.0, 4.0, 3.0),
            Rectf::new(0.0, 0.0, 400.0, 300.0),
        );
        assert_eq!(m.dst_rect(), Rectf::new(0.0, 0.0, 400.0, 300.0));
    }

    #[test]
    fn zero_extent_source_propagates_non_finite() {
        let m = RectMapping::new(
            Rectf::new(5.0, 0.0, 5.0, 10.0),
            Rectf::new(0.0, 0.0, 100.0, 100.0),
        );
        let p = m.map_point(Vec2f::new(6.0, 5.0));
        assert!(!p.x.is_finite());
        assert_eq!(p.y, 50.0);
    }

    #[test]
    fn try_new_rejects_degenerate_source() {
        let dst = Rectf::new(0.0, 0.0, 1.0, 1.0);
        assert_eq!(
            RectMapping::try_new(Rectf::new(0.0, 0.0, 0.0, 1.0), dst),
            Err(MappingError::DegenerateSource)
        );
        assert_eq!(
            RectMapping::try_new(Rectf::new(0.0, 0.0, 1.0, f32::INFINITY), dst),
            Err(MappingError::DegenerateSource)
        );
        assert!(RectMapping::try_new(Rectf::new(1.0, 1.0, 0.0, 0.0), dst).is_ok());
    }

    #[test]
    fn error_display() {
        extern crate std;
        use std::string::ToString;
        assert_eq!(
            MappingError::DegenerateSource.to_string(),
            "source rectangle has zero or non-finite extent"
        );
    }
}
