//! Clipping for copies between two pixel buffers.
//!
//! Given the bounds of a source and a destination surface, these functions
//! work out which part of a requested copy can actually happen without
//! reading or writing outside either buffer, keeping the two sides
//! consistent with each other. No pixel memory is touched.
//!
//! # Example
//!
//! ```
//! use zenregion::{Area, IVec2, clipped_src_dst};
//!
//! let blit = clipped_src_dst(
//!     &Area::new(0, 0, 100, 100),   // source surface
//!     &Area::new(-10, -10, 50, 50), // requested source region
//!     &Area::new(0, 0, 200, 200),   // destination surface
//!     IVec2::new(0, 0),             // where the requested region's corner goes
//! );
//! assert_eq!(blit.src, Area::new(0, 0, 50, 50));
//! assert_eq!(blit.dst_lt, IVec2::new(10, 10));
//! ```

use log::{debug, trace};

use crate::area::Area;
use crate::mapping::RectMapping;
use crate::rect::Rectf;
use crate::vector::IVec2;

/// Result of [`clipped_src_dst`]: a same-size copy.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ClippedBlit {
    /// Source pixels to read, inside the source surface.
    pub src: Area,
    /// Destination position of `src`'s upper-left pixel.
    pub dst_lt: IVec2,
}

impl ClippedBlit {
    /// Destination pixels written, inside the destination surface.
    pub fn dst_area(&self) -> Area {
        self.src.moved_ul_to(self.dst_lt)
    }

    /// True when nothing is left to copy.
    pub fn is_empty(&self) -> bool {
        self.src.is_empty()
    }
}

/// Result of [`clipped_scaled_rects`]: a resampling copy.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ClippedScaledBlit {
    /// Continuous source region to sample from.
    pub src: Rectf,
    /// Whole destination pixels to write, inside the destination surface.
    pub dst: Area,
}

impl ClippedScaledBlit {
    /// True when nothing is left to copy.
    pub fn is_empty(&self) -> bool {
        self.dst.is_empty()
    }
}

/// Clip a same-size copy of `src_area` to position `dst_lt` against both surfaces.
///
/// The returned source region lies inside `src_bounds`, and placed at the
/// returned `dst_lt` it lies inside `dst_bounds`. Every pixel that survives
/// keeps the source→destination offset of the original request. When the
/// copy misses either surface, the result is empty; check
/// [`ClippedBlit::is_empty`].
pub fn clipped_src_dst(
    src_bounds: &Area,
    src_area: &Area,
    dst_bounds: &Area,
    dst_lt: IVec2,
) -> ClippedBlit {
    let mut clipped = src_area.clipped_by(src_bounds);
    let mut new_dst_lt = dst_lt.saturating_add(clipped.ul().saturating_sub(src_area.ul()));
    let old_src_lt = clipped.ul();

    // Over to destination space, clip there.
    clipped.move_ul_to(new_dst_lt);
    let old_clipped_dst = clipped;
    clipped.clip_by(dst_bounds);
    new_dst_lt = clipped.ul();

    // Back to source space, shifted by whatever the destination clip removed.
    clipped.offset(old_src_lt.saturating_sub(old_clipped_dst.ul()));
    clipped.clip_by(src_bounds);

    trace!(
        "clipped_src_dst: {src_area} @ {dst_lt} -> {clipped} @ {new_dst_lt} (dst clip {old_clipped_dst})"
    );
    if clipped.is_empty() {
        debug!("blit of {src_area} to {dst_lt} clipped away entirely");
    }

    ClippedBlit {
        src: clipped,
        dst_lt: new_dst_lt,
    }
}

/// Clip a scaling copy of `src_rect` into `dst_area` against both surfaces.
///
/// The destination is clipped first and mapped back into source space, the
/// source is clipped and mapped forward again, and the destination is then
/// snapped to whole pixels with [`Rectf::interior_area`]. The final source
/// region is re-derived from that whole-pixel destination so that the two
/// stay in the same proportion and clipped edges sample the right texels.
///
/// The last step clips the source once more against `src_bounds`. After two
/// round trips through floating point this can trim a sliver the mapping
/// did not account for, so the returned pair is proportional only up to that
/// rounding. Because [`Rectf::interior_area`] leaves integral edges where
/// they are, the snapped destination rarely reaches past the clipped source,
/// and this re-clip is usually a no-op.
pub fn clipped_scaled_rects(
    src_bounds: &Area,
    src_rect: &Rectf,
    dst_bounds: &Area,
    dst_area: &Area,
) -> ClippedScaledBlit {
    let src_bounds_f = Rectf::from(*src_bounds);
    let dst_area_f = Rectf::from(*dst_area);
    let to_src = RectMapping::new(dst_area_f, *src_rect);
    let to_dst = RectMapping::new(*src_rect, dst_area_f);

    let clipped_dst = dst_area.clipped_by(dst_bounds);
    let mut new_src = to_src.map_rect(&Rectf::from(clipped_dst));
    new_src.clip_by(&src_bounds_f);
    let new_dst = to_dst.map_rect(&new_src);
    trace!("clipped_scaled_rects: dst {clipped_dst} -> src {new_src} -> dst {new_dst}");

    let mut dst = new_dst.interior_area();
    dst.clip_by(dst_bounds);

    let mut src = to_src.map_rect(&Rectf::from(dst));
    src.clip_by(&src_bounds_f);

    trace!("clipped_scaled_rects: {src_rect} -> {dst_area} became {src} -> {dst}");
    if dst.is_empty() {
        debug!("scaled blit of {src_rect} to {dst_area} clipped away entirely");
    }

    ClippedScaledBlit { src, dst }
}
