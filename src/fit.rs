//! Placement and scaling policy for fit / fill operations.

use num_traits::Float;

/// Where to position a fitted region inside the leftover space.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum Gravity {
    /// Center on both axes.
    #[default]
    Center,
    /// Position by percentage. `(0.0, 0.0)` = top-left, `(1.0, 1.0)` = bottom-right.
    Percentage(f32, f32),
}

impl Gravity {
    /// Pin to the upper-left corner.
    pub const TOP_LEFT: Self = Self::Percentage(0.0, 0.0);

    /// Offset along one axis for `space` pixels of slack.
    ///
    /// Negative slack (content larger than the container) is positioned the
    /// same way, yielding a negative offset.
    pub(crate) fn offset_1d(&self, space: i64, horizontal: bool) -> i64 {
        if space == 0 {
            return 0;
        }
        match self {
            Self::Center => space / 2,
            Self::Percentage(x, y) => {
                let pct = if horizontal { *x } else { *y };
                Float::round(space as f64 * pct.clamp(0.0, 1.0) as f64) as i64
            }
        }
    }
}

/// When a fit or fill is allowed to change the size of a region.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Scaling {
    /// Always scale to touch the target, growing or shrinking as needed.
    Always,
    /// Leave the size alone when it already satisfies the target.
    ///
    /// For a fit, a region that already lies inside the target is only
    /// re-centered. For a fill, a region that already covers the target is
    /// only re-centered. For [`Area::proportional_fit`](crate::Area::proportional_fit),
    /// the result never exceeds the source size.
    #[default]
    WhenNeeded,
}
