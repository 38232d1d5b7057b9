//! Pixel areas, continuous rects, rect mapping, and clipped blit geometry.
//!
//! Pure geometry: no pixel operations, `no_std` compatible. The optional
//! `svg` feature renders a blit as an SVG diagram for debugging.
//!
//! # Modules
//!
//! - [`area`]: [`Area`], integer pixel regions with half-open bounds
//! - [`rect`]: [`Rect`], continuous rectangles with closed bounds
//! - [`mapping`]: [`RectMapping`], axis-aligned maps between rect spaces
//! - [`blit`]: Clipping a copy between two pixel buffers
//! - [`fit`]: Placement and scaling policy for fit / fill
//! - [`vector`], [`scalar`]: Supporting math types
//!
//! [`Rect::transform`] takes a [`kurbo::Affine`], re-exported as [`Affine`].
//!
//! # Example
//!
//! ```
//! use zenregion::{Area, Rectf, clipped_scaled_rects};
//!
//! // Draw a 100×100 image at 2× with its top-left quarter hanging off the canvas.
//! let blit = clipped_scaled_rects(
//!     &Area::new(0, 0, 100, 100),
//!     &Rectf::new(0.0, 0.0, 100.0, 100.0),
//!     &Area::new(0, 0, 200, 200),
//!     &Area::new(-50, -50, 150, 150),
//! );
//! assert_eq!(blit.dst, Area::new(0, 0, 150, 150));
//! assert_eq!(blit.src, Rectf::new(25.0, 25.0, 100.0, 100.0));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod area;
pub mod blit;
pub mod fit;
pub mod mapping;
pub mod rect;
pub mod scalar;
pub mod vector;

#[cfg(feature = "svg")]
pub mod svg;

pub use area::Area;
pub use blit::{ClippedBlit, ClippedScaledBlit, clipped_scaled_rects, clipped_src_dst};
pub use fit::{Gravity, Scaling};
pub use kurbo::Affine;
pub use mapping::{MappingError, RectMapping};
pub use rect::{Rect, Rectd, Rectf};
pub use scalar::Scalar;
pub use vector::{IVec2, Vec2, Vec2d, Vec2f};
