//! Value-type geometry: vectors, lines, boxes, triangles and polygons.
//!
//! Conventions
//! - All types are plain `Copy`/`Clone` values created per call; nothing here
//!   holds shared state.
//! - 2D routines read `x`/`y` only. 3D routines ignore `w` unless documented
//!   otherwise; `Vec4` arithmetic, magnitude and equality always include it.
//! - Degenerate input (zero-length lines, zero-area triangles, parallel lines)
//!   yields `None`/`false` from queries, never NaN or Inf.

mod aabb;
mod line;
pub mod polygon;
pub mod rand;
pub mod special;
mod triangle;
mod vec4;

pub use aabb::Aabb;
pub use line::Line;
pub use polygon::Polygon;
pub use triangle::{Triangle, TriangleQuery, Turn};
pub use vec4::Vec4;

#[cfg(test)]
mod tests;
