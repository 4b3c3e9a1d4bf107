//! Geometry kernel for sector-based 2.5D levels.
//!
//! Layout
//! - `geom`: value types (`Vec4`, `Line`, `Aabb`, `Triangle`, `Polygon`) and the
//!   predicates, intersections, triangulation and splitting built on them.
//! - `heap`: fixed-capacity binary min-heap over a caller comparator.
//! - `sector`: extruded polygons in an index arena plus the per-edge neighbor
//!   tables that stitch them into a traversable map.
//!
//! Everything is pure and synchronous. Tolerances are passed per call; the
//! shorthand methods use the defaults in `cfg`.

pub mod cfg;
pub mod error;
pub mod geom;
pub mod heap;
pub mod sector;

pub use cfg::GeomCfg;
pub use error::{GeomError, Result};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::GeomCfg;
    pub use crate::error::{GeomError, Result};
    pub use crate::geom::{Aabb, Line, Polygon, Triangle, TriangleQuery, Turn, Vec4};
    pub use crate::heap::{nearest_k, MinHeap};
    pub use crate::sector::{Sector, SectorId, SectorMap, WallKind, WallSpan};
}
