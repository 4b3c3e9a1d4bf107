//! Sectors: polygons extruded between a floor and a ceiling height, stitched
//! into a map through per-edge neighbor tables.
//!
//! Why an arena
//! - Neighbors are lookups, not ownership. Storing `SectorId`s into a
//!   `SectorMap` means removing or editing a sector can at worst leave a stale
//!   id (resolved to "wall" on lookup), never a dangling reference.
//!
//! Conventions
//! - Every push, `get_mut` or removal marks the map dirty; neighbor tables are
//!   only refreshed by `recompute_neighbors` (or `ensure_neighbors`).
//! - The map is single-writer. Callers serialize edits and recomputes.
//! - Outlines are expected counter-clockwise seen from +z. Floors then face up
//!   and wall normals point into the sector.

mod adjacency;
mod types;
mod walls;

pub use adjacency::edges_match;
pub use types::{Sector, SectorId, SectorMap};
pub use walls::{WallKind, WallSpan};
