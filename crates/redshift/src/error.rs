//! Errors surfaced by the kernel.
//!
//! Query-style operations (intersections, point tests) report "no result" with
//! `Option`. The variants here cover operations without a sensible fallback and
//! caller precondition violations.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeomError {
    /// Normalizing or projecting onto a zero-magnitude vector.
    #[error("cannot normalize a zero-length vector")]
    ZeroLength,
    /// Push force requested for boxes that do not overlap.
    #[error("boxes do not overlap; no push vector exists")]
    NoOverlap,
    /// A polygon operation needs at least three vertices.
    #[error("polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),
    /// Inner split points match neither orientation unambiguously.
    #[error("ambiguous split direction: inner points do not line up with the split vertices")]
    AmbiguousSplit,
    /// Split ends snapped to the same vertex, or to neighbors with no path
    /// between them; one half would have fewer than three vertices.
    #[error("split at vertex {0} leaves a half with fewer than three vertices")]
    DegenerateSplit(usize),
    /// Push into a heap that already holds `capacity` items.
    #[error("heap is full (capacity {capacity})")]
    HeapFull { capacity: usize },
    /// Ear clipping found neither an ear nor a removable vertex.
    #[error("triangulation stalled with {remaining} vertices left (self-intersecting ring?)")]
    TriangulationStalled { remaining: usize },
    /// Sector floor lies above its ceiling.
    #[error("floor height {floor} is above ceiling height {ceiling}")]
    InvalidHeights { floor: f64, ceiling: f64 },
    /// Sector id outside the arena.
    #[error("unknown sector id {0}")]
    UnknownSector(usize),
}

pub type Result<T> = std::result::Result<T, GeomError>;
