//! Vertical wall quads derived from heights and neighbor tables.

use super::types::{SectorId, SectorMap};
use crate::error::{GeomError, Result};
use crate::geom::{Triangle, Vec4};

/// Role of a wall span along one edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WallKind {
    /// Full height wall on an edge with no neighbor.
    Solid,
    /// Step up from this floor to a higher neighbor floor.
    Lower,
    /// Drop from this ceiling to a lower neighbor ceiling.
    Upper,
}

/// Axis-aligned vertical quad over edge `edge`, from `bottom` to `top`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WallSpan {
    pub edge: usize,
    pub kind: WallKind,
    pub start: Vec4,
    pub end: Vec4,
    pub bottom: f64,
    pub top: f64,
}

impl WallSpan {
    /// `(top_left, bottom_left, bottom_right, top_right)`, left being `start`.
    pub fn corners(&self) -> [Vec4; 4] {
        let (s, e) = (self.start, self.end);
        [
            Vec4::xyz(s.x, s.y, self.top),
            Vec4::xyz(s.x, s.y, self.bottom),
            Vec4::xyz(e.x, e.y, self.bottom),
            Vec4::xyz(e.x, e.y, self.top),
        ]
    }

    /// Unit face normal, horizontal and to the left of `start → end`; for a
    /// counter-clockwise sector that points into the sector.
    pub fn normal(&self) -> Result<Vec4> {
        let [tl, bl, _, tr] = self.corners();
        Triangle::new(tl, tr, bl).normal().normalized()
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }
}

impl SectorMap {
    /// Wall spans of sector `id`, edge by edge.
    ///
    /// Walls give one `Solid` span from floor to ceiling. Portals give a
    /// `Lower` span when the neighbor floor is higher and an `Upper` span when
    /// the neighbor ceiling is lower; a flush portal gives nothing. Zero-height
    /// spans are skipped. Stale neighbor ids (removed sectors) count as walls.
    pub fn wall_spans(&self, id: SectorId) -> Result<Vec<WallSpan>> {
        let sector = self.get(id).ok_or(GeomError::UnknownSector(id.0))?;
        let (floor, ceiling) = (sector.floor(), sector.ceiling());
        let mut spans = Vec::new();
        for (edge, line) in sector.edges().enumerate() {
            let mut push = |kind, bottom: f64, top: f64| {
                if top > bottom {
                    spans.push(WallSpan {
                        edge,
                        kind,
                        start: line.start,
                        end: line.end,
                        bottom,
                        top,
                    });
                }
            };
            match sector.neighbor(edge).and_then(|n| self.get(n)) {
                None => push(WallKind::Solid, floor, ceiling),
                Some(nbr) => {
                    if nbr.floor() > floor {
                        push(WallKind::Lower, floor, nbr.floor().min(ceiling));
                    }
                    if nbr.ceiling() < ceiling {
                        push(WallKind::Upper, nbr.ceiling().max(floor), ceiling);
                    }
                }
            }
        }
        Ok(spans)
    }
}
