//! Neighbor tables: which sector lies across each edge.
//!
//! Brute force over all edge pairs of all sector pairs, with a bounding-box
//! reject per sector pair. Tables are rebuilt wholesale; there is no
//! incremental update.

use super::types::{SectorId, SectorMap};
use crate::geom::{Aabb, Line};

/// Same endpoints within `eps` squared distance, in either order.
pub fn edges_match(a: &Line, b: &Line, eps: f64) -> bool {
    let same = a.start.distance_squared(&b.start) < eps && a.end.distance_squared(&b.end) < eps;
    let flipped = a.start.distance_squared(&b.end) < eps && a.end.distance_squared(&b.start) < eps;
    same || flipped
}

impl SectorMap {
    /// Rebuild every neighbor table from scratch.
    ///
    /// Edge `i` of sector `s` gets `Some(t)` iff exactly one edge of exactly
    /// one other sector `t` matches it. Zero matches is a wall; several
    /// matches (overlapping sectors, or an edge repeated inside one sector)
    /// are ambiguous and also left as a wall.
    pub fn recompute_neighbors(&mut self) {
        let eps = self.cfg.eps_weld;
        let margin = eps.max(0.0).sqrt();

        let shapes: Vec<(SectorId, Vec<Line>, Option<Aabb>)> = self
            .iter()
            .map(|(id, s)| (id, s.edges().collect(), s.bounds().map(|b| b.inflated(margin))))
            .collect();

        let mut tables: Vec<(SectorId, Vec<Option<SectorId>>)> = Vec::with_capacity(shapes.len());
        let mut portals = 0usize;
        let mut ambiguous = 0usize;
        for (id, edges, bounds) in &shapes {
            let mut table = vec![None; edges.len()];
            for (ei, edge) in edges.iter().enumerate() {
                let mut hits = 0usize;
                let mut found = None;
                for (other, other_edges, other_bounds) in &shapes {
                    if other == id {
                        continue;
                    }
                    if let (Some(a), Some(b)) = (bounds, other_bounds) {
                        if !a.overlaps(b) {
                            continue;
                        }
                    }
                    for oe in other_edges {
                        if edges_match(edge, oe, eps) {
                            hits += 1;
                            found = Some(*other);
                        }
                    }
                }
                match hits {
                    0 => {}
                    1 => {
                        table[ei] = found;
                        portals += 1;
                    }
                    _ => {
                        ambiguous += 1;
                        tracing::warn!(
                            sector = id.0,
                            edge = ei,
                            matches = hits,
                            "edge shared by more than one neighbor edge; treating as wall"
                        );
                    }
                }
            }
            tables.push((*id, table));
        }

        for (id, table) in tables {
            if let Some(Some(sector)) = self.slots.get_mut(id.0) {
                sector.neighbors = table;
            }
        }
        self.dirty = false;
        tracing::debug!(
            sectors = shapes.len(),
            portals,
            ambiguous,
            "recomputed sector neighbors"
        );
    }

    /// Recompute only when something changed since the last run.
    pub fn ensure_neighbors(&mut self) -> bool {
        if self.dirty {
            self.recompute_neighbors();
            true
        } else {
            false
        }
    }
}
