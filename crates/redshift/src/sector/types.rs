//! Sector and arena types.

use crate::cfg::{GeomCfg, AREA_EPS};
use crate::error::{GeomError, Result};
use crate::geom::{Aabb, Line, Polygon, Vec4};

/// Index of a sector inside its `SectorMap`. Stable for the map's lifetime:
/// removing a sector leaves a hole instead of shifting later ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SectorId(pub usize);

/// Vertical extrusion of a polygon between `floor` and `ceiling`.
///
/// `neighbors()[i]` names the sector across edge `i` (vertex `i` to `i + 1`),
/// or `None` for a solid wall. The table is owned by the enclosing
/// `SectorMap` and only changes in `SectorMap::recompute_neighbors`.
#[derive(Clone, Debug)]
pub struct Sector {
    walls: Polygon,
    floor: f64,
    ceiling: f64,
    pub(super) neighbors: Vec<Option<SectorId>>,
}

fn check_heights(floor: f64, ceiling: f64) -> Result<()> {
    if floor.is_nan() || ceiling.is_nan() || floor > ceiling {
        return Err(GeomError::InvalidHeights { floor, ceiling });
    }
    Ok(())
}

impl Sector {
    pub fn new(walls: Polygon, floor: f64, ceiling: f64) -> Result<Self> {
        if walls.len() < 3 {
            return Err(GeomError::TooFewVertices(walls.len()));
        }
        check_heights(floor, ceiling)?;
        let n = walls.len();
        Ok(Self {
            walls,
            floor,
            ceiling,
            neighbors: vec![None; n],
        })
    }

    #[inline]
    pub fn walls(&self) -> &Polygon {
        &self.walls
    }
    #[inline]
    pub fn floor(&self) -> f64 {
        self.floor
    }
    #[inline]
    pub fn ceiling(&self) -> f64 {
        self.ceiling
    }

    /// Replace the outline. The neighbor table is reset to all walls.
    pub fn set_walls(&mut self, walls: Polygon) -> Result<()> {
        if walls.len() < 3 {
            return Err(GeomError::TooFewVertices(walls.len()));
        }
        self.neighbors = vec![None; walls.len()];
        self.walls = walls;
        Ok(())
    }

    pub fn set_heights(&mut self, floor: f64, ceiling: f64) -> Result<()> {
        check_heights(floor, ceiling)?;
        self.floor = floor;
        self.ceiling = ceiling;
        Ok(())
    }

    #[inline]
    pub fn neighbors(&self) -> &[Option<SectorId>] {
        &self.neighbors
    }
    /// Sector across edge `edge`; `None` for walls and out-of-range edges.
    #[inline]
    pub fn neighbor(&self, edge: usize) -> Option<SectorId> {
        self.neighbors.get(edge).copied().flatten()
    }

    /// Vertex average of the outline.
    #[inline]
    pub fn center(&self) -> Vec4 {
        self.walls.center()
    }
    pub fn edges(&self) -> impl Iterator<Item = Line> + '_ {
        self.walls.edges()
    }
    #[inline]
    pub fn bounds(&self) -> Option<Aabb> {
        self.walls.bounds()
    }

    /// Floor mesh indices, front faces pointing up (+z).
    pub fn floor_indices_eps(&self, eps_area: f64) -> Result<Vec<usize>> {
        self.walls
            .triangulate_eps(&Vec4::xyz(0.0, 0.0, 1.0), true, eps_area)
    }
    /// Ceiling mesh indices, front faces pointing down (-z).
    pub fn ceiling_indices_eps(&self, eps_area: f64) -> Result<Vec<usize>> {
        self.walls
            .triangulate_eps(&Vec4::xyz(0.0, 0.0, -1.0), true, eps_area)
    }
    #[inline]
    pub fn floor_indices(&self) -> Result<Vec<usize>> {
        self.floor_indices_eps(AREA_EPS)
    }
    #[inline]
    pub fn ceiling_indices(&self) -> Result<Vec<usize>> {
        self.ceiling_indices_eps(AREA_EPS)
    }
}

/// Index arena of sectors plus the tolerances used to stitch them.
#[derive(Clone, Debug, Default)]
pub struct SectorMap {
    pub(super) slots: Vec<Option<Sector>>,
    pub(super) cfg: GeomCfg,
    pub(super) dirty: bool,
}

impl SectorMap {
    pub fn new(cfg: GeomCfg) -> Self {
        Self {
            slots: Vec::new(),
            cfg,
            dirty: false,
        }
    }

    #[inline]
    pub fn cfg(&self) -> &GeomCfg {
        &self.cfg
    }

    /// Add a sector; its neighbor table stays empty until the next recompute.
    pub fn push(&mut self, sector: Sector) -> SectorId {
        self.slots.push(Some(sector));
        self.dirty = true;
        SectorId(self.slots.len() - 1)
    }

    pub fn get(&self, id: SectorId) -> Option<&Sector> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    /// Mutable access for edits. Marks the map as needing a recompute.
    pub fn get_mut(&mut self, id: SectorId) -> Option<&mut Sector> {
        let slot = self.slots.get_mut(id.0).and_then(Option::as_mut);
        if slot.is_some() {
            self.dirty = true;
        }
        slot
    }

    /// Take a sector out. Its id is never reused; other sectors keep stale
    /// references to it until the next recompute.
    pub fn remove(&mut self, id: SectorId) -> Result<Sector> {
        let sector = self
            .slots
            .get_mut(id.0)
            .and_then(Option::take)
            .ok_or(GeomError::UnknownSector(id.0))?;
        self.dirty = true;
        Ok(sector)
    }

    /// Live sectors in id order.
    pub fn iter(&self) -> impl Iterator<Item = (SectorId, &Sector)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.as_ref().map(|s| (SectorId(i), s)))
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True after any push, edit or removal since the last recompute.
    #[inline]
    pub fn needs_recompute(&self) -> bool {
        self.dirty
    }
}
