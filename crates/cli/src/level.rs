//! JSON level files and the reports written by `stitch` / `triangulate`.
//!
//! Input:
//! `{ "sectors": [ { "points": [[x, y], ...], "floor": f, "ceiling": f } ] }`.
//! Sector ids in every output are positions in that array.

use anyhow::{Context, Result};
use redshift::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelFile {
    pub sectors: Vec<SectorDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectorDef {
    pub points: Vec<[f64; 2]>,
    pub floor: f64,
    pub ceiling: f64,
}

impl LevelFile {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read(path).with_context(|| format!("reading level {}", path.display()))?;
        serde_json::from_slice(&raw).with_context(|| format!("parsing level {}", path.display()))
    }

    /// Build the sector arena; ids follow array order.
    pub fn to_map(&self, cfg: GeomCfg) -> Result<SectorMap> {
        let mut map = SectorMap::new(cfg);
        for (i, def) in self.sectors.iter().enumerate() {
            let walls = Polygon::new(def.points.iter().map(|&[x, y]| Vec4::xy(x, y)).collect());
            let sector = Sector::new(walls, def.floor, def.ceiling).with_context(|| format!("sector {i}"))?;
            map.push(sector);
        }
        Ok(map)
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct WallOut {
    pub edge: usize,
    pub kind: String,
    pub bottom: f64,
    pub top: f64,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct StitchedSector {
    pub id: usize,
    pub neighbors: Vec<Option<usize>>,
    pub walls: Vec<WallOut>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StitchReport {
    pub portals: usize,
    pub sectors: Vec<StitchedSector>,
}

fn kind_name(kind: WallKind) -> &'static str {
    match kind {
        WallKind::Solid => "solid",
        WallKind::Lower => "lower",
        WallKind::Upper => "upper",
    }
}

/// Recompute adjacency and collect neighbor tables plus wall spans.
pub fn stitch(map: &mut SectorMap) -> Result<StitchReport> {
    map.recompute_neighbors();
    let mut sectors = Vec::with_capacity(map.len());
    for (id, sector) in map.iter() {
        let walls = map
            .wall_spans(id)?
            .into_iter()
            .map(|w| WallOut {
                edge: w.edge,
                kind: kind_name(w.kind).to_string(),
                bottom: w.bottom,
                top: w.top,
            })
            .collect();
        sectors.push(StitchedSector {
            id: id.0,
            neighbors: sector.neighbors().iter().map(|n| n.map(|s| s.0)).collect(),
            walls,
        });
    }
    let portals = sectors
        .iter()
        .map(|s| s.neighbors.iter().filter(|n| n.is_some()).count())
        .sum();
    Ok(StitchReport { portals, sectors })
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SectorMesh {
    pub id: usize,
    /// `[x, y, z]` per outline vertex at floor height; ceiling vertices share
    /// x, y and sit at ceiling height.
    pub vertices: Vec<[f64; 3]>,
    pub floor: Vec<usize>,
    pub ceiling: Vec<usize>,
}

/// Floor and ceiling index buffers for every sector.
pub fn triangulate(map: &SectorMap) -> Result<Vec<SectorMesh>> {
    let eps_area = map.cfg().eps_area;
    map.iter()
        .map(|(id, sector)| -> Result<SectorMesh> {
            let floor = sector
                .floor_indices_eps(eps_area)
                .with_context(|| format!("triangulating floor of sector {}", id.0))?;
            let ceiling = sector
                .ceiling_indices_eps(eps_area)
                .with_context(|| format!("triangulating ceiling of sector {}", id.0))?;
            if floor.is_empty() {
                tracing::warn!(sector = id.0, "zero-area sector produced no triangles");
            }
            Ok(SectorMesh {
                id: id.0,
                vertices: sector
                    .walls()
                    .points
                    .iter()
                    .map(|p| [p.x, p.y, sector.floor()])
                    .collect(),
                floor,
                ceiling,
            })
        })
        .collect()
}
