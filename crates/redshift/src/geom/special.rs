//! Canonical shapes used in tests, benchmarks and demos.
//!
//! Purpose
//! - Small explicit constructors with known areas, so tests can check
//!   triangulation and adjacency results against closed forms.
//!
//! References
//! - Regular n-gon with circumradius r: area = (n/2) r² sin(2π/n).
//! - Grid of `cols × rows` square cells: every interior edge is shared by
//!   exactly two cells; `2·cols·rows - cols - rows` shared edges in total.

use super::{Polygon, Vec4};
use crate::cfg::GeomCfg;
use crate::error::Result;
use crate::sector::{Sector, SectorMap};

/// Regular `n`-gon centered at the origin, counter-clockwise, first vertex on +x.
pub fn regular_polygon(n: usize, radius: f64) -> Polygon {
    let step = std::f64::consts::TAU / n as f64;
    Polygon::new(
        (0..n)
            .map(|k| {
                let th = k as f64 * step;
                Vec4::xy(radius * th.cos(), radius * th.sin())
            })
            .collect(),
    )
}

/// Axis-aligned rectangle with corner `(x, y)`, counter-clockwise.
pub fn rect(x: f64, y: f64, w: f64, h: f64) -> Polygon {
    Polygon::from_xy(&[(x, y), (x + w, y), (x + w, y + h), (x, y + h)])
}

/// `cols × rows` unit cells of side `cell`, floor 0 and ceiling `cell`.
///
/// Sector ids run row-major: cell `(c, r)` is `r * cols + c`. Neighbor tables
/// are not computed yet (`needs_recompute()` is true).
pub fn grid_sectors(cols: usize, rows: usize, cell: f64) -> Result<SectorMap> {
    let mut map = SectorMap::new(GeomCfg::default());
    for r in 0..rows {
        for c in 0..cols {
            let walls = rect(c as f64 * cell, r as f64 * cell, cell, cell);
            map.push(Sector::new(walls, 0.0, cell)?);
        }
    }
    Ok(map)
}
