//! Stitch a small three-room level and print what a mesher would consume.
//!
//! Usage:
//!   cargo run -p redshift --example stitch_level
//!
//! Prints per sector: neighbor table, wall spans by kind, floor triangle count,
//! and the two sectors nearest to a probe point.

use redshift::geom::special::rect;
use redshift::prelude::*;

fn main() -> Result<()> {
    let mut map = SectorMap::new(GeomCfg::default());
    // Hall, a raised alcove to its right, and a low corridor above it.
    let hall = map.push(Sector::new(rect(0.0, 0.0, 4.0, 4.0), 0.0, 3.0)?);
    let alcove = map.push(Sector::new(rect(4.0, 1.0, 2.0, 2.0), 0.5, 2.5)?);
    let corridor = map.push(Sector::new(
        Polygon::from_xy(&[(0.0, 4.0), (4.0, 4.0), (4.0, 6.0), (2.0, 7.0), (0.0, 6.0)]),
        0.0,
        2.0,
    )?);

    // The alcove touches the hall's right side only partially: no shared edge yet.
    map.recompute_neighbors();
    println!(
        "before split: alcove left edge -> {:?}",
        map.get(alcove).and_then(|s| s.neighbor(3))
    );

    // Split the hall's right wall so the alcove's left edge has a twin.
    if let Some(s) = map.get_mut(hall) {
        let walls = Polygon::from_xy(&[(0.0, 0.0), (4.0, 0.0), (4.0, 1.0), (4.0, 3.0), (4.0, 4.0), (0.0, 4.0)]);
        s.set_walls(walls)?;
    }
    map.ensure_neighbors();
    println!(
        "after split: alcove left edge -> {:?}, corridor bottom edge -> {:?}",
        map.get(alcove).and_then(|s| s.neighbor(3)),
        map.get(corridor).and_then(|s| s.neighbor(0)),
    );

    for (id, sector) in map.iter() {
        let spans = map.wall_spans(id)?;
        let count = |k: WallKind| spans.iter().filter(|w| w.kind == k).count();
        println!(
            "sector {:>2}: neighbors={:?} solid={} lower={} upper={} floor_tris={}",
            id.0,
            sector.neighbors().iter().map(|n| n.map(|s| s.0)).collect::<Vec<_>>(),
            count(WallKind::Solid),
            count(WallKind::Lower),
            count(WallKind::Upper),
            sector.floor_indices()?.len() / 3,
        );
    }

    let probe = Vec4::xy(3.5, 3.5);
    let nearest = nearest_k(map.iter().map(|(id, s)| (id, s.center())), 2, |a, b| {
        a.1.distance_squared(&probe).total_cmp(&b.1.distance_squared(&probe))
    });
    println!(
        "nearest to {probe}: {:?}",
        nearest.iter().map(|(id, _)| id.0).collect::<Vec<_>>()
    );
    Ok(())
}
