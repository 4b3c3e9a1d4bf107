//! Simple polygon as an ordered vertex ring.
//!
//! Purpose
//! - Sector outlines: planar queries (area, winding, containment), ear-clipping
//!   triangulation for floor/ceiling meshes, and splitting along a cut.
//!
//! Conventions
//! - `points[i] → points[(i + 1) % n]` are the edges; the ring is closed
//!   implicitly, so the first point is never repeated at the end.
//! - Planar queries read `x`/`y`. `triangulate` projects along a caller `up`.
//! - Rings are assumed simple (non-self-intersecting). Nothing validates this;
//!   triangulation of a self-intersecting ring may return `TriangulationStalled`.

mod split;
mod triangulate;

use super::{Aabb, Line, Vec4};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    pub points: Vec<Vec4>,
}

impl Polygon {
    pub fn new(points: Vec<Vec4>) -> Self {
        Self { points }
    }

    /// Convenience for planar rings.
    pub fn from_xy(coords: &[(f64, f64)]) -> Self {
        Self::new(coords.iter().map(|&(x, y)| Vec4::xy(x, y)).collect())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Edge `i` runs from `points[i]` to `points[(i + 1) % n]`; `None` for
    /// `i >= n`.
    pub fn edge(&self, i: usize) -> Option<Line> {
        let n = self.points.len();
        (i < n).then(|| Line::new(self.points[i], self.points[(i + 1) % n]))
    }

    /// All `n` edges, including the closing one.
    pub fn edges(&self) -> impl Iterator<Item = Line> + '_ {
        self.points
            .iter()
            .zip(self.points.iter().cycle().skip(1))
            .map(|(&a, &b)| Line::new(a, b))
    }

    /// Shoelace area over x, y; positive for counter-clockwise rings.
    pub fn signed_area_2d(&self) -> f64 {
        self.edges()
            .map(|e| e.start.cross2(&e.end))
            .sum::<f64>()
            / 2.0
    }
    #[inline]
    pub fn area_2d(&self) -> f64 {
        self.signed_area_2d().abs()
    }
    #[inline]
    pub fn is_counter_clockwise(&self) -> bool {
        self.signed_area_2d() > 0.0
    }

    /// Same ring, opposite winding.
    pub fn reversed_winding(&self) -> Polygon {
        let mut points = self.points.clone();
        points.reverse();
        Polygon::new(points)
    }

    /// Vertex average (not the area centroid). Zero for an empty ring.
    pub fn center(&self) -> Vec4 {
        if self.points.is_empty() {
            return Vec4::zero();
        }
        let sum = self
            .points
            .iter()
            .fold(Vec4::zero(), |acc, p| acc + *p);
        sum / self.points.len() as f64
    }

    #[inline]
    pub fn bounds(&self) -> Option<Aabb> {
        Aabb::from_points(&self.points)
    }

    /// Even-odd containment over x, y.
    ///
    /// Casts a horizontal ray from `pt` to `max(max_x, pt.x) + 1` and counts
    /// edge crossings. An edge counts only when it straddles the ray's y
    /// half-open (`(p1.y > y) != (p2.y > y)`), so a ray through a vertex is
    /// counted once and horizontal edges never count. Points exactly on the
    /// boundary may land either way.
    pub fn point_inside(&self, pt: &Vec4) -> bool {
        if self.points.len() < 3 {
            return false;
        }
        let max_x = self
            .points
            .iter()
            .fold(f64::NEG_INFINITY, |acc, p| acc.max(p.x));
        let ray = Line::new(Vec4::xy(pt.x, pt.y), Vec4::xy(max_x.max(pt.x) + 1.0, pt.y));
        let crossings = self
            .edges()
            .filter(|e| (e.start.y > pt.y) != (e.end.y > pt.y))
            .filter(|e| ray.segment_intersection_2d(e).is_some())
            .count();
        crossings % 2 == 1
    }
}

impl From<Vec<Vec4>> for Polygon {
    fn from(points: Vec<Vec4>) -> Self {
        Polygon::new(points)
    }
}
