//! Ear clipping in the plane orthogonal to a caller-supplied `up`.
//!
//! Conventions
//! - Vertices are projected onto an orthonormal basis `(e1, e2)` with
//!   `e1 × e2 = up`, so "counter-clockwise" means counter-clockwise seen from
//!   the tip of `up`. The working ring is reordered to be CCW in that view.
//! - Ears carry a cached flag; clipping refreshes only the two neighbors.
//!   Among all ears the one with the shortest diagonal is clipped first.
//! - A vertex blocks an ear if it is reflex or collinear, distinct from the
//!   ear's corners, and lies inside or on the candidate triangle.

use super::Polygon;
use crate::cfg::AREA_EPS;
use crate::error::{GeomError, Result};
use crate::geom::Vec4;

type P2 = (f64, f64);

/// Orientation determinant of `a → b → c`; positive for a left turn.
#[inline]
fn cross(a: P2, b: P2, c: P2) -> f64 {
    (b.0 - a.0) * (c.1 - b.1) - (b.1 - a.1) * (c.0 - b.0)
}

#[inline]
fn dist_sq(a: P2, b: P2) -> f64 {
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    dx * dx + dy * dy
}

/// Inclusive point-in-triangle for a CCW triangle.
#[inline]
fn in_triangle_inclusive(p: P2, a: P2, b: P2, c: P2) -> bool {
    cross(a, b, p) >= 0.0 && cross(b, c, p) >= 0.0 && cross(c, a, p) >= 0.0
}

/// Orthonormal basis of the plane orthogonal to `up` (x, y, z).
fn plane_basis(up: &Vec4) -> Result<(Vec4, Vec4)> {
    let n = Vec4::xyz(up.x, up.y, up.z).normalized()?;
    let helper = if n.x.abs() < 0.9 {
        Vec4::xyz(1.0, 0.0, 0.0)
    } else {
        Vec4::xyz(0.0, 1.0, 0.0)
    };
    let e1 = (helper - n * helper.dot3(&n)).normalized()?;
    let e2 = n.cross3(&e1);
    Ok((e1, e2))
}

/// Working state: ring of original indices plus projected coordinates.
struct Clipper<'a> {
    proj: &'a [P2],
    ring: Vec<usize>,
    ears: Vec<bool>,
    eps: f64,
}

impl<'a> Clipper<'a> {
    fn new(proj: &'a [P2], ring: Vec<usize>, eps: f64) -> Self {
        let mut c = Self {
            proj,
            ears: vec![false; ring.len()],
            ring,
            eps,
        };
        c.refresh_all();
        c
    }

    #[inline]
    fn prev(&self, pos: usize) -> usize {
        (pos + self.ring.len() - 1) % self.ring.len()
    }
    #[inline]
    fn next(&self, pos: usize) -> usize {
        (pos + 1) % self.ring.len()
    }
    #[inline]
    fn at(&self, pos: usize) -> P2 {
        self.proj[self.ring[pos]]
    }

    /// Turn at ring position `pos`.
    fn corner(&self, pos: usize) -> f64 {
        cross(self.at(self.prev(pos)), self.at(pos), self.at(self.next(pos)))
    }

    fn is_convex(&self, pos: usize) -> bool {
        self.corner(pos) > self.eps
    }

    fn is_ear(&self, pos: usize) -> bool {
        if !self.is_convex(pos) {
            return false;
        }
        let (ip, inx) = (self.prev(pos), self.next(pos));
        let (a, b, c) = (self.at(ip), self.at(pos), self.at(inx));
        let corner_sq = self.eps;
        for k in 0..self.ring.len() {
            if k == ip || k == pos || k == inx || self.is_convex(k) {
                continue;
            }
            let p = self.at(k);
            if dist_sq(p, a) <= corner_sq || dist_sq(p, b) <= corner_sq || dist_sq(p, c) <= corner_sq {
                continue;
            }
            if in_triangle_inclusive(p, a, b, c) {
                return false;
            }
        }
        true
    }

    fn refresh_all(&mut self) {
        self.ears = (0..self.ring.len()).map(|k| self.is_ear(k)).collect();
    }

    fn diagonal(&self, pos: usize) -> f64 {
        dist_sq(self.at(self.prev(pos)), self.at(self.next(pos)))
    }

    /// Position minimizing the diagonal among those passing `keep`.
    fn shortest<F: Fn(usize) -> bool>(&self, keep: F) -> Option<usize> {
        (0..self.ring.len())
            .filter(|&k| keep(k))
            .min_by(|&a, &b| self.diagonal(a).total_cmp(&self.diagonal(b)))
    }

    /// `(prev, i, next)` in original indices.
    fn triangle(&self, pos: usize) -> [usize; 3] {
        [
            self.ring[self.prev(pos)],
            self.ring[pos],
            self.ring[self.next(pos)],
        ]
    }

    /// Drop ring position `pos` and refresh the two vertices that now meet.
    fn remove(&mut self, pos: usize) {
        self.ring.remove(pos);
        self.ears.remove(pos);
        let len = self.ring.len();
        if len < 3 {
            return;
        }
        let after = pos % len;
        let before = (after + len - 1) % len;
        self.ears[before] = self.is_ear(before);
        self.ears[after] = self.is_ear(after);
    }
}

impl Polygon {
    /// Shorthand for `triangulate_eps(up, ccw, AREA_EPS)`.
    pub fn triangulate(&self, up: &Vec4, ccw: bool) -> Result<Vec<usize>> {
        self.triangulate_eps(up, ccw, AREA_EPS)
    }

    /// Triangulate the ring viewed along `up`; returns `3k` vertex indices.
    ///
    /// Each triangle is `(prev, i, next)` when `ccw`, else `(prev, next, i)`,
    /// i.e. CCW or CW as seen from `up`, regardless of the input winding.
    /// `eps_area` is the turn determinant below which a corner counts as
    /// collinear. A simple ring with `n` vertices and no collinear corners
    /// yields `n - 2` triangles whose areas sum to the polygon's.
    ///
    /// Errors
    /// - `TooFewVertices` for fewer than three points, `ZeroLength` for a zero
    ///   `up`. A ring with (near-)zero projected area returns no triangles.
    /// - `TriangulationStalled` when no vertex can be clipped at all.
    pub fn triangulate_eps(&self, up: &Vec4, ccw: bool, eps_area: f64) -> Result<Vec<usize>> {
        let n = self.points.len();
        if n < 3 {
            return Err(GeomError::TooFewVertices(n));
        }
        let (e1, e2) = plane_basis(up)?;
        let proj: Vec<P2> = self
            .points
            .iter()
            .map(|p| (p.dot3(&e1), p.dot3(&e2)))
            .collect();

        let twice_area: f64 = (0..n)
            .map(|i| {
                let (a, b) = (proj[i], proj[(i + 1) % n]);
                a.0 * b.1 - a.1 * b.0
            })
            .sum();
        if twice_area.abs() <= eps_area {
            tracing::debug!(vertices = n, "triangulate: zero-area ring");
            return Ok(Vec::new());
        }

        let mut ring: Vec<usize> = (0..n).collect();
        if twice_area < 0.0 {
            ring.reverse();
        }

        let mut clip = Clipper::new(&proj, ring, eps_area);
        let mut out = Vec::with_capacity(3 * (n - 2));
        let mut emit = |[p, i, q]: [usize; 3]| {
            if ccw {
                out.extend_from_slice(&[p, i, q]);
            } else {
                out.extend_from_slice(&[p, q, i]);
            }
        };

        while clip.ring.len() > 3 {
            // Flags of non-neighbors go stale when a blocking reflex corner
            // turns convex; rescan once before giving up on proper ears.
            let mut ear = clip.shortest(|k| clip.ears[k]);
            if ear.is_none() {
                clip.refresh_all();
                ear = clip.shortest(|k| clip.ears[k]);
            }
            if let Some(pos) = ear {
                emit(clip.triangle(pos));
                clip.remove(pos);
                continue;
            }
            // No proper ear. Collinear corners hold no area: drop one, then
            // every cached flag may have changed.
            if let Some(pos) = (0..clip.ring.len()).find(|&k| clip.corner(k).abs() <= eps_area) {
                tracing::debug!(
                    vertex = clip.ring[pos],
                    remaining = clip.ring.len(),
                    "triangulate: dropping collinear vertex"
                );
                clip.ring.remove(pos);
                clip.refresh_all();
                continue;
            }
            // Last resort: clip any convex corner without the containment test.
            if let Some(pos) = clip.shortest(|k| clip.is_convex(k)) {
                tracing::debug!(
                    vertex = clip.ring[pos],
                    remaining = clip.ring.len(),
                    "triangulate: loose ear"
                );
                emit(clip.triangle(pos));
                clip.ring.remove(pos);
                clip.refresh_all();
                continue;
            }
            return Err(GeomError::TriangulationStalled {
                remaining: clip.ring.len(),
            });
        }

        if clip.ring.len() == 3 && clip.is_convex(1) {
            emit(clip.triangle(1));
        }
        Ok(out)
    }
}
