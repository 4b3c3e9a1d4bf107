//! Ordered triangle `(a, b, c)`: geometry plus a signed orientation.
//!
//! Collinear triples are degenerate: determinant checks reject them
//! (`None`/`false`) before any division.

use nalgebra::{Matrix2, Vector2};

use super::{Line, Vec4};
use crate::cfg::DEFAULT_EPS;

/// Turn direction of `a → b → c` in the plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    Right,
    Collinear,
    Left,
}

impl Turn {
    /// `+1` left (CCW), `0` collinear, `-1` right (CW).
    #[inline]
    pub fn signum(self) -> i32 {
        match self {
            Turn::Right => -1,
            Turn::Collinear => 0,
            Turn::Left => 1,
        }
    }
}

/// Options for `Triangle::intersection`.
#[derive(Clone, Copy, Debug)]
pub struct TriangleQuery {
    /// Treat the line as the segment `start..=end` (reject `t ∉ [0, 1]`).
    pub segment: bool,
    /// Return the plane hit without testing triangle membership.
    pub plane_only: bool,
    /// Relative threshold for the parallel test and the barycentric
    /// determinant; both are scaled by the lengths involved.
    pub eps: f64,
}

impl Default for TriangleQuery {
    fn default() -> Self {
        Self {
            segment: false,
            plane_only: false,
            eps: DEFAULT_EPS,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub a: Vec4,
    pub b: Vec4,
    pub c: Vec4,
}

impl Triangle {
    #[inline]
    pub fn new(a: Vec4, b: Vec4, c: Vec4) -> Self {
        Self { a, b, c }
    }

    /// Signed area of the planar triangle; positive for CCW.
    #[inline]
    pub fn signed_area_2d(&self) -> f64 {
        (self.b - self.a).cross2(&(self.c - self.a)) / 2.0
    }
    #[inline]
    pub fn area_2d(&self) -> f64 {
        self.signed_area_2d().abs()
    }
    #[inline]
    pub fn centroid(&self) -> Vec4 {
        (self.a + self.b + self.c) / 3.0
    }

    /// Sign of the orientation determinant of `(a, b, c)` over x, y.
    ///
    /// # Panics
    /// If the determinant is NaN (non-finite input); that is a caller bug.
    pub fn turn(&self) -> Turn {
        let (a, b, c) = (self.a, self.b, self.c);
        let det = (b.x * c.y - b.y * c.x) - a.x * (c.y - b.y) + a.y * (c.x - b.x);
        if det < 0.0 {
            Turn::Right
        } else if det > 0.0 {
            Turn::Left
        } else if det == 0.0 {
            Turn::Collinear
        } else {
            panic!("orientation determinant is NaN for triangle {:?}", self);
        }
    }

    #[inline]
    pub fn left_turn(&self) -> bool {
        self.turn() == Turn::Left
    }

    /// Unnormalized face normal `(b - a) × (c - a)`.
    #[inline]
    pub fn normal(&self) -> Vec4 {
        (self.b - self.a).cross3(&(self.c - self.a))
    }

    /// Line (or segment) vs. triangle in 3D.
    ///
    /// Solves `N·(a - P1) / N·(P2 - P1)` for the plane parameter `t`. `None`
    /// when the line is parallel to the plane (`|N·d| <= eps·|N|·|d|`), when `query.segment` and
    /// `t ∉ [0, 1]`, or (unless `query.plane_only`) when the hit is outside the
    /// triangle.
    pub fn intersection(&self, line: &Line, query: TriangleQuery) -> Option<Vec4> {
        let n = self.normal();
        let dir = line.direction();
        let denom = n.dot3(&dir);
        if denom.abs() <= query.eps * (n.dot3(&n) * dir.dot3(&dir)).sqrt() {
            return None;
        }
        let t = n.dot3(&(self.a - line.start)) / denom;
        if query.segment && !(0.0..=1.0).contains(&t) {
            return None;
        }
        let p = line.point_at(t);
        if query.plane_only || self.point_in_triangle_3d_eps(&p, query.eps) {
            Some(p)
        } else {
            None
        }
    }

    /// Delaunay in-circle test over x, y.
    ///
    /// The raw determinant is positive for interior points of a CCW triangle;
    /// its sign is read against `left_turn()` so both windings give the same
    /// geometric answer. Points on the circle are outside.
    pub fn point_in_circumcircle_2d(&self, d: &Vec4) -> bool {
        let da = self.a - *d;
        let db = self.b - *d;
        let dc = self.c - *d;
        let (q, r, s) = (da.x, da.y, da.x * da.x + da.y * da.y);
        let (t, u, v) = (db.x, db.y, db.x * db.x + db.y * db.y);
        let (w, x, y) = (dc.x, dc.y, dc.x * dc.x + dc.y * dc.y);
        let det = q * (u * y - v * x) - r * (t * y - v * w) + s * (t * x - u * w);
        if self.left_turn() {
            det > 0.0
        } else {
            det < 0.0
        }
    }

    /// Barycentric membership in the triangle's own plane basis `r = b - a`,
    /// `s = c - a` (x, y, z). Points off the plane are tested by their
    /// projection. Boundary points are inside.
    ///
    /// Degenerate triangles contain nothing. `det(Gram) = |r|²|s|² sin²θ`, so
    /// the test `det <= eps·|r|²|s|²` bounds the corner angle at `a` and does
    /// not depend on the triangle's size.
    pub fn point_in_triangle_3d_eps(&self, p: &Vec4, eps: f64) -> bool {
        let r = self.b - self.a;
        let s = self.c - self.a;
        let (rr, ss) = (r.dot3(&r), s.dot3(&s));
        let gram = Matrix2::new(rr, r.dot3(&s), r.dot3(&s), ss);
        if gram.determinant().abs() <= eps * rr * ss {
            return false;
        }
        let Some(inv) = gram.try_inverse() else {
            return false;
        };
        let q = *p - self.a;
        let uv = inv * Vector2::new(r.dot3(&q), s.dot3(&q));
        let (u, v) = (uv.x, uv.y);
        u >= 0.0 && v >= 0.0 && u <= 1.0 && v <= 1.0 && u + v <= 1.0
    }

    /// Shorthand for `point_in_triangle_3d_eps(p, DEFAULT_EPS)`.
    #[inline]
    pub fn point_in_triangle_3d(&self, p: &Vec4) -> bool {
        self.point_in_triangle_3d_eps(p, DEFAULT_EPS)
    }

    /// Barycentric test over x, y (Ericson, Real-Time Collision Detection).
    ///
    /// With `u` weighting `c - a` and `v` weighting `b - a`, the accepted region
    /// is `u ≥ 0, v ≥ 0, u + v < 1`: the two edges through `a` are inside, the
    /// edge `bc` is outside. Zero-area triangles contain nothing.
    pub fn point_in_triangle_2d(&self, p: &Vec4) -> bool {
        let v0 = self.c - self.a;
        let v1 = self.b - self.a;
        let v2 = *p - self.a;

        let dot00 = v0.dot2(&v0);
        let dot01 = v0.dot2(&v1);
        let dot02 = v0.dot2(&v2);
        let dot11 = v1.dot2(&v1);
        let dot12 = v1.dot2(&v2);

        let denom = dot00 * dot11 - dot01 * dot01;
        if denom == 0.0 || !denom.is_finite() {
            return false;
        }
        let u = (dot11 * dot02 - dot01 * dot12) / denom;
        let v = (dot00 * dot12 - dot01 * dot02) / denom;
        u >= 0.0 && v >= 0.0 && u + v < 1.0
    }
}
