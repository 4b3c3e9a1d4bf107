//! Directed line `start → end`, read as an infinite line or a segment
//! depending on the query.

use super::Vec4;
use crate::cfg::{DEFAULT_EPS, LINE_DET_EPS};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub start: Vec4,
    pub end: Vec4,
}

impl Line {
    #[inline]
    pub fn new(start: Vec4, end: Vec4) -> Self {
        Self { start, end }
    }
    #[inline]
    pub fn direction(&self) -> Vec4 {
        self.end - self.start
    }
    #[inline]
    pub fn length_squared(&self) -> f64 {
        self.direction().squared_magnitude()
    }
    /// `start + t (end - start)`.
    #[inline]
    pub fn point_at(&self, t: f64) -> Vec4 {
        self.start.lerp(&self.end, t)
    }

    /// Intersection of the two infinite lines through `self` and `other` (x, y only).
    ///
    /// `None` when `|det| < eps` (parallel or collinear).
    pub fn intersection_2d_eps(&self, other: &Line, eps: f64) -> Option<Vec4> {
        let (a, b, c, d) = (self.start, self.end, other.start, other.end);
        let det = (a.x - b.x) * (c.y - d.y) - (a.y - b.y) * (c.x - d.x);
        if det.abs() < eps {
            return None;
        }
        let ab = a.x * b.y - a.y * b.x;
        let cd = c.x * d.y - c.y * d.x;
        Some(Vec4::xy(
            (ab * (c.x - d.x) - (a.x - b.x) * cd) / det,
            (ab * (c.y - d.y) - (a.y - b.y) * cd) / det,
        ))
    }

    /// Shorthand for `intersection_2d_eps(other, LINE_DET_EPS)`.
    #[inline]
    pub fn intersection_2d(&self, other: &Line) -> Option<Vec4> {
        self.intersection_2d_eps(other, LINE_DET_EPS)
    }

    /// Intersection of the two segments (x, y only), endpoints included.
    ///
    /// Solves `a + t r = c + u s`; the hit counts only for `t, u ∈ [0, 1]`.
    /// Parallel segments (`|r × s| < eps`) report `None`, including collinear
    /// overlaps.
    pub fn segment_intersection_2d_eps(&self, other: &Line, eps: f64) -> Option<Vec4> {
        let r = self.direction();
        let s = other.direction();
        let rxs = r.cross2(&s);
        if rxs.abs() < eps {
            return None;
        }
        let ca = other.start - self.start;
        let t = ca.cross2(&s) / rxs;
        let u = ca.cross2(&r) / rxs;
        if !(0.0..=1.0).contains(&t) || !(0.0..=1.0).contains(&u) {
            return None;
        }
        let hit = self.start + r * t;
        Some(Vec4::xy(hit.x, hit.y))
    }

    /// Shorthand for `segment_intersection_2d_eps(other, LINE_DET_EPS)`.
    #[inline]
    pub fn segment_intersection_2d(&self, other: &Line) -> Option<Vec4> {
        self.segment_intersection_2d_eps(other, LINE_DET_EPS)
    }

    /// Shortest segment connecting the infinite lines `self` and `other`
    /// (P. Bourke's method). The result runs from the closest point on `self`
    /// to the closest point on `other`; its length is the line distance.
    ///
    /// Works on all four components, so 3D callers keep `w = 0`.
    /// `None` when either line has squared length `< eps`, or when the lines
    /// are (near-)parallel: `d2121 d4343 - d4321² < eps`.
    pub fn shortest_connecting_segment_eps(&self, other: &Line, eps: f64) -> Option<Line> {
        let p13 = self.start - other.start;
        let p43 = other.direction();
        let p21 = self.direction();
        if p43.squared_magnitude() < eps || p21.squared_magnitude() < eps {
            return None;
        }
        let d1343 = p13.dot(&p43);
        let d4321 = p43.dot(&p21);
        let d1321 = p13.dot(&p21);
        let d4343 = p43.dot(&p43);
        let d2121 = p21.dot(&p21);

        let denom = d2121 * d4343 - d4321 * d4321;
        if denom.abs() < eps {
            return None;
        }
        let m = (d1343 * d4321 - d1321 * d4343) / denom;
        let n = (d1343 + d4321 * m) / d4343;
        Some(Line::new(self.point_at(m), other.point_at(n)))
    }

    /// Shorthand for `shortest_connecting_segment_eps(other, DEFAULT_EPS)`.
    #[inline]
    pub fn shortest_connecting_segment(&self, other: &Line) -> Option<Line> {
        self.shortest_connecting_segment_eps(other, DEFAULT_EPS)
    }

    /// Perpendicular distance from `pt` to the infinite line (x, y only).
    /// A zero-length line degrades to the distance to `start`.
    pub fn distance_to_point_2d(&self, pt: &Vec4) -> f64 {
        let d = self.direction();
        let len_sq = d.dot2(&d);
        let rel = *pt - self.start;
        if len_sq == 0.0 {
            return rel.dot2(&rel).sqrt();
        }
        d.cross2(&rel).abs() / len_sq.sqrt()
    }

    /// `pt` lies on the infinite line within perpendicular distance `eps`.
    /// `eps = 0` asks for exact collinearity.
    #[inline]
    pub fn point_on_line_eps(&self, pt: &Vec4, eps: f64) -> bool {
        self.distance_to_point_2d(pt) <= eps
    }

    /// Shorthand for `point_on_line_eps(pt, DEFAULT_EPS)`.
    #[inline]
    pub fn point_on_line(&self, pt: &Vec4) -> bool {
        self.point_on_line_eps(pt, DEFAULT_EPS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(ax: f64, ay: f64, bx: f64, by: f64) -> Line {
        Line::new(Vec4::xy(ax, ay), Vec4::xy(bx, by))
    }

    #[test]
    fn infinite_vs_segment_intersection() {
        let a = line(1.0, 101.0, 101.0, 1.0);
        let b = line(1.0, 1.0, 10.0, 10.0);
        assert_eq!(a.intersection_2d(&b), Some(Vec4::xy(51.0, 51.0)));
        assert!(a.segment_intersection_2d(&b).is_none());
        let d = line(0.0, 0.0, 49.0, 49.0);
        assert!(a.segment_intersection_2d(&d).is_none());
    }

    #[test]
    fn segment_cross_and_endpoints() {
        let a = line(0.0, 0.0, 10.0, 10.0);
        let b = line(0.0, 10.0, 10.0, 0.0);
        assert_eq!(a.segment_intersection_2d(&b), Some(Vec4::xy(5.0, 5.0)));
        // Touching at an endpoint counts.
        let c = line(10.0, 10.0, 20.0, 0.0);
        assert_eq!(a.segment_intersection_2d(&c), Some(Vec4::xy(10.0, 10.0)));
    }

    #[test]
    fn parallel_segments_have_no_hit() {
        let a = line(0.0, 0.0, 10.0, 0.0);
        let b = line(0.0, 5.0, 10.0, 5.0);
        assert!(a.segment_intersection_2d(&b).is_none());
        assert!(a.intersection_2d(&b).is_none());
        // Collinear overlap is reported as parallel, not as a NaN point.
        let c = line(5.0, 0.0, 15.0, 0.0);
        assert!(a.segment_intersection_2d(&c).is_none());
    }

    #[test]
    fn zero_length_segment_is_rejected() {
        let a = line(0.0, 0.0, 10.0, 10.0);
        let p = line(5.0, 5.0, 5.0, 5.0);
        assert!(a.segment_intersection_2d(&p).is_none());
        assert!(a.shortest_connecting_segment(&p).is_none());
    }

    #[test]
    fn skew_lines_connecting_segment() {
        // x-axis at z=0 and a y-parallel line at x=2, z=3.
        let a = Line::new(Vec4::xyz(0.0, 0.0, 0.0), Vec4::xyz(1.0, 0.0, 0.0));
        let b = Line::new(Vec4::xyz(2.0, -1.0, 3.0), Vec4::xyz(2.0, 1.0, 3.0));
        let seg = a.shortest_connecting_segment(&b).unwrap();
        assert_eq!(seg.start, Vec4::xyz(2.0, 0.0, 0.0));
        assert_eq!(seg.end, Vec4::xyz(2.0, 0.0, 3.0));
        assert!((seg.length_squared() - 9.0).abs() < 1e-9);
    }

    #[test]
    fn parallel_lines_have_no_connecting_segment() {
        let a = Line::new(Vec4::xyz(0.0, 0.0, 0.0), Vec4::xyz(1.0, 0.0, 0.0));
        let b = Line::new(Vec4::xyz(0.0, 1.0, 0.0), Vec4::xyz(3.0, 1.0, 0.0));
        assert!(a.shortest_connecting_segment(&b).is_none());
    }

    #[test]
    fn point_on_axis_aligned_lines() {
        let vertical = line(2.0, 0.0, 2.0, 10.0);
        assert!(vertical.point_on_line_eps(&Vec4::xy(2.0, 5.0), 0.0));
        assert!(!vertical.point_on_line_eps(&Vec4::xy(2.1, 5.0), 0.0));
        assert!(vertical.point_on_line_eps(&Vec4::xy(2.0 + 1e-7, 5.0), 1e-6));
        let horizontal = line(0.0, 3.0, 10.0, 3.0);
        assert!(horizontal.point_on_line(&Vec4::xy(-4.0, 3.0)));
        assert!(!horizontal.point_on_line(&Vec4::xy(4.0, 3.5)));
    }

    #[test]
    fn distance_to_degenerate_line() {
        let p = line(1.0, 1.0, 1.0, 1.0);
        assert!((p.distance_to_point_2d(&Vec4::xy(4.0, 5.0)) - 5.0).abs() < 1e-12);
    }
}
