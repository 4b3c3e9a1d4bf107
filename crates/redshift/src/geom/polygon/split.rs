use super::Polygon;
use crate::error::{GeomError, Result};
use crate::geom::Vec4;

impl Polygon {
    /// Index of the vertex nearest to `p` (first one wins on ties).
    pub fn nearest_vertex(&self, p: &Vec4) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (i, v) in self.points.iter().enumerate() {
            let d = p.distance_squared(v);
            if best.map_or(true, |(_, bd)| d < bd) {
                best = Some((i, d));
            }
        }
        best.map(|(i, _)| i)
    }

    /// Cut the ring along a fracture from `p1` to `p2`.
    ///
    /// `p1` and `p2` snap to their nearest vertices `i1 < i2`; both polygons
    /// contain both of them. `inner` is the path of the cut between them and is
    /// shared by both halves, oriented by whichever end lies closer to `i1`:
    ///
    /// - left  = `points[..=i1] ++ cut ++ points[i2..]`
    /// - right = `reverse(cut) ++ points[i1..=i2]`
    ///
    /// Errors
    /// - `TooFewVertices` below three points.
    /// - `DegenerateSplit` when both ends snap to the same vertex, or when
    ///   either half would keep fewer than three vertices (adjacent ends and
    ///   no inner points).
    /// - `AmbiguousSplit` when neither end of `inner` is clearly nearer `i1`.
    pub fn split_at_points(&self, p1: &Vec4, p2: &Vec4, inner: &[Vec4]) -> Result<(Polygon, Polygon)> {
        let n = self.points.len();
        if n < 3 {
            return Err(GeomError::TooFewVertices(n));
        }
        let (Some(a), Some(b)) = (self.nearest_vertex(p1), self.nearest_vertex(p2)) else {
            return Err(GeomError::TooFewVertices(n));
        };
        if a == b {
            return Err(GeomError::DegenerateSplit(a));
        }
        let (i1, i2) = if a < b { (a, b) } else { (b, a) };
        let pts = &self.points;

        let cut: Vec<Vec4> = match (inner.first(), inner.last()) {
            (Some(head), Some(tail)) => {
                let head_near_i1 = pts[i1].distance_squared(head) < pts[i2].distance_squared(head);
                let tail_near_i2 = pts[i2].distance_squared(tail) < pts[i1].distance_squared(tail);
                let head_near_i2 = pts[i1].distance_squared(head) > pts[i2].distance_squared(head);
                let tail_near_i1 = pts[i2].distance_squared(tail) > pts[i1].distance_squared(tail);
                if head_near_i1 && tail_near_i2 {
                    inner.to_vec()
                } else if head_near_i2 && tail_near_i1 {
                    inner.iter().rev().copied().collect()
                } else {
                    return Err(GeomError::AmbiguousSplit);
                }
            }
            _ => Vec::new(),
        };

        let mut left = Vec::with_capacity(n + cut.len());
        left.extend_from_slice(&pts[..=i1]);
        left.extend_from_slice(&cut);
        left.extend_from_slice(&pts[i2..]);

        let mut right = Vec::with_capacity(i2 - i1 + 1 + cut.len());
        right.extend(cut.iter().rev().copied());
        right.extend_from_slice(&pts[i1..=i2]);

        if left.len() < 3 || right.len() < 3 {
            return Err(GeomError::DegenerateSplit(i1));
        }

        tracing::trace!(i1, i2, cut = cut.len(), "split polygon");
        Ok((Polygon::new(left), Polygon::new(right)))
    }
}
