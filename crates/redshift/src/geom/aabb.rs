//! Axis-aligned box `(x, y, width, height)` in the plane.

use super::Vec4;
use crate::error::{GeomError, Result};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Aabb {
    #[inline]
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Bounding box of the planar parts of `points`; `None` for no points.
    pub fn from_points<'a, I>(points: I) -> Option<Aabb>
    where
        I: IntoIterator<Item = &'a Vec4>,
    {
        let mut it = points.into_iter();
        let first = it.next()?;
        let (mut lo_x, mut lo_y, mut hi_x, mut hi_y) = (first.x, first.y, first.x, first.y);
        for p in it {
            lo_x = lo_x.min(p.x);
            lo_y = lo_y.min(p.y);
            hi_x = hi_x.max(p.x);
            hi_y = hi_y.max(p.y);
        }
        Some(Aabb::new(lo_x, lo_y, hi_x - lo_x, hi_y - lo_y))
    }

    /// Grow by `margin` on every side.
    #[inline]
    pub fn inflated(&self, margin: f64) -> Aabb {
        Aabb::new(
            self.x - margin,
            self.y - margin,
            self.w + 2.0 * margin,
            self.h + 2.0 * margin,
        )
    }

    #[inline]
    pub fn center(&self) -> Vec4 {
        Vec4::xy(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Separating-axis test. Boxes that merely touch count as overlapping.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        !(self.x + self.w < other.x
            || self.y + self.h < other.y
            || self.x > other.x + other.w
            || self.y > other.y + other.h)
    }

    /// Strict interior test; points on the border are outside.
    pub fn point_inside(&self, px: f64, py: f64) -> bool {
        px > self.x && px < self.x + self.w && py > self.y && py < self.y + self.h
    }

    /// Smallest axis-aligned translation that pushes `other` out of `self`.
    ///
    /// The vector points from `self`'s center towards `other`'s on the axis of
    /// least penetration (ties go to y). Disjoint boxes are `NoOverlap`.
    pub fn push_force(&self, other: &Aabb) -> Result<Vec4> {
        if !self.overlaps(other) {
            return Err(GeomError::NoOverlap);
        }
        let here = self.center();
        let there = other.center();
        let dx = there.x - here.x;
        let dy = there.y - here.y;
        let force_x = (self.w + other.w) / 2.0 - dx.abs();
        let force_y = (self.h + other.h) / 2.0 - dy.abs();
        if force_x.abs() < force_y.abs() {
            Ok(Vec4::xy(force_x.copysign(dx), 0.0))
        } else {
            Ok(Vec4::xy(0.0, force_y.copysign(dy)))
        }
    }
}
