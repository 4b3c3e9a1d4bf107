//! Four-component vector used by every other geometry type.
//!
//! - Equality is tolerance based: `a == b` iff `a.distance_squared(b) < VEC_EQ_EPS`.
//!   That relation is not transitive, so `Vec4` implements neither `Eq` nor
//!   `Hash`. Deduplicate with explicit `approx_eq` scans, not hash sets.
//! - Componentwise division by a `Vec4` follows IEEE rules: a zero component
//!   produces `inf`/`NaN` in that slot rather than an error.

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

use nalgebra::{Vector2, Vector3, Vector4};

use crate::cfg::VEC_EQ_EPS;
use crate::error::{GeomError, Result};

#[derive(Clone, Copy, Debug, Default)]
pub struct Vec4 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Vec4 {
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }
    /// Planar point; `z` and `w` are zero.
    #[inline]
    pub const fn xy(x: f64, y: f64) -> Self {
        Self::new(x, y, 0.0, 0.0)
    }
    #[inline]
    pub const fn xyz(x: f64, y: f64, z: f64) -> Self {
        Self::new(x, y, z, 0.0)
    }
    #[inline]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Build from up to four components; missing ones are zero, extras ignored.
    pub fn from_slice(data: &[f64]) -> Self {
        let at = |i: usize| data.get(i).copied().unwrap_or(0.0);
        Self::new(at(0), at(1), at(2), at(3))
    }
    #[inline]
    pub fn as_array(&self) -> [f64; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Exact zero test (no tolerance).
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0 && self.w == 0.0
    }
    #[inline]
    pub fn sum(&self) -> f64 {
        self.x + self.y + self.z + self.w
    }

    /// Dot product over all four components.
    #[inline]
    pub fn dot(&self, other: &Vec4) -> f64 {
        (*self * *other).sum()
    }
    #[inline]
    pub fn dot2(&self, other: &Vec4) -> f64 {
        self.x * other.x + self.y * other.y
    }
    #[inline]
    pub fn dot3(&self, other: &Vec4) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// z-component of the 3D cross product of the planar parts.
    /// Positive when `other` is counter-clockwise from `self`.
    #[inline]
    pub fn cross2(&self, other: &Vec4) -> f64 {
        self.x * other.y - self.y * other.x
    }
    /// 3D cross product; `w` is ignored and the result has `w = 0`.
    #[inline]
    pub fn cross3(&self, other: &Vec4) -> Vec4 {
        Vec4::xyz(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    #[inline]
    pub fn squared_magnitude(&self) -> f64 {
        self.dot(self)
    }
    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.squared_magnitude().sqrt()
    }

    /// Unit vector in the same direction. Fails on zero magnitude.
    pub fn normalized(&self) -> Result<Vec4> {
        let mag = self.magnitude();
        if mag == 0.0 || !mag.is_finite() {
            return Err(GeomError::ZeroLength);
        }
        Ok(*self / mag)
    }

    /// In-place `normalized`. Leaves `self` untouched on failure.
    pub fn normalize(&mut self) -> Result<()> {
        *self = self.normalized()?;
        Ok(())
    }

    #[inline]
    pub fn distance_squared(&self, other: &Vec4) -> f64 {
        (*self - *other).squared_magnitude()
    }

    /// Vector projection of `self` onto `other`: `(self · û) û` with `û = unit(other)`.
    pub fn project(&self, other: &Vec4) -> Result<Vec4> {
        let unit = other.normalized()?;
        Ok(unit * self.dot(&unit))
    }

    #[inline]
    pub fn approx_eq(&self, other: &Vec4, eps: f64) -> bool {
        self.distance_squared(other) < eps
    }

    /// `self + t (other - self)`.
    #[inline]
    pub fn lerp(&self, other: &Vec4, t: f64) -> Vec4 {
        *self + (*other - *self) * t
    }

    #[inline]
    pub fn to_vector2(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
    #[inline]
    pub fn to_vector3(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }
}

impl PartialEq for Vec4 {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other, VEC_EQ_EPS)
    }
}

impl fmt::Display for Vec4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}, {}, {}>", self.x, self.y, self.z, self.w)
    }
}

impl From<Vector2<f64>> for Vec4 {
    fn from(v: Vector2<f64>) -> Self {
        Vec4::xy(v.x, v.y)
    }
}
impl From<Vector3<f64>> for Vec4 {
    fn from(v: Vector3<f64>) -> Self {
        Vec4::xyz(v.x, v.y, v.z)
    }
}
impl From<Vector4<f64>> for Vec4 {
    fn from(v: Vector4<f64>) -> Self {
        Vec4::new(v.x, v.y, v.z, v.w)
    }
}
impl From<Vec4> for Vector4<f64> {
    fn from(v: Vec4) -> Self {
        Vector4::new(v.x, v.y, v.z, v.w)
    }
}

macro_rules! componentwise {
    ($tr:ident, $method:ident, $op:tt) => {
        impl $tr for Vec4 {
            type Output = Vec4;
            #[inline]
            fn $method(self, rhs: Vec4) -> Vec4 {
                Vec4::new(self.x $op rhs.x, self.y $op rhs.y, self.z $op rhs.z, self.w $op rhs.w)
            }
        }
        impl $tr<f64> for Vec4 {
            type Output = Vec4;
            #[inline]
            fn $method(self, rhs: f64) -> Vec4 {
                Vec4::new(self.x $op rhs, self.y $op rhs, self.z $op rhs, self.w $op rhs)
            }
        }
    };
}

componentwise!(Add, add, +);
componentwise!(Sub, sub, -);
componentwise!(Mul, mul, *);
componentwise!(Div, div, /);

impl Neg for Vec4 {
    type Output = Vec4;
    #[inline]
    fn neg(self) -> Vec4 {
        Vec4::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl AddAssign for Vec4 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec4) {
        *self = *self + rhs;
    }
}
impl AddAssign<f64> for Vec4 {
    #[inline]
    fn add_assign(&mut self, rhs: f64) {
        *self = *self + rhs;
    }
}
impl SubAssign for Vec4 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vec4) {
        *self = *self - rhs;
    }
}
impl MulAssign<f64> for Vec4 {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_products() {
        let a = Vec4::xyz(1.0, 0.0, 0.0);
        let b = Vec4::xyz(0.0, 1.0, 0.0);
        assert_eq!(a.dot(&b), 0.0);
        assert_eq!(a.dot(&a), 1.0);
        let w = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(w.dot(&w), 30.0);
        assert_eq!(w.dot3(&w), 14.0);
        assert_eq!(w.dot2(&w), 5.0);
    }

    #[test]
    fn cross_products() {
        let a = Vec4::xyz(1.0, 0.0, 0.0);
        let b = Vec4::xyz(0.0, 1.0, 0.0);
        assert_eq!(a.cross3(&b), Vec4::xyz(0.0, 0.0, 1.0));
        assert_eq!(b.cross3(&a), Vec4::xyz(0.0, 0.0, -1.0));
        let c = Vec4::xyz(2.0, 3.0, 4.0).cross3(&Vec4::xyz(5.0, 6.0, 7.0));
        assert_eq!(c, Vec4::xyz(-3.0, 6.0, -3.0));
        assert_eq!(a.cross2(&b), 1.0);
        assert_eq!(b.cross2(&a), -1.0);
    }

    #[test]
    fn normalize_rejects_zero() {
        assert_eq!(Vec4::zero().normalized(), Err(GeomError::ZeroLength));
        let mut v = Vec4::zero();
        assert!(v.normalize().is_err());
        assert!(v.is_zero());

        let mut u = Vec4::xy(3.0, 4.0);
        u.normalize().unwrap();
        assert!((u.magnitude() - 1.0).abs() < 1e-12);
        assert_eq!(u, Vec4::xy(0.6, 0.8));
    }

    #[test]
    fn projection() {
        let p = Vec4::xy(2.0, 5.0).project(&Vec4::xy(10.0, 0.0)).unwrap();
        assert_eq!(p, Vec4::xy(2.0, 0.0));
        assert!(Vec4::xy(1.0, 1.0).project(&Vec4::zero()).is_err());
    }

    #[test]
    fn tolerance_equality_includes_w() {
        assert_eq!(Vec4::xy(1.0, 1.0), Vec4::xy(1.0 + 1e-4, 1.0));
        assert_ne!(Vec4::xy(1.0, 1.0), Vec4::xy(1.01, 1.0));
        assert_ne!(Vec4::xy(1.0, 1.0), Vec4::new(1.0, 1.0, 0.0, 1.0));
    }

    #[test]
    fn scalar_ops_touch_all_components() {
        let v = Vec4::zero() + 1.0;
        assert_eq!(v.as_array(), [1.0; 4]);
        let mut m = v;
        m += 1.0;
        m *= 2.0;
        assert_eq!(m.sum(), 16.0);
        assert_eq!(-m, Vec4::new(-4.0, -4.0, -4.0, -4.0));
    }

    #[test]
    fn componentwise_division_by_zero_is_inf() {
        let q = Vec4::xy(1.0, 1.0) / Vec4::xy(0.0, 2.0);
        assert!(q.x.is_infinite());
        assert_eq!(q.y, 0.5);
        assert!(q.z.is_nan());
    }

    #[test]
    fn slices_and_interop() {
        let v = Vec4::from_slice(&[1.0, 2.0]);
        assert_eq!(v.as_array(), [1.0, 2.0, 0.0, 0.0]);
        let n: Vector4<f64> = Vec4::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0]).into();
        assert_eq!(n.w, 4.0);
        assert_eq!(Vec4::from(Vector3::new(1.0, 2.0, 3.0)).to_vector3(), Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(format!("{}", Vec4::xy(1.0, 2.0)), "<1, 2, 0, 0>");
    }
}
