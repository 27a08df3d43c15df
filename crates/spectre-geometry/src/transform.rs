// ─────────────────────────────────────────────────────────────────────
// Spectre Tiling Kernel — Points and Affine Transforms
// ─────────────────────────────────────────────────────────────────────
//! 2D points and 2×3 affine transforms.
//!
//! A transform is stored row-major as
//!
//! ```text
//! | a  b  tx |
//! | c  d  ty |
//! ```
//!
//! Inside the tiling every linear part is a rotation by a multiple of 30°,
//! optionally composed with a mirror, so `det = ±1`.

use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

use crate::orientation::unit_step;

/// Absolute tolerance for transform comparisons.
pub const TRANSFORM_EPS: f64 = 1e-9;

/// A point in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        (self - other).norm()
    }

    #[inline]
    pub fn norm(self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn approx_eq(self, other: Point, eps: f64) -> bool {
        (self.x - other.x).abs() <= eps && (self.y - other.y).abs() <= eps
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, k: f64) -> Point {
        Point::new(self.x * k, self.y * k)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Affine map `p ↦ L·p + t`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub tx: f64,
    pub ty: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Transform = Transform::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);

    /// Reflection across the y axis, `diag(-1, 1)`.
    pub const MIRROR_X: Transform = Transform::new(-1.0, 0.0, 0.0, 1.0, 0.0, 0.0);

    /// Reflection across the x axis, `diag(1, -1)`.
    pub const MIRROR_Y: Transform = Transform::new(1.0, 0.0, 0.0, -1.0, 0.0, 0.0);

    #[inline]
    pub const fn new(a: f64, b: f64, c: f64, d: f64, tx: f64, ty: f64) -> Self {
        Self { a, b, c, d, tx, ty }
    }

    #[inline]
    pub const fn translation(tx: f64, ty: f64) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, tx, ty)
    }

    /// Same linear part, translation replaced.
    #[inline]
    pub fn with_translation(self, tx: f64, ty: f64) -> Self {
        Self { tx, ty, ..self }
    }

    /// `self ∘ inner`: apply `inner` first, then `self`.
    #[inline]
    pub fn compose(&self, inner: &Transform) -> Transform {
        Transform {
            a: self.a * inner.a + self.b * inner.c,
            b: self.a * inner.b + self.b * inner.d,
            c: self.c * inner.a + self.d * inner.c,
            d: self.c * inner.b + self.d * inner.d,
            tx: self.a * inner.tx + self.b * inner.ty + self.tx,
            ty: self.c * inner.tx + self.d * inner.ty + self.ty,
        }
    }

    #[inline]
    pub fn apply(&self, p: Point) -> Point {
        Point::new(
            self.a * p.x + self.b * p.y + self.tx,
            self.c * p.x + self.d * p.y + self.ty,
        )
    }

    /// Linear part only (translation dropped).
    #[inline]
    pub fn linear(&self) -> Transform {
        self.with_translation(0.0, 0.0)
    }

    #[inline]
    pub fn translation_part(&self) -> Point {
        Point::new(self.tx, self.ty)
    }

    #[inline]
    pub fn determinant(&self) -> f64 {
        self.a * self.d - self.b * self.c
    }

    /// True when the linear part reverses orientation.
    #[inline]
    pub fn is_mirrored(&self) -> bool {
        self.determinant() < 0.0
    }

    /// Uniformly scale the whole placement about the origin.
    ///
    /// Equivalent to building the tiling with both edge lengths
    /// multiplied by `factor`: the linear part is unchanged and only the
    /// translation grows. Prototile vertices must be scaled separately.
    pub fn scaled(&self, factor: f64) -> Transform {
        self.with_translation(self.tx * factor, self.ty * factor)
    }

    pub fn approx_eq(&self, other: &Transform, eps: f64) -> bool {
        [
            self.a - other.a,
            self.b - other.b,
            self.c - other.c,
            self.d - other.d,
            self.tx - other.tx,
            self.ty - other.ty,
        ]
        .iter()
        .all(|v| v.abs() <= eps)
    }

    /// Row-major `[[a, b, tx], [c, d, ty]]`.
    pub fn to_rows(&self) -> [[f64; 3]; 2] {
        [[self.a, self.b, self.tx], [self.c, self.d, self.ty]]
    }
}

impl Mul for Transform {
    type Output = Transform;

    fn mul(self, rhs: Transform) -> Transform {
        self.compose(&rhs)
    }
}

/// `outer ∘ inner`.
#[inline]
pub fn compose(outer: &Transform, inner: &Transform) -> Transform {
    outer.compose(inner)
}

#[inline]
pub fn apply(t: &Transform, p: Point) -> Point {
    t.apply(p)
}

/// Rotation about the origin by `deg` degrees, counter-clockwise.
///
/// Multiples of 30° use exact table values so repeated composition stays
/// on the orientation lattice.
pub fn trot(deg: i32) -> Transform {
    let (c, s) = match unit_step(deg) {
        Some(cs) => cs,
        None => {
            let r = (deg as f64).to_radians();
            (r.cos(), r.sin())
        }
    };
    Transform::new(c, -s, s, c, 0.0, 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_transforms() -> [Transform; 3] {
        [
            trot(60).compose(&Transform::translation(3.0, -2.0)),
            Transform::MIRROR_X.compose(&trot(150)).with_translation(-7.5, 1.25),
            trot(270).with_translation(0.5, 12.0),
        ]
    }

    #[test]
    fn test_identity_is_neutral() {
        for t in sample_transforms() {
            assert!(Transform::IDENTITY.compose(&t).approx_eq(&t, TRANSFORM_EPS));
            assert!(t.compose(&Transform::IDENTITY).approx_eq(&t, TRANSFORM_EPS));
        }
    }

    #[test]
    fn test_compose_applies_inner_first() {
        let outer = Transform::translation(10.0, 0.0);
        let inner = trot(90);
        let p = Point::new(1.0, 0.0);
        let q = compose(&outer, &inner).apply(p);
        assert!(q.approx_eq(Point::new(10.0, 1.0), 1e-12), "got {q:?}");
        let r = compose(&inner, &outer).apply(p);
        assert!(r.approx_eq(Point::new(0.0, 11.0), 1e-12), "got {r:?}");
    }

    #[test]
    fn test_compose_is_associative() {
        let [a, b, c] = sample_transforms();
        let left = a.compose(&b).compose(&c);
        let right = a.compose(&b.compose(&c));
        assert!(left.approx_eq(&right, TRANSFORM_EPS));
    }

    #[test]
    fn test_mul_operator_matches_compose() {
        let [a, b, _] = sample_transforms();
        assert_eq!(a * b, a.compose(&b));
    }

    #[test]
    fn test_trot_exact_on_lattice() {
        let t = trot(30);
        assert_eq!(t.a, 3f64.sqrt() / 2.0);
        assert_eq!(t.c, 0.5);
        let t = trot(-90);
        assert_eq!((t.a, t.b, t.c, t.d), (0.0, 1.0, -1.0, 0.0));
    }

    #[test]
    fn test_trot_off_lattice_uses_trig() {
        let t = trot(45);
        assert!((t.a - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-15);
    }

    #[test]
    fn test_determinant_sign() {
        assert!((trot(120).determinant() - 1.0).abs() < 1e-12);
        let m = Transform::MIRROR_X.compose(&trot(60));
        assert!((m.determinant() + 1.0).abs() < 1e-12);
        assert!(m.is_mirrored());
    }

    #[test]
    fn test_scaled_scales_translation_only() {
        let t = trot(60).with_translation(2.0, -4.0);
        let s = t.scaled(2.5);
        assert_eq!(s.linear(), t.linear());
        assert_eq!(s.translation_part(), Point::new(5.0, -10.0));
    }

    #[test]
    fn test_point_ops() {
        let p = Point::new(3.0, 4.0);
        assert_eq!(p.norm(), 5.0);
        assert_eq!(p - Point::new(1.0, 1.0), Point::new(2.0, 3.0));
        assert_eq!(p * 2.0, Point::new(6.0, 8.0));
        assert_eq!(Point::from((1.0, 2.0)) + p, Point::new(4.0, 6.0));
    }
}
