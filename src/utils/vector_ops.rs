//! Free-function vector operations on the crate scalar type.
//!
//! [`normalize`] propagates NaNs on a zero input instead of failing.

use crate::math::{Point, Real, Vector};

/// The cross product `a × b`.
#[inline]
pub fn cross(a: &Vector<Real>, b: &Vector<Real>) -> Vector<Real> {
    a.cross(b)
}

/// The dot product `a · b`.
#[inline]
pub fn dot(a: &Vector<Real>, b: &Vector<Real>) -> Real {
    a.dot(b)
}

/// The sum `a + b`.
#[inline]
pub fn add(a: &Vector<Real>, b: &Vector<Real>) -> Vector<Real> {
    a + b
}

/// The difference `a - b`.
#[inline]
pub fn sub(a: &Vector<Real>, b: &Vector<Real>) -> Vector<Real> {
    a - b
}

/// The vector `a` multiplied by the scalar `s`.
#[inline]
pub fn scale(a: &Vector<Real>, s: Real) -> Vector<Real> {
    a * s
}

/// The euclidean length of `a`.
#[inline]
pub fn length(a: &Vector<Real>) -> Real {
    a.norm()
}

/// Divides `a` by its length.
///
/// The result is made of NaNs if `a` has a zero length. Callers must check the input
/// beforehand if that case can occur.
#[inline]
pub fn normalize(a: &Vector<Real>) -> Vector<Real> {
    let len = length(a);
    Vector::new(a.x / len, a.y / len, a.z / len)
}

/// The component-wise minimum of `a` and `b`.
#[inline]
pub fn componentwise_min(a: &Vector<Real>, b: &Vector<Real>) -> Vector<Real> {
    a.inf(b)
}

/// The component-wise maximum of `a` and `b`.
#[inline]
pub fn componentwise_max(a: &Vector<Real>, b: &Vector<Real>) -> Vector<Real> {
    a.sup(b)
}

/// Grows the running bounds `(mins, maxs)` so they contain `pt`.
#[inline]
pub fn componentwise_min_max(
    mins: &Point<Real>,
    maxs: &Point<Real>,
    pt: &Point<Real>,
) -> (Point<Real>, Point<Real>) {
    (
        componentwise_min(&mins.coords, &pt.coords).into(),
        componentwise_max(&maxs.coords, &pt.coords).into(),
    )
}
