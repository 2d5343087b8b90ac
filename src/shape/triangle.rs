//! Definition of the homogeneous triangle record.

use crate::math::{HMatrix, HPoint, Point, Real, Vector};
use crate::utils;

/// Number of `Real`s in the flat representation of a [`Triangle`].
pub const TRIANGLE_STRIDE: usize = 12;

/// A triangle of a triangle soup, with homogeneous vertices.
///
/// The vertex order defines the orientation of the triangle: its normal is
/// `(b - a) × (c - a)`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Triangle {
    /// The triangle first point.
    pub a: HPoint<Real>,
    /// The triangle second point.
    pub b: HPoint<Real>,
    /// The triangle third point.
    pub c: HPoint<Real>,
}

static_assertions::assert_eq_size!(Triangle, [Real; TRIANGLE_STRIDE]);

impl Triangle {
    /// Creates a triangle from three homogeneous points.
    #[inline]
    pub fn new(a: HPoint<Real>, b: HPoint<Real>, c: HPoint<Real>) -> Self {
        Self { a, b, c }
    }

    /// The triangle with all its components set to zero.
    #[inline]
    pub fn zeros() -> Self {
        Self::new(HPoint::zeros(), HPoint::zeros(), HPoint::zeros())
    }

    /// Creates a triangle from three points, with a zero homogeneous component.
    #[inline]
    pub fn from_points(a: &Point<Real>, b: &Point<Real>, c: &Point<Real>) -> Self {
        Self::new(a.coords.push(0.0), b.coords.push(0.0), c.coords.push(0.0))
    }

    /// Reads a triangle from exactly [`TRIANGLE_STRIDE`] packed `Real`s.
    #[inline]
    pub fn from_slice(data: &[Real]) -> Self {
        assert_eq!(data.len(), TRIANGLE_STRIDE, "Invalid triangle record length.");
        Self::new(
            HPoint::from_column_slice(&data[0..4]),
            HPoint::from_column_slice(&data[4..8]),
            HPoint::from_column_slice(&data[8..12]),
        )
    }

    /// Writes this triangle into exactly [`TRIANGLE_STRIDE`] packed `Real`s.
    #[inline]
    pub fn write_to(&self, out: &mut [Real]) {
        assert_eq!(out.len(), TRIANGLE_STRIDE, "Invalid triangle record length.");
        out[0..4].copy_from_slice(self.a.as_slice());
        out[4..8].copy_from_slice(self.b.as_slice());
        out[8..12].copy_from_slice(self.c.as_slice());
    }

    /// The three vertices of this triangle.
    #[inline]
    pub fn vertices(&self) -> [HPoint<Real>; 3] {
        [self.a, self.b, self.c]
    }

    /// The three vertices of this triangle, without their homogeneous component.
    #[inline]
    pub fn points(&self) -> [Point<Real>; 3] {
        [
            Point::from(self.a.xyz()),
            Point::from(self.b.xyz()),
            Point::from(self.c.xyz()),
        ]
    }

    /// This triangle with each vertex multiplied by `m`.
    #[inline]
    pub fn transformed(&self, m: &HMatrix<Real>) -> Self {
        Self::new(m * self.a, m * self.b, m * self.c)
    }

    /// The same triangle with the opposite orientation.
    #[inline]
    pub fn reversed(&self) -> Self {
        Self::new(self.a, self.c, self.b)
    }

    /// The normal of this triangle, scaled by twice its area.
    #[inline]
    pub fn scaled_normal(&self) -> Vector<Real> {
        let [a, b, c] = self.points();
        utils::cross(&(b - a), &(c - a))
    }

    /// The area of this triangle.
    #[inline]
    pub fn area(&self) -> Real {
        utils::length(&self.scaled_normal()) * 0.5
    }

    /// Are all the components of this triangle finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.vertices()
            .iter()
            .all(|v| v.iter().all(|x| x.is_finite()))
    }
}
