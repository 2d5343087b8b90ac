//! Definition of the cut edge record.

use crate::math::{HPoint, Point, Real};

/// Number of `Real`s in the flat representation of a [`CutEdge`].
pub const EDGE_STRIDE: usize = 8;

/// A boundary edge created where a clipping plane crosses a triangle.
///
/// The edge runs from `a` to `b` in the direction opposite to the clipped triangle's
/// boundary, so a triangle `(x, a, b)` closing the cut has the orientation of the mesh.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct CutEdge {
    /// The edge first point.
    pub a: HPoint<Real>,
    /// The edge second point.
    pub b: HPoint<Real>,
}

static_assertions::assert_eq_size!(CutEdge, [Real; EDGE_STRIDE]);

impl CutEdge {
    /// Creates an edge from its two endpoints.
    #[inline]
    pub fn new(a: HPoint<Real>, b: HPoint<Real>) -> Self {
        Self { a, b }
    }

    /// The edge with all its components set to zero.
    #[inline]
    pub fn zeros() -> Self {
        Self::new(HPoint::zeros(), HPoint::zeros())
    }

    /// Reads an edge from exactly [`EDGE_STRIDE`] packed `Real`s.
    #[inline]
    pub fn from_slice(data: &[Real]) -> Self {
        assert_eq!(data.len(), EDGE_STRIDE, "Invalid cut edge record length.");
        Self::new(
            HPoint::from_column_slice(&data[0..4]),
            HPoint::from_column_slice(&data[4..8]),
        )
    }

    /// Writes this edge into exactly [`EDGE_STRIDE`] packed `Real`s.
    #[inline]
    pub fn write_to(&self, out: &mut [Real]) {
        assert_eq!(out.len(), EDGE_STRIDE, "Invalid cut edge record length.");
        out[0..4].copy_from_slice(self.a.as_slice());
        out[4..8].copy_from_slice(self.b.as_slice());
    }

    /// The same edge, running from `b` to `a`.
    #[inline]
    pub fn reversed(&self) -> Self {
        Self::new(self.b, self.a)
    }

    /// The two endpoints, without their homogeneous component.
    #[inline]
    pub fn points(&self) -> [Point<Real>; 2] {
        [Point::from(self.a.xyz()), Point::from(self.b.xyz())]
    }

    /// The length of this edge.
    #[inline]
    pub fn length(&self) -> Real {
        let [a, b] = self.points();
        na::distance(&a, &b)
    }
}
