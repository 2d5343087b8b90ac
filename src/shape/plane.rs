//! Definition of the cell-bounding plane.

use crate::math::{HPoint, Point, Real, Vector};

/// A plane bounding a fracture cell.
///
/// The plane surface is the set of points `p` such that `normal · p + distance = 0`, and
/// `normal` points out of the cell. A point is kept by the plane iff its
/// [depth](Plane::depth) is non-negative.
///
/// A plane with a zero `normal` is the [sentinel](Plane::sentinel): it stands for
/// "no plane in this pass" and keeps everything.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
#[repr(C)]
pub struct Plane {
    /// The outward direction of the plane. Does not need to be normalized.
    pub normal: Vector<Real>,
    /// The signed offset of the plane along `normal`.
    pub distance: Real,
}

impl Plane {
    /// Creates a plane from its outward normal and its offset.
    #[inline]
    pub fn new(normal: Vector<Real>, distance: Real) -> Self {
        Self { normal, distance }
    }

    /// The plane standing for "no plane": it culls nothing.
    #[inline]
    pub fn sentinel() -> Self {
        Self::new(Vector::zeros(), 0.0)
    }

    /// Creates a plane from its packed `[nx, ny, nz, d]` representation.
    #[inline]
    pub fn from_array(data: [Real; 4]) -> Self {
        Self::new(Vector::new(data[0], data[1], data[2]), data[3])
    }

    /// The packed `[nx, ny, nz, d]` representation of this plane.
    #[inline]
    pub fn to_array(&self) -> [Real; 4] {
        [self.normal.x, self.normal.y, self.normal.z, self.distance]
    }

    /// Is this the "no plane" sentinel?
    #[inline]
    pub fn is_sentinel(&self) -> bool {
        self.normal == Vector::zeros()
    }

    /// Are all the components of this plane finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.normal.iter().all(|x| x.is_finite()) && self.distance.is_finite()
    }

    /// This plane re-expressed for points that are offset by `center` before being tested.
    ///
    /// Testing `p` against the result is the same as testing `p + center` against `self`.
    #[inline]
    pub fn localized(&self, center: &Vector<Real>) -> Self {
        Self::new(self.normal, self.distance + self.normal.dot(center))
    }

    /// How deep `pt` is inside the kept half-space.
    ///
    /// Negative for points that are culled by this plane.
    #[inline]
    pub fn depth(&self, pt: &Point<Real>) -> Real {
        -(self.normal.dot(&pt.coords) + self.distance)
    }

    /// The [depth](Plane::depth) of a homogeneous point. Its fourth component is ignored.
    #[inline]
    pub fn depth_h(&self, pt: &HPoint<Real>) -> Real {
        -(self.normal.x * pt.x + self.normal.y * pt.y + self.normal.z * pt.z + self.distance)
    }

    /// Is `pt` outside of the kept half-space?
    #[inline]
    pub fn culls(&self, pt: &HPoint<Real>) -> bool {
        self.depth_h(pt) < 0.0
    }
}
