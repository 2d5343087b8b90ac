//! Axis Aligned Bounding Box.

use crate::math::{Point, Real, Vector};
use crate::utils;
use na;
use num::Bounded;

/// An Axis-Aligned Bounding Box (AABB).
///
/// The bounds of every fracture cell are stored as an `Aabb` whose `mins` and `maxs` are
/// the component-wise extrema of the cell vertices.
///
/// # Example
///
/// ```rust
/// use fracture3d::bounding_volume::Aabb;
/// use nalgebra::Point3;
///
/// let aabb = Aabb::from_points(vec![
///     Point3::new(1.0, 2.0, 3.0),
///     Point3::new(-1.0, 4.0, 2.0),
///     Point3::new(0.0, 0.0, 5.0),
/// ]);
///
/// assert_eq!(aabb.mins, Point3::new(-1.0, 0.0, 2.0));
/// assert_eq!(aabb.maxs, Point3::new(1.0, 4.0, 5.0));
/// assert_eq!(aabb.center(), Point3::new(0.0, 2.0, 3.5));
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Aabb {
    /// The point with minimum coordinates.
    pub mins: Point<Real>,
    /// The point with maximum coordinates.
    pub maxs: Point<Real>,
}

impl Aabb {
    /// Creates a new AABB from its minimum and maximum corners.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates an invalid AABB with inverted bounds.
    ///
    /// `mins` is set to the largest representable value and `maxs` to the smallest one, so
    /// that the first call to [`Aabb::take_point`] snaps both corners to that point.
    #[inline]
    pub fn new_invalid() -> Self {
        let max: Real = Bounded::max_value();
        Self::new(Vector::repeat(max).into(), Vector::repeat(-max).into())
    }

    /// Creates a new AABB that tightly encloses a set of points.
    pub fn from_points<I>(pts: I) -> Self
    where
        I: IntoIterator<Item = Point<Real>>,
    {
        let mut result = Self::new_invalid();

        for pt in pts {
            result.take_point(pt);
        }

        result
    }

    /// The midpoint `(mins + maxs) / 2`.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        na::center(&self.mins, &self.maxs)
    }

    /// The extents `maxs - mins` of this `Aabb`.
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.maxs - self.mins
    }

    /// Enlarges this `Aabb` so it also contains the point `pt`.
    pub fn take_point(&mut self, pt: Point<Real>) {
        (self.mins, self.maxs) = utils::componentwise_min_max(&self.mins, &self.maxs, &pt);
    }
}
