/*!
fracture3d
==========

**fracture3d** splits a triangle soup into the pieces of a precomputed
fracture pattern, written with the rust programming language.

A fracture pattern is a set of convex cells, each described by an ordered
list of half-space planes. The pipeline replicates the input mesh once per
cell and clips every replica plane by plane, closing each cut with a fan of
new triangles. The result is one centered triangle soup per non-empty cell.

```
use fracture3d::math::{Matrix4, Point, Vector};
use fracture3d::pattern::FracturePattern;
use fracture3d::pipeline::{FractureConfig, Fracturer};
use fracture3d::shape::Plane;

// Two cells sharing the `x = 0` plane.
let pattern = FracturePattern::new(vec![
    vec![Plane::new(Vector::x(), 0.0)],
    vec![Plane::new(-Vector::x(), 0.0)],
])
.unwrap();
let fracturer = Fracturer::new(pattern, FractureConfig::default()).unwrap();

let positions = [-1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
let cells = fracturer
    .fracture(&positions, &Matrix4::identity(), &Point::origin())
    .unwrap();
assert_eq!(cells.len(), 2);
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;
#[cfg_attr(test, macro_use)]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod pattern;
pub mod pipeline;
pub mod shape;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Matrix3, Matrix4, Point3, Vector3, Vector4};

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The matrix type.
    pub use Matrix3 as Matrix;

    /// The homogeneous transformation matrix type.
    pub use Matrix4 as HMatrix;

    /// A point stored with a fourth, homogeneous, component.
    ///
    /// The fourth component is zero for every point coming from an input mesh.
    pub type HPoint<N> = Vector4<N>;
}
