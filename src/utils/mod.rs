//! Various unsorted geometrical operators.

pub(crate) use self::consts::*;
pub use self::euler::{euler_to_rotation_matrix, rotation_transform};
pub use self::vector_ops::{
    add, componentwise_max, componentwise_min, componentwise_min_max, cross, dot, length,
    normalize, scale, sub,
};

mod consts;
mod euler;
mod vector_ops;
