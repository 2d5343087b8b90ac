use crate::math::Real;

/// Degrees to radians, with the truncated value of pi the fracture patterns were authored with.
#[allow(clippy::approx_constant)]
pub(crate) const DEG_TO_RAD: Real = (3.14159265359_f64 / 180.0) as Real;
