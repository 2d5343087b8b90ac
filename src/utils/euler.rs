use crate::math::{HMatrix, Matrix, Real, Vector};
use crate::utils::DEG_TO_RAD;

/// Builds the rotation matrix of the Euler angles `angles`, expressed in degrees.
///
/// The rotations about Z, then Y, then X are multiplied, in that order, onto an identity
/// matrix. A rotation is skipped entirely if its angle is zero (or NaN), so a zero angle
/// never introduces any rounding. The products are evaluated with an explicit row-major
/// summation order: fragment placement depends on reproducing this matrix exactly.
pub fn euler_to_rotation_matrix(angles: &Vector<Real>) -> Matrix<Real> {
    let mut m = Matrix::identity();

    if is_set(angles.z) {
        let (s, c) = (-angles.z * DEG_TO_RAD).sin_cos();
        #[rustfmt::skip]
        let rz = Matrix::new(
            c,   s,   0.0,
            -s,  c,   0.0,
            0.0, 0.0, 1.0,
        );
        m = mat3_mul(&m, &rz);
    }

    if is_set(angles.y) {
        let (s, c) = (-angles.y * DEG_TO_RAD).sin_cos();
        #[rustfmt::skip]
        let ry = Matrix::new(
            c,   0.0, -s,
            0.0, 1.0, 0.0,
            s,   0.0, c,
        );
        m = mat3_mul(&m, &ry);
    }

    if is_set(angles.x) {
        let (s, c) = (-angles.x * DEG_TO_RAD).sin_cos();
        #[rustfmt::skip]
        let rx = Matrix::new(
            1.0, 0.0, 0.0,
            0.0, c,   s,
            0.0, -s,  c,
        );
        m = mat3_mul(&m, &rx);
    }

    m
}

/// The homogeneous transform applying [`euler_to_rotation_matrix`] to points.
pub fn rotation_transform(angles: &Vector<Real>) -> HMatrix<Real> {
    euler_to_rotation_matrix(angles).to_homogeneous()
}

#[inline]
fn is_set(angle: Real) -> bool {
    angle != 0.0 && !angle.is_nan()
}

// Sums are evaluated left to right, one row of `a` against one column of `b`.
fn mat3_mul(a: &Matrix<Real>, b: &Matrix<Real>) -> Matrix<Real> {
    Matrix::from_fn(|i, j| a[(i, 0)] * b[(0, j)] + a[(i, 1)] * b[(1, j)] + a[(i, 2)] * b[(2, j)])
}
