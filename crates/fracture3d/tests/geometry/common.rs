use fracture3d::math::{Point, Real, Vector};
use fracture3d::pipeline::FractureCell;
use fracture3d::shape::Plane;

/// The triangle soup of the cube `[-1, 1]^3`, with outward-facing triangles.
pub fn cube() -> Vec<Real> {
    let faces = [
        [[1.0, -1.0, -1.0], [1.0, 1.0, -1.0], [1.0, 1.0, 1.0], [1.0, -1.0, 1.0]],
        [[-1.0, -1.0, -1.0], [-1.0, -1.0, 1.0], [-1.0, 1.0, 1.0], [-1.0, 1.0, -1.0]],
        [[-1.0, 1.0, -1.0], [-1.0, 1.0, 1.0], [1.0, 1.0, 1.0], [1.0, 1.0, -1.0]],
        [[-1.0, -1.0, -1.0], [1.0, -1.0, -1.0], [1.0, -1.0, 1.0], [-1.0, -1.0, 1.0]],
        [[-1.0, -1.0, 1.0], [1.0, -1.0, 1.0], [1.0, 1.0, 1.0], [-1.0, 1.0, 1.0]],
        [[-1.0, -1.0, -1.0], [-1.0, 1.0, -1.0], [1.0, 1.0, -1.0], [1.0, -1.0, -1.0]],
    ];

    let mut positions = Vec::new();
    for quad in faces {
        for i in [0, 1, 2, 0, 2, 3] {
            positions.extend_from_slice(&quad[i]);
        }
    }
    positions
}

/// The signed volume enclosed by the triangles of a fragment.
pub fn volume(cell: &FractureCell) -> Real {
    cell.triangles()
        .map(|[a, b, c]| a.coords.dot(&b.coords.cross(&c.coords)))
        .sum::<Real>()
        / 6.0
}

/// The two cells on each side of a plane.
pub fn halves(normal: Vector<Real>, distance: Real) -> [Plane; 2] {
    [
        Plane::new(normal, distance),
        Plane::new(-normal, -distance),
    ]
}

pub fn assert_centered(cell: &FractureCell) {
    let mut mins = Point::from(Vector::repeat(Real::MAX));
    let mut maxs = Point::from(Vector::repeat(-Real::MAX));
    for pt in &cell.points {
        mins = mins.inf(pt);
        maxs = maxs.sup(pt);
    }

    assert!(relative_eq!(mins, -maxs, epsilon = 1.0e-5));
    assert!(relative_eq!(maxs - mins, cell.size, epsilon = 1.0e-5));
}
