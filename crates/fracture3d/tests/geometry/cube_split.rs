use crate::common::{assert_centered, cube, halves, volume};
use fracture3d::math::{HMatrix, Point, Vector};
use fracture3d::pattern::FracturePattern;
use fracture3d::pipeline::{FractureConfig, Fracturer};
use fracture3d::shape::Plane;

#[test]
fn cube_split_in_halves() {
    let [left, right] = halves(Vector::x(), 0.0);
    let pattern = FracturePattern::new(vec![vec![left], vec![right]]).unwrap();
    let fracturer = Fracturer::new(pattern, FractureConfig::default()).unwrap();

    let (cells, stats) = fracturer
        .fracture_with_stats(&cube(), &HMatrix::identity(), &Point::origin())
        .unwrap();

    assert_eq!(cells.len(), 2);
    assert_eq!(stats.input_triangles, 12);
    assert_eq!(stats.passes[0].input_triangles, 24);
    assert_eq!(stats.passes[0].output_triangles, 28);
    assert_eq!(stats.passes[0].cut_edges, 16);
    assert_eq!(stats.passes[0].stitched_triangles, 16);
    assert_eq!(stats.output_triangles(), 44);
    assert_eq!(stats.output_cells, 2);

    assert_eq!(cells[0].cell, 0);
    assert!(relative_eq!(cells[0].aabb.mins, Point::new(-1.0, -1.0, -1.0)));
    assert!(relative_eq!(cells[0].aabb.maxs, Point::new(0.0, 1.0, 1.0)));
    assert!(relative_eq!(cells[0].centroid, Point::new(-0.5, 0.0, 0.0)));
    assert!(relative_eq!(cells[0].size, Vector::new(1.0, 2.0, 2.0)));
    assert!(relative_eq!(cells[1].centroid, Point::new(0.5, 0.0, 0.0)));

    for cell in &cells {
        assert!(relative_eq!(volume(cell), 4.0, epsilon = 1.0e-4));
        assert_eq!(cell.num_triangles(), 22);
        assert_centered(cell);
    }
}

#[test]
fn cube_quarter() {
    let pattern = FracturePattern::new(vec![vec![
        Plane::new(Vector::x(), 0.0),
        Plane::new(Vector::y(), 0.0),
    ]])
    .unwrap();
    let fracturer = Fracturer::new(pattern, FractureConfig::default()).unwrap();

    let cells = fracturer
        .fracture(&cube(), &HMatrix::identity(), &Point::origin())
        .unwrap();

    assert_eq!(cells.len(), 1);
    assert!(relative_eq!(volume(&cells[0]), 2.0, epsilon = 1.0e-4));
    assert!(relative_eq!(cells[0].aabb.maxs, Point::new(0.0, 0.0, 1.0)));
    assert_centered(&cells[0]);
}

#[test]
fn transform_scales_before_clipping() {
    let [left, right] = halves(Vector::x(), 0.0);
    let pattern = FracturePattern::new(vec![vec![left], vec![right]]).unwrap();
    let fracturer = Fracturer::new(pattern, FractureConfig::default()).unwrap();

    let scale = HMatrix::new_nonuniform_scaling(&Vector::new(2.0, 1.0, 1.0));
    let cells = fracturer
        .fracture(&cube(), &scale, &Point::origin())
        .unwrap();

    for cell in &cells {
        assert!(relative_eq!(volume(cell), 8.0, epsilon = 1.0e-4));
    }
    assert!(relative_eq!(cells[0].aabb.mins.x, -2.0));

    // Vertices are directions for the transform: translations have no effect.
    let translation = HMatrix::new_translation(&Vector::new(10.0, 0.0, 0.0));
    let identity = fracturer
        .fracture(&cube(), &HMatrix::identity(), &Point::origin())
        .unwrap();
    let translated = fracturer
        .fracture(&cube(), &translation, &Point::origin())
        .unwrap();
    assert_eq!(identity, translated);
}

#[test]
fn off_center_impact() {
    let [left, right] = halves(Vector::x(), 0.0);
    let pattern = FracturePattern::new(vec![vec![left], vec![right]]).unwrap();
    let fracturer = Fracturer::new(pattern, FractureConfig::default()).unwrap();

    let cells = fracturer
        .fracture(&cube(), &HMatrix::identity(), &Point::new(0.5, 0.0, 0.0))
        .unwrap();

    assert!(relative_eq!(volume(&cells[0]), 6.0, epsilon = 1.0e-4));
    assert!(relative_eq!(volume(&cells[1]), 2.0, epsilon = 1.0e-4));
    assert!(relative_eq!(cells[0].aabb.maxs.x, 0.5));
}
