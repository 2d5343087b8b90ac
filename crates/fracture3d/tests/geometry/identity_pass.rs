use crate::common::cube;
use fracture3d::math::{HMatrix, Point, Real, Vector};
use fracture3d::pattern::FracturePattern;
use fracture3d::pipeline::{FractureConfig, Fracturer};
use fracture3d::shape::Plane;
use fracture3d::utils;

fn input_points(positions: &[Real]) -> Vec<Point<Real>> {
    positions
        .chunks_exact(3)
        .map(|p| Point::new(p[0], p[1], p[2]))
        .collect()
}

#[test]
fn sentinel_planes_keep_everything() {
    let pattern = FracturePattern::new(vec![vec![Plane::sentinel(); 2]; 3]).unwrap();
    let fracturer = Fracturer::new(pattern, FractureConfig::default()).unwrap();
    let positions = cube();

    let (cells, stats) = fracturer
        .fracture_with_stats(&positions, &HMatrix::identity(), &Point::new(3.0, 1.0, 0.0))
        .unwrap();

    assert_eq!(cells.len(), 3);
    assert!(stats.passes.iter().all(|p| p.cut_edges == 0));
    for (i, cell) in cells.iter().enumerate() {
        assert_eq!(cell.cell, i as i32);
        assert_eq!(cell.world_points(), input_points(&positions));
    }
}

#[test]
fn empty_plane_lists_keep_everything() {
    let pattern = FracturePattern::new(vec![vec![], vec![]]).unwrap();
    let fracturer = Fracturer::new(pattern, FractureConfig::default()).unwrap();
    assert_eq!(fracturer.depth(), 0);

    let positions = cube();
    let cells = fracturer
        .fracture(&positions, &HMatrix::identity(), &Point::origin())
        .unwrap();

    assert_eq!(cells.len(), 2);
    assert_eq!(cells[1].world_points(), input_points(&positions));
    assert_eq!(cells[1].indices().len(), 12);
}

#[test]
fn euler_rotation_is_applied_once() {
    let pattern = FracturePattern::new(vec![vec![]]).unwrap();
    let fracturer = Fracturer::new(pattern, FractureConfig::default()).unwrap();

    let positions = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0];
    let rotation = utils::rotation_transform(&Vector::new(0.0, 0.0, 90.0));
    let cells = fracturer
        .fracture(&positions, &rotation, &Point::origin())
        .unwrap();

    let expected = [
        Point::new(0.0, 1.0, 0.0),
        Point::new(-1.0, 0.0, 0.0),
        Point::new(0.0, 0.0, 1.0),
    ];
    for (pt, expected) in cells[0].world_points().iter().zip(expected.iter()) {
        assert!(relative_eq!(*pt, *expected, epsilon = 1.0e-6));
    }
}
