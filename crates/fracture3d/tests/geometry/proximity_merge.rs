use crate::common::{cube, volume};
use fracture3d::math::{HMatrix, Point, Vector};
use fracture3d::pattern::FracturePattern;
use fracture3d::pipeline::{FractureConfig, Fracturer};
use fracture3d::shape::{Plane, MERGED_CELL};

// Three slabs along the x axis, split at x = -0.5 and x = 0.5.
fn slabs() -> FracturePattern {
    FracturePattern::new(vec![
        vec![Plane::new(Vector::x(), 0.5)],
        vec![Plane::new(-Vector::x(), -0.5), Plane::new(Vector::x(), -0.5)],
        vec![Plane::new(-Vector::x(), 0.5)],
    ])
    .unwrap()
    .with_proximity(vec![false, true, false])
    .unwrap()
}

#[test]
fn distant_cells_are_merged() {
    let config = FractureConfig {
        proximity_merge: true,
        ..FractureConfig::default()
    };
    let fracturer = Fracturer::new(slabs(), config).unwrap();

    let (cells, stats) = fracturer
        .fracture_with_stats(&cube(), &HMatrix::identity(), &Point::origin())
        .unwrap();

    assert_eq!(cells.len(), 2);
    assert!(stats.merged_triangles > 0);

    assert_eq!(cells[0].cell, MERGED_CELL);
    assert!(relative_eq!(volume(&cells[0]), 4.0, epsilon = 1.0e-4));
    assert!(relative_eq!(cells[0].centroid, Point::origin()));
    assert!(relative_eq!(cells[0].size, Vector::new(2.0, 2.0, 2.0)));

    assert_eq!(cells[1].cell, 1);
    assert!(relative_eq!(volume(&cells[1]), 4.0, epsilon = 1.0e-4));
    assert!(relative_eq!(cells[1].size, Vector::new(1.0, 2.0, 2.0)));
}

#[test]
fn proximity_table_is_ignored_without_merge() {
    let fracturer = Fracturer::new(slabs(), FractureConfig::default()).unwrap();

    let (cells, stats) = fracturer
        .fracture_with_stats(&cube(), &HMatrix::identity(), &Point::origin())
        .unwrap();

    assert_eq!(stats.merged_triangles, 0);
    assert_eq!(
        cells.iter().map(|c| c.cell).collect::<Vec<_>>(),
        vec![0, 1, 2]
    );
    for (cell, expected) in cells.iter().zip([2.0, 4.0, 2.0]) {
        assert!(relative_eq!(volume(cell), expected, epsilon = 1.0e-4));
    }
}

#[test]
fn merge_without_passes() {
    let pattern = FracturePattern::new(vec![vec![], vec![]])
        .unwrap()
        .with_proximity(vec![true, false])
        .unwrap();
    let config = FractureConfig {
        proximity_merge: true,
        ..FractureConfig::default()
    };
    let fracturer = Fracturer::new(pattern, config).unwrap();

    let (cells, stats) = fracturer
        .fracture_with_stats(&cube(), &HMatrix::identity(), &Point::origin())
        .unwrap();

    assert_eq!(stats.merged_triangles, 12);
    assert_eq!(
        cells.iter().map(|c| c.cell).collect::<Vec<_>>(),
        vec![MERGED_CELL, 0]
    );
}
