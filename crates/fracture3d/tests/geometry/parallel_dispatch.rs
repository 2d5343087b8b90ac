use crate::common::cube;
use fracture3d::math::{HMatrix, Point, Vector};
use fracture3d::pattern::FracturePattern;
use fracture3d::pipeline::{ExecutionMode, FractureConfig, Fracturer};
use fracture3d::shape::Plane;

#[test]
fn parallel_matches_serial() {
    let pattern = FracturePattern::new(vec![
        vec![Plane::new(Vector::new(1.0, 0.3, 0.0), 0.1), Plane::new(Vector::z(), 0.2)],
        vec![Plane::new(Vector::new(-1.0, -0.3, 0.0), -0.1)],
        vec![Plane::new(Vector::new(1.0, 0.3, 0.0), 0.1), Plane::new(-Vector::z(), -0.2)],
    ])
    .unwrap();

    let run = |execution| {
        let config = FractureConfig {
            execution,
            ..FractureConfig::default()
        };
        Fracturer::new(pattern.clone(), config)
            .unwrap()
            .fracture_with_stats(&cube(), &HMatrix::identity(), &Point::new(0.1, 0.2, 0.3))
            .unwrap()
    };

    assert_eq!(run(ExecutionMode::Serial), run(ExecutionMode::Parallel));
}
