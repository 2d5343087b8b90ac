use crate::common::{assert_centered, cube, volume};
use fracture3d::math::{HMatrix, Point, Real, Vector};
use fracture3d::pattern::FracturePattern;
use fracture3d::pipeline::{FractureConfig, Fracturer};
use fracture3d::shape::Plane;
use oorandom::Rand32;

fn random_plane(rng: &mut Rand32) -> Plane {
    let mut coord = || rng.rand_float() * 2.0 - 1.0;
    let normal = Vector::new(coord(), coord(), coord());
    let distance = coord() * 0.5;
    Plane::new(normal, distance)
}

fn flipped(plane: &Plane) -> Plane {
    Plane::new(-plane.normal, -plane.distance)
}

#[test]
fn complementary_cells_partition_the_volume() {
    let mut rng = Rand32::new(42);

    for _ in 0..20 {
        let p1 = random_plane(&mut rng);
        let p2 = random_plane(&mut rng);
        let pattern = FracturePattern::new(vec![
            vec![p1, p2],
            vec![p1, flipped(&p2)],
            vec![flipped(&p1), p2],
            vec![flipped(&p1), flipped(&p2)],
        ])
        .unwrap();
        let fracturer = Fracturer::new(pattern, FractureConfig::default()).unwrap();

        let cells = fracturer
            .fracture(&cube(), &HMatrix::identity(), &Point::origin())
            .unwrap();

        let total: Real = cells.iter().map(volume).sum();
        assert!(relative_eq!(total, 8.0, epsilon = 1.0e-3));

        for window in cells.windows(2) {
            assert!(window[0].cell < window[1].cell);
        }

        for cell in &cells {
            assert!(volume(cell) > -1.0e-4);
            assert!(cell.aabb.mins.iter().all(|x| *x >= -1.0 - 1.0e-5));
            assert!(cell.aabb.maxs.iter().all(|x| *x <= 1.0 + 1.0e-5));
            assert_centered(cell);
        }
    }
}

#[test]
fn pass_major_pattern_matches_cell_lists() {
    let mut rng = Rand32::new(7);
    let planes: Vec<Plane> = (0..3).map(|_| random_plane(&mut rng)).collect();

    let by_cell = FracturePattern::new(vec![
        vec![planes[0], planes[1]],
        vec![flipped(&planes[0]), planes[2]],
        vec![flipped(&planes[0])],
    ])
    .unwrap();
    let by_pass = FracturePattern::from_pass_major(
        3,
        &[
            vec![
                planes[0].to_array(),
                flipped(&planes[0]).to_array(),
                flipped(&planes[0]).to_array(),
            ],
            vec![
                planes[1].to_array(),
                planes[2].to_array(),
                Plane::sentinel().to_array(),
            ],
        ],
    )
    .unwrap();

    let run = |pattern| {
        Fracturer::new(pattern, FractureConfig::default())
            .unwrap()
            .fracture(&cube(), &HMatrix::identity(), &Point::origin())
            .unwrap()
    };

    assert_eq!(run(by_cell), run(by_pass));
}
