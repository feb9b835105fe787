//! Output range checks over dense sample grids.

use simplex_noise::SimplexNoise;
use simplex_noise::noise::tables::verify_tables;

#[test]
fn test_tables_pass_integrity_check() {
    assert_eq!(verify_tables(), Ok(()));
}

#[test]
fn test_one_dimension_stays_in_unit_range() {
    let noise = SimplexNoise::new();
    for i in 1..10_000 {
        let x = f64::from(i) / 100.0;
        let v = noise.get_value_1d(x);
        assert!(
            (-1.0..=1.0).contains(&v),
            "Noise value at {x} is not between -1.0 and 1.0: {v}"
        );
    }
}

#[test]
fn test_one_dimension_stays_in_unit_range_for_negative_input() {
    let noise = SimplexNoise::new();
    for i in 0..50_000 {
        let x = f64::from(i) / -100.0;
        let v = noise.get_value_1d(x);
        assert!(
            (-1.0..=1.0).contains(&v),
            "Noise value at {x} is not between -1.0 and 1.0: {v}"
        );
    }
}

#[test]
fn test_two_dimensions_stay_in_unit_range_on_unit_square() {
    let noise = SimplexNoise::new();
    for i in 1..=100 {
        for j in 1..=100 {
            let x = f64::from(i) / 100.0;
            let y = f64::from(j) / 100.0;
            let v = noise.get_value_2d(x, y);
            assert!(
                (-1.0..=1.0).contains(&v),
                "Noise value at ({x}, {y}) is not between -1.0 and 1.0: {v}"
            );
        }
    }
}

#[test]
fn test_two_dimensions_finite_everywhere_sampled() {
    let noise = SimplexNoise::new();
    for i in -300..300 {
        for j in -30..30 {
            let x = f64::from(i) * 0.173;
            let y = f64::from(j) * 1.91;
            assert!(noise.get_value_2d(x, y).is_finite(), "non-finite value at ({x}, {y})");
        }
    }
}
