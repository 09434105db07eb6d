//! Algebraic properties checked over a seeded batch of random vectors

use approx::assert_abs_diff_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::FRAC_PI_2;
use vec3_kit_core::functional as vf;
use vec3_kit_core::Vector;

const SAMPLES: usize = 200;

fn random_vector(rng: &mut StdRng) -> Vector {
    Vector::new(
        rng.random_range(-100.0..100.0),
        rng.random_range(-100.0..100.0),
        rng.random_range(-100.0..100.0),
    )
}

fn assert_near(a: &Vector, b: &Vector, tol: f64) {
    assert!(a.dist(b) <= tol, "{a} vs {b}");
}

#[test]
fn test_add_sub_inverse() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..SAMPLES {
        let a = random_vector(&mut rng);
        let b = random_vector(&mut rng);
        let mut v = a;
        v.add(b).sub(b);
        assert_near(&v, &a, 1e-9);
    }
}

#[test]
fn test_mult_div_inverse() {
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..SAMPLES {
        let a = random_vector(&mut rng);
        let k = rng.random_range(0.01..50.0);
        let mut v = a;
        v.mult(k).div(k);
        assert_near(&v, &a, 1e-9);
    }
}

#[test]
fn test_normalize_is_unit() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..SAMPLES {
        let mut v = random_vector(&mut rng);
        v.normalize();
        assert_abs_diff_eq!(v.mag(), 1.0, epsilon = 1e-12);
    }
}

#[test]
fn test_cross_is_orthogonal_and_dot_commutes() {
    let mut rng = StdRng::seed_from_u64(4);
    for _ in 0..SAMPLES {
        let a = random_vector(&mut rng);
        let b = random_vector(&mut rng);
        let c = a.cross(&b);
        // Rounding error grows with |a|²|b| and |a||b|²
        let scale = a.mag() * b.mag() * (a.mag() + b.mag());
        assert!(c.dot(&a).abs() <= 1e-12 * scale);
        assert!(c.dot(&b).abs() <= 1e-12 * scale);
        assert_eq!(a.dot(&b), b.dot(&a));
    }
}

#[test]
fn test_four_quarter_turns_restore() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..SAMPLES {
        let original = random_vector(&mut rng);

        let mut v = original;
        v.rotate(FRAC_PI_2)
            .rotate(FRAC_PI_2)
            .rotate(FRAC_PI_2)
            .rotate(FRAC_PI_2);
        assert_near(&v, &original, 1e-9);

        let mut v = original;
        for _ in 0..4 {
            v.rotate_x(FRAC_PI_2);
        }
        assert_near(&v, &original, 1e-9);

        let mut v = original;
        for _ in 0..4 {
            v.rotate_y(FRAC_PI_2);
        }
        assert_near(&v, &original, 1e-9);
    }
}

#[test]
fn test_copy_independence() {
    let mut rng = StdRng::seed_from_u64(6);
    for _ in 0..SAMPLES {
        let a = random_vector(&mut rng);
        let snapshot = a.to_array();
        let mut b = a.copy();
        b.set(0.0);
        assert_eq!(a.to_array(), snapshot);
    }
}

#[test]
fn test_facade_leaves_inputs() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..SAMPLES {
        let a = random_vector(&mut rng);
        let b = random_vector(&mut rng);
        let (sa, sb) = (a.to_array(), b.to_array());
        let _ = vf::lerp(&a, &b, 0.3);
        let _ = vf::max(&a, &b);
        let _ = vf::set_mag(&a, 2.0);
        assert_eq!(a.to_array(), sa);
        assert_eq!(b.to_array(), sb);
    }
}

#[test]
fn test_reference_values() {
    assert_eq!(Vector::new(3.0, 4.0, 0.0).mag(), 5.0);
    assert!(Vector::new(1.0, 0.0, 0.0)
        .cross(&Vector::new(0.0, 1.0, 0.0))
        .equals(&Vector::new(0.0, 0.0, 1.0)));
    assert_eq!(Vector::new(1.0, 2.0, 3.0).to_array(), [1.0, 2.0, 3.0]);
    assert!(vf::from_angle(0.0).equals(&Vector::new(1.0, 0.0, 0.0)));
}
