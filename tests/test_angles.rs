use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use sun_lighting_report::angles::*;
use sun_lighting_report::types::RotationSystem;

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

// ── Rotation formulas ──

#[test]
fn test_old_rotation_known_values() {
    assert_approx!(old_rotation(0.0), 90.0, 1e-12);
    assert_approx!(old_rotation(90.0), 0.0, 1e-12);
    assert_approx!(old_rotation(180.0), -90.0, 1e-12);
}

#[test]
fn test_new_rotation_known_values() {
    assert_approx!(new_rotation(0.0), 50.0, 1e-12);
    assert_approx!(new_rotation(90.0), 0.0, 1e-12);
    assert_approx!(new_rotation(180.0), -50.0, 1e-12);
}

#[test]
fn test_rotations_extrapolate_outside_arc() {
    assert_approx!(old_rotation(-30.0), 120.0, 1e-12);
    assert_approx!(old_rotation(270.0), -180.0, 1e-12);
    assert_approx!(new_rotation(-90.0), 100.0, 1e-12);
    assert_approx!(new_rotation(360.0), -150.0, 1e-12);
}

#[test]
fn test_new_rotation_is_linear_in_sun_position() {
    for step in 0..=20 {
        let sun = step as f64 * 9.0;
        assert_approx!(new_rotation(sun), 50.0 - (sun / 180.0) * 100.0, 1e-9);
    }
}

#[test]
fn test_rotation_system_dispatch() {
    for sun in [0.0, 45.0, 117.5, 180.0] {
        assert_eq!(RotationSystem::Old.rotation(sun), old_rotation(sun));
        assert_eq!(RotationSystem::New.rotation(sun), new_rotation(sun));
    }
    assert_eq!(RotationSystem::Old.label(), "OLD");
    assert_eq!(RotationSystem::New.label(), "NEW");
}

#[test]
fn test_lerp_endpoints_and_midpoint() {
    assert_approx!(lerp(50.0, -50.0, 0.0), 50.0, 1e-12);
    assert_approx!(lerp(50.0, -50.0, 1.0), -50.0, 1e-12);
    assert_approx!(lerp(50.0, -50.0, 0.5), 0.0, 1e-12);
    assert_approx!(lerp(2.0, 4.0, 0.25), 2.5, 1e-12);
}

// ── Angle from horizontal ──

#[test]
fn test_angle_from_horizontal_clamps_at_zero() {
    assert_approx!(angle_from_horizontal(0.0), 90.0, 1e-12);
    assert_approx!(angle_from_horizontal(50.0), 40.0, 1e-12);
    assert_approx!(angle_from_horizontal(-50.0), 40.0, 1e-12);
    assert_eq!(angle_from_horizontal(90.0), 0.0);
    assert_eq!(angle_from_horizontal(135.0), 0.0);
    assert_eq!(angle_from_horizontal(-400.0), 0.0);
}

// ── Effectiveness ──

#[test]
fn test_effectiveness_straight_down_is_full() {
    assert_approx!(effectiveness(0.0), 1.0, 1e-12);
}

#[test]
fn test_effectiveness_known_angles() {
    assert_approx!(effectiveness(50.0), 0.642788, 1e-6);
    assert_approx!(effectiveness(30.0), 0.866025, 1e-6);
    assert_approx!(effectiveness(72.0), 0.309017, 1e-6);
    assert_approx!(effectiveness(60.0), 0.5, 1e-9);
}

#[test]
fn test_effectiveness_zero_at_and_beyond_horizontal() {
    for r in [90.0, -90.0, 90.5, -91.0, 120.0, -180.0, 720.0] {
        assert_eq!(effectiveness(r), 0.0, "rotation {}", r);
    }
}

#[test]
fn test_effectiveness_symmetric_and_bounded() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..10_000 {
        let r: f64 = rng.gen_range(-360.0..360.0);
        let e = effectiveness(r);
        assert_eq!(e, effectiveness(-r), "rotation {}", r);
        assert!((0.0..=1.0).contains(&e), "rotation {}: {}", r, e);
        if r.abs() >= 90.0 {
            assert_eq!(e, 0.0, "rotation {}", r);
        }
    }
}

#[test]
fn test_effectiveness_decreases_away_from_vertical() {
    let mut prev = effectiveness(0.0);
    for step in 1..=90 {
        let e = effectiveness(step as f64);
        assert!(e < prev, "rotation {}: {} !< {}", step, e, prev);
        prev = e;
    }
}
