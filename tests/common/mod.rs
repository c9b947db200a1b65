//! Shared helpers for spatial integration tests.

#![allow(dead_code)]

use spatial::{UnitVector2D, Vector2D};

/// Tolerance for results that differ from the exact value by a few ulps.
pub const ULP_TOLERANCE: f64 = 1e-14;

/// Unit vector from any nonzero direction.
pub fn unit(x: f64, y: f64) -> UnitVector2D {
    UnitVector2D::create(x, y).expect("nonzero direction")
}

/// Representative directions: every quadrant, axes, fractional and
/// negative components.
pub fn sample_unit_vectors() -> Vec<UnitVector2D> {
    vec![
        UnitVector2D::X_AXIS,
        UnitVector2D::Y_AXIS,
        -UnitVector2D::X_AXIS,
        -UnitVector2D::Y_AXIS,
        unit(1.0, 1.0),
        unit(-1.0, 2.0),
        unit(-0.25, -0.75),
        unit(3.0, -4.0),
        unit(1e-3, 1.0),
        unit(123.456, -0.001),
    ]
}

/// Representative general vectors, including zero and non-unit lengths.
pub fn sample_vectors() -> Vec<Vector2D> {
    vec![
        Vector2D::ZERO,
        Vector2D::new(1.0, 0.0),
        Vector2D::new(-2.5, 0.125),
        Vector2D::new(1e6, -1e-6),
        Vector2D::new(-0.1, -0.2),
    ]
}

/// Assert two vectors agree component-wise within `tolerance`.
pub fn assert_close(actual: Vector2D, expected: Vector2D, tolerance: f64) {
    assert!(
        actual.equals_within(&expected, tolerance).unwrap(),
        "expected {} to be within {} of {}",
        actual,
        tolerance,
        expected
    );
}
