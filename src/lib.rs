//! # spatial
//!
//! Immutable 2D spatial value types: vectors, unit vectors, angles and
//! Euler angles, with arithmetic, comparison, parsing, formatting and XML.
//!
//! ## Quick Start
//!
//! ```rust
//! use spatial::{Angle, UnitVector2D, Vector2D};
//!
//! let u = UnitVector2D::create(1.0, 1.0)?;
//! let right = u.rotate(Angle::from_degrees(-45.0));
//! assert!(right.equals_within(&UnitVector2D::X_AXIS, 1e-12)?);
//!
//! // Sums leave the unit sphere and widen to a general vector
//! let sum: Vector2D = u + UnitVector2D::Y_AXIS;
//! assert!(sum.length() > 1.0);
//!
//! // Unit and general vectors compare by component
//! assert!(UnitVector2D::X_AXIS == Vector2D::new(1.0, 0.0));
//! # Ok::<(), spatial::SpatialError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`UnitVector2D`] - unit length direction with the angle algebra
//! - [`Vector2D`] - general vector; unit vectors widen into it
//! - [`Angle`] / [`EulerAngles`] - radian based angles
//! - [`io::text`] - number pair grammar and [`NumberFormat`]
//! - [`io::xml`] - attribute-or-element XML codec

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod io;
pub mod types;

// Re-export commonly used types
pub use error::{Result, SpatialError};
pub use io::{NumberFormat, XmlElement, XmlSerializable};
pub use types::{Angle, AngleUnit, Components2D, EulerAngles, UnitVector2D, Vector2D};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default component tolerance for `equals_within`
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Default tolerance for the parallel / perpendicular predicates
pub const DEFAULT_ANGLE_TOLERANCE: Angle = Angle::from_radians(1e-10);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_default_tolerances() {
        let u = UnitVector2D::X_AXIS;
        assert!(u.equals_within(&Vector2D::new(1.0, 1e-11), DEFAULT_TOLERANCE).unwrap());
        assert!(u.is_perpendicular_to(&UnitVector2D::Y_AXIS, DEFAULT_ANGLE_TOLERANCE));
        assert!(!u.is_parallel_to(&UnitVector2D::Y_AXIS, DEFAULT_ANGLE_TOLERANCE));
    }
}
