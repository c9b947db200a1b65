//! Value types: angles, vectors and unit vectors

mod angle;
mod euler_angles;
mod unit_vector;
mod vector;

pub use angle::{Angle, AngleUnit};
pub use euler_angles::EulerAngles;
pub use unit_vector::UnitVector2D;
pub use vector::{Components2D, Vector2D};
