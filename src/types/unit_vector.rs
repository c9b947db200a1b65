//! Unit length 2D direction
//!
//! [`UnitVector2D`] can only be obtained through validated paths:
//! [`UnitVector2D::create`] normalizes arbitrary input and rejects the zero
//! vector, while negation, rotation and the axis constants preserve unit
//! length by construction. Operations that cannot keep the invariant
//! (sums, differences, scaling) widen to [`Vector2D`].
//!
//! Parsing is the one exception: [`UnitVector2D::parse`] trusts its input
//! and does not renormalize, so `"2, 0"` parses to `(2, 0)`.

use super::vector::{
    angle_between, components_equal, components_equal_within, dot, hash_components,
    is_perpendicular, signed_angle_between,
};
use super::{Angle, Components2D, Vector2D};
use crate::error::{Result, SpatialError};
use crate::io::text::{format_pair, parse_double_pair, NumberFormat};
use crate::io::xml::{XmlElement, XmlSerializable};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;
use tracing::debug;

/// Vectors shorter than the smallest positive `f32` cannot be normalized
const MIN_NORMALIZABLE_LENGTH: f64 = 1.401_298_464_324_817e-45;

/// A 2D vector of length 1
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "Vector2D", into = "Vector2D")]
pub struct UnitVector2D {
    x: f64,
    y: f64,
}

impl UnitVector2D {
    /// Unit vector along X, `(1, 0)`
    pub const X_AXIS: UnitVector2D = UnitVector2D::from_unit_components(1.0, 0.0);

    /// Unit vector along Y, `(0, 1)`
    pub const Y_AXIS: UnitVector2D = UnitVector2D::from_unit_components(0.0, 1.0);

    /// Components already known to be unit length
    const fn from_unit_components(x: f64, y: f64) -> Self {
        UnitVector2D { x, y }
    }

    /// Create a unit vector pointing along `(x, y)`
    ///
    /// Fails with `InvalidArgument` when the input has (numerically) zero
    /// length or is not finite.
    pub fn create(x: f64, y: f64) -> Result<Self> {
        let length = x.hypot(y);
        if !length.is_finite() || length < MIN_NORMALIZABLE_LENGTH {
            debug!(x, y, length, "cannot normalize vector");
            return Err(SpatialError::InvalidArgument(format!(
                "Cannot create a unit vector from ({}, {}) with length {}",
                x, y, length
            )));
        }
        Ok(UnitVector2D::from_unit_components(x / length, y / length))
    }

    /// Unit vector at `angle` from the X axis
    pub fn from_angle(angle: Angle) -> Self {
        let (sin, cos) = angle.radians().sin_cos();
        UnitVector2D::from_unit_components(cos, sin)
    }

    /// Parse `"x, y"`, `"x; y"` or `"(x, y)"` without renormalizing
    pub fn parse(text: &str) -> Result<Self> {
        UnitVector2D::parse_with(text, &NumberFormat::INVARIANT)
    }

    /// Parse with a specific number format, without renormalizing
    pub fn parse_with(text: &str, format: &NumberFormat) -> Result<Self> {
        let (x, y) = parse_double_pair(text, format)?;
        Ok(UnitVector2D::from_unit_components(x, y))
    }

    /// X component
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Y component
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Widen to a general vector
    pub const fn to_vector_2d(&self) -> Vector2D {
        Vector2D::new(self.x, self.y)
    }

    /// Dot product with another unit vector, clamped to `[-1, 1]`
    ///
    /// Rounding can push the raw sum of two unit vectors just outside the
    /// valid cosine range; the clamp keeps `acos` of the result defined.
    pub fn dot_product(&self, other: &UnitVector2D) -> f64 {
        dot(self, other).clamp(-1.0, 1.0)
    }

    /// Dot product with a general vector, not clamped
    pub fn dot_product_vector(&self, other: &Vector2D) -> f64 {
        dot(self, other)
    }

    /// Unsigned angle to `other`, in `[0°, 180°]`
    pub fn angle_to<T: Components2D>(&self, other: &T) -> Angle {
        angle_between(self, other)
    }

    /// Signed angle to `other`, in `(-180°, 180°]`, positive counter-clockwise
    pub fn signed_angle_to<T: Components2D>(&self, other: &T) -> Angle {
        signed_angle_between(self, other)
    }

    /// Rotate counter-clockwise by `angle`
    pub fn rotate(&self, angle: Angle) -> UnitVector2D {
        let (sin, cos) = angle.radians().sin_cos();
        UnitVector2D::from_unit_components(
            self.x * cos - self.y * sin,
            self.x * sin + self.y * cos,
        )
    }

    /// True if the angle to `other` is below `tolerance`
    ///
    /// Opposite directions are 180° apart and therefore not parallel.
    pub fn is_parallel_to<T: Components2D>(&self, other: &T, tolerance: Angle) -> bool {
        self.angle_to(other) < tolerance
    }

    /// True if the angle to `other` is within `tolerance` of 90°
    pub fn is_perpendicular_to<T: Components2D>(&self, other: &T, tolerance: Angle) -> bool {
        is_perpendicular(self.angle_to(other), tolerance)
    }

    /// `self` scaled by its dot product with `other`
    pub fn project_on(&self, other: &UnitVector2D) -> Vector2D {
        self.dot_product(other) * *self
    }

    /// Multiply by a scalar; the result is no longer unit length
    pub fn scale_by(&self, scalar: f64) -> Vector2D {
        scalar * *self
    }

    /// Unit vector pointing the opposite way
    pub fn negate(&self) -> UnitVector2D {
        -*self
    }

    /// Unit vector rotated +90°, `(-y, x)`
    pub fn orthogonal(&self) -> UnitVector2D {
        UnitVector2D::from_unit_components(-self.y, self.x)
    }

    /// Compare with an open tolerance on each component
    ///
    /// Works across [`Vector2D`] and [`UnitVector2D`]. Fails with
    /// `InvalidArgument` when `tolerance` is negative.
    pub fn equals_within<T: Components2D>(&self, other: &T, tolerance: f64) -> Result<bool> {
        components_equal_within(self, other, tolerance)
    }

    /// Render as `"(x, y)"` using the given number format
    pub fn to_string_with(&self, format: &NumberFormat) -> String {
        format_pair(self.x, self.y, format)
    }
}

impl Components2D for UnitVector2D {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

impl From<UnitVector2D> for Vector2D {
    fn from(unit: UnitVector2D) -> Self {
        unit.to_vector_2d()
    }
}

impl TryFrom<Vector2D> for UnitVector2D {
    type Error = SpatialError;

    fn try_from(vector: Vector2D) -> Result<Self> {
        UnitVector2D::create(vector.x, vector.y)
    }
}

impl PartialEq for UnitVector2D {
    fn eq(&self, other: &UnitVector2D) -> bool {
        components_equal(self, other)
    }
}

impl PartialEq<Vector2D> for UnitVector2D {
    fn eq(&self, other: &Vector2D) -> bool {
        components_equal(self, other)
    }
}

impl PartialEq<UnitVector2D> for Vector2D {
    fn eq(&self, other: &UnitVector2D) -> bool {
        components_equal(self, other)
    }
}

// `create` and `parse` only ever produce finite components.
impl Eq for UnitVector2D {}

impl Hash for UnitVector2D {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_components(self.x, self.y, state);
    }
}

impl Neg for UnitVector2D {
    type Output = UnitVector2D;
    fn neg(self) -> UnitVector2D {
        UnitVector2D::from_unit_components(-self.x, -self.y)
    }
}

/// Clamped dot product
impl Mul for UnitVector2D {
    type Output = f64;
    fn mul(self, other: UnitVector2D) -> f64 {
        self.dot_product(&other)
    }
}

impl Mul<UnitVector2D> for f64 {
    type Output = Vector2D;
    fn mul(self, unit: UnitVector2D) -> Vector2D {
        Vector2D::new(self * unit.x, self * unit.y)
    }
}

impl Mul<f64> for UnitVector2D {
    type Output = Vector2D;
    fn mul(self, scalar: f64) -> Vector2D {
        scalar * self
    }
}

impl Div<f64> for UnitVector2D {
    type Output = Vector2D;
    fn div(self, scalar: f64) -> Vector2D {
        Vector2D::new(self.x / scalar, self.y / scalar)
    }
}

impl Add for UnitVector2D {
    type Output = Vector2D;
    fn add(self, other: UnitVector2D) -> Vector2D {
        self.to_vector_2d() + other.to_vector_2d()
    }
}

impl Add<Vector2D> for UnitVector2D {
    type Output = Vector2D;
    fn add(self, other: Vector2D) -> Vector2D {
        self.to_vector_2d() + other
    }
}

impl Add<UnitVector2D> for Vector2D {
    type Output = Vector2D;
    fn add(self, other: UnitVector2D) -> Vector2D {
        self + other.to_vector_2d()
    }
}

impl Sub for UnitVector2D {
    type Output = Vector2D;
    fn sub(self, other: UnitVector2D) -> Vector2D {
        self.to_vector_2d() - other.to_vector_2d()
    }
}

impl Sub<Vector2D> for UnitVector2D {
    type Output = Vector2D;
    fn sub(self, other: Vector2D) -> Vector2D {
        self.to_vector_2d() - other
    }
}

impl Sub<UnitVector2D> for Vector2D {
    type Output = Vector2D;
    fn sub(self, other: UnitVector2D) -> Vector2D {
        self - other.to_vector_2d()
    }
}

impl fmt::Display for UnitVector2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let format = NumberFormat {
            precision: f.precision(),
            ..NumberFormat::INVARIANT
        };
        f.write_str(&self.to_string_with(&format))
    }
}

impl FromStr for UnitVector2D {
    type Err = SpatialError;

    fn from_str(s: &str) -> Result<Self> {
        UnitVector2D::parse(s)
    }
}

impl XmlSerializable for UnitVector2D {
    const ELEMENT_NAME: &'static str = "UnitVector2D";

    fn to_xml_element(&self) -> XmlElement {
        XmlElement::new(Self::ELEMENT_NAME)
            .with_number("X", self.x)
            .with_number("Y", self.y)
    }

    fn from_xml_element(element: &XmlElement) -> Result<Self> {
        let x = element.read_number("X")?;
        let y = element.read_number("Y")?;
        UnitVector2D::create(x, y)
    }
}
