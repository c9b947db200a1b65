//! General 2D vector and the component helpers shared with unit vectors

use super::{Angle, UnitVector2D};
use crate::error::{Result, SpatialError};
use crate::io::text::{format_pair, parse_double_pair, NumberFormat};
use crate::io::xml::{XmlElement, XmlSerializable};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hasher;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

/// Anything exposing an X and a Y component
///
/// Equality and the angle algebra are defined on components alone, so
/// [`Vector2D`] and [`UnitVector2D`] compare and combine freely.
pub trait Components2D {
    /// X component
    fn x(&self) -> f64;
    /// Y component
    fn y(&self) -> f64;
}

/// Exact componentwise equality
pub(crate) fn components_equal<A, B>(a: &A, b: &B) -> bool
where
    A: Components2D + ?Sized,
    B: Components2D + ?Sized,
{
    a.x() == b.x() && a.y() == b.y()
}

/// Componentwise equality with an open tolerance bound
pub(crate) fn components_equal_within<A, B>(a: &A, b: &B, tolerance: f64) -> Result<bool>
where
    A: Components2D + ?Sized,
    B: Components2D + ?Sized,
{
    if tolerance < 0.0 {
        return Err(SpatialError::InvalidArgument(format!(
            "Tolerance must not be negative, got {}",
            tolerance
        )));
    }
    Ok((a.x() - b.x()).abs() < tolerance && (a.y() - b.y()).abs() < tolerance)
}

/// Order sensitive hash of two components; `-0.0` hashes like `0.0`
pub(crate) fn hash_components<H: Hasher>(x: f64, y: f64, state: &mut H) {
    fn bits(value: f64) -> u64 {
        if value == 0.0 {
            0
        } else {
            value.to_bits()
        }
    }
    state.write_u64(bits(x).wrapping_mul(397) ^ bits(y));
}

pub(crate) fn dot<A, B>(a: &A, b: &B) -> f64
where
    A: Components2D + ?Sized,
    B: Components2D + ?Sized,
{
    a.x() * b.x() + a.y() * b.y()
}

/// Scalar 2D cross product `a.x * b.y - b.x * a.y`
pub(crate) fn cross<A, B>(a: &A, b: &B) -> f64
where
    A: Components2D + ?Sized,
    B: Components2D + ?Sized,
{
    a.x() * b.y() - b.x() * a.y()
}

/// Unsigned angle from `a` to `b`, in `[0°, 180°]`
pub(crate) fn angle_between<A, B>(a: &A, b: &B) -> Angle
where
    A: Components2D + ?Sized,
    B: Components2D + ?Sized,
{
    Angle::from_radians(cross(a, b).abs().atan2(dot(a, b)))
}

/// Signed angle from `a` to `b`, in `(-180°, 180°]`
pub(crate) fn signed_angle_between<A, B>(a: &A, b: &B) -> Angle
where
    A: Components2D + ?Sized,
    B: Components2D + ?Sized,
{
    // Adding 0.0 turns -0.0 into 0.0 so exact opposites give +180°.
    Angle::from_radians((cross(a, b) + 0.0).atan2(dot(a, b)))
}

pub(crate) fn is_perpendicular(angle: Angle, tolerance: Angle) -> bool {
    (angle.radians() - std::f64::consts::FRAC_PI_2).abs() < tolerance.radians()
}

/// 2D vector
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector2D {
    /// Create a new 2D vector
    pub const fn new(x: f64, y: f64) -> Self {
        Vector2D { x, y }
    }

    /// Zero vector
    pub const ZERO: Vector2D = Vector2D::new(0.0, 0.0);

    /// Unit X vector
    pub const X_AXIS: Vector2D = Vector2D::new(1.0, 0.0);

    /// Unit Y vector
    pub const Y_AXIS: Vector2D = Vector2D::new(0.0, 1.0);

    /// Create a vector from a radius and the angle to the X axis
    pub fn from_polar(radius: f64, angle: Angle) -> Result<Self> {
        if radius < 0.0 {
            return Err(SpatialError::InvalidArgument(format!(
                "Radius must not be negative, got {}",
                radius
            )));
        }
        let (sin, cos) = angle.radians().sin_cos();
        Ok(Vector2D::new(radius * cos, radius * sin))
    }

    /// Calculate the length (magnitude) of the vector
    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Calculate the squared length
    pub fn length_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Normalize the vector; fails for the zero vector
    pub fn normalize(&self) -> Result<UnitVector2D> {
        UnitVector2D::create(self.x, self.y)
    }

    /// Dot product
    pub fn dot_product(&self, other: &Vector2D) -> f64 {
        dot(self, other)
    }

    /// Cross product (returns scalar for 2D)
    pub fn cross_product(&self, other: &Vector2D) -> f64 {
        cross(self, other)
    }

    /// Unsigned angle to another vector, in `[0°, 180°]`
    pub fn angle_to<T: Components2D>(&self, other: &T) -> Angle {
        angle_between(self, other)
    }

    /// Signed angle to another vector, positive counter-clockwise
    pub fn signed_angle_to<T: Components2D>(&self, other: &T) -> Angle {
        signed_angle_between(self, other)
    }

    /// Rotate counter-clockwise by `angle`
    pub fn rotate(&self, angle: Angle) -> Vector2D {
        let (sin, cos) = angle.radians().sin_cos();
        Vector2D::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    /// True if the angle to `other` is below `tolerance`
    pub fn is_parallel_to<T: Components2D>(&self, other: &T, tolerance: Angle) -> bool {
        self.angle_to(other) < tolerance
    }

    /// True if the angle to `other` is within `tolerance` of 90°
    pub fn is_perpendicular_to<T: Components2D>(&self, other: &T, tolerance: Angle) -> bool {
        is_perpendicular(self.angle_to(other), tolerance)
    }

    /// Projection of this vector onto a direction
    pub fn project_on(&self, direction: &UnitVector2D) -> Vector2D {
        dot(self, direction) * direction.to_vector_2d()
    }

    /// Multiply by a scalar
    pub fn scale_by(&self, scalar: f64) -> Vector2D {
        scalar * *self
    }

    /// Vector pointing the opposite way
    pub fn negate(&self) -> Vector2D {
        -*self
    }

    /// Vector rotated +90°, `(-y, x)`
    pub fn orthogonal(&self) -> Vector2D {
        Vector2D::new(-self.y, self.x)
    }

    /// Compare with an open tolerance on each component
    ///
    /// Works across [`Vector2D`] and [`UnitVector2D`]. Fails with
    /// `InvalidArgument` when `tolerance` is negative.
    pub fn equals_within<T: Components2D>(&self, other: &T, tolerance: f64) -> Result<bool> {
        components_equal_within(self, other, tolerance)
    }

    /// Parse `"x, y"`, `"x; y"` or `"(x, y)"`
    pub fn parse(text: &str) -> Result<Vector2D> {
        Vector2D::parse_with(text, &NumberFormat::INVARIANT)
    }

    /// Parse with a specific number format
    pub fn parse_with(text: &str, format: &NumberFormat) -> Result<Vector2D> {
        let (x, y) = parse_double_pair(text, format)?;
        Ok(Vector2D::new(x, y))
    }

    /// Render as `"(x, y)"` using the given number format
    pub fn to_string_with(&self, format: &NumberFormat) -> String {
        format_pair(self.x, self.y, format)
    }
}

impl Components2D for Vector2D {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

impl PartialEq for Vector2D {
    fn eq(&self, other: &Vector2D) -> bool {
        components_equal(self, other)
    }
}

impl Add for Vector2D {
    type Output = Vector2D;
    fn add(self, other: Vector2D) -> Vector2D {
        Vector2D::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vector2D {
    type Output = Vector2D;
    fn sub(self, other: Vector2D) -> Vector2D {
        Vector2D::new(self.x - other.x, self.y - other.y)
    }
}

/// Dot product
impl Mul for Vector2D {
    type Output = f64;
    fn mul(self, other: Vector2D) -> f64 {
        self.dot_product(&other)
    }
}

impl Mul<f64> for Vector2D {
    type Output = Vector2D;
    fn mul(self, scalar: f64) -> Vector2D {
        Vector2D::new(self.x * scalar, self.y * scalar)
    }
}

impl Mul<Vector2D> for f64 {
    type Output = Vector2D;
    fn mul(self, v: Vector2D) -> Vector2D {
        v * self
    }
}

impl Div<f64> for Vector2D {
    type Output = Vector2D;
    fn div(self, scalar: f64) -> Vector2D {
        Vector2D::new(self.x / scalar, self.y / scalar)
    }
}

impl Neg for Vector2D {
    type Output = Vector2D;
    fn neg(self) -> Vector2D {
        Vector2D::new(-self.x, -self.y)
    }
}

impl fmt::Display for Vector2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let format = NumberFormat {
            precision: f.precision(),
            ..NumberFormat::INVARIANT
        };
        f.write_str(&self.to_string_with(&format))
    }
}

impl FromStr for Vector2D {
    type Err = SpatialError;

    fn from_str(s: &str) -> Result<Self> {
        Vector2D::parse(s)
    }
}

impl XmlSerializable for Vector2D {
    const ELEMENT_NAME: &'static str = "Vector2D";

    fn to_xml_element(&self) -> XmlElement {
        XmlElement::new(Self::ELEMENT_NAME)
            .with_number("X", self.x)
            .with_number("Y", self.y)
    }

    fn from_xml_element(element: &XmlElement) -> Result<Self> {
        let x = element.read_number("X")?;
        let y = element.read_number("Y")?;
        Ok(Vector2D::new(x, y))
    }
}
